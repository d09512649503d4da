//! CSV export of a dish map
//!
//! One line per dish, no header:
//!
//! ```text
//! 1,tomato soup,2.50,false
//! 3,greek salad,1.25,true
//! ```
//!
//! Names are written as-is; commas inside names are not supported.

use crate::store::DishMap;
use shared::money::format_price;
use shared::{Dish, DishId, MenuError, MenuResult};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use tracing::{error, info};

/// One parsed line of a CSV export
#[derive(Debug, Clone, PartialEq)]
pub struct DishRecord {
    pub id: DishId,
    pub name: String,
    pub price: f64,
    pub is_stopped: bool,
}

impl DishRecord {
    pub fn into_dish(self) -> Dish {
        Dish::with_id(self.id, self.name, self.price, self.is_stopped)
    }
}

impl From<&Dish> for DishRecord {
    fn from(dish: &Dish) -> Self {
        Self {
            id: dish.id(),
            name: dish.name().to_string(),
            price: dish.price(),
            is_stopped: dish.is_stopped(),
        }
    }
}

/// Format one CSV line (without the trailing newline)
fn csv_line(id: DishId, dish: &Dish) -> String {
    format!(
        "{},{},{},{}",
        id,
        dish.name(),
        format_price(dish.price()),
        dish.is_stopped()
    )
}

/// Write `dishes` to `path`, overwriting any existing file
pub fn try_write_csv_file(path: impl AsRef<Path>, dishes: &DishMap) -> MenuResult<()> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);

    for (id, dish) in dishes {
        writeln!(writer, "{}", csv_line(*id, dish))?;
    }
    writer.flush()?;

    info!(path = %path.display(), count = dishes.len(), "Menu exported to CSV");
    Ok(())
}

/// Write `dishes` to `path`; `false` if anything went wrong
///
/// Failures are logged rather than returned. The file is closed on every
/// path when the writer is dropped.
pub fn write_csv_file(path: impl AsRef<Path>, dishes: &DishMap) -> bool {
    let path = path.as_ref();
    match try_write_csv_file(path, dishes) {
        Ok(()) => true,
        Err(e) => {
            error!(path = %path.display(), error = %e, "There was a problem writing to the CSV file");
            false
        }
    }
}

/// Parse a single CSV line (1-based `line` used for error reporting)
fn parse_line(line: usize, text: &str) -> MenuResult<DishRecord> {
    let fields: Vec<&str> = text.split(',').collect();
    let [id, name, price, is_stopped] = fields.as_slice() else {
        return Err(MenuError::csv(
            line,
            format!("expected 4 fields, got {}", fields.len()),
        ));
    };

    let id = id
        .trim()
        .parse::<DishId>()
        .map_err(|_| MenuError::csv(line, format!("invalid id: {}", id)))?;
    let price = price
        .trim()
        .parse::<f64>()
        .map_err(|_| MenuError::csv(line, format!("invalid price: {}", price)))?;
    let is_stopped = is_stopped
        .trim()
        .parse::<bool>()
        .map_err(|_| MenuError::csv(line, format!("invalid stop flag: {}", is_stopped)))?;

    Ok(DishRecord {
        id,
        name: name.to_string(),
        price,
        is_stopped,
    })
}

/// Read a CSV export back into records, in file order
///
/// Blank lines are skipped.
pub fn read_csv_file(path: impl AsRef<Path>) -> MenuResult<Vec<DishRecord>> {
    let reader = BufReader::new(File::open(path)?);
    let mut records = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        records.push(parse_line(index + 1, &line)?);
    }

    Ok(records)
}
