//! Console rendering of a dish map

use crate::store::DishMap;

/// Render each dish as `\tDish <id>` followed by its multi-line description
pub fn render_map(dishes: &DishMap) -> String {
    dishes
        .iter()
        .map(|(id, dish)| format!("\tDish {}\n{}\n", id, dish))
        .collect()
}

/// Print a dish map to stdout
pub fn display_map(dishes: &DishMap) {
    print!("{}", render_map(dishes));
}
