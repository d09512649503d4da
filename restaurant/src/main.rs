use restaurant::{Restaurant, display_map, setup_environment, write_csv_file};

fn main() -> anyhow::Result<()> {
    // .env, configuration, logging
    let config = setup_environment();

    tracing::info!("Restaurant menu starting...");

    let mut restaurant = Restaurant::new();
    match &config.import_path {
        Some(path) => {
            restaurant.load_csv_file(path)?;
        }
        None => restaurant.populate(),
    }

    display_map(restaurant.dishes());

    if let Some(path) = &config.export_path
        && !write_csv_file(path, restaurant.dishes())
    {
        anyhow::bail!("Menu export to {} failed", path.display());
    }

    Ok(())
}
