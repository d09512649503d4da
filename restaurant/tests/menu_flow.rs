//! End-to-end menu flows: populate, edit, export, reload

use restaurant::{
    DishIdSequence, MenuError, Restaurant, read_csv_file, render_map, write_csv_file,
};

#[test]
fn test_example_menu_export() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("menu.csv");

    let mut restaurant = Restaurant::new();
    restaurant.populate();

    assert!(write_csv_file(&path, restaurant.dishes()));
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "1,tomato soup,2.50,false\n2,pasta bolognese,4.00,false\n3,greek salad,1.25,true\n"
    );
}

#[test]
fn test_export_stoplist_only() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("stoplist.csv");

    let mut restaurant = Restaurant::new();
    restaurant.populate();
    assert!(restaurant.update_stoplist(1, true).unwrap());

    assert!(write_csv_file(&path, &restaurant.available_or_stoplist(true)));

    let records = read_csv_file(&path).unwrap();
    let ids: Vec<_> = records.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 3]);
    assert!(records.iter().all(|r| r.is_stopped));
}

#[test]
fn test_round_trip_matches_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("menu.csv");

    let mut restaurant = Restaurant::new();
    restaurant.populate();
    restaurant.add_dish("borscht", 3.333, false);
    restaurant.update_price(2, 4.1).unwrap();

    assert!(write_csv_file(&path, restaurant.dishes()));
    let records = read_csv_file(&path).unwrap();

    assert_eq!(records.len(), restaurant.len());
    for (record, (id, dish)) in records.iter().zip(restaurant.dishes()) {
        assert_eq!(record.id, *id);
        assert_eq!(record.name, dish.name());
        // Prices are exported with two decimals
        assert!((record.price - dish.price()).abs() < 0.005);
        assert_eq!(record.is_stopped, dish.is_stopped());
    }
    assert_eq!(records[3].price, 3.33);
}

#[test]
fn test_load_csv_continues_numbering() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("menu.csv");
    std::fs::write(&path, "4,soup,2.50,false\n10,salad,1.25,true\n").unwrap();

    let mut restaurant = Restaurant::new();
    restaurant.populate();
    assert_eq!(restaurant.load_csv_file(&path).unwrap(), 2);

    assert_eq!(
        restaurant.dishes().keys().copied().collect::<Vec<_>>(),
        vec![4, 10]
    );
    assert_eq!(restaurant.total_price(), 3.75);

    assert!(restaurant.add_dish("tea", 0.5, false));
    assert!(restaurant.dish(11).is_ok());
}

#[test]
fn test_load_csv_error_keeps_menu() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.csv");
    std::fs::write(&path, "1,soup,2.50,false\n2,salad\n").unwrap();

    let mut restaurant = Restaurant::new();
    restaurant.populate();

    let err = restaurant.load_csv_file(&path).unwrap_err();
    assert!(matches!(err, MenuError::Csv { line: 2, .. }));
    assert_eq!(restaurant.len(), 3);

    let missing = dir.path().join("nope.csv");
    assert!(matches!(
        restaurant.load_csv_file(&missing),
        Err(MenuError::Io(_))
    ));
}

#[test]
fn test_load_csv_rejects_duplicate_ids() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("duplicates.csv");
    std::fs::write(&path, "1,soup,2.50,false\n2,salad,1.25,true\n1,stew,3.00,false\n").unwrap();

    let mut restaurant = Restaurant::new();
    restaurant.populate();

    assert!(matches!(
        restaurant.load_csv_file(&path),
        Err(MenuError::DuplicateDish(1))
    ));
    assert_eq!(restaurant.len(), 3);
    assert_eq!(restaurant.dish(1).unwrap().name(), "tomato soup");
}

#[test]
fn test_injected_sequence() {
    let mut restaurant = Restaurant::with_sequence(DishIdSequence::starting_after(100));
    restaurant.populate();

    assert_eq!(
        restaurant.dishes().keys().copied().collect::<Vec<_>>(),
        vec![101, 102, 103]
    );
    assert!(render_map(restaurant.dishes()).starts_with("\tDish 101\nID: 101\n"));
}

#[test]
fn test_full_lifecycle() {
    let mut restaurant = Restaurant::new();
    assert!(restaurant.add_dish("tomato soup", 2.5, false));
    assert!(restaurant.add_dish("greek salad", 1.25, false));

    assert!(restaurant.update_stoplist(2, true).unwrap());
    assert!(!restaurant.update_stoplist(2, true).unwrap());
    assert_eq!(restaurant.available_or_stoplist(false).len(), 1);

    assert!(restaurant.delete_dish(1));
    assert!(!restaurant.delete_dish(1));
    assert!(matches!(
        restaurant.update_stoplist(1, false),
        Err(MenuError::DishNotFound(1))
    ));

    assert_eq!(restaurant.total_price(), 1.25);
    restaurant.clear();
    assert!(restaurant.is_empty());
    assert_eq!(restaurant.total_price(), 0.0);
}
