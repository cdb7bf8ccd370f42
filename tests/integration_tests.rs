use small_utils::{
    concatenate, day_type, filter_by_rating, format_case, most_expensive, process_value, Car, Day,
    Describe, Product, RatedItem, Value, Vehicle,
};

#[test]
fn test_format_case_matches_std_casing() {
    for input in ["", "abc", "ABC", "Hello, World!", "ünïcödé 42"] {
        assert_eq!(format_case(input, Some(true)), input.to_uppercase());
        assert_eq!(format_case(input, Some(false)), input.to_lowercase());
        assert_eq!(format_case(input, None), input.to_lowercase());
    }
}

#[test]
fn test_filter_by_rating_is_ordered_subsequence() {
    let items = vec![
        RatedItem::new("A", 1.0),
        RatedItem::new("B", 4.0),
        RatedItem::new("C", 4.5),
        RatedItem::new("D", 3.9),
        RatedItem::new("E", 4.1),
    ];
    let kept = filter_by_rating(&items);

    assert!(kept.iter().all(|item| item.rating >= 4.0));
    let mut cursor = items.iter();
    for item in &kept {
        assert!(cursor.any(|candidate| candidate == item), "{} out of order", item.title);
    }
    assert_eq!(kept.len(), 3);
}

#[test]
fn test_concatenate_two_sequences() {
    let a = vec!["x".to_string(), "y".to_string()];
    let b = vec!["z".to_string()];
    let merged = concatenate(vec![a.clone(), b.clone()]);

    assert_eq!(merged.len(), a.len() + b.len());
    assert_eq!(&merged[..a.len()], a.as_slice());
    assert_eq!(&merged[a.len()..], b.as_slice());

    let nothing: Vec<String> = concatenate(Vec::<Vec<String>>::new());
    assert!(nothing.is_empty());
    assert_eq!(small_utils::concat_all![a, b].len(), 3);
}

#[test]
fn test_car_info_and_model() {
    let car = Car::new("Toyota", 2020, "Corolla");
    assert_eq!(car.info(), "Make:Toyota, Year: 2020");
    assert_eq!(car.model_info(), "Model: Corolla");

    fn describe_all(items: &[&dyn Describe]) -> Vec<String> {
        items.iter().map(|item| item.info()).collect()
    }
    let vehicle = Vehicle::new("Toyota", 2020);
    let mixed: [&dyn Describe; 2] = [&vehicle, &car];
    let infos = describe_all(&mixed);
    assert_eq!(infos[0], infos[1]);
}

#[test]
fn test_process_value_examples() {
    assert_eq!(process_value(&Value::from("hello")), 5.0);
    assert_eq!(process_value(&Value::from(3)), 6.0);
    assert_eq!(process_value(&Value::from(-2)), -4.0);
}

#[test]
fn test_most_expensive_examples() {
    assert!(most_expensive(&[]).is_none());

    let products = vec![
        Product::new("A", 10.0),
        Product::new("B", 20.0),
        Product::new("C", 20.0),
    ];
    let best = most_expensive(&products).expect("non-empty input");
    assert_eq!(best.name, "B");
    assert_eq!(products.len(), 3);
}

#[test]
fn test_day_type_for_every_day() {
    let weekend: Vec<Day> = Day::ALL
        .into_iter()
        .filter(|day| day_type(*day) == "Weekend")
        .collect();
    assert_eq!(weekend, vec![Day::Saturday, Day::Sunday]);

    let weekdays = Day::ALL
        .into_iter()
        .filter(|day| day_type(*day) == "Weekday")
        .count();
    assert_eq!(weekdays, 5);
}
