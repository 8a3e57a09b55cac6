use eventscout_core::{Item, ItemFields};

use super::*;

#[test]
fn parses_search_command() {
    let cli = Cli::try_parse_from([
        "eventscout",
        "search",
        "--lat",
        "29.682684",
        "--lon",
        "-95.295410",
        "--keyword",
        "rodeo",
    ])
    .expect("expected valid cli args");

    match cli.command {
        Commands::Search { lat, lon, keyword } => {
            assert!((lat - 29.682_684).abs() < f64::EPSILON);
            assert!((lon + 95.295_41).abs() < f64::EPSILON);
            assert_eq!(keyword.as_deref(), Some("rodeo"));
        }
        other @ Commands::Geohash { .. } => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn search_keyword_is_optional() {
    let cli = Cli::try_parse_from(["eventscout", "search", "--lat", "51.5", "--lon", "-0.12"])
        .expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Commands::Search { keyword: None, .. }
    ));
}

#[test]
fn search_requires_coordinates() {
    assert!(Cli::try_parse_from(["eventscout", "search", "--lat", "51.5"]).is_err());
}

#[test]
fn geohash_precision_defaults_to_search_precision() {
    let cli = Cli::try_parse_from(["eventscout", "geohash", "--lat", "0", "--lon", "0"])
        .expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Commands::Geohash { precision: 9, .. }
    ));
}

#[test]
fn describe_geohash_prints_hash_and_cell_center() {
    assert_eq!(describe_geohash(0.0, 0.0, 1).unwrap(), "s 22.500000 22.500000");
    assert_eq!(
        describe_geohash(0.0, 0.0, 5).unwrap(),
        "s0000 0.021973 0.021973"
    );
}

#[test]
fn describe_geohash_accepts_long_precision() {
    let line = describe_geohash(29.682_684, -95.295_41, 13).unwrap();
    let hash = line.split(' ').next().unwrap();
    assert_eq!(hash.len(), 13);
    assert!(hash.starts_with("9vk0ze840"), "{line}");
}

#[test]
fn describe_geohash_rejects_bad_input() {
    assert!(matches!(
        describe_geohash(0.0, 0.0, 0),
        Err(GeohashError::InvalidPrecision(0))
    ));
    assert!(matches!(
        describe_geohash(95.0, 0.0, 9),
        Err(GeohashError::LatitudeOutOfRange(_))
    ));
}

#[test]
fn missing_subcommand_is_an_error() {
    assert!(Cli::try_parse_from(["eventscout"]).is_err());
}

#[test]
fn write_items_emits_one_json_object_per_line() {
    let items = vec![
        Item::new(ItemFields {
            name: Some("First".to_string()),
            ..ItemFields::default()
        }),
        Item::new(ItemFields {
            item_id: Some("b".to_string()),
            rating: Some(0.0),
            ..ItemFields::default()
        }),
    ];

    let mut buf = Vec::new();
    search::write_items(&mut buf, &items).expect("write should succeed");
    let text = String::from_utf8(buf).expect("utf-8 output");
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], r#"{"name":"First","categories":[]}"#);
    assert_eq!(lines[1], r#"{"item_id":"b","rating":0.0,"categories":[]}"#);
}
