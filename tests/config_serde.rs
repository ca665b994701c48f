//! Configuration files: JSON round trips and validation after loading.

#![cfg(feature = "serde")]

use fenced::{ChunkConfig, ChunkMode, Error, Guard, SmartChunkConfig};

#[test]
fn config_round_trips_through_json() {
    let config = ChunkConfig::new(ChunkMode::Paragraphs)
        .with_sizes(800, 1200)
        .unwrap()
        .with_smart(SmartChunkConfig {
            list_items: false,
            ..SmartChunkConfig::default()
        });

    let json = serde_json::to_string(&config).unwrap();
    let back: ChunkConfig = serde_json::from_str(&json).unwrap();

    assert_eq!(back, config);
}

#[test]
fn modes_are_lowercase() {
    assert_eq!(
        serde_json::to_string(&ChunkMode::Smart).unwrap(),
        "\"smart\""
    );
    assert_eq!(
        serde_json::from_str::<ChunkMode>("\"sentences\"").unwrap(),
        ChunkMode::Sentences
    );
    assert_eq!(serde_json::to_string(&Guard::Table).unwrap(), "\"table\"");
}

#[test]
fn missing_fields_take_defaults() {
    let config: ChunkConfig = serde_json::from_str(r#"{"mode": "characters"}"#).unwrap();
    assert_eq!(config.mode, ChunkMode::Characters);
    assert_eq!(config.capacity.desired(), 1500);
    assert_eq!(config.capacity.max(), 2000);
    assert!(config.smart.code_blocks);
}

#[test]
fn loaded_config_is_validated() {
    let json = r#"{"mode": "smart", "capacity": {"desired": 0, "max": 100}}"#;
    let config: ChunkConfig = serde_json::from_str(json).unwrap();
    assert!(matches!(config.validate(), Err(Error::InvalidChunkSize(0))));

    let json = r#"{"capacity": {"desired": 300, "max": 100}}"#;
    let config: ChunkConfig = serde_json::from_str(json).unwrap();
    assert!(matches!(config.validate(), Err(Error::Capacity(_))));
}
