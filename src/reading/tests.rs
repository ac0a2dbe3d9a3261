use super::*;
use chrono::NaiveDateTime;

#[test]
fn test_generated_fields_within_bounds() {
    for _ in 0..1000 {
        let reading = Reading::generate();

        assert!((20..=220).contains(&reading.pm25));
        assert!((10..=110).contains(&reading.no2));
        assert!((20..=70).contains(&reading.co));
        assert!((50..=250).contains(&reading.aqi));
        assert!((50..=200).contains(&reading.indoor.pm25));
        assert!((20..=100).contains(&reading.indoor.no2));
        assert!((100..=400).contains(&reading.outdoor.pm25));
        assert!((30..=150).contains(&reading.outdoor.no2));
    }
}

#[test]
fn test_location_and_status_from_fixed_sets() {
    let zones = ["Nairobi CBD", "Westlands", "Karen", "Eastlands"];
    let labels = ["Good", "Moderate", "Unhealthy", "Hazardous"];

    for _ in 0..1000 {
        let reading = Reading::generate();
        let value = serde_json::to_value(&reading).unwrap();

        let location = value["location"].as_str().unwrap();
        assert!(zones.contains(&location), "unexpected zone {location}");

        let status = value["status"].as_str().unwrap();
        assert!(labels.contains(&status), "unexpected status {status}");
    }
}

#[test]
fn test_every_zone_and_status_is_reachable() {
    let mut zones_seen = std::collections::HashSet::new();
    let mut labels_seen = std::collections::HashSet::new();

    for _ in 0..1000 {
        let reading = Reading::generate();
        zones_seen.insert(format!("{:?}", reading.location));
        labels_seen.insert(format!("{:?}", reading.status));
    }

    assert_eq!(zones_seen.len(), Zone::ALL.len());
    assert_eq!(labels_seen.len(), Severity::ALL.len());
}

#[test]
fn test_sequential_timestamps_non_decreasing() {
    let mut previous = Reading::generate().timestamp;

    for _ in 0..100 {
        let reading = Reading::generate();
        assert!(reading.timestamp >= previous);
        previous = reading.timestamp;
    }
}

#[test]
fn test_timestamp_serializes_with_second_precision() {
    let reading = Reading::generate();
    let value = serde_json::to_value(&reading).unwrap();
    let timestamp = value["timestamp"].as_str().unwrap();

    // e.g. 2025-03-14T09:26:53Z — no fractional seconds, no offset
    assert_eq!(timestamp.len(), 20);
    assert!(timestamp.ends_with('Z'));
    NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%dT%H:%M:%SZ")
        .expect("timestamp should be ISO-8601 with second precision");
}

#[test]
fn test_zone_wire_names() {
    assert_eq!(
        serde_json::to_value(Zone::NairobiCbd).unwrap(),
        serde_json::json!("Nairobi CBD")
    );
    assert_eq!(
        serde_json::to_value(Zone::Westlands).unwrap(),
        serde_json::json!("Westlands")
    );
}
