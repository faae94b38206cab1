//! Laser descriptions and ratings loaded from JSON configuration

#![cfg(feature = "serde")]

mod common;

use eyeguard_core::{
    compute_required_filters, LaserDescription, LaserType, MarkingOptions, Quantity, RequiredFilters,
    Robustness, Standard,
};

const GREEN_DPSS: &str = r#"{
    "wavelength": { "value": 5.32e-7, "dimension": { "mass": 0, "length": 1, "time": 0 } },
    "laser_type": "D",
    "beam_waist": { "value": 0.002, "dimension": { "mass": 0, "length": 1, "time": 0 } },
    "average_power": { "value": 1.0, "dimension": { "mass": 1, "length": 2, "time": -3 } }
}"#;

#[test]
fn test_description_from_json() {
    let laser: LaserDescription = serde_json::from_str(GREEN_DPSS).unwrap();

    assert_eq!(laser.laser_type, LaserType::Continuous);
    assert!(laser.pulse_energy.is_none());
    // Viewing defaults on when not configured
    assert!(laser.needs_direct_view);

    let filters = compute_required_filters(&laser).unwrap();
    let rendered: Vec<&str> = filters.iter().map(|marking| marking.as_str()).collect();
    assert_eq!(rendered, ["1W 1J 532 RB3", "532 D LB5"]);
}

#[test]
fn test_wrong_dimension_in_config_is_rejected() {
    // Power given where a length belongs
    let json = GREEN_DPSS.replacen(
        r#""beam_waist": { "value": 0.002, "dimension": { "mass": 0, "length": 1, "time": 0 } }"#,
        r#""beam_waist": { "value": 0.002, "dimension": { "mass": 1, "length": 2, "time": -3 } }"#,
        1,
    );
    assert_ne!(json, GREEN_DPSS);
    let laser: LaserDescription = serde_json::from_str(&json).unwrap();
    assert!(compute_required_filters(&laser).is_err());
}

#[test]
fn test_description_round_trip() {
    let original = common::q_switched_green().laser;
    let json = serde_json::to_string(&original).unwrap();

    assert!(json.contains(r#""laser_type":"R""#));

    let restored: LaserDescription = serde_json::from_str(&json).unwrap();
    assert_eq!(restored.laser_type, original.laser_type);
    assert_eq!(
        compute_required_filters(&restored).unwrap(),
        compute_required_filters(&original).unwrap()
    );
}

#[test]
fn test_marking_options_from_json() {
    let options: MarkingOptions =
        serde_json::from_str(r#"{ "manufacturer": "YL", "ce": true, "robustness": "F" }"#).unwrap();

    assert_eq!(options.manufacturer.as_str(), "YL");
    assert!(!options.din);
    assert!(options.ce);
    assert_eq!(options.robustness, Some(Robustness::LowEnergyImpact));
}

#[test]
fn test_rating_serializes_for_reports() {
    let filters = compute_required_filters(&common::helium_neon().laser).unwrap();
    let value = serde_json::to_value(&filters).unwrap();

    assert_eq!(value["en207"]["standard"], "En207");
    assert_eq!(value["en207"]["level"], 3);
    assert_eq!(value["en208"]["text"], "1W 1J 633 RB1");

    let restored: RequiredFilters = serde_json::from_value(value).unwrap();
    assert_eq!(filters, restored);
    assert_eq!(filters.en208.map(|marking| marking.standard), Some(Standard::En208));
}

#[test]
fn test_quantity_serializes_in_si() {
    let json = serde_json::to_string(&Quantity::millimeters(2.0)).unwrap();
    assert_eq!(json, r#"{"value":0.002,"dimension":{"mass":0,"length":1,"time":0}}"#);
}
