use super::*;

#[test]
fn missing_block_uses_defaults() {
    assert_eq!(resolve_config(None), BoardConfig::default());
    assert_eq!(resolve_config(Some("   \n")), BoardConfig::default());
}

#[test]
fn partial_block_overrides_named_fields() {
    let config = resolve_config(Some(r#"{ "num_levels": 4, "pan_step": 48 }"#));
    assert_eq!(config.num_levels, 4);
    assert!((config.pan_step - 48.0).abs() < f64::EPSILON);
    assert!((config.card_width - BoardConfig::default().card_width).abs() < f64::EPSILON);
}

#[test]
fn malformed_block_falls_back() {
    assert_eq!(resolve_config(Some("{ not json")), BoardConfig::default());
}

#[test]
fn invalid_values_fall_back() {
    assert_eq!(resolve_config(Some(r#"{ "card_width": -1 }"#)), BoardConfig::default());
}
