use super::*;

#[test]
fn defaults_match_reference_timings() {
    let config = SiteConfig::default();
    assert_eq!(config.initial_theme, ThemeState::Dark);
    assert_eq!(config.reveal.stagger(), StaggerSpec::new(200, 100));
    assert_eq!(config.reveal.item_duration_ms, 600);
    assert_eq!(config.contact.settle_delay_ms, 3000);
    assert_eq!(config.reveal.policy(), RevealPolicy::default());
}

#[test]
fn empty_object_yields_defaults() {
    let config = SiteConfig::from_json("{}").expect("empty config");
    assert_eq!(config, SiteConfig::default());
}

#[test]
fn partial_override_keeps_other_defaults() {
    let config = SiteConfig::from_json(r#"{"initial_theme":"light","reveal":{"stagger_ms":50}}"#).expect("config");
    assert_eq!(config.initial_theme, ThemeState::Light);
    assert_eq!(config.reveal.stagger_ms, 50);
    assert_eq!(config.reveal.delay_children_ms, 200);
    assert_eq!(config.contact.settle_delay_ms, 3000);
}

#[test]
fn policy_carries_amount_and_margin() {
    let config = SiteConfig::from_json(r#"{"reveal":{"amount":0.25,"root_margin_px":-40}}"#).expect("config");
    let policy = config.reveal.policy();
    assert!((policy.amount - 0.25).abs() < f64::EPSILON);
    assert_eq!(policy.root_margin(), "-40px");
}

#[test]
fn header_entrance_follows_item_duration() {
    use crate::util::variants::VariantName;

    let config = SiteConfig::from_json(r#"{"reveal":{"item_duration_ms":900}}"#).expect("config");
    let entrance = config.reveal.header_entrance();
    assert_eq!(entrance.variant(VariantName::Visible).duration_ms, 900);
    assert_eq!(SiteConfig::default().reveal.header_entrance().variant(VariantName::Visible).duration_ms, 600);
}

#[test]
fn malformed_json_is_rejected() {
    assert!(matches!(SiteConfig::from_json("{"), Err(ConfigError::Parse(_))));
    assert!(matches!(SiteConfig::from_json(r#"{"initial_theme":"sepia"}"#), Err(ConfigError::Parse(_))));
}

#[test]
fn out_of_range_amount_is_rejected() {
    let err = SiteConfig::from_json(r#"{"reveal":{"amount":1.5}}"#).expect_err("amount > 1");
    assert!(matches!(err, ConfigError::RevealAmount(_)));
}

#[test]
fn zero_duration_is_rejected() {
    let err = SiteConfig::from_json(r#"{"reveal":{"item_duration_ms":0}}"#).expect_err("zero duration");
    assert!(matches!(err, ConfigError::ItemDuration));
}

#[test]
fn load_without_browser_uses_defaults() {
    assert_eq!(SiteConfig::load(), SiteConfig::default());
}
