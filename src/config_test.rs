use super::*;

#[test]
fn defaults_match_page_conventions() {
    let config = KitConfig::default();
    assert_eq!(config.notification_container_id, "notificationContainer");
    assert_eq!(config.loader_id, "globalLoader");
    assert_eq!(config.notification_duration_ms, 5000);
    assert_eq!(config.counter_duration_ms, 1000);
    assert_eq!(config.export_loader_delay_ms, 1000);
    assert_eq!(config.tooltip_attribute, "data-tooltip");
    assert_eq!(config.counter_attribute, "data-counter");
    assert_eq!(config.locale, Locale::En);
}

#[test]
fn blank_json_yields_defaults() {
    assert_eq!(KitConfig::from_json("  \n").unwrap(), KitConfig::default());
    assert_eq!(KitConfig::from_json("{}").unwrap(), KitConfig::default());
}

#[test]
fn partial_json_overrides_only_given_fields() {
    let config = KitConfig::from_json(r#"{ "notification_duration_ms": 8000, "loader_id": "busy" }"#).unwrap();
    assert_eq!(config.notification_duration_ms, 8000);
    assert_eq!(config.loader_id, "busy");
    assert_eq!(config.notification_container_id, "notificationContainer");
}

#[test]
fn blank_ids_fall_back_to_defaults() {
    let config = KitConfig::from_json(r#"{ "notification_container_id": "   " }"#).unwrap();
    assert_eq!(config.notification_container_id, "notificationContainer");
}

#[test]
fn russian_locale_selects_russian_catalog() {
    let config = KitConfig::from_json(r#"{ "locale": "ru" }"#).unwrap();
    assert_eq!(config.locale, Locale::Ru);
    assert_eq!(config.messages.copied, "Скопировано в буфер обмена");
    assert_eq!(config.messages.export_started_for("csv"), "Экспорт CSV начат");
}

#[test]
fn message_overrides_apply_on_top_of_locale() {
    let config = KitConfig::from_json(r#"{ "locale": "ru", "messages": { "copied": "OK" } }"#).unwrap();
    assert_eq!(config.messages.copied, "OK");
    assert_eq!(config.messages.copy_failed, "Ошибка копирования");
}

#[test]
fn malformed_json_is_an_error() {
    let err = KitConfig::from_json("{ not json").unwrap_err();
    assert!(err.to_string().starts_with("invalid kit config"));
}

#[test]
fn mistyped_field_is_an_error() {
    assert!(KitConfig::from_json(r#"{ "counter_duration_ms": "slow" }"#).is_err());
}

#[test]
fn unknown_locale_is_an_error() {
    assert!(KitConfig::from_json(r#"{ "locale": "de" }"#).is_err());
}

#[test]
fn export_started_upper_cases_format() {
    let messages = Messages::default();
    assert_eq!(messages.export_started_for("pdf"), "Export PDF started");
    assert_eq!(messages.export_started_for("excel"), "Export EXCEL started");
}
