use super::*;

#[test]
fn card_class_names_severity() {
    assert_eq!(card_class(Severity::Success), "notification notification-success");
    assert_eq!(card_class(Severity::Warning), "notification notification-warning");
}

#[test]
fn only_leaving_cards_animate_out() {
    assert_eq!(card_style(NotificationPhase::Visible), None);
    assert_eq!(card_style(NotificationPhase::Leaving), Some("animation: slideOutRight 0.3s ease-out"));
}

#[test]
fn icon_uses_font_awesome_class_and_severity_color() {
    assert_eq!(icon_class(Severity::Error), "fas fa-times-circle");
    assert_eq!(icon_style(Severity::Info), "color: #3b82f6; font-size: 1.25rem;");
}
