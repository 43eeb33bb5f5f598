use super::*;

#[test]
fn default_button_is_primary_medium() {
    assert_eq!(
        button_class(ButtonVariant::default(), ButtonSize::default(), false),
        "btn btn--primary btn--medium"
    );
}

#[test]
fn loading_adds_modifier() {
    assert_eq!(
        button_class(ButtonVariant::Primary, ButtonSize::Large, true),
        "btn btn--primary btn--large btn--loading"
    );
}

#[test]
fn outline_medium() {
    assert_eq!(
        button_class(ButtonVariant::Outline, ButtonSize::Medium, false),
        "btn btn--outline btn--medium"
    );
}
