use super::*;

#[test]
fn button_type_is_submit_when_ready() {
    assert_eq!(button_type(SubmitControl::Ready), "submit");
}

#[test]
fn button_type_is_plain_button_while_pending() {
    assert_eq!(button_type(SubmitControl::Pending), "button");
}

#[test]
fn button_type_stays_submit_after_success() {
    assert_eq!(button_type(SubmitControl::DisabledSuccess), "submit");
}
