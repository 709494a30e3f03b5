use crate::symbol::*;

#[test]
fn control_symbols_are_negated_chars() {
    assert_eq!(Control::Plus.symbol(), -('+' as i32));
    assert_eq!(Control::SetOpen.symbol(), -91);
    assert_eq!(Control::Range.symbol(), -45);
}

#[test]
fn control_symbols_decode() {
    for control in Control::ALL {
        assert_eq!(Control::from_symbol(control.symbol()), Some(control));
    }
}

#[test]
fn literals_are_not_controls() {
    assert_eq!(Control::from_symbol(43), None);
    assert_eq!(Control::from_symbol(END_OF_INPUT), None);
    assert_eq!(Control::from_symbol(0), None);
}

#[test]
fn unknown_control_code() {
    assert_eq!(Control::from_symbol(-('!' as i32)), None);
    assert_eq!(Control::from_symbol(i32::MIN), None);
}

#[test]
fn end_of_input_is_literal() {
    assert!(is_literal(END_OF_INPUT));
    assert!(is_literal(0));
    assert!(!is_literal(Control::Star.symbol()));
}

#[test]
fn postfix_operators() {
    let postfix: Vec<_> = Control::ALL
        .into_iter()
        .filter(|c| c.is_postfix())
        .map(|c| c.to_string())
        .collect();
    insta::assert_snapshot!(postfix.join(" "), @"+ * ?");
}
