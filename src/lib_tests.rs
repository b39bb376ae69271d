use super::*;

#[test]
fn exit_codes_are_distinct() {
    assert_ne!(EXIT_SUCCESS, EXIT_STYLE_VIOLATIONS);
    assert_ne!(EXIT_SUCCESS, EXIT_CONFIG_ERROR);
    assert_ne!(EXIT_STYLE_VIOLATIONS, EXIT_CONFIG_ERROR);
}

#[test]
fn success_is_zero() {
    assert_eq!(EXIT_SUCCESS, 0);
}
