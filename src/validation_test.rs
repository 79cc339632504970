use super::*;

#[test]
fn accepts_plain_addresses() {
    assert!(is_valid_email("valid@email.com"));
    assert!(is_valid_email("test@gmail.com"));
    assert!(is_valid_email("first.last+tag@sub.domain.co"));
    assert!(is_valid_email("USER_1%x@a-b.org"));
}

#[test]
fn rejects_malformed_addresses() {
    assert!(!is_valid_email(""));
    assert!(!is_valid_email("test"));
    assert!(!is_valid_email("missing-at.example.com"));
    assert!(!is_valid_email("user@nodot"));
    assert!(!is_valid_email("user@domain.c"));
    assert!(!is_valid_email("user@domain.123"));
}

#[test]
fn email_match_covers_the_whole_string() {
    assert!(!is_valid_email(" valid@email.com"));
    assert!(!is_valid_email("valid@email.com "));
    assert!(!is_valid_email("a b@email.com"));
}

#[test]
fn password_length_boundary() {
    assert!(!is_valid_password(""));
    assert!(!is_valid_password("5"));
    assert!(!is_valid_password("12345"));
    assert!(is_valid_password("123456"));
    assert!(is_valid_password("1234567"));
}

#[test]
fn password_length_counts_characters_not_bytes() {
    // Five characters but seven bytes.
    assert!(!is_valid_password("p\u{e4}\u{df}wd"));
    assert!(is_valid_password("p\u{e4}ssw\u{f6}rd"));
}
