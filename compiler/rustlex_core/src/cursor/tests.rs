use super::*;

#[test]
fn starts_at_zero() {
    let cursor = Cursor::new("abc");
    assert_eq!(cursor.pos(), 0);
    assert_eq!(cursor.rest(), "abc");
    assert!(!cursor.is_eof());
}

#[test]
fn empty_source_is_eof() {
    let cursor = Cursor::new("");
    assert!(cursor.is_eof());
    assert_eq!(cursor.rest(), "");
    assert_eq!(cursor.char_width(), 0);
}

#[test]
fn advance_n_moves_and_clamps() {
    let mut cursor = Cursor::new("hello");
    cursor.advance_n(2);
    assert_eq!(cursor.rest(), "llo");
    cursor.advance_n(3);
    assert!(cursor.is_eof());
    assert_eq!(cursor.rest(), "");
}

#[test]
fn utf8_widths() {
    assert_eq!(Cursor::utf8_char_width(b'a'), 1);
    assert_eq!(Cursor::utf8_char_width("é".as_bytes()[0]), 2);
    assert_eq!(Cursor::utf8_char_width("€".as_bytes()[0]), 3);
    assert_eq!(Cursor::utf8_char_width("𝄞".as_bytes()[0]), 4);
}

#[test]
fn advance_char_steps_whole_characters() {
    let mut cursor = Cursor::new("é€𝄞x");
    cursor.advance_char();
    assert_eq!(cursor.pos(), 2);
    cursor.advance_char();
    assert_eq!(cursor.pos(), 5);
    cursor.advance_char();
    assert_eq!(cursor.pos(), 9);
    assert_eq!(cursor.rest(), "x");
    cursor.advance_char();
    assert!(cursor.is_eof());
    cursor.advance_char();
    assert!(cursor.is_eof());
}

#[test]
fn slice_from_start() {
    let mut cursor = Cursor::new("let x");
    cursor.advance_n(3);
    assert_eq!(cursor.slice_from(0), "let");
    assert_eq!(cursor.slice(1, 3), "et");
}
