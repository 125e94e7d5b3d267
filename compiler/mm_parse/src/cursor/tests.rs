use super::*;
use pretty_assertions::assert_eq;

#[test]
fn current_reads_and_advance_moves() {
    let buf = SourceBuffer::new("ab");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.current(), b'a');
    cursor.advance();
    assert_eq!(cursor.current(), b'b');
    assert_eq!(cursor.pos(), 1);
}

#[test]
fn eof_after_last_byte() {
    let buf = SourceBuffer::new("x");
    let mut cursor = buf.cursor();
    assert!(!cursor.is_eof());
    cursor.advance();
    assert!(cursor.is_eof());
    assert_eq!(cursor.current(), 0);
    assert_eq!(cursor.current_char(), None);
}

#[test]
fn interior_nul_is_not_eof() {
    let buf = SourceBuffer::new("a\0b");
    let mut cursor = buf.cursor();
    cursor.advance();
    assert_eq!(cursor.current(), 0);
    assert!(!cursor.is_eof());
    assert_eq!(cursor.current_char(), Some('\0'));
}

#[test]
fn current_char_decodes_multibyte() {
    let buf = SourceBuffer::new("é!");
    let cursor = buf.cursor();
    assert_eq!(cursor.current_char(), Some('é'));
}

#[test]
fn eat_whitespace_skips_spaces_and_tabs_only() {
    let buf = SourceBuffer::new(" \t \nx");
    let mut cursor = buf.cursor();
    cursor.eat_whitespace();
    assert_eq!(cursor.pos(), 3);
    assert_eq!(cursor.current(), b'\n');
}

#[test]
fn eat_while_returns_consumed_text() {
    let buf = SourceBuffer::new("abc1@");
    let mut cursor = buf.cursor();
    let word = cursor.eat_while(|b| b.is_ascii_alphabetic());
    assert_eq!(word, "abc");
    assert_eq!(cursor.current(), b'1');
}

#[test]
fn eat_until_stops_on_delimiter() {
    let buf = SourceBuffer::new("4.5)@x");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.eat_until(b')'), Some("4.5"));
    assert_eq!(cursor.current(), b')');
}

#[test]
fn eat_until_missing_delimiter_moves_to_eof() {
    let buf = SourceBuffer::new("4.5");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.eat_until(b')'), None);
    assert!(cursor.is_eof());
}
