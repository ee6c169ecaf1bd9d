use super::*;
use pretty_assertions::assert_eq;

// === Ordinals ===

#[test]
fn ordinals_match_grammar_externals() {
    assert_eq!(TokenKind::Content as u16, 0);
    assert_eq!(TokenKind::Comment as u16, 1);
    assert_eq!(TokenKind::HtmlContent as u16, 2);
}

#[test]
fn kind_is_two_bytes() {
    assert_eq!(std::mem::size_of::<TokenKind>(), 2);
}

#[test]
fn from_symbol_inverts_symbol() {
    for kind in TokenKind::ALL {
        assert_eq!(TokenKind::from_symbol(kind.symbol()), Some(kind));
    }
    assert_eq!(TokenKind::from_symbol(3), None);
    assert_eq!(TokenKind::from_symbol(u16::MAX), None);
}

#[test]
fn display_uses_grammar_names() {
    assert_eq!(TokenKind::Content.to_string(), "content");
    assert_eq!(TokenKind::Comment.to_string(), "comment");
    assert_eq!(TokenKind::HtmlContent.to_string(), "html_content");
}

// === ValidSymbols ===

#[test]
fn bits_follow_ordinals() {
    for kind in TokenKind::ALL {
        assert_eq!(ValidSymbols::of(kind).bits(), 1 << kind.symbol());
    }
}

#[test]
fn from_slice_reads_by_ordinal() {
    let valid = ValidSymbols::from_slice(&[true, false, true]);
    assert!(valid.contains_kind(TokenKind::Content));
    assert!(!valid.contains_kind(TokenKind::Comment));
    assert!(valid.contains_kind(TokenKind::HtmlContent));
}

#[test]
fn from_slice_short_array_pads_with_false() {
    let valid = ValidSymbols::from_slice(&[true]);
    assert_eq!(valid, ValidSymbols::CONTENT);
    assert_eq!(ValidSymbols::from_slice(&[]), ValidSymbols::empty());
}

#[test]
fn from_slice_ignores_extra_entries() {
    let valid = ValidSymbols::from_slice(&[false, false, false, true, true]);
    assert!(valid.is_empty());
}
