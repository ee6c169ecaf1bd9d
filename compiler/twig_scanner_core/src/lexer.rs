//! Host cursor protocol.
//!
//! The parser runtime owns the input and the token boundaries; the scanner
//! only drives them through this trait. [`SourceCursor`](crate::SourceCursor)
//! implements it over an in-memory string, and the FFI crate implements it
//! over the runtime's C lexer struct.

/// Lookahead value reported once the input is exhausted.
///
/// An interior NUL in the source reads the same way, so every matcher
/// treats it as end of input.
pub const EOF: char = '\0';

/// Cursor over the host's input stream.
pub trait Lexer {
    /// The next unconsumed character, or [`EOF`].
    fn lookahead(&self) -> char;

    /// Consume the lookahead character.
    ///
    /// With `skip == true` the character is trivia: it is excluded from
    /// the token, whose start moves past it. Advancing at end of input is
    /// a no-op.
    fn advance(&mut self, skip: bool);

    /// Commit the current read position as the exclusive end of the token.
    fn mark_end(&mut self);

    /// Returns `true` once the lookahead is [`EOF`].
    #[inline]
    fn is_eof(&self) -> bool {
        self.lookahead() == EOF
    }
}

/// Whitespace skipped before every token.
///
/// This is the C-locale `iswspace` class the parser runtime was built
/// against: ASCII space, tab, newline, vertical tab, form feed and
/// carriage return. Unicode spaces such as U+00A0 are ordinary text.
#[inline]
pub fn is_skippable_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}
