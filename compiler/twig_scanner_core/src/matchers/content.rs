use std::fmt;

use crate::lexer::{Lexer, EOF};

use super::take;

/// Directive opener that ended a content run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Delimiter {
    /// `{{`
    Expression,
    /// `{%`
    Statement,
    /// `{#`
    Comment,
}

impl Delimiter {
    /// Classify the character following a `{`.
    #[inline]
    pub fn after_brace(c: char) -> Option<Delimiter> {
        match c {
            '{' => Some(Delimiter::Expression),
            '%' => Some(Delimiter::Statement),
            '#' => Some(Delimiter::Comment),
            _ => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Delimiter::Expression => "{{",
            Delimiter::Statement => "{%",
            Delimiter::Comment => "{#",
        }
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of [`content_run`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContentRun {
    /// At least one character was consumed and marked.
    Matched,
    /// Nothing was consumed.
    Empty,
    /// The input starts with a directive opener. Its `{` has been read but
    /// not marked, so the lookahead is the opener's second character.
    StoppedAtOpener(Delimiter),
}

impl ContentRun {
    #[inline]
    pub fn is_match(self) -> bool {
        self == ContentRun::Matched
    }
}

/// Match a run of text between directive delimiters.
///
/// A lone `{` is ordinary content. `{{`, `{%` and `{#` end the run before
/// the `{`: the brace is read to inspect the next character, and only
/// marked once that character rules out an opener. A `<` also ends the
/// run, unconsumed.
pub fn content_run<L: Lexer + ?Sized>(lexer: &mut L) -> ContentRun {
    let mut has_content = false;
    loop {
        match lexer.lookahead() {
            EOF | '<' => break,
            '{' => {
                lexer.advance(false);
                if let Some(delimiter) = Delimiter::after_brace(lexer.lookahead()) {
                    if has_content {
                        return ContentRun::Matched;
                    }
                    return ContentRun::StoppedAtOpener(delimiter);
                }
                lexer.mark_end();
            }
            _ => take(lexer),
        }
        has_content = true;
    }
    if has_content {
        ContentRun::Matched
    } else {
        ContentRun::Empty
    }
}
