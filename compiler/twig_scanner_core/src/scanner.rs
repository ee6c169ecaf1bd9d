//! Scanner entry point and lifecycle hooks.
//!
//! The host calls [`Scanner::scan`] whenever the grammar reaches a position
//! where one of the external tokens may appear. A call skips leading
//! whitespace and then tries, in order:
//!
//! 1. HTML text, if requested;
//! 2. directive content, if requested;
//! 3. a comment, whether requested or not.
//!
//! The first matcher that consumes input wins. The comment matcher ignores
//! the valid-symbols set: grammar rules cannot rely on leaving `comment`
//! out of their lookahead to suppress it.

use thiserror::Error;
use tracing::{debug, trace};

use crate::lexer::{is_skippable_whitespace, Lexer};
use crate::matchers::{comment, content_run, html_run, ContentRun};
use crate::source_cursor::{SourceCursor, Span};
use crate::token_kind::{TokenKind, ValidSymbols};

/// Error restoring serialized scanner state.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum StateError {
    /// The host handed back state bytes, but the scanner never writes any.
    #[error("scanner is stateless but was given {len} bytes of serialized state")]
    UnexpectedState { len: usize },
}

/// The external scanner.
///
/// Carries no state: every lifecycle hook is a no-op and serialization
/// always produces zero bytes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Scanner;

impl Scanner {
    pub fn new() -> Self {
        Scanner
    }

    /// Reset between parses. Nothing to reset.
    pub fn reset(&mut self) {}

    /// Write the scanner state into `buffer`, returning the bytes written.
    #[allow(clippy::unused_self, reason = "mirrors the host's serialize hook")]
    pub fn serialize(&self, _buffer: &mut [u8]) -> usize {
        0
    }

    /// Restore state previously written by [`serialize`](Self::serialize).
    ///
    /// The only valid payload is the empty one. Anything else is reported
    /// and has no effect on later scans.
    pub fn deserialize(&mut self, state: &[u8]) -> Result<(), StateError> {
        if state.is_empty() {
            Ok(())
        } else {
            Err(StateError::UnexpectedState { len: state.len() })
        }
    }

    /// Classify the input at the lexer's position.
    ///
    /// Returns the matched kind, with the token's end committed through
    /// [`Lexer::mark_end`], or `None` when no external token starts here.
    /// The caller is responsible for recording the kind as the result
    /// symbol.
    #[allow(clippy::unused_self, reason = "the scanner carries no state")]
    pub fn scan<L: Lexer + ?Sized>(&self, lexer: &mut L, valid: ValidSymbols) -> Option<TokenKind> {
        trace!(?valid, lookahead = ?lexer.lookahead(), "scan");

        while is_skippable_whitespace(lexer.lookahead()) {
            lexer.advance(true);
        }

        if valid.contains_kind(TokenKind::HtmlContent) && html_run(lexer) {
            return Some(TokenKind::HtmlContent);
        }

        if valid.contains_kind(TokenKind::Content) {
            match content_run(lexer) {
                ContentRun::Matched => return Some(TokenKind::Content),
                ContentRun::StoppedAtOpener(delimiter) => {
                    debug!(%delimiter, "content run declined at directive opener");
                }
                ContentRun::Empty => {}
            }
        }

        // Attempted regardless of `valid`.
        if comment(lexer) {
            return Some(TokenKind::Comment);
        }

        trace!("no external token");
        None
    }
}

/// A token classified by [`scan_str`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScannedToken {
    pub kind: TokenKind,
    pub span: Span,
}

impl ScannedToken {
    /// Source text of the token.
    pub fn text(self, source: &str) -> &str {
        &source[self.span.to_range()]
    }
}

/// Run one scan over `source` starting at byte `offset`.
///
/// Convenience for tools and tests that do not embed the parser runtime.
pub fn scan_str(source: &str, offset: u32, valid: ValidSymbols) -> Option<ScannedToken> {
    let mut cursor = SourceCursor::at(source, offset);
    let kind = Scanner::new().scan(&mut cursor, valid)?;
    cursor.set_result_symbol(kind);
    let span = cursor.token_span();
    trace!(%kind, %span, "matched");
    Some(ScannedToken { kind, span })
}
