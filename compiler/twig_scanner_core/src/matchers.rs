//! The three token matchers.
//!
//! Each matcher drives a [`Lexer`] from the current lookahead and reports
//! whether it produced a token. All of them extend the token through
//! [`take`]; only the directive-content matcher ever reads a character
//! without marking it, and it says so in its return value.

mod comment;
mod content;
mod html;

pub use comment::comment;
pub use content::{content_run, ContentRun, Delimiter};
pub use html::html_run;

use crate::lexer::Lexer;

/// Consume the lookahead and commit it to the token.
#[inline]
fn take<L: Lexer + ?Sized>(lexer: &mut L) {
    lexer.advance(false);
    lexer.mark_end();
}
