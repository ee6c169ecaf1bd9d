use crate::lexer::{Lexer, EOF};

use super::take;

/// Match a run of literal markup text.
///
/// Consumes up to, but not including, the next `<`, `{` or end of input.
/// Returns `false` without consuming anything when the lookahead is
/// already one of those.
pub fn html_run<L: Lexer + ?Sized>(lexer: &mut L) -> bool {
    let mut has_content = false;
    while !matches!(lexer.lookahead(), EOF | '<' | '{') {
        take(lexer);
        has_content = true;
    }
    has_content
}
