use crate::lexer::Lexer;

use super::take;

/// Match a comment body up to and including its `#}` closer.
///
/// Starts at a `#`: either a bare one, or the second character of `{#`
/// when the directive-content matcher has already read the brace. After a
/// `#` that is not followed by `}`, the next character is consumed as
/// body, so in `##}` the first `#` hides the closer.
///
/// Reaching end of input before the closer is not a match.
pub fn comment<L: Lexer + ?Sized>(lexer: &mut L) -> bool {
    if lexer.lookahead() != '#' {
        return false;
    }
    lexer.advance(false);

    while !lexer.is_eof() {
        lexer.mark_end();
        if lexer.lookahead() == '#' {
            lexer.advance(false);
            if lexer.lookahead() == '}' {
                take(lexer);
                return true;
            }
        }
        lexer.advance(false);
    }
    false
}
