//! External token classifier for the Twig template grammar.
//!
//! The grammar delegates three token kinds to this crate: runs of literal
//! HTML text, runs of text between directive delimiters, and `{# ... #}`
//! comments. Everything else (tags, `{{`/`{%` delimiters, expressions) is
//! lexed by the grammar itself.
//!
//! # Architecture
//!
//! ```text
//! host cursor (impl Lexer) ──► Scanner::scan ──► html_run
//!                                             ├─► content_run
//!                                             └─► comment
//! ```
//!
//! The scanner is stateless: every call is a pure decision over the
//! lookahead stream and the set of kinds the grammar currently accepts.
//! [`SourceCursor`] is an in-memory implementation of the host cursor,
//! used by tests and by tools that want to classify text without linking
//! the parser runtime.

mod lexer;
mod matchers;
mod scanner;
mod source_cursor;
mod token_kind;

pub use lexer::{is_skippable_whitespace, Lexer, EOF};
pub use matchers::{comment, content_run, html_run, ContentRun, Delimiter};
pub use scanner::{scan_str, ScannedToken, Scanner, StateError};
pub use source_cursor::{SourceCursor, Span};
pub use token_kind::{TokenKind, ValidSymbols};
