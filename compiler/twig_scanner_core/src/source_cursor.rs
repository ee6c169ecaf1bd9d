//! In-memory implementation of the host cursor.
//!
//! Tracks three byte offsets into the source:
//!
//! ```text
//!   token start      confirmed end       read position
//!        v                 v                   v
//!   ...  [ token text      ) tentatively read  | lookahead ...
//! ```
//!
//! `advance` moves the read position, `mark_end` copies it into the
//! confirmed end. Characters read past the confirmed end are never part of
//! the emitted token, which is how the directive-content matcher peeks one
//! character past a `{` without committing to it.

use std::fmt;

use crate::lexer::{Lexer, EOF};
use crate::token_kind::TokenKind;

/// Byte range of a token in the source (`start` inclusive, `end` exclusive).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Span { start, end }
    }

    /// Length of the span in bytes.
    #[inline]
    pub const fn len(&self) -> u32 {
        self.end - self.start
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The span as a `usize` range, for slicing the source.
    #[inline]
    pub fn to_range(self) -> std::ops::Range<usize> {
        self.start as usize..self.end as usize
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// Host cursor over a borrowed `&str`.
///
/// The cursor is [`Copy`], so a caller can snapshot it before a scan and
/// replay the same call for a deterministic result.
#[derive(Clone, Copy, Debug)]
pub struct SourceCursor<'a> {
    source: &'a str,
    /// Length of the scannable source. Saturates at `u32::MAX`.
    source_len: u32,
    /// Where the current scan attempt began, before any whitespace skip.
    /// A failed attempt rolls back here.
    committed: u32,
    /// Start of the token being built.
    start: u32,
    /// Current read position; the lookahead starts here.
    pos: u32,
    /// Confirmed exclusive end, set by `mark_end`.
    marked: Option<u32>,
    result_symbol: Option<TokenKind>,
}

impl<'a> SourceCursor<'a> {
    /// Create a cursor at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self::at(source, 0)
    }

    /// Create a cursor at byte `offset`.
    ///
    /// Offsets past the end clamp to the end; offsets inside a multi-byte
    /// character round down to its first byte.
    pub fn at(source: &'a str, offset: u32) -> Self {
        let source_len = u32::try_from(source.len()).unwrap_or(u32::MAX);
        let mut pos = offset.min(source_len);
        while !source.is_char_boundary(pos as usize) {
            pos -= 1;
        }
        Self {
            source,
            source_len,
            committed: pos,
            start: pos,
            pos,
            marked: None,
            result_symbol: None,
        }
    }

    /// Current read position (byte offset of the lookahead).
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Start of the token being built.
    #[inline]
    pub fn token_start(&self) -> u32 {
        self.start
    }

    /// Exclusive end of the token: the last marked position, or the read
    /// position if `mark_end` was never called.
    #[inline]
    pub fn token_end(&self) -> u32 {
        self.marked.unwrap_or(self.pos)
    }

    pub fn token_span(&self) -> Span {
        Span::new(self.start, self.token_end().max(self.start))
    }

    /// Source text of the current token.
    pub fn token_text(&self) -> &'a str {
        &self.source[self.token_span().to_range()]
    }

    /// Unread source from the read position on.
    pub fn rest(&self) -> &'a str {
        &self.source[self.pos as usize..self.source_len as usize]
    }

    /// Kind recorded for the current token, if the scan succeeded.
    pub fn result_symbol(&self) -> Option<TokenKind> {
        self.result_symbol
    }

    pub fn set_result_symbol(&mut self, kind: TokenKind) {
        self.result_symbol = Some(kind);
    }

    /// Begin the next scan attempt.
    ///
    /// If a result symbol was recorded, the attempt succeeded and the next
    /// one starts at the token's confirmed end; characters read past it are
    /// un-read. Otherwise everything the failed attempt read, skipped
    /// whitespace included, is rolled back.
    pub fn reset_token(&mut self) {
        let next = if self.result_symbol.is_some() {
            self.token_end().max(self.start)
        } else {
            self.committed
        };
        self.committed = next;
        self.start = next;
        self.pos = next;
        self.marked = None;
        self.result_symbol = None;
    }
}

impl Lexer for SourceCursor<'_> {
    #[inline]
    fn lookahead(&self) -> char {
        self.rest().chars().next().unwrap_or(EOF)
    }

    #[allow(
        clippy::cast_possible_truncation,
        reason = "len_utf8() is at most 4"
    )]
    fn advance(&mut self, skip: bool) {
        let Some(c) = self.rest().chars().next() else {
            return;
        };
        self.pos += c.len_utf8() as u32;
        if skip {
            self.start = self.pos;
        }
    }

    #[inline]
    fn mark_end(&mut self) {
        self.marked = Some(self.pos);
    }
}
