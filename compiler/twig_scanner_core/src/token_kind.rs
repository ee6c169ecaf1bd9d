//! Token kinds produced by the external scanner.
//!
//! The discriminants are an ABI contract with the grammar: they are the
//! indices of the `externals` list, in declaration order, and the host
//! engine indexes the valid-symbols array with them.

use std::fmt;

use bitflags::bitflags;

/// Kind of token recognized by the external scanner.
///
/// The declaration order matches the grammar's `externals`, not the
/// order in which the scanner tries the matchers (HTML text first, then
/// directive content, then comments).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum TokenKind {
    /// Text between directive delimiters, e.g. the body of a `{% verbatim %}`.
    Content = 0,
    /// A `{# ... #}` comment, closer included.
    Comment = 1,
    /// Literal markup text between tags and directives.
    HtmlContent = 2,
}

impl TokenKind {
    /// All kinds, in ordinal order.
    pub const ALL: [TokenKind; 3] = [TokenKind::Content, TokenKind::Comment, TokenKind::HtmlContent];

    /// Number of external token kinds the grammar declares.
    pub const COUNT: usize = Self::ALL.len();

    /// Look up a kind by its grammar symbol ordinal.
    pub fn from_symbol(symbol: u16) -> Option<TokenKind> {
        match symbol {
            0 => Some(TokenKind::Content),
            1 => Some(TokenKind::Comment),
            2 => Some(TokenKind::HtmlContent),
            _ => None,
        }
    }

    /// Grammar symbol ordinal (the value written to `result_symbol`).
    #[inline]
    pub const fn symbol(self) -> u16 {
        self as u16
    }

    /// Name of the external in the grammar definition.
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::Content => "content",
            TokenKind::Comment => "comment",
            TokenKind::HtmlContent => "html_content",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

bitflags! {
    /// Token kinds the grammar accepts at the current parse position.
    ///
    /// Bit `n` corresponds to the kind with ordinal `n`.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct ValidSymbols: u8 {
        const CONTENT = 1 << 0;
        /// Carried for completeness. The scanner attempts comments
        /// whether or not this bit is set.
        const COMMENT = 1 << 1;
        const HTML_CONTENT = 1 << 2;
    }
}

impl ValidSymbols {
    /// Build the set from the host's boolean array, indexed by ordinal.
    ///
    /// Missing trailing entries read as `false`; entries past the last
    /// known kind are ignored.
    pub fn from_slice(valid: &[bool]) -> Self {
        let mut set = Self::empty();
        for (&kind, &on) in TokenKind::ALL.iter().zip(valid) {
            if on {
                set |= Self::of(kind);
            }
        }
        set
    }

    /// The singleton set for `kind`.
    pub const fn of(kind: TokenKind) -> Self {
        match kind {
            TokenKind::Content => Self::CONTENT,
            TokenKind::Comment => Self::COMMENT,
            TokenKind::HtmlContent => Self::HTML_CONTENT,
        }
    }

    /// Returns `true` if the grammar accepts `kind` here.
    #[inline]
    pub fn contains_kind(self, kind: TokenKind) -> bool {
        self.contains(Self::of(kind))
    }
}

#[cfg(test)]
mod tests;
