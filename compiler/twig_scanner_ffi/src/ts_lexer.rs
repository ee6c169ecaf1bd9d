//! Mirror of the parser runtime's `TSLexer` and its [`Lexer`] adapter.

use std::ptr::NonNull;

use twig_scanner_core::Lexer;

/// Grammar symbol id (`TSSymbol`).
pub type TSSymbol = u16;

/// Layout-compatible prefix of the runtime's `TSLexer`.
///
/// Runtimes that append fields (such as `log`) after `eof` are still
/// compatible: the scanner only touches the fields declared here.
#[repr(C)]
pub struct TSLexer {
    /// Next code point, `0` at end of input.
    pub lookahead: i32,
    pub result_symbol: TSSymbol,
    pub advance: unsafe extern "C" fn(*mut TSLexer, bool),
    pub mark_end: unsafe extern "C" fn(*mut TSLexer),
    pub get_column: unsafe extern "C" fn(*mut TSLexer) -> u32,
    pub is_at_included_range_start: unsafe extern "C" fn(*const TSLexer) -> bool,
    pub eof: unsafe extern "C" fn(*const TSLexer) -> bool,
}

/// Drives a runtime-owned `TSLexer` through the [`Lexer`] protocol.
///
/// Holds a raw pointer rather than a reference: the runtime's callbacks
/// mutate the struct behind our back.
pub(crate) struct HostLexer {
    raw: NonNull<TSLexer>,
}

impl HostLexer {
    /// # Safety
    ///
    /// `raw` must point to a live `TSLexer` whose callbacks stay valid for
    /// the lifetime of the adapter, and nothing else may access it while
    /// the adapter is in use.
    pub(crate) unsafe fn new(raw: NonNull<TSLexer>) -> Self {
        Self { raw }
    }

    pub(crate) fn set_result_symbol(&mut self, symbol: TSSymbol) {
        // SAFETY: `new` guarantees `raw` is live and exclusively ours.
        unsafe { (*self.raw.as_ptr()).result_symbol = symbol };
    }
}

/// Decode the runtime's lookahead into a `char`.
///
/// Values that are not Unicode scalar values (lone surrogates, negative
/// sentinels) become U+FFFD, which every matcher treats as plain text.
pub(crate) fn decode_lookahead(lookahead: i32) -> char {
    u32::try_from(lookahead)
        .ok()
        .and_then(char::from_u32)
        .unwrap_or(char::REPLACEMENT_CHARACTER)
}

impl Lexer for HostLexer {
    #[inline]
    fn lookahead(&self) -> char {
        // SAFETY: see `HostLexer::new`.
        decode_lookahead(unsafe { (*self.raw.as_ptr()).lookahead })
    }

    #[inline]
    fn advance(&mut self, skip: bool) {
        let raw = self.raw.as_ptr();
        // SAFETY: see `HostLexer::new`; the callback receives the same pointer
        // the runtime gave us and no Rust reference to it is alive.
        unsafe { ((*raw).advance)(raw, skip) };
    }

    #[inline]
    fn mark_end(&mut self) {
        let raw = self.raw.as_ptr();
        // SAFETY: as in `advance`.
        unsafe { ((*raw).mark_end)(raw) };
    }
}
