//! C ABI hooks for the Twig grammar's external scanner.
//!
//! The generated parser looks up six `tree_sitter_twig_external_scanner_*`
//! symbols. This crate exports them on top of [`twig_scanner_core`]. The
//! scanner is stateless, so the payload pointer is always null and the
//! lifecycle hooks do nothing.
//!
//! Enable logging with `RUST_LOG=twig_scanner_core=trace`.

#![allow(
    unsafe_code,
    reason = "C ABI boundary: exported symbols and raw pointers from the runtime"
)]

mod ts_lexer;

use std::ffi::{c_char, c_uint, c_void};
use std::ptr::NonNull;
use std::sync::Once;

use tracing::warn;
use twig_scanner_core::{Scanner, TokenKind, ValidSymbols};

pub use ts_lexer::{TSLexer, TSSymbol};

use ts_lexer::HostLexer;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Does nothing unless `RUST_LOG` is set, and
/// leaves an already-installed global subscriber in place.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var_os("RUST_LOG").is_some() {
            let filter = EnvFilter::from_default_env();
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init();
        }
    });
}

/// Create the scanner payload. Always null: there is no state.
#[no_mangle]
pub extern "C" fn tree_sitter_twig_external_scanner_create() -> *mut c_void {
    init_tracing();
    std::ptr::null_mut()
}

#[no_mangle]
pub extern "C" fn tree_sitter_twig_external_scanner_destroy(_payload: *mut c_void) {}

#[no_mangle]
pub extern "C" fn tree_sitter_twig_external_scanner_reset(_payload: *mut c_void) {
    Scanner::new().reset();
}

/// Serialize the scanner state. Writes nothing and returns 0.
#[no_mangle]
pub extern "C" fn tree_sitter_twig_external_scanner_serialize(
    _payload: *mut c_void,
    _buffer: *mut c_char,
) -> c_uint {
    // The runtime's buffer is never touched, so an empty slice stands in for it.
    let written = Scanner::new().serialize(&mut []);
    c_uint::try_from(written).unwrap_or(0)
}

/// Restore scanner state. Any non-empty payload is logged and ignored.
///
/// # Safety
///
/// If `length` is non-zero, `buffer` must point to `length` readable bytes.
#[no_mangle]
pub unsafe extern "C" fn tree_sitter_twig_external_scanner_deserialize(
    _payload: *mut c_void,
    buffer: *const c_char,
    length: c_uint,
) {
    let state: &[u8] = if buffer.is_null() || length == 0 {
        &[]
    } else {
        // SAFETY: caller guarantees `buffer` holds `length` bytes.
        unsafe { std::slice::from_raw_parts(buffer.cast::<u8>(), length as usize) }
    };
    if let Err(err) = Scanner::new().deserialize(state) {
        warn!(%err, "ignoring serialized scanner state");
    }
}

/// Scan for one external token.
///
/// On success, writes the token kind to `lexer.result_symbol` and returns
/// `true`; the token ends at the runtime's last `mark_end` position.
///
/// # Safety
///
/// `lexer` must point to a live `TSLexer` with valid callbacks, and
/// `valid_symbols` to one `bool` per external token (3 entries). Null
/// pointers are rejected with `false`.
#[no_mangle]
pub unsafe extern "C" fn tree_sitter_twig_external_scanner_scan(
    _payload: *mut c_void,
    lexer: *mut TSLexer,
    valid_symbols: *const bool,
) -> bool {
    let Some(raw) = NonNull::new(lexer) else {
        return false;
    };
    if valid_symbols.is_null() {
        return false;
    }

    // SAFETY: caller guarantees one entry per external token.
    let valid = unsafe { std::slice::from_raw_parts(valid_symbols, TokenKind::COUNT) };
    let valid = ValidSymbols::from_slice(valid);

    // SAFETY: caller guarantees `lexer` is live and not otherwise in use
    // for the duration of this call.
    let mut host = unsafe { HostLexer::new(raw) };
    match Scanner::new().scan(&mut host, valid) {
        Some(kind) => {
            host.set_result_symbol(kind.symbol());
            true
        }
        None => false,
    }
}
