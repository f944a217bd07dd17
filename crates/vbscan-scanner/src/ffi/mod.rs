//! Bindings for tree-sitter's external scanner ABI.
//!
//! A grammar with `externals` makes the generated `parser.c` link against six
//! `tree_sitter_<language>_external_scanner_*` functions. The adapters in this
//! module implement them for any [ExternalScanner], and
//! [export_scanner](crate::export_scanner) generates the exported symbols.


use std::{
    ffi::{c_char, c_uint, c_void},
    slice,
};

use vbscan_lexer::{Lexer, TokenType, ValidSymbols};

use crate::{ExternalScanner, LineContinuationScanner, SERIALIZATION_BUFFER_SIZE};

/// Layout of tree-sitter's `TSLexer`.
#[repr(C)]
pub struct TSLexer {
    pub lookahead: i32,
    pub result_symbol: u16,
    pub advance: unsafe extern "C" fn(*mut TSLexer, bool),
    pub mark_end: unsafe extern "C" fn(*mut TSLexer),
    pub get_column: unsafe extern "C" fn(*mut TSLexer) -> u32,
    pub is_at_included_range_start: unsafe extern "C" fn(*const TSLexer) -> bool,
    pub eof: unsafe extern "C" fn(*const TSLexer) -> bool,
    pub log: Option<unsafe extern "C" fn(*const TSLexer, *const c_char, ...)>,
}

/// [Lexer] over a host-owned `TSLexer`.
struct HostLexer(*mut TSLexer);

impl Lexer for HostLexer {
    fn lookahead(&self) -> Option<char> {
        // SAFETY: The host keeps the lexer alive for the whole scan.
        let lookahead = unsafe { (*self.0).lookahead };

        if lookahead == 0 && self.eof() {
            None
        } else {
            u32::try_from(lookahead).ok().and_then(char::from_u32)
        }
    }

    fn advance(&mut self, skip: bool) {
        // SAFETY: The host keeps the lexer alive for the whole scan.
        unsafe { ((*self.0).advance)(self.0, skip) }
    }

    fn set_result_symbol(&mut self, token: TokenType) {
        // SAFETY: The host keeps the lexer alive for the whole scan.
        unsafe { (*self.0).result_symbol = token.symbol() }
    }

    fn eof(&self) -> bool {
        // SAFETY: The host keeps the lexer alive for the whole scan.
        unsafe { ((*self.0).eof)(self.0) }
    }
}

// region: Adapters.
/// Allocates a new scanner. Zero-sized scanners don't allocate.
pub fn create<S: ExternalScanner>() -> *mut c_void {
    Box::into_raw(Box::new(S::create())).cast()
}

/// # Safety
/// `payload` must be null or come from [create] with the same scanner type,
/// and it must not be used afterwards.
pub unsafe fn destroy<S: ExternalScanner>(payload: *mut c_void) {
    if !payload.is_null() {
        let scanner = unsafe { Box::from_raw(payload.cast::<S>()) };
        (*scanner).destroy();
    }
}

/// # Safety
/// `payload` must be null or come from [create] with the same scanner type.
pub unsafe fn reset<S: ExternalScanner>(payload: *mut c_void) {
    if let Some(scanner) = unsafe { payload.cast::<S>().as_mut() } {
        scanner.reset();
    }
}

/// # Safety
/// `payload` must be null or come from [create] with the same scanner type.
/// `buffer` must be null or valid for [SERIALIZATION_BUFFER_SIZE] bytes.
pub unsafe fn serialize<S: ExternalScanner>(payload: *mut c_void, buffer: *mut c_char) -> c_uint {
    let Some(scanner) = (unsafe { payload.cast::<S>().as_ref() }) else {
        return 0;
    };

    let buffer: &mut [u8] = if buffer.is_null() {
        &mut []
    } else {
        unsafe { slice::from_raw_parts_mut(buffer.cast(), SERIALIZATION_BUFFER_SIZE) }
    };

    scanner.serialize(buffer) as c_uint
}

/// # Safety
/// `payload` must be null or come from [create] with the same scanner type.
/// `buffer` must be null or valid for `length` bytes.
pub unsafe fn deserialize<S: ExternalScanner>(
    payload: *mut c_void,
    buffer: *const c_char,
    length: c_uint,
) {
    let Some(scanner) = (unsafe { payload.cast::<S>().as_mut() }) else {
        return;
    };

    let buffer: &[u8] = if buffer.is_null() || length == 0 {
        &[]
    } else {
        unsafe { slice::from_raw_parts(buffer.cast(), length as usize) }
    };

    scanner.deserialize(buffer);
}

/// # Safety
/// `payload` must be null or come from [create] with the same scanner type.
/// `lexer` must be null or a live `TSLexer`, and `valid_symbols` must be null
/// or hold [TokenType::COUNT] entries.
pub unsafe fn scan<S: ExternalScanner>(
    payload: *mut c_void,
    lexer: *mut TSLexer,
    valid_symbols: *const bool,
) -> bool {
    let Some(scanner) = (unsafe { payload.cast::<S>().as_mut() }) else {
        return false;
    };
    if lexer.is_null() || valid_symbols.is_null() {
        return false;
    }

    let valid_symbols =
        ValidSymbols::new(unsafe { slice::from_raw_parts(valid_symbols, TokenType::COUNT) });

    scanner.scan(&mut HostLexer(lexer), valid_symbols)
}
// endregion

/// Exports the tree-sitter external scanner functions of a language.
///
/// `export_scanner!(vba => LineContinuationScanner)` defines
/// `tree_sitter_vba_external_scanner_create` and friends.
#[macro_export]
macro_rules! export_scanner {
    ($language:ident => $scanner:ty) => {
        $crate::__paste! {
            #[no_mangle]
            pub extern "C" fn [<tree_sitter_ $language _external_scanner_create>]() -> *mut ::std::ffi::c_void {
                $crate::ffi::create::<$scanner>()
            }

            /// # Safety
            /// Same contract as `vbscan_scanner::ffi::destroy`.
            #[no_mangle]
            pub unsafe extern "C" fn [<tree_sitter_ $language _external_scanner_destroy>](
                payload: *mut ::std::ffi::c_void,
            ) {
                unsafe { $crate::ffi::destroy::<$scanner>(payload) }
            }

            /// # Safety
            /// Same contract as `vbscan_scanner::ffi::reset`.
            #[no_mangle]
            pub unsafe extern "C" fn [<tree_sitter_ $language _external_scanner_reset>](
                payload: *mut ::std::ffi::c_void,
            ) {
                unsafe { $crate::ffi::reset::<$scanner>(payload) }
            }

            /// # Safety
            /// Same contract as `vbscan_scanner::ffi::serialize`.
            #[no_mangle]
            pub unsafe extern "C" fn [<tree_sitter_ $language _external_scanner_serialize>](
                payload: *mut ::std::ffi::c_void,
                buffer: *mut ::std::ffi::c_char,
            ) -> ::std::ffi::c_uint {
                unsafe { $crate::ffi::serialize::<$scanner>(payload, buffer) }
            }

            /// # Safety
            /// Same contract as `vbscan_scanner::ffi::deserialize`.
            #[no_mangle]
            pub unsafe extern "C" fn [<tree_sitter_ $language _external_scanner_deserialize>](
                payload: *mut ::std::ffi::c_void,
                buffer: *const ::std::ffi::c_char,
                length: ::std::ffi::c_uint,
            ) {
                unsafe { $crate::ffi::deserialize::<$scanner>(payload, buffer, length) }
            }

            /// # Safety
            /// Same contract as `vbscan_scanner::ffi::scan`.
            #[no_mangle]
            pub unsafe extern "C" fn [<tree_sitter_ $language _external_scanner_scan>](
                payload: *mut ::std::ffi::c_void,
                lexer: *mut $crate::ffi::TSLexer,
                valid_symbols: *const bool,
            ) -> bool {
                unsafe { $crate::ffi::scan::<$scanner>(payload, lexer, valid_symbols) }
            }
        }
    };
}

export_scanner!(vba => LineContinuationScanner);
