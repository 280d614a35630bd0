// FFI functions are inherently unsafe; callers must ensure pointer validity.
// Safety contracts are documented per-function in the public API comments.
#![allow(clippy::missing_safety_doc)]

// accent-ffi: C-compatible FFI layer for AccentHandle.
//
// This crate exposes a stable C ABI that can be consumed by any language
// with C FFI support (Python/ctypes, C#/P-Invoke, etc.).
//
// Memory management rules:
// - Opaque `AccentHandle` pointer: created by `accent_new`, freed by `accent_free`.
// - Returned strings: caller must free with `accent_free_str`.
// - Returned string arrays: caller must free with `accent_free_str_array`.
// - The version string is static and must not be freed.
// - All input strings are UTF-8 encoded, null-terminated C strings.
//
// Structured results (feature records, summaries, word entries) are returned
// as JSON text.

use std::ffi::{CStr, CString, c_char};
use std::ptr;

use accent_core::feature::feature_ids;
use accent_en::AccentHandle;
use serde::Serialize;

// ── Handle lifecycle ─────────────────────────────────────────────

/// Create a new engine handle. Never returns NULL.
#[unsafe(no_mangle)]
pub extern "C" fn accent_new() -> *mut AccentHandle {
    Box::into_raw(Box::new(AccentHandle::new()))
}

/// Free a handle created by `accent_new`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn accent_free(handle: *mut AccentHandle) {
    if !handle.is_null() {
        drop(unsafe { Box::from_raw(handle) });
    }
}

// ── Notation and syllables ──────────────────────────────────────

/// Convert a transcription to IPA.
///
/// Returns a heap-allocated string (free with `accent_free_str`), or NULL on
/// a NULL handle or invalid UTF-8 input.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn accent_transcription_to_ipa(
    handle: *const AccentHandle,
    transcription: *const c_char,
) -> *mut c_char {
    let Some(handle) = (unsafe { handle.as_ref() }) else {
        return ptr::null_mut();
    };
    let Some(transcription) = cstr_to_str(transcription) else {
        return ptr::null_mut();
    };
    str_to_c(&handle.transcription_to_ipa(transcription))
}

/// Split a transcription into syllables.
///
/// Returns a NULL-terminated array of C strings (free with
/// `accent_free_str_array`). Returns NULL on error.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn accent_syllabify(
    handle: *const AccentHandle,
    transcription: *const c_char,
) -> *mut *mut c_char {
    let Some(handle) = (unsafe { handle.as_ref() }) else {
        return ptr::null_mut();
    };
    let Some(transcription) = cstr_to_str(transcription) else {
        return ptr::null_mut();
    };
    strings_to_c_array(&handle.syllabify(transcription))
}

// ── Classification ──────────────────────────────────────────────

/// Detect the features a word demonstrates.
///
/// Returns a NULL-terminated array of feature ids in declared order (free
/// with `accent_free_str_array`). Returns NULL on error.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn accent_classify_features(
    handle: *const AccentHandle,
    word: *const c_char,
    transcription: *const c_char,
) -> *mut *mut c_char {
    let Some(handle) = (unsafe { handle.as_ref() }) else {
        return ptr::null_mut();
    };
    let (Some(word), Some(transcription)) = (cstr_to_str(word), cstr_to_str(transcription))
    else {
        return ptr::null_mut();
    };
    let features = handle.classify_features(word, transcription);
    let ids: Vec<String> = feature_ids(&features).into_iter().map(String::from).collect();
    strings_to_c_array(&ids)
}

// ── Knowledge base ──────────────────────────────────────────────

/// Full record for a feature id as JSON.
///
/// Returns NULL when the id is unknown or on error. Free with
/// `accent_free_str`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn accent_feature_info_json(
    handle: *const AccentHandle,
    id: *const c_char,
) -> *mut c_char {
    let Some(handle) = (unsafe { handle.as_ref() }) else {
        return ptr::null_mut();
    };
    let Some(id) = cstr_to_str(id) else {
        return ptr::null_mut();
    };
    match handle.feature_info(id) {
        Some(record) => json_to_c(record),
        None => ptr::null_mut(),
    }
}

/// Examples for a feature id as a JSON array; `[]` when the id is unknown.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn accent_feature_examples_json(
    handle: *const AccentHandle,
    id: *const c_char,
) -> *mut c_char {
    let Some(handle) = (unsafe { handle.as_ref() }) else {
        return ptr::null_mut();
    };
    let Some(id) = cstr_to_str(id) else {
        return ptr::null_mut();
    };
    json_to_c(handle.feature_examples(id))
}

/// `[{id, name, description}, ...]` for every feature, in declared order.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn accent_feature_summary_json(handle: *const AccentHandle) -> *mut c_char {
    let Some(handle) = (unsafe { handle.as_ref() }) else {
        return ptr::null_mut();
    };
    json_to_c(&handle.feature_summary())
}

// ── Word lists ──────────────────────────────────────────────────

/// Build a word-list entry as JSON. Free with `accent_free_str`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn accent_build_word_entry_json(
    handle: *const AccentHandle,
    text: *const c_char,
    transcription: *const c_char,
    clip_id: *const c_char,
) -> *mut c_char {
    let Some(handle) = (unsafe { handle.as_ref() }) else {
        return ptr::null_mut();
    };
    let (Some(text), Some(transcription), Some(clip_id)) =
        (cstr_to_str(text), cstr_to_str(transcription), cstr_to_str(clip_id))
    else {
        return ptr::null_mut();
    };
    json_to_c(&handle.build_word_entry(text, transcription, clip_id))
}

// ── Utility ─────────────────────────────────────────────────────

/// Return the library version string.
///
/// The returned pointer is valid for the lifetime of the library (static).
/// Do NOT free this pointer.
#[unsafe(no_mangle)]
pub extern "C" fn accent_version() -> *const c_char {
    static VERSION: std::sync::LazyLock<CString> =
        std::sync::LazyLock::new(|| CString::new(AccentHandle::get_version()).unwrap_or_default());
    VERSION.as_ptr()
}

/// Free a heap-allocated C string returned by accent functions.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn accent_free_str(s: *mut c_char) {
    free_c_str(s);
}

/// Free a NULL-terminated array of C strings.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn accent_free_str_array(arr: *mut *mut c_char) {
    free_null_terminated_array(arr);
}

// ── Internal helpers ────────────────────────────────────────────

fn cstr_to_str<'a>(s: *const c_char) -> Option<&'a str> {
    if s.is_null() {
        return None;
    }
    unsafe { CStr::from_ptr(s) }.to_str().ok()
}

fn str_to_c(s: &str) -> *mut c_char {
    CString::new(s).unwrap_or_default().into_raw()
}

fn json_to_c<T: Serialize + ?Sized>(value: &T) -> *mut c_char {
    match serde_json::to_string(value) {
        Ok(json) => str_to_c(&json),
        Err(_) => ptr::null_mut(),
    }
}

fn free_c_str(s: *mut c_char) {
    if !s.is_null() {
        drop(unsafe { CString::from_raw(s) });
    }
}

fn strings_to_c_array(strings: &[String]) -> *mut *mut c_char {
    let mut ptrs: Vec<*mut c_char> = strings.iter().map(|s| str_to_c(s)).collect();
    ptrs.push(ptr::null_mut()); // NULL terminator
    Box::into_raw(ptrs.into_boxed_slice()).cast()
}

fn free_null_terminated_array(arr: *mut *mut c_char) {
    if arr.is_null() {
        return;
    }
    let mut i = 0;
    loop {
        let p = unsafe { *arr.add(i) };
        if p.is_null() {
            break;
        }
        free_c_str(p);
        i += 1;
    }
    // The array was allocated as a boxed slice of i+1 pointers.
    drop(unsafe { Box::from_raw(ptr::slice_from_raw_parts_mut(arr, i + 1)) });
}
