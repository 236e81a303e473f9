//! # CBOR Diagnostic Notation Formatter
//!
//! This crate renders a decoded [CBOR (RFC
//! 8949)](https://datatracker.ietf.org/doc/html/rfc8949) value stream as
//! human-readable [diagnostic
//! notation](https://datatracker.ietf.org/doc/html/rfc8949#name-diagnostic-notation).
//!
//! It is intended for debugging and inspecting binary protocol payloads: the
//! input is treated as adversarial, so text strings are re-validated as
//! UTF-8 independently of the decoder, overflowing negative magnitudes are
//! rendered exactly, and corrupt type tags abort with an error instead of
//! panicking. It is a one-directional formatter; parsing diagnostic
//! notation back into CBOR is a different crate's job.
//!
//! The primary functions provided are:
//!
//! - `format_cbor_item`: Formats the single CBOR value under a decode
//!   cursor, streaming the text to any `std::io::Write` sink.
//! - `format_cbor_item_with_depth`: The same, with a caller-supplied
//!   nesting limit.
//! - `cbor_item_diagnostic`: Collects the diagnostic text into a `String`.
//!
//! | Type                 | Example output                                 |
//! | -------------------- | ---------------------------------------------- |
//! | Boolean              | `true`<br>`false`                              |
//! | Null / Undefined     | `null`<br>`undefined`                          |
//! | Integers             | `0`<br>`42`<br>`-1`<br>`-18446744073709551616` |
//! | Floats               | `3.14`<br>`2.`<br>`1.5f16`<br>`100000.f`<br>`NaN`<br>`-Infinity` |
//! | Byte Strings         | `h'68656c6c6f'`                                |
//! | Text Strings         | `"hello"`<br>`"\uD83D\uDE00"`         |
//! | Tagged Values        | `0("2013-03-21T20:04:00Z")`<br>`2(h'0102')`    |
//! | Simple Values        | `simple(16)`                                   |
//! | Arrays               | `[1, 2, 3]`<br>`[_ 1, 2]` (indefinite length)  |
//! | Maps                 | `{1: "a", 2: "b"}`<br>`{_ "k": 1}`             |
//!
//! ## The Decode Cursor
//!
//! The formatter does not read CBOR bytes itself. It consumes the
//! [`DecodeCursor`] trait: a pull-style cursor over one decoded value,
//! typically backed by a byte-stream decoder that has already checked
//! structural well-formedness (matched nesting, even map arity). The
//! formatter trusts that structure but nothing else: string contents are
//! re-validated here, and tags are rendered purely syntactically as
//! `N(value)` with no registry lookup, so unknown tags format fine.
//!
//! ## Nesting Depth
//!
//! Formatting recurses per container and tag level. To keep adversarial,
//! deeply-nested input from exhausting the call stack, recursion is bounded:
//! `format_cbor_item` applies [`DEFAULT_MAX_DEPTH`], and
//! `format_cbor_item_with_depth` lets the caller pick the ceiling.

mod cursor;
pub use cursor::{DecodeCursor, Float, ValueType};

mod error;
pub use error::{Error, Result};

mod escape;

mod format;
pub use format::{
    DEFAULT_MAX_DEPTH,
    cbor_item_diagnostic,
    format_cbor_item,
    format_cbor_item_with_depth,
};
