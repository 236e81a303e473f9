use std::io::Write;

use crate::cursor::{DecodeCursor, Float, ValueType};
use crate::escape;
use crate::{Error, Result};

/// Nesting limit applied by [`format_cbor_item`]. Containers and tags each
/// consume one level.
pub const DEFAULT_MAX_DEPTH: usize = 1024;

/// Formats the single CBOR item under `cursor` as diagnostic notation,
/// writing the text to `out`.
///
/// On success the cursor is left immediately past the formatted item, so
/// consecutive items in one stream can be formatted by consecutive calls.
/// Output reaches the sink in left-to-right, depth-first order.
///
/// Nesting is limited to [`DEFAULT_MAX_DEPTH`]; use
/// [`format_cbor_item_with_depth`] to choose the limit.
///
/// # Arguments
///
/// * `cursor` - A decode cursor positioned on exactly one CBOR value.
/// * `out` - The sink receiving the diagnostic text.
///
/// # Errors
///
/// Returns the first error encountered: a sink write failure, a decoder
/// error (propagated unchanged), invalid UTF-8 in a text string, an
/// unknown value type, or exceeded nesting depth. Partial text may
/// already have been written when the error surfaced mid-value.
///
/// # Example
///
/// ```text
/// a2 01 61 61 02 61 62   ~~>   {1: "a", 2: "b"}
/// ```
pub fn format_cbor_item<C, W>(cursor: &mut C, out: &mut W) -> Result<()>
where
    C: DecodeCursor,
    W: Write,
{
    format_value(cursor, out, DEFAULT_MAX_DEPTH)
}

/// Formats the single CBOR item under `cursor` with a caller-supplied
/// nesting limit.
///
/// `max_depth` bounds the recursion: every array, map, and tag consumes
/// one level, and a value needing more than `max_depth` levels fails with
/// [`Error::NestingTooDeep`] before its opening delimiter is written. A
/// `max_depth` of zero admits scalars only.
pub fn format_cbor_item_with_depth<C, W>(cursor: &mut C, out: &mut W, max_depth: usize) -> Result<()>
where
    C: DecodeCursor,
    W: Write,
{
    format_value(cursor, out, max_depth)
}

/// Formats the single CBOR item under `cursor` and returns the diagnostic
/// notation as a `String`.
///
/// Convenience wrapper over [`format_cbor_item`] for callers that want the
/// text rather than streaming it to a sink.
pub fn cbor_item_diagnostic<C: DecodeCursor>(cursor: &mut C) -> Result<String> {
    let mut buf = Vec::new();
    format_cbor_item(cursor, &mut buf)?;
    // The formatter only ever emits ASCII.
    Ok(String::from_utf8(buf).expect("diagnostic output is ASCII"))
}

//
// === Private Functions ===
//

fn format_value<C, W>(it: &mut C, out: &mut W, depth: usize) -> Result<()>
where
    C: DecodeCursor,
    W: Write,
{
    match it.value_type() {
        ValueType::Array => return format_container(it, out, depth, false),
        ValueType::Map => return format_container(it, out, depth, true),

        ValueType::Bytes => {
            let buffer = it.take_byte_string().map_err(Error::decode)?;
            return escape::hex_dump(out, &buffer);
        }

        ValueType::Text => {
            let buffer = it.take_text_string().map_err(Error::decode)?;
            out.write_all(b"\"")?;
            escape::utf8_escaped_dump(out, &buffer)?;
            out.write_all(b"\"")?;
            return Ok(());
        }

        ValueType::Tag(tag) => {
            if depth == 0 {
                return Err(Error::NestingTooDeep);
            }
            write!(out, "{}(", tag)?;
            it.advance_fixed().map_err(Error::decode)?;
            format_value(it, out, depth - 1)?;
            out.write_all(b")")?;
            return Ok(());
        }

        ValueType::Unsigned(value) => write!(out, "{}", value)?,

        // CBOR stores the negative number X as -1 - X (that is, -1 is
        // stored as 0, -2 as 1 and so forth), so the displayed magnitude
        // is one past the raw value and can overflow u64.
        ValueType::Negative(raw) => match raw.checked_add(1) {
            Some(magnitude) => write!(out, "-{}", magnitude)?,
            None => out.write_all(b"-18446744073709551616")?,
        },

        ValueType::Simple(value) => write!(out, "simple({})", value)?,
        ValueType::Bool(true) => out.write_all(b"true")?,
        ValueType::Bool(false) => out.write_all(b"false")?,
        ValueType::Null => out.write_all(b"null")?,
        ValueType::Undefined => out.write_all(b"undefined")?,

        ValueType::Float(value) => write_float(out, value)?,

        ValueType::Invalid => {
            // Deliberate partial emission: the literal still reaches the
            // sink so malformed input can be inspected.
            out.write_all(b"invalid")?;
            return Err(Error::UnknownType);
        }
    }

    // Fixed-size leaf: printed above, now step past it.
    it.advance_fixed().map_err(Error::decode)
}

fn format_container<C, W>(it: &mut C, out: &mut W, depth: usize, is_map: bool) -> Result<()>
where
    C: DecodeCursor,
    W: Write,
{
    if depth == 0 {
        return Err(Error::NestingTooDeep);
    }

    out.write_all(if is_map { b"{" } else { b"[" })?;
    if !it.is_length_known() {
        out.write_all(b"_ ")?;
    }
    it.enter_container().map_err(Error::decode)?;

    let mut separator = "";
    while !it.at_end() {
        out.write_all(separator.as_bytes())?;
        separator = ", ";

        format_value(it, out, depth - 1)?;
        if is_map {
            // That was the key; the cursor guarantees a paired value.
            out.write_all(b": ")?;
            format_value(it, out, depth - 1)?;
        }
    }

    it.leave_container().map_err(Error::decode)?;
    out.write_all(if is_map { b"}" } else { b"]" })?;
    Ok(())
}

fn write_float<W: Write>(out: &mut W, float: Float) -> Result<()> {
    let value = float.value();

    // NaN and the infinities never carry a width suffix.
    if value.is_nan() {
        out.write_all(b"NaN")?;
        return Ok(());
    }
    if value.is_infinite() {
        let spelled: &[u8] = if value < 0.0 { b"-Infinity" } else { b"Infinity" };
        out.write_all(spelled)?;
        return Ok(());
    }

    let suffix = float.suffix();
    let magnitude = value.abs();
    if magnitude < 18_446_744_073_709_551_616.0 && (magnitude as u64) as f64 == magnitude {
        // Fits a 64-bit integer: show it as one, with a trailing `.` to
        // disambiguate from a true CBOR integer.
        let sign = if value < 0.0 { "-" } else { "" };
        write!(out, "{}{}.{}", sign, magnitude as u64, suffix)?;
    } else {
        write!(out, "{}{}", value, suffix)?;
    }
    Ok(())
}
