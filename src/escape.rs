use std::io::Write;

use crate::{Error, Result};

/// Writes a byte string as `h'…'` with two lowercase hex digits per byte.
pub(crate) fn hex_dump<W: Write>(out: &mut W, bytes: &[u8]) -> Result<()> {
    write!(out, "h'{}'", hex::encode(bytes))?;
    Ok(())
}

/// Decodes `bytes` as UTF-8 and writes it as a JSON-style escaped string,
/// without the surrounding quotes.
///
/// Validation is independent of whatever the decoder claims: overlong
/// sequences, surrogate code points, values above U+10FFFF, stray or
/// missing continuation bytes, and truncated sequences all fail with
/// [`Error::InvalidUtf8`]. Output is pure ASCII; code points above U+FFFF
/// are written as a UTF-16 surrogate pair.
pub(crate) fn utf8_escaped_dump<W: Write>(out: &mut W, bytes: &[u8]) -> Result<()> {
    let mut i = 0;
    while i < bytes.len() {
        let byte = bytes[i];
        i += 1;

        if byte < 0x80 {
            match byte {
                0x20..=0x7e if byte != b'"' && byte != b'\\' => out.write_all(&[byte])?,
                b'"' => out.write_all(b"\\\"")?,
                b'\\' => out.write_all(b"\\\\")?,
                0x08 => out.write_all(b"\\b")?,
                0x0c => out.write_all(b"\\f")?,
                0x0a => out.write_all(b"\\n")?,
                0x0d => out.write_all(b"\\r")?,
                0x09 => out.write_all(b"\\t")?,
                _ => write!(out, "\\u{:04X}", byte)?,
            }
            continue;
        }

        // Multi-byte sequence. Leads 0x80..=0xC1 cover stray continuation
        // bytes and overlong two-byte forms; 0xF5.. can only encode code
        // points above U+10FFFF.
        let (continuations, min_code_point, lead_bits) = match byte {
            0xc2..=0xdf => (1, 0x80u32, u32::from(byte & 0x1f)),
            0xe0..=0xef => (2, 0x800, u32::from(byte & 0x0f)),
            0xf0..=0xf4 => (3, 0x10000, u32::from(byte & 0x07)),
            _ => return Err(Error::InvalidUtf8),
        };

        if bytes.len() - i < continuations {
            return Err(Error::InvalidUtf8);
        }

        let mut code_point = lead_bits;
        for _ in 0..continuations {
            let cont = bytes[i];
            i += 1;
            if cont & 0xc0 != 0x80 {
                return Err(Error::InvalidUtf8);
            }
            code_point = (code_point << 6) | u32::from(cont & 0x3f);
        }

        // Overlong, surrogate, or out of range.
        if code_point < min_code_point
            || (0xd800..=0xdfff).contains(&code_point)
            || code_point > 0x10_ffff
        {
            return Err(Error::InvalidUtf8);
        }

        if code_point > 0xffff {
            write!(
                out,
                "\\u{:04X}\\u{:04X}",
                (code_point >> 10) + 0xd7c0,
                (code_point % 0x400) + 0xdc00
            )?;
        } else {
            write!(out, "\\u{:04X}", code_point)?;
        }
    }
    Ok(())
}
