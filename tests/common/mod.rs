//! A minimal decode cursor over raw CBOR bytes, standing in for the
//! byte-stream decoder the formatter consumes in production. It decodes
//! heads per RFC 8949 §3 and tracks container frames; it does not try to
//! be a full validating decoder.
#![allow(dead_code)]

use cbor_pretty::{DecodeCursor, Float, ValueType};
use half::f16;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum CursorError {
    #[error("input truncated")]
    Truncated,
    #[error("missing break marker")]
    MissingBreak,
    #[error("malformed indefinite string chunk")]
    BadChunk,
}

#[derive(Debug, Clone, Copy)]
struct Head {
    major: u8,
    info: u8,
    arg: u64,
    len: usize,
    indefinite: bool,
}

/// Reads the head (initial byte + argument) at `pos`. `None` means a
/// truncated or reserved encoding.
fn head_at(buf: &[u8], pos: usize) -> Option<Head> {
    let initial = *buf.get(pos)?;
    let major = initial >> 5;
    let info = initial & 0x1f;
    match info {
        0..=23 => Some(Head { major, info, arg: u64::from(info), len: 1, indefinite: false }),
        24..=27 => {
            let n = 1usize << (info - 24);
            let bytes = buf.get(pos + 1..pos + 1 + n)?;
            let mut arg = 0u64;
            for &b in bytes {
                arg = (arg << 8) | u64::from(b);
            }
            Some(Head { major, info, arg, len: 1 + n, indefinite: false })
        }
        28..=30 => None,
        _ => Some(Head { major, info, arg: 0, len: 1, indefinite: true }),
    }
}

struct Frame {
    /// Values left in a definite container; `None` when indefinite.
    remaining: Option<u64>,
}

pub struct SliceCursor<'a> {
    buf: &'a [u8],
    pos: usize,
    stack: Vec<Frame>,
}

impl<'a> SliceCursor<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        SliceCursor { buf, pos: 0, stack: Vec::new() }
    }

    /// One complete value has been consumed in the current container.
    fn complete_one(&mut self) {
        if let Some(frame) = self.stack.last_mut() {
            if let Some(remaining) = frame.remaining.as_mut() {
                *remaining -= 1;
            }
        }
    }

    fn take_string(&mut self, major: u8) -> Result<Vec<u8>, CursorError> {
        let head = head_at(self.buf, self.pos).ok_or(CursorError::Truncated)?;
        if !head.indefinite {
            let start = self.pos + head.len;
            let end = start.checked_add(head.arg as usize).ok_or(CursorError::Truncated)?;
            let payload = self.buf.get(start..end).ok_or(CursorError::Truncated)?;
            let owned = payload.to_vec();
            self.pos = end;
            self.complete_one();
            return Ok(owned);
        }

        // Chunked string: definite chunks of the same major type up to the
        // break marker.
        let mut owned = Vec::new();
        self.pos += head.len;
        loop {
            if self.buf.get(self.pos) == Some(&0xff) {
                self.pos += 1;
                break;
            }
            let chunk = head_at(self.buf, self.pos).ok_or(CursorError::Truncated)?;
            if chunk.major != major || chunk.indefinite {
                return Err(CursorError::BadChunk);
            }
            let start = self.pos + chunk.len;
            let end = start.checked_add(chunk.arg as usize).ok_or(CursorError::Truncated)?;
            let payload = self.buf.get(start..end).ok_or(CursorError::Truncated)?;
            owned.extend_from_slice(payload);
            self.pos = end;
        }
        self.complete_one();
        Ok(owned)
    }
}

impl DecodeCursor for SliceCursor<'_> {
    type Error = CursorError;

    fn at_end(&self) -> bool {
        match self.stack.last() {
            Some(frame) => match frame.remaining {
                Some(remaining) => remaining == 0,
                None => self.buf.get(self.pos) == Some(&0xff),
            },
            None => self.pos >= self.buf.len(),
        }
    }

    fn value_type(&self) -> ValueType {
        let Some(head) = head_at(self.buf, self.pos) else {
            return ValueType::Invalid;
        };
        match head.major {
            0 => ValueType::Unsigned(head.arg),
            1 => ValueType::Negative(head.arg),
            2 => ValueType::Bytes,
            3 => ValueType::Text,
            4 => ValueType::Array,
            5 => ValueType::Map,
            6 => ValueType::Tag(head.arg),
            _ => match head.info {
                20 => ValueType::Bool(false),
                21 => ValueType::Bool(true),
                22 => ValueType::Null,
                23 => ValueType::Undefined,
                24 if head.arg >= 32 => ValueType::Simple(head.arg as u8),
                24 => ValueType::Invalid,
                25 => ValueType::Float(Float::Half(f16::from_bits(head.arg as u16))),
                26 => ValueType::Float(Float::Single(f32::from_bits(head.arg as u32))),
                27 => ValueType::Float(Float::Double(f64::from_bits(head.arg))),
                31 => ValueType::Invalid, // stray break
                _ => ValueType::Simple(head.info),
            },
        }
    }

    fn is_length_known(&self) -> bool {
        head_at(self.buf, self.pos).is_none_or(|head| !head.indefinite)
    }

    fn take_byte_string(&mut self) -> Result<Vec<u8>, CursorError> {
        self.take_string(2)
    }

    fn take_text_string(&mut self) -> Result<Vec<u8>, CursorError> {
        self.take_string(3)
    }

    fn enter_container(&mut self) -> Result<(), CursorError> {
        let head = head_at(self.buf, self.pos).ok_or(CursorError::Truncated)?;
        self.pos += head.len;
        let remaining = if head.indefinite {
            None
        } else if head.major == 5 {
            // A map head declares pairs; the frame counts values.
            Some(head.arg.checked_mul(2).ok_or(CursorError::Truncated)?)
        } else {
            Some(head.arg)
        };
        self.stack.push(Frame { remaining });
        Ok(())
    }

    fn leave_container(&mut self) -> Result<(), CursorError> {
        let frame = self.stack.pop().expect("leave_container without enter");
        if frame.remaining.is_none() {
            if self.buf.get(self.pos) != Some(&0xff) {
                return Err(CursorError::MissingBreak);
            }
            self.pos += 1;
        }
        self.complete_one();
        Ok(())
    }

    fn advance_fixed(&mut self) -> Result<(), CursorError> {
        let head = head_at(self.buf, self.pos).ok_or(CursorError::Truncated)?;
        self.pos += head.len;
        // A tag head is only the prefix of its item; the wrapped value
        // completes it.
        if head.major != 6 {
            self.complete_one();
        }
        Ok(())
    }
}

/// Formats one item from `bytes` into diagnostic notation.
pub fn diag_bytes(bytes: &[u8]) -> cbor_pretty::Result<String> {
    let mut cursor = SliceCursor::new(bytes);
    cbor_pretty::cbor_item_diagnostic(&mut cursor)
}

/// Formats one item given as a hex string; panics on any failure.
pub fn diag(hex_input: &str) -> String {
    diag_bytes(&hex::decode(hex_input).unwrap()).unwrap()
}

/// Formats one item given as a hex string, expecting failure.
pub fn diag_err(hex_input: &str) -> cbor_pretty::Error {
    diag_bytes(&hex::decode(hex_input).unwrap()).unwrap_err()
}
