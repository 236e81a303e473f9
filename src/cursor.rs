use half::f16;

/// The type of the value a [`DecodeCursor`] is positioned on, with the
/// fixed-size payload already extracted by the decoder.
///
/// Negative integers carry the raw encoded magnitude `N`, which stands for
/// the logical value `-1 - N`. The formatter performs the `+1` correction
/// (and its overflow handling) itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ValueType {
    Unsigned(u64),
    /// Raw magnitude `N` encoding the logical value `-1 - N`.
    Negative(u64),
    Bytes,
    Text,
    Array,
    Map,
    Tag(u64),
    Simple(u8),
    Bool(bool),
    Null,
    Undefined,
    Float(Float),
    /// The decoder could not recognize the value's type. Formatting emits
    /// the literal `invalid` and then fails.
    Invalid,
}

/// A floating-point value carrying its source width.
///
/// Each width keeps its native representation; rendering widens to `f64`
/// and appends the width suffix, so all three share one output path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Float {
    Half(f16),
    Single(f32),
    Double(f64),
}

impl Float {
    /// The value widened to `f64` for classification and rendering.
    pub fn value(self) -> f64 {
        match self {
            Float::Half(v) => v.to_f64(),
            Float::Single(v) => f64::from(v),
            Float::Double(v) => v,
        }
    }

    /// The diagnostic-notation width suffix: `f16`, `f`, or empty.
    pub fn suffix(self) -> &'static str {
        match self {
            Float::Half(_) => "f16",
            Float::Single(_) => "f",
            Float::Double(_) => "",
        }
    }
}

/// Pull-style cursor over a decoded CBOR value stream.
///
/// This is the contract the formatter consumes; the byte-level decoder that
/// implements it lives outside this crate. The implementation guarantees
/// structural well-formedness: matched container nesting, an even number of
/// elements in every map, and `at_end` reporting the end of the innermost
/// open container. The formatter trusts that structure but independently
/// re-validates the bytes of every text string.
///
/// Positioning rules:
///
/// - `take_byte_string`/`take_text_string` hand the duplicated bytes to the
///   caller and leave the cursor past the string.
/// - `enter_container` moves onto the first element; `leave_container` is
///   called once the walker reaches the end marker (or the declared count)
///   and leaves the cursor past the whole container.
/// - `advance_fixed` steps past the current fixed-size value: integers,
///   simple values, floats, and tag heads.
pub trait DecodeCursor {
    /// The decoder's own error type, propagated through formatting
    /// unchanged.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Whether the cursor has consumed the last element of the innermost
    /// open container (or, at the top level, the whole input).
    fn at_end(&self) -> bool;

    /// The type of the current value.
    fn value_type(&self) -> ValueType;

    /// Whether the current container declared its length upfront.
    /// Indefinite-length containers answer `false`.
    fn is_length_known(&self) -> bool;

    /// Duplicates the current byte string, advancing past it. The returned
    /// buffer is owned by the caller.
    fn take_byte_string(&mut self) -> Result<Vec<u8>, Self::Error>;

    /// Duplicates the current text string's raw bytes, advancing past it.
    /// No UTF-8 validation is implied.
    fn take_text_string(&mut self) -> Result<Vec<u8>, Self::Error>;

    /// Descends into the current array or map.
    fn enter_container(&mut self) -> Result<(), Self::Error>;

    /// Ascends out of the container previously entered, consuming its end
    /// marker if the length was indefinite.
    fn leave_container(&mut self) -> Result<(), Self::Error>;

    /// Advances past the current fixed-size value or tag head.
    fn advance_fixed(&mut self) -> Result<(), Self::Error>;
}
