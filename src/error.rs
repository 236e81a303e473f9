use thiserror::Error;

/// Errors that can abort formatting.
///
/// The first error raised anywhere in the traversal is returned to the
/// caller unchanged; nothing is retried or swallowed. Two handlers emit
/// partial output before failing, and only those two: the text-string
/// handler may have written the opening quote before UTF-8 validation
/// fails, and the invalid-type handler writes the literal `invalid`
/// before reporting `UnknownType`.
#[derive(Debug, Error)]
pub enum Error {
    /// The output sink reported a write failure.
    #[error("output write failed: {0}")]
    Io(#[from] std::io::Error),

    /// The decode cursor reported malformed structure. The cursor's own
    /// error is carried unmodified as the source.
    #[error("decode failed: {0}")]
    Decode(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// A text string failed UTF-8 re-validation.
    #[error("invalid UTF-8 in text string")]
    InvalidUtf8,

    /// The cursor surfaced an unrecognized or corrupt value type.
    #[error("unknown value type")]
    UnknownType,

    /// Container and tag nesting exceeded the depth limit.
    #[error("nesting exceeds maximum depth")]
    NestingTooDeep,
}

impl Error {
    /// Wraps a cursor error without translating it.
    pub fn decode(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Error::Decode(Box::new(err))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
