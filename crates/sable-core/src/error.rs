use thiserror::Error;

/// Errors produced at the crate's fallible seams.
///
/// Geometry and transform arithmetic is total over the float domain and never
/// fails; NaN and infinity propagate per IEEE-754. The variants here cover
/// caller mistakes (buffer shape) and raw values arriving over the engine ABI.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum Error {
    /// Batch mapping was called with differently sized buffers.
    ///
    /// Returned before any element is written; the destination is untouched.
    #[error("invalid argument: destination holds {dst} entries, source holds {src}")]
    BufferLengthMismatch { dst: usize, src: usize },

    /// An integer arriving over the ABI does not name a known color type.
    #[error("unsupported color type value {0}")]
    UnsupportedColorType(i32),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_values() {
        let e = Error::BufferLengthMismatch { dst: 3, src: 5 };
        assert_eq!(
            e.to_string(),
            "invalid argument: destination holds 3 entries, source holds 5"
        );

        let e = Error::UnsupportedColorType(42);
        assert_eq!(e.to_string(), "unsupported color type value 42");
    }
}
