use crate::coords::IRect;

/// Whether a decode target's memory is already zeroed.
///
/// Codecs skip clearing rows they fully overwrite when the caller promises
/// zeroed memory.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum ZeroInitialized {
    Yes,
    #[default]
    No,
}

/// Decode configuration passed through to the native codec.
///
/// `subset` limits the decode to a region of the image; `None` decodes the
/// whole frame.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct CodecOptions {
    pub zero_initialized: ZeroInitialized,
    pub subset: Option<IRect>,
}

impl CodecOptions {
    #[inline]
    pub const fn new(zero_initialized: ZeroInitialized) -> Self {
        Self { zero_initialized, subset: None }
    }

    #[inline]
    pub const fn with_subset(zero_initialized: ZeroInitialized, subset: IRect) -> Self {
        Self { zero_initialized, subset: Some(subset) }
    }
}
