/// A fixed-width dataset element.
///
/// The driver is generic over this trait so the byte-oriented smoke run and
/// the integer benchmark share one code path instead of two near-identical
/// drivers. Samples are narrowed with wrapping truncation; losing high bits
/// on narrow elements is expected, not an error.
pub trait Element: Copy + Eq + Send + 'static {
    /// Element width in bytes.
    const WIDTH: usize;

    /// Narrows a raw sample to this element width.
    fn from_sample(sample: i64) -> Self;

    /// Appends the little-endian encoding of `self` to `out`.
    fn extend_le(self, out: &mut Vec<u8>);
}

impl Element for u8 {
    const WIDTH: usize = 1;

    fn from_sample(sample: i64) -> Self {
        sample as u8
    }

    fn extend_le(self, out: &mut Vec<u8>) {
        out.push(self);
    }
}

impl Element for i32 {
    const WIDTH: usize = 4;

    fn from_sample(sample: i64) -> Self {
        sample as i32
    }

    fn extend_le(self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.to_le_bytes());
    }
}
