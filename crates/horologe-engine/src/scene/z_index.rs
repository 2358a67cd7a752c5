/// Z-ordering key for draw items.
///
/// Higher values appear on top of lower values.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
pub struct ZIndex(pub i32);

impl ZIndex {
    #[inline]
    pub const fn new(v: i32) -> Self {
        Self(v)
    }

    /// Returns a layer `by` steps above this one.
    #[inline]
    #[must_use]
    pub const fn above(self, by: i32) -> Self {
        Self(self.0 + by)
    }
}
