/// Controls how [`AtomicHtmlToken`] normalizes attribute lists.
///
/// [`AtomicHtmlToken`]: super::AtomicHtmlToken
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct AttributeSettings {
    /// Attribute lists longer than this are deduplicated with a hash
    /// set instead of a linear scan over the already accepted attributes.
    ///
    /// ### Default
    ///
    /// `16`.
    pub hash_dedup_threshold: usize,
}

impl Default for AttributeSettings {
    #[inline]
    fn default() -> Self {
        AttributeSettings {
            hash_dedup_threshold: 16,
        }
    }
}
