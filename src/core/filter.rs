//! Membership filter trait.
//!
//! Elements are opaque byte sequences. Implementations guarantee **no false
//! negatives** and allow **bounded false positives**.
//!
//! ```text
//! filter.insert(x);
//! assert!(filter.contains(x)); // MUST be true
//! ```
//!
//! Modification requires `&mut self` and queries take `&self`, so the borrow
//! checker enforces single-writer/multiple-reader use. To share a filter
//! across threads, wrap it in `Mutex` or `RwLock`.

/// Approximate set membership over byte sequences.
///
/// # Examples
///
/// ```
/// use spellbloom::core::MembershipFilter;
/// use spellbloom::BloomFilter;
///
/// fn load<F: MembershipFilter>(filter: &mut F, words: &[&str]) {
///     for word in words {
///         filter.insert(word.as_bytes());
///     }
/// }
///
/// let mut filter = BloomFilter::new(10, 0.01).unwrap();
/// load(&mut filter, &["cat", "dog"]);
/// assert!(MembershipFilter::contains(&filter, b"cat"));
/// ```
pub trait MembershipFilter {
    /// Insert an element.
    ///
    /// After this call `contains(element)` returns `true`. Inserting the same
    /// element again leaves the filter unchanged.
    fn insert(&mut self, element: &[u8]);

    /// Test whether an element might have been inserted.
    ///
    /// * `true` - element **might** be present (could be a false positive)
    /// * `false` - element was **definitely never** inserted
    #[must_use]
    fn contains(&self, element: &[u8]) -> bool;

    /// Number of bits in the underlying array (m).
    #[must_use]
    fn num_bits(&self) -> usize;

    /// Number of bit positions touched per element (k).
    #[must_use]
    fn hash_count(&self) -> usize;

    /// False positive rate estimated from the current fill ratio.
    #[must_use]
    fn estimated_fp_rate(&self) -> f64;
}
