//! Packed bit array backed by 64-bit slots.
//!
//! # Memory Layout
//!
//! Bits are packed into `u64` slots in little-endian bit order:
//!
//! ```text
//! Slot 0: [bit 0][bit 1]...[bit 63]
//! Slot 1: [bit 64][bit 65]...[bit 127]
//! Slot 2: [bit 128][bit 129]...[bit 191]
//! ```
//!
//! Read as one multi-word integer with slot 0 as the least-significant word,
//! the slots reproduce exactly the pattern written through [`PackedBitArray::set`].
//! Bits past `len()` in the last slot are padding and always read as 0.
//!
//! # Examples
//!
//! ```
//! use spellbloom::core::bitset::PackedBitArray;
//!
//! let mut bits = PackedBitArray::new(128).unwrap();
//! bits.set(64, true).unwrap();
//! assert!(bits.get(64).unwrap());
//! assert_eq!(bits.slots(), &[0, 1]);
//! assert_eq!(bits.to_hex(), "00000000000000010000000000000000");
//! ```

use crate::error::{Result, SpellBloomError};

/// Number of bits held by each slot.
pub const BITS_PER_SLOT: usize = 64;

/// Fixed-size bit array stored in `u64` slots.
///
/// Allocated once with every bit cleared, mutated one bit at a time, never
/// resized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedBitArray {
    slots: Box<[u64]>,
    num_bits: usize,
}

impl PackedBitArray {
    /// Create a bit array of `num_bits` bits, all cleared.
    ///
    /// Allocates `⌈num_bits / 64⌉` slots.
    ///
    /// # Errors
    ///
    /// - [`SpellBloomError::InvalidSize`] if `num_bits == 0`
    /// - [`SpellBloomError::InvalidParameters`] if the slots cannot be
    ///   allocated
    ///
    /// # Examples
    ///
    /// ```
    /// use spellbloom::core::bitset::PackedBitArray;
    ///
    /// let bits = PackedBitArray::new(100).unwrap();
    /// assert_eq!(bits.len(), 100);
    /// assert_eq!(bits.num_slots(), 2);
    /// assert!(PackedBitArray::new(0).is_err());
    /// ```
    pub fn new(num_bits: usize) -> Result<Self> {
        if num_bits == 0 {
            return Err(SpellBloomError::invalid_size(num_bits));
        }

        let count = slots_for(num_bits);
        let mut slots = Vec::new();
        slots.try_reserve_exact(count).map_err(|err| {
            SpellBloomError::invalid_parameters(format!(
                "cannot allocate {} slots for {} bits: {}",
                count, num_bits, err
            ))
        })?;
        slots.resize(count, 0u64);

        Ok(Self {
            slots: slots.into_boxed_slice(),
            num_bits,
        })
    }

    /// Rebuild a bit array from raw slot contents.
    ///
    /// `slots` must hold exactly `⌈num_bits / 64⌉` words. Padding bits of the
    /// last slot are cleared.
    ///
    /// # Errors
    ///
    /// - [`SpellBloomError::InvalidSize`] if `num_bits == 0`
    /// - [`SpellBloomError::InvalidParameters`] if the slot count does not match
    pub fn from_slots(num_bits: usize, slots: Vec<u64>) -> Result<Self> {
        if num_bits == 0 {
            return Err(SpellBloomError::invalid_size(num_bits));
        }

        let required = slots_for(num_bits);
        if slots.len() != required {
            return Err(SpellBloomError::invalid_parameters(format!(
                "{} bits need {} slots, got {}",
                num_bits,
                required,
                slots.len()
            )));
        }

        let mut slots = slots.into_boxed_slice();
        let used = num_bits % BITS_PER_SLOT;
        if used != 0 {
            slots[required - 1] &= (1u64 << used) - 1;
        }

        Ok(Self { slots, num_bits })
    }

    /// Total number of addressable bits.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.num_bits
    }

    /// Always `false` for a constructed array; provided for API completeness.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.num_bits == 0
    }

    /// Number of `u64` slots backing the array.
    #[must_use]
    #[inline]
    pub fn num_slots(&self) -> usize {
        self.slots.len()
    }

    /// Raw slot contents, slot 0 first.
    #[must_use]
    #[inline]
    pub fn slots(&self) -> &[u64] {
        &self.slots
    }

    /// Read the bit at `position`.
    ///
    /// # Errors
    ///
    /// [`SpellBloomError::IndexOutOfRange`] if `position >= len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use spellbloom::core::bitset::PackedBitArray;
    ///
    /// let bits = PackedBitArray::from_slots(128, vec![0, 1]).unwrap();
    /// assert!(!bits.get(0).unwrap());
    /// assert!(bits.get(64).unwrap());
    /// assert!(bits.get(128).is_err());
    /// ```
    pub fn get(&self, position: usize) -> Result<bool> {
        self.check(position)?;
        Ok(self.bit(position))
    }

    /// Set (`true`) or clear (`false`) the bit at `position`.
    ///
    /// Mutates exactly one slot; every other bit is untouched.
    ///
    /// # Errors
    ///
    /// [`SpellBloomError::IndexOutOfRange`] if `position >= len()`.
    pub fn set(&mut self, position: usize, value: bool) -> Result<()> {
        self.check(position)?;

        let (slot, offset) = locate(position);
        let mask = 1u64 << offset;
        if value {
            self.slots[slot] |= mask;
        } else {
            self.slots[slot] &= !mask;
        }
        Ok(())
    }

    /// Read a bit the caller already knows to be in range.
    ///
    /// # Panics
    ///
    /// Panics if `position >= len()`.
    #[inline]
    pub(crate) fn bit(&self, position: usize) -> bool {
        assert!(
            position < self.num_bits,
            "PackedBitArray index out of range: index={} len={}",
            position,
            self.num_bits
        );

        let (slot, offset) = locate(position);
        (self.slots[slot] >> offset) & 1 == 1
    }

    /// Set a bit the caller already knows to be in range.
    ///
    /// # Panics
    ///
    /// Panics if `position >= len()`.
    #[inline]
    pub(crate) fn raise(&mut self, position: usize) {
        assert!(
            position < self.num_bits,
            "PackedBitArray index out of range: index={} len={}",
            position,
            self.num_bits
        );

        let (slot, offset) = locate(position);
        self.slots[slot] |= 1u64 << offset;
    }

    /// Clear every bit.
    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = 0);
    }

    /// Number of bits set to 1.
    #[must_use]
    pub fn count_ones(&self) -> usize {
        self.slots.iter().map(|slot| slot.count_ones() as usize).sum()
    }

    /// Heap plus inline size in bytes.
    #[must_use]
    pub fn memory_usage(&self) -> usize {
        self.slots.len() * std::mem::size_of::<u64>() + std::mem::size_of::<Self>()
    }

    /// Integer projection as little-endian bytes.
    ///
    /// Slot 0 occupies bytes `[0, 8)`, slot 1 bytes `[8, 16)`, and so on; each
    /// slot is written least-significant byte first.
    #[must_use]
    pub fn to_le_bytes(&self) -> Vec<u8> {
        self.slots.iter().flat_map(|slot| slot.to_le_bytes()).collect()
    }

    /// Integer projection as a big-endian hex string.
    ///
    /// Zero-padded to 16 digits per slot, so a two-slot array with only
    /// bit 0 set renders as `"0000000000000000" + "0000000000000001"`.
    #[must_use]
    pub fn to_hex(&self) -> String {
        let be: Vec<u8> = self
            .slots
            .iter()
            .rev()
            .flat_map(|slot| slot.to_be_bytes())
            .collect();
        hex::encode(be)
    }

    #[inline]
    fn check(&self, position: usize) -> Result<()> {
        if position >= self.num_bits {
            return Err(SpellBloomError::index_out_of_range(position, self.num_bits));
        }
        Ok(())
    }
}

/// Split an absolute bit position into `(slot, offset)`.
#[inline]
const fn locate(position: usize) -> (usize, usize) {
    (position / BITS_PER_SLOT, position % BITS_PER_SLOT)
}

#[inline]
const fn slots_for(num_bits: usize) -> usize {
    num_bits.div_ceil(BITS_PER_SLOT)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_ONES: u64 = 0xFFFF_FFFF_FFFF_FFFF;

    #[test]
    fn test_new() {
        let bits = PackedBitArray::new(100).unwrap();
        assert_eq!(bits.len(), 100);
        assert_eq!(bits.num_slots(), 2); // ⌈100/64⌉ = 2
        assert!(!bits.is_empty());
        assert_eq!(bits.count_ones(), 0);
    }

    #[test]
    fn test_new_zero_bits_error() {
        assert_eq!(
            PackedBitArray::new(0),
            Err(SpellBloomError::InvalidSize { size: 0 })
        );
    }

    #[test]
    fn test_new_unallocatable_size_error() {
        assert!(matches!(
            PackedBitArray::new(usize::MAX),
            Err(SpellBloomError::InvalidParameters { .. })
        ));
    }

    #[test]
    fn test_slots_for_near_usize_max() {
        assert_eq!(slots_for(usize::MAX), usize::MAX / 64 + 1);
        assert_eq!(slots_for(usize::MAX - 63), usize::MAX / 64);
    }

    #[test]
    fn test_slot_count_at_multiples_of_64() {
        assert_eq!(PackedBitArray::new(1).unwrap().num_slots(), 1);
        assert_eq!(PackedBitArray::new(64).unwrap().num_slots(), 1);
        assert_eq!(PackedBitArray::new(65).unwrap().num_slots(), 2);
        assert_eq!(PackedBitArray::new(192).unwrap().num_slots(), 3);
    }

    #[test]
    fn test_locate() {
        let cases = [
            (0, (0, 0)),
            (1, (0, 1)),
            (63, (0, 63)),
            (64, (1, 0)),
            (65, (1, 1)),
            (74, (1, 10)),
            (129, (2, 1)),
        ];
        for (position, expected) in cases {
            assert_eq!(locate(position), expected, "position {}", position);
        }
    }

    #[test]
    fn test_get_reads_correct_bit() {
        let cases: [(bool, [u64; 2], usize); 5] = [
            (false, [0, 0], 0),
            (true, [1, 0], 0),
            (true, [1 << 1, 0], 1),
            (true, [0, 1], 64),
            (true, [0, 1 << 1], 65),
        ];
        for (expected, slots, position) in cases {
            let bits = PackedBitArray::from_slots(128, slots.to_vec()).unwrap();
            assert_eq!(bits.get(position).unwrap(), expected, "position {}", position);
        }
    }

    #[test]
    fn test_set_writes_correct_slot() {
        let cases: [([u64; 2], usize); 4] = [
            ([1, 0], 0),
            ([2, 0], 1),
            ([0, 1], 64),
            ([0, 1 << 63], 127),
        ];
        for (expected, position) in cases {
            let mut bits = PackedBitArray::new(128).unwrap();
            bits.set(position, true).unwrap();
            assert_eq!(bits.slots(), &expected, "position {}", position);
        }
    }

    #[test]
    fn test_set_clears_correct_slot() {
        let cases: [([u64; 2], usize); 4] = [
            ([0xFFFF_FFFF_FFFF_FFFE, ALL_ONES], 0),
            ([0xFFFF_FFFF_FFFF_FFFD, ALL_ONES], 1),
            ([ALL_ONES, 0xFFFF_FFFF_FFFF_FFFE], 64),
            ([ALL_ONES, 0x7FFF_FFFF_FFFF_FFFF], 127),
        ];
        for (expected, position) in cases {
            let mut bits = PackedBitArray::from_slots(128, vec![ALL_ONES, ALL_ONES]).unwrap();
            bits.set(position, false).unwrap();
            assert_eq!(bits.slots(), &expected, "position {}", position);
        }
    }

    #[test]
    fn test_last_write_wins() {
        let mut bits = PackedBitArray::new(200).unwrap();
        bits.set(70, true).unwrap();
        bits.set(70, false).unwrap();
        bits.set(70, true).unwrap();
        bits.set(3, true).unwrap();
        bits.set(3, false).unwrap();

        assert!(bits.get(70).unwrap());
        assert!(!bits.get(3).unwrap());
        assert_eq!(bits.count_ones(), 1);
    }

    #[test]
    fn test_integer_projection() {
        let cases: [(&str, [u64; 2]); 5] = [
            ("00000000000000000000000000000000", [0, 0]),
            ("00000000000000000000000000000001", [1, 0]),
            ("00000000000000010000000000000000", [0, 1]),
            ("80000000000000000000000000000000", [0, 1 << 63]),
            (
                "81100000000401008152000001140110",
                [0x8152_0000_0114_0110, 0x8110_0000_0004_0100],
            ),
        ];
        for (expected, slots) in cases {
            let bits = PackedBitArray::from_slots(128, slots.to_vec()).unwrap();
            assert_eq!(bits.to_hex(), expected);
        }
    }

    #[test]
    fn test_integer_projection_matches_indexed_writes() {
        let mut bits = PackedBitArray::new(128).unwrap();
        bits.set(63, true).unwrap();
        bits.set(64, true).unwrap();
        bits.set(127, true).unwrap();

        assert_eq!(bits.to_hex(), "80000000000000018000000000000000");
        assert_eq!(bits.slots(), &[1 << 63, (1 << 63) | 1]);
    }

    #[test]
    fn test_to_le_bytes() {
        let bits = PackedBitArray::from_slots(128, vec![0x0102, 1 << 63]).unwrap();
        let bytes = bits.to_le_bytes();

        assert_eq!(bytes.len(), 16);
        assert_eq!(&bytes[..2], &[0x02, 0x01]);
        assert_eq!(bytes[15], 0x80);
        assert!(bytes[2..15].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_from_slots_masks_padding() {
        let bits = PackedBitArray::from_slots(70, vec![ALL_ONES, ALL_ONES]).unwrap();
        assert_eq!(bits.slots()[1], 0b11_1111);
        assert_eq!(bits.count_ones(), 70);
    }

    #[test]
    fn test_from_slots_wrong_count_error() {
        assert!(matches!(
            PackedBitArray::from_slots(128, vec![0]),
            Err(SpellBloomError::InvalidParameters { .. })
        ));
        assert!(PackedBitArray::from_slots(0, vec![]).is_err());
    }

    #[test]
    fn test_out_of_range_access() {
        let mut bits = PackedBitArray::new(64).unwrap();
        assert_eq!(
            bits.get(64),
            Err(SpellBloomError::IndexOutOfRange {
                index: 64,
                length: 64
            })
        );
        assert!(bits.set(100, true).is_err());
        assert_eq!(bits.count_ones(), 0);
    }

    #[test]
    fn test_padding_is_not_addressable() {
        let mut bits = PackedBitArray::new(65).unwrap();
        assert!(bits.set(65, true).is_err());
        assert!(bits.get(127).is_err());
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_raise_out_of_range_panics() {
        let mut bits = PackedBitArray::new(64).unwrap();
        bits.raise(64);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_bit_out_of_range_panics() {
        let bits = PackedBitArray::new(64).unwrap();
        let _ = bits.bit(100);
    }

    #[test]
    fn test_raise_is_idempotent() {
        let mut bits = PackedBitArray::new(64).unwrap();
        bits.raise(10);
        bits.raise(10);
        assert!(bits.bit(10));
        assert_eq!(bits.count_ones(), 1);
    }

    #[test]
    fn test_clear() {
        let mut bits = PackedBitArray::new(130).unwrap();
        bits.raise(0);
        bits.raise(129);
        bits.clear();
        assert_eq!(bits.count_ones(), 0);
        assert_eq!(bits.slots(), &[0, 0, 0]);
    }

    #[test]
    fn test_memory_usage() {
        let bits = PackedBitArray::new(1000).unwrap();
        assert!(bits.memory_usage() >= 16 * 8);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn writes_read_back_and_leave_others_alone(
                num_bits in 1usize..512,
                writes in proptest::collection::vec((any::<usize>(), any::<bool>()), 0..64),
            ) {
                let mut bits = PackedBitArray::new(num_bits).unwrap();
                let mut model = vec![false; num_bits];

                for (raw, value) in writes {
                    let position = raw % num_bits;
                    bits.set(position, value).unwrap();
                    model[position] = value;
                }

                for (position, &expected) in model.iter().enumerate() {
                    prop_assert_eq!(bits.get(position).unwrap(), expected);
                }
                prop_assert_eq!(bits.count_ones(), model.iter().filter(|&&b| b).count());
            }
        }
    }
}
