//! # intlong
//!
//! A flat open-addressing map from `i32` keys to `i64` values.
//!
//! Storage is two parallel arrays (`keys` and `values`) probed linearly with
//! wraparound. Capacity is always a power of two so the slot index is a
//! bitmask of the key's raw bits rather than a modulo.
//!
//! `i32::MIN` is reserved to mark empty slots and cannot be used as a key.
//!
//! ## Example
//!
//! ```rust
//! use intlong::IntLongMap;
//!
//! let mut map = IntLongMap::new();
//! map.insert(15, 10);
//! map.insert(16, 11);
//!
//! assert_eq!(map.get(15), Some(10));
//! assert_eq!(map.get(16), Some(11));
//! assert_eq!(map.get(1), None);
//! ```

// =============================================================================
// Configuration
// =============================================================================

const DEFAULT_CAPACITY: usize = 16;
const DEFAULT_LOAD_FACTOR: f64 = 0.75;

// =============================================================================
// Slot addressing
// =============================================================================

/// Slot index for `key` in a table of `mask + 1` slots (`mask` is
/// `capacity - 1`, capacity a power of two).
///
/// Uses the key's raw bit pattern, so negative keys map via their low bits
/// (two's complement), not via absolute value. Lookup, insertion, and rehash
/// must all address slots through this one function.
#[inline]
fn index_for(key: i32, mask: usize) -> usize {
    key as u32 as usize & mask
}

// =============================================================================
// Map
// =============================================================================

/// Open-addressing map from `i32` keys to `i64` values with linear probing.
///
/// `keys[i] == NULL_KEY` marks slot `i` as empty; every occupied key is
/// reachable from its home slot by a forward (wrapping) probe that crosses no
/// empty slot. The table grows by doubling once the occupied count exceeds
/// `capacity * load_factor`, which keeps probe chains short and guarantees at
/// least one empty slot at all times.
pub struct IntLongMap {
    keys: Vec<i32>,
    values: Vec<i64>,
    /// Occupied slot count.
    len: usize,
    /// Grow when `len` exceeds this after an insert.
    threshold: usize,
    load_factor: f64,
}

impl IntLongMap {
    /// Reserved key marking an empty slot. Inserting it panics.
    pub const NULL_KEY: i32 = i32::MIN;

    /// Value stored in empty slots, and returned by [`get_or_null`] on a
    /// miss. Storing it is allowed but makes `get_or_null` ambiguous for
    /// that key; [`get`] is always unambiguous.
    ///
    /// [`get`]: IntLongMap::get
    /// [`get_or_null`]: IntLongMap::get_or_null
    pub const NULL_VALUE: i64 = i64::MIN;

    /// Creates an empty map with capacity 16 and load factor 0.75.
    pub fn new() -> Self {
        Self::with_capacity_and_load_factor(DEFAULT_CAPACITY, DEFAULT_LOAD_FACTOR)
    }

    /// Creates an empty map that can hold at least `capacity` entries before
    /// its first growth, with load factor 0.75.
    ///
    /// The argument is a minimum entry count: the allocated capacity is the
    /// smallest power of two `>= capacity`, not `1 << capacity`.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is 0.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_load_factor(capacity, DEFAULT_LOAD_FACTOR)
    }

    /// Creates an empty map with the given minimum capacity and load factor.
    ///
    /// Useful when the expected number of entries is known up front: sizing
    /// the table once avoids intermediate rehashes.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is 0 or `load_factor` is not in the open
    /// interval (0, 1).
    pub fn with_capacity_and_load_factor(capacity: usize, load_factor: f64) -> Self {
        assert!(capacity >= 1, "capacity must be at least 1");
        assert!(
            load_factor > 0.0 && load_factor < 1.0,
            "load factor must be in (0, 1), got {load_factor}"
        );

        let capacity = capacity.next_power_of_two();
        Self {
            keys: vec![Self::NULL_KEY; capacity],
            values: vec![Self::NULL_VALUE; capacity],
            len: 0,
            threshold: (capacity as f64 * load_factor) as usize,
            load_factor,
        }
    }

    /// Number of entries in the map.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of slots currently allocated. Always a power of two.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.keys.len()
    }

    #[inline]
    pub fn load_factor(&self) -> f64 {
        self.load_factor
    }

    /// Approximate heap bytes held by the backing arrays.
    pub fn memory_usage(&self) -> usize {
        self.keys.capacity() * std::mem::size_of::<i32>()
            + self.values.capacity() * std::mem::size_of::<i64>()
    }

    /// Returns the value bound to `key`, or `None` if the key is absent.
    ///
    /// Probes linearly from the key's home slot; the first empty slot proves
    /// absence. Never mutates the table.
    pub fn get(&self, key: i32) -> Option<i64> {
        let mask = self.capacity() - 1;
        let mut i = index_for(key, mask);

        loop {
            if self.keys[i] == key {
                return Some(self.values[i]);
            }
            if self.keys[i] == Self::NULL_KEY {
                return None;
            }
            i = (i + 1) & mask;
        }
    }

    /// Returns the value bound to `key`, or [`NULL_VALUE`] if absent.
    ///
    /// Sentinel-convention variant of [`get`] for callers keeping the
    /// magic-number contract of the original interface.
    ///
    /// [`get`]: IntLongMap::get
    /// [`NULL_VALUE`]: IntLongMap::NULL_VALUE
    #[inline]
    pub fn get_or_null(&self, key: i32) -> i64 {
        self.get(key).unwrap_or(Self::NULL_VALUE)
    }

    #[inline]
    pub fn contains_key(&self, key: i32) -> bool {
        self.get(key).is_some()
    }

    /// Binds `value` to `key`, returning the previously bound value if the
    /// key was already present.
    ///
    /// A fresh insert that pushes the occupied count past the load-factor
    /// threshold doubles the table and rehashes every entry; values bound to
    /// other keys are unaffected.
    ///
    /// # Panics
    ///
    /// Panics if `key == NULL_KEY` (`i32::MIN`), which is reserved to mark
    /// empty slots.
    pub fn insert(&mut self, key: i32, value: i64) -> Option<i64> {
        assert!(
            key != Self::NULL_KEY,
            "key {key} is reserved to mark empty slots"
        );

        let mask = self.capacity() - 1;
        let mut i = index_for(key, mask);

        while self.keys[i] != Self::NULL_KEY {
            if self.keys[i] == key {
                let old = self.values[i];
                self.values[i] = value;
                return Some(old);
            }
            i = (i + 1) & mask;
        }

        self.keys[i] = key;
        self.values[i] = value;
        self.len += 1;

        // len <= threshold < capacity is restored here, so the next insert's
        // probe is guaranteed to find an empty slot.
        if self.len > self.threshold {
            self.grow();
        }
        None
    }

    /// Doubles the table and migrates every occupied slot into fresh arrays.
    ///
    /// Entries are placed directly at the first empty slot probing from their
    /// new home index. Reinserting through [`insert`] would re-check for
    /// duplicates the old table already ruled out and could recurse into
    /// another growth; direct placement does neither. The old arrays are
    /// swapped out whole, so no caller can observe a half-migrated table.
    ///
    /// [`insert`]: IntLongMap::insert
    fn grow(&mut self) {
        let new_capacity = self.capacity() * 2;
        let new_mask = new_capacity - 1;
        let mut new_keys = vec![Self::NULL_KEY; new_capacity];
        let mut new_values = vec![Self::NULL_VALUE; new_capacity];

        for slot in 0..self.capacity() {
            let key = self.keys[slot];
            if key == Self::NULL_KEY {
                continue;
            }

            let mut i = index_for(key, new_mask);
            while new_keys[i] != Self::NULL_KEY {
                i = (i + 1) & new_mask;
            }
            new_keys[i] = key;
            new_values[i] = self.values[slot];
        }

        self.keys = new_keys;
        self.values = new_values;
        self.threshold = (new_capacity as f64 * self.load_factor) as usize;
    }
}

impl Default for IntLongMap {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for IntLongMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IntLongMap")
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .field("load_factor", &self.load_factor)
            .finish()
    }
}


#[cfg(test)]
mod proptests;
