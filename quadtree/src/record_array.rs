//! Growable arena of fixed-width `i32` records.
//!
//! A `RecordArray` is used either as a stack (`push_back`/`pop_back`) or as a
//! free list (`insert`/`erase`), never both on the same instance. Erased
//! slots are chained through their first field, so reuse is O(1) and
//! storage never shrinks until `destroy`.

use smallvec::{smallvec, SmallVec};

/// Number of `i32` slots held inline before the array spills to the heap.
pub const INLINE_CAPACITY: usize = 128;

const NIL: i32 = -1;

#[derive(Clone, Debug)]
pub struct RecordArray {
    data: SmallVec<[i32; INLINE_CAPACITY]>,
    fields: usize,
    len: usize,
    free_head: i32,
}

impl RecordArray {
    pub fn new(fields: usize) -> Self {
        assert!(fields > 0, "records need at least one field");
        Self {
            data: smallvec![0; INLINE_CAPACITY],
            fields,
            len: 0,
            free_head: NIL,
        }
    }

    /// Creates an array with room for at least `records` records.
    pub fn with_capacity(fields: usize, records: usize) -> Self {
        let mut array = Self::new(fields);
        let slots = records.saturating_mul(fields);
        if slots > array.data.len() {
            array.data.resize(slots, 0);
        }
        array
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn fields(&self) -> usize {
        self.fields
    }

    /// Number of records that fit without growing.
    pub fn capacity(&self) -> usize {
        self.data.len() / self.fields
    }

    /// Whether storage has moved off the inline buffer.
    pub fn spilled(&self) -> bool {
        self.data.spilled()
    }

    #[inline(always)]
    pub fn get(&self, n: usize, field: usize) -> i32 {
        debug_assert!(n < self.len, "record {} out of range ({})", n, self.len);
        debug_assert!(field < self.fields);
        self.data[n * self.fields + field]
    }

    #[inline(always)]
    pub fn set(&mut self, n: usize, field: usize, value: i32) {
        debug_assert!(n < self.len, "record {} out of range ({})", n, self.len);
        debug_assert!(field < self.fields);
        self.data[n * self.fields + field] = value;
    }

    /// Resets to empty, keeping the storage.
    pub fn clear(&mut self) {
        self.len = 0;
        self.free_head = NIL;
    }

    /// Releases heap storage and falls back to the inline buffer.
    pub fn destroy(&mut self) {
        self.data = smallvec![0; INLINE_CAPACITY];
        self.len = 0;
        self.free_head = NIL;
    }

    pub fn push_back(&mut self) -> usize {
        let new_pos = (self.len + 1) * self.fields;
        if new_pos > self.data.len() {
            self.data.resize(new_pos * 2, 0);
        }
        let index = self.len;
        self.len += 1;
        index
    }

    pub fn pop_back(&mut self) {
        debug_assert!(self.len > 0, "pop_back on an empty record array");
        self.len -= 1;
    }

    pub fn insert(&mut self) -> usize {
        if self.free_head != NIL {
            let index = self.free_head as usize;
            self.free_head = self.data[index * self.fields];
            return index;
        }
        self.push_back()
    }

    /// Pushes `n` onto the free chain. Erasing a slot twice corrupts the chain.
    pub fn erase(&mut self, n: usize) {
        debug_assert!(n < self.len, "erase of record {} out of range ({})", n, self.len);
        self.data[n * self.fields] = self.free_head;
        self.free_head = n as i32;
    }
}
