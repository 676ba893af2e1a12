// Blockwise transfer offset, shared with the block coordinator.
//
// The cursor lives outside the writer (the REST engine owns it across
// requests); we only borrow it. Cell keeps it readable by others while
// a writer holds it. -1 means the last block has been sent.

use core::cell::Cell;

/// Offset value signalling "no more blocks follow".
pub const BLOCK_COMPLETE: i32 = -1;

#[derive(Clone, Copy)]
pub struct BlockCursor<'a> {
    offset: &'a Cell<i32>,
}

impl<'a> BlockCursor<'a> {
    #[inline]
    pub const fn new(offset: &'a Cell<i32>) -> Self {
        Self { offset }
    }

    #[inline]
    pub fn get(&self) -> i32 {
        self.offset.get()
    }

    /// Record `n` more bytes of the resource emitted in this chunk.
    #[inline]
    pub fn append(&self, n: i32) {
        self.offset.set(self.offset.get().wrapping_add(n));
    }

    #[inline]
    pub fn complete(&self) {
        self.offset.set(BLOCK_COMPLETE);
    }

    #[inline]
    pub fn is_complete(&self) -> bool {
        self.offset.get() == BLOCK_COMPLETE
    }
}

impl core::fmt::Debug for BlockCursor<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("BlockCursor").field(&self.get()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_then_complete() {
        let offset = Cell::new(0);
        let cursor = BlockCursor::new(&offset);
        cursor.append(10);
        assert_eq!(cursor.get(), 10);
        assert_eq!(offset.get(), 10);
        cursor.complete();
        assert_eq!(cursor.get(), BLOCK_COMPLETE);
        assert!(cursor.is_complete());
    }

    #[test]
    fn readable_while_borrowed() {
        let offset = Cell::new(32);
        let cursor = BlockCursor::new(&offset);
        cursor.append(16);
        // owner sees the update without the cursor being dropped
        assert_eq!(offset.get(), 48);
        offset.set(0);
        assert_eq!(cursor.get(), 0);
    }
}
