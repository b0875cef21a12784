//! Buffer transforms that build new byte strings.
//!
//! Every operation here materializes its result in a caller-chosen arena
//! and leaves its inputs untouched; the one exception is the
//! concatenation fast path, which extends the arena's most recent
//! allocation in place instead of copying it.

use crate::arena::Arena;
use crate::ascii;
use crate::buf::{Buf, Repr};

impl Buf {
    /// A strided subsequence, `self[start..stop..step]`.
    ///
    /// Negative indices count from the end; out-of-range indices are
    /// clamped. A negative `step` walks backwards, with `start` and `stop`
    /// playing the same roles as when walking forwards. The result is
    /// materialized byte by byte, since a strided range is not contiguous
    /// in general.
    ///
    /// Panics when `step` is zero.
    pub fn slice(self, arena: &mut Arena, start: isize, stop: isize, step: isize) -> Buf {
        assert!(step != 0, "slice step must be non-zero");
        let len = self.len() as isize;
        let start = adjust_index(start, len, step);
        let stop = adjust_index(stop, len, step);
        let count = if step > 0 {
            if start < stop {
                (stop - start - 1) / step + 1
            } else {
                0
            }
        } else if stop < start {
            (start - stop - 1) / -step + 1
        } else {
            0
        };
        if count == 0 {
            return Buf::empty();
        }
        let count = count as usize;
        let (region, offset) = arena.grab(count);
        let mut at = start;
        for _ in 0..count {
            let byte = self.byte_at(at as usize, arena);
            arena.push_byte(region, byte);
            at += step;
        }
        Buf::from_alloc(arena, region, offset, count)
    }

    /// The bytes of `self` followed by the bytes of `other`.
    ///
    /// When `self` is the arena's most recent allocation and its region
    /// has room, `other` is appended in place and `self`'s bytes are not
    /// copied; otherwise both are copied into one fresh contiguous
    /// allocation.
    pub fn concat(self, arena: &mut Arena, other: Buf) -> Buf {
        let total = self
            .len()
            .checked_add(other.len())
            .expect("concat length overflow");
        if total == 0 {
            return Buf::empty();
        }
        if let Repr::Alloc { region, offset, .. } = self.repr {
            if arena.is_last_allocation(&self) && other.len() <= arena.region_spare(region) {
                other.push_to(arena, region);
                return Buf::from_alloc(arena, region, offset, total);
            }
        }
        let (region, offset) = arena.grab(total);
        self.push_to(arena, region);
        other.push_to(arena, region);
        Buf::from_alloc(arena, region, offset, total)
    }

    /// Replaces `len` bytes starting at `index` with `replacement`,
    /// producing `self[..index] + replacement + self[index + len..]` as
    /// one fresh allocation.
    ///
    /// Panics when the replaced range does not lie within the buffer.
    pub fn inject(self, arena: &mut Arena, index: usize, len: usize, replacement: Buf) -> Buf {
        assert!(index <= self.len(), "inject index out of range");
        assert!(len <= self.len() - index, "inject length out of range");
        let total = (self.len() - len)
            .checked_add(replacement.len())
            .expect("inject length overflow");
        if total == 0 {
            return Buf::empty();
        }
        let (region, offset) = arena.grab(total);
        self.span(0, index).push_to(arena, region);
        replacement.push_to(arena, region);
        let tail = index + len;
        self.span(tail, self.len() - tail).push_to(arena, region);
        Buf::from_alloc(arena, region, offset, total)
    }

    /// `n` concatenated copies of `self`. Zero copies yield the empty
    /// buffer.
    ///
    /// Panics on length overflow, and when `self` is empty with `n > 0`:
    /// a repeated empty unit has no defined non-empty result, so asking
    /// for one is a caller error.
    pub fn repeat(self, arena: &mut Arena, n: usize) -> Buf {
        if n == 0 {
            return Buf::empty();
        }
        assert!(!self.is_empty(), "repeat of an empty buffer");
        let total = self.len().checked_mul(n).expect("repeat length overflow");
        let (region, offset) = arena.grab(total);
        for _ in 0..n {
            self.push_to(arena, region);
        }
        Buf::from_alloc(arena, region, offset, total)
    }

    /// A copy with every byte folded through the ASCII upper-case map.
    pub fn to_upper(self, arena: &mut Arena) -> Buf {
        self.map_bytes(arena, ascii::to_upper)
    }

    /// A copy with every byte folded through the ASCII lower-case map.
    pub fn to_lower(self, arena: &mut Arena) -> Buf {
        self.map_bytes(arena, ascii::to_lower)
    }

    /// A copy with the case of every ASCII letter flipped.
    pub fn swap_case(self, arena: &mut Arena) -> Buf {
        self.map_bytes(arena, ascii::swap_case)
    }

    /// A copy with the first byte upper-cased and every later byte
    /// lower-cased.
    pub fn capitalize(self, arena: &mut Arena) -> Buf {
        if self.is_empty() {
            return Buf::empty();
        }
        let len = self.len();
        let (region, offset) = arena.grab(len);
        for i in 0..len {
            let byte = self.byte_at(i, arena);
            let byte = if i == 0 {
                ascii::to_upper(byte)
            } else {
                ascii::to_lower(byte)
            };
            arena.push_byte(region, byte);
        }
        Buf::from_alloc(arena, region, offset, len)
    }

    /// A copy with every maximal alphabetic run title-cased: the run's
    /// first byte upper-cased, the rest lower-cased. Bytes outside runs
    /// are left untouched.
    pub fn title(self, arena: &mut Arena) -> Buf {
        if self.is_empty() {
            return Buf::empty();
        }
        let len = self.len();
        let (region, offset) = arena.grab(len);
        let mut in_run = false;
        for i in 0..len {
            let byte = self.byte_at(i, arena);
            if ascii::is_alpha(byte) {
                let byte = if in_run {
                    ascii::to_lower(byte)
                } else {
                    ascii::to_upper(byte)
                };
                arena.push_byte(region, byte);
                in_run = true;
            } else {
                arena.push_byte(region, byte);
                in_run = false;
            }
        }
        Buf::from_alloc(arena, region, offset, len)
    }

    /// True when every maximal alphabetic run starts with an upper-case
    /// byte and contains no further upper-case byte. A buffer without any
    /// alphabetic run is title-cased vacuously.
    #[must_use]
    pub fn is_title(self, arena: &Arena) -> bool {
        let mut in_run = false;
        for &byte in self.as_bytes(arena) {
            if ascii::is_alpha(byte) {
                if in_run == ascii::is_upper(byte) {
                    return false;
                }
                in_run = true;
            } else {
                in_run = false;
            }
        }
        true
    }

    fn map_bytes(self, arena: &mut Arena, map: impl Fn(u8) -> u8) -> Buf {
        if self.is_empty() {
            return Buf::empty();
        }
        let len = self.len();
        let (region, offset) = arena.grab(len);
        for i in 0..len {
            let byte = self.byte_at(i, arena);
            arena.push_byte(region, map(byte));
        }
        Buf::from_alloc(arena, region, offset, len)
    }
}

// Python-style index adjustment: negative values count from the end, and
// whatever remains out of range afterwards is clamped to the walkable
// range for the step direction.
fn adjust_index(index: isize, len: isize, step: isize) -> isize {
    if index < 0 {
        let index = index + len;
        if index < 0 {
            if step < 0 { -1 } else { 0 }
        } else {
            index
        }
    } else if index >= len {
        if step < 0 { len - 1 } else { len }
    } else {
        index
    }
}
