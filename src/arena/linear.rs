use std::ops::Index;

use crate::foundation::error::{OpStateError, OpStateResult};

/// Arena configuration.
#[derive(Debug, Clone, Copy)]
pub struct ArenaOpts {
    /// Slots reserved up front.
    pub initial_capacity: usize,
    /// Slot capacity kept across [`LinearArena::reset`]; anything above is released.
    pub max_retained_capacity: usize,
}

impl Default for ArenaOpts {
    fn default() -> Self {
        Self {
            initial_capacity: 256,
            max_retained_capacity: 4096,
        }
    }
}

/// Handle to a value living in a [`LinearArena`].
///
/// Handles are tagged with the arena epoch they were issued in, so a handle kept across
/// [`LinearArena::reset`] resolves to nothing instead of aliasing a newer value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ArenaId {
    index: usize,
    epoch: u32,
}

impl ArenaId {
    /// Position of the value in allocation order.
    pub fn index(self) -> usize {
        self.index
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ArenaStats {
    pub allocations: u64,
    pub rewinds: u64,
    pub resets: u64,
    pub peak_len: usize,
}

/// Bump arena for values that share one lifetime.
///
/// Values are appended in order and only freed in bulk by [`reset`](Self::reset). The single
/// exception is [`rewind_if_last_alloc`](Self::rewind_if_last_alloc), which reclaims the most
/// recent allocation so a rejected value leaves no garbage behind.
pub struct LinearArena<T> {
    opts: ArenaOpts,
    slots: Vec<T>,
    epoch: u32,
    stats: ArenaStats,
}

impl<T> Default for LinearArena<T> {
    fn default() -> Self {
        Self::new(ArenaOpts::default())
    }
}

impl<T> LinearArena<T> {
    pub fn new(opts: ArenaOpts) -> Self {
        Self {
            opts,
            slots: Vec::with_capacity(opts.initial_capacity),
            epoch: 0,
            stats: ArenaStats::default(),
        }
    }

    pub fn alloc(&mut self, value: T) -> ArenaId {
        self.alloc_with(|| value)
    }

    /// Allocates a slot and fills it with the value produced by `init`.
    pub fn alloc_with(&mut self, init: impl FnOnce() -> T) -> ArenaId {
        let index = self.slots.len();
        self.slots.push(init());
        self.stats.allocations = self.stats.allocations.saturating_add(1);
        self.stats.peak_len = self.stats.peak_len.max(self.slots.len());
        ArenaId {
            index,
            epoch: self.epoch,
        }
    }

    /// Reclaims `id` if and only if it is the most recent live allocation.
    ///
    /// Returns `true` when the slot was reclaimed. Any other handle is left untouched.
    pub fn rewind_if_last_alloc(&mut self, id: ArenaId) -> bool {
        if id.epoch != self.epoch || id.index + 1 != self.slots.len() {
            return false;
        }
        self.slots.pop();
        self.stats.rewinds = self.stats.rewinds.saturating_add(1);
        true
    }

    pub fn get(&self, id: ArenaId) -> Option<&T> {
        if id.epoch != self.epoch {
            return None;
        }
        self.slots.get(id.index)
    }

    pub fn try_get(&self, id: ArenaId) -> OpStateResult<&T> {
        self.get(id).ok_or_else(|| {
            OpStateError::arena(format!(
                "handle {} (epoch {}) is not live in epoch {}",
                id.index, id.epoch, self.epoch
            ))
        })
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Bytes handed out so far; this is the allocation cursor.
    pub fn used_bytes(&self) -> usize {
        self.slots.len().saturating_mul(std::mem::size_of::<T>())
    }

    pub fn iter(&self) -> impl Iterator<Item = (ArenaId, &T)> + '_ {
        let epoch = self.epoch;
        self.slots
            .iter()
            .enumerate()
            .map(move |(index, v)| (ArenaId { index, epoch }, v))
    }

    /// Frees every value at once and invalidates all outstanding handles.
    pub fn reset(&mut self) {
        let freed = self.slots.len();
        self.slots.clear();
        self.slots.shrink_to(self.opts.max_retained_capacity);
        self.epoch = self.epoch.wrapping_add(1);
        self.stats.resets = self.stats.resets.saturating_add(1);
        tracing::debug!(freed, epoch = self.epoch, "arena reset");
    }

    pub fn stats(&self) -> ArenaStats {
        self.stats
    }
}

impl<T> Index<ArenaId> for LinearArena<T> {
    type Output = T;

    fn index(&self, id: ArenaId) -> &T {
        self.get(id)
            .unwrap_or_else(|| panic!("stale or rewound arena handle: {id:?}"))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/arena/linear.rs"]
mod tests;
