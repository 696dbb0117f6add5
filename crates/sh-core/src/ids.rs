//! Process-unique entity identifiers.
//!
//! Ids are handed out by a global atomic counter, so two entities built
//! anywhere in the process never collide, and are `Copy + Ord + Hash` so they
//! can key maps and sort without ceremony.  Behaviours hold ids, never
//! references; every lookup is resolved through the world.

use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};

static NEXT_ENTITY_ID: AtomicU32 = AtomicU32::new(0);

/// Identity of one entity for the lifetime of the process.  Only
/// [`EntityId::next`] makes one.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityId(u32);

impl EntityId {
    /// Allocate a fresh id.
    pub fn next() -> Self {
        EntityId(NEXT_ENTITY_ID.fetch_add(1, Ordering::Relaxed))
    }

    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EntityId({})", self.0)
    }
}
