//! Course id interning.
//!
//! Maps string course ids to dense integer slots so graph passes can use
//! plain vectors instead of string-keyed maps.

use rustc_hash::FxHashMap;

/// Interned course slot.
pub type CourseSlot = u32;

/// Maps course id strings to slots in first-seen order.
#[derive(Debug, Clone)]
pub struct CourseIdInterner {
    to_slot: FxHashMap<String, CourseSlot>,
    from_slot: Vec<String>,
}

impl CourseIdInterner {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            to_slot: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            from_slot: Vec::with_capacity(capacity),
        }
    }

    /// Intern an id, returning its slot. Re-interning returns the existing slot.
    pub fn intern(&mut self, id: &str) -> CourseSlot {
        if let Some(&slot) = self.to_slot.get(id) {
            return slot;
        }
        let slot = self.from_slot.len() as CourseSlot;
        self.from_slot.push(id.to_string());
        self.to_slot.insert(id.to_string(), slot);
        slot
    }

    #[inline]
    pub fn get(&self, id: &str) -> Option<CourseSlot> {
        self.to_slot.get(id).copied()
    }

    #[inline]
    pub fn resolve(&self, slot: CourseSlot) -> Option<&str> {
        self.from_slot.get(slot as usize).map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.from_slot.len()
    }

    pub fn is_empty(&self) -> bool {
        self.from_slot.is_empty()
    }
}

impl Default for CourseIdInterner {
    fn default() -> Self {
        Self::with_capacity(0)
    }
}
