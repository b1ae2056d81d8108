//! Registry of burning cells and their remaining burn time
//!
//! A coordinate is present here if and only if its grid cell is `Burning`.
//! Entries iterate in insertion order so fire spreads in a stable order.

use indexmap::IndexMap;

use super::grid::Coord;

/// Fine ticks a cell burns before turning to ash (2 x 0.1s)
pub const BURN_SUBTICKS: u8 = 2;

#[derive(Debug, Clone, Default)]
pub struct BurningRegistry {
    entries: IndexMap<Coord, u8>,
}

impl BurningRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new fire with a full burn countdown.
    /// Returns false (and leaves the countdown alone) if already burning.
    pub fn ignite(&mut self, at: Coord) -> bool {
        if self.entries.contains_key(&at) {
            return false;
        }
        self.entries.insert(at, BURN_SUBTICKS);
        true
    }

    /// Decrement the countdown, returning what remains.
    /// The caller removes the entry once this reaches zero.
    pub fn tick_down(&mut self, at: Coord) -> Option<u8> {
        let remaining = self.entries.get_mut(&at)?;
        *remaining = remaining.saturating_sub(1);
        Some(*remaining)
    }

    pub fn remove(&mut self, at: Coord) -> bool {
        self.entries.shift_remove(&at).is_some()
    }

    pub fn contains(&self, at: Coord) -> bool {
        self.entries.contains_key(&at)
    }

    pub fn remaining(&self, at: Coord) -> Option<u8> {
        self.entries.get(&at).copied()
    }

    /// Copy of all entries, so callers can mutate the registry while walking it
    pub fn snapshot(&self) -> Vec<(Coord, u8)> {
        self.entries.iter().map(|(&at, &left)| (at, left)).collect()
    }

    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        self.entries.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
