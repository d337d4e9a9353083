//! Saved viewpoints grouped into numbered slots.
//!
//! Each slot is a rotation buffer: visiting it yields the front state and
//! moves that state to the back, so repeated visits cycle through every
//! state the slot holds.

use std::collections::VecDeque;

use crate::state::ViewState;

/// Slot count used when none is configured.
pub const DEFAULT_SLOTS: usize = 12;

/// Fixed number of independent FIFO rotation buffers of view states.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationQueue {
    slots: Vec<VecDeque<ViewState>>,
}

impl Default for LocationQueue {
    fn default() -> Self {
        Self::new(DEFAULT_SLOTS)
    }
}

impl LocationQueue {
    /// Queue with `slots` empty slots.
    #[must_use]
    pub fn new(slots: usize) -> Self {
        Self {
            slots: vec![VecDeque::new(); slots],
        }
    }

    /// Number of slots, populated or not.
    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Number of states held in slot `i` (0 if out of range).
    #[must_use]
    pub fn len(&self, i: usize) -> usize {
        self.slots.get(i).map_or(0, VecDeque::len)
    }

    /// Whether no slot holds any state.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(VecDeque::is_empty)
    }

    /// Rotate slot `i` and return its former front state.
    ///
    /// `None` if the slot is empty or out of range.
    pub fn visit(&mut self, i: usize) -> Option<ViewState> {
        let slot = self.slots.get_mut(i)?;
        let state = slot.pop_front()?;
        slot.push_back(state.clone());
        Some(state)
    }

    /// Front state of slot `i` without rotating.
    #[must_use]
    pub fn peek(&self, i: usize) -> Option<&ViewState> {
        self.slots.get(i).and_then(VecDeque::front)
    }

    /// Name of the front state of slot `i`.
    #[must_use]
    pub fn name(&self, i: usize) -> Option<&str> {
        self.peek(i).and_then(ViewState::name)
    }

    /// First slot whose front state is named `name`.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<usize> {
        (0..self.slots.len()).find(|&i| self.name(i) == Some(name))
    }

    /// Append `state` to slot `i`. Out-of-range slots are ignored.
    pub fn populate(&mut self, i: usize, state: ViewState) {
        match self.slots.get_mut(i) {
            Some(slot) => slot.push_back(state),
            None => log::debug!("Ignoring state for location slot {i}"),
        }
    }

    /// Empty every slot.
    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(VecDeque::clear);
    }

    /// Every stored state with its slot, slot by slot in rotation order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &ViewState)> {
        self.slots
            .iter()
            .enumerate()
            .flat_map(|(i, slot)| slot.iter().map(move |s| (i, s)))
    }
}
