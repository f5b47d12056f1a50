//! Insertion sort state machine.
//!
//! Each shift of the key's hole one slot to the left is reported before
//! it happens; once the hole stops moving, placing the key is reported
//! as `(slot, row)` even when the row needed no shifting at all.

use super::Step;

/// Per-invocation insertion sort state.
///
/// While a row is active the key value lives here rather than in the
/// slice: the shift loop overwrites its original position, exactly like
/// the textbook formulation.
#[derive(Debug)]
pub(crate) struct Insertion<T> {
    n: usize,
    /// Index whose element is currently being inserted; rows run 1..n.
    row: usize,
    /// The hole the key will eventually land in.
    slot: usize,
    key: Option<T>,
    /// A reported shift that lands at the start of the next pull.
    pending_shift: bool,
}

impl<T: Ord + Clone> Insertion<T> {
    pub(crate) fn new(len: usize) -> Self {
        Insertion {
            n: len,
            row: 1,
            slot: 1,
            key: None,
            pending_shift: false,
        }
    }

    pub(crate) fn step(&mut self, data: &mut [T]) -> Option<Step> {
        if self.pending_shift {
            self.pending_shift = false;
            data[self.slot] = data[self.slot - 1].clone();
            self.slot -= 1;
        }
        let key = match self.key.take() {
            Some(key) => key,
            None => {
                if self.row >= self.n {
                    return None;
                }
                self.slot = self.row;
                data[self.row].clone()
            }
        };
        if self.slot > 0 && data[self.slot - 1] > key {
            self.key = Some(key);
            self.pending_shift = true;
            return Some(Step(self.slot - 1, self.slot));
        }
        data[self.slot] = key;
        let placed = Step(self.slot, self.row);
        self.row += 1;
        Some(placed)
    }
}
