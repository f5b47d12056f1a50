//! Merge sort state machine.
//!
//! The recursion is flattened to a frame stack: a `Sort` frame splits a
//! segment and schedules left half, right half, then their merge, so the
//! left subtree's steps all appear before the right subtree's. Splitting
//! reports nothing; each destination slot filled during a merge reports
//! `(k, k)` exactly once, whichever half contributed the element.

use super::Step;

/// Pending work for the flattened recursion.
#[derive(Debug)]
enum Frame {
    Sort { start: usize, end: usize },
    Merge { start: usize, mid: usize, end: usize },
}

/// An in-flight merge of two sorted halves.
///
/// The halves are copied out of the slice when the merge begins, after
/// the recursion below them has fully run.
#[derive(Debug)]
struct Merging<T> {
    left: Vec<T>,
    right: Vec<T>,
    i: usize,
    j: usize,
    k: usize,
    end: usize,
}

/// Per-invocation merge sort state.
#[derive(Debug)]
pub(crate) struct Merge<T> {
    frames: Vec<Frame>,
    merging: Option<Merging<T>>,
}

impl<T: Ord + Clone> Merge<T> {
    pub(crate) fn new(len: usize) -> Self {
        let frames = if len < 2 {
            Vec::new()
        } else {
            vec![Frame::Sort { start: 0, end: len }]
        };
        Merge {
            frames,
            merging: None,
        }
    }

    pub(crate) fn step(&mut self, data: &mut [T]) -> Option<Step> {
        loop {
            if let Some(m) = self.merging.as_mut() {
                // Fill one destination slot per pull. Ties take the left
                // half, keeping the sort stable.
                let take_left =
                    m.j >= m.right.len() || (m.i < m.left.len() && m.left[m.i] <= m.right[m.j]);
                if take_left {
                    data[m.k] = m.left[m.i].clone();
                    m.i += 1;
                } else {
                    data[m.k] = m.right[m.j].clone();
                    m.j += 1;
                }
                let filled = Step(m.k, m.k);
                m.k += 1;
                if m.k == m.end {
                    self.merging = None;
                }
                return Some(filled);
            }
            match self.frames.pop() {
                Some(Frame::Sort { start, end }) => {
                    if end - start > 1 {
                        let mid = (start + end) / 2;
                        self.frames.push(Frame::Merge { start, mid, end });
                        self.frames.push(Frame::Sort { start: mid, end });
                        self.frames.push(Frame::Sort { start, end: mid });
                    }
                }
                Some(Frame::Merge { start, mid, end }) => {
                    self.merging = Some(Merging {
                        left: data[start..mid].to_vec(),
                        right: data[mid..end].to_vec(),
                        i: 0,
                        j: 0,
                        k: start,
                        end,
                    });
                }
                None => return None,
            }
        }
    }
}
