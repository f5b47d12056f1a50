//! Quick sort state machine, Lomuto partition with the last element as
//! pivot.
//!
//! Each scanned index is reported against the pivot position before the
//! comparison; elements below the pivot are swapped into the growing
//! low region and the swap is reported as `(store, scan)`. Placing the
//! pivot reports `(store, high)`, then both sides are scheduled with the
//! left partition's steps running fully before the right's.

use super::Step;

/// An active partition; `store` is the boundary of the below-pivot
/// region. The pivot value is captured when the partition begins.
#[derive(Debug)]
struct Partition<T> {
    low: usize,
    high: usize,
    pivot: T,
    store: usize,
    scan: usize,
    /// A reported pivot comparison waiting on its swap decision.
    judged: bool,
}

/// Per-invocation quick sort state.
#[derive(Debug)]
pub(crate) struct Quick<T> {
    /// Segments still to partition, rightmost popped first.
    segments: Vec<(usize, usize)>,
    partition: Option<Partition<T>>,
}

impl<T: Ord + Clone> Quick<T> {
    pub(crate) fn new(len: usize) -> Self {
        let segments = if len < 2 { Vec::new() } else { vec![(0, len - 1)] };
        Quick {
            segments,
            partition: None,
        }
    }

    pub(crate) fn step(&mut self, data: &mut [T]) -> Option<Step> {
        loop {
            if let Some(p) = self.partition.as_mut() {
                if p.judged {
                    p.judged = false;
                    if data[p.scan] < p.pivot {
                        data.swap(p.store, p.scan);
                        let swapped = Step(p.store, p.scan);
                        p.store += 1;
                        p.scan += 1;
                        return Some(swapped);
                    }
                    p.scan += 1;
                }
                if p.scan < p.high {
                    p.judged = true;
                    return Some(Step(p.scan, p.high));
                }
                // Scan finished: place the pivot and schedule both
                // sides, left first.
                data.swap(p.store, p.high);
                let placed = Step(p.store, p.high);
                let (low, high, store) = (p.low, p.high, p.store);
                self.partition = None;
                if store + 1 < high {
                    self.segments.push((store + 1, high));
                }
                if store > low + 1 {
                    self.segments.push((low, store - 1));
                }
                return Some(placed);
            }
            match self.segments.pop() {
                Some((low, high)) => {
                    self.partition = Some(Partition {
                        low,
                        high,
                        pivot: data[high].clone(),
                        store: low,
                        scan: low,
                        judged: false,
                    });
                }
                None => return None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_elements_compare_then_place_pivot() {
        let mut data = vec![2, 1];
        let mut machine = Quick::new(data.len());

        // 2 is scanned against the pivot 1, then the pivot is swapped
        // into its final position.
        assert_eq!(machine.step(&mut data), Some(Step(0, 1)));
        assert_eq!(data, vec![2, 1]);
        assert_eq!(machine.step(&mut data), Some(Step(0, 1)));
        assert_eq!(data, vec![1, 2]);
        assert_eq!(machine.step(&mut data), None);
    }

    #[test]
    fn left_partition_runs_before_right() {
        let mut data = vec![3, 1, 4, 2];
        let mut machine = Quick::new(data.len());
        let mut steps = Vec::new();
        while let Some(step) = machine.step(&mut data) {
            steps.push(step);
        }
        assert_eq!(data, vec![1, 2, 3, 4]);

        // Top-level partition on pivot 2: three scans against index 3,
        // one region swap, the pivot placement, then the right segment
        // [2, 3] in full.
        assert_eq!(
            steps,
            vec![
                Step(0, 3),
                Step(1, 3),
                Step(0, 1),
                Step(2, 3),
                Step(1, 3),
                Step(2, 3),
                Step(2, 3),
            ]
        );
    }
}
