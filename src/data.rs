//! Random bar data for the visualizer.
//!
//! Randomness lives here, outside the engine: a sorter fed the same
//! sequence always produces the same trace.

use rand::Rng;

/// Smallest generated bar height.
pub const MIN_VALUE: u32 = 10;

/// Largest generated bar height; also the fixed scale of the bar chart.
pub const MAX_VALUE: u32 = 350;

/// Default number of bars when no count is given on the command line.
pub const DEFAULT_LEN: usize = 50;

/// Generate `len` bar heights uniformly in `MIN_VALUE..=MAX_VALUE`.
pub fn generate(len: usize) -> Vec<u32> {
    let mut rng = rand::rng();
    (0..len)
        .map(|_| rng.random_range(MIN_VALUE..=MAX_VALUE))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn respects_length_and_range() {
        let data = generate(50);
        assert_eq!(data.len(), 50);
        assert!(data.iter().all(|&v| (MIN_VALUE..=MAX_VALUE).contains(&v)));
    }

    #[test]
    fn zero_length_is_empty() {
        assert!(generate(0).is_empty());
    }
}
