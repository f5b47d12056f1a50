//! # Introduction
//!
//! Sortty animates six classic sorting algorithms in the terminal. Each
//! algorithm is rewritten as an explicit state machine that sorts a
//! sequence in place and pauses after every interesting comparison or
//! exchange, reporting the pair of indices it just touched. The TUI
//! drains that step trace on a timer and redraws the bars between
//! pulls.
//!
//! ## Pipeline
//!
//! ```text
//! Data → Sorter → Steps → TUI
//! ```
//!
//! 1. [`data`] — random bar heights; the only source of randomness.
//! 2. [`sort`] — the stepwise engine: [`sort::Algorithm`] selects one of
//!    bubble, selection, insertion, merge, quick, or heap sort;
//!    [`sort::Sorter`] advances it one [`sort::Step`] at a time;
//!    [`sort::Trace`] drains a whole run as an iterator.
//! 3. [`ui`] — ratatui-based TUI; not part of the stable library API.

pub mod data;
pub mod sort;
pub mod ui;
