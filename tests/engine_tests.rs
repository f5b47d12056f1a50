// Cross-algorithm properties of the stepwise sort engine

use sortty::sort::{Algorithm, Sorter, Step};

/// Drain a full trace, checking index bounds on every step.
fn drain(algorithm: Algorithm, data: &mut Vec<i32>) -> Vec<Step> {
    let len = data.len();
    let mut steps = Vec::new();
    for step in algorithm.trace(data) {
        assert!(
            step.0 < len && step.1 < len,
            "{} emitted out-of-bounds step {:?} for length {}",
            algorithm,
            step,
            len
        );
        steps.push(step);
    }
    steps
}

const INPUTS: &[&[i32]] = &[
    &[],
    &[7],
    &[2, 1],
    &[1, 2],
    &[5, 3, 1, 4, 2],
    &[1, 2, 3, 4, 5],
    &[5, 4, 3, 2, 1],
    &[3, 3, 1, 2, 3, 1],
    &[0, -5, 17, -5, 0, 42, 1],
    &[9, 9, 9, 9],
];

#[test]
fn draining_sorts_every_input() {
    for &algorithm in &Algorithm::ALL {
        for input in INPUTS {
            let mut data = input.to_vec();
            drain(algorithm, &mut data);

            // Sorted and the same multiset: equal to the std sort of the
            // original input.
            let mut expected = input.to_vec();
            expected.sort();
            assert_eq!(
                data, expected,
                "{} failed on {:?}",
                algorithm, input
            );
        }
    }
}

#[test]
fn traces_are_deterministic() {
    for &algorithm in &Algorithm::ALL {
        for input in INPUTS {
            let mut first = input.to_vec();
            let mut second = input.to_vec();
            let first_steps = drain(algorithm, &mut first);
            let second_steps = drain(algorithm, &mut second);

            assert_eq!(first_steps, second_steps, "{} steps diverged", algorithm);
            assert_eq!(first, second, "{} results diverged", algorithm);
        }
    }
}

#[test]
fn empty_and_single_sequences_produce_no_steps() {
    for &algorithm in &Algorithm::ALL {
        let mut empty: Vec<i32> = Vec::new();
        assert_eq!(algorithm.trace(&mut empty).next(), None);
        assert!(empty.is_empty());

        let mut single = vec![42];
        assert_eq!(algorithm.trace(&mut single).next(), None);
        assert_eq!(single, vec![42]);
    }
}

#[test]
fn exhaustion_is_sticky_and_stops_mutation() {
    for &algorithm in &Algorithm::ALL {
        let mut data = vec![5, 3, 1, 4, 2];
        let mut sorter = Sorter::new(algorithm, data.len());

        while sorter.step(&mut data).is_some() {}
        assert!(sorter.is_exhausted());

        let settled = data.clone();
        for _ in 0..5 {
            assert_eq!(sorter.step(&mut data), None, "{} revived", algorithm);
        }
        assert_eq!(data, settled, "{} mutated after exhaustion", algorithm);
    }
}

#[test]
fn sorted_input_leaves_values_unchanged() {
    for &algorithm in &Algorithm::ALL {
        let mut data = vec![1, 2, 3, 4, 5];
        drain(algorithm, &mut data);
        assert_eq!(data, vec![1, 2, 3, 4, 5], "{} disturbed sorted input", algorithm);
    }
}

#[test]
fn sorter_and_trace_agree() {
    for &algorithm in &Algorithm::ALL {
        let input = vec![3, 3, 1, 2, 3, 1];

        let mut by_trace = input.clone();
        let trace_steps = drain(algorithm, &mut by_trace);

        let mut by_sorter = input.clone();
        let mut sorter = Sorter::new(algorithm, by_sorter.len());
        let mut sorter_steps = Vec::new();
        while let Some(step) = sorter.step(&mut by_sorter) {
            sorter_steps.push(step);
        }

        assert_eq!(trace_steps, sorter_steps);
        assert_eq!(by_trace, by_sorter);
    }
}

#[test]
fn trace_exposes_intermediate_state_between_pulls() {
    // Bubble on [2, 1]: the compare step arrives with the sequence
    // untouched, the swap step arrives with the swap applied.
    let mut data = vec![2, 1];
    let mut trace = Algorithm::Bubble.trace(&mut data);

    assert_eq!(trace.next(), Some(Step(0, 1)));
    assert_eq!(trace.data(), &[2, 1]);

    assert_eq!(trace.next(), Some(Step(0, 1)));
    assert_eq!(trace.data(), &[1, 2]);

    assert_eq!(trace.next(), None);
    assert!(trace.is_exhausted());
}

#[test]
fn abandoned_runs_can_restart_over_current_contents() {
    // Stop a quick sort halfway, then finish the job with a fresh trace
    // over whatever state it left behind.
    let mut data = vec![9, 1, 8, 2, 7, 3, 6, 4, 5];
    {
        let mut trace = Algorithm::Quick.trace(&mut data);
        for _ in 0..5 {
            trace.next();
        }
    }
    drain(Algorithm::Quick, &mut data);
    assert_eq!(data, vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);
}
