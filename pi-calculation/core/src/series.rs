// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::messages::{ResultUnit, WorkUnit};

/// Leibniz partial sum over `number_of_elements` terms starting at
/// `start * number_of_elements`
pub fn calculate_pi_for(start: u64, number_of_elements: u64) -> f64 {
    let first = start * number_of_elements;
    let last = (start + 1) * number_of_elements;

    let mut acc = 0.0;
    for i in first..last {
        let sign = (1 - (i % 2) as i64 * 2) as f64;
        acc += 4.0 * sign / (2 * i + 1) as f64;
    }
    acc
}

/// Computes the partial result for a work unit
pub fn compute(unit: &WorkUnit) -> ResultUnit {
    ResultUnit {
        sequence_index: unit.sequence_index,
        value: calculate_pi_for(unit.sequence_index, unit.chunk_size),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_term_is_four() {
        assert_eq!(calculate_pi_for(0, 1), 4.0);
    }

    #[test]
    fn test_second_term_is_negative() {
        let value = calculate_pi_for(1, 1);
        assert_eq!(value, -4.0 / 3.0);
    }

    #[test]
    fn test_chunk_covers_exact_number_of_terms() {
        // 4 - 4/3 + 4/5
        let expected = 4.0 - 4.0 / 3.0 + 4.0 / 5.0;
        assert_eq!(calculate_pi_for(0, 3), expected);
    }

    #[test]
    fn test_compute_is_deterministic() {
        let unit = WorkUnit::new(0, 10_000);
        let first = compute(&unit);
        let second = compute(&unit);
        assert_eq!(first.value.to_bits(), second.value.to_bits());
        assert_eq!(first.sequence_index, 0);
    }

    #[test]
    fn test_chunks_add_up_to_whole_range() {
        let whole = calculate_pi_for(0, 1_000);
        let split: f64 = (0..10).map(|s| calculate_pi_for(s, 100)).sum();
        assert!((whole - split).abs() < 1e-12);
    }

    #[test]
    fn test_converges_towards_pi() {
        let value = calculate_pi_for(0, 1_000_000);
        assert!((value - std::f64::consts::PI).abs() < 1e-5);
    }
}
