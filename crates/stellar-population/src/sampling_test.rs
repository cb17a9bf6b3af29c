use approx::assert_relative_eq;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaChaRng;

use crate::config::MassRange;
use crate::error::PopulationError;
use crate::imf::imf_density;
use crate::sampling::{sample_accepted, sample_gaussian, sample_uniform, select, RejectionSampler};

#[test]
fn sample_uniform_respects_bounds() {
    let mut rng = ChaChaRng::seed_from_u64(42);
    let values = sample_uniform(&mut rng, 1000, 0.08, 100.0);

    assert_eq!(values.len(), 1000);
    for value in values {
        assert!((0.08..100.0).contains(&value), "{} out of range", value);
    }
}

#[test]
fn sample_uniform_stays_below_a_close_upper_bound() {
    let mut rng = ChaChaRng::seed_from_u64(3);
    let high = 1.0 + f64::EPSILON * 4.0;

    for value in sample_uniform(&mut rng, 10_000, 1.0, high) {
        assert!(value >= 1.0 && value < high, "{} out of range", value);
    }
}

#[test]
fn sample_uniform_takes_one_draw_per_value() {
    let mut sampled = ChaChaRng::seed_from_u64(11);
    let mut counted = ChaChaRng::seed_from_u64(11);

    sample_uniform(&mut sampled, 100, 0.0, 13.9);
    for _ in 0..100 {
        let _: u64 = counted.random();
    }

    assert_eq!(sampled, counted);
}

#[test]
fn sample_uniform_is_reproducible_for_a_seed() {
    let mut first = ChaChaRng::seed_from_u64(7);
    let mut second = ChaChaRng::seed_from_u64(7);

    assert_eq!(
        sample_uniform(&mut first, 50, 0.0, 13.9),
        sample_uniform(&mut second, 50, 0.0, 13.9)
    );
}

#[test]
fn sample_gaussian_produces_reasonable_values() {
    let mut rng = ChaChaRng::seed_from_u64(42);

    let samples: Vec<f64> = (0..5000)
        .map(|_| sample_gaussian(&mut rng, 1.6, 0.158))
        .collect();
    let mean: f64 = samples.iter().sum::<f64>() / samples.len() as f64;
    let variance: f64 =
        samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / samples.len() as f64;

    assert!((mean - 1.6).abs() < 0.02, "Mean {} should be close to 1.6", mean);
    assert!(
        (variance.sqrt() - 0.158).abs() < 0.02,
        "Std dev {} should be close to 0.158",
        variance.sqrt()
    );
    assert!(samples.iter().all(|x| x.is_finite()));
}

#[test]
fn sample_accepted_compares_draw_against_density() {
    let mask = sample_accepted(&[0.5, 0.5, 1.0, 0.01], &[0.4, 0.5, 0.99, 0.2]).unwrap();
    assert_eq!(mask, vec![true, false, true, false]);
}

#[test]
fn sample_accepted_rejects_mismatched_lengths() {
    let result = sample_accepted(&[0.5, 0.5], &[0.1]);
    assert!(matches!(
        result,
        Err(PopulationError::LengthMismatch {
            left_len: 2,
            right_len: 1,
            ..
        })
    ));
}

#[test]
fn select_keeps_masked_entries_and_complement() {
    let values = [1.0, 2.0, 3.0, 4.0];
    let mask = [true, false, false, true];

    assert_eq!(select(&values, &mask, true).unwrap(), vec![1.0, 4.0]);
    assert_eq!(select(&values, &mask, false).unwrap(), vec![2.0, 3.0]);
    assert!(select(&values, &mask[..2], true).is_err());
}

#[test]
fn rejection_sampler_default_range_uses_raw_density() {
    let sampler = RejectionSampler::new(MassRange::default());
    assert_relative_eq!(sampler.envelope(), 1.0);

    let masses = [0.08, 0.3, 2.0, 60.0];
    let probs = sampler.acceptance_probabilities(&masses);
    for (mass, prob) in masses.iter().zip(probs) {
        assert_relative_eq!(prob, imf_density(*mass));
    }
}

#[test]
fn rejection_sampler_renormalises_below_hydrogen_burning_limit() {
    let range = MassRange::new(0.01, 100.0).unwrap();
    let sampler = RejectionSampler::new(range);

    assert!(sampler.envelope() > 1.0);
    let probs = sampler.acceptance_probabilities(&[0.01, 0.08, 50.0]);
    assert_relative_eq!(probs[0], 1.0);
    assert!(probs.iter().all(|&p| p <= 1.0));
}

#[test]
fn rejection_sampler_favours_low_masses() {
    let mut rng = ChaChaRng::seed_from_u64(1);
    let sampler = RejectionSampler::new(MassRange::default());

    let draws = sample_uniform(&mut rng, 100_000, 0.0, 1.0);
    let masses = sampler.sample_masses(&mut rng, 100_000);
    let mask = sampler.accept(&masses, &draws).unwrap();
    let accepted = select(&masses, &mask, true).unwrap();

    assert!(!accepted.is_empty());
    assert!(accepted.len() < masses.len() / 10);
    let low = accepted.iter().filter(|&&m| m < 1.0).count();
    assert!(low * 2 > accepted.len(), "{} of {} below 1 M☉", low, accepted.len());
}

#[test]
fn rejection_sampler_scales_narrow_massive_range() {
    let range = MassRange::new(20.0, 50.0).unwrap();
    let sampler = RejectionSampler::new(range);

    assert_relative_eq!(sampler.envelope(), imf_density(20.0));
    let probs = sampler.acceptance_probabilities(&[20.0, 50.0]);
    assert_relative_eq!(probs[0], 1.0);
    assert_relative_eq!(probs[1], imf_density(50.0) / imf_density(20.0));
}
