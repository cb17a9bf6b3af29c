//! Rebuilds a population stage by stage from the public entry points and
//! checks it against `simulate`.

use rand::SeedableRng;
use rand_chacha::ChaChaRng;
use stellar_population::{
    classify_evolution, classify_remnants, compute_final_mass, imf_densities,
    main_sequence_lifetimes, sample_accepted, sample_uniform, select, simulate, IfmrVariant,
    RemnantType, SimulationConfig,
};

const STARS: usize = 300_000;
const SEED: u64 = 2001;

fn config(variant: IfmrVariant) -> SimulationConfig {
    SimulationConfig {
        stars: STARS,
        seed: SEED,
        variant,
        ..SimulationConfig::default()
    }
}

#[test]
fn staged_pipeline_matches_simulate() {
    let variant = IfmrVariant::Kalirai2008Raithel2018;
    let mut rng = ChaChaRng::seed_from_u64(SEED);

    let random_probs = sample_uniform(&mut rng, STARS, 0.0, 1.0);
    let random_masses = sample_uniform(&mut rng, STARS, 0.08, 100.0);
    let imf_probs = imf_densities(&random_masses);
    let in_imf = sample_accepted(&imf_probs, &random_probs).unwrap();
    let masses = select(&random_masses, &in_imf, true).unwrap();

    let ages = sample_uniform(&mut rng, masses.len(), 0.0, 13.9);
    let lifetimes = main_sequence_lifetimes(&masses);
    let is_evolved = classify_evolution(&ages, &lifetimes).unwrap();
    let evolved_masses = select(&masses, &is_evolved, true).unwrap();
    let evolved_ages = select(&ages, &is_evolved, true).unwrap();

    let remnants = classify_remnants(&mut rng, &evolved_masses);
    let final_masses = compute_final_mass(&mut rng, &evolved_masses, &remnants, variant).unwrap();

    let population = simulate(&config(variant)).unwrap();

    assert_eq!(population.accepted, masses.len());
    assert_eq!(population.evolved.len(), evolved_masses.len());
    for (i, star) in population.evolved.iter().enumerate() {
        assert_eq!(star.mass.to_solar_masses(), evolved_masses[i]);
        assert_eq!(star.age.to_gyr(), evolved_ages[i]);
        assert_eq!(star.remnant, remnants[i]);
        assert_eq!(
            star.final_mass.map(|m| m.to_solar_masses()),
            final_masses[i].clone().ok()
        );
    }
}

#[test]
fn repeated_runs_are_identical() {
    for variant in [IfmrVariant::Kalirai2007, IfmrVariant::Kalirai2008Raithel2018] {
        let first = simulate(&config(variant)).unwrap();
        let second = simulate(&config(variant)).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn white_dwarfs_dominate_evolved_population() {
    let population = simulate(&config(IfmrVariant::Kalirai2008Raithel2018)).unwrap();
    let census = population.census();

    assert!(census.total() > 0);
    assert!(census.count(RemnantType::WhiteDwarf) * 2 > census.total());
    for star in &population.evolved {
        if star.remnant == RemnantType::WhiteDwarf {
            let expected = 0.109 * star.mass.to_solar_masses() + 0.394;
            let actual = star.final_mass.unwrap().to_solar_masses();
            assert!((actual - expected).abs() < 1e-12);
        }
    }
}
