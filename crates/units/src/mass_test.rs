use crate::mass::Mass;

#[test]
fn test_mass_solar_mass_round_trip() {
    let mass = Mass::from_solar_masses(0.503);
    assert_eq!(mass.to_solar_masses(), 0.503);
    assert_eq!(Mass::default().to_solar_masses(), 0.0);
}

#[test]
fn test_mass_ordering() {
    assert!(Mass::from_solar_masses(0.6) < Mass::from_solar_masses(1.4));
    assert!(Mass::from_solar_masses(27.5) > Mass::from_solar_masses(15.0));
}

#[test]
fn test_mass_serializes_as_bare_number() {
    let yaml = serde_yaml::to_string(&Mass::from_solar_masses(1.5)).unwrap();
    assert_eq!(yaml.trim(), "1.5");

    let mass: Mass = serde_yaml::from_str("23.0").unwrap();
    assert_eq!(mass, Mass::from_solar_masses(23.0));
}
