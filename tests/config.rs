use std::fs::File;
use std::path::PathBuf;

use solsim::simulation::params::LENGTH_SCALE;
use solsim::{canonical, BodyId, GravityMode, NPoint3, NVec3, Scenario, ScenarioConfig, SimError};

fn scenario_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(name)
}

#[test]
fn empty_document_gives_defaults() {
    let cfg = ScenarioConfig::from_yaml_str("{}").unwrap();
    assert_eq!(cfg, ScenarioConfig::default());
    assert_eq!(cfg.engine.gravity, GravityMode::StarOnly);
    assert_eq!(cfg.launch.planet, BodyId::Earth);
}

#[test]
fn bundled_solar_system_matches_defaults() {
    let file = File::open(scenario_path("solar_system.yaml")).unwrap();
    let cfg = ScenarioConfig::from_reader(file).unwrap();
    assert_eq!(cfg, ScenarioConfig::default());
}

#[test]
fn bundled_mutual_random_parses() {
    let file = File::open(scenario_path("mutual_random.yaml")).unwrap();
    let cfg = ScenarioConfig::from_reader(file).unwrap();

    assert_eq!(cfg.engine.gravity, GravityMode::Mutual);
    assert_eq!(cfg.parameters.seed, 7);
    assert_eq!(cfg.launch.planet, BodyId::Jupiter);
    assert!(cfg.launch.randomize_on_reset);
    // untouched sections keep their defaults
    assert_eq!(cfg.engine.physics_delay_ms, 10);
    assert_eq!(cfg.parameters.length_scale, LENGTH_SCALE);
}

#[test]
fn partial_document_overrides_fields() {
    let yaml = r#"
engine:
  gravity: mutual
  frame_delay_ms: 40
parameters:
  G: 1.0e-10
  time_compression: 5000
launch:
  planet: mars
  velocity: [ 0.0, 250.0, 0.0 ]
"#;
    let cfg = ScenarioConfig::from_yaml_str(yaml).unwrap();

    assert_eq!(cfg.engine.gravity, GravityMode::Mutual);
    assert_eq!(cfg.engine.frame_delay_ms, 40);
    assert_eq!(cfg.engine.physics_delay_ms, 10);
    assert_eq!(cfg.parameters.G, 1.0e-10);
    assert_eq!(cfg.parameters.time_compression, 5000.0);
    assert_eq!(cfg.launch_site().planet, BodyId::Mars);
    assert_eq!(cfg.launch_site().velocity, NVec3::new(0.0, 250.0, 0.0));
}

#[test]
fn scenario_launches_from_configured_planet() {
    let yaml = "launch:\n  planet: jupiter\n  velocity: [1.0, 2.0, 3.0]\n";
    let cfg = ScenarioConfig::from_yaml_str(yaml).unwrap();
    let s = Scenario::build_scenario(cfg).unwrap();

    let jupiter = canonical(BodyId::Jupiter);
    let obj = canonical(BodyId::FreeObject);
    let x = jupiter.distance + (jupiter.display_radius + obj.display_radius) * LENGTH_SCALE;

    assert_eq!(s.body(BodyId::FreeObject).position(), NPoint3::new(x, 0.0, 0.0));
    assert_eq!(s.body(BodyId::FreeObject).velocity(), NVec3::new(1.0, 2.0, 3.0));
    assert_eq!(s.time_scale().coefficient(), 1.0e6);
}

#[test]
fn invalid_parameters_are_rejected() {
    let bad = [
        "parameters:\n  time_compression: -1.0\n",
        "parameters:\n  G: 0.0\n",
        "parameters:\n  length_scale: -7.45e10\n",
        "parameters:\n  star_mass_step: 0.0\n",
        "engine:\n  physics_delay_ms: 0\n",
        "launch:\n  planet: star\n",
        "launch:\n  planet: free_object\n",
    ];
    for yaml in bad {
        let err = ScenarioConfig::from_yaml_str(yaml).unwrap_err();
        assert!(matches!(err, SimError::Config { .. }), "{yaml:?} gave {err}");
    }
}

#[test]
fn malformed_yaml_is_a_parse_error() {
    for yaml in ["engine:\n  gravity: sideways\n", "launch:\n  planet: pluto\n", "parameters: [1, 2]\n"] {
        let err = ScenarioConfig::from_yaml_str(yaml).unwrap_err();
        assert!(matches!(err, SimError::YamlParse(_)), "{yaml:?} gave {err}");
    }
}

#[test]
fn build_scenario_validates() {
    let mut cfg = ScenarioConfig::default();
    cfg.parameters.time_compression = 0.0;
    assert!(Scenario::build_scenario(cfg).is_err());
}
