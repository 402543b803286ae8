mod common;

use clap::Parser;
use common::{rectangle, Recorder};
use route::config::Config;
use route::interfaces::command_line::{CommandLine, CommandLineArgs};
use route::interfaces::Message;
use route::objectives::default::FitnessSpan;
use route::{optimize, Error};
use serde_json::json;
use std::fs;
use std::path::PathBuf;

fn scratch(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("libroute-{}-{}", name, std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn evaluate_given_route() {
    let locations = rectangle();
    let mut config = Config::default();
    let fitness = CommandLine::evaluate(&[0, 1, 2, 3], &config, &locations).unwrap();
    assert_eq!(fitness, 4.0);
    config.objective.span = FitnessSpan::Closed;
    let fitness = CommandLine::evaluate(&[0, 1, 2, 3], &config, &locations).unwrap();
    assert_eq!(fitness, 14.0);
}

#[test]
fn evaluate_rejects_non_permutations() {
    let locations = rectangle();
    let config = Config::default();
    for route in [vec![0, 1, 1, 3], vec![0, 1, 2], vec![0, 1, 2, 4], vec![]] {
        let result = CommandLine::evaluate(&route, &config, &locations);
        assert!(matches!(result, Err(Error::InvalidArgument(_))));
    }
}

#[test]
fn messages_serialize_as_tagged_json() {
    let progress = Message::Progress {
        generation: 3,
        fitness: None,
        best_seen: 2.5,
    };
    assert_eq!(
        serde_json::to_value(&progress).unwrap(),
        json!({ "type": "progress", "generation": 3, "best_seen": 2.5 })
    );
    let progress = Message::Progress {
        generation: 3,
        fitness: Some(4.0),
        best_seen: 2.5,
    };
    assert_eq!(
        serde_json::to_value(&progress).unwrap(),
        json!({ "type": "progress", "generation": 3, "fitness": 4.0, "best_seen": 2.5 })
    );
    assert_eq!(
        serde_json::to_string(&Message::NoSolution).unwrap(),
        r#"{"type":"no_solution"}"#
    );
    assert_eq!(
        serde_json::to_value(Message::BetterSolution {
            generation: 0,
            fitness: 1.5
        })
        .unwrap(),
        json!({ "type": "better_solution", "generation": 0, "fitness": 1.5 })
    );
}

#[test]
fn prepare_applies_seed_override() {
    let dir = scratch("prepare");
    let config_path = dir.join("config.yaml");
    fs::write(&config_path, "seed: 3\npopulation_size: 12\n").unwrap();
    let locations_path = dir.join("locations.txt");
    fs::write(&locations_path, "7\tA\t0\t0\n8\tB\t3\t4\n").unwrap();

    let args = CommandLineArgs::parse_from([
        "route",
        "-c",
        config_path.to_str().unwrap(),
        "-l",
        locations_path.to_str().unwrap(),
        "-s",
        "42",
    ]);
    let (config, locations) = CommandLine::new(args).unwrap().prepare().unwrap();
    assert_eq!(config.seed, Some(42));
    assert_eq!(config.population_size, Some(12));
    assert_eq!(locations.len(), 2);
    assert_eq!(locations[1].index, 8);
    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn report_writes_result_file() {
    let dir = scratch("report");
    let args = CommandLineArgs::parse_from(["route", "-o", dir.to_str().unwrap()]);
    let command_line = CommandLine::new(args).unwrap();
    let config = Config {
        seed: Some(5),
        population_size: Some(8),
        ..Config::default()
    };
    let locations = rectangle();
    let result = optimize(&config, &locations, &Recorder::default()).unwrap();
    command_line.report_result(&result, &locations).unwrap();

    let best = result.best.unwrap();
    let content = fs::read_to_string(dir.join("result.yaml")).unwrap();
    let report: serde_yaml::Value = serde_yaml::from_str(&content).unwrap();
    assert_eq!(report["distance"].as_f64(), Some(best.fitness));
    assert_eq!(report["generations"].as_u64(), Some(10));
    let route: Vec<u64> = report["route"]
        .as_sequence()
        .unwrap()
        .iter()
        .map(|gene| gene.as_u64().unwrap())
        .collect();
    let expected: Vec<u64> = best
        .route
        .iter()
        .map(|&gene| locations[gene].index as u64)
        .collect();
    assert_eq!(route, expected);
    assert_eq!(report["names"].as_sequence().unwrap().len(), 4);
    fs::remove_dir_all(&dir).unwrap();
}
