//! Tests for command selection and execution

#![cfg(test)]

use std::fs;
use std::path::PathBuf;

use crate::commands::{build_cli, CommandFactory, PolylineCommandFactory};
use crate::polyline::PolylineError;
use crate::utils::logger::Logger;

fn run(args: &[&str]) -> Result<String, PolylineError> {
    let matches = build_cli().try_get_matches_from(args).unwrap();
    let logger = Logger::without_file();
    let command = PolylineCommandFactory::new().create_command(&matches, &logger)?;
    command.run()
}

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("polylinekit-{}-{}", std::process::id(), name))
}

#[test]
fn test_encode_command() {
    let out = run(&["polylinekit", "--encode", "[(38.5,-120.2),(40.7,-120.95),(43.252,-126.453)]"]).unwrap();
    assert_eq!(out, "_p~iF~ps|U_ulLnnqC_mqNvxq`@");
}

#[test]
fn test_decode_command() {
    let out = run(&["polylinekit", "-d", "_p~iF~ps|U_ulLnnqC_mqNvxq`@"]).unwrap();
    assert_eq!(out, "[(38.5,-120.2),(40.7,-120.95),(43.252,-126.453)]");
}

#[test]
fn test_inspect_is_default() {
    let out = run(&["polylinekit", "(38.5,-120.2)"]).unwrap();
    assert!(out.contains("Points: 1"));
    assert!(out.contains("Polyline: _p~iF~ps|U"));
}

#[test]
fn test_inspect_verbose_lists_points() {
    let out = run(&["polylinekit", "-v", "[(1.5,2.5),(3.25,-4.75)]"]).unwrap();
    assert!(out.contains("#0: (1.5,2.5)"));
    assert!(out.contains("#1: (3.25,-4.75)"));
}

#[test]
fn test_errors_surface_from_commands() {
    assert!(matches!(run(&["polylinekit", "1,2"]), Err(PolylineError::Format(_))));
    assert!(matches!(run(&["polylinekit", "-d", "_p~iF~ps|"]), Err(PolylineError::Format(_))));
    assert!(matches!(run(&["polylinekit", "-e", "  "]), Err(PolylineError::NullInput(_))));
}

#[test]
fn test_encode_and_decode_conflict() {
    assert!(build_cli().try_get_matches_from(["polylinekit", "-e", "-d", "x"]).is_err());
}

#[test]
fn test_file_input_and_output() {
    let input = temp_path("input.txt");
    let output = temp_path("output.txt");
    fs::write(&input, "[(38.5,-120.2)]\n").unwrap();

    let matches = build_cli().try_get_matches_from([
        "polylinekit", "-e", "-f",
        input.to_str().unwrap(),
        "-o", output.to_str().unwrap(),
    ]).unwrap();
    let logger = Logger::without_file();
    let command = PolylineCommandFactory::new().create_command(&matches, &logger).unwrap();
    command.execute().unwrap();

    assert_eq!(fs::read_to_string(&output).unwrap(), "_p~iF~ps|U\n");

    let _ = fs::remove_file(input);
    let _ = fs::remove_file(output);
}

#[test]
fn test_missing_input_file() {
    let missing = temp_path("does-not-exist.txt");
    let result = run(&["polylinekit", "-f", missing.to_str().unwrap()]);
    assert!(matches!(result, Err(PolylineError::IoError(_))));
}
