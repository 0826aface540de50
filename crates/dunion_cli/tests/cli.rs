#![allow(missing_docs)]

use std::process::{Command, Output};

use dunion_testkit::{fixture_path, stdout_json};

fn run_dunion(args: &[&str]) -> Output {
	Command::new(env!("CARGO_BIN_EXE_dunion")).args(args).output().expect("dunion command executes")
}

#[test]
fn animals_json_reports_agree_across_dispatch_styles() {
	let path = fixture_path("animals.json");
	let json = stdout_json(&run_dunion(&["animals", &path.display().to_string(), "--json"]));

	assert_eq!(json["count"], 4);
	assert_eq!(json["path"], path.display().to_string());
	let animals = json["animals"].as_array().expect("animals array");
	for report in animals {
		let tag = report["animal"]["animalType"].as_str().expect("tagged animal");
		for style in ["by_type", "by_value", "by_match", "by_visit", "by_predicate", "by_cast"] {
			assert_eq!(report[style], tag, "style {style} disagrees");
		}
	}
	assert_eq!(animals[1]["animal"], serde_json::json!({"animalType": "Cat", "likesToMeow": true}));
}

#[test]
fn points_json_reports_capabilities() {
	let path = fixture_path("points.json");
	let json = stdout_json(&run_dunion(&["points", &path.display().to_string(), "--json"]));

	assert_eq!(json["path"], path.display().to_string());
	let points = json["points"].as_array().expect("points array");
	let tags: Vec<&str> = points.iter().filter_map(|report| report["tag"].as_str()).collect();
	assert_eq!(tags, ["2d", "3d", "4d", "2dNamed"]);
	assert_eq!(points[2]["w"], 4);
	assert_eq!(points[3]["name"], "root");
	assert_eq!(points[3]["flat"], true);
	assert_eq!(points[1]["flat"], false);
	assert!(points[0]["z"].is_null());
}

#[test]
fn add_prints_tagged_animal() {
	let output = run_dunion(&["add", "dog"]);
	assert!(output.status.success());
	assert_eq!(
		String::from_utf8_lossy(&output.stdout),
		"Added animal:\n{\n  \"animalType\": \"Dog\",\n  \"likesToWoof\": true\n}\n"
	);
}

#[test]
fn add_bare_omits_discriminator() {
	let output = run_dunion(&["add", "cat", "--likes", "true", "--bare"]);
	assert!(output.status.success());
	assert_eq!(String::from_utf8_lossy(&output.stdout), "Added cat:\n{\n  \"likesToMeow\": true\n}\n");
}

#[test]
fn decode_prints_canonical_encoding() {
	let output = run_dunion(&["decode", "point", r#"{ "z": 3, "y": 2, "x": 1, "type": "3d" }"#]);
	assert!(output.status.success());
	assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), r#"{"type":"3d","x":1,"y":2,"z":3}"#);
}

#[test]
fn decode_rejects_unknown_discriminator() {
	let output = run_dunion(&["decode", "point", r#"{"type": "5d", "x": 1}"#]);
	assert!(!output.status.success());
	let stderr = String::from_utf8_lossy(&output.stderr);
	assert!(stderr.contains("unknown Point discriminator"), "unexpected stderr: {stderr}");
}

#[test]
fn missing_data_file_fails() {
	let path = fixture_path("no_such_file.json");
	let output = run_dunion(&["animals", &path.display().to_string()]);
	assert!(!output.status.success());
	assert!(String::from_utf8_lossy(&output.stderr).starts_with("error: io:"));
}
