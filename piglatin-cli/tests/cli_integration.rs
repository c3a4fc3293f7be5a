//! Integration tests for the piglatin CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to get the path to a test fixture
fn fixture_path(name: &str) -> String {
    format!("tests/fixtures/{}", name)
}

fn piglatin() -> Command {
    Command::cargo_bin("piglatin").unwrap()
}

#[test]
fn test_translate_phrase_argument() {
    piglatin()
        .args(["translate", "Smile,", "Glove!"])
        .assert()
        .success()
        .stdout("Ilesmay, Oveglay!\n");
}

#[test]
fn test_translate_quoted_phrase() {
    piglatin()
        .args(["translate", "Eat an apple"])
        .assert()
        .success()
        .stdout("Eatyay anyay appleyay\n");
}

#[test]
fn test_translate_file() {
    piglatin()
        .args(["translate", "-i"])
        .arg(fixture_path("english-sample.txt"))
        .assert()
        .success()
        .stdout(
            "Ilesmay, Oveglay!\n\nEthay uickqay ownbray oxfay umpsjay overyay ethay azylay ogday.\n",
        );
}

#[test]
fn test_translate_contractions_file() {
    piglatin()
        .args(["translate", "-i"])
        .arg(fixture_path("contractions-sample.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("On’tday opstay, it’syay Eatyay imetay."))
        .stdout(predicate::str::contains("rhythmay byay"));
}

#[test]
fn test_skip_blank_lines() {
    piglatin()
        .args(["translate", "--skip-blank", "-q", "-i"])
        .arg(fixture_path("english-sample.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("\n\n").not());
}

#[test]
fn test_glob_pattern() {
    piglatin()
        .args(["translate", "-q", "-i"])
        .arg(fixture_path("*.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Ilesmay, Oveglay!"))
        .stdout(predicate::str::contains("rhythmay byay"));
}

#[test]
fn test_json_output() {
    let output = piglatin()
        .args(["translate", "-f", "json", "Smile, Glove!"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json[0]["line"], 1);
    assert_eq!(json[0]["source"], "Smile, Glove!");
    assert_eq!(json[0]["translation"], "Ilesmay, Oveglay!");
    assert_eq!(json[0]["words"], 2);
}

#[test]
fn test_stdin_input() {
    piglatin()
        .arg("translate")
        .write_stdin("pig latin\n\nby\n")
        .assert()
        .success()
        .stdout("igpay atinlay\n\nbyay\n");
}

#[test]
fn test_output_to_file() {
    let temp_dir = TempDir::new().unwrap();
    let output_file = temp_dir.path().join("output.txt");

    piglatin()
        .args(["translate", "-i"])
        .arg(fixture_path("english-sample.txt"))
        .arg("-o")
        .arg(&output_file)
        .assert()
        .success()
        .stdout("");

    let content = fs::read_to_string(&output_file).unwrap();
    assert!(content.starts_with("Ilesmay, Oveglay!\n"));
}

#[test]
fn test_config_file_sets_format() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("piglatin.toml");
    fs::write(&config, "[output]\ndefault_format = \"json\"\npretty_json = false\n").unwrap();

    piglatin()
        .args(["translate", "-c"])
        .arg(&config)
        .arg("apple")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("[{\"line\":1"));
}

#[test]
fn test_blank_phrase_fails() {
    piglatin()
        .args(["translate", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be empty or whitespace"));
}

#[test]
fn test_invalid_file() {
    piglatin()
        .args(["translate", "-i", "nonexistent.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No files found"));
}

#[test]
fn test_word_command() {
    piglatin()
        .args(["word", "Glove"])
        .assert()
        .success()
        .stdout("Oveglay\n");
}

#[test]
fn test_word_command_blank() {
    piglatin()
        .args(["word", ""])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid argument `word`"));
}

#[test]
fn test_list_formats() {
    piglatin()
        .args(["list", "formats"])
        .assert()
        .success()
        .stdout(predicate::str::contains("text"))
        .stdout(predicate::str::contains("json"));
}

#[test]
fn test_generate_config() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("piglatin.toml");

    piglatin()
        .args(["generate-config", "-o"])
        .arg(&config)
        .assert()
        .success();

    let content = fs::read_to_string(&config).unwrap();
    assert!(content.contains("default_format = \"text\""));
}

#[test]
fn test_help_command() {
    piglatin()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Pig Latin"));
}
