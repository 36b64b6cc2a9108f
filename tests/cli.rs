//! Command-line tests for pwgen

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

const MISSING: &str = "/definitely/not/here/words.txt";

fn wordlist(words: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    for word in words {
        writeln!(file, "{}", word).unwrap();
    }
    file
}

fn pwgen() -> Command {
    Command::cargo_bin("pwgen").unwrap()
}

#[test]
fn test_generates_requested_amount() {
    let words = wordlist(&["correct", "horse", "battery", "staple"]);

    let output = pwgen()
        .arg(words.path())
        .arg("wnw")
        .args(["--amount", "10", "--seed", "amount"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let stdout = String::from_utf8(output).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 10);
    for line in lines {
        let len = line.chars().count();
        assert!((7..=20).contains(&len), "Out of range: {}", line);
    }
}

#[test]
fn test_fixed_digits_never_skip() {
    let words = wordlist(&["unused"]);

    let assert = pwgen()
        .arg(words.path())
        .arg("nnnnn")
        .args(["--amount", "20", "--minlen", "5", "--maxlen", "5"])
        .assert()
        .success()
        .stderr(predicate::str::contains("skipped").not());

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert_eq!(stdout.lines().count(), 20);
    assert!(
        stdout
            .lines()
            .all(|l| l.len() == 5 && l.chars().all(|c| c.is_ascii_digit()))
    );
}

#[test]
fn test_unreachable_length_exhausts() {
    let words = wordlist(&["tiny"]);

    pwgen()
        .arg(words.path())
        .arg("wn")
        .args(["--amount", "1", "--minlen", "100", "--maxlen", "100"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "ERROR: Could not generate a valid password 100 times in a row",
        ))
        .stderr(predicate::function(|s: &str| {
            s.matches("skipped").count() == 99
        }));
}

#[test]
fn test_quiet_hides_retry_notices() {
    let words = wordlist(&["tiny"]);

    pwgen()
        .arg(words.path())
        .arg("w")
        .args(["--amount", "1", "--minlen", "100", "--maxlen", "100", "--quiet"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("skipped").not())
        .stderr(predicate::str::contains("ERROR:"));
}

#[test]
fn test_seeded_runs_identical() {
    let words = wordlist(&["alpha", "bravo", "charlie", "delta", "echo", "foxtrot"]);

    let run = || {
        pwgen()
            .arg(words.path())
            .arg("w?ns?w")
            .args(["--amount", "15", "--seed", "reproducible", "--quiet"])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone()
    };

    let first = run();
    assert!(!first.is_empty());
    assert_eq!(first, run());
}

#[test]
fn test_words_title_cased() {
    let words = wordlist(&["lowercase", "UPPERCASE", "mixedCase"]);

    let assert = pwgen()
        .arg(words.path())
        .arg("w")
        .args(["--amount", "30", "--seed", "titles"])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    for line in stdout.lines() {
        assert!(
            ["Lowercase", "UPPERCASE", "MixedCase"].contains(&line),
            "Unexpected password {}",
            line
        );
    }
}

#[test]
fn test_zero_amount_fails_before_reading_wordlist() {
    pwgen()
        .arg(MISSING)
        .arg("wnw")
        .args(["--amount", "0"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "ERROR: You need to generate at least one password!",
        ))
        .stderr(predicate::str::contains("not found").not());
}

#[test]
fn test_negative_amount_fails() {
    pwgen()
        .arg(MISSING)
        .arg("wnw")
        .args(["--amount", "-4"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "ERROR: You need to generate at least one password!",
        ));
}

#[test]
fn test_inverted_lengths_fail() {
    pwgen()
        .arg(MISSING)
        .arg("wnw")
        .args(["--amount", "1", "--minlen", "21", "--maxlen", "20"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "ERROR: Min length (21) is greater than the max length (20)",
        ));
}

#[test]
fn test_negative_minlen_accepted() {
    let words = wordlist(&["alpha", "bravo"]);

    let assert = pwgen()
        .arg(words.path())
        .arg("wn")
        .args(["--amount", "2", "--minlen", "-3", "--seed", "x"])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert_eq!(stdout.lines().count(), 2);
}

#[test]
fn test_negative_maxlen_below_minlen_fails() {
    pwgen()
        .arg(MISSING)
        .arg("wn")
        .args(["--amount", "1", "--minlen", "0", "--maxlen=-1"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "ERROR: Min length (0) is greater than the max length (-1)",
        ));
}

#[test]
fn test_negative_maxlen_exhausts() {
    let words = wordlist(&["alpha"]);

    pwgen()
        .arg(words.path())
        .arg("?n")
        .args(["--amount", "1", "--minlen", "-5", "--maxlen", "-1", "--quiet"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "ERROR: Could not generate a valid password 100 times in a row",
        ));
}

#[test]
fn test_invalid_format_fails_before_reading_wordlist() {
    pwgen()
        .arg(MISSING)
        .arg("x")
        .args(["--amount", "1"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("ERROR: Format is incorrect"))
        .stderr(predicate::str::contains("not found").not());
}

#[test]
fn test_empty_format_fails() {
    pwgen()
        .arg(MISSING)
        .arg("")
        .args(["--amount", "1"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("ERROR: Please provide a format"));
}

#[test]
fn test_missing_wordlist_fails() {
    pwgen()
        .arg(MISSING)
        .arg("wnw")
        .args(["--amount", "1"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("ERROR: Wordlist file not found"));
}

#[test]
fn test_empty_wordlist_with_word_token_fails() {
    let words = wordlist(&[]);

    pwgen()
        .arg(words.path())
        .arg("wn")
        .args(["--amount", "1", "--minlen", "1"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("ERROR: Wordlist contains no words"));
}

#[test]
fn test_empty_symbols_with_symbol_token_fails() {
    let words = wordlist(&["unused"]);

    pwgen()
        .arg(words.path())
        .arg("ns")
        .args(["--amount", "1", "--minlen", "1", "--symbols", ""])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("ERROR: Symbol set is empty"));
}

#[test]
fn test_custom_symbols_used() {
    let words = wordlist(&["unused"]);

    let assert = pwgen()
        .arg(words.path())
        .arg("sss")
        .args(["--amount", "10", "--minlen", "3", "--maxlen", "3", "--symbols", "#"])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(stdout.lines().all(|l| l == "###"));
}

#[test]
fn test_missing_amount_is_usage_error() {
    pwgen()
        .arg(MISSING)
        .arg("wnw")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("--amount"));
}

#[test]
fn test_help_succeeds() {
    pwgen()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("w = word"));
}
