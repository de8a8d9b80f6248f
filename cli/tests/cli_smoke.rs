//! End-to-end tests for the `rowmat` binary using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;

fn cmd() -> Command {
    Command::cargo_bin("rowmat").unwrap()
}

#[test]
fn default_dimensions() {
    cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("Rows = 3 Cols = 4"));
}

#[test]
fn explicit_dimensions() {
    cmd()
        .args(["--rows", "3", "--cols", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rows = 3 Cols = 4"));
}

#[test]
fn short_dimension_flags() {
    cmd()
        .args(["-m", "5", "-n", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rows = 5 Cols = 2"));
}

#[test]
fn zero_rows_is_an_error() {
    cmd()
        .args(["--rows", "0"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains(
            "matrix dimensions must be nonzero: a matrix cannot have zero rows or columns",
        ));
}

#[test]
fn zero_cols_is_an_error() {
    cmd()
        .args(["--cols", "0"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("zero rows or columns"));
}

#[test]
fn zero_dimension_prints_no_dimension_line() {
    cmd()
        .args(["--rows", "0"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Rows =").not());
}

#[test]
fn help_exits_one() {
    // The help path deliberately exits 1, not 0.
    cmd()
        .arg("--help")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Usage"))
        .stdout(predicate::str::contains("--rows"));
}

#[test]
fn unknown_flag_exits_one() {
    cmd().arg("--bogus").assert().failure().code(1);
}

#[test]
fn verbose_prints_the_matrix() {
    // A 2x3 iota fill prints the matrix followed by its transpose.
    cmd()
        .args(["--verbose", "-m", "2", "-n", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rows = 2 Cols = 3"))
        .stdout(predicate::str::contains("0 1 2\n3 4 5\n"))
        .stdout(predicate::str::contains("0 3\n1 4\n2 5\n"));
}

#[test]
fn random_fill_smoke() {
    cmd()
        .args(["--random", "--min", "-2", "--max", "2", "--repeat", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rows = 3 Cols = 4"));
}

#[test]
fn negative_bounds_parse() {
    // `--min -5` passes the negative value as its own token.
    cmd()
        .args(["--random", "--min", "-5", "--max", "-1", "-m", "2", "-n", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rows = 2 Cols = 2"));
}

#[test]
fn random_with_inverted_range_fails() {
    // Parsing succeeds and the dimension line is printed; the failure comes
    // from the empty sampling range.
    cmd()
        .args(["--random", "--min", "5", "--max", "-5"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Rows = 3 Cols = 4"));
}
