//! End-to-end tests over the compiled binary.

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;

fn write_quote(dir: &tempfile::TempDir, name: &str, body: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, body).unwrap();
    path
}

#[test]
fn compare_two_text_quotes() {
    let dir = tempfile::tempdir().unwrap();
    let a = write_quote(
        &dir,
        "cameron.txt",
        "Proveedor: Cameron\n\nBrida WN serie 900\n101 4 100,00 400,00\n",
    );
    let b = write_quote(
        &dir,
        "mma.txt",
        "Proveedor: MMA\n\nBrida WN serie 900\n101 4 90,00 360,00\nForma de pago: 30 días f/f\n",
    );

    Command::cargo_bin("cotejo")
        .unwrap()
        .arg("compare")
        .arg(&a)
        .arg(&b)
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Cameron")
                .and(predicate::str::contains("MMA"))
                .and(predicate::str::contains("Brida WN serie 900"))
                .and(predicate::str::contains("recomendado")),
        );
}

#[test]
fn compare_writes_csv_tables() {
    let dir = tempfile::tempdir().unwrap();
    let a = write_quote(&dir, "a.txt", "Proveedor: A\n\n101 2 10,00 20,00\n");
    let out = dir.path().join("out");

    Command::cargo_bin("cotejo")
        .unwrap()
        .arg("compare")
        .arg(&a)
        .arg("--output-dir")
        .arg(&out)
        .assert()
        .success();

    let comparison = fs::read_to_string(out.join("comparison.csv")).unwrap();
    assert!(comparison.contains("A precio unitario"));
    assert!(out.join("conditions.csv").exists());
    assert!(out.join("vendors.csv").exists());
}

#[test]
fn extract_json_reports_vendor() {
    let dir = tempfile::tempdir().unwrap();
    let quote = write_quote(
        &dir,
        "mma.txt",
        "Proveedor: MMA\n\n101 4 90,00 360,00\nIncoterm: FCA Campana\n",
    );

    Command::cargo_bin("cotejo")
        .unwrap()
        .arg("extract")
        .arg(&quote)
        .arg("--format")
        .arg("json")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("\"vendor\": \"MMA\"")
                .and(predicate::str::contains("FCA Campana")),
        );
}

#[test]
fn unparsable_document_does_not_abort_the_run() {
    let dir = tempfile::tempdir().unwrap();
    let letter = write_quote(&dir, "carta.txt", "Estimados,\nsaludos cordiales.\n");
    let quote = write_quote(&dir, "mma.txt", "Proveedor: MMA\n\n101 4 90,00 360,00\n");

    Command::cargo_bin("cotejo")
        .unwrap()
        .arg("compare")
        .arg(&letter)
        .arg(&quote)
        .assert()
        .success()
        .stdout(predicate::str::contains("carta.txt").and(predicate::str::contains("MMA")));
}
