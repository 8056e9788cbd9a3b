//! CLI command integration tests.
//! Each test writes its own dataset and uses a temp directory via
//! ATLAS_DATA_DIR for full isolation.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const DATASET_JSON: &str = r#"[
  {"id": "sokrates", "name": "Sokrates", "nameEn": "Socrates",
   "birthYear": -470, "deathYear": -399, "birthCity": "Athens",
   "period": "Classical", "school": "Socratic",
   "keyIdeas": ["Socratic method"]},
  {"id": "platon", "name": "Platon", "nameEn": "Plato",
   "birthYear": -428, "deathYear": -348, "birthCity": "Athens",
   "period": "Classical", "school": "Platonism",
   "works": [{"title": "Politeia", "description": "On justice and the ideal city"}]},
  {"id": "aristoteles", "name": "Aristoteles", "nameEn": "Aristotle",
   "birthYear": -384, "deathYear": -322, "birthCity": "Stagira",
   "period": "Classical", "school": "Peripatetic"},
  {"id": "zenon", "name": "Zenon", "nameEn": "Zeno of Citium",
   "birthYear": -334, "deathYear": -262, "birthCity": "Citium",
   "period": "Hellenistic", "school": "Stoa"}
]"#;

fn write_dataset(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("philosophers.json");
    std::fs::write(&path, DATASET_JSON).unwrap();
    path
}

fn atlas_cmd(dir: &TempDir) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("atlas").unwrap();
    cmd.env("ATLAS_DATASET", write_dataset(dir));
    cmd.env("ATLAS_DATA_DIR", dir.path());
    cmd
}

#[test]
fn facets_lists_derived_values() {
    let dir = TempDir::new().unwrap();
    atlas_cmd(&dir)
        .args(["facets"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Classical, Hellenistic"))
        .stdout(predicate::str::contains("Athens, Citium, Stagira"))
        .stdout(predicate::str::contains("470 BCE"))
        .stdout(predicate::str::contains("262 BCE"));
}

#[test]
fn search_substring_and_fuzzy() {
    let dir = TempDir::new().unwrap();

    // substring on the Latin name
    atlas_cmd(&dir)
        .args(["search", "arist"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Aristoteles"))
        .stdout(predicate::str::contains("1 match(es)"));

    // subsequence fallback: "arts" is not a substring of any field
    atlas_cmd(&dir)
        .args(["search", "arts"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Aristoteles"));

    // searching a work description also matches
    atlas_cmd(&dir)
        .args(["search", "ideal city"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Platon"));
}

#[test]
fn search_records_history_but_list_does_not() {
    let dir = TempDir::new().unwrap();

    atlas_cmd(&dir).args(["search", "stoa"]).assert().success();
    atlas_cmd(&dir)
        .args(["list", "--query", "athens"])
        .assert()
        .success();

    atlas_cmd(&dir)
        .args(["history"])
        .assert()
        .success()
        .stdout(predicate::str::contains("stoa"))
        .stdout(predicate::str::contains("athens").not());
}

#[test]
fn list_filters_compose() {
    let dir = TempDir::new().unwrap();

    atlas_cmd(&dir)
        .args(["list", "--school", "Stoa"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Zenon"))
        .stdout(predicate::str::contains("Sokrates").not());

    atlas_cmd(&dir)
        .args(["list", "--from", "-400", "--to", "-350"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Aristoteles"))
        .stdout(predicate::str::contains("Zenon").not());

    atlas_cmd(&dir)
        .args(["list", "--period", "Classical", "--city", "Stagira"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 match(es)"));
}

#[test]
fn view_shows_detail_and_records_recent() {
    let dir = TempDir::new().unwrap();

    atlas_cmd(&dir)
        .args(["view", "platon"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Platon (Plato)"))
        .stdout(predicate::str::contains("born in: Athens"))
        .stdout(predicate::str::contains("Politeia"));

    atlas_cmd(&dir).args(["view", "zenon"]).assert().success();

    // most recent first
    let output = atlas_cmd(&dir).args(["recent"]).output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let zenon = stdout.find("Zenon").expect("zenon listed");
    let platon = stdout.find("Platon").expect("platon listed");
    assert!(zenon < platon, "zenon viewed last, should come first");
}

#[test]
fn fav_toggles_and_persists() {
    let dir = TempDir::new().unwrap();

    atlas_cmd(&dir)
        .args(["fav", "sokrates"])
        .assert()
        .success()
        .stdout(predicate::str::contains("added sokrates"));

    atlas_cmd(&dir)
        .args(["favorites"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sokrates"));

    atlas_cmd(&dir)
        .args(["fav", "sokrates"])
        .assert()
        .success()
        .stdout(predicate::str::contains("removed sokrates"));

    atlas_cmd(&dir)
        .args(["favorites"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(no favorites)"));
}

#[test]
fn history_clear_and_remove() {
    let dir = TempDir::new().unwrap();

    atlas_cmd(&dir).args(["search", "athens"]).assert().success();
    atlas_cmd(&dir).args(["search", "stoa"]).assert().success();

    atlas_cmd(&dir)
        .args(["history", "--remove", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("removed history entry 0"));

    atlas_cmd(&dir)
        .args(["history"])
        .assert()
        .success()
        .stdout(predicate::str::contains("athens"))
        .stdout(predicate::str::contains("stoa").not());

    atlas_cmd(&dir)
        .args(["history", "--clear"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cleared"));

    atlas_cmd(&dir)
        .args(["history"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(no search history)"));
}

#[test]
fn unknown_id_fails_loudly() {
    let dir = TempDir::new().unwrap();

    atlas_cmd(&dir).args(["view", "nobody"]).assert().failure();
    atlas_cmd(&dir).args(["fav", "nobody"]).assert().failure();
    atlas_cmd(&dir)
        .args(["history", "--remove", "5"])
        .assert()
        .failure();
}

#[test]
fn missing_dataset_is_an_error() {
    let dir = TempDir::new().unwrap();

    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("atlas").unwrap();
    cmd.env("ATLAS_DATA_DIR", dir.path());
    cmd.env_remove("ATLAS_DATASET");
    cmd.args(["facets"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no dataset"));
}

#[test]
fn stats_counts_everything() {
    let dir = TempDir::new().unwrap();

    atlas_cmd(&dir).args(["fav", "platon"]).assert().success();
    atlas_cmd(&dir).args(["view", "zenon"]).assert().success();

    atlas_cmd(&dir)
        .args(["stats"])
        .assert()
        .success()
        .stdout(predicate::str::contains("philosophers: 4"))
        .stdout(predicate::str::contains("favorites:    1"))
        .stdout(predicate::str::contains("recent:       1"));
}
