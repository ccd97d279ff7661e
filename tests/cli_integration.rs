use assert_cmd::Command;
use predicates::prelude::PredicateBooleanExt;
use predicates::prelude::*;
use std::path::Path;

fn talekeep(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("talekeep").unwrap();
    cmd.env("TALEKEEP_HOME", home);
    cmd
}

fn write_catalog(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("stories.json");
    std::fs::write(
        &path,
        r#"{
            "stories": [
                {
                    "id": "the-last-garden",
                    "title": "The Last Garden",
                    "author": "M. Reyes",
                    "genre": "Sci-Fi",
                    "tags": ["plants"],
                    "wordCount": 4100
                },
                {
                    "id": "paper-lanterns",
                    "title": "Paper Lanterns",
                    "genre": "Fantasy"
                }
            ]
        }"#,
    )
    .unwrap();
    path
}

#[test]
fn progress_is_monotonic_end_to_end() {
    let temp = tempfile::tempdir().unwrap();
    let home = temp.path();

    talekeep(home)
        .args(["progress", "the-last-garden", "42"])
        .assert()
        .success()
        .stdout(predicates::str::contains("42% read"));

    // Lower sample is ignored
    talekeep(home)
        .args(["progress", "the-last-garden", "30"])
        .assert()
        .success()
        .stdout(predicates::str::contains("sample ignored"));

    // State survived across invocations (separate processes)
    talekeep(home)
        .args(["view", "the-last-garden"])
        .assert()
        .success()
        .stdout(predicates::str::contains("progress:   42%"));
}

#[test]
fn completion_announced_once() {
    let temp = tempfile::tempdir().unwrap();
    let home = temp.path();

    talekeep(home)
        .args(["progress", "the-last-garden", "96"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Story completed!"));

    talekeep(home)
        .args(["progress", "the-last-garden", "97"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Story completed!").not());

    talekeep(home)
        .args(["view", "the-last-garden"])
        .assert()
        .success()
        .stdout(predicates::str::contains("completed:  yes"));
}

#[test]
fn bookmark_and_stats() {
    let temp = tempfile::tempdir().unwrap();
    let home = temp.path();

    talekeep(home)
        .args(["bookmark", "paper-lanterns"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Bookmarked paper-lanterns"));

    talekeep(home)
        .args(["complete", "the-last-garden"])
        .assert()
        .success();

    talekeep(home)
        .args(["session", "the-last-garden", "300"])
        .assert()
        .success()
        .stdout(predicates::str::contains("5m 0s"));

    talekeep(home)
        .arg("stats")
        .assert()
        .success()
        .stdout(predicates::str::contains("Stories read:  1"))
        .stdout(predicates::str::contains("Favorites:     1"))
        .stdout(predicates::str::contains("Time reading:  5m 0s"));

    // Toggling the bookmark off updates the derived count
    talekeep(home)
        .args(["bookmark", "paper-lanterns"])
        .assert()
        .success();

    talekeep(home)
        .arg("stats")
        .assert()
        .success()
        .stdout(predicates::str::contains("Favorites:     0"));
}

#[test]
fn list_joins_catalog_and_progress() {
    let temp = tempfile::tempdir().unwrap();
    let home = temp.path();
    let catalog = write_catalog(home);

    talekeep(home)
        .args(["progress", "the-last-garden", "60"])
        .assert()
        .success();

    talekeep(home)
        .arg("list")
        .arg("--catalog")
        .arg(&catalog)
        .assert()
        .success()
        .stdout(predicates::str::contains("The Last Garden"))
        .stdout(predicates::str::contains("60%"))
        .stdout(predicates::str::contains("Paper Lanterns"));

    // Search narrows by catalog fields
    talekeep(home)
        .args(["list", "--search", "fantasy"])
        .arg("--catalog")
        .arg(&catalog)
        .assert()
        .success()
        .stdout(predicates::str::contains("Paper Lanterns"))
        .stdout(predicates::str::contains("The Last Garden").not());

    // Completed filter starts empty
    talekeep(home)
        .args(["list", "--completed"])
        .arg("--catalog")
        .arg(&catalog)
        .assert()
        .success()
        .stdout(predicates::str::contains("No stories found."));
}

#[test]
fn font_size_clamps_at_band_edges() {
    let temp = tempfile::tempdir().unwrap();
    let home = temp.path();

    // Site band tops out at 24 (16 -> 18 -> ... -> 24, then stays)
    for _ in 0..6 {
        talekeep(home)
            .args(["font", "bigger"])
            .assert()
            .success();
    }
    talekeep(home)
        .args(["font", "bigger"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Font size: 24px"));

    talekeep(home)
        .args(["font", "reset"])
        .assert()
        .success()
        .stdout(predicates::str::contains("reset to 16px"));

    // Reader context has its own band and floor
    for _ in 0..6 {
        talekeep(home)
            .args(["font", "smaller", "--reader"])
            .assert()
            .success();
    }
    talekeep(home)
        .args(["font", "smaller", "--reader"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Font size: 14px"));
}

#[test]
fn theme_round_trip() {
    let temp = tempfile::tempdir().unwrap();
    let home = temp.path();

    // Default is dark
    talekeep(home)
        .arg("theme")
        .assert()
        .success()
        .stdout(predicates::str::contains("theme = dark"));

    talekeep(home)
        .args(["theme", "light"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Switched to light theme"));

    talekeep(home)
        .arg("theme")
        .assert()
        .success()
        .stdout(predicates::str::contains("theme = light"));
}

#[test]
fn corrupt_state_degrades_to_defaults() {
    let temp = tempfile::tempdir().unwrap();
    let home = temp.path();

    std::fs::write(home.join("progress.json"), "{definitely not json").unwrap();
    std::fs::write(home.join("preferences.json"), "][").unwrap();

    talekeep(home)
        .args(["view", "the-last-garden"])
        .assert()
        .success()
        .stdout(predicates::str::contains("progress:   0%"));

    talekeep(home)
        .arg("theme")
        .assert()
        .success()
        .stdout(predicates::str::contains("theme = dark"));

    // Writes recover the files
    talekeep(home)
        .args(["progress", "the-last-garden", "10"])
        .assert()
        .success();

    talekeep(home)
        .args(["view", "the-last-garden"])
        .assert()
        .success()
        .stdout(predicates::str::contains("progress:   10%"));
}

#[test]
fn config_and_init() {
    let temp = tempfile::tempdir().unwrap();
    let home = temp.path();

    talekeep(home)
        .arg("init")
        .assert()
        .success()
        .stdout(predicates::str::contains("Initialized"));

    talekeep(home)
        .args(["config", "completion-threshold", "80"])
        .assert()
        .success()
        .stdout(predicates::str::contains("completion-threshold set to 80"));

    // The lowered threshold is live for progress recording
    talekeep(home)
        .args(["progress", "the-last-garden", "85"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Story completed!"));

    talekeep(home)
        .args(["config", "bogus-key", "1"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Unknown config key"));
}

#[test]
fn empty_story_id_is_rejected() {
    let temp = tempfile::tempdir().unwrap();

    talekeep(temp.path())
        .args(["progress", " ", "50"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("Invalid story id"));
}
