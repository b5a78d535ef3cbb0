use assert_cmd::Command;
use httpmock::prelude::*;
use predicates::prelude::*;
use serde_json::json;
use tempfile::tempdir;

fn dashprune(config_dir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("dashprune").unwrap();
    cmd.env("DASHPRUNE_CONFIG_DIR", config_dir)
        .env_remove("DASHPRUNE_URL")
        .env_remove("DASHPRUNE_TOKEN");
    cmd
}

#[test]
fn version_reports_build_metadata() {
    let td = tempdir().unwrap();
    dashprune(td.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("version:")
                .and(predicate::str::contains("git sha:"))
                .and(predicate::str::contains("build time (UTC):"))
                .and(predicate::str::contains("target:")),
        );
}

#[test]
fn tag_prints_hex_colors() {
    let td = tempdir().unwrap();
    // djb2("") lands on row 16
    dashprune(td.path())
        .args(["tag", ""])
        .assert()
        .success()
        .stdout(predicate::str::contains("color=#7662B1\tborder=#A694DD"));
}

#[test]
fn tag_json_lists_every_name() {
    let td = tempdir().unwrap();
    let out = dashprune(td.path())
        .args(["tag", "prod", "PROD", "--json"])
        .output()
        .unwrap();
    assert!(out.status.success());
    let rows: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(rows.as_array().unwrap().len(), 2);
    assert_eq!(rows[0]["color"], rows[1]["color"]);
    assert_eq!(rows[0]["borderColor"], rows[1]["borderColor"]);
}

#[test]
fn prompt_prints_text_and_subtitle() {
    let td = tempdir().unwrap();
    dashprune(td.path())
        .args(["prompt", "--folders", "2", "--dashboards", "3"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Do you want to delete the selected folders and dashboards?")
                .and(predicate::str::contains(
                    "All dashboards of the selected folders will also be deleted",
                )),
        );
}

#[test]
fn rm_without_uids_does_nothing() {
    let td = tempdir().unwrap();
    dashprune(td.path())
        .args(["rm", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing to delete"));
}

#[test]
fn rm_yes_deletes_through_the_api() {
    let td = tempdir().unwrap();
    let server = MockServer::start();
    let folder = server.mock(|when, then| {
        when.method(DELETE).path("/api/folders/A");
        then.status(200).json_body(json!({"message": "Folder deleted"}));
    });
    let dash = server.mock(|when, then| {
        when.method(DELETE).path("/api/dashboards/uid/B");
        then.status(200).json_body(json!({"title": "B"}));
    });

    dashprune(td.path())
        .args(["rm", "--folder", "A", "--dashboard", "B", "--yes", "--url"])
        .arg(server.base_url())
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Folder 'A' deleted")
                .and(predicate::str::contains("Dashboard 'B' deleted")),
        );
    folder.assert();
    dash.assert();
}

#[test]
fn rm_reports_server_errors() {
    let td = tempdir().unwrap();
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(DELETE).path("/api/dashboards/uid/B");
        then.status(404).body("not found");
    });

    dashprune(td.path())
        .args(["rm", "--dashboard", "B", "--yes", "--url"])
        .arg(server.base_url())
        .assert()
        .failure()
        .stderr(predicate::str::contains("404"));
}

#[test]
fn search_groups_results() {
    let td = tempdir().unwrap();
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/search");
        then.status(200).json_body(json!([
            {"uid": "f1", "title": "Ops", "type": "dash-folder"},
            {"uid": "d1", "title": "CPU", "type": "dash-db", "folderUid": "f1", "tags": ["prod"]},
            {"uid": "d2", "title": "Home", "type": "dash-db"}
        ]));
    });

    dashprune(td.path())
        .args(["search", "--url"])
        .arg(server.base_url())
        .assert()
        .success()
        .stdout(
            predicate::str::contains("📁 Ops (f1)")
                .and(predicate::str::contains("CPU (d1) [prod]"))
                .and(predicate::str::contains("📁 General")),
        );
}
