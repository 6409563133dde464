//! Integration tests for the lrt CLI
//!
//! These tests exercise the CLI commands end-to-end using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to get an lrt command with a clean environment
fn lrt() -> Command {
    let mut cmd = Command::cargo_bin("lrt").unwrap();
    cmd.env_remove("LRT_FLOWS_DIR");
    cmd.env_remove("LRT_FORMAT");
    cmd
}

/// Helper to write a flow file into a temp directory
fn write_flow(tmp: &TempDir, name: &str, contents: &str) -> String {
    let path = tmp.path().join(name);
    fs::write(&path, contents).unwrap();
    path.to_string_lossy().into_owned()
}

// ============================================================================
// CLI Basic Tests
// ============================================================================

#[test]
fn test_help_displays() {
    lrt()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("League Registration Toolkit"));
}

#[test]
fn test_version_displays() {
    lrt()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("lrt"));
}

#[test]
fn test_unknown_command_fails() {
    lrt()
        .arg("unknown-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

// ============================================================================
// Roles Command Tests
// ============================================================================

#[test]
fn test_roles_resolve_known_identifier() {
    lrt()
        .args(["roles", "resolve", "director"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Director"));
}

#[test]
fn test_roles_resolve_compound_name() {
    lrt()
        .args(["roles", "resolve", "super_director"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Super Director"));
}

#[test]
fn test_roles_resolve_unknown_is_not_an_error() {
    lrt()
        .args(["roles", "resolve", "referee"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Unknown"));
}

#[test]
fn test_roles_resolve_missing_identifier() {
    lrt()
        .args(["roles", "resolve"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Unknown"));
}

#[test]
fn test_roles_resolve_is_case_sensitive() {
    lrt()
        .args(["roles", "resolve", "Director"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Unknown"));
}

#[test]
fn test_roles_resolve_json() {
    lrt()
        .args(["roles", "resolve", "club_rep", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"privilege\":\"Club Rep\""));
}

#[test]
fn test_roles_classify_admin_tier() {
    lrt()
        .args(["roles", "classify", "Director", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"admin_tier\":true"))
        .stdout(predicate::str::contains("\"team_member_tier\":false"));
}

#[test]
fn test_roles_classify_team_member_tier() {
    lrt()
        .args(["roles", "classify", "Family", "Player", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"admin_tier\":false"))
        .stdout(predicate::str::contains("\"team_member_tier\":true"));
}

#[test]
fn test_roles_classify_empty_set() {
    lrt()
        .args(["roles", "classify", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"admin_tier\":false"))
        .stdout(predicate::str::contains("\"team_member_tier\":false"));
}

#[test]
fn test_roles_list_shows_known_identifiers() {
    lrt()
        .args(["roles", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("club_rep"))
        .stdout(predicate::str::contains("Club Rep"))
        .stdout(predicate::str::contains("superuser"));
}

#[test]
fn test_roles_list_id_format_is_pipeable() {
    lrt()
        .args(["roles", "list", "--format", "id"])
        .assert()
        .success()
        .stdout(predicate::str::contains("super_director\n"))
        .stdout(predicate::str::contains("PRIVILEGE").not());
}

// ============================================================================
// Flow List/Show/Validate Tests
// ============================================================================

#[test]
fn test_flow_list_shows_builtins() {
    lrt()
        .args(["flow", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("player"))
        .stdout(predicate::str::contains("team"))
        .stdout(predicate::str::contains("family"));
}

#[test]
fn test_flow_list_discovers_custom_flows() {
    let tmp = TempDir::new().unwrap();
    write_flow(
        &tmp,
        "tryout.yaml",
        "title: Tryout Signup\ntheme: player\nsteps:\n  - id: a\n    label: A\n",
    );

    lrt()
        .args(["flow", "list", "--flows-dir"])
        .arg(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Tryout Signup"));
}

#[test]
fn test_flow_show_builtin() {
    lrt()
        .args(["flow", "show", "player"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Player Registration"))
        .stdout(predicate::str::contains("profile"))
        .stdout(predicate::str::contains("review"));
}

#[test]
fn test_flow_show_marks_disabled_steps() {
    lrt()
        .args(["flow", "show", "family"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sibling Discount"))
        .stdout(predicate::str::contains("(disabled)"));
}

#[test]
fn test_flow_show_excludes_disabled_from_sequence() {
    lrt()
        .args(["flow", "show", "family"])
        .assert()
        .success()
        .stdout(predicate::str::contains("guardian → children → consent → review"));
}

#[test]
fn test_flow_show_yaml_format() {
    lrt()
        .args(["flow", "show", "player", "--format", "yaml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("title: Player Registration"));
}

#[test]
fn test_flow_validate_builtin_succeeds() {
    lrt()
        .args(["flow", "validate", "team"])
        .assert()
        .success()
        .stdout(predicate::str::contains("valid"));
}

#[test]
fn test_flow_validate_rejects_duplicate_step_ids() {
    let tmp = TempDir::new().unwrap();
    let path = write_flow(
        &tmp,
        "dup.yaml",
        r#"title: Broken
theme: player
steps:
  - id: profile
    label: Profile
  - id: profile
    label: Profile Again
"#,
    );

    lrt()
        .args(["flow", "validate", &path])
        .assert()
        .failure()
        .stderr(predicate::str::contains("duplicate step id"));
}

#[test]
fn test_flow_validate_rejects_disabled_duplicate_ids() {
    let tmp = TempDir::new().unwrap();
    let path = write_flow(
        &tmp,
        "dup.yaml",
        r#"title: Broken
theme: player
steps:
  - id: profile
    label: Profile
  - id: profile
    label: Hidden Twin
    enabled: false
"#,
    );

    lrt()
        .args(["flow", "validate", &path])
        .assert()
        .failure()
        .stderr(predicate::str::contains("duplicate step id"));
}

#[test]
fn test_flow_validate_rejects_fully_disabled_flow() {
    let tmp = TempDir::new().unwrap();
    let path = write_flow(
        &tmp,
        "empty.yaml",
        r#"title: Nothing To Do
theme: team
steps:
  - id: a
    label: A
    enabled: false
  - id: b
    label: B
    enabled: false
"#,
    );

    lrt()
        .args(["flow", "validate", &path])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no enabled steps"));
}

#[test]
fn test_flow_validate_rejects_malformed_yaml() {
    let tmp = TempDir::new().unwrap();
    let path = write_flow(&tmp, "bad.yaml", "title: [unclosed\n");

    lrt()
        .args(["flow", "validate", &path])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse flow YAML"));
}

#[test]
fn test_flow_unknown_name_fails() {
    lrt()
        .args(["flow", "show", "no-such-flow"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown flow"));
}

// ============================================================================
// Flow Run Tests (non-interactive)
// ============================================================================

#[test]
fn test_flow_run_auto_completes() {
    lrt()
        .args(["flow", "run", "player", "--auto"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Player Registration"))
        .stdout(predicate::str::contains("complete"))
        .stdout(predicate::str::contains("REG-"));
}

#[test]
fn test_flow_run_auto_walks_every_active_step() {
    lrt()
        .args(["flow", "run", "player", "--auto"])
        .assert()
        .success()
        .stdout(predicate::str::contains("step 1 of 5"))
        .stdout(predicate::str::contains("step 5 of 5"));
}

#[test]
fn test_flow_run_badge_renders_in_header() {
    lrt()
        .args(["flow", "run", "family", "--auto", "--badge", "Smith"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[Smith]"));
}

#[test]
fn test_flow_run_without_first_step_skips_forward() {
    lrt()
        .args([
            "flow", "run", "player", "--auto", "--verbose", "--without", "profile",
        ])
        .assert()
        .success()
        .stderr(predicate::str::contains("skipped disabled step: profile → medical"))
        .stdout(predicate::str::contains("step 1 of 4"));
}

#[test]
fn test_flow_run_without_every_step_completes_immediately() {
    lrt()
        .args([
            "flow", "run", "player", "--auto", "--verbose", "--without", "profile",
            "--without", "medical", "--without", "position", "--without", "waiver",
            "--without", "review",
        ])
        .assert()
        .success()
        .stderr(predicate::str::contains("completed after: profile"))
        .stdout(predicate::str::contains("complete"));
}

#[test]
fn test_flow_run_without_later_step_shortens_sequence() {
    lrt()
        .args(["flow", "run", "player", "--auto", "--without", "position"])
        .assert()
        .success()
        .stdout(predicate::str::contains("step 4 of 4"));
}

#[test]
fn test_flow_run_quiet_omits_receipt_details() {
    lrt()
        .args(["flow", "run", "team", "--auto", "--quiet"])
        .assert()
        .success()
        .stdout(predicate::str::contains("complete"))
        .stdout(predicate::str::contains("reference:").not());
}

#[test]
fn test_flow_run_custom_flow_file() {
    let tmp = TempDir::new().unwrap();
    let path = write_flow(
        &tmp,
        "clinic.yaml",
        r#"title: Coaching Clinic Signup
theme: team
steps:
  - id: contact
    label: Contact Details
  - id: session
    label: Session Choice
"#,
    );

    lrt()
        .args(["flow", "run", &path, "--auto"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Coaching Clinic Signup complete"));
}

// ============================================================================
// Completions Tests
// ============================================================================

#[test]
fn test_completions_bash() {
    lrt()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("lrt"));
}
