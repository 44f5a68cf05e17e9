mod common;

use assert_cmd::Command;
use predicates::str::contains;

use common::temp_dir;

fn cli(home: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("finance_profiles_cli").unwrap();
    cmd.env("FINANCE_PROFILES_CLI_SCRIPT", "1")
        .env("FINANCE_PROFILES_HOME", home)
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn script_mode_runs_basic_flow() {
    let home = temp_dir();
    let input = "new-profile Personal\n\
                 add Salary 1000 income\n\
                 add \"Morning coffee\" 4.50 expense\n\
                 show\n\
                 exit\n";

    cli(&home)
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains("Profile \"Personal\" created successfully!"))
        .stdout(contains("Transaction added successfully!"))
        .stdout(contains("Current Profile: Personal"))
        .stdout(contains("$995.50"))
        .stdout(contains("-$4.50"));

    let json = std::fs::read_to_string(home.join("data").join("financeprofiles.json")).unwrap();
    assert!(json.contains("\"Personal\""));
    assert!(json.contains("\"Morning coffee\""));
}

#[test]
fn script_mode_reports_validation_alerts() {
    let home = temp_dir();
    cli(&home)
        .write_stdin("add Coffee 4.50 expense\nnew-profile\nnew-profile A\nnew-profile A\nadd Gift -5 income\nexit\n")
        .assert()
        .success()
        .stdout(contains("Please select a profile first"))
        .stdout(contains("Please enter a profile name"))
        .stdout(contains("Profile already exists"))
        .stdout(contains("Amount must be greater than 0"));
}

#[test]
fn session_restarts_without_active_profile() {
    let home = temp_dir();
    cli(&home)
        .write_stdin("new-profile Savings\nadd Deposit 20 income\nexit\n")
        .assert()
        .success();

    cli(&home)
        .write_stdin("show\nprofiles\nuse Savings\ndelete-profile\nprofiles\n")
        .assert()
        .success()
        .stdout(contains("Please select a profile first."))
        .stdout(contains("  Savings"))
        .stdout(contains("Profile deleted successfully!"))
        .stdout(contains("No profiles yet."));
}

#[test]
fn unknown_commands_get_suggestions() {
    let home = temp_dir();
    cli(&home)
        .write_stdin("shwo\n")
        .assert()
        .success()
        .stdout(contains("Unknown command `shwo`"))
        .stdout(contains("Did you mean `show`?"));
}
