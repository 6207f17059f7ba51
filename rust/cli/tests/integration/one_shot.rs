use crate::helpers::cli_runner::CliRunner;
use serde_json::Value;

#[test]
fn check_prints_narration() {
    let cli = CliRunner::new();
    let res = cli.run(&["check", "1", "3", "5", "7", "42", "13"]);
    assert_eq!(res.exit_code, 0);
    assert_eq!(res.stdout, "Match 4 + Bonus\nYou've won a weekend away!\n");
}

#[test]
fn check_json() {
    let cli = CliRunner::new();
    let res = cli.run(&["check", "1", "3", "5", "42", "14", "15", "--json"]);
    assert_eq!(res.exit_code, 0);
    let v: Value = serde_json::from_str(&res.stdout).expect("json output");
    assert_eq!(v["matches"], 3);
    assert_eq!(v["bonus"], true);
    assert_eq!(v["tier"], "cinema_ticket");
}

#[test]
fn check_rejects_bad_numbers() {
    let cli = CliRunner::new();
    let res = cli.run(&["check", "1", "3", "5", "7", "9", "9"]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("ERROR: number 9 was chosen more than once"));

    let res = cli.run(&["check", "1", "3", "5"]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("expected 6 numbers, got 3"));

    let res = cli.run(&["check", "-4", "3", "5", "7", "9", "10"]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("number -4 is outside the range 1-42"));
}

#[test]
fn sort_prints_ascending() {
    let cli = CliRunner::new();
    let res = cli.run(&["sort", "30", "2", "41", "17", "8", "1"]);
    assert_eq!(res.exit_code, 0);
    assert_eq!(res.stdout, "Your numbers: 1 2 8 17 30 41\n");
}

#[test]
fn help_and_version() {
    let cli = CliRunner::new();
    let res = cli.run(&["--help"]);
    assert_eq!(res.exit_code, 0);
    for cmd in ["play", "check", "sort", "cfg"] {
        assert!(res.stdout.contains(cmd), "help should list `{}`", cmd);
    }
    let res = cli.run(&["--version"]);
    assert_eq!(res.exit_code, 0);
    assert!(res.stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn unknown_command_is_usage_error() {
    let cli = CliRunner::new();
    let res = cli.run(&["draw"]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stdout.is_empty());
    assert!(!res.stderr.is_empty());
}
