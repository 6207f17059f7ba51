use crate::helpers::assertions::{assert_in_order, count};
use crate::helpers::cli_runner::CliRunner;

const GATE: &str = "ERROR: Please enter your numbers first.";

#[test]
fn every_gated_option_before_entry() {
    let cli = CliRunner::new();
    let res = cli.run_with_input(&["play"], "2\n3\n4\n5\n6\n");
    assert_eq!(res.exit_code, 0);
    assert_eq!(count(&res.stdout, GATE), 4);
    assert!(!res.stdout.contains("Your numbers:"));
    assert!(!res.stdout.contains("Numbers sorted."));
    assert!(!res.stdout.contains("You've won"));
    assert!(!res.stdout.contains("has been chosen"));
}

#[test]
fn gate_lifts_after_entry() {
    let cli = CliRunner::new();
    let res = cli.run_with_input(&[], "2\n1\n4 5 6 1 2 3\n2\n6\n");
    assert_eq!(res.exit_code, 0);
    assert_in_order(
        &res.stdout,
        &[GATE, "Numbers saved.", "Your numbers: 4 5 6 1 2 3", "Thank you for playing."],
    );
    assert_eq!(count(&res.stdout, GATE), 1);
}

#[test]
fn out_of_range_menu_choices_reprompt() {
    let cli = CliRunner::new();
    let res = cli.run_with_input(&["play"], "0\n-1\n7\nfive\n6\n");
    assert_eq!(res.exit_code, 0);
    assert_eq!(count(&res.stdout, "ERROR: Please select a valid menu option: "), 4);
    assert!(res.stdout.ends_with("Thank you for playing.\n"));
}

#[test]
fn closed_input_says_goodbye() {
    let cli = CliRunner::new();
    let res = cli.run_with_input(&["play"], "");
    assert_eq!(res.exit_code, 0);
    assert_in_order(&res.stdout, &["Welcome to the lotto game!", "Thank you for playing."]);
}
