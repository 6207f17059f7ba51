pub mod config;
pub mod input;
pub mod logging;
pub mod menu;
pub mod ui;

use std::io::{BufRead, Write};

use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use lotto_engine::{evaluate, PlayerNumbers, Session, DEFAULT_WINNING};

/// Runs the CLI on the process's stdin, writing to the given writers.
/// Returns the intended process exit code.
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    run_with_input(args, &mut input, out, err)
}

/// Same as [`run`], reading interactive input from `input`.
pub fn run_with_input<I, S>(
    args: I,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();
    let cli = match LottoCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    let _ = write!(out, "{}", e.render());
                    0
                }
                _ => {
                    let _ = write!(err, "{}", e.render());
                    2
                }
            };
        }
    };

    let cfg = match config::load() {
        Ok(cfg) => cfg,
        Err(e) => {
            let _ = ui::write_error(err, &e.to_string());
            return 2;
        }
    };
    logging::init(&cfg.log_level);

    let res = match cli.cmd.unwrap_or(Commands::Play) {
        Commands::Play => {
            let mut session = Session::new(DEFAULT_WINNING);
            menu::run_session(&mut session, &cfg, input, out)
        }
        Commands::Check { numbers, json } => {
            let player = match parse_numbers(&numbers, err) {
                Some(p) => p,
                None => return 2,
            };
            let outcome = evaluate(&player, &DEFAULT_WINNING);
            if json {
                match serde_json::to_string_pretty(&outcome) {
                    Ok(s) => writeln!(out, "{}", s),
                    Err(e) => Err(e.into()),
                }
            } else {
                ui::print_outcome(out, &outcome)
            }
        }
        Commands::Sort { numbers } => {
            let mut player = match parse_numbers(&numbers, err) {
                Some(p) => p,
                None => return 2,
            };
            player.sort();
            ui::print_numbers(out, &player)
        }
        Commands::Cfg => match serde_json::to_string_pretty(&cfg) {
            Ok(s) => writeln!(out, "{}", s),
            Err(e) => Err(e.into()),
        },
    };

    match res {
        Ok(()) => 0,
        Err(e) => {
            let _ = ui::write_error(err, &e.to_string());
            1
        }
    }
}

fn parse_numbers(values: &[i32], err: &mut dyn Write) -> Option<PlayerNumbers> {
    match PlayerNumbers::try_from(values) {
        Ok(p) => Some(p),
        Err(e) => {
            let _ = ui::write_error(err, &e.to_string());
            None
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "lotto", version, about = "Lotto game: pick six numbers from 1-42")]
struct LottoCli {
    #[command(subcommand)]
    cmd: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Interactive menu session (default)
    Play,
    /// Check six numbers against the draw
    Check {
        #[arg(required = true, allow_negative_numbers = true)]
        numbers: Vec<i32>,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print six numbers in ascending order
    Sort {
        #[arg(required = true, allow_negative_numbers = true)]
        numbers: Vec<i32>,
    },
    /// Show the effective configuration
    Cfg,
}
