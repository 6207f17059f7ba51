use std::io::{BufRead, Write};

use lotto_engine::{LottoError, Session, LOTTO_MAX, LOTTO_MIN, SIZE};
use tracing::{info, warn};

use crate::config::Config;
use crate::input::{InputError, Prompter};
use crate::ui;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    Input = 1,
    Display,
    Sort,
    Check,
    Frequency,
    Exit,
}

impl TryFrom<i32> for MenuOption {
    type Error = i32;

    fn try_from(n: i32) -> Result<Self, Self::Error> {
        match n {
            1 => Ok(MenuOption::Input),
            2 => Ok(MenuOption::Display),
            3 => Ok(MenuOption::Sort),
            4 => Ok(MenuOption::Check),
            5 => Ok(MenuOption::Frequency),
            6 => Ok(MenuOption::Exit),
            other => Err(other),
        }
    }
}

/// Runs the interactive menu until the player exits or input ends.
pub fn run_session(
    session: &mut Session,
    cfg: &Config,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
) -> std::io::Result<()> {
    let mut prompter = Prompter::new(input);
    info!("session started");
    if cfg.banner {
        writeln!(out, "Welcome to the lotto game!")?;
    }

    loop {
        ui::print_menu(out)?;
        let option = match select_option(&mut prompter, out) {
            Ok(option) => option,
            Err(InputError::Eof) => {
                warn!("input closed at menu prompt");
                writeln!(out)?;
                break;
            }
            Err(InputError::Io(e)) => return Err(e),
        };
        writeln!(out)?;

        if option == MenuOption::Exit {
            break;
        }
        match dispatch(option, session, &mut prompter, out) {
            Ok(()) => {}
            Err(InputError::Eof) => {
                warn!("input closed while entering numbers");
                writeln!(out)?;
                break;
            }
            Err(InputError::Io(e)) => return Err(e),
        }
    }

    writeln!(out, "Thank you for playing.")?;
    info!(entries = session.entries(), "session ended");
    Ok(())
}

fn select_option(prompter: &mut Prompter<'_>, out: &mut dyn Write) -> Result<MenuOption, InputError> {
    loop {
        let choice = prompter.next_int()?;
        prompter.discard_line();
        if let Some(option) = choice.and_then(|n| MenuOption::try_from(n).ok()) {
            return Ok(option);
        }
        write!(out, "ERROR: Please select a valid menu option: ")?;
        out.flush()?;
    }
}

fn dispatch(
    option: MenuOption,
    session: &mut Session,
    prompter: &mut Prompter<'_>,
    out: &mut dyn Write,
) -> Result<(), InputError> {
    let res: Result<std::io::Result<()>, LottoError> = match option {
        MenuOption::Input => {
            writeln!(
                out,
                "Please enter your {} unique numbers (must be in the range {}-{})",
                SIZE, LOTTO_MIN, LOTTO_MAX
            )?;
            let numbers = prompter.collect_numbers(out)?;
            writeln!(out, "Numbers saved.")?;
            session.enter(numbers);
            Ok(Ok(()))
        }
        MenuOption::Display => session
            .numbers()
            .map(|numbers| ui::print_numbers(out, numbers)),
        MenuOption::Sort => session
            .sort_numbers()
            .map(|_| writeln!(out, "Numbers sorted.")),
        MenuOption::Check => session.check().map(|outcome| ui::print_outcome(out, &outcome)),
        MenuOption::Frequency => session
            .frequency()
            .map(|table| ui::print_frequency(out, table)),
        MenuOption::Exit => Ok(Ok(())),
    };

    match res {
        Ok(written) => written?,
        Err(e) => ui::write_error(out, &e.to_string())?,
    }
    Ok(())
}
