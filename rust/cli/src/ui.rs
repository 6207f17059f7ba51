use std::io::Write;

use lotto_engine::{FrequencyTable, Outcome, PlayerNumbers};

pub fn write_error(w: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(w, "ERROR: {}", msg)
}

pub fn print_menu(w: &mut dyn Write) -> std::io::Result<()> {
    writeln!(w)?;
    writeln!(w, "\t-----------------------------------")?;
    for line in [
        "1. Input numbers",
        "2. Display numbers",
        "3. Sort numbers",
        "4. Check numbers",
        "5. Display frequency of numbers",
        "6. Exit Program",
    ] {
        writeln!(w, "\t| {:<31} |", line)?;
    }
    writeln!(w, "\t-----------------------------------")?;
    write!(w, "\nPlease select an option: ")?;
    w.flush()
}

pub fn print_numbers(w: &mut dyn Write, numbers: &PlayerNumbers) -> std::io::Result<()> {
    writeln!(w, "Your numbers: {}", numbers)
}

pub fn print_frequency(w: &mut dyn Write, table: &FrequencyTable) -> std::io::Result<()> {
    for (value, count) in table.report() {
        writeln!(w, "The number {} has been chosen {} time(s)", value, count)?;
    }
    Ok(())
}

pub fn print_outcome(w: &mut dyn Write, outcome: &Outcome) -> std::io::Result<()> {
    for line in outcome.narration() {
        writeln!(w, "{}", line)?;
    }
    Ok(())
}
