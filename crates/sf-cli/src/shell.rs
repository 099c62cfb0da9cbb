//! Interactive prompt loop
//!
//! Reads player input line by line and writes game text. Generic over the
//! reader and writer so whole sessions can be scripted in tests.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use log::debug;
use rand::Rng;

use sf_engine::{
    RoundOutcome, SlotMachine, SpinOutcome, ValidationError, format_lines, format_stats, is_quit,
    parse_bet, parse_deposit, parse_lines, render_grid,
};

fn deposit_message(err: &ValidationError) -> String {
    match err {
        ValidationError::Empty | ValidationError::NotANumber => "Please enter a number.".into(),
        ValidationError::NotPositive => "Amount must be greater than 0.".into(),
        ValidationError::OutOfRange { .. } => "Amount is too large.".into(),
    }
}

fn lines_message(err: &ValidationError) -> String {
    match err {
        ValidationError::OutOfRange { .. } | ValidationError::NotPositive => {
            "Enter a valid number of lines.".into()
        }
        _ => "Please enter a number.".into(),
    }
}

fn bet_message(err: &ValidationError) -> String {
    match err {
        ValidationError::OutOfRange { min, max } => format!("Amount must be between ${min} - ${max}."),
        ValidationError::NotPositive => "Amount must be greater than 0.".into(),
        _ => "Please enter a number.".into(),
    }
}

pub struct Shell<I, O, R> {
    input: I,
    output: O,
    machine: SlotMachine<R>,
    quit_token: String,
}

impl<I: BufRead, O: Write, R: Rng> Shell<I, O, R> {
    pub fn new(input: I, output: O, machine: SlotMachine<R>, quit_token: impl Into<String>) -> Self {
        Self {
            input,
            output,
            machine,
            quit_token: quit_token.into(),
        }
    }

    /// Run a whole session. Returns the final balance, or `None` when input
    /// ended before any deposit was made.
    pub fn run(&mut self) -> Result<Option<u64>> {
        let Some(deposit) = self.prompt_until(
            "What would you like to deposit? $ ",
            parse_deposit,
            deposit_message,
        )?
        else {
            return Ok(None);
        };
        self.machine.deposit(deposit)?;

        loop {
            writeln!(self.output, "Current balance is ${}", self.machine.balance())?;
            let prompt = format!("Press enter to play ({} to quit).", self.quit_token);
            let Some(answer) = self.read_line(&prompt)? else {
                break;
            };
            if is_quit(&answer, &self.quit_token) {
                break;
            }
            if !self.play_round()? {
                break;
            }
        }

        let balance = self.machine.quit()?;
        writeln!(self.output, "You left with ${balance}")?;
        writeln!(self.output, "{}", format_stats(self.machine.stats()))?;
        self.output.flush()?;
        Ok(Some(balance))
    }

    /// One betting round. Returns `false` when input ran out mid-round.
    fn play_round(&mut self) -> Result<bool> {
        let limits = self.machine.config().limits;

        let lines_prompt = format!(
            "Enter the number of lines to bet on (1-{})? ",
            limits.max_lines
        );
        let Some(lines) =
            self.prompt_until(&lines_prompt, |raw| parse_lines(raw, &limits), lines_message)?
        else {
            return Ok(false);
        };
        let Some(per_line) = self.prompt_until(
            "What would you like to bet on each line? $",
            |raw| parse_bet(raw, &limits),
            bet_message,
        )?
        else {
            return Ok(false);
        };

        let bet = self.machine.bet(lines, per_line)?;
        match self.machine.play_round(bet)? {
            RoundOutcome::InsufficientFunds { balance, .. } => {
                writeln!(
                    self.output,
                    "Insufficient funds! Your current balance is ${balance}."
                )?;
            }
            RoundOutcome::Resolved(spin) => self.show_spin(&spin)?,
        }
        Ok(true)
    }

    fn show_spin(&mut self, spin: &SpinOutcome) -> Result<()> {
        writeln!(
            self.output,
            "You are betting ${} on {} lines. Total bet: ${}",
            spin.bet_per_line, spin.lines, spin.total_bet
        )?;
        let symbols = self.machine.paytable().symbols();
        writeln!(self.output, "{}", render_grid(&spin.grid, symbols))?;
        writeln!(self.output, "You won ${}.", spin.winnings())?;

        let lines = spin.winning_lines();
        if lines.is_empty() {
            writeln!(self.output, "No winning lines this time.")?;
        } else {
            writeln!(self.output, "You won on lines: {}", format_lines(&lines))?;
        }
        Ok(())
    }

    /// Ask until `parse` accepts the answer. `None` on end of input.
    fn prompt_until<T>(
        &mut self,
        prompt: &str,
        parse: impl Fn(&str) -> Result<T, ValidationError>,
        message: fn(&ValidationError) -> String,
    ) -> Result<Option<T>> {
        loop {
            let Some(raw) = self.read_line(prompt)? else {
                return Ok(None);
            };
            match parse(&raw) {
                Ok(value) => return Ok(Some(value)),
                Err(err) => {
                    debug!("Rejected input {:?}: {err}", raw.trim());
                    writeln!(self.output, "{}", message(&err))?;
                }
            }
        }
    }

    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        // Raw bytes: a line that is not UTF-8 is bad input, not a broken stream
        let mut buf = Vec::new();
        let read = self
            .input
            .read_until(b'\n', &mut buf)
            .context("Failed to read player input")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }
}
