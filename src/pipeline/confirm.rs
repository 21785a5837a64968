//! Interactive confirmation before starting a run.
use dialoguer::Confirm as Prompt;
use is_terminal::IsTerminal;
use log::info;

use crate::error::Error;

/// Asks a yes/no question.
pub trait Confirm {
    fn confirm(&self, question: &str) -> Result<bool, Error>;
}

impl<T: Confirm + ?Sized> Confirm for &T {
    fn confirm(&self, question: &str) -> Result<bool, Error> {
        (**self).confirm(question)
    }
}

/// Asks on the terminal, defaulting to no.
///
/// Without a terminal on stdin there is nobody to answer, and the question is declined.
/// Use auto start for unattended runs.
#[derive(Debug, Default)]
pub struct StdinConfirm;

impl Confirm for StdinConfirm {
    fn confirm(&self, question: &str) -> Result<bool, Error> {
        if !std::io::stdin().is_terminal() {
            info!("stdin is not a terminal, declining \"{}\"", question);
            return Ok(false);
        }

        let answer = Prompt::new()
            .with_prompt(question)
            .default(false)
            .interact_opt()?;

        // escape/q gives None
        Ok(answer.unwrap_or(false))
    }
}
