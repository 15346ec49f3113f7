//! External-program oracle.
//!
//! Lets any tool that can test a password (a PDF or archive utility, a
//! login probe script) act as the verifier. The program is run once per
//! candidate; its exit status is the verdict.

use crate::error::{Result, SearchError};
use crate::search::{Verdict, Verifier};
use std::process::{Command, Stdio};

/// Replaced by the candidate in every argument.
pub const CANDIDATE_PLACEHOLDER: &str = "{}";

/// Environment variable carrying the candidate to the program.
pub const CANDIDATE_ENV: &str = "KEYSWEEP_CANDIDATE";

/// Runs `program args...` per candidate.
///
/// Exit status 0 accepts, any other status rejects, and a failure to launch
/// or a signal-terminated child is reported as a verifier error.
#[derive(Debug, Clone)]
pub struct CommandVerifier {
    program: String,
    args: Vec<String>,
}

impl CommandVerifier {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Result<Self> {
        let program = program.into();
        if program.trim().is_empty() {
            return Err(SearchError::InvalidConfig(
                "verifier command must name a program".to_string(),
            ));
        }
        Ok(Self { program, args })
    }

    /// Build from a full argv, program first.
    pub fn from_argv(argv: &[String]) -> Result<Self> {
        match argv.split_first() {
            Some((program, args)) => Self::new(program.clone(), args.to_vec()),
            None => Err(SearchError::InvalidConfig(
                "verifier command must name a program".to_string(),
            )),
        }
    }

    fn command_for(&self, candidate: &str) -> Command {
        let mut command = Command::new(&self.program);
        command
            .args(
                self.args
                    .iter()
                    .map(|arg| arg.replace(CANDIDATE_PLACEHOLDER, candidate)),
            )
            .env(CANDIDATE_ENV, candidate)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        command
    }
}

impl Verifier for CommandVerifier {
    fn verify(&self, candidate: &str) -> Verdict {
        match self.command_for(candidate).status() {
            Ok(status) if status.success() => Verdict::Accepted,
            Ok(status) if status.code().is_some() => Verdict::Rejected,
            Ok(status) => Verdict::Error(format!(
                "{} terminated by signal ({})",
                self.program, status
            )),
            Err(e) => Verdict::Error(format!("failed to run {}: {}", self.program, e)),
        }
    }
}
