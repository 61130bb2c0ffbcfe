//! Run command.
//!
//! Executes a command with resolved secrets injected as environment variables.

use crate::core::domain::EnvAssignment;
use crate::error::{Error, Result};
use tracing::debug;
use zeroize::Zeroizing;

/// Run `command` with `assignments` added to the inherited environment.
///
/// Later assignments with the same name win. Returns the child's exit code.
pub fn run_with_secrets(command: &[String], assignments: Vec<EnvAssignment>) -> Result<i32> {
    let (program, args) = command
        .split_first()
        .ok_or_else(|| Error::Other("no command specified".to_string()))?;

    let mut cmd = std::process::Command::new(program);
    cmd.args(args);

    // Zeroizing wipes each value once it has been handed to the command
    for assignment in assignments {
        let (name, value) = assignment.into_pair();
        let value = Zeroizing::new(value);
        cmd.env(name, value.as_str());
    }

    debug!(program = %program, args = args.len(), "spawning command");
    let status = cmd.status()?;

    // Terminated by a signal: no code available, report 1
    Ok(status.code().unwrap_or(1))
}
