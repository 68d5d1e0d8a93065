use anyhow::{Context, Result, bail};
use std::process::Command;

/// Result of one external command invocation.
///
/// Stdout is buffered in memory, not streamed; the publisher only ever
/// needs it for the success predicate below.
#[derive(Debug)]
pub struct CommandOutput {
    pub code: i32,
    pub stdout: String,
}

impl CommandOutput {
    /// Whether the invocation counts as successful.
    ///
    /// A zero exit code always does. A non-zero exit code is also accepted
    /// when stdout contains `nothing to commit`, so that a no-op
    /// `git commit` on an unchanged README does not fail the run.
    pub fn is_success(&self) -> bool {
        self.code == 0 || self.stdout.contains("nothing to commit")
    }
}

/// Run `cmd` with `args` in the current directory and capture stdout.
///
/// # Errors
/// Returns an error if the process cannot be spawned (e.g. the binary is
/// not on `PATH`). A non-zero exit is not an error at this level; callers
/// decide through [`CommandOutput::is_success`] or use [`run_checked`].
pub fn run(cmd: &str, args: &[&str]) -> Result<CommandOutput> {
    let out = Command::new(cmd)
        .args(args)
        .output()
        .with_context(|| format!("failed to spawn {}", cmd))?;
    Ok(CommandOutput {
        // Terminated by signal leaves no code; treat as a failure code.
        code: out.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&out.stdout).into_owned(),
    })
}

/// Run a command and fail unless [`CommandOutput::is_success`] holds.
pub fn run_checked(cmd: &str, args: &[&str]) -> Result<CommandOutput> {
    let out = run(cmd, args)?;
    if !out.is_success() {
        bail!("{} {} exited with status code {}", cmd, args.join(" "), out.code);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_exit_is_success() {
        let out = run("sh", &["-c", "echo hello"]).unwrap();
        assert_eq!(out.code, 0);
        assert!(out.is_success());
        assert_eq!(out.stdout.trim(), "hello");
    }

    #[test]
    fn nonzero_exit_is_failure() {
        let out = run("sh", &["-c", "exit 3"]).unwrap();
        assert_eq!(out.code, 3);
        assert!(!out.is_success());
        assert!(run_checked("sh", &["-c", "exit 3"]).is_err());
    }

    #[test]
    fn nothing_to_commit_overrides_nonzero_exit() {
        let out = run_checked(
            "sh",
            &["-c", "echo 'nothing to commit, working tree clean'; exit 1"],
        )
        .unwrap();
        assert_eq!(out.code, 1);
        assert!(out.is_success());
    }

    #[test]
    fn missing_binary_is_an_error() {
        assert!(run("definitely-not-a-real-binary", &[]).is_err());
    }
}
