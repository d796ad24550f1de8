use std::process::{Command, Stdio};

use crate::hooks::HookContext;
use crate::ui;

/// Runs user-configured hook commands
pub struct HookExecutor;

impl HookExecutor {
    /// Run a hook command through the platform shell
    ///
    /// The command is echoed first. Its standard output is captured and
    /// displayed, standard error passes straight through. Environment
    /// variables are set from the context.
    ///
    /// A dry run only echoes the command and reports success.
    ///
    /// # Arguments
    /// * `command` - Shell command line (e.g., "make test")
    /// * `context` - Hook context with environment variables
    /// * `dry_run` - Skip execution
    ///
    /// # Returns
    /// * `true` if the command exited with code 0
    /// * `false` if it could not be started or exited with any other code
    pub fn run(command: &str, context: &HookContext, dry_run: bool) -> bool {
        ui::display_hook(context.hook_type.name(), command, dry_run);

        if dry_run {
            return true;
        }

        let mut cmd = shell_command(command);
        cmd.envs(context.to_env_vars())
            .stdin(Stdio::inherit())
            .stderr(Stdio::inherit());

        let output = match cmd.output() {
            Ok(output) => output,
            Err(e) => {
                tracing::warn!(command, error = %e, "failed to start hook");
                return false;
            }
        };

        let stdout = String::from_utf8_lossy(&output.stdout);
        if !stdout.is_empty() {
            ui::display_hook_output(&stdout);
        }

        tracing::debug!(
            command,
            hook = context.hook_type.name(),
            code = output.status.code().unwrap_or(-1),
            "hook finished"
        );

        output.status.success()
    }
}

#[cfg(unix)]
fn shell_command(command: &str) -> Command {
    let mut cmd = Command::new("sh");
    cmd.arg("-c").arg(command);
    cmd
}

#[cfg(windows)]
fn shell_command(command: &str) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.arg("/C").arg(command);
    cmd
}
