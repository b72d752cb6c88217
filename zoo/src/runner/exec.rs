use std::{borrow::Cow, process::Stdio};

use anyhow::Context;
use async_trait::async_trait;
use tokio::{io::AsyncWriteExt, process::Command};

use super::model::{RemoteExecutor, Shell};
use crate::ssh_config::ZOO_HOST_ALIAS;

/// Pipes scripts into `bash`, or into `ssh zoo bash` for [`Shell::Remote`].
#[derive(Debug, Clone)]
pub struct ShellExecutor {
    host: String,
}

impl ShellExecutor {
    pub fn new(host: impl Into<String>) -> Self {
        ShellExecutor { host: host.into() }
    }

    fn session(&self, shell: Shell) -> Command {
        match shell {
            Shell::Remote => {
                let mut cmd = Command::new("ssh");
                cmd.arg(&self.host).arg("bash");
                cmd
            }
            Shell::Local => Command::new("bash"),
        }
    }
}

impl Default for ShellExecutor {
    fn default() -> Self {
        ShellExecutor::new(ZOO_HOST_ALIAS)
    }
}

#[async_trait]
impl RemoteExecutor for ShellExecutor {
    fn name(&self) -> Cow<'static, str> {
        format!("bash via {}", self.host).into()
    }

    async fn run(&self, command: &str, shell: Shell) -> anyhow::Result<String> {
        tracing::debug!(?shell, %command, "Running command");
        self.run_session(self.session(shell), command).await
    }
}

impl ShellExecutor {
    /// Feed `command` to an already configured shell and collect its stdout.
    async fn run_session(&self, mut session: Command, command: &str) -> anyhow::Result<String> {
        let mut child = session
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .context("spawning shell")?;

        // Dropping stdin after writing closes the pipe so the shell sees EOF.
        if let Some(mut stdin) = child.stdin.take() {
            let script = format!("{}\n", command);
            match stdin.write_all(script.as_bytes()).await {
                Ok(()) => {}
                // The shell quit without reading everything; its stdout is
                // still collected below.
                Err(e) if e.kind() == std::io::ErrorKind::BrokenPipe => {
                    tracing::debug!("Shell closed its stdin early");
                }
                Err(e) => return Err(e.into()),
            }
        }

        let output = child.wait_with_output().await?;
        if !output.status.success() {
            tracing::warn!(status = ?output.status, %command, "Command exited unsuccessfully");
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_env_log::test;

    #[test(tokio::test)]
    async fn local_shell_captures_stdout() {
        let exec = ShellExecutor::default();
        let out = exec
            .run("echo hello && echo world", Shell::Local)
            .await
            .unwrap();
        assert_eq!(out, "hello\nworld\n");
    }

    #[test(tokio::test)]
    async fn shell_exiting_before_reading_stdin() {
        let exec = ShellExecutor::default();
        // `bash -c` never reads the piped script; a large one overflows the
        // pipe buffer after the child is gone.
        let script = "echo x".repeat(200_000);
        let mut cmd = Command::new("bash");
        cmd.arg("-c").arg("echo early");
        let out = exec.run_session(cmd, &script).await.unwrap();
        assert_eq!(out, "early\n");
    }

    #[test(tokio::test)]
    async fn failure_is_not_an_error() {
        let exec = ShellExecutor::default();
        let out = exec.run("echo partial; false", Shell::Local).await.unwrap();
        assert_eq!(out, "partial\n");
    }
}
