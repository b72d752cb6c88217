use async_trait::async_trait;

/// Where a command gets executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shell {
    /// `bash` on this machine
    Local,
    /// `bash` on the Zoo, over `ssh`
    Remote,
}

/// Something that can run a shell script and hand back what it printed.
///
/// Only `stdout` is captured. The exit status is not reported.
#[async_trait]
pub trait RemoteExecutor: Sync + Send {
    /// The name of this executor, used in logs
    fn name(&self) -> std::borrow::Cow<'static, str>;

    async fn run(&self, command: &str, shell: Shell) -> anyhow::Result<String>;
}
