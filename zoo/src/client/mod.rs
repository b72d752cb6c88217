//! The `config`, `up` and `dn` verbs, and [`Client::run`] which dispatches
//! between them.
//!
//! A [`Client`] owns the executor and prompt it talks through. All user-facing
//! text goes to the writer handed to each verb, so the verbs can be driven and
//! checked without a terminal.

mod dispatch;
mod dn;
mod setup;
mod up;

pub use self::dispatch::{report_failure, SETUP_HINT};
pub use self::up::{UploadOutcome, UploadRequest, UploadRequestBuilder};
use crate::{
    config::{self, ZooConfig, ZooPaths},
    prompt::Confirm,
    runner::RemoteExecutor,
    ssh_config::ZOO_HOST_ALIAS,
};
use anyhow::{Context, Result};
use std::sync::Arc;

pub struct Client {
    paths: ZooPaths,
    executor: Arc<dyn RemoteExecutor>,
    confirm: Arc<dyn Confirm>,
}

impl Client {
    pub fn new(
        paths: ZooPaths,
        executor: Arc<dyn RemoteExecutor>,
        confirm: Arc<dyn Confirm>,
    ) -> Self {
        tracing::debug!(executor = %executor.name(), "Client created");
        Client {
            paths,
            executor,
            confirm,
        }
    }

    pub fn paths(&self) -> &ZooPaths {
        &self.paths
    }

    /// Read the configuration written by `zoo config`.
    pub async fn load_config(&self) -> Result<ZooConfig> {
        let cfg = config::load(&self.paths.config_file)
            .await
            .with_context(|| format!("loading {}", self.paths.config_file.display()))?;
        tracing::debug!(net_id = %cfg.net_id, class = %cfg.class_label, "Configuration loaded");
        Ok(cfg)
    }
}

/// `zoo:<path>`, the `scp` spelling of a path on the Zoo.
fn scp_remote(path: &str) -> String {
    format!("{}:{}", ZOO_HOST_ALIAS, path)
}

/// Drop a leading `zoo:` so the path can be used inside a remote shell too.
fn strip_host_prefix(path: &str) -> &str {
    path.strip_prefix(ZOO_HOST_ALIAS)
        .and_then(|p| p.strip_prefix(':'))
        .unwrap_or(path)
}
