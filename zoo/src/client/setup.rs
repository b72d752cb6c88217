use super::Client;
use crate::{config, ssh_config};
use anyhow::{Context, Result};
use std::io::Write;

impl Client {
    /// `zoo config <net_id> <class_label>`: overwrite the configuration file,
    /// then offer to add the Zoo host to the SSH config.
    ///
    /// Declining the SSH prompts is not an error; the configuration file has
    /// been written by then either way.
    pub async fn setup(
        &self,
        net_id: &str,
        class_label: &str,
        out: &mut dyn Write,
    ) -> Result<ssh_config::InstallOutcome> {
        let path = &self.paths.config_file;
        config::save(path, net_id, class_label)
            .await
            .with_context(|| format!("writing {}", path.display()))?;
        tracing::info!(path = %path.display(), %net_id, %class_label, "Configuration saved");

        ssh_config::install_host_entry(
            &self.paths.ssh_config_file,
            net_id,
            self.confirm.as_ref(),
            out,
        )
        .await
    }
}
