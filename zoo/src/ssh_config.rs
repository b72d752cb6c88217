//! Installs the `zoo` host alias into the user's SSH client configuration.

use crate::prompt::Confirm;
use anyhow::{Context, Result};
use std::{io::Write, path::Path};
use tokio::io::AsyncWriteExt;

pub const ZOO_HOST_ALIAS: &str = "zoo";
pub const ZOO_HOSTNAME: &str = "node.zoo.cs.yale.edu";
pub const ZOO_PORT: u16 = 22;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallOutcome {
    /// The user answered no to one of the prompts. Nothing was written.
    Declined,
    AlreadyPresent,
    Appended,
}

/// The `Host` block for `net_id`.
pub fn host_entry(net_id: &str) -> String {
    format!(
        "Host {}\n\tHostName {}\n\tUser {}\n\tPort {}",
        ZOO_HOST_ALIAS, ZOO_HOSTNAME, net_id, ZOO_PORT
    )
}

/// Append the Zoo host entry to the SSH config at `path`, asking before
/// creating or modifying the file. Running this twice never duplicates the
/// entry.
pub async fn install_host_entry(
    path: &Path,
    net_id: &str,
    confirm: &dyn Confirm,
    out: &mut dyn Write,
) -> Result<InstallOutcome> {
    let entry = host_entry(net_id);

    let existing = match tokio::fs::read_to_string(path).await {
        Ok(s) => Some(s),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
        Err(e) => {
            return Err(e).with_context(|| format!("reading {}", path.display()));
        }
    };

    match &existing {
        None => {
            let prompt = format!(
                "No SSH configuration file exists at {}. Create a new one?",
                path.display()
            );
            if !confirm.confirm(&prompt) {
                writeln!(out, "Exiting.")?;
                return Ok(InstallOutcome::Declined);
            }
        }
        Some(contents) if contents.contains(&entry) => {
            writeln!(
                out,
                "SSH configuration file at {} already contains Zoo entry.",
                path.display()
            )?;
            return Ok(InstallOutcome::AlreadyPresent);
        }
        Some(_) => {}
    }

    writeln!(out, "\n{}\n", entry)?;
    let prompt = format!("Append the above entry to file at {}?", path.display());
    if !confirm.confirm(&prompt) {
        writeln!(out, "Exiting.")?;
        return Ok(InstallOutcome::Declined);
    }

    if existing.is_none() {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    let mut file = tokio::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .await
        .with_context(|| format!("opening {}", path.display()))?;
    file.write_all(format!("\n{}\n", entry).as_bytes()).await?;
    file.flush().await?;
    tracing::info!(path = %path.display(), "Appended Zoo host entry");

    Ok(InstallOutcome::Appended)
}
