use super::{Client, UploadRequestBuilder};
use crate::{
    is_config_missing,
    opt::{SubCmd, UpSubCmd},
};
use anyhow::Result;
use std::io::Write;

pub const SETUP_HINT: &str =
    "Run 'zoo config net_id class_label' first to set up configuration files.";

impl Client {
    /// Run one verb of the command line.
    ///
    /// Every verb, `config` included, reads the configuration file back before
    /// doing anything else.
    pub async fn run(&self, cmd: SubCmd, out: &mut dyn Write) -> Result<()> {
        if let SubCmd::Config(c) = &cmd {
            self.setup(&c.net_id, &c.class_label, out).await?;
        }

        let cfg = self.load_config().await?;

        match cmd {
            SubCmd::Config(_) => {}
            SubCmd::Up(c) => {
                let req = upload_request(c)?;
                self.upload(&cfg, &req, out).await?;
            }
            SubCmd::Dn(c) => {
                self.download(&cfg, &c.zoo_path, &c.local_dest, c.class_relative, out)
                    .await?;
            }
        }
        Ok(())
    }
}

fn upload_request(cmd: UpSubCmd) -> Result<super::UploadRequest> {
    if matches!(&cmd.prob_nums, Some(p) if p.is_empty()) {
        tracing::warn!("--test given without problem numbers, skipping autograde");
    }
    UploadRequestBuilder::default()
        .hw_num(cmd.hw_num)
        .local_file(cmd.local_file)
        .zoo_dest(cmd.zoo_dest)
        .prob_nums(cmd.prob_nums.unwrap_or_default())
        .verbose(cmd.verbose)
        .submit(cmd.submit)
        .build()
        .map_err(|e| anyhow::anyhow!("{}", e))
}

/// Report a failed verb and pick the exit status. A missing configuration
/// file only prints the setup hint and still exits with 0.
pub fn report_failure(e: &anyhow::Error, out: &mut dyn Write, err: &mut dyn Write) -> i32 {
    if is_config_missing(e) {
        tracing::debug!("{:#}", e);
        let _ = writeln!(out, "{}", SETUP_HINT);
        0
    } else {
        let _ = writeln!(err, "Error: {:?}", e);
        1
    }
}
