use super::{scp_remote, strip_host_prefix, Client};
use crate::{config::ZooConfig, runner::Shell};
use anyhow::Result;
use std::io::Write;

impl Client {
    /// `zoo dn <zoo_path> <local_dest> [-c]`: copy a file off the Zoo.
    ///
    /// With `relative_to_class`, `zoo_path` is taken relative to
    /// `/home/classes/<class_label>/`. Returns the resolved remote path.
    pub async fn download(
        &self,
        cfg: &ZooConfig,
        zoo_path: &str,
        local_dest: &str,
        relative_to_class: bool,
        out: &mut dyn Write,
    ) -> Result<String> {
        let path = cfg.resolve_remote_path(
            strip_host_prefix(zoo_path),
            &self.paths.classes_dir,
            relative_to_class,
        );
        let cmd = format!("scp {} {}", scp_remote(&path), local_dest);
        let res = self.executor.run(&cmd, Shell::Local).await?;
        write!(out, "{}", res)?;
        Ok(path)
    }
}
