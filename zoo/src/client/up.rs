use super::{scp_remote, strip_host_prefix, Client};
use crate::{config::ZooConfig, runner::Shell, tester::AutogradeReport};
use anyhow::Result;
use derive_builder::Builder;
use itertools::Itertools;
use std::{io::Write, path::Path};

/// Arguments of `zoo up`.
#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct UploadRequest {
    pub hw_num: u32,
    /// Source file on this machine
    pub local_file: String,
    /// Destination directory on the Zoo
    pub zoo_dest: String,
    /// Problems to autograde after uploading. Empty means no autograding.
    #[builder(default)]
    pub prob_nums: Vec<u32>,
    /// Print the raw autograder output as well
    #[builder(default)]
    pub verbose: bool,
    #[builder(default)]
    pub submit: bool,
}

impl UploadRequest {
    fn problems_label(&self) -> String {
        format!(
            "homework {} problems {}",
            self.hw_num,
            self.prob_nums.iter().join(", ")
        )
    }

    /// Name of the uploaded file once it lands in `zoo_dest`.
    fn zoo_file_name(&self) -> &str {
        Path::new(&self.local_file)
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(&self.local_file)
    }
}

#[derive(Debug, Clone)]
pub struct UploadOutcome {
    /// Present if autograding was requested.
    pub report: Option<AutogradeReport>,
    /// Output of `submit`/`check`, present if the assignment was submitted.
    pub submit_output: Option<String>,
}

impl Client {
    /// `zoo up`: upload, optionally autograde, optionally submit.
    pub async fn upload(
        &self,
        cfg: &ZooConfig,
        req: &UploadRequest,
        out: &mut dyn Write,
    ) -> Result<UploadOutcome> {
        let zoo_dest = strip_host_prefix(&req.zoo_dest);
        let class_bins = cfg.class_bin_dir(&self.paths.classes_dir);

        let copy_cmd = format!("scp {} {}", req.local_file, scp_remote(zoo_dest));
        self.executor.run(&copy_cmd, Shell::Local).await?;

        let report = if req.prob_nums.is_empty() {
            None
        } else {
            Some(self.autograde(cfg, req, zoo_dest, &class_bins, out).await?)
        };

        let mut outcome = UploadOutcome {
            report,
            submit_output: None,
        };
        if !req.submit {
            return Ok(outcome);
        }

        let question = match &outcome.report {
            Some(r) if r.wrong() > 0 => Some(format!(
                "Autograde reported {} wrong responses. Go ahead with submit?",
                r.wrong()
            )),
            Some(_) => None,
            None => Some("Autograde was not run. Go ahead with submit?".to_owned()),
        };
        if let Some(question) = question {
            if !self.confirm.confirm(&question) {
                tracing::info!("Submit declined");
                return Ok(outcome);
            }
        }

        let submit_cmd = format!(
            "cd {} && {}/submit {} {} && check {}",
            zoo_dest,
            class_bins,
            req.hw_num,
            req.zoo_file_name(),
            req.hw_num
        );
        let submit_out = self.executor.run(&submit_cmd, Shell::Remote).await?;
        writeln!(out, "{}", submit_out)?;
        outcome.submit_output = Some(submit_out);

        Ok(outcome)
    }

    /// Run every requested problem in one remote shell, then print the
    /// summary and whatever failed.
    async fn autograde(
        &self,
        cfg: &ZooConfig,
        req: &UploadRequest,
        zoo_dest: &str,
        class_bins: &str,
        out: &mut dyn Write,
    ) -> Result<AutogradeReport> {
        let cmd = std::iter::once(format!("cd {}", zoo_dest))
            .chain(req.prob_nums.iter().map(|p| {
                format!("{}/{} {} {}", class_bins, cfg.autograde_cmd, req.hw_num, p)
            }))
            .join(" && ");
        let raw = self.executor.run(&cmd, Shell::Remote).await?;

        let label = req.problems_label();
        if req.verbose {
            writeln!(out, "Autograde output for {}", label)?;
            writeln!(out, "{}", raw)?;
        }

        let report = AutogradeReport::parse(&raw);
        writeln!(out, "Autograde summary for {}", label)?;
        writeln!(out, "{}", report.summary())?;

        if report.wrong() > 0 {
            writeln!(out, "Details for wrong answers\n")?;
            for seg in report.failing_segments() {
                writeln!(out, "{}\n", seg.join("\n"))?;
            }
        }
        Ok(report)
    }
}
