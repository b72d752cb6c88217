//! The persisted `key:value` configuration of the client, plus the handful of
//! well-known paths the client reads and writes.

use crate::ZooError;
use path_slash::PathExt;
use serde::{de::value::MapDeserializer, Deserialize};
use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

pub const CONFIG_FILE_NAME: &str = ".zoo_config";
pub const DEFAULT_AUTOGRADE_CMD: &str = "autograde --test";
/// Root of all class directories on the Zoo.
pub const CLASSES_DIR: &str = "/home/classes/";

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ZooConfig {
    pub net_id: String,
    /// e.g. `cs201`
    pub class_label: String,
    /// Autograder invocation, relative to the class' `bin` directory
    pub autograde_cmd: String,
}

impl ZooConfig {
    /// The default configuration written by `zoo config`.
    pub fn new(net_id: &str, class_label: &str) -> Self {
        ZooConfig {
            net_id: net_id.to_owned(),
            class_label: class_label.to_owned(),
            autograde_cmd: DEFAULT_AUTOGRADE_CMD.to_owned(),
        }
    }

    /// Parse the `key:value` file format. Blank lines are skipped, unknown
    /// keys are ignored.
    pub fn parse(text: &str) -> Result<Self, ZooError> {
        let mut entries = HashMap::new();
        for (i, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let (key, value) =
                line.split_once(':')
                    .ok_or_else(|| ZooError::MalformedConfigLine {
                        line_no: i + 1,
                        line: line.to_owned(),
                    })?;
            entries.insert(key.trim().to_owned(), value.trim().to_owned());
        }
        let de = MapDeserializer::<_, serde::de::value::Error>::new(entries.into_iter());
        let cfg = ZooConfig::deserialize(de)?;
        Ok(cfg)
    }

    pub fn to_file_string(&self) -> String {
        let entries = [
            ("net_id", &self.net_id),
            ("class_label", &self.class_label),
            ("autograde_cmd", &self.autograde_cmd),
        ];
        entries
            .iter()
            .map(|(k, v)| format!("{}:{}\n", k, v))
            .collect()
    }

    /// The class' own directory on the Zoo, e.g. `/home/classes/cs201`.
    pub fn class_dir(&self, classes_dir: &Path) -> PathBuf {
        classes_dir.join(&self.class_label)
    }

    pub fn class_bin_dir(&self, classes_dir: &Path) -> String {
        self.class_dir(classes_dir).join("bin").to_slash_lossy()
    }

    /// Resolve a Zoo path. Relative paths are taken against the class
    /// directory if `relative_to_class` is set; absolute paths are never
    /// rebased.
    pub fn resolve_remote_path(
        &self,
        zoo_path: &str,
        classes_dir: &Path,
        relative_to_class: bool,
    ) -> String {
        if relative_to_class {
            self.class_dir(classes_dir).join(zoo_path).to_slash_lossy()
        } else {
            zoo_path.to_owned()
        }
    }
}

/// Files and directories the client touches.
#[derive(Debug, Clone)]
pub struct ZooPaths {
    pub config_file: PathBuf,
    pub ssh_config_file: PathBuf,
    pub classes_dir: PathBuf,
}

impl ZooPaths {
    /// `~/.zoo_config` and `~/.ssh/config`, with optional overrides.
    pub fn resolve(
        config_file: Option<PathBuf>,
        ssh_config_file: Option<PathBuf>,
    ) -> Result<Self, ZooError> {
        let home = match (&config_file, &ssh_config_file) {
            (Some(_), Some(_)) => None,
            _ => Some(dirs::home_dir().ok_or(ZooError::NoHomeDir)?),
        };
        let under_home = |rel: &[&str]| {
            let mut p = home.clone().unwrap_or_default();
            p.extend(rel);
            p
        };
        Ok(ZooPaths {
            config_file: config_file.unwrap_or_else(|| under_home(&[CONFIG_FILE_NAME])),
            ssh_config_file: ssh_config_file.unwrap_or_else(|| under_home(&[".ssh", "config"])),
            classes_dir: PathBuf::from(CLASSES_DIR),
        })
    }
}

/// Read the configuration file at `path`.
pub async fn load(path: &Path) -> Result<ZooConfig, ZooError> {
    let text = match tokio::fs::read_to_string(path).await {
        Ok(t) => t,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ZooError::ConfigMissing {
                path: path.to_string_lossy().into_owned(),
            })
        }
        Err(e) => return Err(e.into()),
    };
    tracing::debug!(path = %path.display(), "Loaded configuration");
    ZooConfig::parse(&text)
}

/// Overwrite the configuration file with the default configuration for
/// `net_id` and `class_label`.
pub async fn save(path: &Path, net_id: &str, class_label: &str) -> Result<ZooConfig, ZooError> {
    let cfg = ZooConfig::new(net_id, class_label);
    tokio::fs::write(path, cfg.to_file_string()).await?;
    tracing::debug!(path = %path.display(), "Wrote configuration");
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_env_log::test;

    #[test(tokio::test)]
    async fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        save(&path, "abc123", "cs201").await.unwrap();

        let cfg = load(&path).await.unwrap();
        assert_eq!(cfg.net_id, "abc123");
        assert_eq!(cfg.class_label, "cs201");
        assert_eq!(cfg.autograde_cmd, "autograde --test");
    }

    #[test(tokio::test)]
    async fn save_overwrites_wholesale() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "net_id:old\nclass_label:cs100\nautograde_cmd:x\nextra:1\n").unwrap();
        save(&path, "new", "cs201").await.unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(!text.contains("extra"));
        assert_eq!(load(&path).await.unwrap(), ZooConfig::new("new", "cs201"));
    }

    #[test(tokio::test)]
    async fn missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let res = load(&dir.path().join("nope")).await;
        assert!(matches!(res, Err(ZooError::ConfigMissing { .. })));
    }

    #[test]
    fn parse_trims_and_splits_on_first_colon() {
        let cfg = ZooConfig::parse(
            "\n net_id : abc123\nclass_label:cs201\nautograde_cmd: autograde --test:fast\n\n",
        )
        .unwrap();
        assert_eq!(cfg.net_id, "abc123");
        assert_eq!(cfg.autograde_cmd, "autograde --test:fast");
    }

    #[test]
    fn parse_rejects_line_without_colon() {
        let res = ZooConfig::parse("net_id:abc\nclass_label cs201\n");
        match res {
            Err(ZooError::MalformedConfigLine { line_no, .. }) => assert_eq!(line_no, 2),
            other => panic!("expected malformed line error, got {:?}", other),
        }
    }

    #[test]
    fn parse_rejects_missing_key() {
        let res = ZooConfig::parse("net_id:abc\nclass_label:cs201\n");
        assert!(matches!(res, Err(ZooError::BadConfig(_))));
    }

    #[test]
    fn resolve_relative_to_class() {
        let cfg = ZooConfig::new("abc123", "cs201");
        let classes = Path::new(CLASSES_DIR);
        assert_eq!(
            cfg.resolve_remote_path("hw3/sol.py", classes, true),
            "/home/classes/cs201/hw3/sol.py"
        );
        assert_eq!(
            cfg.resolve_remote_path("hw3/sol.py", classes, false),
            "hw3/sol.py"
        );
        assert_eq!(
            cfg.resolve_remote_path("/tmp/sol.py", classes, true),
            "/tmp/sol.py"
        );
        assert_eq!(cfg.class_bin_dir(classes), "/home/classes/cs201/bin");
    }
}
