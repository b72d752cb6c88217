use err_derive::Error;

#[derive(Debug, Error)]
pub enum ZooError {
    #[error(display = "No configuration file at {}", path)]
    ConfigMissing { path: String },

    #[error(display = "Malformed line {} in configuration file: {:?}", line_no, line)]
    MalformedConfigLine { line_no: usize, line: String },

    #[error(display = "Bad configuration: {}", _0)]
    BadConfig(#[error(source)] serde::de::value::Error),

    #[error(display = "Cannot determine the home directory")]
    NoHomeDir,

    #[error(display = "IO error: {}", _0)]
    Io(#[error(source)] std::io::Error),
}

impl ZooError {
    pub fn is_config_missing(&self) -> bool {
        matches!(self, ZooError::ConfigMissing { .. })
    }
}

/// Checks whether an error chain bottoms out in [`ZooError::ConfigMissing`].
pub fn is_config_missing(e: &anyhow::Error) -> bool {
    e.chain()
        .filter_map(|e| e.downcast_ref::<ZooError>())
        .any(ZooError::is_config_missing)
}
