use thiserror::Error;

/// Errors raised by the pure transformation layer.
///
/// Record mapping and subdivision planning are total; only rule parsing and
/// configuration decoding can fail.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("[{rule}] is wrong sheet name and subdivide rule definition")]
    MalformedSheetNameRule { rule: String },

    #[error("invalid sheet configuration: {0}")]
    Config(#[from] serde_yaml::Error),
}
