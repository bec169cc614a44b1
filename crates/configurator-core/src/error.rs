use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("duplicate option label {0:?}")]
    DuplicateLabel(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid stream configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("failed to encode {event_type} message: {source}")]
    Encode {
        event_type: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Rejected panel selections. The DOM control never produces these; they come
/// from free-form input such as the native driver's command line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectError {
    #[error("{control} has no option at index {index} (catalog has {len})")]
    OutOfRange {
        control: &'static str,
        index: usize,
        len: usize,
    },
    #[error("{control} has no option labeled {label:?}")]
    UnknownLabel { control: &'static str, label: String },
}
