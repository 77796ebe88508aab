use std::path::PathBuf;

/// Errors raised at the edges of the library: parsing input text, reading
/// case files and rendering reports. The search itself never fails.
#[derive(thiserror::Error, Debug)]
pub enum PairFinderError {
    #[error("invalid number `{token}` in `{input}`")]
    InvalidNumber { token: String, input: String },

    #[error("example `{0}` has no target line")]
    MissingTarget(String),

    #[error("case `{case}` expects {len} indices, want 0 or 2")]
    InvalidExpected { case: String, len: usize },

    #[error("index {0} does not fit in an i32")]
    IndexOutOfRange(usize),

    #[error("unknown algorithm `{0}` (expected `brute`, `brute-force`, `indexed` or `hash`)")]
    UnknownAlgorithm(String),

    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed case file {path}: {source}")]
    CaseFile {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to render report: {0}")]
    Render(#[from] handlebars::RenderError),

    #[error("invalid report template: {0}")]
    Template(#[from] handlebars::TemplateError),

    #[error("worker task failed: {0}")]
    Worker(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, PairFinderError>;

impl PairFinderError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = PairFinderError::InvalidNumber {
            token: "x".to_string(),
            input: "1,x".to_string(),
        };
        assert_eq!(err.to_string(), "invalid number `x` in `1,x`");

        let err = PairFinderError::UnknownAlgorithm("quick".to_string());
        assert!(err.to_string().contains("quick"));
    }

    #[test]
    fn test_io_error_keeps_path() {
        let source = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = PairFinderError::io("/tmp/cases.json", source);
        assert!(err.to_string().contains("/tmp/cases.json"));
    }
}
