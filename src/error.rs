use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("Model \"{key}\" not found. Available: {available}")]
    UnknownModel { key: String, available: String },

    #[error("Either a token count or a text to tokenize must be provided")]
    MissingTokenSource,

    #[error("Failed to initialize tokenizer: {0}")]
    Tokenizer(String),

    #[error("{0}")]
    Export(#[from] ExportError),

    #[error("Failed to serialize result: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub(crate) enum ExportError {
    #[error("No results to export")]
    Empty,

    #[error("Failed to write \"{path}\": {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_error_display_unknown_model() {
        let e = AppError::UnknownModel {
            key: "gpt7".to_string(),
            available: "gpt4, gpt35".to_string(),
        };
        assert_eq!(
            e.to_string(),
            r#"Model "gpt7" not found. Available: gpt4, gpt35"#
        );
    }

    #[test]
    fn export_error_empty() {
        assert_eq!(ExportError::Empty.to_string(), "No results to export");
    }

    #[test]
    fn export_error_io_names_path() {
        let e = ExportError::Io {
            path: "/tmp/out.csv".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(e.to_string().contains("/tmp/out.csv"));
    }

    #[test]
    fn app_error_from_export_error() {
        let app: AppError = ExportError::Empty.into();
        assert_eq!(app.to_string(), "No results to export");
    }
}
