use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error with {} file at path `{}`: {}", .file_description, .path, .original)]
    Io {
        file_description: String,
        path: String,
        original: std::io::Error,
    },

    #[error("Error {} {} file at `{}`: {}", .action, .file_description, .path, .original)]
    Yaml {
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    },

    #[error("Error reading trip data at `{}`: {}", .path, .original)]
    Csv { path: String, original: csv::Error },

    #[error("Trip data at `{}` has no `{}` column", .path, .column)]
    MissingColumn { path: String, column: String },

    #[error("Could not parse timestamp \"{}\" on line {} of `{}`", .value, .line, .path)]
    InvalidTimestamp {
        path: String,
        line: u64,
        value: String,
    },

    #[error("Unknown city: \"{}\"", .0)]
    UnknownCity(String),

    #[error("STDIO error: {}", .0)]
    Stdio(#[from] std::io::Error),

    #[error("Input was closed before a valid answer was given.")]
    InputClosed,
}

impl Error {
    pub fn io_error(file_description: String, path: String, original: std::io::Error) -> Self {
        Self::Io {
            file_description,
            path,
            original,
        }
    }

    pub fn yaml_error(
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    ) -> Self {
        Self::Yaml {
            action,
            file_description,
            path,
            original,
        }
    }

    pub fn csv_error(path: String, original: csv::Error) -> Self {
        Self::Csv { path, original }
    }

    pub fn missing_column(path: String, column: &str) -> Self {
        Self::MissingColumn {
            path,
            column: column.to_string(),
        }
    }

    /// Whether this error means the trip data for a city could not be loaded.
    ///
    /// These end the current run-loop iteration but not the program.
    #[must_use]
    pub fn is_data_unavailable(&self) -> bool {
        matches!(
            self,
            Self::Io { .. }
                | Self::Csv { .. }
                | Self::MissingColumn { .. }
                | Self::InvalidTimestamp { .. }
        )
    }
}
