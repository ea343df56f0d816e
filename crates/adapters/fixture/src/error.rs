//! Fixture adapter error types.

/// Errors raised while loading a fixture file.
#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    /// The fixture file could not be read.
    #[error("failed to read fixture file")]
    Io(#[from] std::io::Error),

    /// The fixture file is not valid TOML or misses required fields.
    #[error("failed to parse fixture file")]
    Parse(#[from] toml::de::Error),

    /// A lesson time is not in `HH:MM` form.
    #[error("invalid time {value:?} for lesson {index}")]
    InvalidTime {
        /// Position of the lesson in the file.
        index: usize,
        /// The offending value.
        value: String,
    },

    /// A lesson ends before it starts.
    #[error("lesson {index} ends before it starts")]
    EndsBeforeStart {
        /// Position of the lesson in the file.
        index: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_invalid_time_error() {
        let err = FixtureError::InvalidTime {
            index: 2,
            value: "8h".to_string(),
        };
        assert_eq!(err.to_string(), "invalid time \"8h\" for lesson 2");
    }

    #[test]
    fn should_display_ends_before_start_error() {
        let err = FixtureError::EndsBeforeStart { index: 0 };
        assert_eq!(err.to_string(), "lesson 0 ends before it starts");
    }
}
