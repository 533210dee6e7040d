//! Error types for aitrend
//!
//! Centralized error handling using thiserror. The query engine itself is
//! total and never produces these; they come from loading catalog data.

use thiserror::Error;

/// All error types that can occur while loading dashboard data
#[derive(Debug, Error)]
pub enum DashboardError {
    /// A catalog record failed validation
    #[error("Invalid tool '{name}': {reason}")]
    InvalidTool { name: String, reason: String },

    /// Two catalog records share a name
    #[error("Duplicate tool name: {0}")]
    DuplicateTool(String),

    /// A date field was not in YYYY-MM-DD form
    #[error("Invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parse error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl DashboardError {
    /// Build an `InvalidTool` error
    pub fn invalid_tool(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidTool {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for aitrend operations
pub type Result<T> = std::result::Result<T, DashboardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_tool_error() {
        let err = DashboardError::invalid_tool("Bolt AI", "rating 6.0 outside [1.0, 5.0]");
        assert_eq!(err.to_string(), "Invalid tool 'Bolt AI': rating 6.0 outside [1.0, 5.0]");
    }

    #[test]
    fn test_duplicate_tool_error() {
        let err = DashboardError::DuplicateTool("Uizard".to_string());
        assert_eq!(err.to_string(), "Duplicate tool name: Uizard");
    }

    #[test]
    fn test_invalid_date_error() {
        let err = DashboardError::InvalidDate("2024-1-5".to_string());
        assert_eq!(err.to_string(), "Invalid date '2024-1-5': expected YYYY-MM-DD");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: DashboardError = io_err.into();
        assert!(matches!(err, DashboardError::Io(_)));
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_yaml_error_conversion() {
        let yaml_err = serde_yaml::from_str::<Vec<u32>>("{not: a list").unwrap_err();
        let err: DashboardError = yaml_err.into();
        assert!(matches!(err, DashboardError::Yaml(_)));
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_ok() -> Result<i32> {
            Ok(42)
        }

        fn returns_err() -> Result<i32> {
            Err(DashboardError::DuplicateTool("x".to_string()))
        }

        assert!(returns_ok().is_ok());
        assert!(returns_err().is_err());
    }
}
