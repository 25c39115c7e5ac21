//! Custom error types for the dashboard

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("Data source unavailable: {endpoint} - {message}")]
    SourceUnavailable {
        endpoint: String,
        message: String,
        #[source]
        source: Option<anyhow::Error>,
    },

    #[error("Preference storage failed: {path} - {message}")]
    Storage {
        path: String,
        message: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("Invalid command '{input}': {reason}")]
    InvalidCommand {
        input: String,
        reason: String,
    },
}

impl DashboardError {
    pub fn source_unavailable(endpoint: &str, message: impl Into<String>, source: Option<anyhow::Error>) -> Self {
        DashboardError::SourceUnavailable {
            endpoint: endpoint.to_string(),
            message: message.into(),
            source,
        }
    }

    pub fn invalid_command(input: &str, reason: impl Into<String>) -> Self {
        DashboardError::InvalidCommand {
            input: input.to_string(),
            reason: reason.into(),
        }
    }

    /// Single human-readable line shown in place of the table
    pub fn user_message(&self) -> String {
        match self {
            DashboardError::SourceUnavailable { message, .. } => {
                format!("Failed to load arbitrage data: {}", message)
            }
            DashboardError::Storage { message, .. } => {
                format!("Could not save preferences: {}", message)
            }
            DashboardError::InvalidCommand { input, reason } => {
                format!("Cannot run '{}': {}", input, reason)
            }
        }
    }
}

pub type DashboardResult<T> = Result<T, DashboardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_hides_endpoint() {
        let err = DashboardError::source_unavailable(
            "http://localhost:8000/arbitrage",
            "connection refused",
            None,
        );
        assert_eq!(err.user_message(), "Failed to load arbitrage data: connection refused");
        assert!(err.to_string().contains("localhost:8000"));
    }
}
