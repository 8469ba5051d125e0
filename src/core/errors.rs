use thiserror::Error;

/// Main error type for Dockdeck
#[derive(Error, Debug)]
pub enum DeckError {
    /// Docker API errors
    #[error("Docker error: {0}")]
    Docker(#[from] DockerError),

    /// UI errors
    #[error("UI error: {0}")]
    Ui(#[from] UiError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// General errors
    #[error("{0}")]
    Other(String),
}

/// Docker-specific errors
#[derive(Error, Debug)]
pub enum DockerError {
    /// Connection errors
    #[error("Failed to connect to Docker: {0}")]
    Connection(String),

    /// Resource not found
    #[error("{resource} not found")]
    NotFound { resource: String },

    /// Unknown server id
    #[error("Unknown server: {0}")]
    UnknownServer(String),

    /// Container errors
    #[error("Container error: {0}")]
    Container(String),

    /// Image errors
    #[error("Image error: {0}")]
    Image(String),

    /// Network errors
    #[error("Network error: {0}")]
    Network(String),

    /// Volume errors
    #[error("Volume error: {0}")]
    Volume(String),
}

/// UI-related errors
#[derive(Error, Debug)]
pub enum UiError {
    /// Terminal errors
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// Rendering errors
    #[error("Rendering error: {0}")]
    Render(String),

    /// Input handling errors
    #[error("Input error: {0}")]
    Input(String),
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Parse errors
    #[error("Failed to parse configuration: {0}")]
    Parse(String),

    /// Validation errors
    #[error("Configuration validation failed: {0}")]
    Validation(String),

    /// File not found
    #[error("Configuration file not found: {0}")]
    NotFound(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, DeckError>;

impl DeckError {
    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            DeckError::Docker(DockerError::Connection(_)) => {
                "Could not connect to Docker. Please ensure Docker is running.".to_string()
            }
            DeckError::Config(ConfigError::NotFound(_)) => {
                "Configuration file not found. Using defaults.".to_string()
            }
            _ => self.to_string(),
        }
    }
}

impl From<toml::de::Error> for DeckError {
    fn from(err: toml::de::Error) -> Self {
        DeckError::Config(ConfigError::Parse(err.to_string()))
    }
}

impl From<toml::ser::Error> for DeckError {
    fn from(err: toml::ser::Error) -> Self {
        DeckError::Config(ConfigError::Parse(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DockerError::NotFound {
            resource: "container abc123".to_string(),
        };
        assert_eq!(err.to_string(), "container abc123 not found");
    }

    #[test]
    fn test_user_messages() {
        let conn_err = DeckError::Docker(DockerError::Connection("test".to_string()));
        let msg = conn_err.user_message();
        assert!(msg.contains("Docker"));
    }

    #[test]
    fn test_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let deck_err: DeckError = io_err.into();
        assert!(matches!(deck_err, DeckError::Io(_)));
    }
}
