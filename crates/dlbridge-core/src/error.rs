use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    // Host errors
    #[error("{symbol} has not been injected by Datalogic Enterprise Browser")]
    HostNotInjected { symbol: &'static str },

    // Event errors
    #[error("Invalid payload for event '{event}': {message}")]
    InvalidPayload { event: String, message: String },

    // Catalog errors
    #[error("Unknown {set} value: {value}")]
    UnknownOption { set: &'static str, value: i32 },

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a new host absence error for the given injected symbol.
    pub fn host_not_injected(symbol: &'static str) -> Self {
        Self::HostNotInjected { symbol }
    }

    /// Create a new invalid event payload error.
    pub fn invalid_payload(event: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidPayload {
            event: event.into(),
            message: message.into(),
        }
    }

    /// Create a new configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Returns `true` if this error reports a missing host object.
    pub fn is_host_not_injected(&self) -> bool {
        matches!(self, Self::HostNotInjected { .. })
    }

    /// Name of the missing injected symbol, if this is a host absence error.
    pub fn missing_symbol(&self) -> Option<&'static str> {
        match self {
            Self::HostNotInjected { symbol } => Some(symbol),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
