//! Error types for solsim.
//!
//! Numeric corner cases inside the dynamics (coincident bodies, empty time
//! steps) are policies, not errors. Errors cover rejected inputs and
//! configuration loading.

use thiserror::Error;

use crate::simulation::states::BodyId;

/// Result type alias for solsim operations.
pub type SimResult<T> = Result<T, SimError>;

#[derive(Debug, Error)]
pub enum SimError {
    /// Masses must stay strictly positive and finite.
    #[error("invalid mass {mass:e} kg for {body}")]
    InvalidMass {
        body: BodyId,
        mass: f64,
    },

    /// The time compression coefficient must stay strictly positive and finite.
    #[error("invalid time compression coefficient {0:e}")]
    InvalidTimeCompression(f64),

    /// Invalid configuration parameter.
    #[error("configuration error: {message}")]
    Config {
        message: String,
    },

    #[error("YAML parsing error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SimError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}
