//! Error types shared by the whole crate

use thiserror::Error;

/// Errors raised while configuring a test run, reading observations or rendering charts
#[derive(Error, Debug)]
pub enum RigError {
    #[error("invalid engine choice `{0}`: expected 1 (Diesel) or 2 (Petrol)")]
    InvalidEngineChoice(i64),

    #[error("unknown engine type `{0}`: expected `diesel` or `petrol`")]
    UnknownEngineName(String),

    #[error("invalid sensor geometry: manometer head h1 + h2 = {head:.3} mm is negative")]
    InvalidSensorGeometry { head: f64 },

    #[error("fuel consumption time must be positive, got {0} s")]
    NonPositiveFuelTime(f64),

    #[error("number of readings must be a positive integer, got `{0}`")]
    InvalidReadingCount(String),

    #[error("input stream closed while waiting for `{0}`")]
    InputClosed(String),

    #[error("rig constant `{name}` must be {expected}, got {value}")]
    InvalidRigConstant {
        name: &'static str,
        value: f64,
        expected: &'static str,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("unable to parse {file}: {source}")]
    Json {
        file: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("unable to render `{title}`: {message}")]
    Plot { title: String, message: String },
}

pub type Result<T> = std::result::Result<T, RigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_value() {
        let msg = RigError::InvalidEngineChoice(7).to_string();
        assert!(msg.contains("`7`"));
        let msg = RigError::InvalidSensorGeometry { head: -12.5 }.to_string();
        assert!(msg.contains("-12.500 mm"));
        let msg = RigError::InvalidRigConstant {
            name: "gravity",
            value: -9.81,
            expected: "positive",
        }
        .to_string();
        assert_eq!(msg, "rig constant `gravity` must be positive, got -9.81");
    }
}
