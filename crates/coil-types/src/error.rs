use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoilError {
    #[error("Geometry error: {0}")]
    Geometry(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Field query on or too close to a conductor at ({x}, {y}, {z}) mm")]
    FieldQuery { x: f64, y: f64, z: f64 },

    #[error("Plot error: {0}")]
    Plot(String),

    #[error("Artifact error: {0}")]
    Artifact(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type CoilResult<T> = Result<T, CoilError>;
