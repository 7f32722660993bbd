//! Error types for the rf-app service layer.

/// Application error wrapping the backend crates behind one interface for
/// CLI and other frontends.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Scenario file error: {0}")]
    Scenario(String),

    #[error("Scenario validation failed: {0}")]
    Validation(String),

    #[error("Scenario not found: {0}")]
    ScenarioNotFound(String),

    #[error("Compilation failed: {0}")]
    Compile(String),

    #[error("Trace computation failed: {0}")]
    Simulation(String),

    #[error("Results error: {0}")]
    Results(String),

    #[error("Run not found: {0}")]
    RunNotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type AppResult<T> = Result<T, AppError>;

impl From<rf_project::ScenarioError> for AppError {
    fn from(e: rf_project::ScenarioError) -> Self {
        match e {
            rf_project::ScenarioError::Validation(v) => AppError::Validation(v.to_string()),
            other => AppError::Scenario(other.to_string()),
        }
    }
}

impl From<rf_rotor::ConfigError> for AppError {
    fn from(e: rf_rotor::ConfigError) -> Self {
        AppError::Compile(e.to_string())
    }
}

impl From<rf_induction::InductionError> for AppError {
    fn from(e: rf_induction::InductionError) -> Self {
        AppError::Compile(e.to_string())
    }
}

impl From<rf_sim::SimError> for AppError {
    fn from(e: rf_sim::SimError) -> Self {
        AppError::Simulation(e.to_string())
    }
}

impl From<rf_results::ResultsError> for AppError {
    fn from(e: rf_results::ResultsError) -> Self {
        AppError::Results(e.to_string())
    }
}
