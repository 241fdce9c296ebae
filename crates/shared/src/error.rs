#[derive(Debug, thiserror::Error)]
pub enum SimError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),
    #[error("Malformed results file at line {line}: {message}")]
    Parse { line: usize, message: String },
    #[error("Thread pool setup failed: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}
