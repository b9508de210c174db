use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScannerError {
    #[error("Scan error: {0}")]
    Scan(#[from] cssscan::ScanError),

    #[error("Logger setup failed: {0}")]
    Logger(#[from] inspector::log_init::LogInitError),
}

// Create a type alias for convenience
pub type Result<T> = std::result::Result<T, ScannerError>;
