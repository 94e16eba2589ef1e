use thiserror::Error;

/// Error types for the compute module
#[derive(Error, Debug)]
pub enum ComputeError {
    /// The availability check passed but the filtered record set was empty.
    /// Duplicate-field mismatches can in principle produce this, so it is an
    /// explicit error rather than a NaN mean.
    #[error("no sales records match {product} ({volume}) in the requested periods")]
    NoMatchingRecords { product: String, volume: String },
}

/// Type alias for Result with ComputeError
pub type Result<T> = std::result::Result<T, ComputeError>;
