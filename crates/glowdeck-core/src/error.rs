pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// A normalization range with `max <= min`. This is a misconfigured caller, not bad data.
    #[error("max must be greater than min (min: {min}, max: {max})")]
    InvalidRange { min: f64, max: f64 },

    #[error("Invalid config JSON: {message}")]
    InvalidConfigJson { message: String },
}
