use thiserror::Error;

pub type HazResult<T, E = HazError> = core::result::Result<T, E>;

/// Plumbing errors only. The catalogued hazard cases never report anything;
/// their observable effects are memory corruption, process termination, or
/// side-channel output.
#[derive(Debug, Error)]
pub enum HazError {
  #[error("I/O error: {0}")]
  Io(#[from] std::io::Error),

  #[error("input contains an interior NUL byte: {0}")]
  Nul(#[from] std::ffi::NulError),

  #[error("other: {0}")]
  Other(String),
}

impl From<&str> for HazError {
  fn from(msg: &str) -> Self {
    HazError::Other(msg.to_owned())
  }
}
