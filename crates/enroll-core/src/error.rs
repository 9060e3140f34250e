use thiserror::Error;

/// Failures observed while talking to the activities service.
#[derive(
  Debug, Clone, PartialEq, Eq, Error,
)]
pub enum SyncError {
  #[error("network request failed: {0}")]
  Network(String),
  #[error(
    "response body was not usable: {0}"
  )]
  InvalidBody(String),
  #[error(
    "server answered with status {status}"
  )]
  Rejected {
    status: u16,
    detail: Option<String>
  }
}
