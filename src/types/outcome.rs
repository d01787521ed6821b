//! Per-item result of a batch fetch.

use serde::{Deserialize, Serialize};

/// Outcome of fetching one item in a batch.
///
/// Batch fetches report per-item failures as values rather than failing the
/// whole call. Only [`FetchOutcome::Success`] is ever cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FetchOutcome<T> {
    Success(T),
    /// The fetch failed; carries a human-readable reason.
    Failure(String),
}

impl<T> FetchOutcome<T> {
    pub fn failure(reason: impl Into<String>) -> Self {
        Self::Failure(reason.into())
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Borrow the payload of a successful outcome.
    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Success(data) => Some(data),
            Self::Failure(_) => None,
        }
    }

    pub fn into_data(self) -> Option<T> {
        match self {
            Self::Success(data) => Some(data),
            Self::Failure(_) => None,
        }
    }
}

impl<T> From<crate::Result<T>> for FetchOutcome<T> {
    fn from(result: crate::Result<T>) -> Self {
        match result {
            Ok(data) => Self::Success(data),
            Err(e) => Self::Failure(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LyricError;

    #[test]
    fn success_exposes_data() {
        let outcome = FetchOutcome::Success(5);
        assert!(outcome.is_success());
        assert_eq!(outcome.data(), Some(&5));
        assert_eq!(outcome.into_data(), Some(5));
    }

    #[test]
    fn failure_has_no_data() {
        let outcome: FetchOutcome<u32> = FetchOutcome::failure("gone");
        assert!(!outcome.is_success());
        assert!(outcome.data().is_none());
    }

    #[test]
    fn converts_from_result() {
        let ok: FetchOutcome<u8> = Ok(1).into();
        assert_eq!(ok, FetchOutcome::Success(1));

        let err: FetchOutcome<u8> = Err(LyricError::Http("reset".into())).into();
        assert!(matches!(err, FetchOutcome::Failure(ref m) if m.contains("reset")));
    }
}
