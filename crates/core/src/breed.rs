//! Breed validation against an external breed catalogue.
//!
//! The catalogue is reached through the [`BreedOracle`] trait so the HTTP
//! client lives in the API crate and tests can supply a fixed list. Each
//! call to [`verify_breed`] performs a fresh lookup; there is no caching.

use async_trait::async_trait;

use crate::error::CoreError;

/// Failure to obtain the list of known breeds.
#[derive(Debug, thiserror::Error)]
pub enum BreedLookupError {
    /// The oracle could not be reached (network, DNS, TLS, timeout).
    #[error("breed service unreachable: {0}")]
    Unreachable(String),

    /// The oracle answered with a non-2xx status code.
    #[error("breed service returned HTTP {0}")]
    Status(u16),

    /// The oracle answered 2xx but the body was not a list of breeds.
    #[error("breed service returned a malformed body: {0}")]
    Malformed(String),
}

/// Source of the full set of known breed names.
#[async_trait]
pub trait BreedOracle: Send + Sync {
    /// Fetch every breed name the oracle knows about.
    async fn breed_names(&self) -> Result<Vec<String>, BreedLookupError>;
}

/// Case-insensitive membership test.
pub fn is_known_breed<S: AsRef<str>>(candidate: &str, known: &[S]) -> bool {
    let candidate = candidate.to_lowercase();
    known
        .iter()
        .any(|name| name.as_ref().to_lowercase() == candidate)
}

/// Accept `candidate` if the oracle lists it.
///
/// Returns [`CoreError::InvalidBreed`] when the name is unknown and
/// [`CoreError::ValidationUnavailable`] when the oracle cannot answer.
pub async fn verify_breed(oracle: &dyn BreedOracle, candidate: &str) -> Result<(), CoreError> {
    let known = oracle
        .breed_names()
        .await
        .map_err(|e| CoreError::ValidationUnavailable(e.to_string()))?;

    if is_known_breed(candidate, &known) {
        Ok(())
    } else {
        Err(CoreError::InvalidBreed(candidate.to_string()))
    }
}
