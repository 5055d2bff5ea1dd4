//! Error taxonomy for the resolution engine.
//!
//! NotFound and ExcessiveFanout propagate to the top-level caller unchanged;
//! dangling references and unsupported relations never surface as errors,
//! degrading the result instead.

use thiserror::Error;

/// Storage-tier failures.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("backend: {0}")]
    Backend(String),

    #[error("decode {table}: {source}")]
    Decode {
        table: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Terminal failures of a resolution call.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("not found: {0}")]
    NotFound(&'static str),

    #[error("too many results: {found} exceeds the {limit} cap")]
    ExcessiveFanout { found: usize, limit: usize },

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("store: {0}")]
    Store(#[from] StoreError),
}

impl ResolveError {
    /// Status mapping for the transport consumer.
    pub fn http_status(&self) -> u16 {
        match self {
            Self::NotFound(_) => 404,
            Self::ExcessiveFanout { .. } => 413,
            Self::InvalidRequest(_) => 400,
            Self::Store(_) => 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_status_not_found() {
        assert_eq!(ResolveError::NotFound("buff").http_status(), 404);
    }

    #[test]
    fn http_status_fanout() {
        let e = ResolveError::ExcessiveFanout {
            found: 5000,
            limit: 1000,
        };
        assert_eq!(e.http_status(), 413);
        assert_eq!(e.to_string(), "too many results: 5000 exceeds the 1000 cap");
    }

    #[test]
    fn http_status_invalid_request() {
        let e = ResolveError::InvalidRequest("phase required".into());
        assert_eq!(e.http_status(), 400);
    }

    #[test]
    fn store_errors_wrap() {
        let inner = StoreError::Backend("connection refused".into());
        let e = ResolveError::from(inner);
        assert_eq!(e.http_status(), 500);
        assert!(e.to_string().starts_with("store: backend"));
    }

    #[test]
    fn display_not_found() {
        assert_eq!(
            ResolveError::NotFound("servant").to_string(),
            "not found: servant"
        );
    }
}
