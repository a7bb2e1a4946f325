use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::errors::AppError;

/// Opaque pagination token: the identity of the last row of a page plus a
/// fingerprint of the facet combination that produced it. Cursors are scoped
/// to that exact combination: replaying one against different filters is an
/// `InvalidFacet` error, never a silently mixed result sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCursor {
    pub created_at: DateTime<Utc>,
    pub id: Uuid,
    pub filters: u64,
}

impl PageCursor {
    pub fn encode(&self) -> String {
        format!(
            "{}.{}.{:016x}",
            self.created_at.timestamp_micros(),
            self.id.simple(),
            self.filters
        )
    }

    pub fn decode(token: &str) -> Result<Self, AppError> {
        let malformed = || AppError::InvalidFacet("malformed pagination cursor".to_string());

        let mut parts = token.splitn(3, '.');
        let micros: i64 = parts
            .next()
            .and_then(|p| p.parse().ok())
            .ok_or_else(malformed)?;
        let created_at = DateTime::from_timestamp_micros(micros).ok_or_else(malformed)?;
        let id = parts
            .next()
            .and_then(|p| Uuid::parse_str(p).ok())
            .ok_or_else(malformed)?;
        let filters = parts
            .next()
            .and_then(|p| u64::from_str_radix(p, 16).ok())
            .ok_or_else(malformed)?;

        Ok(PageCursor {
            created_at,
            id,
            filters,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_survives_transport() {
        let cursor = PageCursor {
            created_at: DateTime::from_timestamp_micros(1_722_000_000_123_456).unwrap(),
            id: Uuid::new_v4(),
            filters: 0xdead_beef_0042,
        };
        assert_eq!(PageCursor::decode(&cursor.encode()).unwrap(), cursor);
    }

    #[test]
    fn test_garbage_tokens_rejected() {
        for token in ["", "not-a-cursor", "123", "123.nope", "123.00000000000000000000000000000000"] {
            assert!(
                matches!(PageCursor::decode(token), Err(AppError::InvalidFacet(_))),
                "token {token:?} should be rejected"
            );
        }
    }
}
