//! Request DTOs for the draw feed API
//!
//! Defines the structure of incoming query strings.

/// Largest `limit` a caller may ask for.
pub const MAX_LIMIT: usize = 1000;

/// Query string for the draw endpoints (`GET /api/three-digit?limit=N`)
///
/// Built from the raw key/value pairs rather than a typed extractor, so a
/// malformed or repeated `limit` produces the same JSON error body as every
/// other failure instead of axum's plain-text rejection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DrawQuery {
    /// Maximum number of draws to return
    pub limit: Option<String>,
}

impl DrawQuery {
    /// Collects the recognised keys, ignoring unknown ones.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Result<Self, String> {
        let mut query = Self::default();
        for (name, value) in pairs {
            if name != "limit" {
                continue;
            }
            if query.limit.is_some() {
                return Err("limit given more than once".to_string());
            }
            query.limit = Some(value);
        }
        Ok(query)
    }

    /// Resolves the effective limit.
    ///
    /// Returns an error message if the value is not an integer in 1..=MAX_LIMIT.
    pub fn resolve_limit(&self, default_limit: usize) -> Result<usize, String> {
        let Some(raw) = self.limit.as_deref().map(str::trim).filter(|s| !s.is_empty()) else {
            return Ok(default_limit);
        };

        match raw.parse::<usize>() {
            Ok(limit) if (1..=MAX_LIMIT).contains(&limit) => Ok(limit),
            Ok(limit) => Err(format!(
                "limit must be between 1 and {}, got {}",
                MAX_LIMIT, limit
            )),
            Err(_) => Err(format!("limit must be an integer, got {:?}", raw)),
        }
    }
}
