use serde_json::{Map, Value};

/// Claims returned by the auth service for a verified caller
///
/// The auth service owns the shape of this record; the gateway treats
/// it as an opaque claims map. Created per request by the verifier,
/// carried through request extensions, never cached or persisted.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct VerifiedUser(Map<String, Value>);

impl VerifiedUser {
    pub const fn new(claims: Map<String, Value>) -> Self {
        Self(claims)
    }

    /// Full claims map as returned by the auth service
    pub const fn claims(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Best-effort caller identifier for log correlation
    pub fn subject(&self) -> Option<&str> {
        ["id", "_id", "email"]
            .iter()
            .find_map(|key| self.0.get(*key).and_then(Value::as_str))
    }
}
