mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use serde::de::DeserializeOwned;
use tracing::warn;

/// Storage entry holding the persisted session (`{token, refreshToken, user}`)
pub const AUTH_KEY: &str = "auth";

/// Storage entry holding the persisted cart line list
pub const CART_KEY: &str = "dining_cart";

/// Durable key-value storage surviving restarts of the application.
///
/// Each key is exclusively owned by a single store: nothing outside
/// `AuthSession` touches [`AUTH_KEY`], nothing outside `CartStore` touches
/// [`CART_KEY`]. Two processes sharing the same backing file can still race
/// each other (last write wins) - that is an accepted limitation, not an
/// invariant this trait defends.
pub trait Storage: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: String) -> crate::Result<()>;
    fn remove(&self, key: &str) -> crate::Result<()>;
}

/// The "degrade to default" policy for persisted state.
///
/// A missing or unparseable blob restores as `T::default()` - first run,
/// cleared storage and corrupted JSON are all expected conditions and none of
/// them may surface an error past the restore boundary. Parse failures are
/// logged so corruption is at least visible in the logs.
pub fn restore_or_default<T>(key: &str, raw: Option<String>) -> T
where
    T: DeserializeOwned + Default,
{
    match raw {
        Some(blob) => serde_json::from_str(&blob).unwrap_or_else(|e| {
            warn!(key, err = ?e, "discarding malformed persisted state");
            T::default()
        }),
        None => T::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Default, Deserialize, PartialEq)]
    struct Doc {
        count: i32,
    }

    #[test]
    fn absent_blob_restores_the_default() {
        let doc: Doc = restore_or_default("auth", None);
        assert_eq!(doc, Doc::default());
    }

    #[test]
    fn malformed_blob_restores_the_default() {
        let doc: Doc = restore_or_default("auth", Some("{not-json".to_string()));
        assert_eq!(doc, Doc::default());
    }

    #[test]
    fn valid_blob_restores_the_persisted_value() {
        let doc: Doc = restore_or_default("auth", Some(r#"{"count":3}"#.to_string()));
        assert_eq!(doc, Doc { count: 3 });
    }
}
