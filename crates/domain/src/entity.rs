//! Cache identity shared by every persisted entity.
//!
//! Keys follow the `<kind>:<uid>` scheme for single records and
//! `<kind>:all` for the full collection. Both shapes are part of the
//! external contract and must not change.

use serde::de::DeserializeOwned;
use serde::Serialize;

pub const COLLECTION_SUFFIX: &str = "all";

pub trait CachedEntity: Clone + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Key prefix, e.g. `"scrap"`.
    const KIND: &'static str;

    /// Prefixes of other entities whose rows are removed by the store when
    /// a record of this kind is deleted (foreign key cascades).
    const CASCADE_PREFIXES: &'static [&'static str] = &[];

    /// Input for `create`.
    type Draft: Send + Sync + std::fmt::Debug + 'static;

    /// Input for a partial `update`.
    type Patch: Send + Sync + std::fmt::Debug + 'static;

    fn uid(&self) -> &str;

    fn cache_key(uid: &str) -> String {
        entity_key(Self::KIND, uid)
    }

    fn collection_key() -> String {
        collection_key(Self::KIND)
    }
}

pub fn entity_key(kind: &str, uid: &str) -> String {
    format!("{kind}:{uid}")
}

pub fn collection_key(kind: &str) -> String {
    format!("{kind}:{COLLECTION_SUFFIX}")
}

/// Prefix matching every key of `kind`, single records and collection alike.
pub fn kind_prefix(kind: &str) -> String {
    format!("{kind}:")
}

/// Generates a fresh uid for records created without one.
pub fn generate_uid() -> String {
    uuid::Uuid::new_v4().to_string()
}
