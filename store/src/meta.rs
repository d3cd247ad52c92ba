//! Metadata key-value storage trait.

use crate::StoreError;

/// Small byte-keyed metadata store.
///
/// The engine keeps its id counter and the settlement journal here; the
/// layout of the values is the engine's business, not the backend's.
pub trait MetaStore: Send + Sync {
    fn put_meta(&self, key: &[u8], value: &[u8]) -> Result<(), StoreError>;
    fn get_meta(&self, key: &[u8]) -> Result<Option<Vec<u8>>, StoreError>;
    fn delete_meta(&self, key: &[u8]) -> Result<(), StoreError>;
}
