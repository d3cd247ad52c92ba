use thiserror::Error;

/// Failures a storage backend can surface.
///
/// `Duplicate` is load-bearing: it is how a backend reports that the
/// conditional active-challenge create found the slot already taken, and the
/// engine maps it to a caller-visible conflict.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No record exists for the requested key.
    #[error("no record for {0}")]
    NotFound(String),

    /// A conditional create lost to an existing record.
    #[error("record already exists for {0}")]
    Duplicate(String),

    /// The backend itself failed (I/O, connectivity, injected fault).
    #[error("backend failure: {0}")]
    Backend(String),

    /// A record could not be encoded for storage.
    #[error("could not encode record: {0}")]
    Serialization(String),

    /// A stored record could not be decoded back.
    #[error("stored record is unreadable: {0}")]
    Corruption(String),
}
