use sha2::{Digest, Sha256};

/// Choose the FIFO deduplication ID for a message body.
///
/// A pinned ID is used as-is, which makes the queue drop every further message sent within its
/// deduplication window. Otherwise the ID is the hex SHA-256 digest of the body, so only an
/// identical list is dropped.
pub fn deduplication_id(body: &str, pinned: Option<&str>) -> String {
    match pinned {
        Some(id) => String::from(id),
        None => hex::encode(Sha256::digest(body.as_bytes())),
    }
}
