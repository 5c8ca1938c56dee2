/// Compute the BLAKE3 hash of a byte slice, returning the hex-encoded digest.
#[must_use]
pub fn blake3_bytes(data: &[u8]) -> String {
    blake3::hash(data).to_hex().to_string()
}

/// Short content fingerprint: the first 8 hex characters of the BLAKE3 digest.
///
/// Used for build summaries where a full digest is noise.
#[must_use]
pub fn short_hash(data: &[u8]) -> String {
    blake3_bytes(data)[..8].to_string()
}
