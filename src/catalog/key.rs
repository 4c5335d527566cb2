use super::CatalogError;
use aes::cipher::KeyInit;

/// Parse a hex AES-256 key (optionally `0x`-prefixed) into a cipher.
///
/// Key bytes are word-swapped in groups of four, matching how `repak`
/// expects keys copied from the usual AES key listings.
pub fn parse_aes_key(key: &str) -> Result<aes::Aes256, CatalogError> {
    let bytes = key_bytes(key)?;
    aes::Aes256::new_from_slice(&bytes).map_err(|e| CatalogError::InvalidKey(e.to_string()))
}

/// Raw cipher key bytes for a hex key string
pub(crate) fn key_bytes(key: &str) -> Result<Vec<u8>, CatalogError> {
    let trimmed = key.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);

    let mut bytes = hex::decode(digits).map_err(|e| CatalogError::InvalidKey(e.to_string()))?;
    if bytes.len() != 32 {
        return Err(CatalogError::InvalidKey(format!(
            "expected 32 bytes, got {}",
            bytes.len()
        )));
    }

    // Swap each 32-bit word
    bytes.chunks_mut(4).for_each(|c| c.reverse());
    Ok(bytes)
}
