use sha2::{ Digest, Sha256 };

/// Hex-encoded SHA-256 digest of a session token, as stored in `session.hashed_session_token`.
pub fn hash_session_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    hex::encode(hasher.finalize())
}
