use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

use crate::error::WebError;

pub fn hash_password(plain: &str) -> Result<String, WebError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(plain.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| WebError::InternalServerError(format!("password hashing failed: {e}")))
}

pub fn verify_password(plain: &str, hash: &str) -> Result<bool, WebError> {
    let parsed = PasswordHash::new(hash)
        .map_err(|e| WebError::InternalServerError(format!("stored password hash is invalid: {e}")))?;

    Ok(Argon2::default()
        .verify_password(plain.as_bytes(), &parsed)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify_round_trip() {
        let password = "correct-horse-battery-staple";
        let hash = hash_password(password).expect("hashing should succeed");
        assert!(verify_password(password, &hash).expect("verify should succeed"));
    }

    #[test]
    fn test_wrong_password_rejected() {
        let hash = hash_password("the-real-password").expect("hashing should succeed");
        assert!(!verify_password("a-guess", &hash).expect("verify should not error"));
    }

    #[test]
    fn test_malformed_hash_errors() {
        assert!(verify_password("anything", "not-a-phc-string").is_err());
    }
}
