//! 员工密码哈希

use std::fmt;

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use salesdesk_errors::AppError;

/// Argon2 PHC 格式的密码哈希
#[derive(Clone, PartialEq, Eq)]
pub struct HashedPassword(String);

impl HashedPassword {
    pub fn from_plain(plain_password: &str) -> Result<Self, AppError> {
        let salt = SaltString::generate(&mut OsRng);

        let password_hash = Argon2::default()
            .hash_password(plain_password.as_bytes(), &salt)
            .map_err(|e| AppError::internal(format!("Password hashing failed: {}", e)))?
            .to_string();

        Ok(Self(password_hash))
    }

    /// 验证明文密码是否匹配
    pub fn verify(&self, plain_password: &str) -> Result<bool, AppError> {
        let parsed_hash = PasswordHash::new(&self.0)
            .map_err(|e| AppError::internal(format!("Invalid password hash: {}", e)))?;

        Ok(Argon2::default()
            .verify_password(plain_password.as_bytes(), &parsed_hash)
            .is_ok())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Debug for HashedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("HashedPassword([REDACTED])")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hashed = HashedPassword::from_plain("tokyo-2025").unwrap();
        assert!(hashed.as_str().starts_with("$argon2"));
        assert_ne!(hashed.as_str(), "tokyo-2025");
        assert!(hashed.verify("tokyo-2025").unwrap());
        assert!(!hashed.verify("osaka-2025").unwrap());
    }

    #[test]
    fn test_debug_is_redacted() {
        let hashed = HashedPassword::from_plain("tokyo-2025").unwrap();
        assert_eq!(format!("{:?}", hashed), "HashedPassword([REDACTED])");
    }
}
