//! Argon2id password hashing with self-describing encoded hashes:
//! `$argon2id$v=19$m=65536,t=3,p=2$<salt>$<hash>` (unpadded standard base64).

use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::security::PasswordHasher,
};
use crate::domain::errors::ValidationError;
use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{
        self, PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString,
        rand_core::{OsRng, RngCore},
    },
};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashingParams {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
    pub salt_len: usize,
    pub key_len: usize,
}

impl Default for HashingParams {
    fn default() -> Self {
        Self {
            memory_kib: 64 * 1024,
            iterations: 3,
            parallelism: 2,
            salt_len: 16,
            key_len: 32,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PasswordError {
    #[error("password is empty")]
    EmptyPassword,
    #[error("the encoded hash is not in the correct format")]
    InvalidHashFormat,
    #[error("incompatible version of argon2")]
    IncompatibleVersion,
    #[error("key derivation failed: {0}")]
    Derivation(String),
}

fn derivation(err: impl ToString) -> PasswordError {
    PasswordError::Derivation(err.to_string())
}

/// Hash `password` under a fresh random salt of `params.salt_len` bytes.
pub fn hash_password(password: &str, params: &HashingParams) -> Result<String, PasswordError> {
    if password.is_empty() {
        return Err(PasswordError::EmptyPassword);
    }

    let mut salt = vec![0_u8; params.salt_len];
    OsRng.fill_bytes(&mut salt);
    let salt = SaltString::encode_b64(&salt).map_err(derivation)?;

    let cost = Params::new(
        params.memory_kib,
        params.iterations,
        params.parallelism,
        Some(params.key_len),
    )
    .map_err(derivation)?;

    Argon2::new(Algorithm::Argon2id, Version::V0x13, cost)
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(derivation)
}

/// Check `password` against an encoded hash using the cost parameters and
/// salt embedded in it. Keys are compared in constant time.
pub fn verify_password(password: &str, encoded: &str) -> Result<bool, PasswordError> {
    let hash = PasswordHash::new(encoded).map_err(|_| PasswordError::InvalidHashFormat)?;
    if hash.algorithm != Algorithm::Argon2id.ident() {
        return Err(PasswordError::InvalidHashFormat);
    }
    match hash.version {
        Some(version) if version == Version::V0x13 as u32 => {}
        Some(_) => return Err(PasswordError::IncompatibleVersion),
        None => return Err(PasswordError::InvalidHashFormat),
    }
    if hash.salt.is_none() || hash.hash.is_none() {
        return Err(PasswordError::InvalidHashFormat);
    }
    // zero or out-of-range costs are a corrupt record, not a derivation failure
    let embedded = Params::try_from(&hash).map_err(|_| PasswordError::InvalidHashFormat)?;

    match Argon2::new(Algorithm::Argon2id, Version::V0x13, embedded)
        .verify_password(password.as_bytes(), &hash)
    {
        Ok(()) => Ok(true),
        Err(password_hash::Error::Password) => Ok(false),
        Err(err) => Err(derivation(err)),
    }
}

/// [`PasswordHasher`] running the codec on the blocking thread pool.
#[derive(Default, Clone)]
pub struct Argon2PasswordHasher {
    params: HashingParams,
}

impl Argon2PasswordHasher {
    pub fn new(params: HashingParams) -> Self {
        Self { params }
    }
}

#[async_trait]
impl PasswordHasher for Argon2PasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        let password = password.to_owned();
        let params = self.params;
        tokio::task::spawn_blocking(move || hash_password(&password, &params))
            .await
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?
            .map_err(|err| match err {
                PasswordError::EmptyPassword => ApplicationError::from(ValidationError::EmptyPassword),
                other => ApplicationError::infrastructure(other.to_string()),
            })
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<bool> {
        let password = password.to_owned();
        let expected_hash = expected_hash.to_owned();
        tokio::task::spawn_blocking(move || verify_password(&password, &expected_hash))
            .await
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?
            .map_err(|err| {
                tracing::error!(error = %err, "stored password hash is unreadable");
                ApplicationError::infrastructure("stored credential is unreadable")
            })
    }
}
