// SPDX-License-Identifier: MIT

//! Password hashing with PBKDF2-HMAC-SHA256.
//!
//! Stored format: `pbkdf2$<iterations>$<salt_hex>$<hash_base64>`.

use anyhow::anyhow;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use ring::pbkdf2;
use ring::rand::{SecureRandom, SystemRandom};
use std::num::NonZeroU32;

const PBKDF2_ITERATIONS: NonZeroU32 = match NonZeroU32::new(100_000) {
    Some(n) => n,
    None => panic!("iteration count must be non-zero"),
};
const SALT_LEN: usize = 16;
const HASH_LEN: usize = 32;

/// Hash a password with a fresh random salt.
pub fn hash_password(password: &str) -> anyhow::Result<String> {
    let rng = SystemRandom::new();
    let mut salt = [0u8; SALT_LEN];
    rng.fill(&mut salt)
        .map_err(|_| anyhow!("failed to generate password salt"))?;

    let mut hash = [0u8; HASH_LEN];
    pbkdf2::derive(
        pbkdf2::PBKDF2_HMAC_SHA256,
        PBKDF2_ITERATIONS,
        &salt,
        password.as_bytes(),
        &mut hash,
    );

    Ok(format!(
        "pbkdf2${}${}${}",
        PBKDF2_ITERATIONS,
        hex::encode(salt),
        STANDARD.encode(hash)
    ))
}

/// Verify a password against a stored hash string.
///
/// Returns false for malformed hashes rather than erroring; a corrupt
/// stored hash is indistinguishable from a wrong password to the caller.
pub fn verify_password(password: &str, stored: &str) -> bool {
    let parts: Vec<&str> = stored.split('$').collect();
    if parts.len() != 4 || parts[0] != "pbkdf2" {
        return false;
    }

    let Ok(iterations) = parts[1].parse::<u32>() else {
        return false;
    };
    let Some(iterations) = NonZeroU32::new(iterations) else {
        return false;
    };
    let Ok(salt) = hex::decode(parts[2]) else {
        return false;
    };
    let Ok(expected) = STANDARD.decode(parts[3]) else {
        return false;
    };

    pbkdf2::verify(
        pbkdf2::PBKDF2_HMAC_SHA256,
        iterations,
        &salt,
        password.as_bytes(),
        &expected,
    )
    .is_ok()
}
