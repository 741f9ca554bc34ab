//! Pass-through to the `bcrypt` crate.
//!
//! All cryptographic work happens in the crate. This module only owns the
//! input policy: which costs are accepted, how low costs are treated, and
//! the refusal to silently truncate long passwords.

use bcrypt::HashParts;
use tracing::{debug, warn};

use crate::error::Error;
use crate::types::Variant;

pub const MIN_COST: u32 = 4;
pub const MAX_COST: u32 = 31;
pub const DEFAULT_COST: u32 = 10;

/// bcrypt ignores everything past the first 72 bytes of input.
pub const MAX_PASSWORD_BYTES: usize = 72;

/// Resolve the cost a hash will be computed at.
///
/// Costs below [`MIN_COST`] fall back to [`DEFAULT_COST`]; costs above
/// [`MAX_COST`] are rejected.
pub fn effective_cost(cost: u32) -> Result<u32, Error> {
    if cost > MAX_COST {
        return Err(Error::InvalidCost(cost));
    }
    if cost < MIN_COST {
        warn!(
            requested = cost,
            used = DEFAULT_COST,
            "cost below minimum, using default"
        );
        return Ok(DEFAULT_COST);
    }
    Ok(cost)
}

fn check_length(password: &str) -> Result<(), Error> {
    let len = password.len();
    if len > MAX_PASSWORD_BYTES {
        return Err(Error::PasswordTooLong(len));
    }
    Ok(())
}

/// Hash `password` with a fresh random salt, returning the encoded hash string.
pub fn hash_password(password: &str, cost: u32, variant: Variant) -> Result<String, Error> {
    check_length(password)?;
    let cost = effective_cost(cost)?;

    debug!(cost, %variant, "hashing password");
    let parts = bcrypt::hash_with_result(password, cost).map_err(Error::Hashing)?;
    Ok(parts.format_for_version(variant.into()))
}

/// Check `password` against `hash`. Comparison is constant-time inside the crate.
pub fn verify_password(password: &str, hash: &str) -> Result<(), Error> {
    check_length(password)?;

    debug!("verifying password against hash");
    match bcrypt::verify(password, hash) {
        Ok(true) => Ok(()),
        Ok(false) => Err(Error::Mismatch),
        Err(e) => Err(Error::MalformedHash(e)),
    }
}

/// Read the cost factor encoded in `hash`.
pub fn hash_cost(hash: &str) -> Result<u32, Error> {
    let parts: HashParts = hash.parse().map_err(Error::MalformedHash)?;
    let cost = parts.get_cost();
    if !(MIN_COST..=MAX_COST).contains(&cost) {
        return Err(Error::InvalidCost(cost));
    }
    debug!(cost, "read cost from hash");
    Ok(cost)
}
