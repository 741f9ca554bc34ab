use serde::Serialize;
use thiserror::Error;

use crate::hasher::{MAX_COST, MAX_PASSWORD_BYTES, MIN_COST};

/// Everything that can go wrong in a single invocation.
#[derive(Debug, Error)]
pub enum Error {
    #[error("cost {0} is outside allowed range ({MIN_COST},{MAX_COST})")]
    InvalidCost(u32),

    #[error("password is {0} bytes, bcrypt accepts at most {MAX_PASSWORD_BYTES}")]
    PasswordTooLong(usize),

    #[error("hash is not the hash of the given password")]
    Mismatch,

    /// The hash failed bcrypt's structural validation. Displays the primitive's message.
    #[error("{0}")]
    MalformedHash(#[source] bcrypt::BcryptError),

    #[error("failed to hash password: {0}")]
    Hashing(#[source] bcrypt::BcryptError),

    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

/// Serializable error category, reported in `--json` output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    InvalidInput,
    Mismatch,
    MalformedHash,
    Internal,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidCost(_) | Error::PasswordTooLong(_) => ErrorKind::InvalidInput,
            Error::Mismatch => ErrorKind::Mismatch,
            Error::MalformedHash(_) => ErrorKind::MalformedHash,
            Error::Hashing(_) | Error::Output(_) => ErrorKind::Internal,
        }
    }

    /// Process exit code for this error. 2 is left to clap for usage errors.
    pub fn exit_code(&self) -> u8 {
        match self.kind() {
            ErrorKind::Mismatch => 1,
            ErrorKind::MalformedHash => 3,
            ErrorKind::InvalidInput => 4,
            ErrorKind::Internal => 5,
        }
    }
}
