//! Time and randomness capabilities used to fill `oauth_timestamp` and `oauth_nonce`.
//!
//! The client receives these as values so a caller can pin both fields and
//! reproduce a signature exactly.
use std::time::{SystemTime, UNIX_EPOCH};

use rand::Rng;

/// Supplies the `oauth_timestamp` value in seconds since the Unix epoch.
pub trait Clock {
    fn timestamp(&self) -> u64;
}

/// Supplies the `oauth_nonce` value. Values must not repeat between requests.
pub trait NonceSource {
    fn nonce(&self) -> String;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn timestamp(&self) -> u64 {
        // clocks before the epoch yield 0
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or_default()
    }
}

/// Random non-negative 63-bit integer rendered in decimal.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomNonce;

impl NonceSource for RandomNonce {
    fn nonce(&self) -> String {
        (rand::rng().random::<u64>() >> 1).to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub u64);

impl Clock for FixedClock {
    fn timestamp(&self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedNonce(pub String);

impl FixedNonce {
    pub fn new<T: Into<String>>(nonce: T) -> Self {
        FixedNonce(nonce.into())
    }
}

impl NonceSource for FixedNonce {
    fn nonce(&self) -> String {
        self.0.clone()
    }
}
