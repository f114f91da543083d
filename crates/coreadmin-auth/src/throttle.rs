//! In-memory login throttle.
//!
//! Tracks failed login attempts per client IP behind a single mutex. After
//! the configured number of failures the IP is locked out for a fixed
//! window. This is a bolt-on guard in front of the login route, not part of
//! the authorization core; state lives only in this process.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use tokio::sync::Mutex;

/// Per-IP failed-attempt state.
#[derive(Debug, Clone)]
struct AttemptState {
    failures: u32,
    locked_until: Option<Instant>,
}

/// Counts failed logins per client IP and locks out repeat offenders.
#[derive(Debug)]
pub struct LoginThrottle {
    /// IP → attempt state.
    attempts: Mutex<HashMap<String, AttemptState>>,
    /// Failures before lockout.
    max_failures: u32,
    /// Lockout window.
    lockout: Duration,
}

impl LoginThrottle {
    /// Create a throttle locking out after `max_failures` failed attempts
    /// for `lockout_minutes`.
    pub fn new(max_failures: u32, lockout_minutes: u64) -> Self {
        Self {
            attempts: Mutex::new(HashMap::new()),
            max_failures,
            lockout: Duration::from_secs(lockout_minutes * 60),
        }
    }

    /// Whether the client may attempt a login right now.
    ///
    /// An elapsed lockout clears the slate for the IP.
    pub async fn check(&self, client_ip: &str) -> bool {
        let mut attempts = self.attempts.lock().await;

        if let Some(state) = attempts.get(client_ip) {
            if let Some(locked_until) = state.locked_until {
                if Instant::now() < locked_until {
                    return false;
                }
                attempts.remove(client_ip);
            }
        }

        true
    }

    /// Record a failed login; starts the lockout once the limit is hit.
    pub async fn record_failure(&self, client_ip: &str) {
        let mut attempts = self.attempts.lock().await;
        let state = attempts
            .entry(client_ip.to_string())
            .or_insert(AttemptState {
                failures: 0,
                locked_until: None,
            });

        state.failures += 1;
        if state.failures >= self.max_failures {
            state.locked_until = Some(Instant::now() + self.lockout);
        }
    }

    /// Clear the counter after a successful login.
    pub async fn record_success(&self, client_ip: &str) {
        self.attempts.lock().await.remove(client_ip);
    }
}
