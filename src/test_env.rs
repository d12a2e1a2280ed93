//! Test-only helpers for mutating process environment variables.
//!
//! The process environment is global state, so tests that touch it take the
//! lock first and restore prior values with an [`EnvGuard`].

use std::sync::{Mutex, MutexGuard, OnceLock};

/// Serializes environment mutation across test threads.
pub fn lock() -> MutexGuard<'static, ()> {
    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    LOCK.get_or_init(|| Mutex::new(()))
        .lock()
        .expect("env lock poisoned")
}

/// Sets an environment variable for the current process.
pub fn set_var(name: &str, value: &str) {
    // SAFETY: callers hold the env lock, so no other thread touches the
    // environment concurrently.
    unsafe { std::env::set_var(name, value) };
}

/// Removes an environment variable from the current process.
pub fn remove_var(name: &str) {
    // SAFETY: callers hold the env lock, so no other thread touches the
    // environment concurrently.
    unsafe { std::env::remove_var(name) };
}

/// Restores the captured value of an environment variable on drop.
pub struct EnvGuard {
    name: &'static str,
    saved: Option<String>,
}

impl EnvGuard {
    /// Captures the current value of `name`. Declare after taking the lock.
    pub fn capture(name: &'static str) -> Self {
        Self {
            name,
            saved: std::env::var(name).ok(),
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match self.saved.take() {
            Some(value) => set_var(self.name, &value),
            None => remove_var(self.name),
        }
    }
}
