use std::{
    ffi::OsString,
    sync::{Mutex, OnceLock},
};

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

/// Holds the process-wide env lock and restores every variable it touched on drop.
pub struct EnvGuard {
    previous: Vec<(&'static str, Option<OsString>)>,
    _lock: std::sync::MutexGuard<'static, ()>,
}

impl EnvGuard {
    pub fn new() -> Self {
        let lock = ENV_LOCK
            .get_or_init(|| Mutex::new(()))
            .lock()
            .unwrap_or_else(|err| err.into_inner());
        Self {
            previous: Vec::new(),
            _lock: lock,
        }
    }

    pub fn set(&mut self, key: &'static str, value: impl Into<OsString>) -> &mut Self {
        self.remember(key);
        // SAFETY: tests run under a global lock to prevent concurrent env mutations.
        unsafe {
            std::env::set_var(key, value.into());
        }
        self
    }

    pub fn remove(&mut self, key: &'static str) -> &mut Self {
        self.remember(key);
        // SAFETY: tests run under a global lock to prevent concurrent env mutations.
        unsafe {
            std::env::remove_var(key);
        }
        self
    }

    fn remember(&mut self, key: &'static str) {
        if self.previous.iter().all(|(known, _)| *known != key) {
            self.previous.push((key, std::env::var_os(key)));
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (key, value) in self.previous.drain(..).rev() {
            // SAFETY: tests run under a global lock to prevent concurrent env mutations.
            unsafe {
                match value {
                    Some(value) => std::env::set_var(key, value),
                    None => std::env::remove_var(key),
                }
            }
        }
    }
}
