//! Environment isolation for tests touching `READMEGEN_DATA_DIR`.

use std::env;
use std::sync::Mutex;

/// Serializes tests that read or write process environment variables.
pub static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Sets a variable for the lifetime of the guard, then restores it.
///
/// Hold [`ENV_LOCK`] while the guard is alive.
pub struct EnvVarGuard {
    key: &'static str,
    previous: Option<String>,
}

impl EnvVarGuard {
    #[allow(unsafe_code)]
    pub fn set(key: &'static str, value: &str) -> Self {
        let previous = env::var(key).ok();
        // SAFETY: callers hold ENV_LOCK, so no other test thread touches the environment.
        unsafe { env::set_var(key, value) };
        Self { key, previous }
    }
}

impl Drop for EnvVarGuard {
    #[allow(unsafe_code)]
    fn drop(&mut self) {
        // SAFETY: see `set`.
        unsafe {
            match &self.previous {
                Some(value) => env::set_var(self.key, value),
                None => env::remove_var(self.key),
            }
        }
    }
}
