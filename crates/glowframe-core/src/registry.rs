//! Process-wide de-duplication of native window class registrations.
//!
//! Each strip gets its own window class keyed by side and host window,
//! mirroring how the OS sees them. Registering the same key twice is not
//! an error: the second caller reuses the first registration.

use std::collections::HashSet;
use std::sync::{Mutex, OnceLock};

use crate::{GlowError, GlowResult, Side};

static GLOBAL: OnceLock<ClassRegistry> = OnceLock::new();

/// Identity of a strip window class: which edge of which host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClassKey {
    pub side: Side,
    /// Raw host window handle. Used as an identity only.
    pub parent: usize,
}

impl ClassKey {
    pub fn new(side: Side, parent: usize) -> Self {
        Self { side, parent }
    }

    /// Window class name, e.g. `GlowSide_Top_0x1A2B3C`.
    pub fn class_name(&self) -> String {
        format!("GlowSide_{}_0x{:X}", self.side, self.parent)
    }
}

/// Outcome of a successful registration request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Registration {
    /// The class was registered by this call.
    Registered,
    /// The class already existed, either in this registry or in the OS.
    AlreadyExists,
}

#[derive(Debug, Default)]
pub struct ClassRegistry {
    known: Mutex<HashSet<ClassKey>>,
}

impl ClassRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The registry shared by every overlay in the process.
    pub fn global() -> &'static ClassRegistry {
        GLOBAL.get_or_init(ClassRegistry::new)
    }

    /// Registers `key` once, reusing earlier registrations.
    ///
    /// `register` receives the class name and performs the native call.
    /// It returns `Err(code)` with the OS error code on failure. The lock
    /// is held across the call so two overlays for the same key never
    /// race each other into the OS.
    pub fn register_or_reuse(
        &self,
        key: ClassKey,
        register: impl FnOnce(&str) -> Result<Registration, u32>,
    ) -> GlowResult<Registration> {
        let mut known = self.known.lock().unwrap_or_else(|e| e.into_inner());
        if known.contains(&key) {
            return Ok(Registration::AlreadyExists);
        }

        let class = key.class_name();
        let outcome =
            register(&class).map_err(|code| GlowError::ClassRegistration { class, code })?;
        known.insert(key);
        Ok(outcome)
    }

    /// Returns whether `key` has been registered through this registry.
    pub fn contains(&self, key: &ClassKey) -> bool {
        self.known
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .contains(key)
    }
}
