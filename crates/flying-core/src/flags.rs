//! Shared UI state flags.
//!
//! The section synchronizer is the only writer; the cursor, star field and
//! background effects read. A version counter lets readers skip work when
//! nothing changed since their last look.

use std::sync::{Arc, RwLock};

/// UI state published by the section synchronizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiFlags {
    /// Show the milky-way background (hidden while its section is on screen).
    pub show_background: bool,
    /// The interactive zone is reached: custom cursor and star field are on.
    pub interactive_zone: bool,
    /// Index of the section nearest to the scroll offset.
    pub current_section: usize,
}

impl Default for UiFlags {
    fn default() -> Self {
        Self {
            show_background: true,
            interactive_zone: false,
            current_section: 0,
        }
    }
}

impl UiFlags {
    /// Create a connected writer/reader pair holding the default flags.
    pub fn channel() -> (FlagWriter, FlagReader) {
        let shared = Arc::new(RwLock::new(Versioned {
            flags: UiFlags::default(),
            version: 0,
        }));
        (
            FlagWriter {
                shared: shared.clone(),
            },
            FlagReader { shared },
        )
    }
}

#[derive(Debug)]
struct Versioned {
    flags: UiFlags,
    version: u64,
}

/// The single writer of the shared flags. Not `Clone`.
#[derive(Debug)]
pub struct FlagWriter {
    shared: Arc<RwLock<Versioned>>,
}

impl FlagWriter {
    /// Apply `f` to the flags. The version is bumped only if they changed.
    /// Returns whether anything changed.
    pub fn update(&self, f: impl FnOnce(&mut UiFlags)) -> bool {
        let mut guard = self.shared.write().unwrap_or_else(|e| e.into_inner());
        let before = guard.flags;
        f(&mut guard.flags);
        if guard.flags == before {
            return false;
        }
        guard.version += 1;
        true
    }

    pub fn set_show_background(&self, value: bool) -> bool {
        self.update(|f| f.show_background = value)
    }

    pub fn set_interactive_zone(&self, value: bool) -> bool {
        self.update(|f| f.interactive_zone = value)
    }

    pub fn set_current_section(&self, index: usize) -> bool {
        self.update(|f| f.current_section = index)
    }

    /// A new reader attached to the same flags.
    pub fn reader(&self) -> FlagReader {
        FlagReader {
            shared: self.shared.clone(),
        }
    }
}

/// Read handle to the shared flags.
#[derive(Debug, Clone)]
pub struct FlagReader {
    shared: Arc<RwLock<Versioned>>,
}

impl FlagReader {
    pub fn get(&self) -> UiFlags {
        self.snapshot().0
    }

    /// Current flags and their version.
    pub fn snapshot(&self) -> (UiFlags, u64) {
        let guard = self.shared.read().unwrap_or_else(|e| e.into_inner());
        (guard.flags, guard.version)
    }

    pub fn version(&self) -> u64 {
        self.snapshot().1
    }

    /// Flags if they changed after `version` was observed.
    pub fn changed_since(&self, version: u64) -> Option<(UiFlags, u64)> {
        let (flags, current) = self.snapshot();
        (current != version).then_some((flags, current))
    }
}
