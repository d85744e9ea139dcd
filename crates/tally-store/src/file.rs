//! # File Medium
//!
//! The production [`StorageMedium`]: one file per slot under a data
//! directory, so the cart survives across independent invocations the way
//! a browser slot survives across page views.
//!
//! Slot `cartItems` lives at `<dir>/cartItems.json`. Keys are used as file
//! names verbatim (plus the extension), so they must be valid file names.
//!
//! Writes land in a sibling temp file first and are renamed into place,
//! which keeps the "no partial writes" promise of the engine: a reader
//! sees either the old slot or the new one, never a half-written cart.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::medium::StorageMedium;

// =============================================================================
// FileMedium
// =============================================================================

/// File-backed storage medium rooted at a data directory.
///
/// The directory is created on first write. Clones share the same
/// directory and therefore the same slots.
///
/// ## Example
/// ```rust,no_run
/// use tally_store::file::FileMedium;
/// use tally_store::store::CartStore;
///
/// let medium = FileMedium::new("/var/lib/tally");
/// let store = CartStore::new(medium);
/// let cart = store.load()?;
/// # Ok::<(), tally_store::StoreError>(())
/// ```
#[derive(Debug, Clone)]
pub struct FileMedium {
    dir: PathBuf,
}

impl FileMedium {
    /// Creates a file medium rooted at the given directory.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FileMedium { dir: dir.into() }
    }

    /// The directory slots are stored under.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn slot_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl StorageMedium for FileMedium {
    fn read(&self, key: &str) -> StoreResult<Option<String>> {
        match fs::read_to_string(self.slot_path(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::read_failed(key, e)),
        }
    }

    fn write(&self, key: &str, value: &str) -> StoreResult<()> {
        fs::create_dir_all(&self.dir).map_err(|e| StoreError::write_failed(key, e))?;

        // Write to a temp file, then rename over the slot. Rename within
        // one directory replaces the target in a single step.
        let path = self.slot_path(key);
        let tmp = self.dir.join(format!("{key}.json.tmp"));

        fs::write(&tmp, value).map_err(|e| StoreError::write_failed(key, e))?;
        fs::rename(&tmp, &path).map_err(|e| StoreError::write_failed(key, e))?;

        debug!(slot = %key, path = %path.display(), bytes = value.len(), "Slot written");
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
