// src/store.rs
//! Per-session scratch directory for fetched pages.
//!
//! Every session owns one `temp_<n>` directory; `n` comes from a
//! process-wide counter so simultaneous sessions land in disjoint
//! directories. Pages are written there before parsing so a failed parse
//! leaves the raw HTML behind for inspection. The directory is removed only
//! once every derivation that referenced it has completed.

use std::{
    fs, io,
    path::{Path, PathBuf},
    sync::atomic::{AtomicU32, Ordering},
};

use crate::config::consts::SCRATCH_PREFIX;
use crate::core::sanitize::sanitize_page_name;

static SESSION_COUNTER: AtomicU32 = AtomicU32::new(0);

pub struct Scratch {
    dir: PathBuf,
}

impl Scratch {
    /// Claim the next session directory. A directory already on disk from a
    /// crashed run is logged and reused, not treated as fatal.
    pub fn create() -> Self {
        let n = SESSION_COUNTER.fetch_add(1, Ordering::SeqCst) + 1;
        let dir = PathBuf::from(format!("{}{}", SCRATCH_PREFIX, n));

        match fs::create_dir(&dir) {
            Ok(()) => logd!("Scratch: created {}", dir.display()),
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                logf!("Scratch: {} already exists, reusing", dir.display());
            }
            Err(e) => loge!("Scratch: could not create {}: {}", dir.display(), e),
        }

        Self { dir }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write one fetched page under a sanitized name. Best-effort callers
    /// may ignore the result; the in-memory copy is what gets parsed.
    pub fn save_page(&self, name: &str, html: &str) -> io::Result<PathBuf> {
        let path = self.dir.join(join!(sanitize_page_name(name), ".html"));
        fs::write(&path, html)?;
        Ok(path)
    }

    /// Delete every stored page, then the directory itself.
    pub fn remove(&self) -> io::Result<()> {
        if !self.dir.exists() {
            return Ok(());
        }
        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if path.is_file() {
                fs::remove_file(&path)?;
            }
        }
        fs::remove_dir(&self.dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sessions_get_disjoint_directories() {
        let a = Scratch::create();
        let b = Scratch::create();
        assert_ne!(a.dir(), b.dir());
        let _ = a.remove();
        let _ = b.remove();
    }

    #[test]
    fn pages_saved_and_cleaned_up() {
        let scratch = Scratch::create();
        let path = scratch.save_page("current week / schedule", "<html></html>").unwrap();
        assert!(path.exists());
        assert!(path.to_string_lossy().ends_with(".html"));
        scratch.remove().unwrap();
        assert!(!scratch.dir().exists());
    }
}
