#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use webroot_server::config::ServerConfig;

static NEXT_ID: AtomicUsize = AtomicUsize::new(0);

/// A scratch web root under the system temp dir, removed on drop.
pub struct TempRoot {
    base: PathBuf,
    root: PathBuf,
}

impl TempRoot {
    /// The returned root sits one level below a private base directory, so
    /// tests can also place files just outside the web root.
    pub fn new(tag: &str) -> Self {
        let id = NEXT_ID.fetch_add(1, Ordering::SeqCst);
        let base = std::env::temp_dir().join(format!(
            "webroot-test-{}-{}-{}",
            tag,
            std::process::id(),
            id
        ));
        let root = base.join("www");
        std::fs::create_dir_all(&root).unwrap();
        Self { base, root }
    }

    pub fn path(&self) -> &Path {
        &self.root
    }

    pub fn outside(&self) -> &Path {
        &self.base
    }

    pub fn write(&self, relative: &str, contents: impl AsRef<[u8]>) {
        let path = self.root.join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, contents).unwrap();
    }

    pub fn config(&self) -> ServerConfig {
        ServerConfig {
            web_root: self.root.clone(),
            ..ServerConfig::default()
        }
    }
}

impl Drop for TempRoot {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.base);
    }
}
