use std::env;
use std::path::PathBuf;

/// Directory name used under the XDG base directories
pub const APP_DIR: &str = "tiercache";

/// XDG Base Directory paths for tiercache
pub struct XdgPaths;

impl XdgPaths {
    /// Get XDG_CACHE_HOME/tiercache or fallback
    pub fn cache_dir() -> PathBuf {
        Self::cache_home().join(APP_DIR)
    }

    /// Get XDG_CACHE_HOME, falling back to ~/.cache
    pub fn cache_home() -> PathBuf {
        env::var_os("XDG_CACHE_HOME")
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| {
                dirs::home_dir()
                    .map(|home| home.join(".cache"))
                    .unwrap_or_else(|| PathBuf::from(".cache"))
            })
    }
}
