//! Read-only views of the host machine.
//!
//! Path resolution only ever asks two questions of the host: does a file
//! exist, and what is an environment variable set to. Both sit behind traits
//! so resolution can be exercised without touching the real filesystem.

use std::path::Path;

/// Host platform class, as far as executable lookup is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    MacOs,
    Unix,
    Windows,
}

impl Platform {
    /// The platform this binary was compiled for.
    pub fn current() -> Self {
        Self::from_os(std::env::consts::OS)
    }

    /// Classify an OS name as reported by `std::env::consts::OS`.
    pub fn from_os(os: &str) -> Self {
        match os {
            "macos" | "ios" => Self::MacOs,
            "windows" => Self::Windows,
            _ => Self::Unix,
        }
    }

    /// Command used to search `PATH` for an executable.
    pub fn path_search_command(&self) -> &'static str {
        match self {
            Self::Windows => "where",
            Self::MacOs | Self::Unix => "which",
        }
    }
}

/// Answers whether a path names an existing regular file.
pub trait FileProbe {
    fn is_file(&self, path: &Path) -> bool;
}

/// Reads environment variables.
pub trait EnvSource {
    /// Returns `None` when the variable is unset or not valid unicode.
    fn var(&self, key: &str) -> Option<String>;
}

/// The real host: filesystem, environment and process spawning.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemHost;

impl FileProbe for SystemHost {
    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }
}

impl EnvSource for SystemHost {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}
