//! Locating the hadolint executable.
//!
//! Well-known install locations for the host platform are probed first, in a
//! fixed order, then `PATH` is searched with `which` / `where`. Nothing is
//! cached: every call repeats the search.

use crate::common::command_utils::{ProcessRequest, ProcessRunner};
use crate::common::host::{EnvSource, FileProbe, Platform};
use log::{debug, error, info, warn};
use std::path::PathBuf;

/// Name of the executable on `PATH`.
pub const HADOLINT: &str = "hadolint";

/// Finds a usable hadolint executable without requiring configuration.
#[derive(Debug, Clone)]
pub struct PathResolver<H> {
    host: H,
    platform: Platform,
    override_path: Option<PathBuf>,
}

impl<H> PathResolver<H>
where
    H: FileProbe + EnvSource + ProcessRunner,
{
    /// Resolver for the platform this binary runs on.
    pub fn new(host: H) -> Self {
        Self::for_platform(host, Platform::current())
    }

    pub fn for_platform(host: H, platform: Platform) -> Self {
        Self {
            host,
            platform,
            override_path: None,
        }
    }

    /// Prefer `path` over the built-in search whenever it exists.
    pub fn with_override(mut self, path: Option<PathBuf>) -> Self {
        self.override_path = path;
        self
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Well-known install locations, most preferred first.
    ///
    /// Windows entries are built from `ProgramFiles` / `LocalAppData` at call
    /// time; entries whose variable is unset are left out.
    pub fn candidate_paths(&self) -> Vec<PathBuf> {
        match self.platform {
            Platform::MacOs => vec![
                PathBuf::from("/usr/local/bin/hadolint"),
                PathBuf::from("/opt/homebrew/bin/hadolint"),
            ],
            Platform::Unix => vec![
                PathBuf::from("/usr/local/bin/hadolint"),
                PathBuf::from("/usr/bin/hadolint"),
                PathBuf::from("/bin/hadolint"),
            ],
            Platform::Windows => {
                let mut paths: Vec<PathBuf> = ["ProgramFiles", "LocalAppData"]
                    .iter()
                    .filter_map(|key| self.host.var(key))
                    .map(|base| PathBuf::from(format!("{}\\Hadolint\\hadolint.exe", base)))
                    .collect();
                paths.push(PathBuf::from("C:\\tools\\hadolint\\hadolint.exe"));
                paths
            }
        }
    }

    /// Path of the hadolint executable, or `None` if it cannot be found.
    pub fn resolve(&self) -> Option<PathBuf> {
        if let Some(path) = &self.override_path {
            if self.host.is_file(path) {
                info!("Using configured hadolint at: {}", path.display());
                return Some(path.clone());
            }
            warn!(
                "Configured hadolint path {} does not exist, searching default locations",
                path.display()
            );
        }

        for candidate in self.candidate_paths() {
            debug!("Checking path: {}", candidate.display());
            if self.host.is_file(&candidate) {
                info!("Found hadolint at: {}", candidate.display());
                return Some(candidate);
            }
        }

        self.search_path()
    }

    /// Ask the OS to search `PATH`, keeping the first reported match.
    fn search_path(&self) -> Option<PathBuf> {
        let command = self.platform.path_search_command();
        let output = match self.host.run(&ProcessRequest::new(command, &[HADOLINT])) {
            Ok(output) => output,
            Err(err) => {
                error!("Error searching PATH for hadolint: {}", err);
                return None;
            }
        };

        if !output.success() {
            debug!(
                "`{} {}` exited with {:?}",
                command, HADOLINT, output.exit_code
            );
            return None;
        }

        let stdout = output.stdout_lossy();
        let found = stdout
            .trim()
            .lines()
            .next()
            .map(str::trim)
            .filter(|line| !line.is_empty())?;
        info!("Found hadolint on PATH at: {}", found);
        Some(PathBuf::from(found))
    }
}
