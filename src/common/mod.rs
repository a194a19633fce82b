//! Host abstractions shared by the analyzers.

pub mod command_utils;
pub mod host;

#[cfg(test)]
pub(crate) mod fake;
#[cfg(test)]
pub(crate) mod log_capture;

pub use command_utils::{ProcessOutput, ProcessRequest, ProcessRunner};
pub use host::{EnvSource, FileProbe, Platform, SystemHost};
