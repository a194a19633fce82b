//! In-memory host used by unit tests.

use crate::common::command_utils::{ProcessOutput, ProcessRequest, ProcessRunner};
use crate::common::host::{EnvSource, FileProbe};
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};

/// A recorded subprocess invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    pub program: String,
    pub args: Vec<String>,
    pub stdin: Option<Vec<u8>>,
}

#[derive(Debug, Default)]
pub struct FakeHost {
    files: HashSet<PathBuf>,
    env: HashMap<String, String>,
    responses: HashMap<String, Result<ProcessOutput, io::ErrorKind>>,
    calls: RefCell<Vec<Call>>,
}

impl FakeHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.files.insert(path.into());
        self
    }

    pub fn with_env(mut self, key: &str, value: &str) -> Self {
        self.env.insert(key.to_string(), value.to_string());
        self
    }

    /// Any run of `program` exits with `exit_code` and prints `stdout`.
    pub fn with_response(mut self, program: &str, exit_code: i32, stdout: &str) -> Self {
        self.responses.insert(
            program.to_string(),
            Ok(ProcessOutput {
                exit_code: Some(exit_code),
                stdout: stdout.as_bytes().to_vec(),
                stderr: Vec::new(),
            }),
        );
        self
    }

    pub fn with_output(mut self, program: &str, output: ProcessOutput) -> Self {
        self.responses.insert(program.to_string(), Ok(output));
        self
    }

    /// Any run of `program` fails to launch with `kind`.
    pub fn with_launch_failure(mut self, program: &str, kind: io::ErrorKind) -> Self {
        self.responses.insert(program.to_string(), Err(kind));
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }
}

impl FileProbe for FakeHost {
    fn is_file(&self, path: &Path) -> bool {
        self.files.contains(path)
    }
}

impl EnvSource for FakeHost {
    fn var(&self, key: &str) -> Option<String> {
        self.env.get(key).cloned()
    }
}

impl ProcessRunner for FakeHost {
    fn run(&self, request: &ProcessRequest<'_>) -> io::Result<ProcessOutput> {
        let program = request.program.to_string_lossy().into_owned();
        self.calls.borrow_mut().push(Call {
            program: program.clone(),
            args: request.args.iter().map(|a| a.to_string()).collect(),
            stdin: request.stdin.map(<[u8]>::to_vec),
        });

        match self.responses.get(&program) {
            Some(Ok(output)) => Ok(output.clone()),
            Some(Err(kind)) => Err(io::Error::from(*kind)),
            None => Err(io::Error::from(io::ErrorKind::NotFound)),
        }
    }
}
