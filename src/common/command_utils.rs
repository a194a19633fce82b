use crate::common::host::SystemHost;
use log::debug;
use std::ffi::OsStr;
use std::io::{self, Write};
use std::process::{ChildStdin, Command, Output, Stdio};

/// A subprocess invocation: program, arguments and optional standard input.
#[derive(Debug, Clone, Copy)]
pub struct ProcessRequest<'a> {
    pub program: &'a OsStr,
    pub args: &'a [&'a str],
    /// Bytes written to the child's stdin, which is then closed. `None`
    /// attaches stdin to the null device.
    pub stdin: Option<&'a [u8]>,
}

impl<'a> ProcessRequest<'a> {
    pub fn new<P: AsRef<OsStr> + ?Sized>(program: &'a P, args: &'a [&'a str]) -> Self {
        Self {
            program: program.as_ref(),
            args,
            stdin: None,
        }
    }

    pub fn with_stdin(mut self, input: &'a [u8]) -> Self {
        self.stdin = Some(input);
        self
    }
}

/// Everything a finished subprocess produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessOutput {
    /// `None` when the process was terminated by a signal.
    pub exit_code: Option<i32>,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

impl ProcessOutput {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }

    pub fn stdout_lossy(&self) -> String {
        String::from_utf8_lossy(&self.stdout).into_owned()
    }

    /// Standard output followed by standard error, as one string.
    pub fn combined(&self) -> String {
        let mut merged = String::from_utf8_lossy(&self.stdout).into_owned();
        if !self.stderr.is_empty() {
            merged.push_str(&String::from_utf8_lossy(&self.stderr));
        }
        merged
    }
}

/// Runs a subprocess to completion.
pub trait ProcessRunner {
    /// Spawn, feed stdin, collect all output and wait for exit.
    ///
    /// An `Err` means the process could not be launched or its pipes failed;
    /// a non-zero exit is reported through [`ProcessOutput::exit_code`].
    fn run(&self, request: &ProcessRequest<'_>) -> io::Result<ProcessOutput>;
}

impl ProcessRunner for SystemHost {
    fn run(&self, request: &ProcessRequest<'_>) -> io::Result<ProcessOutput> {
        debug!("Running {:?} with args: {:?}", request.program, request.args);

        let mut child = Command::new(request.program)
            .args(request.args)
            .stdin(if request.stdin.is_some() {
                Stdio::piped()
            } else {
                Stdio::null()
            })
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()?;

        let stdin = child.stdin.take();

        // stdin is fed from a separate thread so a child that fills its
        // stdout pipe before draining stdin cannot deadlock us.
        let output = std::thread::scope(|scope| -> io::Result<Output> {
            let writer = match (stdin, request.stdin) {
                (Some(pipe), Some(input)) => Some(scope.spawn(move || write_input(pipe, input))),
                _ => None,
            };

            let output = child.wait_with_output();

            if let Some(writer) = writer {
                writer
                    .join()
                    .map_err(|_| io::Error::other("stdin writer thread panicked"))??;
            }
            output
        })?;

        Ok(ProcessOutput {
            exit_code: output.status.code(),
            stdout: output.stdout,
            stderr: output.stderr,
        })
    }
}

/// Write all of `input` and close the pipe.
fn write_input(mut pipe: ChildStdin, input: &[u8]) -> io::Result<()> {
    match pipe.write_all(input) {
        // The tool may exit without reading everything; its output still counts.
        Err(err) if err.kind() == io::ErrorKind::BrokenPipe => {
            debug!("Child closed stdin early: {}", err);
            Ok(())
        }
        other => other,
    }
}
