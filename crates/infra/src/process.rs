// crates/infra/src/process.rs
//! Blocking subprocess execution with an optional timeout.
//!
//! The child is owned by a guard that kills and reaps it on drop, so no
//! process outlives the call on any exit path. Both pipes are drained on
//! reader threads while waiting; a tool writing more than a pipe buffer
//! cannot stall.

use std::{
    ffi::{OsStr, OsString},
    fmt,
    io::{self, Read},
    path::{Path, PathBuf},
    process::{Child, Command, ExitStatus, Stdio},
    thread::{self, JoinHandle},
    time::{Duration, Instant},
};

use log::{debug, trace, warn};
use metaextract_shared_kernel::{ToolError, ToolResult};

const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Program, arguments and time limit of one invocation.
#[derive(Debug, Clone)]
pub struct CommandSpec {
    program: PathBuf,
    args: Vec<OsString>,
    timeout: Option<Duration>,
}

impl CommandSpec {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self { program: program.into(), args: Vec::new(), timeout: None }
    }

    #[must_use]
    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.args.push(arg.as_ref().to_os_string());
        self
    }

    #[must_use]
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.args.extend(args.into_iter().map(|a| a.as_ref().to_os_string()));
        self
    }

    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    pub fn arguments(&self) -> &[OsString] {
        &self.args
    }

    pub fn time_limit(&self) -> Option<Duration> {
        self.timeout
    }

    /// Program as shown in errors and logs.
    pub fn program_name(&self) -> String {
        self.program.to_string_lossy().into_owned()
    }

    /// Spawn, wait (bounded by the timeout when set) and capture both streams.
    pub fn run(&self) -> ToolResult<ProcessOutput> {
        let program = self.program_name();
        debug!("running {self}");

        let child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| ToolError::Spawn { program: program.clone(), source })?;

        let mut guard = ChildGuard::new(child);
        let stdout = drain(guard.child.stdout.take());
        let stderr = drain(guard.child.stderr.take());

        let io_error = |source| ToolError::Io { program: self.program_name(), source };
        let status = match self.timeout {
            Some(limit) => match wait_with_deadline(&mut guard, limit).map_err(io_error)? {
                Some(status) => status,
                None => {
                    // Readers are left detached: a grandchild may still hold the pipes.
                    warn!("{program} killed after exceeding {limit:?}");
                    return Err(ToolError::Timeout { program, timeout: limit });
                }
            },
            None => guard.wait().map_err(io_error)?,
        };

        let stdout = collect(stdout).map_err(io_error)?;
        let stderr = collect(stderr).map_err(io_error)?;
        trace!("{program} exited with {status}: {} bytes stdout, {} bytes stderr", stdout.len(), stderr.len());

        Ok(ProcessOutput { program, status, stdout, stderr })
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.display())?;
        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}

/// Captured result of a finished process.
#[derive(Debug)]
pub struct ProcessOutput {
    pub program: String,
    pub status: ExitStatus,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

impl ProcessOutput {
    pub fn success(&self) -> bool {
        self.status.success()
    }

    pub fn stdout_lossy(&self) -> String {
        String::from_utf8_lossy(&self.stdout).into_owned()
    }

    pub fn stderr_lossy(&self) -> String {
        String::from_utf8_lossy(&self.stderr).trim().to_string()
    }

    /// Turn a non-zero exit into `ToolError::ExitStatus`.
    pub fn into_checked(self) -> ToolResult<Self> {
        if self.success() {
            Ok(self)
        } else {
            Err(self.exit_error())
        }
    }

    pub fn exit_error(&self) -> ToolError {
        ToolError::ExitStatus {
            program: self.program.clone(),
            code: self.status.code(),
            stderr: self.stderr_lossy(),
        }
    }
}

struct ChildGuard {
    child: Child,
    reaped: bool,
}

impl ChildGuard {
    fn new(child: Child) -> Self {
        Self { child, reaped: false }
    }

    fn wait(&mut self) -> io::Result<ExitStatus> {
        let status = self.child.wait()?;
        self.reaped = true;
        Ok(status)
    }

    fn try_wait(&mut self) -> io::Result<Option<ExitStatus>> {
        let status = self.child.try_wait()?;
        self.reaped = status.is_some();
        Ok(status)
    }

    fn kill(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
        self.reaped = true;
    }
}

impl Drop for ChildGuard {
    fn drop(&mut self) {
        if !self.reaped {
            self.kill();
        }
    }
}

/// `Ok(None)` means the deadline passed and the child was killed.
fn wait_with_deadline(guard: &mut ChildGuard, limit: Duration) -> io::Result<Option<ExitStatus>> {
    let start = Instant::now();
    loop {
        if let Some(status) = guard.try_wait()? {
            return Ok(Some(status));
        }
        if start.elapsed() >= limit {
            guard.kill();
            return Ok(None);
        }
        thread::sleep(POLL_INTERVAL);
    }
}

fn drain<R>(pipe: Option<R>) -> JoinHandle<io::Result<Vec<u8>>>
where
    R: Read + Send + 'static,
{
    thread::spawn(move || {
        let mut buf = Vec::new();
        if let Some(mut pipe) = pipe {
            pipe.read_to_end(&mut buf)?;
        }
        Ok(buf)
    })
}

fn collect(handle: JoinHandle<io::Result<Vec<u8>>>) -> io::Result<Vec<u8>> {
    handle.join().unwrap_or_else(|_| Err(io::Error::other("output reader panicked")))
}
