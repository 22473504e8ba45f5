use crate::core::types::{ExecResult, RedirectResult, TimedResult, Timeout};
use crate::error::{AdbxError, Result};
use crate::process::decode::decode_output;
use crate::process::Executor;
use async_trait::async_trait;
use log::*;
use std::fs::File;
use std::process::{ExitStatus, Stdio};
use std::time::Duration;
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::{Child, Command};
use tokio::task::JoinHandle;

/// How long to wait for the output pipes to drain after a forced kill
const TEARDOWN_GRACE: Duration = Duration::from_millis(500);

/// Reported for a timed-out run whose child itself exited cleanly while a
/// descendant kept the pipes open. Same value as a SIGKILL death.
const TIMED_OUT_STATUS: i32 = -9;

/// Runs bridge invocations as real child processes
#[derive(Debug, Clone)]
pub struct ProcessExecutor {
    kill_tree: bool,
}

impl Default for ProcessExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessExecutor {
    pub fn new() -> Self {
        Self { kill_tree: true }
    }

    /// Whether a timeout kills the child's whole process group or only the child
    pub fn with_kill_tree(mut self, kill_tree: bool) -> Self {
        self.kill_tree = kill_tree;
        self
    }

    fn command(argv: &[String]) -> Command {
        let mut cmd = Command::new(&argv[0]);
        cmd.args(&argv[1..]).stdin(Stdio::null()).kill_on_drop(true);
        cmd
    }

    /// Only a child with an armed timeout leaves the terminal's process
    /// group; otherwise Ctrl-C would no longer reach it.
    pub(crate) fn isolates_group(&self, timeout: Timeout) -> bool {
        cfg!(unix) && self.kill_tree && timeout.duration().is_some()
    }

    /// `pid` is taken before waiting: a reaped child no longer reports it,
    /// but its process group lives on while descendants hold it.
    async fn terminate(&self, child: &mut Child, pid: Option<u32>, group: bool) {
        #[cfg(unix)]
        if group {
            if let Some(pid) = pid {
                // The child leads its own process group (pgid == pid).
                let ret = unsafe { libc::kill(-(pid as i32), libc::SIGKILL) };
                if ret == 0 {
                    return;
                }
                debug!(
                    "Killing process group {} failed: {}",
                    pid,
                    std::io::Error::last_os_error()
                );
            }
        }
        #[cfg(not(unix))]
        let _ = (pid, group);

        if let Err(e) = child.start_kill() {
            debug!("Killing child failed: {}", e);
        }
    }
}

#[async_trait]
impl Executor for ProcessExecutor {
    async fn run(&self, argv: &[String]) -> Result<ExecResult> {
        let argv = prepare(argv)?;
        info!("Executing {}", argv.join(" "));

        let output = Self::command(&argv)
            .output()
            .await
            .map_err(|e| launch_error(&argv[0], e))?;

        let result = normalize(status_code(output.status), &output.stdout, &output.stderr);
        debug!("Finished with status {}", result.status);
        Ok(result)
    }

    async fn run_with_timeout(&self, argv: &[String], timeout: Timeout) -> Result<TimedResult> {
        let argv = prepare(argv)?;
        info!("Executing {} (timeout: {:?})", argv.join(" "), timeout);

        let group = self.isolates_group(timeout);
        let mut cmd = Self::command(&argv);
        cmd.stdout(Stdio::piped()).stderr(Stdio::piped());
        #[cfg(unix)]
        if group {
            cmd.process_group(0);
        }

        let mut child = cmd.spawn().map_err(|e| launch_error(&argv[0], e))?;
        let pid = child.id();
        let mut stdout_task = spawn_reader(child.stdout.take());
        let mut stderr_task = spawn_reader(child.stderr.take());

        // The deadline covers draining the pipes too: a descendant that
        // outlives the child keeps them open.
        let mut stdout = None;
        let mut stderr = None;
        let finished = async {
            let status = child.wait().await?;
            stdout = Some((&mut stdout_task).await.unwrap_or_default());
            stderr = Some((&mut stderr_task).await.unwrap_or_default());
            Ok::<_, AdbxError>(status)
        };

        let outcome = match timeout.duration() {
            None => Some(finished.await?),
            Some(limit) => match tokio::time::timeout(limit, finished).await {
                Ok(result) => Some(result?),
                Err(_) => None,
            },
        };

        let (status, timed_out) = match outcome {
            Some(status) => (status_code(status), false),
            None => {
                warn!("{} exceeded {:?}, killing it", argv[0], timeout);
                self.terminate(&mut child, pid, group).await;
                match status_code(child.wait().await?) {
                    0 => (TIMED_OUT_STATUS, true),
                    code => (code, true),
                }
            }
        };

        // a reader that already finished must not be polled again
        let stdout = match stdout {
            Some(bytes) => bytes,
            None => drain(stdout_task).await,
        };
        let stderr = match stderr {
            Some(bytes) => bytes,
            None => drain(stderr_task).await,
        };

        Ok(TimedResult {
            status,
            stdout: decode_output(&stdout),
            stderr: decode_output(&stderr),
            timed_out,
        })
    }

    async fn run_to_file(&self, argv: &[String], file: File) -> Result<RedirectResult> {
        let argv = prepare(argv)?;
        info!("Executing {} (stdout to file)", argv.join(" "));

        let sink = file.try_clone()?;
        let child = Self::command(&argv)
            .stdout(Stdio::from(sink))
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| launch_error(&argv[0], e))?;
        let output = child.wait_with_output().await?;
        let status = status_code(output.status);

        if status == 0 {
            drop(file);
            Ok(RedirectResult::Written { status })
        } else {
            Ok(RedirectResult::Failed {
                status,
                stderr: decode_output(&output.stderr),
                file,
            })
        }
    }
}

/// Drop empty tokens so optional slots never become empty arguments
pub(crate) fn prepare(argv: &[String]) -> Result<Vec<String>> {
    let argv: Vec<String> = argv.iter().filter(|a| !a.is_empty()).cloned().collect();
    if argv.is_empty() {
        return Err(AdbxError::Other("Empty command line".to_string()));
    }
    Ok(argv)
}

/// Pick the payload for a finished non-timed invocation.
///
/// Some bridge sub-commands (push, install, ...) exit 0 yet print their
/// confirmation on stderr only, so an empty stdout on success falls back to
/// stderr.
pub(crate) fn normalize(status: i32, stdout: &[u8], stderr: &[u8]) -> ExecResult {
    if status != 0 {
        return ExecResult::new(status, decode_output(stderr));
    }

    let out = decode_output(stdout);
    if out.is_empty() {
        ExecResult::new(0, decode_output(stderr))
    } else {
        ExecResult::new(0, out)
    }
}

/// Exit code, or the negated signal number when the child was killed
pub(crate) fn status_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return -signal;
        }
    }
    -1
}

fn launch_error(program: &str, source: std::io::Error) -> AdbxError {
    AdbxError::Launch {
        program: program.to_string(),
        source,
    }
}

fn spawn_reader<R>(reader: Option<R>) -> JoinHandle<Vec<u8>>
where
    R: AsyncRead + Unpin + Send + 'static,
{
    tokio::spawn(async move {
        let mut buf = Vec::new();
        if let Some(mut reader) = reader {
            if let Err(e) = reader.read_to_end(&mut buf).await {
                debug!("Reading child output failed: {}", e);
            }
        }
        buf
    })
}

/// After a kill, a surviving grandchild may still hold the pipe open, so the
/// wait for EOF is bounded.
async fn drain(task: JoinHandle<Vec<u8>>) -> Vec<u8> {
    let abort = task.abort_handle();
    match tokio::time::timeout(TEARDOWN_GRACE, task).await {
        Ok(joined) => joined.unwrap_or_default(),
        Err(_) => {
            debug!("Output pipe still open after kill, dropping it");
            abort.abort();
            Vec::new()
        }
    }
}
