//! # Process Invocation Module / 进程调用模块
//!
//! Owns every interaction with the OS process boundary: spawning the
//! interpreter against a source file, capturing its output streams, enforcing
//! the wall-clock timeout and classifying failures.
//!
//! 负责与操作系统进程边界的所有交互：针对源文件启动解释器、捕获其输出流、
//! 强制执行挂钟超时并对失败进行分类。

use std::future::Future;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{ExitStatus, Stdio};
use std::time::Duration;
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::task::JoinHandle;

use crate::core::models::{ExecutionOutcome, FailureReason, InvocationFailure};
use crate::core::value::Value;

/// Wall-clock limit for a single invocation unless configured otherwise.
/// 单次调用的默认挂钟时间限制。
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Runs one source file with positional arguments and reports the outcome.
///
/// This is the seam between case execution and the process boundary.
/// [`ProcessInvoker`] is the real implementation.
///
/// 使用位置参数运行一个源文件并报告结果。这是用例执行与进程边界之间的接缝。
pub trait Invoke {
    fn invoke(&self, source: &Path, args: &[Value]) -> impl Future<Output = ExecutionOutcome>;
}

/// Invokes the interpreter binary as a subprocess.
///
/// Relative source paths are resolved against the injected project root, never
/// against the current working directory.
///
/// 以子进程方式调用解释器二进制文件。相对源路径基于注入的项目根目录解析，而不是当前工作目录。
#[derive(Debug, Clone)]
pub struct ProcessInvoker {
    binary: PathBuf,
    project_root: PathBuf,
    timeout: Duration,
}

impl ProcessInvoker {
    pub fn new(binary: impl Into<PathBuf>, project_root: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
            project_root: project_root.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn binary(&self) -> &Path {
        &self.binary
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Anchors a source path at the project root.
    /// 将源路径锚定到项目根目录。
    pub fn resolve_source(&self, source: &Path) -> PathBuf {
        if source.is_absolute() {
            source.to_path_buf()
        } else {
            self.project_root.join(source)
        }
    }
}

impl Invoke for ProcessInvoker {
    async fn invoke(&self, source: &Path, args: &[Value]) -> ExecutionOutcome {
        let mut cmd = tokio::process::Command::new(&self.binary);
        cmd.arg(self.resolve_source(source))
            .args(args.iter().map(Value::to_string))
            .stdin(Stdio::null())
            .kill_on_drop(true);

        match spawn_and_capture(cmd, self.timeout).await {
            Ok(Captured::Exited {
                status,
                stdout,
                stderr,
            }) => classify_exit(status, &stdout, &stderr),
            Ok(Captured::TimedOut) => ExecutionOutcome::Failed(InvocationFailure::timeout()),
            Ok(Captured::StreamError { stream, error }) => stream_failure(stream, &error),
            Err(e) => ExecutionOutcome::Failed(InvocationFailure::new(
                FailureReason::Spawn,
                e.to_string(),
            )),
        }
    }
}

/// Maps a finished process to an outcome.
///
/// Exit 0 yields the trimmed stdout. Any other exit yields the trimmed stderr,
/// or a message naming the exit code when stderr is empty.
///
/// 将已结束的进程映射为结果。退出码 0 产生去除空白的 stdout；
/// 其他退出产生去除空白的 stderr，若 stderr 为空则产生包含退出码的消息。
pub fn classify_exit(status: ExitStatus, stdout: &[u8], stderr: &[u8]) -> ExecutionOutcome {
    if status.success() {
        return ExecutionOutcome::Output(String::from_utf8_lossy(stdout).trim().to_string());
    }

    let stderr = String::from_utf8_lossy(stderr);
    let message = match (stderr.trim(), status.code()) {
        (text, _) if !text.is_empty() => text.to_string(),
        (_, Some(code)) => format!("Exit code {code}"),
        (_, None) => format!("Process terminated: {status}"),
    };
    ExecutionOutcome::Failed(InvocationFailure::new(FailureReason::NonZeroExit, message))
}

/// Maps an output stream that could not be read to the end.
///
/// The captured text would be truncated, so the case fails with the read error
/// instead of comparing partial output.
///
/// 将无法完整读取的输出流映射为失败。捕获的文本会被截断，因此用例以读取错误失败，而不是比较不完整的输出。
pub fn stream_failure(stream: &str, error: &io::Error) -> ExecutionOutcome {
    ExecutionOutcome::Failed(InvocationFailure::new(
        FailureReason::Capture,
        format!("Failed to read {stream}: {error}"),
    ))
}

/// What [`spawn_and_capture`] observed.
#[derive(Debug)]
pub enum Captured {
    /// The process exited within the deadline and both streams were drained.
    Exited {
        status: ExitStatus,
        stdout: Vec<u8>,
        stderr: Vec<u8>,
    },
    /// The deadline passed. The process group has been killed and the child reaped.
    TimedOut,
    /// The process exited but one of its streams failed mid-read.
    StreamError {
        stream: &'static str,
        error: io::Error,
    },
}

/// Spawns a command, captures its stdout and stderr separately, and waits for
/// it under a deadline.
///
/// The output streams are drained concurrently by spawned tasks so that a child
/// writing a lot to one stream cannot block on a full pipe. The deadline covers
/// both the process exit and the draining of the streams.
///
/// On unix the child leads a new process group. On expiry the whole group is
/// killed, so helpers the child started do not outlive it. The child itself is
/// then awaited and the reader tasks are aborted.
///
/// # Arguments
/// * `cmd` - The `tokio::process::Command` to execute.
/// * `timeout` - The wall-clock limit.
///
/// # Returns
/// `Err` only when the process cannot be spawned or waited on.
///
/// 派生一个命令，分别捕获其 stdout 和 stderr，并在截止时间内等待其结束。
/// 输出流由派生的任务并发读取，截止时间同时覆盖进程退出和输出流读取。
/// 在 unix 上子进程会成为新进程组的组长，超时后整个进程组被终止，子进程被回收，读取任务被中止。
pub async fn spawn_and_capture(
    mut cmd: tokio::process::Command,
    timeout: Duration,
) -> io::Result<Captured> {
    #[cfg(unix)]
    cmd.process_group(0);

    let mut child = cmd
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;
    let pid = child.id();

    let stdout = child
        .stdout
        .take()
        .ok_or_else(|| io::Error::other("failed to capture stdout"))?;
    let stderr = child
        .stderr
        .take()
        .ok_or_else(|| io::Error::other("failed to capture stderr"))?;

    let mut stdout_handle = tokio::spawn(drain(stdout));
    let mut stderr_handle = tokio::spawn(drain(stderr));

    let finished = tokio::time::timeout(timeout, async {
        let status = child.wait().await?;
        let stdout = join_drain(&mut stdout_handle).await;
        let stderr = join_drain(&mut stderr_handle).await;
        Ok::<_, io::Error>((status, stdout, stderr))
    })
    .await;

    match finished {
        Ok(result) => {
            let (status, stdout, stderr) = result?;
            let stdout = match stdout {
                Ok(buf) => buf,
                Err(error) => return Ok(Captured::StreamError { stream: "stdout", error }),
            };
            let stderr = match stderr {
                Ok(buf) => buf,
                Err(error) => return Ok(Captured::StreamError { stream: "stderr", error }),
            };
            Ok(Captured::Exited {
                status,
                stdout,
                stderr,
            })
        }
        Err(_) => {
            #[cfg(unix)]
            if let Some(pid) = pid {
                kill_process_group(pid);
            }
            #[cfg(not(unix))]
            let _ = pid;
            // `kill` also waits, so the child is reaped here. InvalidInput means it
            // had already exited and only its inherited pipes were still open.
            if let Err(e) = child.kill().await {
                if e.kind() != io::ErrorKind::InvalidInput {
                    eprintln!("Failed to kill timed-out process: {e}");
                }
            }
            stdout_handle.abort();
            stderr_handle.abort();
            Ok(Captured::TimedOut)
        }
    }
}

/// Sends `SIGKILL` to the process group led by `pid`.
/// A group that is already gone is not an error.
#[cfg(unix)]
fn kill_process_group(pid: u32) {
    let Ok(pgid) = libc::pid_t::try_from(pid) else {
        return;
    };
    // SAFETY: `killpg` only sends a signal and reads no memory of ours.
    if unsafe { libc::killpg(pgid, libc::SIGKILL) } != 0 {
        let e = io::Error::last_os_error();
        if e.raw_os_error() != Some(libc::ESRCH) {
            eprintln!("Failed to kill process group {pid}: {e}");
        }
    }
}

async fn drain<R: AsyncRead + Unpin>(mut reader: R) -> io::Result<Vec<u8>> {
    let mut buf = Vec::new();
    reader.read_to_end(&mut buf).await?;
    Ok(buf)
}

async fn join_drain(handle: &mut JoinHandle<io::Result<Vec<u8>>>) -> io::Result<Vec<u8>> {
    handle.await.unwrap_or_else(|e| Err(io::Error::other(e)))
}
