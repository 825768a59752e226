//! Background notification log.
//!
//! Handlers enqueue log lines fire-and-forget; one spawned writer task owns
//! the file and appends entries in enqueue order, after the response to the
//! originating request has already gone out. Callers get no completion or
//! failure signal, and there is no retry: a failed append is logged by the
//! writer and otherwise dropped.

use std::path::{Path, PathBuf};

use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Cloneable handle to the notification log writer task.
#[derive(Debug, Clone)]
pub struct NotificationLog {
    tx: mpsc::UnboundedSender<String>,
}

impl NotificationLog {
    /// Spawn the writer task appending to the file at `path`.
    ///
    /// The task exits once every handle has been dropped and the queue is
    /// drained; the returned `JoinHandle` can be awaited to observe that.
    pub fn spawn(path: impl Into<PathBuf>) -> (Self, JoinHandle<()>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let handle = tokio::spawn(writer_task(path.into(), rx));
        (Self { tx }, handle)
    }

    /// Enqueue one log line. Never blocks, never fails the caller.
    pub fn append(&self, line: impl Into<String>) {
        let mut line = line.into();
        if !line.ends_with('\n') {
            line.push('\n');
        }
        if self.tx.send(line).is_err() {
            tracing::warn!("notification log writer is gone; entry dropped");
        }
    }
}

async fn writer_task(path: PathBuf, mut rx: mpsc::UnboundedReceiver<String>) {
    while let Some(line) = rx.recv().await {
        if let Err(e) = append_line(&path, &line).await {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "failed to append notification log entry"
            );
        }
    }
}

async fn append_line(path: &Path, line: &str) -> std::io::Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .await?;
    file.write_all(line.as_bytes()).await
}
