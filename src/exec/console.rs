// src/exec/console.rs

//! Shared console writer.
//!
//! Relayed output, the detach notice and the final report all go through one
//! [`Console`] so that writes from different tasks never interleave inside a
//! chunk or a line.

use std::io;
use std::sync::Arc;

use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::sync::Mutex;

type Sink = Box<dyn AsyncWrite + Send + Unpin>;

/// Cloneable handle to the console sink.
#[derive(Clone)]
pub struct Console {
    sink: Arc<Mutex<Sink>>,
}

impl Console {
    /// Console backed by the process's standard output.
    pub fn stdout() -> Self {
        Self::new(tokio::io::stdout())
    }

    /// Console backed by an arbitrary async writer.
    pub fn new<W>(writer: W) -> Self
    where
        W: AsyncWrite + Send + Unpin + 'static,
    {
        Self {
            sink: Arc::new(Mutex::new(Box::new(writer))),
        }
    }

    /// Write `bytes` verbatim and flush, so live output is not held back.
    pub async fn write_all(&self, bytes: &[u8]) -> io::Result<()> {
        let mut sink = self.sink.lock().await;
        sink.write_all(bytes).await?;
        sink.flush().await
    }

    /// Write `text` followed by a newline.
    pub async fn line(&self, text: &str) -> io::Result<()> {
        let mut sink = self.sink.lock().await;
        sink.write_all(text.as_bytes()).await?;
        sink.write_all(b"\n").await?;
        sink.flush().await
    }
}

impl std::fmt::Debug for Console {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Console").finish_non_exhaustive()
    }
}
