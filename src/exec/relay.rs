// src/exec/relay.rs

//! Output relay: streams the command's stdout to the console and/or the
//! retained buffer.
//!
//! Each chunk is routed as a whole, based on the detach state observed right
//! after the read:
//!
//! | detached | report all | console | retained |
//! |----------|------------|---------|----------|
//! | no       | no         | yes     | no       |
//! | no       | yes        | yes     | yes      |
//! | yes      | either     | no      | yes      |

use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::task::JoinHandle;
use tracing::{debug, trace};

use crate::errors::{LaterError, Result};
use crate::exec::console::Console;
use crate::exec::detach::DetachFlag;

/// What the relay hands back once the stream reaches end-of-stream.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RelayOutput {
    /// Bytes kept for the end-of-run report.
    pub retained: Vec<u8>,
    /// Number of bytes echoed live to the console.
    pub echoed_bytes: u64,
    /// Total number of bytes read from the stream.
    pub total_bytes: u64,
}

/// Routing decision for a single chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub to_console: bool,
    pub to_retained: bool,
}

impl Route {
    pub fn for_chunk(detached: bool, report_all_output: bool) -> Self {
        Self {
            to_console: !detached,
            to_retained: detached || report_all_output,
        }
    }
}

/// Read `reader` to end-of-stream, routing every chunk per [`Route`].
///
/// Any read error other than end-of-stream aborts the relay with
/// [`LaterError::StreamRead`]; a failed console write aborts it with
/// [`LaterError::ConsoleWrite`]. Nothing is retried.
pub async fn relay_output<R>(
    mut reader: R,
    flag: DetachFlag,
    report_all_output: bool,
    console: Console,
    chunk_size: usize,
) -> Result<RelayOutput>
where
    R: AsyncRead + Unpin,
{
    let mut buf = vec![0u8; chunk_size.max(1)];
    let mut out = RelayOutput::default();

    loop {
        let n = reader.read(&mut buf).await.map_err(LaterError::StreamRead)?;
        if n == 0 {
            break;
        }
        let chunk = &buf[..n];
        out.total_bytes += n as u64;

        let route = Route::for_chunk(flag.is_detached(), report_all_output);
        trace!(bytes = n, ?route, "relaying chunk");

        if route.to_retained {
            out.retained.extend_from_slice(chunk);
        }

        if route.to_console {
            console
                .write_all(chunk)
                .await
                .map_err(LaterError::ConsoleWrite)?;
            out.echoed_bytes += n as u64;
        }
    }

    debug!(
        total_bytes = out.total_bytes,
        echoed_bytes = out.echoed_bytes,
        retained_bytes = out.retained.len(),
        "output stream reached end"
    );

    Ok(out)
}

/// Spawn [`relay_output`] on the runtime.
pub fn spawn_relay<R>(
    reader: R,
    flag: DetachFlag,
    report_all_output: bool,
    console: Console,
    chunk_size: usize,
) -> JoinHandle<Result<RelayOutput>>
where
    R: AsyncRead + Unpin + Send + 'static,
{
    tokio::spawn(relay_output(reader, flag, report_all_output, console, chunk_size))
}
