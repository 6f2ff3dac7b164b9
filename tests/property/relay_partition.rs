use std::collections::VecDeque;
use std::pin::Pin;
use std::task::{Context, Poll};

use proptest::prelude::*;
use tokio::io::{AsyncRead, ReadBuf};

use later::exec::{DetachFlag, relay_output};
use later_test_utils::CaptureSink;

/// Serves one scripted chunk per read and flips the flag right before the
/// chunk at index `detach_at` is handed out.
struct ScriptedReader {
    chunks: VecDeque<Vec<u8>>,
    served: usize,
    detach_at: usize,
    flag: DetachFlag,
}

impl ScriptedReader {
    fn new(chunks: Vec<Vec<u8>>, detach_at: usize, flag: DetachFlag) -> Self {
        Self {
            chunks: chunks.into(),
            served: 0,
            detach_at,
            flag,
        }
    }
}

impl AsyncRead for ScriptedReader {
    fn poll_read(
        mut self: Pin<&mut Self>,
        _cx: &mut Context<'_>,
        buf: &mut ReadBuf<'_>,
    ) -> Poll<std::io::Result<()>> {
        let this = &mut *self;
        if this.served == this.detach_at {
            this.flag.detach();
        }
        if let Some(chunk) = this.chunks.pop_front() {
            buf.put_slice(&chunk);
            this.served += 1;
        }
        Poll::Ready(Ok(()))
    }
}

// Chunk lists of up to 12 chunks, each 1..32 bytes, so every chunk fits in
// one 64-byte relay read.
fn chunks_strategy() -> impl Strategy<Value = Vec<Vec<u8>>> {
    proptest::collection::vec(proptest::collection::vec(any::<u8>(), 1..32), 0..12)
}

proptest! {
    /// Every byte read ends up on the console (before detach), in the retained
    /// buffer (after detach, or always with report-all), in order and exactly once.
    #[test]
    fn bytes_are_partitioned_at_the_detach_point(
        chunks in chunks_strategy(),
        detach_at in 0usize..14,
        report_all in any::<bool>(),
    ) {
        let k = detach_at.min(chunks.len());
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();

        let sink = CaptureSink::new();
        let flag = DetachFlag::new();
        let reader = ScriptedReader::new(chunks.clone(), k, flag.clone());
        let out = rt
            .block_on(relay_output(reader, flag, report_all, sink.console(), 64))
            .unwrap();

        let before: Vec<u8> = chunks[..k].concat();
        let after: Vec<u8> = chunks[k..].concat();
        let all: Vec<u8> = chunks.concat();

        prop_assert_eq!(sink.contents(), before.clone());
        if report_all {
            prop_assert_eq!(out.retained, all.clone());
        } else {
            prop_assert_eq!(out.retained, after);
        }
        prop_assert_eq!(out.total_bytes, all.len() as u64);
        prop_assert_eq!(out.echoed_bytes, before.len() as u64);
    }
}
