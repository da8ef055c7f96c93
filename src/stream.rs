//! Streaming JSON request bodies.
//!
//! A template or watch definition is serialised by a producer running on a
//! blocking worker, which writes into a bounded channel. The consumer issues
//! the HTTP `PUT` with a body that reads from the other end of that channel,
//! so the encoded document is never held in memory as a whole. Both halves are
//! joined before the caller moves on, and the first error from either side
//! lands in a single-slot error channel that is drained after the join.

use crate::{
    client::{ElasticClient, Expect},
    error::AdminError,
};
use anyhow::{anyhow, Result};
use bytes::Bytes;
use reqwest::{Body, Method};
use serde::Serialize;
use std::io::{self, BufWriter, Write};
use tokio::{sync::mpsc, task::JoinHandle};
use tokio_stream::wrappers::ReceiverStream;

const CHUNK_SIZE: usize = 8 * 1024;

type Chunk = io::Result<Bytes>;

/// `io::Write` end of the pipe; every write blocks until the request body takes the chunk.
struct ChannelWriter {
    tx: mpsc::Sender<Chunk>,
}

impl Write for ChannelWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }
        self.tx
            .blocking_send(Ok(Bytes::copy_from_slice(buf)))
            .map_err(|_| io::Error::new(io::ErrorKind::BrokenPipe, "request body closed"))?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Serialise `body` into `tx` on a blocking worker.
///
/// The sender is dropped when serialisation ends, which terminates the body
/// stream. A failure caused by the reader going away is not reported since the
/// consumer holds the real cause.
fn spawn_producer<T>(
    body: T,
    tx: mpsc::Sender<Chunk>,
    errors: mpsc::Sender<anyhow::Error>,
) -> JoinHandle<()>
where
    T: Serialize + Send + 'static,
{
    tokio::task::spawn_blocking(move || {
        let mut writer = BufWriter::with_capacity(CHUNK_SIZE, ChannelWriter { tx: tx.clone() });
        let result = serde_json::to_writer(&mut writer, &body)
            .map_err(io::Error::from)
            .and_then(|_| writer.flush());

        match result {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
                tracing::debug!("request body reader closed before the producer finished");
            }
            Err(e) => {
                // discard the partial buffer instead of flushing it on drop
                drop(writer.into_parts());
                let message = e.to_string();
                let _ = errors.try_send(AdminError::BodyProducer(message.clone()).into());
                // abort the in-flight request rather than let it send a truncated document
                let _ = tx.blocking_send(Err(io::Error::new(e.kind(), message)));
            }
        }
    })
}

/// `PUT` a JSON document at `path`, streaming its serialisation into the request.
///
/// Any status below 400 counts as success.
pub async fn put_json<T>(client: &ElasticClient, path: &str, body: T) -> Result<()>
where
    T: Serialize + Send + 'static,
{
    let (chunk_tx, chunk_rx) = mpsc::channel::<Chunk>(1);
    let (err_tx, mut err_rx) = mpsc::channel::<anyhow::Error>(1);

    let producer = spawn_producer(body, chunk_tx, err_tx.clone());

    let consumer = async {
        let body = Body::wrap_stream(ReceiverStream::new(chunk_rx));
        if let Err(e) = client
            .send(Method::PUT, path, Some(body), Expect::BelowClientError)
            .await
        {
            let _ = err_tx.try_send(e);
        }
    };

    let (joined, ()) = tokio::join!(producer, consumer);
    if let Err(e) = joined {
        return Err(anyhow!("body producer did not complete: {e}"));
    }

    match err_rx.try_recv() {
        Ok(err) => Err(err),
        Err(_) => Ok(()),
    }
}
