//! WebSocket transport for the chat channel.
//!
//! Provides [`ConnectedChannel`], which moves frames between the runtime and
//! the server. This is a thin layer that only sends and receives text frames;
//! every protocol decision stays in the Sans-IO [`crate::Session`].
//!
//! One reader task and one writer task own the two halves of the socket.
//! Bounded channels bridge them to the runtime and preserve frame order.

use futures::{Sink, SinkExt, Stream, StreamExt};
use talkroom_proto::Frame;
use thiserror::Error;
use tokio::{sync::mpsc, task::JoinHandle};
use tokio_tungstenite::tungstenite::{self, Message};

use crate::Incoming;

const CHANNEL_CAPACITY: usize = 32;

/// Transport errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Connection failed.
    #[error("connection failed: {0}")]
    Connection(String),

    /// Stream error.
    #[error("stream error: {0}")]
    Stream(String),
}

/// Handle to an open chat channel.
///
/// Dropping the handle aborts both tasks. Use [`Self::close`] to let queued
/// frames reach the server first.
pub struct ConnectedChannel {
    to_server: Option<mpsc::Sender<Frame>>,
    from_server: mpsc::Receiver<Frame>,
    reader: JoinHandle<()>,
    writer: Option<JoinHandle<()>>,
}

impl ConnectedChannel {
    /// Queue a frame for the server.
    ///
    /// # Errors
    ///
    /// - `TransportError::Stream` if the channel is closed.
    pub async fn send(&self, frame: Frame) -> Result<(), TransportError> {
        let Some(to_server) = &self.to_server else {
            return Err(TransportError::Stream("channel closed".into()));
        };
        to_server
            .send(frame)
            .await
            .map_err(|_| TransportError::Stream("writer stopped".into()))
    }

    /// Take the next received frame without waiting.
    ///
    /// Returns `None` if nothing is pending and `Incoming::Closed` once the
    /// server side is gone and every received frame has been taken.
    pub fn try_recv(&mut self) -> Option<Incoming> {
        match self.from_server.try_recv() {
            Ok(frame) => Some(Incoming::Frame(frame)),
            Err(mpsc::error::TryRecvError::Empty) => None,
            Err(mpsc::error::TryRecvError::Disconnected) => Some(Incoming::Closed),
        }
    }

    /// Close the channel after flushing queued frames.
    pub async fn close(&mut self) {
        self.to_server = None;
        if let Some(writer) = self.writer.take()
            && let Err(error) = writer.await
        {
            tracing::warn!(%error, "writer task failed");
        }
        self.reader.abort();
    }
}

impl Drop for ConnectedChannel {
    fn drop(&mut self) {
        self.reader.abort();
        if let Some(writer) = &self.writer {
            writer.abort();
        }
    }
}

/// Open a chat channel to a `ws://` URL.
///
/// # Errors
///
/// - `TransportError::Connection` if the WebSocket handshake fails.
pub async fn connect(url: &str) -> Result<ConnectedChannel, TransportError> {
    let (socket, _response) = tokio_tungstenite::connect_async(url)
        .await
        .map_err(|e| TransportError::Connection(format!("{url}: {e}")))?;

    let (sink, stream) = socket.split();
    let (to_server_tx, to_server_rx) = mpsc::channel::<Frame>(CHANNEL_CAPACITY);
    let (from_server_tx, from_server_rx) = mpsc::channel::<Frame>(CHANNEL_CAPACITY);

    let reader = tokio::spawn(read_frames(stream, from_server_tx));
    let writer = tokio::spawn(write_frames(sink, to_server_rx));

    Ok(ConnectedChannel {
        to_server: Some(to_server_tx),
        from_server: from_server_rx,
        reader,
        writer: Some(writer),
    })
}

/// Forward text frames from the socket until it closes.
async fn read_frames<S>(mut stream: S, from_server: mpsc::Sender<Frame>)
where
    S: Stream<Item = Result<Message, tungstenite::Error>> + Unpin,
{
    while let Some(item) = stream.next().await {
        match item {
            Ok(Message::Text(text)) => {
                if from_server.send(Frame::new(text.as_str())).await.is_err() {
                    break;
                }
            },
            Ok(Message::Close(reason)) => {
                tracing::debug!(?reason, "server closed the channel");
                break;
            },
            Ok(Message::Binary(bytes)) => {
                tracing::warn!(len = bytes.len(), "ignoring binary frame");
            },
            Ok(_) => {},
            Err(error) => {
                tracing::warn!(%error, "channel read failed");
                break;
            },
        }
    }
}

/// Write queued frames to the socket, then close it.
async fn write_frames<S>(mut sink: S, mut to_server: mpsc::Receiver<Frame>)
where
    S: Sink<Message, Error = tungstenite::Error> + Unpin,
{
    while let Some(frame) = to_server.recv().await {
        if let Err(error) = sink.send(Message::text(frame.into_string())).await {
            tracing::warn!(%error, "channel write failed");
            return;
        }
    }

    if let Err(error) = sink.close().await {
        tracing::debug!(%error, "close handshake failed");
    }
}
