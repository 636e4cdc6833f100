//! WebSocket session: one persistent connection, both directions of traffic.
//!
//! ## Design
//! - `SessionClient::connect` performs the single connection attempt of the
//!   session; there is no reconnect — once closed, the session stays closed
//! - A spawned handler task exclusively owns the socket and multiplexes
//!   outbound frames (queued by `submit`) with inbound frames
//! - `submit` is fire-and-forget: it never blocks, never errors to the
//!   caller, and drops the frame silently when the session is gone
//! - Inbound frames are opaque text and go straight to the display, each one
//!   fully replacing the previous content

use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

use futures_util::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_tungstenite::tungstenite::Message as WsMessage;
use tokio_tungstenite::{connect_async, MaybeTlsStream, WebSocketStream};
use tracing::{debug, info, warn};

use crate::error::ClientError;
use crate::form::{ResultDisplay, SubmitForm};

type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

// ---------------------------------------------------------------------------
// Session state
// ---------------------------------------------------------------------------

/// Lifecycle of the single connection. `Closed` is absorbing: no transition
/// leads out of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Unconnected,
    Connecting,
    Open,
    Closed,
}

impl SessionState {
    fn as_u8(self) -> u8 {
        match self {
            SessionState::Unconnected => 0,
            SessionState::Connecting => 1,
            SessionState::Open => 2,
            SessionState::Closed => 3,
        }
    }

    fn from_u8(raw: u8) -> Self {
        match raw {
            0 => SessionState::Unconnected,
            1 => SessionState::Connecting,
            2 => SessionState::Open,
            _ => SessionState::Closed,
        }
    }
}

// ---------------------------------------------------------------------------
// Session client
// ---------------------------------------------------------------------------

/// Owns the connection for the lifetime of the process and mediates both
/// directions of traffic.
pub struct SessionClient {
    frame_tx: mpsc::UnboundedSender<String>,
    state: Arc<AtomicU8>,
    _handler: JoinHandle<()>,
}

impl SessionClient {
    /// Connect to the benchmark endpoint and spawn the handler task.
    ///
    /// The session is `Open` when this returns `Ok`. A failed attempt is
    /// terminal — callers get one session per process, no retry.
    pub async fn connect(
        url: &str,
        display: Box<dyn ResultDisplay>,
    ) -> Result<SessionClient, ClientError> {
        let state = Arc::new(AtomicU8::new(SessionState::Connecting.as_u8()));

        let (ws, _) = connect_async(url).await.map_err(|e| ClientError::Connect {
            url: url.to_string(),
            source: e,
        })?;

        state.store(SessionState::Open.as_u8(), Ordering::Release);
        info!(%url, "session ready");

        let (frame_tx, frame_rx) = mpsc::unbounded_channel();
        let handler = tokio::spawn(session_loop(ws, frame_rx, display, state.clone()));

        Ok(SessionClient {
            frame_tx,
            state,
            _handler: handler,
        })
    }

    /// Current lifecycle state.
    pub fn state(&self) -> SessionState {
        SessionState::from_u8(self.state.load(Ordering::Acquire))
    }

    /// Build a query from the current form values and queue it for
    /// transmission.
    ///
    /// Fire-and-forget: the frame is handed to the handler task without an
    /// awaited acknowledgment, and a submit while the session is closed is
    /// dropped without surfacing an error.
    pub fn submit(&self, form: &SubmitForm) {
        let query = form.query();
        debug!(
            votes = query.votes.len(),
            algorithm = %query.algorithm,
            parallelize = query.parallelize,
            "submitting query"
        );
        if let Ok(frame) = serde_json::to_string(&query) {
            if self.frame_tx.send(frame).is_err() {
                debug!("session closed, query dropped");
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Handler loop
// ---------------------------------------------------------------------------

/// Multiplex outbound frames queued by `submit` with inbound frames pushed by
/// the server. Runs until the socket or the client side goes away, then marks
/// the session closed.
async fn session_loop(
    ws: WsStream,
    mut frame_rx: mpsc::UnboundedReceiver<String>,
    mut display: Box<dyn ResultDisplay>,
    state: Arc<AtomicU8>,
) {
    let (mut ws_tx, mut ws_rx) = ws.split();

    loop {
        tokio::select! {
            // Outbound frame queued by submit.
            frame = frame_rx.recv() => {
                let Some(frame) = frame else { break };
                if let Err(e) = ws_tx.send(WsMessage::Text(frame)).await {
                    warn!("send failed: {}", e);
                    break;
                }
            }
            // Inbound frame from the server.
            msg = ws_rx.next() => {
                match msg {
                    Some(Ok(WsMessage::Text(text))) => display.replace(&text),
                    Some(Ok(WsMessage::Close(_))) | None => break,
                    // Binary, ping and pong frames are not part of the
                    // protocol; tungstenite answers pings on its own.
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        warn!("socket error: {}", e);
                        break;
                    }
                }
            }
        }
    }

    state.store(SessionState::Closed.as_u8(), Ordering::Release);
    debug!("session closed");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_round_trips_through_u8() {
        for s in [
            SessionState::Unconnected,
            SessionState::Connecting,
            SessionState::Open,
            SessionState::Closed,
        ] {
            assert_eq!(SessionState::from_u8(s.as_u8()), s);
        }
    }

    #[test]
    fn test_unknown_state_byte_reads_as_closed() {
        assert_eq!(SessionState::from_u8(200), SessionState::Closed);
    }
}
