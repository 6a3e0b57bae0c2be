//! WebSocket connection lifecycle.
//!
//! Runs the read/write loop for a single connection: creates the subscriber
//! handle, registers it once open, forwards queued broadcast frames to the
//! socket, and unregisters on close or error.

use std::sync::Arc;

use axum::extract::ws::{Message, WebSocket};
use futures_util::{SinkExt, StreamExt};
use tokio::sync::mpsc;

use crate::domain::{ConnectionState, Subscriber, SubscriberRegistry};

/// Runs the read/write loop for a single WebSocket connection.
///
/// The subscriber's outbound frames arrive on a per-connection queue fed by
/// the dispatcher, so a slow peer only ever stalls its own socket writes.
/// Inbound frames carry no commands and are drained to detect closure.
pub async fn run_connection(socket: WebSocket, registry: Arc<SubscriberRegistry>) {
    let (mut ws_tx, mut ws_rx) = socket.split();
    let (outbound_tx, mut outbound_rx) = mpsc::unbounded_channel::<String>();

    let subscriber = Subscriber::new(outbound_tx);
    let id = subscriber.id();
    subscriber.transition(ConnectionState::Open);
    registry.register(subscriber.clone()).await;

    loop {
        tokio::select! {
            // Broadcast frame queued by the dispatcher
            frame = outbound_rx.recv() => {
                match frame {
                    Some(text) => {
                        if ws_tx.send(Message::text(text)).await.is_err() {
                            break;
                        }
                    }
                    None => break,
                }
            }
            // Incoming message from client
            msg = ws_rx.next() => {
                match msg {
                    Some(Ok(Message::Close(_))) | Some(Err(_)) | None => break,
                    // No client commands are defined; ignore the frame.
                    Some(Ok(_)) => {}
                }
            }
        }
    }

    subscriber.transition(ConnectionState::Closing);
    registry.unregister(id).await;
    tracing::debug!(subscriber_id = %id, "ws connection closed");
}
