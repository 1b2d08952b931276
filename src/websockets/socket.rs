use async_trait::async_trait;
use axum::extract::ws::{Message, WebSocket};
use futures::stream::StreamExt;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::mpsc;
use tracing::debug;

use super::connection_manager::ConnectionId;

/// Text-only transport for one chat participant
#[async_trait]
pub trait SocketWrapper: Send {
    async fn send_message(&mut self, message: String) -> Result<(), SocketError>;

    /// Next chat line from the client; `None` once the client has gone away
    async fn receive_message(&mut self) -> Result<Option<String>, SocketError>;

    async fn close(&mut self) -> Result<(), SocketError>;
}

/// Reacts to a chat line typed by `client_id`
#[async_trait]
pub trait MessageHandler: Send + Sync {
    async fn handle_message(&self, client_id: &str, message: String);
}

#[derive(Error, Debug)]
pub enum SocketError {
    #[error("failed to send to client: {0}")]
    SendFailed(String),

    #[error("failed to read from client: {0}")]
    ReceiveFailed(String),
}

#[async_trait]
impl SocketWrapper for WebSocket {
    async fn send_message(&mut self, message: String) -> Result<(), SocketError> {
        self.send(Message::Text(message))
            .await
            .map_err(|e| SocketError::SendFailed(e.to_string()))
    }

    async fn receive_message(&mut self) -> Result<Option<String>, SocketError> {
        // Chat is text only; binary and control frames are dropped
        while let Some(frame) = self.next().await {
            match frame.map_err(|e| SocketError::ReceiveFailed(e.to_string()))? {
                Message::Text(text) => return Ok(Some(text)),
                Message::Close(_) => return Ok(None),
                _ => {}
            }
        }
        Ok(None)
    }

    async fn close(&mut self) -> Result<(), SocketError> {
        self.send(Message::Close(None))
            .await
            .map_err(|e| SocketError::SendFailed(e.to_string()))
    }
}

/// One participant's session: pumps broadcasts out and chat lines in
pub struct Connection {
    connection_id: ConnectionId,
    client_id: String,
    socket: Box<dyn SocketWrapper>,
    outbound_receiver: mpsc::UnboundedReceiver<String>,
    message_handler: Arc<dyn MessageHandler>,
}

impl Connection {
    pub fn new(
        connection_id: ConnectionId,
        client_id: String,
        socket: Box<dyn SocketWrapper>,
        outbound_receiver: mpsc::UnboundedReceiver<String>,
        message_handler: Arc<dyn MessageHandler>,
    ) -> Self {
        Self {
            connection_id,
            client_id,
            socket,
            outbound_receiver,
            message_handler,
        }
    }

    /// Runs until the client leaves or its outbound channel is dropped
    pub async fn run(mut self) -> Result<(), SocketError> {
        let mut relayed = 0usize;
        let mut received = 0usize;

        loop {
            tokio::select! {
                broadcast = self.outbound_receiver.recv() => {
                    let Some(text) = broadcast else { break };
                    self.socket.send_message(text).await?;
                    relayed += 1;
                }

                inbound = self.socket.receive_message() => {
                    let Some(line) = inbound? else { break };
                    received += 1;
                    self.message_handler.handle_message(&self.client_id, line).await;
                }
            }
        }

        debug!(
            connection_id = %self.connection_id,
            client_id = %self.client_id,
            relayed,
            received,
            "Chat connection finished"
        );
        let _ = self.socket.close().await;
        Ok(())
    }
}
