use async_trait::async_trait;
use axum::{
    extract::{Path, State, WebSocketUpgrade},
    response::Response,
};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use super::connection_manager::ConnectionManager;
use super::messages::{chat_message, left_message};
use super::socket::{Connection, MessageHandler, SocketWrapper};
use crate::shared::AppState;

/// Relays every inbound text message to all open connections
pub struct ChatBroadcastHandler {
    connection_manager: Arc<dyn ConnectionManager>,
}

impl ChatBroadcastHandler {
    pub fn new(connection_manager: Arc<dyn ConnectionManager>) -> Self {
        Self { connection_manager }
    }
}

#[async_trait]
impl MessageHandler for ChatBroadcastHandler {
    async fn handle_message(&self, client_id: &str, message: String) {
        let delivered = self
            .connection_manager
            .broadcast(&chat_message(client_id, &message))
            .await;

        debug!(client_id = %client_id, delivered, "Chat message broadcast");
    }
}

/// WebSocket upgrade handler
///
/// GET /ws/:client_id
#[instrument(name = "websocket_handler", skip(ws, app_state))]
pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    Path(client_id): Path<String>,
    State(app_state): State<AppState>,
) -> Response {
    info!(client_id = %client_id, "WebSocket connection requested");

    let connection_manager = Arc::clone(&app_state.connection_manager);
    ws.on_upgrade(move |socket| serve_connection(Box::new(socket), client_id, connection_manager))
}

/// Registers the socket, relays its messages until it closes, then announces the departure
pub async fn serve_connection(
    socket: Box<dyn SocketWrapper>,
    client_id: String,
    connection_manager: Arc<dyn ConnectionManager>,
) {
    let connection_id = Uuid::new_v4();

    // Create the outbound channel (app -> client)
    let (outbound_sender, outbound_receiver) = mpsc::unbounded_channel::<String>();

    connection_manager
        .add_connection(connection_id, client_id.clone(), outbound_sender)
        .await;

    info!(
        client_id = %client_id,
        connection_id = %connection_id,
        "WebSocket connection established"
    );

    let message_handler = Arc::new(ChatBroadcastHandler::new(Arc::clone(&connection_manager)));
    let connection = Connection::new(
        connection_id,
        client_id.clone(),
        socket,
        outbound_receiver,
        message_handler,
    );

    // Run the connection until disconnect
    match connection.run().await {
        Ok(()) => {
            info!(client_id = %client_id, "WebSocket connection closed cleanly");
        }
        Err(e) => {
            warn!(client_id = %client_id, error = ?e, "WebSocket connection error");
        }
    }

    // Cleanup: remove from connection manager and tell everyone else
    connection_manager.remove_connection(connection_id).await;
    connection_manager.broadcast(&left_message(&client_id)).await;
}
