use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::{mpsc, RwLock};
use tracing::debug;
use uuid::Uuid;

pub type ConnectionId = Uuid;

/// Registry of open real-time connections
#[async_trait]
pub trait ConnectionManager: Send + Sync {
    /// Registers a connection at the end of the fan-out order
    async fn add_connection(
        &self,
        connection_id: ConnectionId,
        client_id: String,
        sender: mpsc::UnboundedSender<String>,
    );

    /// Removes a connection; unknown ids are ignored
    async fn remove_connection(&self, connection_id: ConnectionId);

    /// Sends `message` to every registered connection in registration order,
    /// returning how many connections accepted it
    async fn broadcast(&self, message: &str) -> usize;

    async fn connection_count(&self) -> usize;
}

struct RegisteredConnection {
    id: ConnectionId,
    client_id: String,
    sender: mpsc::UnboundedSender<String>,
}

pub struct InMemoryConnectionManager {
    // registration order is fan-out order
    connections: Arc<RwLock<Vec<RegisteredConnection>>>,
}

impl InMemoryConnectionManager {
    pub fn new() -> Self {
        Self {
            connections: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

impl Default for InMemoryConnectionManager {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ConnectionManager for InMemoryConnectionManager {
    async fn add_connection(
        &self,
        connection_id: ConnectionId,
        client_id: String,
        sender: mpsc::UnboundedSender<String>,
    ) {
        let mut connections = self.connections.write().await;
        connections.push(RegisteredConnection {
            id: connection_id,
            client_id,
            sender,
        });
        debug!(connection_count = connections.len(), "Connection registered");
    }

    async fn remove_connection(&self, connection_id: ConnectionId) {
        let mut connections = self.connections.write().await;
        connections.retain(|c| c.id != connection_id);
    }

    async fn broadcast(&self, message: &str) -> usize {
        let mut delivered = 0;
        let mut stale = Vec::new();

        {
            let connections = self.connections.read().await;
            for connection in connections.iter() {
                if connection.sender.send(message.to_string()).is_ok() {
                    delivered += 1;
                } else {
                    debug!(client_id = %connection.client_id, "Skipping closed connection");
                    stale.push(connection.id);
                }
            }
        }

        if !stale.is_empty() {
            let mut connections = self.connections.write().await;
            connections.retain(|c| !stale.contains(&c.id));
        }

        delivered
    }

    async fn connection_count(&self) -> usize {
        self.connections.read().await.len()
    }
}
