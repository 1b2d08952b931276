use async_trait::async_trait;
use std::sync::Mutex;
use tokio::sync::mpsc;

use prismecho::websockets::{SocketError, SocketWrapper};
use prismecho::{AiClient, AiError, GenerationRequest};

// ============================================================================
// Mock Infrastructure
// ============================================================================

type Script = Box<dyn Fn(&GenerationRequest) -> Result<String, AiError> + Send + Sync>;

/// AI client whose answer is computed from the request, recording every prompt
pub struct ScriptedAiClient {
    script: Script,
    prompts: Mutex<Vec<String>>,
}

#[allow(dead_code)]
impl ScriptedAiClient {
    pub fn new<F>(script: F) -> Self
    where
        F: Fn(&GenerationRequest) -> Result<String, AiError> + Send + Sync + 'static,
    {
        Self {
            script: Box::new(script),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Answers moderation prompts with `verdict` and everything else with `answer`
    pub fn moderating(verdict: &'static str, answer: &'static str) -> Self {
        Self::new(move |request| {
            if request.prompt.contains("Content Moderation Check") {
                Ok(verdict.to_string())
            } else {
                Ok(answer.to_string())
            }
        })
    }

    pub fn failing() -> Self {
        Self::new(|_| Err(AiError::Http("connection refused".to_string())))
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl AiClient for ScriptedAiClient {
    async fn generate(&self, request: GenerationRequest) -> Result<String, AiError> {
        self.prompts.lock().unwrap().push(request.prompt.clone());
        (self.script)(&request)
    }
}

/// Server-side end of an in-process socket pair
pub struct MockSocket {
    inbound: mpsc::UnboundedReceiver<String>,
    outbound: mpsc::UnboundedSender<String>,
}

/// Client-side end: dropping `to_server` disconnects the client
pub struct MockClient {
    pub to_server: Option<mpsc::UnboundedSender<String>>,
    pub from_server: mpsc::UnboundedReceiver<String>,
}

#[allow(dead_code)]
impl MockClient {
    pub fn send(&self, message: &str) {
        self.to_server
            .as_ref()
            .expect("client already disconnected")
            .send(message.to_string())
            .unwrap();
    }

    pub fn disconnect(&mut self) {
        self.to_server = None;
    }
}

pub fn socket_pair() -> (MockSocket, MockClient) {
    let (to_server, inbound) = mpsc::unbounded_channel();
    let (outbound, from_server) = mpsc::unbounded_channel();
    (
        MockSocket { inbound, outbound },
        MockClient {
            to_server: Some(to_server),
            from_server,
        },
    )
}

#[async_trait]
impl SocketWrapper for MockSocket {
    async fn send_message(&mut self, message: String) -> Result<(), SocketError> {
        self.outbound
            .send(message)
            .map_err(|e| SocketError::SendFailed(e.to_string()))
    }

    async fn receive_message(&mut self) -> Result<Option<String>, SocketError> {
        Ok(self.inbound.recv().await)
    }

    async fn close(&mut self) -> Result<(), SocketError> {
        Ok(())
    }
}
