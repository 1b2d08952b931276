pub mod mocks;
pub mod setup;

// Re-export main utilities for use by test files
#[allow(unused_imports)]
pub use mocks::{socket_pair, MockClient, MockSocket, ScriptedAiClient};
#[allow(unused_imports)]
pub use setup::{body_json, TestSetup, TestSetupBuilder};
