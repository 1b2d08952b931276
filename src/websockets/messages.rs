/// Broadcast text relayed for every inbound chat message
pub fn chat_message(client_id: &str, data: &str) -> String {
    format!("Client #{} says: {}", client_id, data)
}

/// Broadcast text sent to the remaining clients when one disconnects
pub fn left_message(client_id: &str) -> String {
    format!("Client #{} left the chat", client_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_formats() {
        assert_eq!(chat_message("A", "hi"), "Client #A says: hi");
        assert_eq!(chat_message("42", ""), "Client #42 says: ");
        assert_eq!(left_message("A"), "Client #A left the chat");
    }
}
