/// Trait for generating room identifiers
pub trait RoomIdGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// `custom-` followed by eight hex characters of a random UUID
pub struct UuidRoomIdGenerator;

impl UuidRoomIdGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl Default for UuidRoomIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl RoomIdGenerator for UuidRoomIdGenerator {
    fn generate(&self) -> String {
        let hex = uuid::Uuid::new_v4().simple().to_string();
        format!("custom-{}", &hex[..8])
    }
}
