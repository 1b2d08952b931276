use serde::{Deserialize, Serialize};

/// Colour tag given to every user-created room
pub const CUSTOM_ROOM_COLOR: &str = "from-emerald-500 to-teal-400";

/// Stored debate room
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomModel {
    pub id: String,
    pub title: String,
    pub topic: String,
    pub opening_question: String,
    pub participants: u32,
    pub color: String,
}

impl RoomModel {
    /// Creates a fresh custom room with no participants
    pub fn new(id: String, title: String, topic: String, opening_question: String) -> Self {
        Self {
            id,
            title,
            topic,
            opening_question,
            participants: 0,
            color: CUSTOM_ROOM_COLOR.to_string(),
        }
    }

    /// Looks up one of the built-in showcase rooms
    pub fn preset(room_id: &str) -> Option<Self> {
        let (title, topic, opening_question, participants, color) = match room_id {
            "room-a" => (
                "Philosophical Debate",
                "Is AI capable of true creativity?",
                "Is free will an illusion? Share your perspective.",
                12,
                "from-blue-500 to-cyan-400",
            ),
            "room-b" => (
                "Policy Summit",
                "Universal Basic Income vs. Guaranteed Jobs",
                "Should AI be regulated? Debate the policy.",
                8,
                "from-purple-500 to-pink-400",
            ),
            _ => return None,
        };

        Some(Self {
            id: room_id.to_string(),
            title: title.to_string(),
            topic: topic.to_string(),
            opening_question: opening_question.to_string(),
            participants,
            color: color.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_room_defaults() {
        let room = RoomModel::new(
            "custom-1".to_string(),
            "Title".to_string(),
            "Some topic here".to_string(),
            "Why?".to_string(),
        );
        assert_eq!(room.participants, 0);
        assert_eq!(room.color, CUSTOM_ROOM_COLOR);
    }

    #[test]
    fn test_presets() {
        let room_a = RoomModel::preset("room-a").unwrap();
        assert_eq!(room_a.title, "Philosophical Debate");
        assert_eq!(room_a.participants, 12);

        let room_b = RoomModel::preset("room-b").unwrap();
        assert_eq!(room_b.color, "from-purple-500 to-pink-400");

        assert!(RoomModel::preset("room-c").is_none());
    }
}
