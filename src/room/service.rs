use std::sync::Arc;
use tracing::{debug, info, instrument};

use super::{
    generators::RoomIdGenerator,
    models::RoomModel,
    repository::RoomRepository,
    types::{CreateRoomRequest, CreateRoomResponse},
};
use crate::generation::GenerationService;
use crate::moderation::ModerationService;
use crate::shared::AppError;

pub const TITLE_MIN_CHARS: usize = 3;
pub const TITLE_MAX_CHARS: usize = 50;
pub const TOPIC_MIN_CHARS: usize = 10;
pub const TOPIC_MAX_CHARS: usize = 200;

/// Checks length bounds; the minimum applies to the trimmed text, the maximum to the raw text
pub fn validate_room_request(request: &CreateRoomRequest) -> Result<(), String> {
    if request.title.trim().chars().count() < TITLE_MIN_CHARS {
        return Err(format!(
            "Title must be at least {} characters.",
            TITLE_MIN_CHARS
        ));
    }
    if request.title.chars().count() > TITLE_MAX_CHARS {
        return Err(format!("Title must be under {} characters.", TITLE_MAX_CHARS));
    }
    if request.topic.trim().chars().count() < TOPIC_MIN_CHARS {
        return Err(format!(
            "Topic must be at least {} characters.",
            TOPIC_MIN_CHARS
        ));
    }
    if request.topic.chars().count() > TOPIC_MAX_CHARS {
        return Err(format!("Topic must be under {} characters.", TOPIC_MAX_CHARS));
    }
    Ok(())
}

/// Service for handling room business logic
pub struct RoomService {
    repository: Arc<dyn RoomRepository + Send + Sync>,
    id_generator: Arc<dyn RoomIdGenerator>,
    moderation: ModerationService,
    generation: GenerationService,
}

impl RoomService {
    pub fn new(
        repository: Arc<dyn RoomRepository + Send + Sync>,
        id_generator: Arc<dyn RoomIdGenerator>,
        moderation: ModerationService,
        generation: GenerationService,
    ) -> Self {
        Self {
            repository,
            id_generator,
            moderation,
            generation,
        }
    }

    /// Validates, moderates and stores a new room with a generated opening question
    #[instrument(skip(self, request))]
    pub async fn create_room(
        &self,
        request: CreateRoomRequest,
    ) -> Result<CreateRoomResponse, AppError> {
        if let Err(error) = validate_room_request(&request) {
            info!(error = %error, "Room request failed validation");
            return Ok(CreateRoomResponse::rejected(error));
        }

        let verdict = self.moderation.moderate_content(&request.title).await;
        if !verdict.is_safe {
            info!("Room title rejected by moderation");
            return Ok(CreateRoomResponse::rejected(format!(
                "Title rejected: {}",
                verdict.reason_or_empty()
            )));
        }

        let verdict = self.moderation.moderate_content(&request.topic).await;
        if !verdict.is_safe {
            info!("Room topic rejected by moderation");
            return Ok(CreateRoomResponse::rejected(format!(
                "Topic rejected: {}",
                verdict.reason_or_empty()
            )));
        }

        let title = request.title.trim().to_string();
        let topic = request.topic.trim().to_string();
        let opening_question = self.generation.generate_opening_question(&topic).await;

        let room = RoomModel::new(self.id_generator.generate(), title, topic, opening_question);
        debug!(room_id = %room.id, "Generated room ID");

        self.repository.create_room(&room).await?;

        info!(room_id = %room.id, title = %room.title, "Room created successfully");

        Ok(CreateRoomResponse::created(room.id, room.opening_question))
    }

    /// Gets a created room, falling back to the built-in presets
    #[instrument(skip(self))]
    pub async fn get_room(&self, room_id: &str) -> Result<RoomModel, AppError> {
        if let Some(room) = self.repository.get_room(room_id).await? {
            return Ok(room);
        }

        RoomModel::preset(room_id).ok_or_else(|| AppError::NotFound("Room not found".to_string()))
    }

    /// Lists all created rooms
    #[instrument(skip(self))]
    pub async fn list_rooms(&self) -> Result<Vec<RoomModel>, AppError> {
        let rooms = self.repository.list_rooms().await?;

        debug!(room_count = rooms.len(), "Rooms retrieved successfully");

        Ok(rooms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moderation::FailurePolicy;
    use crate::room::repository::InMemoryRoomRepository;
    use crate::shared::test_utils::StubAiClient;
    use crate::ai::AiClient;
    use rstest::rstest;

    struct FixedIdGenerator(&'static str);

    impl RoomIdGenerator for FixedIdGenerator {
        fn generate(&self) -> String {
            self.0.to_string()
        }
    }

    fn service_with(
        repository: Arc<InMemoryRoomRepository>,
        ai_client: Option<Arc<dyn AiClient>>,
    ) -> RoomService {
        RoomService::new(
            repository,
            Arc::new(FixedIdGenerator("custom-abcd1234")),
            ModerationService::new(ai_client.clone(), FailurePolicy::Open),
            GenerationService::new(ai_client),
        )
    }

    fn request(title: &str, topic: &str) -> CreateRoomRequest {
        CreateRoomRequest {
            title: title.to_string(),
            topic: topic.to_string(),
        }
    }

    #[rstest]
    #[case("abc", "a".repeat(10), None)]
    #[case(&"t".repeat(50), "a".repeat(200), None)]
    #[case("  ab  ", "a".repeat(10), Some("Title must be at least 3 characters."))]
    #[case(&"t".repeat(51), "a".repeat(10), Some("Title must be under 50 characters."))]
    #[case("abc", format!("  {}  ", "a".repeat(9)), Some("Topic must be at least 10 characters."))]
    #[case("abc", "a".repeat(201), Some("Topic must be under 200 characters."))]
    fn test_validate_room_request(
        #[case] title: &str,
        #[case] topic: String,
        #[case] expected_error: Option<&str>,
    ) {
        let result = validate_room_request(&request(title, &topic));
        assert_eq!(result.err().as_deref(), expected_error);
    }

    #[tokio::test]
    async fn test_create_room_stores_trimmed_fields() {
        let repository = Arc::new(InMemoryRoomRepository::new());
        let service = service_with(repository.clone(), None);

        let response = service
            .create_room(request("  Housing  ", "  Should cities ban cars  "))
            .await
            .unwrap();

        assert_eq!(
            response,
            CreateRoomResponse::created(
                "custom-abcd1234".to_string(),
                "What are your thoughts on Should cities ban cars?".to_string()
            )
        );

        let stored = repository.get_room("custom-abcd1234").await.unwrap().unwrap();
        assert_eq!(stored.title, "Housing");
        assert_eq!(stored.topic, "Should cities ban cars");
        assert_eq!(stored.participants, 0);
    }

    #[tokio::test]
    async fn test_create_room_rejects_blocklisted_title() {
        let repository = Arc::new(InMemoryRoomRepository::new());
        let service = service_with(repository.clone(), None);

        let response = service
            .create_room(request("Nazi history", "A long enough topic"))
            .await
            .unwrap();

        assert_eq!(
            response,
            CreateRoomResponse::rejected("Title rejected: Content contains prohibited terms.")
        );
        assert!(repository.list_rooms().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_room_rejects_title_flagged_by_ai() {
        let repository = Arc::new(InMemoryRoomRepository::new());
        let stub: Arc<dyn AiClient> = Arc::new(StubAiClient::responding("UNSAFE\nPromotes harassment"));
        let service = service_with(repository.clone(), Some(stub));

        let response = service
            .create_room(request("Fine title", "A long enough topic"))
            .await
            .unwrap();

        assert_eq!(
            response.error.as_deref(),
            Some("Title rejected: Promotes harassment")
        );
        assert!(!response.success);
    }

    #[tokio::test]
    async fn test_create_room_rejects_blocklisted_topic() {
        let service = service_with(Arc::new(InMemoryRoomRepository::new()), None);

        let response = service
            .create_room(request("Fine title", "We need a genocide debate"))
            .await
            .unwrap();

        assert_eq!(
            response.error.as_deref(),
            Some("Topic rejected: Content contains prohibited terms.")
        );
    }

    #[tokio::test]
    async fn test_get_room_falls_back_to_presets() {
        let service = service_with(Arc::new(InMemoryRoomRepository::new()), None);

        let room = service.get_room("room-b").await.unwrap();
        assert_eq!(room.title, "Policy Summit");

        let missing = service.get_room("room-z").await;
        assert!(matches!(missing, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_list_rooms_excludes_presets() {
        let service = service_with(Arc::new(InMemoryRoomRepository::new()), None);
        assert!(service.list_rooms().await.unwrap().is_empty());
    }
}
