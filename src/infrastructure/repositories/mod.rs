pub mod article_repository;
pub mod elevenlabs_tts_repository;
pub mod generation_repository;
pub mod openai_generation_repository;
pub mod openai_tts_repository;
pub mod polly_tts_repository;
pub mod storage_repository;
pub mod supabase_storage_repository;
pub mod tts_repository;

pub use article_repository::ArticleRepository;
pub use elevenlabs_tts_repository::ElevenLabsTtsRepository;
pub use generation_repository::GenerationRepository;
pub use openai_generation_repository::OpenAiGenerationRepository;
pub use openai_tts_repository::OpenAiTtsRepository;
pub use polly_tts_repository::PollyTtsRepository;
pub use storage_repository::StorageRepository;
pub use supabase_storage_repository::SupabaseStorageRepository;
pub use tts_repository::TtsRepository;
