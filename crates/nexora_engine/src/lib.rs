//! Nexora engine: HTTP client, background request runner and local storage.
mod catalog;
mod client;
mod engine;
mod persist;
mod token;
mod types;

pub use catalog::{CatalogError, JsonFileCatalog};
pub use client::{ApiSettings, CareerApi, ChatRequest, ReqwestApi};
pub use engine::EngineHandle;
pub use persist::{
    ensure_data_dir, AtomicFileWriter, CommunityStore, FileKvStore, KvStore, PersistError,
    RoadmapStore,
};
pub use token::{MemoryTokenStore, PersistedTokenStore, TokenStore, TOKEN_STORAGE_KEY};
pub use types::{ApiError, EngineEvent, FailureKind};
