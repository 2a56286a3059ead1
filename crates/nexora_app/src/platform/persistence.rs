use std::path::{Path, PathBuf};
use std::sync::Arc;

use nexora_core::{CommunityPost, RoadmapItem};
use nexora_engine::{
    ensure_data_dir, CommunityStore, FileKvStore, KvStore, PersistError, PersistedTokenStore,
    RoadmapStore, TokenStore,
};
use nexora_logging::{nexora_error, nexora_info};

/// Local storage under the data directory: roadmap, community board and auth token.
pub struct Storage {
    dir: PathBuf,
    roadmap: RoadmapStore<FileKvStore>,
    community: CommunityStore<FileKvStore>,
    tokens: Arc<dyn TokenStore>,
}

impl Storage {
    pub fn open(dir: &Path) -> Result<Self, PersistError> {
        ensure_data_dir(dir)?;
        let kv = FileKvStore::new(dir);
        let shared: Arc<dyn KvStore> = Arc::new(kv.clone());
        nexora_info!("Local storage at {:?}", dir);
        Ok(Self {
            dir: dir.to_path_buf(),
            roadmap: RoadmapStore::new(kv.clone()),
            community: CommunityStore::new(kv),
            tokens: Arc::new(PersistedTokenStore::new(shared)),
        })
    }

    pub fn tokens(&self) -> Arc<dyn TokenStore> {
        self.tokens.clone()
    }

    pub fn load_roadmap(&self) -> Vec<RoadmapItem> {
        self.roadmap.load()
    }

    pub fn save_roadmap(&self, items: &[RoadmapItem]) {
        if let Err(err) = self.roadmap.save(items) {
            nexora_error!("Failed to write roadmap to {:?}: {}", self.dir, err);
        }
    }

    pub fn load_community(&self) -> Option<Vec<CommunityPost>> {
        self.community.load()
    }

    pub fn save_community(&self, posts: &[CommunityPost]) {
        if let Err(err) = self.community.save(posts) {
            nexora_error!("Failed to write community posts to {:?}: {}", self.dir, err);
        }
    }
}
