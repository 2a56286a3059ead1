use std::fs;
use std::path::{Path, PathBuf};

use nexora_core::{Catalog, CommunityPost, JobRecord, Mentor, StaticCatalog};
use nexora_logging::{nexora_info, nexora_warn};
use serde::de::Error as _;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse catalog {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

#[derive(Debug, Default, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    jobs: Vec<JobRecord>,
    #[serde(default)]
    mentors: Vec<Mentor>,
    #[serde(default, rename = "communityPosts")]
    community_posts: Vec<CommunityPost>,
}

/// Job, mentor and community listings read from a JSON file of the form
/// `{ "jobs": [...], "mentors": [...], "communityPosts": [...] }`.
/// Every key is optional but the top level must be an object.
#[derive(Debug, Clone, Default)]
pub struct JsonFileCatalog {
    inner: StaticCatalog,
}

impl JsonFileCatalog {
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let text = fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text).map_err(|source| CatalogError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn parse(text: &str) -> Result<Self, serde_json::Error> {
        let value: Value = serde_json::from_str(text)?;
        if !value.is_object() {
            return Err(serde_json::Error::custom("catalog must be a JSON object"));
        }
        let file: CatalogFile = serde_json::from_value(value)?;
        Ok(Self {
            inner: StaticCatalog {
                jobs: file.jobs,
                mentors: file.mentors,
                community_posts: file.community_posts,
            },
        })
    }

    /// A missing or broken catalog is not fatal; the listings are just empty.
    pub fn load_or_empty(path: &Path) -> Self {
        match Self::load(path) {
            Ok(catalog) => {
                nexora_info!(
                    "Loaded catalog with {} jobs, {} mentors and {} community posts",
                    catalog.inner.jobs.len(),
                    catalog.inner.mentors.len(),
                    catalog.inner.community_posts.len()
                );
                catalog
            }
            Err(err) => {
                nexora_warn!("{}", err);
                Self::default()
            }
        }
    }
}

impl Catalog for JsonFileCatalog {
    fn jobs(&self) -> Vec<JobRecord> {
        self.inner.jobs()
    }

    fn mentors(&self) -> Vec<Mentor> {
        self.inner.mentors()
    }

    fn community_posts(&self) -> Vec<CommunityPost> {
        self.inner.community_posts()
    }
}
