use serde::{Deserialize, Serialize};

/// Storage key for the persisted roadmap list.
pub const ROADMAP_STORAGE_KEY: &str = "career-roadmap";
pub const ROADMAP_CONVERSATION_ID: &str = "roadmap-generation";
pub const ROADMAP_GENERATION_ERROR: &str = "Failed to generate roadmap from chat";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RoadmapStatus {
    Completed,
    InProgress,
    Pending,
}

impl RoadmapStatus {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "completed" => Some(Self::Completed),
            "in-progress" => Some(Self::InProgress),
            "pending" => Some(Self::Pending),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::InProgress => "in-progress",
            Self::Pending => "pending",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "high" => Some(Self::High),
            "medium" => Some(Self::Medium),
            "low" => Some(Self::Low),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ItemSource {
    AiGenerated,
    UserAdded,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapItem {
    pub id: String,
    pub title: String,
    pub description: String,
    pub status: RoadmapStatus,
    pub priority: Priority,
    pub estimated_time: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub resources: Vec<String>,
    pub created_at: String,
    pub source: ItemSource,
}

/// A roadmap item before it is stamped with an id and creation time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRoadmapItem {
    pub title: String,
    pub description: String,
    pub status: RoadmapStatus,
    pub priority: Priority,
    pub estimated_time: String,
    pub skills: Vec<String>,
    pub resources: Vec<String>,
    pub source: ItemSource,
}

impl NewRoadmapItem {
    /// Item created from an assistant reply about `topic`.
    pub fn generated(topic: &str, reply: &str) -> Self {
        let description = if reply.trim().is_empty() {
            format!("Personalized roadmap for {topic}")
        } else {
            reply.to_string()
        };
        Self {
            title: format!("Career Path: {topic}"),
            description,
            status: RoadmapStatus::Pending,
            priority: Priority::High,
            estimated_time: "3-6 months".to_string(),
            skills: vec![
                "Communication".to_string(),
                "Problem Solving".to_string(),
                "Technical Skills".to_string(),
            ],
            resources: vec![
                "Online Courses".to_string(),
                "Mentorship".to_string(),
                "Practice Projects".to_string(),
            ],
            source: ItemSource::AiGenerated,
        }
    }
}

/// Identity assigned by the caller, which owns the clock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoadmapStamp {
    pub id: String,
    pub created_at: String,
}

/// Partial update; `None` fields are left alone.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RoadmapPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<RoadmapStatus>,
    pub priority: Option<Priority>,
    pub estimated_time: Option<String>,
    pub skills: Option<Vec<String>>,
    pub resources: Option<Vec<String>>,
}

pub fn generation_prompt(topic: &str) -> String {
    format!(
        "Generate a detailed career roadmap based on: {topic}. Provide specific steps, skills needed, and timeframes."
    )
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Roadmap {
    items: Vec<RoadmapItem>,
    generating: bool,
    error: Option<String>,
}

impl Roadmap {
    pub fn items(&self) -> &[RoadmapItem] {
        &self.items
    }

    pub fn is_generating(&self) -> bool {
        self.generating
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub(crate) fn restore(&mut self, items: Vec<RoadmapItem>) {
        self.items = items;
    }

    pub(crate) fn add(&mut self, item: NewRoadmapItem, stamp: RoadmapStamp) {
        self.items.push(RoadmapItem {
            id: stamp.id,
            title: item.title,
            description: item.description,
            status: item.status,
            priority: item.priority,
            estimated_time: item.estimated_time,
            skills: item.skills,
            resources: item.resources,
            created_at: stamp.created_at,
            source: item.source,
        });
    }

    /// Returns `false` when no item has `id`.
    pub(crate) fn update(&mut self, id: &str, patch: RoadmapPatch) -> bool {
        let Some(item) = self.items.iter_mut().find(|item| item.id == id) else {
            return false;
        };
        if let Some(title) = patch.title {
            item.title = title;
        }
        if let Some(description) = patch.description {
            item.description = description;
        }
        if let Some(status) = patch.status {
            item.status = status;
        }
        if let Some(priority) = patch.priority {
            item.priority = priority;
        }
        if let Some(estimated_time) = patch.estimated_time {
            item.estimated_time = estimated_time;
        }
        if let Some(skills) = patch.skills {
            item.skills = skills;
        }
        if let Some(resources) = patch.resources {
            item.resources = resources;
        }
        true
    }

    /// Returns `false` when no item has `id`.
    pub(crate) fn delete(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != before
    }

    pub(crate) fn begin_generation(&mut self) -> bool {
        if self.generating {
            return false;
        }
        self.generating = true;
        self.error = None;
        true
    }

    pub(crate) fn finish_generation(&mut self, error: Option<String>) {
        self.generating = false;
        self.error = error;
    }
}
