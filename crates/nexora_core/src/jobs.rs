use serde::{Deserialize, Serialize};

use crate::CommunityPost;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JobType {
    FullTime,
    PartTime,
    Contract,
    Internship,
    Freelance,
}

impl JobType {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "full-time" => Some(Self::FullTime),
            "part-time" => Some(Self::PartTime),
            "contract" => Some(Self::Contract),
            "internship" => Some(Self::Internship),
            "freelance" => Some(Self::Freelance),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::FullTime => "full-time",
            Self::PartTime => "part-time",
            Self::Contract => "contract",
            Self::Internship => "internship",
            Self::Freelance => "freelance",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobSource {
    Linkedin,
    Naukri,
    Fiverr,
    Indeed,
    Company,
}

impl JobSource {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "linkedin" => Some(Self::Linkedin),
            "naukri" => Some(Self::Naukri),
            "fiverr" => Some(Self::Fiverr),
            "indeed" => Some(Self::Indeed),
            "company" => Some(Self::Company),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Linkedin => "linkedin",
            Self::Naukri => "naukri",
            Self::Fiverr => "fiverr",
            Self::Indeed => "indeed",
            Self::Company => "company",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRecord {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    #[serde(rename = "type")]
    pub job_type: JobType,
    pub salary: String,
    pub experience: String,
    pub skills: Vec<String>,
    pub description: String,
    pub posted_date: String,
    pub source: JobSource,
    pub apply_url: String,
    #[serde(default)]
    pub is_remote: bool,
    #[serde(default)]
    pub is_urgent: bool,
    /// Computed per query by the matcher; ignored when loading a catalog.
    #[serde(default, skip_deserializing, skip_serializing_if = "Option::is_none")]
    pub match_score: Option<u8>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Availability {
    Available,
    Busy,
    Offline,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mentor {
    pub id: String,
    pub name: String,
    pub title: String,
    pub company: String,
    pub experience: String,
    #[serde(default)]
    pub expertise: Vec<String>,
    pub rating: f32,
    #[serde(default)]
    pub reviews: u32,
    pub availability: Availability,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub linkedin: String,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub timezone: String,
    #[serde(default)]
    pub hourly_rate: Option<u32>,
    #[serde(default)]
    pub is_verified: bool,
}

/// Source of job, mentor and community listings.
pub trait Catalog {
    fn jobs(&self) -> Vec<JobRecord>;
    fn mentors(&self) -> Vec<Mentor>;
    /// Seed posts for the community board before any likes or comments.
    fn community_posts(&self) -> Vec<CommunityPost>;
}

/// In-memory catalog, mostly for tests and for callers that already hold the
/// listings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StaticCatalog {
    pub jobs: Vec<JobRecord>,
    pub mentors: Vec<Mentor>,
    pub community_posts: Vec<CommunityPost>,
}

impl Catalog for StaticCatalog {
    fn jobs(&self) -> Vec<JobRecord> {
        self.jobs.clone()
    }

    fn mentors(&self) -> Vec<Mentor> {
        self.mentors.clone()
    }

    fn community_posts(&self) -> Vec<CommunityPost> {
        self.community_posts.clone()
    }
}

/// Mentors whose expertise mentions `topic` (case-insensitive), available
/// ones first, then by rating.
pub fn mentors_for(mentors: &[Mentor], topic: &str) -> Vec<Mentor> {
    let topic = topic.trim().to_lowercase();
    let mut found: Vec<Mentor> = mentors
        .iter()
        .filter(|mentor| {
            topic.is_empty()
                || mentor
                    .expertise
                    .iter()
                    .any(|skill| skill.to_lowercase().contains(&topic))
        })
        .cloned()
        .collect();
    found.sort_by(|a, b| {
        let a_free = a.availability == Availability::Available;
        let b_free = b.availability == Availability::Available;
        b_free
            .cmp(&a_free)
            .then_with(|| b.rating.total_cmp(&a.rating))
    });
    found
}
