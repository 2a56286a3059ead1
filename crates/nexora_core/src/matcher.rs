//! Job ranking against a user skill profile, and catalog search.
//!
//! The 70/30 weighting and the 60-point cut-off match what the service has
//! always shown users; keep them as they are.

use crate::jobs::{JobRecord, JobSource, JobType};
use crate::roadmap::RoadmapItem;

pub const SKILL_WEIGHT: f64 = 70.0;
pub const INTEREST_WEIGHT: f64 = 30.0;
pub const MIN_MATCH_SCORE: u8 = 60;

/// Skills and interests derived from the roadmap; recomputed per query.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SkillProfile {
    pub skills: Vec<String>,
    pub interests: Vec<String>,
}

impl SkillProfile {
    /// All skills across roadmap items; titles become lower-cased interests.
    pub fn from_roadmap(items: &[RoadmapItem]) -> Self {
        Self {
            skills: items.iter().flat_map(|item| item.skills.clone()).collect(),
            interests: items.iter().map(|item| item.title.to_lowercase()).collect(),
        }
    }

    /// Adds whitespace/comma separated interest tokens from free text.
    pub fn with_interest_text(mut self, text: &str) -> Self {
        self.interests.extend(
            text.split(|c: char| c.is_whitespace() || c == ',')
                .map(str::trim)
                .filter(|token| !token.is_empty())
                .map(str::to_lowercase),
        );
        self
    }
}

/// Score and rank `jobs`, dropping anything under [`MIN_MATCH_SCORE`].
///
/// The sort is stable, so equal scores keep their input order.
pub fn rank(jobs: &[JobRecord], user_skills: &[String], user_interests: &[String]) -> Vec<JobRecord> {
    let skills: Vec<String> = user_skills
        .iter()
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect();
    let interests: Vec<String> = user_interests
        .iter()
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect();

    let mut ranked: Vec<JobRecord> = jobs
        .iter()
        .map(|job| {
            let mut job = job.clone();
            job.match_score = Some(match_score(&job, &skills, &interests));
            job
        })
        .filter(|job| job.match_score.unwrap_or(0) >= MIN_MATCH_SCORE)
        .collect();
    ranked.sort_by(|a, b| b.match_score.cmp(&a.match_score));
    ranked
}

/// Expects non-empty lower-cased `skills` and `interests`.
fn match_score(job: &JobRecord, skills: &[String], interests: &[String]) -> u8 {
    let overlap = if job.skills.is_empty() {
        0.0
    } else {
        let matched = job
            .skills
            .iter()
            .filter(|skill| {
                let skill = skill.to_lowercase();
                skills
                    .iter()
                    .any(|user| user.contains(&skill) || skill.contains(user.as_str()))
            })
            .count();
        matched as f64 / job.skills.len() as f64
    };

    let title = job.title.to_lowercase();
    let description = job.description.to_lowercase();
    let interest_hit = interests
        .iter()
        .any(|interest| title.contains(interest.as_str()) || description.contains(interest.as_str()));

    let raw = overlap * SKILL_WEIGHT + if interest_hit { INTEREST_WEIGHT } else { 0.0 };
    raw.min(100.0).round() as u8
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocationFilter {
    /// Matches remote jobs as well as locations containing "remote".
    Remote,
    Contains(String),
}

impl LocationFilter {
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.eq_ignore_ascii_case("remote") {
            Self::Remote
        } else {
            Self::Contains(raw.to_string())
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchFilters {
    pub job_type: Option<JobType>,
    pub location: Option<LocationFilter>,
    pub source: Option<JobSource>,
}

/// Text query over title, company and skills, AND-ed with the filters.
/// An empty query applies no text filter.
pub fn search(jobs: &[JobRecord], query: &str, filters: &SearchFilters) -> Vec<JobRecord> {
    let query = query.trim().to_lowercase();
    jobs.iter()
        .filter(|job| query.is_empty() || matches_query(job, &query))
        .filter(|job| filters.job_type.map_or(true, |t| job.job_type == t))
        .filter(|job| match &filters.location {
            None => true,
            Some(LocationFilter::Remote) => {
                job.is_remote || job.location.to_lowercase().contains("remote")
            }
            Some(LocationFilter::Contains(needle)) => job
                .location
                .to_lowercase()
                .contains(&needle.to_lowercase()),
        })
        .filter(|job| filters.source.map_or(true, |s| job.source == s))
        .cloned()
        .collect()
}

fn matches_query(job: &JobRecord, query: &str) -> bool {
    job.title.to_lowercase().contains(query)
        || job.company.to_lowercase().contains(query)
        || job
            .skills
            .iter()
            .any(|skill| skill.to_lowercase().contains(query))
}
