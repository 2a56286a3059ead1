use std::fs;

use nexora_core::{rank, Catalog, JobType, PostKind};
use nexora_engine::{CatalogError, JsonFileCatalog};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

const SAMPLE: &str = r#"{
  "jobs": [
    {
      "id": "1",
      "title": "Frontend Developer",
      "company": "Acme",
      "location": "Remote",
      "type": "full-time",
      "salary": "$90k",
      "experience": "2+ years",
      "skills": ["React", "TypeScript"],
      "description": "Build UIs",
      "postedDate": "2 days ago",
      "source": "linkedin",
      "applyUrl": "https://example.com/1",
      "isRemote": true
    }
  ],
  "mentors": [
    {
      "id": "m1",
      "name": "Priya",
      "title": "Staff Engineer",
      "company": "Acme",
      "experience": "10 years",
      "expertise": ["React"],
      "rating": 4.8,
      "availability": "available"
    }
  ],
  "communityPosts": [
    {
      "id": "p1",
      "author": "Maria Garcia",
      "title": "React performance tips",
      "content": "Memoize the expensive parts.",
      "likes": 32,
      "comments": 8,
      "tags": ["react", "tips"],
      "createdAt": "2024-01-14T15:45:00Z",
      "type": "tip"
    }
  ]
}"#;

#[test]
fn parses_jobs_and_mentors() {
    let catalog = JsonFileCatalog::parse(SAMPLE).unwrap();
    let jobs = catalog.jobs();
    assert_eq!(jobs.len(), 1);
    assert_eq!(jobs[0].job_type, JobType::FullTime);
    assert!(jobs[0].is_remote);
    assert!(!jobs[0].is_urgent);
    assert_eq!(jobs[0].match_score, None);
    assert_eq!(catalog.mentors()[0].name, "Priya");
    let posts = catalog.community_posts();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].kind, PostKind::Tip);
    assert_eq!(posts[0].likes, 32);
}

#[test]
fn every_section_is_optional() {
    let catalog = JsonFileCatalog::parse(r#"{ "mentors": [] }"#).unwrap();
    assert!(catalog.jobs().is_empty());
    assert!(catalog.community_posts().is_empty());
}

#[test]
fn top_level_must_be_an_object() {
    for text in ["[]", "null", "42"] {
        let err = JsonFileCatalog::parse(text).unwrap_err();
        assert!(err.to_string().contains("catalog must be a JSON object"), "{text}: {err}");
    }
}

#[test]
fn loaded_jobs_feed_the_matcher() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("catalog.json");
    fs::write(&path, SAMPLE).unwrap();

    let catalog = JsonFileCatalog::load(&path).unwrap();
    let ranked = rank(
        &catalog.jobs(),
        &["react".to_string()],
        &["frontend".to_string()],
    );
    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].match_score, Some(65));
    assert!(rank(&catalog.jobs(), &["react".to_string()], &[]).is_empty());
}

#[test]
fn missing_file_is_a_read_error_and_loads_empty() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("absent.json");

    assert!(matches!(
        JsonFileCatalog::load(&path),
        Err(CatalogError::Read { .. })
    ));
    let catalog = JsonFileCatalog::load_or_empty(&path);
    assert!(catalog.jobs().is_empty());
    assert!(catalog.mentors().is_empty());
}

#[test]
fn malformed_file_is_a_parse_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("catalog.json");
    fs::write(&path, "[]").unwrap();
    assert!(matches!(
        JsonFileCatalog::load(&path),
        Err(CatalogError::Parse { .. })
    ));
}
