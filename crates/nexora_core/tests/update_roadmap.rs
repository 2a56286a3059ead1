use nexora_core::{
    update, AppState, Effect, ItemSource, Msg, NewRoadmapItem, Priority, RoadmapPatch,
    RoadmapStamp, RoadmapStatus, ROADMAP_GENERATION_ERROR,
};
use pretty_assertions::assert_eq;

fn stamp(id: &str) -> RoadmapStamp {
    RoadmapStamp {
        id: id.to_string(),
        created_at: "2024-02-01T10:00:00Z".to_string(),
    }
}

fn learn_rust() -> NewRoadmapItem {
    NewRoadmapItem {
        title: "Learn Rust".to_string(),
        description: "Ownership, traits, async".to_string(),
        status: RoadmapStatus::Pending,
        priority: Priority::Medium,
        estimated_time: "2 months".to_string(),
        skills: vec!["Rust".to_string()],
        resources: vec!["The Book".to_string()],
        source: ItemSource::UserAdded,
    }
}

fn persisted(effects: &[Effect]) -> Vec<String> {
    match effects {
        [Effect::PersistRoadmap(items)] => items.iter().map(|i| i.id.clone()).collect(),
        other => panic!("expected one persist effect, got {other:?}"),
    }
}

#[test]
fn every_mutation_persists_the_whole_list() {
    let (state, effects) = update(
        AppState::new(),
        Msg::RoadmapItemAdded {
            item: learn_rust(),
            stamp: stamp("1"),
        },
    );
    assert_eq!(persisted(&effects), vec!["1"]);

    let (state, effects) = update(
        state,
        Msg::RoadmapItemAdded {
            item: learn_rust(),
            stamp: stamp("2"),
        },
    );
    assert_eq!(persisted(&effects), vec!["1", "2"]);

    let (state, effects) = update(
        state,
        Msg::RoadmapItemUpdated {
            id: "1".to_string(),
            patch: RoadmapPatch {
                status: Some(RoadmapStatus::Completed),
                ..RoadmapPatch::default()
            },
        },
    );
    assert_eq!(persisted(&effects), vec!["1", "2"]);
    assert_eq!(state.roadmap().items()[0].status, RoadmapStatus::Completed);
    assert_eq!(state.roadmap().items()[0].title, "Learn Rust");

    let (state, effects) = update(state, Msg::RoadmapItemDeleted { id: "1".to_string() });
    assert_eq!(persisted(&effects), vec!["2"]);
    assert_eq!(state.roadmap().items().len(), 1);
}

#[test]
fn unknown_ids_do_not_persist() {
    let (state, effects) = update(
        AppState::new(),
        Msg::RoadmapItemDeleted {
            id: "missing".to_string(),
        },
    );
    assert!(effects.is_empty());
    assert_eq!(state.notices().len(), 1);
}

#[test]
fn restore_does_not_rewrite_storage() {
    let (state, _) = update(
        AppState::new(),
        Msg::RoadmapItemAdded {
            item: learn_rust(),
            stamp: stamp("1"),
        },
    );
    let items = state.roadmap().items().to_vec();

    let (restored, effects) = update(AppState::new(), Msg::RoadmapRestored(items.clone()));
    assert!(effects.is_empty());
    assert_eq!(restored.roadmap().items(), items.as_slice());
    assert_eq!(restored.skill_profile().skills, vec!["Rust".to_string()]);
}

#[test]
fn generation_sends_prompt_and_adds_item_on_reply() {
    let (state, effects) = update(
        AppState::new(),
        Msg::RoadmapGenerationRequested {
            topic: "Data Science".to_string(),
        },
    );
    assert_eq!(
        effects,
        vec![Effect::GenerateRoadmap {
            topic: "Data Science".to_string(),
            prompt: "Generate a detailed career roadmap based on: Data Science. Provide specific steps, skills needed, and timeframes.".to_string(),
        }]
    );
    assert!(state.roadmap().is_generating());

    // Only one generation at a time.
    let (state, effects) = update(
        state,
        Msg::RoadmapGenerationRequested {
            topic: "Design".to_string(),
        },
    );
    assert!(effects.is_empty());

    let (state, effects) = update(
        state,
        Msg::RoadmapGenerated {
            topic: "Data Science".to_string(),
            result: Ok("Start with statistics.".to_string()),
            stamp: stamp("7"),
        },
    );
    assert_eq!(persisted(&effects), vec!["7"]);
    let item = &state.roadmap().items()[0];
    assert_eq!(item.title, "Career Path: Data Science");
    assert_eq!(item.description, "Start with statistics.");
    assert_eq!(item.priority, Priority::High);
    assert_eq!(item.source, ItemSource::AiGenerated);
    assert!(!state.roadmap().is_generating());
}

#[test]
fn generation_failure_sets_error() {
    let (state, _) = update(
        AppState::new(),
        Msg::RoadmapGenerationRequested {
            topic: "Law".to_string(),
        },
    );
    let (state, effects) = update(
        state,
        Msg::RoadmapGenerated {
            topic: "Law".to_string(),
            result: Err("timeout".to_string()),
            stamp: stamp("8"),
        },
    );
    assert!(effects.is_empty());
    assert!(state.roadmap().items().is_empty());
    assert_eq!(state.roadmap().error(), Some(ROADMAP_GENERATION_ERROR));
}

#[test]
fn empty_reply_gets_default_description() {
    let item = NewRoadmapItem::generated("UX", "  ");
    assert_eq!(item.description, "Personalized roadmap for UX");
    assert_eq!(item.estimated_time, "3-6 months");
}
