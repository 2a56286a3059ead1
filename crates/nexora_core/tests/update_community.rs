use nexora_core::{update, AppState, CommunityPost, Effect, Msg, NoticeLevel, PostKind};
use pretty_assertions::assert_eq;

fn post(id: &str, likes: u32, comments: u32) -> CommunityPost {
    CommunityPost {
        id: id.to_string(),
        author: "Maria Garcia".to_string(),
        title: "React performance tips".to_string(),
        content: "Memoize the expensive parts.".to_string(),
        likes,
        comments,
        tags: vec!["react".to_string()],
        created_at: "2024-01-14T15:45:00Z".to_string(),
        kind: PostKind::Tip,
    }
}

fn board() -> AppState {
    let (state, effects) = update(
        AppState::new(),
        Msg::CommunityRestored(vec![post("1", 45, 12), post("2", 32, 8)]),
    );
    assert!(effects.is_empty());
    state
}

fn persisted(effects: &[Effect]) -> Vec<(String, u32, u32)> {
    match effects {
        [Effect::PersistCommunity(posts)] => posts
            .iter()
            .map(|p| (p.id.clone(), p.likes, p.comments))
            .collect(),
        other => panic!("expected one persist effect, got {other:?}"),
    }
}

#[test]
fn like_bumps_only_that_post_and_persists_the_board() {
    let (state, effects) = update(board(), Msg::PostLiked { id: "2".to_string() });

    assert_eq!(
        persisted(&effects),
        vec![("1".to_string(), 45, 12), ("2".to_string(), 33, 8)]
    );
    assert_eq!(state.view().community[1].likes, 33);
}

#[test]
fn comment_bumps_the_counter() {
    let (state, effects) = update(
        board(),
        Msg::CommentAdded {
            id: "1".to_string(),
            comment: "Thanks, this helped!".to_string(),
        },
    );

    assert_eq!(
        persisted(&effects),
        vec![("1".to_string(), 45, 13), ("2".to_string(), 32, 8)]
    );
    assert_eq!(state.community().posts()[0].comments, 13);
}

#[test]
fn blank_comment_is_rejected() {
    let (mut state, effects) = update(
        board(),
        Msg::CommentAdded {
            id: "1".to_string(),
            comment: "   ".to_string(),
        },
    );

    assert!(effects.is_empty());
    assert_eq!(state.community().posts()[0].comments, 12);
    let notices = state.take_notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].title, "Invalid Input");
}

#[test]
fn unknown_post_reports_not_found() {
    let (mut state, effects) = update(board(), Msg::PostLiked { id: "9".to_string() });

    assert!(effects.is_empty());
    let notices = state.take_notices();
    assert_eq!(notices[0].level, NoticeLevel::Error);
    assert_eq!(notices[0].description, "No community post with id 9.");
}
