use nexora_core::{
    update, AppState, AuthStatus, Msg, WizardPhaseView, CHAT_GREETING, INITIAL_SESSION_ID,
    WIZARD_GREETING,
};

#[test]
fn tick_changes_nothing() {
    let state = AppState::new();
    let (mut next, effects) = update(state.clone(), Msg::Tick);
    assert!(effects.is_empty());
    assert!(!next.consume_dirty());
    assert_eq!(state, next);
}

#[test]
fn fresh_state_view() {
    let view = AppState::new().view();

    assert!(matches!(
        view.wizard.phase,
        WizardPhaseView::Asking { step: 0, total: 5, .. }
    ));
    assert_eq!(view.wizard.transcript.len(), 1);
    assert_eq!(view.wizard.transcript[0].text, WIZARD_GREETING);
    assert_eq!(view.chat_session_id, INITIAL_SESSION_ID);
    assert_eq!(view.chat_transcript[0].text, CHAT_GREETING);
    assert_eq!(view.auth, AuthStatus::SignedOut);
    assert!(view.roadmap.items.is_empty());
    assert!(!view.trending_loading);
    assert!(view.community.is_empty());
}
