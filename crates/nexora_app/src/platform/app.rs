use std::time::{Duration, Instant};

use nexora_core::{update, AppState, AppViewModel, CommunityPost, Msg, Notice};
use nexora_logging::{nexora_debug, nexora_warn};

use super::effects::EffectRunner;

const POLL_INTERVAL: Duration = Duration::from_millis(75);

/// Owns the single `AppState` and feeds it messages from the user and the engine.
pub struct App {
    state: AppState,
    runner: EffectRunner,
}

impl App {
    pub fn new(runner: EffectRunner) -> Self {
        Self {
            state: AppState::new(),
            runner,
        }
    }

    /// Restores the persisted roadmap and signed-in state.
    pub fn restore(&mut self) {
        let items = self.runner.storage().load_roadmap();
        self.dispatch(Msg::RoadmapRestored(items));
        if self.runner.storage().tokens().get().is_some() {
            self.dispatch(Msg::SessionRestored);
        }
    }

    /// Loads the stored community board, or seeds it with `seed` on first use.
    pub fn restore_community(&mut self, seed: Vec<CommunityPost>) {
        let posts = self.runner.storage().load_community().unwrap_or(seed);
        self.dispatch(Msg::CommunityRestored(posts));
    }

    pub fn dispatch(&mut self, msg: Msg) -> bool {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        self.runner.run(effects);
        self.state.consume_dirty()
    }

    /// Pumps engine events until no request is outstanding or `limit` passes.
    pub fn settle(&mut self, limit: Duration) {
        let deadline = Instant::now() + limit;
        while self.runner.pending() > 0 {
            let now = Instant::now();
            if now >= deadline {
                nexora_warn!("Gave up waiting for {} engine events", self.runner.pending());
                return;
            }
            let wait = POLL_INTERVAL.min(deadline - now);
            match self.runner.next_msg(wait) {
                Some(msg) => {
                    nexora_debug!("engine -> {:?}", msg_name(&msg));
                    self.dispatch(msg);
                }
                None => {
                    self.dispatch(Msg::Tick);
                }
            }
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn view(&self) -> AppViewModel {
        self.state.view()
    }

    pub fn take_notices(&mut self) -> Vec<Notice> {
        self.state.take_notices()
    }
}

fn msg_name(msg: &Msg) -> &'static str {
    match msg {
        Msg::AssessmentCompleted { .. } => "AssessmentCompleted",
        Msg::ChatReplied { .. } => "ChatReplied",
        Msg::RoadmapGenerated { .. } => "RoadmapGenerated",
        Msg::AuthCompleted(_) => "AuthCompleted",
        Msg::TrendingLoaded(_) => "TrendingLoaded",
        Msg::SessionExpired => "SessionExpired",
        _ => "other",
    }
}
