use crate::view_model::{AppViewModel, RoadmapView, WizardView};
use crate::{AuthStatus, ChatSession, CommunityBoard, Roadmap, SkillProfile, TrendingState, Wizard};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

/// Transient user-facing message; drained by the front end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub description: String,
}

impl Notice {
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            title: title.into(),
            description: description.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    pub(crate) wizard: Wizard,
    pub(crate) chat: ChatSession,
    pub(crate) roadmap: Roadmap,
    pub(crate) auth: AuthStatus,
    pub(crate) trending: TrendingState,
    pub(crate) community: CommunityBoard,
    notices: Vec<Notice>,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn wizard(&self) -> &Wizard {
        &self.wizard
    }

    pub fn chat(&self) -> &ChatSession {
        &self.chat
    }

    pub fn roadmap(&self) -> &Roadmap {
        &self.roadmap
    }

    pub fn auth_status(&self) -> AuthStatus {
        self.auth
    }

    pub fn trending(&self) -> &TrendingState {
        &self.trending
    }

    pub fn community(&self) -> &CommunityBoard {
        &self.community
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    /// Profile used by the matcher, derived from the current roadmap.
    pub fn skill_profile(&self) -> SkillProfile {
        SkillProfile::from_roadmap(self.roadmap.items())
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            wizard: WizardView::of(&self.wizard),
            chat_session_id: self.chat.session_id().to_string(),
            chat_transcript: self.chat.transcript().to_vec(),
            chat_history: self.chat.history().to_vec(),
            awaiting_chat_reply: self.chat.awaiting_replies() > 0,
            roadmap: RoadmapView {
                items: self.roadmap.items().to_vec(),
                generating: self.roadmap.is_generating(),
                error: self.roadmap.error().map(str::to_string),
            },
            auth: self.auth,
            trending: self.trending.careers().to_vec(),
            trending_loading: self.trending.is_loading(),
            trending_error: self.trending.error().map(str::to_string),
            community: self.community.posts().to_vec(),
            dirty: self.dirty,
        }
    }

    /// Returns whether anything changed since the last call, and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn push_notice(&mut self, notice: Notice) {
        self.notices.push(notice);
        self.dirty = true;
    }
}
