use crate::{
    AuthStatus, ChatHistoryItem, ChatMessage, CommunityPost, Dashboard, InputKind, RoadmapItem,
    TrendingCareer, Wizard, WizardPhase, QUESTIONS,
};

#[derive(Debug, Clone, PartialEq)]
pub enum WizardPhaseView {
    Asking {
        step: usize,
        total: usize,
        prompt: &'static str,
        kind: InputKind,
        placeholder: Option<&'static str>,
    },
    Submitting,
    Dashboard(Dashboard),
    Error(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct WizardView {
    pub phase: WizardPhaseView,
    pub transcript: Vec<ChatMessage>,
}

impl WizardView {
    pub(crate) fn of(wizard: &Wizard) -> Self {
        let phase = match wizard.phase() {
            WizardPhase::Asking(step) => {
                let question = &QUESTIONS[*step];
                WizardPhaseView::Asking {
                    step: *step,
                    total: QUESTIONS.len(),
                    prompt: question.prompt,
                    kind: question.kind,
                    placeholder: question.placeholder,
                }
            }
            WizardPhase::Submitting { .. } => WizardPhaseView::Submitting,
            WizardPhase::Dashboard(dashboard) => WizardPhaseView::Dashboard(dashboard.clone()),
            WizardPhase::Error { message } => WizardPhaseView::Error(message.clone()),
        };
        Self {
            phase,
            transcript: wizard.transcript().to_vec(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RoadmapView {
    pub items: Vec<RoadmapItem>,
    pub generating: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppViewModel {
    pub wizard: WizardView,
    pub chat_session_id: String,
    pub chat_transcript: Vec<ChatMessage>,
    pub chat_history: Vec<ChatHistoryItem>,
    pub awaiting_chat_reply: bool,
    pub roadmap: RoadmapView,
    pub auth: AuthStatus,
    pub trending: Vec<TrendingCareer>,
    pub trending_loading: bool,
    pub trending_error: Option<String>,
    pub community: Vec<CommunityPost>,
    pub dirty: bool,
}
