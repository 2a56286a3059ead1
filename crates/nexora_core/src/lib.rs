//! Nexora core: pure state machine, job matching and view-model helpers.
mod answers;
mod auth;
mod chat;
mod community;
mod effect;
mod jobs;
mod matcher;
mod msg;
mod roadmap;
mod state;
mod trending;
mod update;
mod view_model;
mod wizard;

pub use answers::{
    AssessmentAnswers, CareerDashboard, Dashboard, DashboardSummary, Marks, Mood, Stream,
    SuggestedCareer,
};
pub use auth::{
    is_valid_email, AuthStatus, Credentials, LoginForm, PasswordCheck, RegisterForm,
    ValidationError,
};
pub use chat::{
    chat_title, ChatHistoryItem, ChatMessage, ChatSession, Role, CHAT_FAILURE_REPLY,
    CHAT_GREETING, INITIAL_SESSION_ID,
};
pub use community::{CommunityBoard, CommunityPost, PostKind, COMMUNITY_STORAGE_KEY};
pub use effect::Effect;
pub use jobs::{
    mentors_for, Availability, Catalog, JobRecord, JobSource, JobType, Mentor, StaticCatalog,
};
pub use matcher::{
    rank, search, LocationFilter, SearchFilters, SkillProfile, INTEREST_WEIGHT, MIN_MATCH_SCORE,
    SKILL_WEIGHT,
};
pub use msg::Msg;
pub use roadmap::{
    generation_prompt, ItemSource, NewRoadmapItem, Priority, Roadmap, RoadmapItem, RoadmapPatch,
    RoadmapStamp, RoadmapStatus, ROADMAP_CONVERSATION_ID, ROADMAP_GENERATION_ERROR,
    ROADMAP_STORAGE_KEY,
};
pub use state::{AppState, Notice, NoticeLevel};
pub use trending::{TrendingCareer, TrendingState};
pub use update::update;
pub use view_model::{AppViewModel, RoadmapView, WizardPhaseView, WizardView};
pub use wizard::{
    AnswerField, InputKind, Question, SubmissionId, Wizard, WizardPhase, WizardRejection,
    WizardStep, QUESTIONS, WIZARD_GREETING,
};
