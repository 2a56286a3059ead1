use crate::{
    CommunityPost, Dashboard, LoginForm, NewRoadmapItem, RegisterForm, RoadmapItem, RoadmapPatch,
    RoadmapStamp, SubmissionId, TrendingCareer,
};

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// User answered the current wizard question.
    AnswerSubmitted(String),
    /// Scoring endpoint finished for a submission.
    AssessmentCompleted {
        submission_id: SubmissionId,
        result: Result<Dashboard, String>,
    },
    /// User restarted the assessment.
    AssessmentReset,
    /// User sent a message in the assistant chat.
    ChatSubmitted(String),
    /// Assistant reply (or failure) for a chat session.
    ChatReplied {
        session_id: String,
        reply: Result<String, String>,
    },
    /// User started a new chat.
    NewChatStarted { session_id: String },
    /// User removed a chat from history. `next_session_id` is used if the
    /// active chat was removed.
    ChatDeleted {
        session_id: String,
        next_session_id: String,
    },
    /// Roadmap loaded from the local store at startup.
    RoadmapRestored(Vec<RoadmapItem>),
    RoadmapItemAdded {
        item: NewRoadmapItem,
        stamp: RoadmapStamp,
    },
    RoadmapItemUpdated { id: String, patch: RoadmapPatch },
    RoadmapItemDeleted { id: String },
    /// User asked the assistant to draft a roadmap item about `topic`.
    RoadmapGenerationRequested { topic: String },
    RoadmapGenerated {
        topic: String,
        result: Result<String, String>,
        stamp: RoadmapStamp,
    },
    LoginSubmitted(LoginForm),
    RegisterSubmitted(RegisterForm),
    /// Token exchange finished.
    AuthCompleted(Result<(), String>),
    /// A stored token was found at startup.
    SessionRestored,
    /// User signed out.
    SignOutClicked,
    /// The API answered 401; the token is already gone.
    SessionExpired,
    TrendingRequested,
    TrendingLoaded(Result<Vec<TrendingCareer>, String>),
    /// Community board loaded from the local store, or seeded from the catalog.
    CommunityRestored(Vec<CommunityPost>),
    PostLiked { id: String },
    /// Only the post's comment count is kept.
    CommentAdded { id: String, comment: String },
    /// Render tick.
    Tick,
}
