use crate::{AssessmentAnswers, CommunityPost, Credentials, RoadmapItem, SubmissionId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    SubmitAssessment {
        submission_id: SubmissionId,
        answers: AssessmentAnswers,
    },
    SendChat { session_id: String, message: String },
    GenerateRoadmap { topic: String, prompt: String },
    /// Rewrite the whole roadmap list in the local store.
    PersistRoadmap(Vec<RoadmapItem>),
    Login(Credentials),
    /// Register, then exchange the same credentials for a token.
    Register(Credentials),
    ClearToken,
    FetchTrending,
    /// Rewrite the community board, counters included, in the local store.
    PersistCommunity(Vec<CommunityPost>),
}
