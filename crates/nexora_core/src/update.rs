use nexora_logging::{nexora_debug, nexora_info, nexora_warn};

use crate::roadmap::{generation_prompt, ROADMAP_GENERATION_ERROR};
use crate::{AppState, AuthStatus, Effect, Msg, NewRoadmapItem, Notice, WizardStep};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::AnswerSubmitted(raw) => match state.wizard.answer(&raw) {
            Ok(WizardStep::Advanced { step }) => {
                nexora_debug!("wizard advanced to step {}", step);
                state.mark_dirty();
                Vec::new()
            }
            Ok(WizardStep::Completed {
                submission_id,
                answers,
            }) => {
                nexora_info!("wizard complete, submission {}", submission_id);
                state.mark_dirty();
                vec![Effect::SubmitAssessment {
                    submission_id,
                    answers,
                }]
            }
            Ok(WizardStep::Ignored) => Vec::new(),
            Err(rejection) => {
                nexora_debug!("wizard answer rejected: {}", rejection);
                state.push_notice(Notice::error("Invalid Answer", rejection.to_string()));
                Vec::new()
            }
        },
        Msg::AssessmentCompleted {
            submission_id,
            result,
        } => {
            if let Err(reason) = &result {
                nexora_warn!("assessment {} failed: {}", submission_id, reason);
            }
            if state.wizard.complete(submission_id, result) {
                state.mark_dirty();
            } else {
                nexora_debug!("dropping stale assessment result {}", submission_id);
            }
            Vec::new()
        }
        Msg::AssessmentReset => {
            state.wizard.reset();
            state.mark_dirty();
            Vec::new()
        }
        Msg::ChatSubmitted(raw) => match state.chat.submit(&raw) {
            Some(message) => {
                state.mark_dirty();
                vec![Effect::SendChat {
                    session_id: state.chat.session_id().to_string(),
                    message,
                }]
            }
            None => Vec::new(),
        },
        Msg::ChatReplied { session_id, reply } => {
            if state.chat.receive(&session_id, reply) {
                state.mark_dirty();
            } else {
                nexora_debug!("dropping reply for inactive chat {}", session_id);
            }
            Vec::new()
        }
        Msg::NewChatStarted { session_id } => {
            state.chat.start_new(session_id);
            state.mark_dirty();
            Vec::new()
        }
        Msg::ChatDeleted {
            session_id,
            next_session_id,
        } => {
            if state.chat.delete(&session_id) {
                state.chat.start_new(next_session_id);
            }
            state.mark_dirty();
            Vec::new()
        }
        Msg::RoadmapRestored(items) => {
            state.roadmap.restore(items);
            state.mark_dirty();
            Vec::new()
        }
        Msg::RoadmapItemAdded { item, stamp } => {
            if item.title.trim().is_empty() {
                state.push_notice(Notice::error("Invalid Input", "A roadmap item needs a title."));
                return (state, Vec::new());
            }
            state.roadmap.add(item, stamp);
            persist_roadmap(&mut state)
        }
        Msg::RoadmapItemUpdated { id, patch } => {
            if state.roadmap.update(&id, patch) {
                persist_roadmap(&mut state)
            } else {
                state.push_notice(Notice::error("Not Found", format!("No roadmap item with id {id}.")));
                Vec::new()
            }
        }
        Msg::RoadmapItemDeleted { id } => {
            if state.roadmap.delete(&id) {
                persist_roadmap(&mut state)
            } else {
                state.push_notice(Notice::error("Not Found", format!("No roadmap item with id {id}.")));
                Vec::new()
            }
        }
        Msg::RoadmapGenerationRequested { topic } => {
            let topic = topic.trim().to_string();
            if topic.is_empty() {
                state.push_notice(Notice::error("Invalid Input", "Tell me which career to plan for."));
                return (state, Vec::new());
            }
            if !state.roadmap.begin_generation() {
                return (state, Vec::new());
            }
            state.mark_dirty();
            let prompt = generation_prompt(&topic);
            vec![Effect::GenerateRoadmap { topic, prompt }]
        }
        Msg::RoadmapGenerated {
            topic,
            result,
            stamp,
        } => match result {
            Ok(reply) => {
                state.roadmap.finish_generation(None);
                state.roadmap.add(NewRoadmapItem::generated(&topic, &reply), stamp);
                persist_roadmap(&mut state)
            }
            Err(reason) => {
                nexora_warn!("roadmap generation for {:?} failed: {}", topic, reason);
                state
                    .roadmap
                    .finish_generation(Some(ROADMAP_GENERATION_ERROR.to_string()));
                state.mark_dirty();
                Vec::new()
            }
        },
        Msg::LoginSubmitted(form) => {
            if state.auth == AuthStatus::Authenticating {
                return (state, Vec::new());
            }
            match form.validate() {
                Ok(credentials) => {
                    state.auth = AuthStatus::Authenticating;
                    state.mark_dirty();
                    vec![Effect::Login(credentials)]
                }
                Err(err) => {
                    state.push_notice(Notice::error(err.title(), err.to_string()));
                    Vec::new()
                }
            }
        }
        Msg::RegisterSubmitted(form) => {
            if state.auth == AuthStatus::Authenticating {
                return (state, Vec::new());
            }
            match form.validate() {
                Ok(credentials) => {
                    state.auth = AuthStatus::Authenticating;
                    state.mark_dirty();
                    vec![Effect::Register(credentials)]
                }
                Err(err) => {
                    state.push_notice(Notice::error(err.title(), err.to_string()));
                    Vec::new()
                }
            }
        }
        Msg::AuthCompleted(result) => {
            match result {
                Ok(()) => {
                    state.auth = AuthStatus::SignedIn;
                    state.push_notice(Notice::info("Welcome!", "Successfully signed in to your account."));
                }
                Err(reason) => {
                    state.auth = AuthStatus::SignedOut;
                    state.push_notice(Notice::error("Sign In Failed", reason));
                }
            }
            Vec::new()
        }
        Msg::SessionRestored => {
            state.auth = AuthStatus::SignedIn;
            state.mark_dirty();
            Vec::new()
        }
        Msg::SignOutClicked => {
            state.auth = AuthStatus::SignedOut;
            state.mark_dirty();
            vec![Effect::ClearToken]
        }
        Msg::SessionExpired => {
            state.auth = AuthStatus::SignedOut;
            state.push_notice(Notice::error(
                "Session Expired",
                "Your session has ended. Please sign in again.",
            ));
            Vec::new()
        }
        Msg::TrendingRequested => {
            if state.trending.begin() {
                state.mark_dirty();
                vec![Effect::FetchTrending]
            } else {
                Vec::new()
            }
        }
        Msg::TrendingLoaded(result) => {
            state.trending.finish(result);
            state.mark_dirty();
            Vec::new()
        }
        Msg::CommunityRestored(posts) => {
            state.community.restore(posts);
            state.mark_dirty();
            Vec::new()
        }
        Msg::PostLiked { id } => {
            if state.community.like(&id) {
                persist_community(&mut state)
            } else {
                state.push_notice(Notice::error("Not Found", format!("No community post with id {id}.")));
                Vec::new()
            }
        }
        Msg::CommentAdded { id, comment } => {
            if comment.trim().is_empty() {
                state.push_notice(Notice::error("Invalid Input", "A comment can't be empty."));
                return (state, Vec::new());
            }
            if state.community.comment(&id) {
                persist_community(&mut state)
            } else {
                state.push_notice(Notice::error("Not Found", format!("No community post with id {id}.")));
                Vec::new()
            }
        }
        Msg::Tick => Vec::new(),
    };

    (state, effects)
}

fn persist_roadmap(state: &mut AppState) -> Vec<Effect> {
    state.mark_dirty();
    vec![Effect::PersistRoadmap(state.roadmap.items().to_vec())]
}

fn persist_community(state: &mut AppState) -> Vec<Effect> {
    state.mark_dirty();
    vec![Effect::PersistCommunity(state.community.posts().to_vec())]
}
