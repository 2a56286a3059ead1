use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use nexora_core::{Effect, Msg, RoadmapStamp};
use nexora_engine::{ApiError, CareerApi, EngineEvent, EngineHandle, TokenStore};
use nexora_logging::{nexora_debug, nexora_info, nexora_warn};

use super::persistence::Storage;

const LOGIN_FAILED: &str = "Invalid email or password. Please try again.";
const REGISTER_FAILED: &str = "Something went wrong. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AuthRequest {
    Login,
    Register,
}

/// Executes effects from the core and turns engine events back into messages.
pub struct EffectRunner {
    engine: EngineHandle,
    storage: Storage,
    tokens: Arc<dyn TokenStore>,
    in_flight: usize,
    expiries_due: usize,
    auth_request: Option<AuthRequest>,
}

impl EffectRunner {
    pub fn new(api: Arc<dyn CareerApi>, storage: Storage) -> std::io::Result<Self> {
        let tokens = storage.tokens();
        Ok(Self {
            engine: EngineHandle::new(api)?,
            storage,
            tokens,
            in_flight: 0,
            expiries_due: 0,
            auth_request: None,
        })
    }

    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    /// Requests sent to the engine whose events have not arrived yet.
    pub fn pending(&self) -> usize {
        self.in_flight + self.expiries_due
    }

    pub fn run(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::SubmitAssessment {
                    submission_id,
                    answers,
                } => {
                    nexora_info!("SubmitAssessment submission_id={}", submission_id);
                    self.engine.submit_assessment(submission_id, answers);
                    self.in_flight += 1;
                }
                Effect::SendChat {
                    session_id,
                    message,
                } => {
                    nexora_debug!("SendChat session_id={} len={}", session_id, message.len());
                    self.engine.send_chat(session_id, message);
                    self.in_flight += 1;
                }
                Effect::GenerateRoadmap { topic, prompt } => {
                    nexora_info!("GenerateRoadmap topic={:?}", topic);
                    self.engine.draft_roadmap(topic, prompt);
                    self.in_flight += 1;
                }
                Effect::PersistRoadmap(items) => {
                    nexora_debug!("PersistRoadmap items={}", items.len());
                    self.storage.save_roadmap(&items);
                }
                Effect::Login(credentials) => {
                    self.auth_request = Some(AuthRequest::Login);
                    self.engine.login(credentials);
                    self.in_flight += 1;
                }
                Effect::Register(credentials) => {
                    self.auth_request = Some(AuthRequest::Register);
                    self.engine.register(credentials);
                    self.in_flight += 1;
                }
                Effect::ClearToken => {
                    nexora_info!("Clearing stored token");
                    self.tokens.clear();
                }
                Effect::FetchTrending => {
                    self.engine.fetch_trending();
                    self.in_flight += 1;
                }
                Effect::PersistCommunity(posts) => {
                    nexora_debug!("PersistCommunity posts={}", posts.len());
                    self.storage.save_community(&posts);
                }
            }
        }
    }

    /// Waits up to `timeout` for the next engine event.
    pub fn next_msg(&mut self, timeout: Duration) -> Option<Msg> {
        let event = self.engine.recv_timeout(timeout)?;
        Some(self.translate(event))
    }

    fn translate(&mut self, event: EngineEvent) -> Msg {
        match event {
            EngineEvent::SessionExpired => {
                self.expiries_due = self.expiries_due.saturating_sub(1);
                nexora_warn!("Session expired");
                Msg::SessionExpired
            }
            EngineEvent::AuthCompleted { result } => {
                self.settled();
                let fallback = match self.auth_request.take() {
                    Some(AuthRequest::Register) => REGISTER_FAILED,
                    Some(AuthRequest::Login) | None => LOGIN_FAILED,
                };
                if let Err(err) = &result {
                    nexora_warn!("Authentication failed: {}", err);
                }
                Msg::AuthCompleted(result.map_err(|err| err.user_message(fallback)))
            }
            EngineEvent::AssessmentCompleted {
                submission_id,
                result,
            } => {
                self.settled();
                Msg::AssessmentCompleted {
                    submission_id,
                    result: result.map_err(|err| self.describe(err)),
                }
            }
            EngineEvent::ChatReplied { session_id, result } => {
                self.settled();
                Msg::ChatReplied {
                    session_id,
                    reply: result.map_err(|err| self.describe(err)),
                }
            }
            EngineEvent::RoadmapDrafted { topic, result } => {
                self.settled();
                Msg::RoadmapGenerated {
                    topic,
                    result: result.map_err(|err| self.describe(err)),
                    stamp: new_stamp(),
                }
            }
            EngineEvent::TrendingLoaded { result } => {
                self.settled();
                Msg::TrendingLoaded(result.map_err(|err| self.describe(err)))
            }
        }
    }

    fn settled(&mut self) {
        self.in_flight = self.in_flight.saturating_sub(1);
    }

    // An unauthorized result is always followed by a SessionExpired event.
    fn describe(&mut self, err: ApiError) -> String {
        if err.is_unauthorized() {
            self.expiries_due += 1;
        }
        err.user_message(&err.to_string())
    }
}

static LAST_ID: AtomicI64 = AtomicI64::new(0);

/// Millisecond timestamp ids, bumped when two are taken in the same millisecond.
fn next_id() -> i64 {
    let now = Utc::now().timestamp_millis();
    let previous = LAST_ID
        .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| Some(now.max(last + 1)))
        .unwrap_or(now);
    now.max(previous + 1)
}

pub fn new_stamp() -> RoadmapStamp {
    RoadmapStamp {
        id: next_id().to_string(),
        created_at: Utc::now().to_rfc3339(),
    }
}

pub fn new_session_id() -> String {
    format!("chat_{}", next_id())
}
