use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use nexora_core::{AssessmentAnswers, Credentials, SubmissionId, ROADMAP_CONVERSATION_ID};
use nexora_logging::{nexora_debug, nexora_error};

use crate::client::{CareerApi, ChatRequest};
use crate::EngineEvent;

enum EngineCommand {
    SubmitAssessment {
        submission_id: SubmissionId,
        answers: AssessmentAnswers,
    },
    SendChat {
        session_id: String,
        message: String,
    },
    DraftRoadmap {
        topic: String,
        prompt: String,
    },
    Login(Credentials),
    Register(Credentials),
    FetchTrending,
}

pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(api: Arc<dyn CareerApi>) -> std::io::Result<Self> {
        let (cmd_tx, cmd_rx) = mpsc::channel::<EngineCommand>();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()?;

        thread::Builder::new()
            .name("nexora-engine".into())
            .spawn(move || {
                while let Ok(command) = cmd_rx.recv() {
                    let api = api.clone();
                    let event_tx = event_tx.clone();
                    runtime.spawn(async move {
                        handle_command(api.as_ref(), command, event_tx).await;
                    });
                }
                nexora_debug!("Engine command channel closed");
            })?;

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn submit_assessment(&self, submission_id: SubmissionId, answers: AssessmentAnswers) {
        self.send(EngineCommand::SubmitAssessment {
            submission_id,
            answers,
        });
    }

    pub fn send_chat(&self, session_id: impl Into<String>, message: impl Into<String>) {
        self.send(EngineCommand::SendChat {
            session_id: session_id.into(),
            message: message.into(),
        });
    }

    pub fn draft_roadmap(&self, topic: impl Into<String>, prompt: impl Into<String>) {
        self.send(EngineCommand::DraftRoadmap {
            topic: topic.into(),
            prompt: prompt.into(),
        });
    }

    pub fn login(&self, credentials: Credentials) {
        self.send(EngineCommand::Login(credentials));
    }

    pub fn register(&self, credentials: Credentials) {
        self.send(EngineCommand::Register(credentials));
    }

    pub fn fetch_trending(&self) {
        self.send(EngineCommand::FetchTrending);
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }

    fn send(&self, command: EngineCommand) {
        if self.cmd_tx.send(command).is_err() {
            nexora_error!("Engine thread is gone; command dropped");
        }
    }
}

async fn handle_command(
    api: &dyn CareerApi,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    let (event, unauthorized) = match command {
        EngineCommand::SubmitAssessment {
            submission_id,
            answers,
        } => {
            let result = api.submit_assessment(&answers).await;
            let unauthorized = is_unauthorized(&result);
            (
                EngineEvent::AssessmentCompleted {
                    submission_id,
                    result,
                },
                unauthorized,
            )
        }
        EngineCommand::SendChat {
            session_id,
            message,
        } => {
            let request = ChatRequest::Session {
                session_id: session_id.clone(),
                message,
            };
            let result = api.ask(&request).await;
            let unauthorized = is_unauthorized(&result);
            (EngineEvent::ChatReplied { session_id, result }, unauthorized)
        }
        EngineCommand::DraftRoadmap { topic, prompt } => {
            let request = ChatRequest::Conversation {
                message: prompt,
                conversation_id: ROADMAP_CONVERSATION_ID.to_string(),
            };
            let result = api.ask(&request).await;
            let unauthorized = is_unauthorized(&result);
            (EngineEvent::RoadmapDrafted { topic, result }, unauthorized)
        }
        EngineCommand::Login(credentials) => {
            let result = api.obtain_token(&credentials).await;
            (EngineEvent::AuthCompleted { result }, false)
        }
        EngineCommand::Register(credentials) => {
            let result = match api.register(&credentials).await {
                Ok(()) => api.obtain_token(&credentials).await,
                Err(err) => Err(err),
            };
            (EngineEvent::AuthCompleted { result }, false)
        }
        EngineCommand::FetchTrending => {
            let result = api.trending_careers().await;
            let unauthorized = is_unauthorized(&result);
            (EngineEvent::TrendingLoaded { result }, unauthorized)
        }
    };

    let _ = event_tx.send(event);
    if unauthorized {
        let _ = event_tx.send(EngineEvent::SessionExpired);
    }
}

fn is_unauthorized<T>(result: &Result<T, crate::ApiError>) -> bool {
    matches!(result, Err(err) if err.is_unauthorized())
}
