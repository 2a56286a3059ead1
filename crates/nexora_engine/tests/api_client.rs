use std::sync::Arc;

use nexora_core::{AssessmentAnswers, Credentials, Dashboard, Marks, Mood, Stream};
use nexora_engine::{
    ApiSettings, CareerApi, ChatRequest, FailureKind, MemoryTokenStore, ReqwestApi, TokenStore,
};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn api_for(server: &MockServer, tokens: Arc<MemoryTokenStore>) -> ReqwestApi {
    let settings = ApiSettings {
        base_url: server.uri(),
        ..ApiSettings::default()
    };
    ReqwestApi::new(&settings, tokens).expect("client builds")
}

fn answers() -> AssessmentAnswers {
    AssessmentAnswers {
        name: "Asha".to_string(),
        stream: Stream::ComputerScience,
        marks: Marks::High,
        interests: "AI, robotics".to_string(),
        mood: Mood::Curious,
    }
}

#[tokio::test]
async fn assessment_posts_answers_and_parses_dashboard() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/chatbot/assessment"))
        .and(body_json(json!({
            "name": "Asha",
            "stream": "Computer Science & IT",
            "marks": "80-89%",
            "interests": "AI, robotics",
            "mood": "Curious & Open"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "summary": { "greeting": "Hi Asha", "recommendation": "Try ML" },
            "suggestedCareers": [{ "title": "ML Engineer", "confidence": 0.9 }],
            "nextSteps": ["Learn Python"]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let api = api_for(&server, Arc::new(MemoryTokenStore::new()));
    let dashboard = api.submit_assessment(&answers()).await.expect("dashboard");

    match dashboard {
        Dashboard::Career(career) => {
            assert_eq!(career.summary.greeting, "Hi Asha");
            assert_eq!(career.suggested_careers[0].title, "ML Engineer");
            assert_eq!(career.next_steps, vec!["Learn Python".to_string()]);
        }
        other => panic!("expected career dashboard, got {other:?}"),
    }
}

#[tokio::test]
async fn unknown_dashboard_shape_is_kept_raw() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/chatbot/assessment"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "ok" })))
        .mount(&server)
        .await;

    let api = api_for(&server, Arc::new(MemoryTokenStore::new()));
    let dashboard = api.submit_assessment(&answers()).await.unwrap();
    assert_eq!(dashboard, Dashboard::Opaque(json!({ "message": "ok" })));
}

#[tokio::test]
async fn bearer_token_is_attached_when_present() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/chat/ask/"))
        .and(header("authorization", "Bearer abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "text": "hello" })))
        .expect(1)
        .mount(&server)
        .await;

    let api = api_for(&server, Arc::new(MemoryTokenStore::with_token("abc123")));
    let request = ChatRequest::Session {
        session_id: "current".to_string(),
        message: "hi".to_string(),
    };
    assert_eq!(api.ask(&request).await.unwrap(), "hello");
}

#[tokio::test]
async fn unauthorized_clears_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/trending-careers"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let tokens = Arc::new(MemoryTokenStore::with_token("stale"));
    let api = api_for(&server, tokens.clone());
    let err = api.trending_careers().await.unwrap_err();

    assert_eq!(err.kind, FailureKind::Unauthorized);
    assert!(err.is_unauthorized());
    assert_eq!(tokens.get(), None);
}

#[tokio::test]
async fn chat_reply_falls_back_to_reply_field_then_ellipsis() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/chat/ask/"))
        .and(body_json(json!({
            "message": "plan for Data Science",
            "conversation_id": "roadmap-generation"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "reply": "step one" })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/chat/ask/"))
        .and(body_json(json!({ "session_id": "s1", "message": "?" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let api = api_for(&server, Arc::new(MemoryTokenStore::new()));
    let drafted = api
        .ask(&ChatRequest::Conversation {
            message: "plan for Data Science".to_string(),
            conversation_id: "roadmap-generation".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(drafted, "step one");

    let empty = api
        .ask(&ChatRequest::Session {
            session_id: "s1".to_string(),
            message: "?".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(empty, "...");
}

#[tokio::test]
async fn login_stores_access_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/token/"))
        .and(body_json(json!({ "username": "a@b.co", "password": "pw" })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "access": "tok", "refresh": "r" })),
        )
        .mount(&server)
        .await;

    let tokens = Arc::new(MemoryTokenStore::new());
    let api = api_for(&server, tokens.clone());
    let credentials = Credentials {
        username: "a@b.co".to_string(),
        password: "pw".to_string(),
    };
    api.obtain_token(&credentials).await.unwrap();
    assert_eq!(tokens.get().as_deref(), Some("tok"));
}

#[tokio::test]
async fn token_response_without_access_is_a_decode_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/token/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "refresh": "r" })))
        .mount(&server)
        .await;

    let tokens = Arc::new(MemoryTokenStore::new());
    let api = api_for(&server, tokens.clone());
    let credentials = Credentials {
        username: "a@b.co".to_string(),
        password: "pw".to_string(),
    };
    let err = api.obtain_token(&credentials).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Decode);
    assert_eq!(tokens.get(), None);
}

#[tokio::test]
async fn register_failure_carries_server_error_detail() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/register/"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({ "error": "Username already exists" })),
        )
        .mount(&server)
        .await;

    let api = api_for(&server, Arc::new(MemoryTokenStore::new()));
    let credentials = Credentials {
        username: "a@b.co".to_string(),
        password: "Str0ng!pass".to_string(),
    };
    let err = api.register(&credentials).await.unwrap_err();

    assert_eq!(err.kind, FailureKind::HttpStatus(400));
    assert_eq!(err.user_message("fallback"), "Username already exists");
}

#[tokio::test]
async fn server_error_without_body_uses_fallback_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/chatbot/assessment"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let api = api_for(&server, Arc::new(MemoryTokenStore::new()));
    let err = api.submit_assessment(&answers()).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(500));
    assert_eq!(err.user_message("Something went wrong"), "Something went wrong");
}

#[tokio::test]
async fn trending_accepts_numeric_ids_and_null_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/trending-careers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 7, "title": "Data Scientist", "growth": 22.5, "salary": "$120k", "skills": ["Python"] }
        ])))
        .up_to_n_times(1)
        .mount(&server)
        .await;

    let api = api_for(&server, Arc::new(MemoryTokenStore::new()));
    let careers = api.trending_careers().await.unwrap();
    assert_eq!(careers.len(), 1);
    assert_eq!(careers[0].id, "7");
    assert_eq!(careers[0].skills, vec!["Python".to_string()]);

    Mock::given(method("GET"))
        .and(path("/api/trending-careers"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("null", "application/json"))
        .mount(&server)
        .await;
    assert!(api.trending_careers().await.unwrap().is_empty());
}

#[test]
fn invalid_base_url_is_rejected() {
    let settings = ApiSettings {
        base_url: "not a url".to_string(),
        ..ApiSettings::default()
    };
    let err = ReqwestApi::new(&settings, Arc::new(MemoryTokenStore::new()))
        .err()
        .expect("invalid url");
    assert_eq!(err.kind, FailureKind::InvalidUrl);
}
