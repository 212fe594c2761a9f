use std::time::Duration;

use super::*;
use test_utils::{builder::TestBuilder, factory, factory::request::RequestFactory};
use url::Url;
use wiremock::{
    matchers::{body_string_contains, method},
    Mock, MockServer, ResponseTemplate,
};

fn client(server: &MockServer) -> OllamaClient {
    let url = Url::parse(&format!("{}/api/generate", server.uri())).unwrap();
    OllamaClient::new(reqwest::Client::new(), url, "llama2".to_string())
}

/// Tests asking a blank question.
///
/// Verifies that the service rejects it before contacting the model.
///
/// Expected: Err(AppError::BadRequest) and no request sent
#[tokio::test]
async fn rejects_blank_question() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    let client = client(&server);

    let result = ChatbotService::new(db, &client).ask("   ").await;

    match result {
        Err(AppError::BadRequest(msg)) => assert_eq!(msg, "Question is required."),
        other => panic!("expected BadRequest, got {other:?}"),
    }

    Ok(())
}

/// Tests a French question about a specific request.
///
/// Verifies that the targeted request is rendered into the prompt and a French answer is
/// returned trimmed.
///
/// Expected: Ok with the model's answer
#[tokio::test]
async fn forwards_snapshot_and_returns_french_answer() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let frontdesk = factory::create_user(db).await?;
    let request = RequestFactory::new(db, frontdesk.id)
        .name("Cooperative Argane Sud")
        .build()
        .await?;

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_string_contains("Cooperative Argane Sud"))
        .and(body_string_contains("INSTRUCTIONS CRITIQUES"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "response": "  La demande est enregistrée à l'état NOUVEAU.  "
        })))
        .expect(1)
        .mount(&server)
        .await;
    let client = client(&server);

    let question = format!("Quel est l'état de la demande id={} ?", request.id);
    let answer = ChatbotService::new(db, &client).ask(&question).await?;

    assert_eq!(answer, "La demande est enregistrée à l'état NOUVEAU.");

    Ok(())
}

/// Tests an English question answered in the wrong language.
///
/// Expected: Ok with the English fallback greeting
#[tokio::test]
async fn replaces_answer_in_wrong_language() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"response": "Ok."})),
        )
        .mount(&server)
        .await;
    let client = client(&server);

    let answer = ChatbotService::new(db, &client)
        .ask("Hello, how many users are there?")
        .await?;

    assert_eq!(answer, Language::English.fallback_greeting());

    Ok(())
}

/// Tests a failing generation endpoint.
///
/// Expected: Ok with the French upstream failure message
#[tokio::test]
async fn maps_upstream_failure_to_apology() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    let client = client(&server);

    let answer = ChatbotService::new(db, &client)
        .ask("Bonjour, combien d'attestations ?")
        .await?;

    assert_eq!(answer, Language::French.upstream_error_message());

    Ok(())
}

/// Tests a generation endpoint that never answers in time.
///
/// Verifies that the call is cut off by the client timeout instead of hanging the request.
///
/// Expected: Ok with the French technical difficulties message
#[tokio::test]
async fn maps_hung_endpoint_to_transport_apology() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"response": "Bonjour, voici la réponse."}))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;
    let client = client(&server).with_timeout(Duration::from_millis(200));

    let answer = ChatbotService::new(db, &client)
        .ask("Bonjour, combien de demandes sont en cours ?")
        .await?;

    assert_eq!(answer, Language::French.transport_error_message());

    Ok(())
}
