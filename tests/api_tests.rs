// tests/api_tests.rs

use quiz_service::{config::Config, routes, state::AppState};

/// Helper function to spawn the app on a random port for testing.
/// Returns the base URL (e.g., "http://127.0.0.1:12345").
async fn spawn_app() -> String {
    let config = Config {
        host: "127.0.0.1".to_string(),
        port: 0,
        rust_log: "error".to_string(),
        log_dir: "logs".to_string(),
        allowed_origins: vec!["http://localhost:3000".to_string()],
    };

    let state = AppState::in_memory(config);
    let app = routes::create_router(state);

    // Bind to port 0 to get a random available port
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port");

    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    address
}

fn capital_quiz() -> serde_json::Value {
    serde_json::json!({
        "title": "Sample Quiz",
        "questions": [
            {
                "text": "What is the capital of India?",
                "options": ["Mumbai", "Pune", "Delhi", "Jaipur"],
                "correct_option": 2
            }
        ]
    })
}

/// Creates the capital quiz and returns its id.
async fn create_capital_quiz(client: &reqwest::Client, address: &str) -> String {
    let body: serde_json::Value = client
        .post(&format!("{}/api/quizzes", address))
        .json(&capital_quiz())
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse create response");

    body["id"].as_str().expect("id not found").to_string()
}

async fn submit(
    client: &reqwest::Client,
    address: &str,
    quiz_id: &str,
    user_id: &str,
    question_id: &str,
    body: serde_json::Value,
) -> reqwest::Response {
    client
        .post(&format!(
            "{}/api/quizzes/{}/users/{}/questions/{}/answer",
            address, quiz_id, user_id, question_id
        ))
        .json(&body)
        .send()
        .await
        .expect("Failed to execute request")
}

#[tokio::test]
async fn unknown_path_returns_404() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .get(&format!("{}/random_path_that_does_not_exist", address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn create_quiz_returns_201_with_answer_keys() {
    // Arrange
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    // Act
    let response = client
        .post(&format!("{}/api/quizzes", address))
        .json(&capital_quiz())
        .send()
        .await
        .expect("Failed to execute request");

    // Assert
    assert_eq!(response.status().as_u16(), 201);
    let body: serde_json::Value = response.json().await.unwrap();
    assert!(body["id"].is_string());
    assert_eq!(body["message"], "Quiz created successfully.");
    assert_eq!(body["quiz"]["id"], body["id"]);
    assert_eq!(body["quiz"]["questions"][0]["id"], "q1");
    assert_eq!(body["quiz"]["questions"][0]["correct_option"], 2);
}

#[tokio::test]
async fn create_quiz_with_no_questions_returns_400() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .post(&format!("{}/api/quizzes", address))
        .json(&serde_json::json!({ "title": "Invalid", "questions": [] }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 400);
    let body: serde_json::Value = response.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().contains("questions"));
}

#[tokio::test]
async fn create_quiz_with_three_options_returns_400() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .post(&format!("{}/api/quizzes", address))
        .json(&serde_json::json!({
            "title": "Short",
            "questions": [
                { "text": "Pick one", "options": ["a", "b", "c"], "correct_option": 0 }
            ]
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn create_quiz_with_non_numeric_correct_option_returns_400() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .post(&format!("{}/api/quizzes", address))
        .json(&serde_json::json!({
            "title": "Typed",
            "questions": [
                { "text": "Pick one", "options": ["a", "b", "c", "d"], "correct_option": "two" }
            ]
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 400);
    let body: serde_json::Value = response.json().await.unwrap();
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn create_quiz_with_missing_fields_returns_json_400() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    for payload in [
        serde_json::json!({ "title": "No questions" }),
        serde_json::json!({ "questions": [] }),
    ] {
        let response = client
            .post(&format!("{}/api/quizzes", address))
            .json(&payload)
            .send()
            .await
            .expect("Failed to execute request");

        assert_eq!(response.status().as_u16(), 400);
        let body: serde_json::Value = response.json().await.unwrap();
        assert!(body["error"].is_string(), "payload {} should get a JSON error", payload);
    }
}

#[tokio::test]
async fn get_quiz_hides_correct_option() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();
    let quiz_id = create_capital_quiz(&client, &address).await;

    let response = client
        .get(&format!("{}/api/quizzes/{}", address, quiz_id))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["id"], quiz_id.as_str());
    assert_eq!(body["title"], "Sample Quiz");

    let questions = body["questions"].as_array().unwrap();
    assert_eq!(questions.len(), 1);
    assert_eq!(
        questions[0]["options"],
        serde_json::json!(["Mumbai", "Pune", "Delhi", "Jaipur"])
    );
    for q in questions {
        assert!(q.get("correct_option").is_none());
    }
}

#[tokio::test]
async fn get_unknown_quiz_returns_404() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .get(&format!("{}/api/quizzes/invalid_id", address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 404);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Quiz not found.");
}

#[tokio::test]
async fn submit_answer_and_fetch_results() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();
    let quiz_id = create_capital_quiz(&client, &address).await;

    // Correct answer for u1
    let response = submit(&client, &address, &quiz_id, "u1", "q1", serde_json::json!({ "selected_option": 2 })).await;
    assert_eq!(response.status().as_u16(), 200);
    let answer: serde_json::Value = response.json().await.unwrap();
    assert_eq!(answer["question_id"], "q1");
    assert_eq!(answer["selected_option"], 2);
    assert_eq!(answer["is_correct"], true);
    assert!(answer.get("correct_option").is_none());

    // Wrong answer for u2
    let answer: serde_json::Value = submit(&client, &address, &quiz_id, "u2", "q1", serde_json::json!({ "selected_option": 0 }))
        .await
        .json()
        .await
        .unwrap();
    assert_eq!(answer["is_correct"], false);

    let results: serde_json::Value = client
        .get(&format!("{}/api/quizzes/{}/users/u1/results", address, quiz_id))
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .unwrap();
    assert_eq!(results["quiz_id"], quiz_id.as_str());
    assert_eq!(results["user_id"], "u1");
    assert_eq!(results["score"], 1);
    assert_eq!(results["answers"].as_array().unwrap().len(), 1);

    let results: serde_json::Value = client
        .get(&format!("{}/api/quizzes/{}/users/u2/results", address, quiz_id))
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .unwrap();
    assert_eq!(results["score"], 0);
}

#[tokio::test]
async fn forged_is_correct_in_body_is_ignored() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();
    let quiz_id = create_capital_quiz(&client, &address).await;

    let answer: serde_json::Value = submit(
        &client,
        &address,
        &quiz_id,
        "cheater",
        "q1",
        serde_json::json!({ "selected_option": 0, "is_correct": true }),
    )
    .await
    .json()
    .await
    .unwrap();

    assert_eq!(answer["is_correct"], false);
}

#[tokio::test]
async fn submit_to_unknown_quiz_or_question_returns_404() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();
    let quiz_id = create_capital_quiz(&client, &address).await;

    let response = submit(&client, &address, "unknown", "u1", "q1", serde_json::json!({ "selected_option": 2 })).await;
    assert_eq!(response.status().as_u16(), 404);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Quiz not found.");

    let response = submit(&client, &address, &quiz_id, "u1", "q9", serde_json::json!({ "selected_option": 2 })).await;
    assert_eq!(response.status().as_u16(), 404);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Question not found.");
}

#[tokio::test]
async fn results_distinguish_unknown_quiz_from_no_answers() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();
    let quiz_id = create_capital_quiz(&client, &address).await;

    let response = client
        .get(&format!("{}/api/quizzes/unknown/users/u1/results", address))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status().as_u16(), 404);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Quiz not found.");

    let response = client
        .get(&format!("{}/api/quizzes/{}/users/nobody/results", address, quiz_id))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status().as_u16(), 404);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["error"], "No results found.");
}

#[tokio::test]
async fn openapi_document_lists_quiz_paths() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .get(&format!("{}/api-docs/openapi.json", address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 200);
    let doc: serde_json::Value = response.json().await.unwrap();
    assert!(doc["paths"].get("/api/quizzes").is_some());
    assert!(doc["paths"].get("/api/quizzes/{quiz_id}").is_some());
    assert!(
        doc["paths"]
            .get("/api/quizzes/{quiz_id}/users/{user_id}/results")
            .is_some()
    );
}

#[tokio::test]
async fn submit_with_non_integer_selected_option_returns_400() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();
    let quiz_id = create_capital_quiz(&client, &address).await;

    for body in [
        serde_json::json!({ "selected_option": "2" }),
        serde_json::json!({ "selected_option": 2.5 }),
        serde_json::json!({}),
    ] {
        let response = submit(&client, &address, &quiz_id, "u1", "q1", body.clone()).await;
        assert_eq!(response.status().as_u16(), 400);
        let error: serde_json::Value = response.json().await.unwrap();
        assert!(error["error"].is_string(), "body {} should get a JSON error", body);
    }

    // Rejected bodies never reach the scoring engine.
    let response = client
        .get(&format!("{}/api/quizzes/{}/users/u1/results", address, quiz_id))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status().as_u16(), 404);
}
