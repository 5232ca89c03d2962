//! Integration tests for question listing, creation, deletion, and search.

mod helpers;

use http::StatusCode;
use serde_json::json;

use helpers::{ART, HISTORY, SCIENCE};

#[tokio::test]
async fn test_list_first_page() {
    let app = helpers::TestApp::new();
    app.seed_questions(12).await;

    let response = app.request("GET", "/questions", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);
    assert_eq!(response.question_ids(), (1..=10).collect::<Vec<i64>>());
    assert_eq!(response.body["total_questions"], 12);
    assert!(response.body["current category"].is_null());
    assert_eq!(response.body["categories"]["1"], "Science");
    assert_eq!(response.body["categories"]["6"], "Sports");

    let first = &response.body["questions"][0];
    assert_eq!(first["question"], "Question number 1");
    assert_eq!(first["answer"], "Answer 1");
    assert_eq!(first["category"], SCIENCE);
}

#[tokio::test]
async fn test_list_second_page() {
    let app = helpers::TestApp::new();
    app.seed_questions(12).await;

    let response = app.request("GET", "/questions?page=2", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.question_ids(), vec![11, 12]);
    assert_eq!(response.body["total_questions"], 12);
}

#[tokio::test]
async fn test_list_page_past_end_is_not_found() {
    let app = helpers::TestApp::new();
    app.seed_questions(12).await;

    let response = app.request("GET", "/questions?page=3", None).await;
    response.assert_error(StatusCode::NOT_FOUND, "resource not found");

    let response = app.request("GET", "/questions?page=1000", None).await;
    response.assert_error(StatusCode::NOT_FOUND, "resource not found");
}

#[tokio::test]
async fn test_list_non_positive_page_is_not_found() {
    let app = helpers::TestApp::new();
    app.seed_questions(3).await;

    let response = app.request("GET", "/questions?page=0", None).await;
    response.assert_error(StatusCode::NOT_FOUND, "resource not found");
}

#[tokio::test]
async fn test_list_non_numeric_page_falls_back_to_first() {
    let app = helpers::TestApp::new();
    app.seed_questions(3).await;

    let response = app.request("GET", "/questions?page=abc", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.question_ids(), vec![1, 2, 3]);
}

#[tokio::test]
async fn test_list_with_no_questions_is_not_found() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/questions", None).await;
    response.assert_error(StatusCode::NOT_FOUND, "resource not found");
}

#[tokio::test]
async fn test_create_question() {
    let app = helpers::TestApp::new();
    app.seed_questions(3).await;

    let response = app
        .request(
            "POST",
            "/questions",
            Some(json!({
                "question": "Who painted the Mona Lisa?",
                "answer": "Leonardo da Vinci",
                "difficulty": 2,
                "category": ART,
            })),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);
    assert_eq!(response.body["created"], 4);
    assert_eq!(response.body["total_questions"], 4);
    assert_eq!(response.question_ids(), vec![1, 2, 3, 4]);

    let stored = &response.body["questions"][3];
    assert_eq!(stored["question"], "Who painted the Mona Lisa?");
    assert_eq!(stored["difficulty"], 2);
    assert_eq!(stored["category"], ART);
}

#[tokio::test]
async fn test_create_returns_first_page_only() {
    let app = helpers::TestApp::new();
    app.seed_questions(15).await;

    let response = app
        .request(
            "POST",
            "/questions",
            Some(json!({"question": "Q", "answer": "A", "difficulty": 1, "category": 1})),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["created"], 16);
    assert_eq!(response.body["total_questions"], 16);
    assert_eq!(response.question_ids(), (1..=10).collect::<Vec<i64>>());
}

#[tokio::test]
async fn test_create_accepts_numeric_strings() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "POST",
            "/questions",
            Some(json!({
                "question": "What is H2O?",
                "answer": "Water",
                "difficulty": "1",
                "category": "1",
            })),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["questions"][0]["difficulty"], 1);
    assert_eq!(response.body["questions"][0]["category"], SCIENCE);
}

#[tokio::test]
async fn test_create_rejects_non_numeric_difficulty() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "POST",
            "/questions",
            Some(json!({"question": "Q", "answer": "A", "difficulty": "hard", "category": 1})),
        )
        .await;

    response.assert_error(StatusCode::UNPROCESSABLE_ENTITY, "unprocessable request");
    assert!(app.store_is_empty().await);
}

#[tokio::test]
async fn test_create_rejects_empty_text() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "POST",
            "/questions",
            Some(json!({"question": "", "answer": "A", "difficulty": 1, "category": 1})),
        )
        .await;

    response.assert_error(StatusCode::UNPROCESSABLE_ENTITY, "unprocessable request");
}

#[tokio::test]
async fn test_create_with_empty_answer_leaves_total_unchanged() {
    let app = helpers::TestApp::new();
    app.seed_questions(3).await;

    let response = app
        .request(
            "POST",
            "/questions",
            Some(json!({"question": "Q", "answer": "", "difficulty": 1, "category": 1})),
        )
        .await;
    response.assert_error(StatusCode::UNPROCESSABLE_ENTITY, "unprocessable request");

    let listing = app.request("GET", "/questions", None).await;
    assert_eq!(listing.body["total_questions"], 3);
}

#[tokio::test]
async fn test_create_without_answer_fails_in_store() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "POST",
            "/questions",
            Some(json!({"question": "Q", "difficulty": 1, "category": 1})),
        )
        .await;

    response.assert_error(StatusCode::INTERNAL_SERVER_ERROR, "internal server error");
    assert!(app.store_is_empty().await);
}

#[tokio::test]
async fn test_delete_question() {
    let app = helpers::TestApp::new();
    app.seed_questions(3).await;

    let response = app.request("DELETE", "/questions/2", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!({"success": true, "deleted": 2}));

    let listing = app.request("GET", "/questions", None).await;
    assert_eq!(listing.question_ids(), vec![1, 3]);
    assert_eq!(listing.body["total_questions"], 2);
}

#[tokio::test]
async fn test_delete_twice_is_not_found() {
    let app = helpers::TestApp::new();
    app.seed_questions(1).await;

    let first = app.request("DELETE", "/questions/1", None).await;
    assert_eq!(first.status, StatusCode::OK);

    let second = app.request("DELETE", "/questions/1", None).await;
    second.assert_error(StatusCode::NOT_FOUND, "resource not found");
}

#[tokio::test]
async fn test_delete_unknown_is_not_found() {
    let app = helpers::TestApp::new();

    let response = app.request("DELETE", "/questions/5000", None).await;
    response.assert_error(StatusCode::NOT_FOUND, "resource not found");

    let response = app.request("DELETE", "/questions/abc", None).await;
    response.assert_error(StatusCode::NOT_FOUND, "resource not found");
}

#[tokio::test]
async fn test_deleted_id_is_not_reused() {
    let app = helpers::TestApp::new();
    app.seed_questions(3).await;
    app.request("DELETE", "/questions/3", None).await;

    let response = app
        .request(
            "POST",
            "/questions",
            Some(json!({"question": "Q", "answer": "A", "difficulty": 1, "category": 1})),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["created"], 4);
}

#[tokio::test]
async fn test_search_is_case_insensitive() {
    let app = helpers::TestApp::new();
    app.seed_question(1, "What is the title of the 1990 film?", HISTORY)
        .await;
    app.seed_question(2, "Whose autobiography is entitled 'I Know Why'?", HISTORY)
        .await;
    app.seed_question(3, "What is the boiling point of water?", SCIENCE)
        .await;

    let response = app
        .request("POST", "/search", Some(json!({"searchTerm": "TITLE"})))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);
    assert_eq!(response.question_ids(), vec![1, 2]);
    assert_eq!(response.body["total_questions"], 2);
    assert!(response.body["current_category"].is_null());
}

#[tokio::test]
async fn test_search_total_is_page_length() {
    let app = helpers::TestApp::new();
    app.seed_questions(14).await;

    let response = app
        .request("POST", "/search?page=2", Some(json!({"searchTerm": "number"})))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.question_ids(), vec![11, 12, 13, 14]);
    assert_eq!(response.body["total_questions"], 4);
}

#[tokio::test]
async fn test_search_without_match_is_unprocessable() {
    let app = helpers::TestApp::new();
    app.seed_questions(5).await;

    let response = app
        .request("POST", "/search", Some(json!({"searchTerm": "zzzz"})))
        .await;

    response.assert_error(StatusCode::UNPROCESSABLE_ENTITY, "unprocessable request");
}

#[tokio::test]
async fn test_search_without_term_matches_everything() {
    let app = helpers::TestApp::new();
    app.seed_questions(4).await;

    let response = app.request("POST", "/search", Some(json!({}))).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.question_ids(), vec![1, 2, 3, 4]);
}

#[tokio::test]
async fn test_search_treats_wildcards_literally() {
    let app = helpers::TestApp::new();
    app.seed_question(1, "What is 50% of 10?", SCIENCE).await;
    app.seed_question(2, "What is half of 10?", SCIENCE).await;

    let response = app
        .request("POST", "/search", Some(json!({"searchTerm": "%"})))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.question_ids(), vec![1]);
}

#[tokio::test]
async fn test_list_repeated_page_uses_first() {
    let app = helpers::TestApp::new();
    app.seed_questions(12).await;

    let response = app.request("GET", "/questions?page=1&page=2", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.question_ids(), (1..=10).collect::<Vec<i64>>());
}

#[tokio::test]
async fn test_search_repeated_page_uses_first() {
    let app = helpers::TestApp::new();
    app.seed_questions(12).await;

    let response = app
        .request(
            "POST",
            "/search?page=2&page=zz",
            Some(json!({"searchTerm": "number"})),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.question_ids(), vec![11, 12]);
}

#[tokio::test]
async fn test_create_with_mistyped_text_is_unprocessable() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "POST",
            "/questions",
            Some(json!({"question": 5, "answer": "A", "difficulty": 1, "category": 1})),
        )
        .await;

    response.assert_error(StatusCode::UNPROCESSABLE_ENTITY, "unprocessable request");
    assert!(app.store_is_empty().await);
}
