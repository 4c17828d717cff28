use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use reqwest::StatusCode as HttpStatusCode;
use serde_json::json;
use tokio::net::TcpListener;

use server::routes::{self, AppState};
use server::startup;
use service::store::mock::MemoryStore;
use service::store::TriviaStore;

// Every test gets its own server over a freshly seeded in-memory store, so
// the whole suite runs without a database.

struct TestApp {
    base_url: String,
}

async fn start_server() -> anyhow::Result<TestApp> {
    let store: Arc<dyn TriviaStore> = Arc::new(MemoryStore::default());
    service::seed::run(store.as_ref()).await?;

    let app: Router = routes::build_router(AppState { store }, startup::build_cors());
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            eprintln!("server error: {}", e);
        }
    });

    Ok(TestApp { base_url })
}

fn client() -> reqwest::Client {
    reqwest::Client::new()
}

#[tokio::test]
async fn e2e_health() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = client().get(format!("{}/health", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn e2e_get_categories_returns_seeded_mapping() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = client().get(format!("{}/categories", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["success"], true);
    // Map keys are ids rendered as JSON strings
    assert_eq!(body["categories"]["1"], "Science");
    assert_eq!(body["categories"]["6"], "Sports");
    assert_eq!(body["categories"].as_object().unwrap().len(), 6);
    Ok(())
}

#[tokio::test]
async fn e2e_get_questions_first_page_has_ten() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = client().get(format!("{}/questions", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["success"], true);
    assert_eq!(body["questions"].as_array().unwrap().len(), 10);
    assert_eq!(body["total_questions"], 19);
    assert!(body["current_category"].is_null());
    assert_eq!(body["categories"]["3"], "Geography");
    // Pages are windows of the id-ordered list
    assert_eq!(body["questions"][0]["id"], 1);
    Ok(())
}

#[tokio::test]
async fn e2e_get_questions_second_page_holds_the_rest() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = client().get(format!("{}/questions?page=2", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["questions"].as_array().unwrap().len(), 9);
    assert_eq!(body["questions"][0]["id"], 11);
    assert_eq!(body["total_questions"], 19);
    Ok(())
}

#[tokio::test]
async fn e2e_get_questions_page_beyond_range_is_404() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = client().get(format!("{}/questions?page=1000", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], 404);
    assert_eq!(body["message"], "resource not found");
    Ok(())
}

#[tokio::test]
async fn e2e_get_questions_rejects_bad_page_values() -> anyhow::Result<()> {
    let app = start_server().await?;
    for bad in ["0", "-3", "abc"] {
        let res =
            client().get(format!("{}/questions?page={}", app.base_url, bad)).send().await?;
        assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST, "page={}", bad);
        let body = res.json::<serde_json::Value>().await?;
        assert_eq!(body["message"], "bad request");
    }
    Ok(())
}

#[tokio::test]
async fn e2e_questions_by_category_counts_that_category() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = client().get(format!("{}/categories/1/questions", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["success"], true);
    assert_eq!(body["current_category"], "Science");
    // The count covers the category, not the whole table
    assert_eq!(body["total_questions"], 3);
    for q in body["questions"].as_array().unwrap() {
        assert_eq!(q["category"], 1);
    }
    Ok(())
}

#[tokio::test]
async fn e2e_questions_by_category_empty_window_is_200() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res =
        client().get(format!("{}/categories/1/questions?page=9", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert!(body["questions"].as_array().unwrap().is_empty());
    assert_eq!(body["total_questions"], 3);
    Ok(())
}

#[tokio::test]
async fn e2e_questions_by_unknown_category_is_404() -> anyhow::Result<()> {
    let app = start_server().await?;
    for path in ["/categories/999/questions", "/categories/abc/questions"] {
        let res = client().get(format!("{}{}", app.base_url, path)).send().await?;
        assert_eq!(res.status(), HttpStatusCode::NOT_FOUND, "{}", path);
        let body = res.json::<serde_json::Value>().await?;
        assert_eq!(body["message"], "resource not found");
    }
    Ok(())
}

#[tokio::test]
async fn e2e_create_question_roundtrip() -> anyhow::Result<()> {
    let app = start_server().await?;
    let marker = uuid::Uuid::new_v4().simple().to_string();
    let res = client()
        .post(format!("{}/questions", app.base_url))
        .json(&json!({
            "question": format!("Probe {marker}?"),
            "answer": "Indeed",
            "difficulty": 5,
            "category": 2
        }))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body, json!({"success": true}));

    // Visible in the full listing count and findable by search
    let listing = client()
        .get(format!("{}/questions", app.base_url))
        .send()
        .await?
        .json::<serde_json::Value>()
        .await?;
    assert_eq!(listing["total_questions"], 20);

    let search = client()
        .post(format!("{}/questions", app.base_url))
        .json(&json!({"searchTerm": marker}))
        .send()
        .await?
        .json::<serde_json::Value>()
        .await?;
    let hits = search["questions"].as_array().unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0]["answer"], "Indeed");
    assert_eq!(hits[0]["difficulty"], 5);
    assert_eq!(hits[0]["category"], 2);
    Ok(())
}

#[tokio::test]
async fn e2e_create_question_missing_fields_is_422() -> anyhow::Result<()> {
    let app = start_server().await?;
    let payloads = [
        json!({}),
        json!({"question": "Half a question?"}),
        json!({"question": "No difficulty?", "answer": "None", "category": 1}),
        json!({"question": "Null answer?", "answer": null, "difficulty": 1, "category": 1}),
        // Empty search term means create mode, and the fields are absent
        json!({"searchTerm": ""}),
    ];
    for payload in payloads {
        let res = client()
            .post(format!("{}/questions", app.base_url))
            .json(&payload)
            .send()
            .await?;
        assert_eq!(res.status(), HttpStatusCode::UNPROCESSABLE_ENTITY, "{}", payload);
        let body = res.json::<serde_json::Value>().await?;
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "unprocessable");
    }
    Ok(())
}

#[tokio::test]
async fn e2e_create_question_accepts_empty_strings() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = client()
        .post(format!("{}/questions", app.base_url))
        .json(&json!({"question": "", "answer": "", "difficulty": 0, "category": 3}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    Ok(())
}

#[tokio::test]
async fn e2e_malformed_json_body_is_400() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = client()
        .post(format!("{}/questions", app.base_url))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["message"], "bad request");
    Ok(())
}

#[tokio::test]
async fn e2e_search_is_case_insensitive_and_counts_whole_table() -> anyhow::Result<()> {
    let app = start_server().await?;
    for term in ["soccer", "SOCCER", "Soccer"] {
        let res = client()
            .post(format!("{}/questions", app.base_url))
            .json(&json!({"searchTerm": term}))
            .send()
            .await?;
        assert_eq!(res.status(), HttpStatusCode::OK);
        let body = res.json::<serde_json::Value>().await?;
        assert_eq!(body["success"], true);
        assert_eq!(body["questions"].as_array().unwrap().len(), 2, "term={}", term);
        // camelCase keys on this surface only
        assert_eq!(body["totalQuestions"], 19);
        assert_eq!(body["currentCategory"], "History");
        assert!(body.get("total_questions").is_none());
    }
    Ok(())
}

#[tokio::test]
async fn e2e_search_without_matches_is_empty_200() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = client()
        .post(format!("{}/questions", app.base_url))
        .json(&json!({"searchTerm": "zzzz-no-such-question"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert!(body["questions"].as_array().unwrap().is_empty());
    assert_eq!(body["totalQuestions"], 19);
    Ok(())
}

#[tokio::test]
async fn e2e_delete_question_then_gone() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = client().delete(format!("{}/questions/16", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["success"], true);
    assert_eq!(body["deleted"], 16);

    // Science drops from three questions to two
    let science = client()
        .get(format!("{}/categories/1/questions", app.base_url))
        .send()
        .await?
        .json::<serde_json::Value>()
        .await?;
    assert_eq!(science["total_questions"], 2);

    // Deleting again is a 404
    let res = client().delete(format!("{}/questions/16", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn e2e_delete_missing_question_is_404() -> anyhow::Result<()> {
    let app = start_server().await?;
    for path in ["/questions/99999", "/questions/abc"] {
        let res = client().delete(format!("{}{}", app.base_url, path)).send().await?;
        assert_eq!(res.status(), HttpStatusCode::NOT_FOUND, "{}", path);
        let body = res.json::<serde_json::Value>().await?;
        assert_eq!(body["message"], "resource not found");
    }
    Ok(())
}

#[tokio::test]
async fn e2e_quiz_excludes_previous_questions() -> anyhow::Result<()> {
    let app = start_server().await?;
    // Sports has exactly two questions, ids 6 and 7
    let res = client()
        .post(format!("{}/quizzes", app.base_url))
        .json(&json!({"previous_questions": [6], "quiz_category": {"id": 6, "type": "Sports"}}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["success"], true);
    assert_eq!(body["question"]["id"], 7);
    assert_eq!(body["question"]["category"], 6);
    Ok(())
}

#[tokio::test]
async fn e2e_quiz_exhausted_round_returns_null() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = client()
        .post(format!("{}/quizzes", app.base_url))
        .json(&json!({"previous_questions": [6, 7], "quiz_category": {"id": 6}}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["success"], true);
    assert!(body["question"].is_null());
    Ok(())
}

#[tokio::test]
async fn e2e_quiz_category_zero_plays_all() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = client()
        .post(format!("{}/quizzes", app.base_url))
        .json(&json!({"previous_questions": [], "quiz_category": {"id": 0}}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    let id = body["question"]["id"].as_i64().unwrap();
    assert!((1..=19).contains(&id));
    Ok(())
}

#[tokio::test]
async fn e2e_quiz_accepts_string_category_ids() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = client()
        .post(format!("{}/quizzes", app.base_url))
        .json(&json!({"previous_questions": [], "quiz_category": {"id": "2"}}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["question"]["category"], 2);

    // Non-numeric ids are rejected outright
    let res = client()
        .post(format!("{}/quizzes", app.base_url))
        .json(&json!({"previous_questions": [], "quiz_category": {"id": "abc"}}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn e2e_quiz_missing_inputs_is_404() -> anyhow::Result<()> {
    let app = start_server().await?;
    let payloads = [
        json!({}),
        json!({"previous_questions": []}),
        json!({"quiz_category": {"id": 1}}),
        json!({"previous_questions": null, "quiz_category": {"id": 1}}),
    ];
    for payload in payloads {
        let res =
            client().post(format!("{}/quizzes", app.base_url)).json(&payload).send().await?;
        assert_eq!(res.status(), HttpStatusCode::NOT_FOUND, "{}", payload);
        let body = res.json::<serde_json::Value>().await?;
        assert_eq!(body["message"], "resource not found");
    }
    Ok(())
}

#[tokio::test]
async fn e2e_quiz_category_without_questions_is_422() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = client()
        .post(format!("{}/quizzes", app.base_url))
        .json(&json!({"previous_questions": [], "quiz_category": {"id": 500}}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::UNPROCESSABLE_ENTITY);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["message"], "unprocessable");
    Ok(())
}

#[tokio::test]
async fn e2e_openapi_document_is_served() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = client().get(format!("{}/api-docs/openapi.json", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert!(body["paths"].get("/questions").is_some());
    Ok(())
}
