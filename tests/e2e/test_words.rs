use crate::e2e::helpers;

use helpers::TestContext;
use hyper::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

#[tokio::test]
async fn it_should_enrich_words_in_input_order() {
    let ctx = TestContext::new().await.unwrap();

    let response = ctx
        .client
        .post("/process-words", &json!({"words": ["alpha", "beta", "gamma"]}))
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    let body = response.body.as_ref().unwrap();
    let words: Vec<&str> = body["words"]
        .as_array()
        .unwrap()
        .iter()
        .map(|w| w["word"].as_str().unwrap())
        .collect();
    // The mock provider answers in reverse order; the service re-associates
    assert_eq!(words, vec!["alpha", "beta", "gamma"]);
    assert!(body.get("errors").is_none());

    let first = &body["words"][0];
    assert!(first["phonetic"].as_str().unwrap().starts_with('/'));
    assert!(!first["meaning"].as_str().unwrap().is_empty());
    assert!(!first["examples"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn it_should_collapse_case_variants_to_one_record() {
    let ctx = TestContext::new().await.unwrap();

    let response = ctx
        .client
        .post(
            "/process-words",
            &json!({"words": ["Apple", "apple", "APPLE"]}),
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    let body = response.body.as_ref().unwrap();
    assert_eq!(body["words"].as_array().unwrap().len(), 1);
    assert_eq!(body["words"][0]["word"], "Apple");

    // Exactly one record was persisted, with a fresh review state
    let records = ctx
        .client
        .get(&format!(
            "/get-learning-records?userId={}",
            ctx.config.default_user_id
        ))
        .await
        .unwrap();
    let records = &records.body.as_ref().unwrap()["records"];
    assert_eq!(records.as_array().unwrap().len(), 1);
    assert_eq!(records[0]["reviewCount"], 0);
}

#[tokio::test]
async fn it_should_skip_the_provider_for_known_words() {
    let ctx = TestContext::new().await.unwrap();

    ctx.client
        .post("/process-words", &json!({"words": ["apple"]}))
        .await
        .unwrap()
        .assert_status(StatusCode::OK);
    assert_eq!(ctx.definition_provider.call_count(), 1);

    // Re-ingesting the same word (any casing) is served from the store
    ctx.client
        .post("/process-words", &json!({"words": ["APPLE"]}))
        .await
        .unwrap()
        .assert_status(StatusCode::OK);
    assert_eq!(ctx.definition_provider.call_count(), 1);
}

#[tokio::test]
async fn it_should_report_per_word_failures_without_aborting_the_batch() {
    let ctx = TestContext::new().await.unwrap();
    ctx.definition_provider.fail_word("xyzzy123");

    let response = ctx
        .client
        .post("/process-words", &json!({"words": ["apple", "xyzzy123"]}))
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    let body = response.body.as_ref().unwrap();
    assert_eq!(body["words"].as_array().unwrap().len(), 1);
    assert_eq!(body["words"][0]["word"], "apple");
    assert!(body["errors"]["xyzzy123"].as_str().is_some());

    // No record was created for the failed word
    let records = ctx
        .client
        .get("/get-learning-records?userId=default-user")
        .await
        .unwrap();
    let words: Vec<&str> = records.body.as_ref().unwrap()["records"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["word"].as_str().unwrap())
        .collect();
    assert_eq!(words, vec!["apple"]);
}

#[tokio::test]
async fn it_should_reject_an_empty_batch() {
    let ctx = TestContext::new().await.unwrap();

    for body in [json!({"words": []}), json!({"words": ["  ", "\t"]})] {
        let response = ctx.client.post("/process-words", &body).await.unwrap();
        response
            .assert_status(StatusCode::BAD_REQUEST)
            .assert_error_kind("invalid_input");
    }
}

#[tokio::test]
async fn it_should_scope_records_to_the_requesting_user() {
    let ctx = TestContext::new().await.unwrap();

    ctx.client
        .post("/process-words", &json!({"words": ["apple"], "userId": "u1"}))
        .await
        .unwrap()
        .assert_status(StatusCode::OK);

    let u1 = ctx
        .client
        .get("/get-learning-records?userId=u1")
        .await
        .unwrap();
    assert_eq!(
        u1.body.as_ref().unwrap()["records"].as_array().unwrap().len(),
        1
    );

    let u2 = ctx
        .client
        .get("/get-learning-records?userId=u2")
        .await
        .unwrap();
    assert!(u2.body.as_ref().unwrap()["records"]
        .as_array()
        .unwrap()
        .is_empty());
}
