use crate::e2e::helpers;

use helpers::provider_mocks::MockDefinitionProvider;
use helpers::TestContext;
use hyper::StatusCode;
use serde_json::json;

fn sample_words(words: &[&str]) -> serde_json::Value {
    let defs: Vec<_> = words
        .iter()
        .map(|w| MockDefinitionProvider::definition_for(w))
        .collect();
    serde_json::to_value(defs).unwrap()
}

#[tokio::test]
async fn it_should_save_and_fetch_a_word_list() {
    let ctx = TestContext::new().await.unwrap();

    let saved = ctx
        .client
        .post(
            "/save-wordlist",
            &json!({
                "name": "basics",
                "words": sample_words(&["apple", "banana"]),
                "userId": "u1"
            }),
        )
        .await
        .unwrap();

    saved.assert_status(StatusCode::OK);
    let body = saved.body.as_ref().unwrap();
    assert_eq!(body["name"], "basics");
    assert_eq!(body["userId"], "u1");
    assert_eq!(body["words"].as_array().unwrap().len(), 2);
    assert!(body["createdAt"].as_str().is_some());
    assert!(body["updatedAt"].as_str().is_some());
    let list_id = body["id"].as_str().unwrap();

    let fetched = ctx
        .client
        .get(&format!("/get-wordlist/{}", list_id))
        .await
        .unwrap();
    fetched.assert_status(StatusCode::OK);
    let fetched_body = fetched.body.as_ref().unwrap();
    assert_eq!(fetched_body["id"], list_id);
    assert_eq!(fetched_body["words"][0]["word"], "apple");
}

#[tokio::test]
async fn it_should_list_word_lists_per_user() {
    let ctx = TestContext::new().await.unwrap();

    for (name, user) in [("mine", "u1"), ("also mine", "u1"), ("theirs", "u2")] {
        ctx.client
            .post(
                "/save-wordlist",
                &json!({"name": name, "words": sample_words(&["run"]), "userId": user}),
            )
            .await
            .unwrap()
            .assert_status(StatusCode::OK);
    }

    let lists = ctx.client.get("/get-wordlists?userId=u1").await.unwrap();
    lists.assert_status(StatusCode::OK);
    assert_eq!(
        lists.body.as_ref().unwrap()["wordlists"]
            .as_array()
            .unwrap()
            .len(),
        2
    );

    let empty = ctx.client.get("/get-wordlists?userId=u3").await.unwrap();
    assert!(empty.body.as_ref().unwrap()["wordlists"]
        .as_array()
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn it_should_default_the_user_when_omitted() {
    let ctx = TestContext::new().await.unwrap();

    ctx.client
        .post(
            "/save-wordlist",
            &json!({"name": "basics", "words": sample_words(&["run"])}),
        )
        .await
        .unwrap()
        .assert_status(StatusCode::OK);

    let lists = ctx
        .client
        .get(&format!(
            "/get-wordlists?userId={}",
            ctx.config.default_user_id
        ))
        .await
        .unwrap();
    assert_eq!(
        lists.body.as_ref().unwrap()["wordlists"]
            .as_array()
            .unwrap()
            .len(),
        1
    );
}

#[tokio::test]
async fn it_should_reject_an_unnamed_list() {
    let ctx = TestContext::new().await.unwrap();

    let response = ctx
        .client
        .post(
            "/save-wordlist",
            &json!({"name": "   ", "words": sample_words(&["run"])}),
        )
        .await
        .unwrap();
    response
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_error_kind("invalid_input");
}

#[tokio::test]
async fn it_should_return_not_found_for_an_unknown_list() {
    let ctx = TestContext::new().await.unwrap();

    let response = ctx
        .client
        .get(&format!("/get-wordlist/{}", uuid::Uuid::new_v4()))
        .await
        .unwrap();
    response
        .assert_status(StatusCode::NOT_FOUND)
        .assert_error_kind("not_found");
}
