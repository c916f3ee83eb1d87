
use reqwest::StatusCode;
use serde_json::{json, Value};
use test_user::{unique, TestUser};
use test_utils::TestApp;

#[actix_rt::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn team_lifecycle_with_members() {
    let app = TestApp::spawn().await;
    let token = app.signup(&TestUser::new("lead")).await;
    let me: Value = app.get("/users/me", &token).await.json().await.unwrap();

    let name = unique("core");
    let created = app
        .post("/teams", &token, &json!({"name": name, "description": "d", "members": [me["id"]]}))
        .await;
    assert_eq!(created.status(), StatusCode::CREATED);
    let team: Value = created.json().await.unwrap();
    assert_eq!(team["members"], json!([me["id"]]));

    let path = format!("/teams/{}", team["id"].as_str().unwrap());
    let fetched: Value = app.get(&path, &token).await.json().await.unwrap();
    assert_eq!(fetched["name"], name.as_str());

    let updated = app.put(&path, &token, &json!({"name": name, "members": []})).await;
    assert_eq!(updated.status(), StatusCode::OK);
    let body: Value = updated.json().await.unwrap();
    assert_eq!(body["members"], json!([]));

    assert_eq!(app.delete(&path, &token).await.status(), StatusCode::NO_CONTENT);
    assert_eq!(app.get(&path, &token).await.status(), StatusCode::NOT_FOUND);
}

#[actix_rt::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn duplicate_team_name_conflicts() {
    let app = TestApp::spawn().await;
    let token = app.signup(&TestUser::new("dup")).await;

    let name = unique("dup-team");
    let first = app.post("/teams", &token, &json!({"name": name})).await;
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = app.post("/teams", &token, &json!({"name": name})).await;
    assert_eq!(second.status(), StatusCode::CONFLICT);
}

#[actix_rt::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn unknown_member_is_a_field_error() {
    let app = TestApp::spawn().await;
    let token = app.signup(&TestUser::new("ghost")).await;

    let response = app
        .post("/teams", &token, &json!({"name": unique("ghosts"), "members": [uuid::Uuid::new_v4()]}))
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value = response.json().await.unwrap();
    assert!(body["members"].is_array());
}

#[actix_rt::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn any_user_may_edit_a_team() {
    let app = TestApp::spawn().await;
    let creator = app.signup(&TestUser::new("creator")).await;
    let other = app.signup(&TestUser::new("other")).await;

    let team: Value = app
        .post("/teams", &creator, &json!({"name": unique("shared")}))
        .await
        .json()
        .await
        .unwrap();
    let path = format!("/teams/{}", team["id"].as_str().unwrap());

    let renamed = unique("renamed");
    let response = app.put(&path, &other, &json!({"name": renamed})).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(app.delete(&path, &other).await.status(), StatusCode::NO_CONTENT);
}
