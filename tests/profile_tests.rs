
use reqwest::StatusCode;
use serde_json::{json, Value};
use test_user::TestUser;
use test_utils::TestApp;

#[actix_rt::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn profile_is_bound_to_the_requester() {
    let app = TestApp::spawn().await;
    let token = app.signup(&TestUser::new("profiled")).await;
    let me: Value = app.get("/users/me", &token).await.json().await.unwrap();

    let skill: Value = app
        .post("/skillsets", &token, &json!({"name": "Rust"}))
        .await
        .json()
        .await
        .unwrap();

    let response = app
        .post(
            "/profiles",
            &token,
            &json!({
                "bio": "hello",
                "location": "Lagos",
                "github_url": "https://github.com/profiled",
                "skills": [skill["id"]],
                "user": uuid::Uuid::new_v4(),
            }),
        )
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let profile: Value = response.json().await.unwrap();
    assert_eq!(profile["user"], me["id"]);
    assert_eq!(profile["skills"], json!([skill["id"]]));

    let second = app.post("/profiles", &token, &json!({"bio": "again"})).await;
    assert_eq!(second.status(), StatusCode::BAD_REQUEST);
    let body: Value = second.json().await.unwrap();
    assert_eq!(body, json!({"user": ["user profile with this user already exists."]}));
}

#[actix_rt::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn unknown_skill_is_rejected() {
    let app = TestApp::spawn().await;
    let token = app.signup(&TestUser::new("skilless")).await;

    let response = app
        .post("/profiles", &token, &json!({"skills": [uuid::Uuid::new_v4()]}))
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({"skills": ["Invalid pk - object does not exist."]}));
}

#[actix_rt::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn profile_update_replaces_skills_and_delete_removes_it() {
    let app = TestApp::spawn().await;
    let token = app.signup(&TestUser::new("editor")).await;

    let rust: Value = app.post("/skillsets", &token, &json!({"name": "Rust"})).await.json().await.unwrap();
    let sql: Value = app.post("/skillsets", &token, &json!({"name": "SQL"})).await.json().await.unwrap();

    let profile: Value = app
        .post("/profiles", &token, &json!({"skills": [rust["id"]]}))
        .await
        .json()
        .await
        .unwrap();
    let path = format!("/profiles/{}", profile["id"].as_str().unwrap());

    let updated = app.put(&path, &token, &json!({"bio": "changed", "skills": [sql["id"]]})).await;
    assert_eq!(updated.status(), StatusCode::OK);
    let body: Value = updated.json().await.unwrap();
    assert_eq!(body["bio"], "changed");
    assert_eq!(body["skills"], json!([sql["id"]]));

    assert_eq!(app.delete(&path, &token).await.status(), StatusCode::NO_CONTENT);
    assert_eq!(app.get(&path, &token).await.status(), StatusCode::NOT_FOUND);
}

#[actix_rt::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn skill_set_crud() {
    let app = TestApp::spawn().await;
    let token = app.signup(&TestUser::new("skills")).await;

    let created = app.post("/skillsets", &token, &json!({"name": "Go"})).await;
    assert_eq!(created.status(), StatusCode::CREATED);
    let skill: Value = created.json().await.unwrap();
    let path = format!("/skillsets/{}", skill["id"].as_str().unwrap());

    let updated: Value = app.put(&path, &token, &json!({"name": "Golang"})).await.json().await.unwrap();
    assert_eq!(updated["name"], "Golang");

    let blank = app.post("/skillsets", &token, &json!({"name": ""})).await;
    assert_eq!(blank.status(), StatusCode::BAD_REQUEST);

    assert_eq!(app.delete(&path, &token).await.status(), StatusCode::NO_CONTENT);
    assert_eq!(app.get(&path, &token).await.status(), StatusCode::NOT_FOUND);
    assert_eq!(app.get("/skillsets/not-a-uuid", &token).await.status(), StatusCode::NOT_FOUND);
}
