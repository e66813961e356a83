use std::net::SocketAddr;

use configs::DatabaseConfig;
use reqwest::StatusCode;
use serde_json::{json, Value};
use tokio::net::TcpListener;

use server::startup::{build_app, build_state};

struct TestApp {
    base_url: String,
    client: reqwest::Client,
}

impl TestApp {
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn post(&self, path: &str, body: Value) -> anyhow::Result<(StatusCode, Value)> {
        let res = self.client.post(self.url(path)).json(&body).send().await?;
        Ok((res.status(), res.json().await.unwrap_or(Value::Null)))
    }

    async fn put(&self, path: &str, body: Option<Value>) -> anyhow::Result<(StatusCode, Value)> {
        let mut req = self.client.put(self.url(path));
        if let Some(body) = body { req = req.json(&body); }
        let res = req.send().await?;
        Ok((res.status(), res.json().await.unwrap_or(Value::Null)))
    }

    /// POST with parameters in the query string and no body.
    async fn post_query(&self, path: &str) -> anyhow::Result<(StatusCode, Value)> {
        let res = self.client.post(self.url(path)).send().await?;
        Ok((res.status(), res.json().await.unwrap_or(Value::Null)))
    }

    async fn get(&self, path: &str) -> anyhow::Result<(StatusCode, Value)> {
        let res = self.client.get(self.url(path)).send().await?;
        Ok((res.status(), res.json().await.unwrap_or(Value::Null)))
    }

    async fn delete(&self, path: &str) -> anyhow::Result<(StatusCode, Value)> {
        let res = self.client.delete(self.url(path)).send().await?;
        Ok((res.status(), res.json().await.unwrap_or(Value::Null)))
    }
}

/// Serve the real router on an ephemeral port, backed by a private in-memory database.
async fn start_server() -> anyhow::Result<TestApp> {
    let state = build_state(&DatabaseConfig::in_memory()).await?;
    let app = build_app(state);

    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });

    Ok(TestApp { base_url: format!("http://{}", addr), client: reqwest::Client::new() })
}

fn ann() -> Value {
    json!({"first_name": "Ann", "last_name": "Lee", "years_of_experience": 5})
}

#[tokio::test]
async fn e2e_public_health() -> anyhow::Result<()> {
    let app = start_server().await?;
    let (status, body) = app.get("/health").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn e2e_teacher_delete_cascades_to_courses() -> anyhow::Result<()> {
    let app = start_server().await?;

    let (status, teacher) = app.post("/teachers/", ann()).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(teacher, json!({"id": 1, "first_name": "Ann", "last_name": "Lee", "years_of_experience": 5}));

    let (status, course) = app.post("/teachers/1/courses/", json!({"title": "Math", "description": "Algebra"})).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(course, json!({"id": 1, "title": "Math", "description": "Algebra", "teacher_id": 1}));

    let (_, owned) = app.get("/teachers/1/courses/").await?;
    assert_eq!(owned, json!([course]));

    let (status, body) = app.delete("/teachers/1").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Teacher with ID 1 deleted successfully");

    let (status, body) = app.get("/courses/1").await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Course not found");
    Ok(())
}

#[tokio::test]
async fn e2e_create_and_read_back() -> anyhow::Result<()> {
    let app = start_server().await?;

    let (_, t) = app.post("/teachers", ann()).await?;
    let (status, found) = app.get(&format!("/teachers/{}", t["id"])).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(found, t);

    let (_, c) = app.post("/courses/", json!({"teacher_id": t["id"], "title": "Bio", "description": "Cells"})).await?;
    let (_, found) = app.get(&format!("/courses/{}", c["id"])).await?;
    assert_eq!(found, c);

    let (_, s) = app.post("/students/", json!({"first_name": "Sam", "last_name": "Poe"})).await?;
    let (_, found) = app.get(&format!("/students/{}", s["id"])).await?;
    assert_eq!(found, json!({"id": s["id"], "first_name": "Sam", "last_name": "Poe"}));
    Ok(())
}

#[tokio::test]
async fn e2e_missing_ids_are_404() -> anyhow::Result<()> {
    let app = start_server().await?;
    let cases = [
        ("/teachers/9", "Teacher not found"),
        ("/teachers/9/courses/", "Teacher not found"),
        ("/courses/9", "Course not found"),
        ("/courses/9/teacher", "Course not found"),
        ("/courses/9/students", "Course not found"),
        ("/students/9", "Student not found"),
        ("/students/9/courses", "Student not found"),
    ];
    for (path, detail) in cases {
        let (status, body) = app.get(path).await?;
        assert_eq!(status, StatusCode::NOT_FOUND, "{path}");
        assert_eq!(body["detail"], detail, "{path}");
    }

    for path in ["/teachers/9", "/courses/9", "/students/9"] {
        let (status, _) = app.put(path, Some(json!({"first_name": "X"}))).await?;
        assert_eq!(status, StatusCode::NOT_FOUND, "PUT {path}");
        let (status, _) = app.delete(path).await?;
        assert_eq!(status, StatusCode::NOT_FOUND, "DELETE {path}");
    }
    Ok(())
}

#[tokio::test]
async fn e2e_list_pagination() -> anyhow::Result<()> {
    let app = start_server().await?;
    let (_, _first) = app.post("/students/", json!({"first_name": "A", "last_name": "One"})).await?;
    let (_, second) = app.post("/students/", json!({"first_name": "B", "last_name": "Two"})).await?;

    let (status, page) = app.get("/students/?skip=1&limit=1").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page, json!([second]));

    let (_, all) = app.get("/students/").await?;
    assert_eq!(all.as_array().map(Vec::len), Some(2));
    Ok(())
}

#[tokio::test]
async fn e2e_partial_update() -> anyhow::Result<()> {
    let app = start_server().await?;
    let (_, t) = app.post("/teachers/", ann()).await?;

    let (status, updated) = app.put(&format!("/teachers/{}", t["id"]), Some(json!({"first_name": "Anne"}))).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["first_name"], "Anne");
    assert_eq!(updated["last_name"], "Lee");
    assert_eq!(updated["years_of_experience"], 5);

    let (status, _) = app.put(&format!("/teachers/{}", t["id"]), Some(json!({"last_name": null}))).await?;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let (_, unchanged) = app.get(&format!("/teachers/{}", t["id"])).await?;
    assert_eq!(unchanged, updated);

    let (_, c) = app.post("/courses/", json!({"teacher_id": 1, "title": "Art", "description": "Paint"})).await?;
    let (status, cleared) = app.put(&format!("/courses/{}", c["id"]), Some(json!({"description": null}))).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(cleared["description"], Value::Null);
    assert_eq!(cleared["title"], "Art");
    Ok(())
}

#[tokio::test]
async fn e2e_create_requires_every_field() -> anyhow::Result<()> {
    let app = start_server().await?;
    let (status, _) = app.post("/teachers/", json!({"first_name": "Ann", "last_name": "Lee"})).await?;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let (status, _) = app.post("/teachers/", json!({"first_name": "Ann", "last_name": "Lee", "years_of_experience": "five"})).await?;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    Ok(())
}

#[tokio::test]
async fn e2e_enrolment_is_bidirectional() -> anyhow::Result<()> {
    let app = start_server().await?;
    let (_, c) = app.post("/courses/", json!({"teacher_id": 1, "title": "Math"})).await?;
    let (_, _kim) = app.post("/students/", json!({"first_name": "Kim", "last_name": "Ray"})).await?;
    let (_, s) = app.post("/students/", json!({"first_name": "Sam", "last_name": "Poe"})).await?;

    let (status, body) = app.put(&format!("/courses/{}/{}", c["id"], s["id"]), None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, c);

    let (_, students) = app.get(&format!("/courses/{}/students", c["id"])).await?;
    assert_eq!(students, json!([s]));
    let (_, courses) = app.get(&format!("/students/{}/courses", s["id"])).await?;
    assert_eq!(courses, json!([c]));

    let (status, body) = app.put(&format!("/courses/{}/99", c["id"]), None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Student not found");

    let (status, _) = app.delete(&format!("/courses/{}/{}", c["id"], s["id"])).await?;
    assert_eq!(status, StatusCode::OK);
    let (_, students) = app.get(&format!("/courses/{}/students", c["id"])).await?;
    assert_eq!(students, json!([]));
    Ok(())
}

#[tokio::test]
async fn e2e_course_and_student_deletes_do_not_cascade() -> anyhow::Result<()> {
    let app = start_server().await?;
    let (_, t) = app.post("/teachers/", ann()).await?;
    let (_, c1) = app.post("/courses/", json!({"teacher_id": t["id"], "title": "Math"})).await?;
    let (_, c2) = app.post("/courses/", json!({"teacher_id": t["id"], "title": "Bio"})).await?;
    let (_, s) = app.post("/students/", json!({"first_name": "Sam", "last_name": "Poe"})).await?;
    app.put(&format!("/courses/{}/{}", c1["id"], s["id"]), None).await?;
    app.put(&format!("/courses/{}/{}", c2["id"], s["id"]), None).await?;

    let (status, body) = app.delete(&format!("/courses/{}", c1["id"])).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], format!("Course with ID {} deleted successfully", c1["id"]));
    let (status, _) = app.get(&format!("/teachers/{}", t["id"])).await?;
    assert_eq!(status, StatusCode::OK);
    let (_, courses) = app.get(&format!("/students/{}/courses", s["id"])).await?;
    assert_eq!(courses, json!([c2]));

    let (status, _) = app.delete(&format!("/students/{}", s["id"])).await?;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = app.get(&format!("/courses/{}", c2["id"])).await?;
    assert_eq!(status, StatusCode::OK);
    let (_, students) = app.get(&format!("/courses/{}/students", c2["id"])).await?;
    assert_eq!(students, json!([]));
    Ok(())
}

#[tokio::test]
async fn e2e_course_teacher_relationship() -> anyhow::Result<()> {
    let app = start_server().await?;
    let (_, t) = app.post("/teachers/", ann()).await?;
    let (_, owned) = app.post("/courses/", json!({"teacher_id": t["id"], "title": "Math"})).await?;
    let (status, dangling) = app.post("/courses/", json!({"teacher_id": 42, "title": "Ghost"})).await?;
    assert_eq!(status, StatusCode::OK);

    let (status, owner) = app.get(&format!("/courses/{}/teacher", owned["id"])).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(owner, t);

    let (status, owner) = app.get(&format!("/courses/{}/teacher", dangling["id"])).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(owner, Value::Null);
    Ok(())
}

#[tokio::test]
async fn e2e_openapi_document_is_served() -> anyhow::Result<()> {
    let app = start_server().await?;
    let (status, doc) = app.get("/api-docs/openapi.json").await?;
    assert_eq!(status, StatusCode::OK);
    assert!(doc["paths"]["/teachers/{id}"].is_object());
    Ok(())
}

#[tokio::test]
async fn e2e_course_list_pagination() -> anyhow::Result<()> {
    let app = start_server().await?;
    let (_, first) = app.post("/courses/", json!({"teacher_id": 1, "title": "Math"})).await?;
    let (_, second) = app.post("/courses/", json!({"teacher_id": 1, "title": "Bio"})).await?;
    let (_, third) = app.post("/courses/", json!({"teacher_id": 2, "title": "Art"})).await?;

    let (status, page) = app.get("/courses/?skip=1&limit=1").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page, json!([second]));

    let (_, page) = app.get("/courses?skip=1").await?;
    assert_eq!(page, json!([second, third]));
    let (_, page) = app.get("/courses/?limit=2").await?;
    assert_eq!(page, json!([first, second]));
    let (_, page) = app.get("/courses/?skip=3").await?;
    assert_eq!(page, json!([]));
    Ok(())
}

#[tokio::test]
async fn e2e_huge_skip_and_limit_are_clamped() -> anyhow::Result<()> {
    let app = start_server().await?;
    let (_, t) = app.post("/teachers/", ann()).await?;
    let (_, c) = app.post("/courses/", json!({"teacher_id": t["id"], "title": "Math"})).await?;
    let max = u64::MAX;

    let (status, page) = app.get(&format!("/teachers/?limit={max}")).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page, json!([t]));

    let (status, page) = app.get(&format!("/teachers/?skip={max}")).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page, json!([]));

    let (status, page) = app.get(&format!("/courses/?skip=0&limit={max}")).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page, json!([c]));

    let (status, page) = app.get(&format!("/students/?skip={max}&limit={max}")).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page, json!([]));

    // server is still answering afterwards
    let (status, _) = app.get("/health").await?;
    assert_eq!(status, StatusCode::OK);
    Ok(())
}

#[tokio::test]
async fn e2e_query_string_input() -> anyhow::Result<()> {
    let app = start_server().await?;

    let (status, t) = app.post_query("/teachers/?first_name=Ann&last_name=Lee&years_of_experience=5").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(t, json!({"id": 1, "first_name": "Ann", "last_name": "Lee", "years_of_experience": 5}));

    let (status, updated) = app.put("/teachers/1?first_name=Anne", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated, json!({"id": 1, "first_name": "Anne", "last_name": "Lee", "years_of_experience": 5}));

    let (status, updated) = app.put("/teachers/1?years_of_experience=6", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["years_of_experience"], 6);
    assert_eq!(updated["first_name"], "Anne");

    let (status, c) = app.post_query("/teachers/1/courses/?title=Math").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(c, json!({"id": 1, "title": "Math", "description": null, "teacher_id": 1}));

    let (status, c) = app.post_query("/courses/?teacher_id=1&title=Bio&description=Cells").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(c["description"], "Cells");
    let (status, c) = app.put(&format!("/courses/{}?title=Biology", c["id"]), None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(c["title"], "Biology");
    assert_eq!(c["description"], "Cells");

    let (status, s) = app.post_query("/students/?first_name=Sam&last_name=Poe").await?;
    assert_eq!(status, StatusCode::OK);
    let (status, s) = app.put(&format!("/students/{}?last_name=Roe", s["id"]), None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(s["first_name"], "Sam");
    assert_eq!(s["last_name"], "Roe");

    let (status, body) = app.post_query("/teachers/?first_name=Ann&last_name=Lee").await?;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["detail"].is_string());
    let (status, _) = app.post_query("/teachers/?first_name=Ann&last_name=Lee&years_of_experience=five").await?;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let (status, _) = app.put("/teachers/99?first_name=X", None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}
