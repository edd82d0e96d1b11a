mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{Factory, TestApp};
use teamforge::repositories::{AssignmentRepository, ProjectRepository, Repository};

#[tokio::test]
async fn test_create_project_stamps_created_by() {
    let app = TestApp::new().await;
    let factory = Factory::new(&app.state);
    let admin = factory.create_admin().await;
    let someone_else = factory.create_user().await;

    // A client-supplied created_by is dropped, not honored
    let response = app
        .server
        .post("/api/admin/projects")
        .add_header("Authorization", admin.auth_header())
        .json(&json!({
            "title": "Platform Rewrite",
            "description": "Move the platform to the new stack",
            "status": "planning",
            "technologies": "Rust,PostgreSQL",
            "required_team_size": 4,
            "created_by": someone_else.user_id
        }))
        .await;

    response.assert_status(StatusCode::OK);

    let body: serde_json::Value = response.json();
    assert_eq!(body["created_by"].as_i64().unwrap(), admin.user_id as i64);
    assert_eq!(body["title"].as_str().unwrap(), "Platform Rewrite");
}

#[tokio::test]
async fn test_technologies_preserved_verbatim() {
    let app = TestApp::new().await;
    let factory = Factory::new(&app.state);
    let admin = factory.create_admin().await;

    let response = app
        .server
        .post("/api/admin/projects")
        .add_header("Authorization", admin.auth_header())
        .json(&json!({
            "title": "Polyglot Service",
            "description": "",
            "status": "active",
            "technologies": "Go,Rust",
            "required_team_size": 2
        }))
        .await;

    response.assert_status(StatusCode::OK);
    let created: serde_json::Value = response.json();
    let id = created["id"].as_i64().unwrap() as i32;

    // Fetch back through the store: the string survives untouched
    let project = ProjectRepository::find_by_id(&app.state.db, id)
        .await
        .unwrap();
    assert_eq!(project.technologies, "Go,Rust");
    assert_eq!(project.technology_list(), vec!["Go", "Rust"]);
}

#[tokio::test]
async fn test_create_project_rejects_zero_team_size() {
    let app = TestApp::new().await;
    let factory = Factory::new(&app.state);
    let admin = factory.create_admin().await;

    let response = app
        .server
        .post("/api/admin/projects")
        .add_header("Authorization", admin.auth_header())
        .json(&json!({
            "title": "Ghost Project",
            "description": "",
            "status": "planning",
            "technologies": "",
            "required_team_size": 0
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_projects() {
    let app = TestApp::new().await;
    let factory = Factory::new(&app.state);
    let admin = factory.create_admin().await;
    let project = factory.create_project(admin.user_id).await;

    let response = app
        .server
        .get("/api/admin/projects")
        .add_header("Authorization", admin.auth_header())
        .await;

    response.assert_status(StatusCode::OK);

    let body: serde_json::Value = response.json();
    assert!(body
        .as_array()
        .unwrap()
        .iter()
        .any(|p| p["id"].as_i64() == Some(project.id as i64)));
}

#[tokio::test]
async fn test_update_project_partial() {
    let app = TestApp::new().await;
    let factory = Factory::new(&app.state);
    let admin = factory.create_admin().await;
    let before = factory.create_project(admin.user_id).await;

    let response = app
        .server
        .put(&format!("/api/admin/projects/{}", before.id))
        .add_header("Authorization", admin.auth_header())
        .json(&json!({ "status": "active" }))
        .await;

    response.assert_status(StatusCode::OK);

    let after = ProjectRepository::find_by_id(&app.state.db, before.id)
        .await
        .unwrap();
    assert_eq!(after.status, "active");
    // Everything not in the payload is untouched
    assert_eq!(after.title, before.title);
    assert_eq!(after.description, before.description);
    assert_eq!(after.technologies, before.technologies);
    assert_eq!(after.required_team_size, before.required_team_size);
    assert_eq!(after.created_by, before.created_by);
}

#[tokio::test]
async fn test_update_nonexistent_project() {
    let app = TestApp::new().await;
    let factory = Factory::new(&app.state);
    let admin = factory.create_admin().await;

    let response = app
        .server
        .put("/api/admin/projects/99999")
        .add_header("Authorization", admin.auth_header())
        .json(&json!({ "status": "active" }))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_nonexistent_project() {
    let app = TestApp::new().await;
    let factory = Factory::new(&app.state);
    let admin = factory.create_admin().await;

    let response = app
        .server
        .delete("/api/admin/projects/99999")
        .add_header("Authorization", admin.auth_header())
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_project_cascades_assignments() {
    let app = TestApp::new().await;
    let factory = Factory::new(&app.state);
    let admin = factory.create_admin().await;
    let member = factory.create_user().await;
    let project = factory.create_project(admin.user_id).await;
    let assignment = factory.create_assignment(project.id, member.user_id).await;

    let response = app
        .server
        .delete(&format!("/api/admin/projects/{}", project.id))
        .add_header("Authorization", admin.auth_header())
        .await;

    response.assert_status(StatusCode::OK);

    let body: serde_json::Value = response.json();
    assert_eq!(
        body["message"].as_str().unwrap(),
        "Project deleted successfully"
    );

    assert!(ProjectRepository::find_by_id(&app.state.db, project.id)
        .await
        .is_err());
    assert!(
        AssignmentRepository::find_by_id(&app.state.db, assignment.id)
            .await
            .is_err()
    );
}

#[tokio::test]
async fn test_project_endpoints_reject_non_admin() {
    let app = TestApp::new().await;
    let factory = Factory::new(&app.state);
    let admin = factory.create_admin().await;
    let auth = factory.create_user().await;
    let project = factory.create_project(admin.user_id).await;

    let attempts = [
        app.server
            .get("/api/admin/projects")
            .add_header("Authorization", auth.auth_header())
            .await,
        app.server
            .post("/api/admin/projects")
            .add_header("Authorization", auth.auth_header())
            .json(&json!({
                "title": "Sneaky Project",
                "description": "",
                "status": "planning",
                "technologies": "",
                "required_team_size": 1
            }))
            .await,
        app.server
            .put(&format!("/api/admin/projects/{}", project.id))
            .add_header("Authorization", auth.auth_header())
            .json(&json!({ "status": "hijacked" }))
            .await,
        app.server
            .delete(&format!("/api/admin/projects/{}", project.id))
            .add_header("Authorization", auth.auth_header())
            .await,
    ];

    for response in attempts {
        response.assert_status(StatusCode::FORBIDDEN);
    }

    // The project is still there, unchanged
    let unchanged = ProjectRepository::find_by_id(&app.state.db, project.id)
        .await
        .unwrap();
    assert_eq!(unchanged.status, project.status);
}
