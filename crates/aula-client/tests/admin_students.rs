mod common;

use aula_models::{EstudianteCreateDto, EstudianteUpdateDto};
use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use common::{fake_first_name, fake_last_name, spawn_backend};
use serde_json::json;

fn student_json(id: &str, nombres: &str, apellidos: &str) -> serde_json::Value {
    json!({
        "id": id,
        "codigo_rude": "80730016200512A",
        "nombres": nombres,
        "apellidos": apellidos,
        "curso": "3ro Secundaria",
        "paralelo": "A"
    })
}

#[tokio::test]
async fn test_list_students_forwards_query() {
    let (backend, client) = spawn_backend(|_| {
        Json(json!([
            student_json("1", "Ana", "Quispe"),
            student_json("2", "Luis", "Mamani"),
        ]))
        .into_response()
    })
    .await;

    let students = client.students().list("curso=3ro&paralelo=A").await.unwrap();

    assert_eq!(students.len(), 2);
    assert_eq!(students[0].nombres, "Ana");
    assert_eq!(students[1].id, "2");

    let request = backend.single_request();
    assert_eq!(request.method, "GET");
    assert_eq!(request.path, "/admin/students");
    assert_eq!(request.query.as_deref(), Some("curso=3ro&paralelo=A"));
}

#[tokio::test]
async fn test_list_students_without_query() {
    let (backend, client) = spawn_backend(|_| Json(json!([])).into_response()).await;

    let students = client.students().list("").await.unwrap();

    assert!(students.is_empty());
    let request = backend.single_request();
    assert_eq!(request.path, "/admin/students");
    assert_eq!(request.query, None);
}

#[tokio::test]
async fn test_get_student() {
    let (backend, client) =
        spawn_backend(|_| Json(student_json("123", "Ana", "Quispe")).into_response()).await;

    let student = client.students().get("123").await.unwrap();

    assert_eq!(student.id, "123");
    assert_eq!(student.codigo_rude, "80730016200512A");
    assert_eq!(backend.single_request().path, "/admin/students/123");
}

#[tokio::test]
async fn test_get_missing_student_is_404() {
    let (_backend, client) = spawn_backend(|_| StatusCode::NOT_FOUND.into_response()).await;

    let err = client.students().get("123").await.unwrap_err();

    assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_create_student_posts_serialized_payload_once() {
    let (backend, client) = spawn_backend(|request| {
        let mut created = request.json();
        created["id"] = json!(42);
        created["codigo_rude"] = json!("80730016200512B");
        (StatusCode::CREATED, Json(created)).into_response()
    })
    .await;

    let payload = EstudianteCreateDto {
        nombres: fake_first_name(),
        apellidos: fake_last_name(),
        ci: Some("1234567".to_string()),
        curso: Some("1ro Primaria".to_string()),
        ..Default::default()
    };

    let created = client.students().create(&payload).await.unwrap();

    let request = backend.single_request();
    assert_eq!(request.method, "POST");
    assert_eq!(request.path, "/admin/students");
    assert_eq!(request.json(), serde_json::to_value(&payload).unwrap());

    assert_eq!(created.id, "42");
    assert_eq!(created.codigo_rude, "80730016200512B");
    assert_eq!(created.nombres, payload.nombres);
    assert_eq!(created.ci, payload.ci);
}

#[tokio::test]
async fn test_update_student_puts_partial_payload() {
    let (backend, client) = spawn_backend(|request| {
        let mut updated = student_json("9", "Ana", "Quispe");
        updated["paralelo"] = request.json()["paralelo"].clone();
        Json(updated).into_response()
    })
    .await;

    let payload = EstudianteUpdateDto {
        paralelo: Some("B".to_string()),
        ..Default::default()
    };

    let updated = client.students().update("9", &payload).await.unwrap();

    let request = backend.single_request();
    assert_eq!(request.method, "PUT");
    assert_eq!(request.path, "/admin/students/9");
    assert_eq!(request.json(), json!({ "paralelo": "B" }));
    assert_eq!(updated.paralelo.as_deref(), Some("B"));
}

#[tokio::test]
async fn test_regenerate_code_posts_without_body() {
    let (backend, client) =
        spawn_backend(|_| Json(json!({ "codigo_rude": "80730016200599Z" })).into_response()).await;

    let code = client.students().regenerate_code("9").await.unwrap();

    assert_eq!(code.codigo_rude, "80730016200599Z");
    let request = backend.single_request();
    assert_eq!(request.method, "POST");
    assert_eq!(request.path, "/admin/students/9/rude");
    assert!(request.body.is_empty());
}
