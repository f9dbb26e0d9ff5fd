use assert_matches::assert_matches;
use serde_json::json;
use wiremock::{MockServer, Mock, ResponseTemplate};
use wiremock::matchers::{body_json, header, method, path, query_param};

use shared_config::AppConfig;
use shared_database::{AppointmentStore, DoctorStore, SupabaseStore};
use shared_models::{AppointmentKind, NewAppointment, NewDoctor};

fn appointment_row(id: i64, doctor_id: i64, date: &str, time: &str) -> serde_json::Value {
    json!({
        "id": id,
        "patient_first_name": "test_fn",
        "patient_last_name": "test_ln",
        "date": date,
        "time": time,
        "kind": "New Patient",
        "doctor_id": doctor_id
    })
}

async fn store_for(mock_server: &MockServer) -> SupabaseStore {
    SupabaseStore::new(&AppConfig::supabase(mock_server.uri(), "test-anon-key"))
}

#[tokio::test]
async fn find_doctor_by_id_returns_first_row() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/doctors"))
        .and(query_param("id", "eq.5"))
        .and(header("apikey", "test-anon-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 5, "first_name": "test_first", "last_name": "test_last"}
        ])))
        .mount(&mock_server)
        .await;

    let store = store_for(&mock_server).await;
    let doctor = store.find_by_id(5).await.unwrap().expect("doctor row");

    assert_eq!(doctor.id, 5);
    assert_eq!(doctor.first_name, "test_first");
}

#[tokio::test]
async fn missing_doctor_is_none() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/doctors"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&mock_server)
        .await;

    let store = store_for(&mock_server).await;
    assert!(store.find_by_id(1000000).await.unwrap().is_none());
}

#[tokio::test]
async fn slot_query_filters_on_normalized_strings() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/appointments"))
        .and(query_param("doctor_id", "eq.3"))
        .and(query_param("date", "eq.1/11/2000"))
        .and(query_param("time", "eq.8:00AM"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            appointment_row(1, 3, "1/11/2000", "8:00AM"),
            appointment_row(2, 3, "1/11/2000", "8:00AM"),
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let store = store_for(&mock_server).await;
    let rows = store.find_by_doctor_date_time(3, "1/11/2000", "8:00AM").await.unwrap();

    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|apt| apt.kind == AppointmentKind::NewPatient));
}

#[tokio::test]
async fn insert_appointment_asks_for_representation() {
    let mock_server = MockServer::start().await;

    let new_appointment = NewAppointment {
        patient_first_name: "test_fn".to_string(),
        patient_last_name: "test_ln".to_string(),
        date: "1/11/2000".to_string(),
        time: "8:00AM".to_string(),
        kind: AppointmentKind::NewPatient,
        doctor_id: 3,
    };

    Mock::given(method("POST"))
        .and(path("/rest/v1/appointments"))
        .and(header("Prefer", "return=representation"))
        .and(body_json(json!({
            "patient_first_name": "test_fn",
            "patient_last_name": "test_ln",
            "date": "1/11/2000",
            "time": "8:00AM",
            "kind": "New Patient",
            "doctor_id": 3
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!([
            appointment_row(17, 3, "1/11/2000", "8:00AM")
        ])))
        .mount(&mock_server)
        .await;

    let store = store_for(&mock_server).await;
    let stored = AppointmentStore::insert(&store, new_appointment).await.unwrap();

    assert_eq!(stored.id, 17);
    assert_eq!(stored.time, "8:00AM");
}

#[tokio::test]
async fn insert_doctor_returns_assigned_id() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/rest/v1/doctors"))
        .and(header("Prefer", "return=representation"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!([
            {"id": 8, "first_name": "new_first", "last_name": "new_last"}
        ])))
        .mount(&mock_server)
        .await;

    let store = store_for(&mock_server).await;
    let doctor = DoctorStore::insert(&store, NewDoctor {
        first_name: "new_first".to_string(),
        last_name: "new_last".to_string(),
    })
    .await
    .unwrap();

    assert_eq!(doctor.id, 8);
}

#[tokio::test]
async fn delete_reports_whether_a_row_went_away() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/rest/v1/appointments"))
        .and(query_param("id", "eq.4"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            appointment_row(4, 1, "1/11/2000", "8:00AM")
        ])))
        .mount(&mock_server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/rest/v1/appointments"))
        .and(query_param("id", "eq.5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&mock_server)
        .await;

    let store = store_for(&mock_server).await;
    assert!(store.delete_by_id(4).await.unwrap());
    assert!(!store.delete_by_id(5).await.unwrap());
}

#[tokio::test]
async fn backend_errors_propagate() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/appointments"))
        .respond_with(ResponseTemplate::new(500).set_body_string("database unavailable"))
        .mount(&mock_server)
        .await;

    let store = store_for(&mock_server).await;
    let result = AppointmentStore::list_all(&store).await;

    assert_matches!(result, Err(e) if e.to_string().contains("database unavailable"));
}
