use std::sync::Arc;

use assert_matches::assert_matches;
use chrono::{NaiveDate, NaiveTime};
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use appointment_cell::{BookingForm, BookingRules, CitaClient};
use doctor_cell::WorkingHours;
use shared_config::ApiConfig;
use shared_http::{ApiClient, MemoryTokenStore};
use shared_models::{ApiError, CitaStatus, ReviewStatus};

fn cita_client(server: &MockServer) -> CitaClient {
    let config = ApiConfig {
        base_url: server.uri(),
        ..ApiConfig::default()
    };
    let api = ApiClient::new(&config, Arc::new(MemoryTokenStore::with_token("abc123")));
    CitaClient::new(Arc::new(api))
}

fn booking_form() -> BookingForm {
    BookingForm {
        paciente: "1".to_string(),
        doctor: "2".to_string(),
        fecha: "2099-01-02".to_string(),
        hora: "10:00".to_string(),
    }
}

#[tokio::test]
async fn booking_round_trip_echoes_submitted_fields() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/citas"))
        .and(body_json(json!({
            "pacientes_id": 1,
            "doctor_id": 2,
            "fecha": "2099-01-02",
            "hora": "10:00"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 7,
            "pacientes_id": 1,
            "doctor_id": 2,
            "fecha": "2099-01-02",
            "hora": "10:00",
            "status": "pendiente_por_aprobador"
        })))
        .mount(&server)
        .await;

    let hours = WorkingHours::parse("09:00", "17:00").unwrap();
    let cita = cita_client(&server)
        .book(&booking_form(), Some(&hours), &BookingRules::self_service())
        .await
        .unwrap();

    assert_eq!(cita.pacientes_id, 1);
    assert_eq!(cita.doctor_id, 2);
    assert_eq!(cita.fecha, NaiveDate::from_ymd_opt(2099, 1, 2).unwrap());
    assert_eq!(cita.hora_as_time(), NaiveTime::from_hms_opt(10, 0, 0));
    assert_eq!(cita.status, CitaStatus::PendientePorAprobador);
}

#[tokio::test]
async fn booking_outside_working_hours_never_reaches_the_network() {
    let server = MockServer::start().await;

    let mut form = booking_form();
    form.hora = "18:00".to_string();
    let hours = WorkingHours::parse("09:00", "17:00").unwrap();

    let result = cita_client(&server)
        .book(&form, Some(&hours), &BookingRules::self_service())
        .await;

    assert_matches!(result, Err(ApiError::Validation(msg)) if msg.contains("09:00") && msg.contains("17:00"));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn booking_with_empty_fields_is_blocked() {
    let server = MockServer::start().await;

    let mut form = booking_form();
    form.paciente = String::new();

    let result = cita_client(&server)
        .book(&form, None, &BookingRules::admin_create())
        .await;

    assert_matches!(result, Err(ApiError::Validation(msg)) if msg == "Todos los campos son obligatorios");
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn available_slots_sends_doctor_and_fecha_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/citas/available-slots"))
        .and(query_param("doctor_id", "2"))
        .and(query_param("fecha", "2099-01-02"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(["09:00", "09:30", "10:00"])))
        .mount(&server)
        .await;

    let slots = cita_client(&server)
        .available_slots(2, NaiveDate::from_ymd_opt(2099, 1, 2).unwrap())
        .await
        .unwrap();
    assert_eq!(slots, vec!["09:00", "09:30", "10:00"]);
}

#[tokio::test]
async fn status_update_refetches_server_copy() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/citas/7"))
        .and(body_json(json!({"status": "accepted"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/citas/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 7,
            "pacientes_id": 1,
            "doctor_id": 2,
            "fecha": "2099-01-02",
            "hora": "10:00:00",
            "status": "aprobada"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let scheduled = NaiveDate::from_ymd_opt(2099, 1, 2)
        .unwrap()
        .and_time(NaiveTime::from_hms_opt(10, 0, 0).unwrap());

    let cita = cita_client(&server)
        .update_status(7, ReviewStatus::Pending, ReviewStatus::Accepted, scheduled)
        .await
        .unwrap();

    // The returned cita is the refetched server copy, not a local patch
    assert_eq!(cita.status, CitaStatus::Aprobada);
}

#[tokio::test]
async fn cancelling_past_cita_is_rejected_without_network() {
    let server = MockServer::start().await;

    let scheduled = NaiveDate::from_ymd_opt(2020, 1, 2)
        .unwrap()
        .and_time(NaiveTime::from_hms_opt(10, 0, 0).unwrap());

    let result = cita_client(&server)
        .update_status(7, ReviewStatus::Accepted, ReviewStatus::Cancelled, scheduled)
        .await;

    assert_matches!(result, Err(ApiError::Validation(msg)) if msg == "No se puede cancelar una cita que ya pasó");
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn detalle_includes_joined_names() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/citas/7/detalle"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 7,
            "pacientes_id": 1,
            "doctor_id": 2,
            "fecha": "2099-01-02",
            "hora": "10:00",
            "status": "aprobada",
            "paciente_nombre": "Ana",
            "doctor_nombre": "Dra. Ruiz",
            "especialidad_nombre": "Cardiología"
        })))
        .mount(&server)
        .await;

    let detalle = cita_client(&server).detalle(7).await.unwrap();
    assert_eq!(detalle.paciente_nombre, "Ana");
    assert_eq!(detalle.doctor_nombre, "Dra. Ruiz");
}

#[tokio::test]
async fn create_cita_error_message_comes_from_server_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/citas"))
        .respond_with(
            ResponseTemplate::new(409).set_body_json(json!({"error": "El horario ya está ocupado"})),
        )
        .mount(&server)
        .await;

    let result = cita_client(&server)
        .book(&booking_form(), None, &BookingRules::admin_create())
        .await;
    assert_matches!(result, Err(ApiError::Server(msg)) if msg == "El horario ya está ocupado");
}
