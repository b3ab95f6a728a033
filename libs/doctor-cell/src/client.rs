use std::sync::Arc;

use reqwest::Method;
use serde_json::{json, Value};
use tracing::debug;

use shared_http::ApiClient;
use shared_models::{ApiError, ApiResult, Cita, Doctor, Paciente};

use crate::models::{DoctorPayload, SchedulePayload};

pub struct DoctorClient {
    api: Arc<ApiClient>,
}

impl DoctorClient {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    pub async fn list(&self) -> ApiResult<Vec<Doctor>> {
        self.api
            .request(Method::GET, "/doctores", None, "Error al cargar doctores")
            .await
    }

    pub async fn get(&self, doctor_id: i64) -> ApiResult<Doctor> {
        let path = format!("/doctores/{}", doctor_id);
        self.api
            .request(Method::GET, &path, None, "Error al cargar el doctor")
            .await
    }

    pub async fn create(&self, payload: &DoctorPayload) -> ApiResult<Doctor> {
        debug!("Creating doctor {}", payload.email);

        let body = json!({
            "nombre": payload.nombre,
            "email": payload.email,
            "telefono": payload.telefono,
            "especialidad_id": payload.especialidad_id,
            "eps_id": payload.eps_id,
            "start_time": payload.start_time,
            "end_time": payload.end_time,
        });

        self.api
            .request(Method::POST, "/doctores", Some(body), "Error al crear doctor")
            .await
    }

    pub async fn update(&self, doctor_id: i64, payload: &DoctorPayload) -> ApiResult<Doctor> {
        debug!("Updating doctor {}", doctor_id);

        let path = format!("/doctores/{}", doctor_id);
        let body = json!({
            "nombre": payload.nombre,
            "email": payload.email,
            "telefono": payload.telefono,
            "especialidad_id": payload.especialidad_id,
            "eps_id": payload.eps_id,
            "start_time": payload.start_time,
            "end_time": payload.end_time,
        });

        self.api
            .request(Method::PUT, &path, Some(body), "Error al actualizar doctor")
            .await
    }

    pub async fn delete(&self, doctor_id: i64) -> ApiResult<()> {
        let path = format!("/doctores/{}", doctor_id);
        let _: Value = self
            .api
            .request(Method::DELETE, &path, None, "Error al eliminar doctor")
            .await?;
        Ok(())
    }

    pub async fn citas(&self, doctor_id: i64) -> ApiResult<Vec<Cita>> {
        let path = format!("/doctores/{}/citas", doctor_id);
        self.api
            .request(Method::GET, &path, None, "Error al cargar las citas del doctor")
            .await
    }

    pub async fn pacientes(&self, doctor_id: i64) -> ApiResult<Vec<Paciente>> {
        let path = format!("/doctores/{}/pacientes", doctor_id);
        self.api
            .request(
                Method::GET,
                &path,
                None,
                "Error al cargar los pacientes del doctor",
            )
            .await
    }

    /// Doctor self-service schedule update. The HH:MM interval is validated
    /// before anything goes over the wire.
    pub async fn update_schedule(&self, payload: &SchedulePayload) -> ApiResult<Doctor> {
        payload
            .validate()
            .map_err(|e| ApiError::Validation(e.to_string()))?;

        let body = json!({
            "start_time": payload.start_time,
            "end_time": payload.end_time,
        });

        self.api
            .request(
                Method::PUT,
                "/doctores/schedule",
                Some(body),
                "Error al actualizar el horario",
            )
            .await
    }
}
