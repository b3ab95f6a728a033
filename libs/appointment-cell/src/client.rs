use std::sync::Arc;

use chrono::{Local, NaiveDate, NaiveDateTime};
use reqwest::Method;
use serde_json::{json, Value};
use tracing::{debug, info};

use doctor_cell::WorkingHours;
use shared_http::ApiClient;
use shared_models::{ApiError, ApiResult, Cita, ReviewStatus};

use crate::models::{BookingForm, CitaDetalle, ValidatedBooking};
use crate::services::lifecycle::validate_transition;
use crate::services::validation::{validate_booking, BookingRules};

pub struct CitaClient {
    api: Arc<ApiClient>,
}

impl CitaClient {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    pub async fn list(&self) -> ApiResult<Vec<Cita>> {
        self.api
            .request(Method::GET, "/citas", None, "Error al cargar citas")
            .await
    }

    pub async fn get(&self, cita_id: i64) -> ApiResult<Cita> {
        let path = format!("/citas/{}", cita_id);
        self.api
            .request(Method::GET, &path, None, "Error al cargar la cita")
            .await
    }

    pub async fn detalle(&self, cita_id: i64) -> ApiResult<CitaDetalle> {
        let path = format!("/citas/{}/detalle", cita_id);
        self.api
            .request(
                Method::GET,
                &path,
                None,
                "Error al cargar el detalle de la cita",
            )
            .await
    }

    /// Citas of the logged-in patient.
    pub async fn my_citas(&self) -> ApiResult<Vec<Cita>> {
        self.api
            .request(Method::GET, "/my-citas", None, "Error al cargar tus citas")
            .await
    }

    /// Citas assigned to the logged-in doctor.
    pub async fn my_citas_doctor(&self) -> ApiResult<Vec<Cita>> {
        self.api
            .request(
                Method::GET,
                "/my-citas-doctor",
                None,
                "Error al cargar tus citas",
            )
            .await
    }

    /// The server-computed bookable times for a doctor on a date.
    pub async fn available_slots(
        &self,
        doctor_id: i64,
        fecha: NaiveDate,
    ) -> ApiResult<Vec<String>> {
        let query = [
            ("doctor_id", doctor_id.to_string()),
            ("fecha", fecha.format("%Y-%m-%d").to_string()),
        ];
        self.api
            .request_with_query(
                Method::GET,
                "/citas/available-slots",
                &query,
                None,
                "Error al cargar horarios disponibles",
            )
            .await
    }

    /// Run the pre-validation gate and submit the booking in one step.
    /// Validation failures never touch the network.
    pub async fn book(
        &self,
        form: &BookingForm,
        working_hours: Option<&WorkingHours>,
        rules: &BookingRules,
    ) -> ApiResult<Cita> {
        let today = Local::now().date_naive();
        let booking = validate_booking(form, working_hours, rules, today)
            .map_err(|e| ApiError::Validation(e.to_string()))?;
        self.create(&booking).await
    }

    pub async fn create(&self, booking: &ValidatedBooking) -> ApiResult<Cita> {
        info!(
            "Booking cita for paciente {} with doctor {}",
            booking.pacientes_id, booking.doctor_id
        );

        let body = json!({
            "pacientes_id": booking.pacientes_id,
            "doctor_id": booking.doctor_id,
            "fecha": booking.fecha.format("%Y-%m-%d").to_string(),
            "hora": booking.hora.format("%H:%M").to_string(),
        });

        self.api
            .request(Method::POST, "/citas", Some(body), "Error al crear cita")
            .await
    }

    pub async fn update(&self, cita_id: i64, booking: &ValidatedBooking) -> ApiResult<Cita> {
        debug!("Updating cita {}", cita_id);

        let path = format!("/citas/{}", cita_id);
        let body = json!({
            "pacientes_id": booking.pacientes_id,
            "doctor_id": booking.doctor_id,
            "fecha": booking.fecha.format("%Y-%m-%d").to_string(),
            "hora": booking.hora.format("%H:%M").to_string(),
        });

        self.api
            .request(Method::PUT, &path, Some(body), "Error al actualizar cita")
            .await
    }

    pub async fn delete(&self, cita_id: i64) -> ApiResult<()> {
        let path = format!("/citas/{}", cita_id);
        let _: Value = self
            .api
            .request(Method::DELETE, &path, None, "Error al eliminar cita")
            .await?;
        Ok(())
    }

    /// Commit a doctor-facing review transition, then re-fetch the cita so
    /// the caller always ends up with the server's copy rather than an
    /// optimistic local patch.
    pub async fn update_status(
        &self,
        cita_id: i64,
        current: ReviewStatus,
        next: ReviewStatus,
        scheduled: NaiveDateTime,
    ) -> ApiResult<Cita> {
        let now = Local::now().naive_local();
        validate_transition(current, next, scheduled, now)
            .map_err(|e| ApiError::Validation(e.to_string()))?;

        info!("Updating cita {} status {} -> {}", cita_id, current, next);

        let path = format!("/citas/{}", cita_id);
        let body = json!({ "status": next });
        let _: Value = self
            .api
            .request(Method::PUT, &path, Some(body), "Error al actualizar cita")
            .await?;

        self.get(cita_id).await
    }
}
