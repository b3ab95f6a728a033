use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use shared_models::CitaStatus;

/// Raw booking form state, exactly as a screen collects it. Everything is a
/// string until the validation gate has run.
#[derive(Debug, Clone, Default)]
pub struct BookingForm {
    pub paciente: String,
    pub doctor: String,
    /// YYYY-MM-DD
    pub fecha: String,
    /// HH:MM
    pub hora: String,
}

/// A booking that has passed the pre-validation gate and can be submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatedBooking {
    pub pacientes_id: i64,
    pub doctor_id: i64,
    pub fecha: NaiveDate,
    pub hora: NaiveTime,
}

/// `GET /citas/{id}/detalle`: the cita joined with display names.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CitaDetalle {
    pub id: i64,
    pub pacientes_id: i64,
    pub doctor_id: i64,
    pub fecha: NaiveDate,
    pub hora: String,
    pub status: CitaStatus,
    pub paciente_nombre: String,
    pub doctor_nombre: String,
    pub especialidad_nombre: Option<String>,
}
