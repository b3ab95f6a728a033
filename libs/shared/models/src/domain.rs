use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Health-insurance provider (EPS). Referenced by doctors and patients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Eps {
    pub id: i64,
    pub nombre: String,
}

/// Medical specialty a doctor belongs to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Especialidad {
    pub id: i64,
    pub nombre: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Doctor {
    pub id: i64,
    pub nombre: String,
    pub email: String,
    pub telefono: Option<String>,
    pub especialidad_id: i64,
    pub eps_id: i64,
    /// Working-hours bounds, HH:MM. Both absent means no schedule configured.
    pub start_time: Option<String>,
    pub end_time: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paciente {
    pub id: i64,
    pub nombre: String,
    pub email: String,
    pub telefono: Option<String>,
    pub eps_id: i64,
}

/// Appointment between a patient and a doctor at a given date/time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cita {
    pub id: i64,
    pub pacientes_id: i64,
    pub doctor_id: i64,
    pub fecha: NaiveDate,
    /// HH:MM or HH:MM:SS as the server sends it.
    pub hora: String,
    pub status: CitaStatus,
}

impl Cita {
    pub fn hora_as_time(&self) -> Option<NaiveTime> {
        parse_hora(&self.hora)
    }
}

/// Parse a wire time value, tolerating both HH:MM and HH:MM:SS.
pub fn parse_hora(hora: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(hora, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(hora, "%H:%M:%S"))
        .ok()
}

/// Server-side approval workflow for a cita.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CitaStatus {
    PendientePorAprobador,
    Aprobada,
    NoAprobado,
    Completada,
    NoAsistio,
}

impl fmt::Display for CitaStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CitaStatus::PendientePorAprobador => write!(f, "pendiente_por_aprobador"),
            CitaStatus::Aprobada => write!(f, "aprobada"),
            CitaStatus::NoAprobado => write!(f, "no_aprobado"),
            CitaStatus::Completada => write!(f, "completada"),
            CitaStatus::NoAsistio => write!(f, "no_asistio"),
        }
    }
}

/// Doctor-facing review workflow. Distinct from [`CitaStatus`]; the two
/// vocabularies never mix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewStatus {
    Pending,
    Accepted,
    Rejected,
    Cancelled,
}

impl fmt::Display for ReviewStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReviewStatus::Pending => write!(f, "pending"),
            ReviewStatus::Accepted => write!(f, "accepted"),
            ReviewStatus::Rejected => write!(f, "rejected"),
            ReviewStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}
