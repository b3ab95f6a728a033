//! Booking pre-validation gate. Rules run in a fixed order and the first
//! failure wins; a failed booking never reaches the network.

use chrono::NaiveDate;
use tracing::debug;

use doctor_cell::WorkingHours;
use shared_validation::{
    require_non_empty, validate_date_bound, validate_date_format, validate_time_format,
    validate_weekday, DateBound, ValidationError, ValidationResult,
};

use crate::models::{BookingForm, ValidatedBooking};

/// Per-flow rule set. The date bound differs between the create screens
/// (strictly after today) and the update screen (today or later); the
/// weekend rule only applies to self-service booking.
#[derive(Debug, Clone, Copy)]
pub struct BookingRules {
    pub date_bound: DateBound,
    pub reject_weekends: bool,
}

impl BookingRules {
    /// Admin booking screen.
    pub fn admin_create() -> Self {
        Self {
            date_bound: DateBound::AfterToday,
            reject_weekends: false,
        }
    }

    /// Patient/doctor self-service booking.
    pub fn self_service() -> Self {
        Self {
            date_bound: DateBound::AfterToday,
            reject_weekends: true,
        }
    }

    /// Edit screen for an existing cita.
    pub fn update() -> Self {
        Self {
            date_bound: DateBound::TodayOrLater,
            reject_weekends: false,
        }
    }
}

pub fn validate_booking(
    form: &BookingForm,
    working_hours: Option<&WorkingHours>,
    rules: &BookingRules,
    today: NaiveDate,
) -> ValidationResult<ValidatedBooking> {
    for value in [&form.paciente, &form.doctor, &form.fecha, &form.hora] {
        require_non_empty(value, "Todos los campos son obligatorios")?;
    }

    let pacientes_id = form
        .paciente
        .trim()
        .parse::<i64>()
        .map_err(|_| ValidationError("Selecciona un paciente válido".to_string()))?;
    let doctor_id = form
        .doctor
        .trim()
        .parse::<i64>()
        .map_err(|_| ValidationError("Selecciona un doctor válido".to_string()))?;

    let fecha = validate_date_format(&form.fecha)?;
    validate_date_bound(fecha, today, rules.date_bound)?;

    if rules.reject_weekends {
        validate_weekday(fecha)?;
    }

    let hora = validate_time_format(&form.hora)?;

    if let Some(hours) = working_hours {
        if !hours.contains(hora) {
            return Err(ValidationError(format!(
                "La hora debe estar entre {} y {}",
                hours.start.format("%H:%M"),
                hours.end.format("%H:%M")
            )));
        }
    }

    debug!(
        "Booking validated: paciente {} doctor {} {} {}",
        pacientes_id, doctor_id, fecha, hora
    );

    Ok(ValidatedBooking {
        pacientes_id,
        doctor_id,
        fecha,
        hora,
    })
}
