use chrono::{Duration, NaiveTime};
use serde::{Deserialize, Serialize};

use shared_models::{parse_hora, Doctor};
use shared_validation::{validate_time_format, ValidationResult};

/// Bookable time unit within a doctor's working hours.
pub const SLOT_MINUTES: i64 = 30;

/// A doctor's configured working interval, `start_time`/`end_time` (HH:MM).
/// Containment is half-open: an appointment's hora must satisfy
/// `start <= hora < end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkingHours {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl WorkingHours {
    pub fn parse(start_time: &str, end_time: &str) -> Option<Self> {
        let start = parse_hora(start_time)?;
        let end = parse_hora(end_time)?;
        if start >= end {
            return None;
        }
        Some(Self { start, end })
    }

    /// The working hours a doctor has configured, if any. A doctor without
    /// a schedule accepts any time.
    pub fn of(doctor: &Doctor) -> Option<Self> {
        match (doctor.start_time.as_deref(), doctor.end_time.as_deref()) {
            (Some(start), Some(end)) => Self::parse(start, end),
            _ => None,
        }
    }

    pub fn contains(&self, hora: NaiveTime) -> bool {
        self.start <= hora && hora < self.end
    }

    /// Slot start times at 30-minute granularity, end bound excluded.
    pub fn slots(&self) -> Vec<NaiveTime> {
        let mut slots = Vec::new();
        let mut cursor = self.start;
        while cursor < self.end {
            slots.push(cursor);
            let (next, wrapped) = cursor.overflowing_add_signed(Duration::minutes(SLOT_MINUTES));
            if wrapped != 0 {
                break;
            }
            cursor = next;
        }
        slots
    }
}

/// Create/update body for `/doctores`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DoctorPayload {
    pub nombre: String,
    pub email: String,
    pub telefono: Option<String>,
    pub especialidad_id: i64,
    pub eps_id: i64,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
}

/// Body for `PUT /doctores/schedule` (doctor self-service).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchedulePayload {
    pub start_time: String,
    pub end_time: String,
}

impl SchedulePayload {
    pub fn validate(&self) -> ValidationResult<()> {
        let start = validate_time_format(&self.start_time)?;
        let end = validate_time_format(&self.end_time)?;
        if start >= end {
            return Err(shared_validation::ValidationError(
                "La hora de inicio debe ser anterior a la hora de fin".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hours(start: &str, end: &str) -> WorkingHours {
        WorkingHours::parse(start, end).unwrap()
    }

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn containment_is_half_open() {
        let hours = hours("09:00", "17:00");
        assert!(hours.contains(time(9, 0)));
        assert!(hours.contains(time(16, 30)));
        assert!(!hours.contains(time(17, 0)));
        assert!(!hours.contains(time(8, 59)));
    }

    #[test]
    fn slots_use_thirty_minute_granularity() {
        let slots = hours("09:00", "11:00").slots();
        assert_eq!(
            slots,
            vec![time(9, 0), time(9, 30), time(10, 0), time(10, 30)]
        );
    }

    #[test]
    fn inverted_or_malformed_hours_parse_as_none() {
        assert!(WorkingHours::parse("17:00", "09:00").is_none());
        assert!(WorkingHours::parse("mañana", "09:00").is_none());
    }

    #[test]
    fn doctor_without_schedule_has_no_working_hours() {
        let doctor: Doctor = serde_json::from_str(
            r#"{"id":2,"nombre":"Dra. Ruiz","email":"ruiz@example.com","telefono":null,
                "especialidad_id":1,"eps_id":1,"start_time":null,"end_time":null}"#,
        )
        .unwrap();
        assert!(WorkingHours::of(&doctor).is_none());
    }

    #[test]
    fn schedule_payload_rejects_inverted_interval() {
        let payload = SchedulePayload {
            start_time: "17:00".to_string(),
            end_time: "09:00".to_string(),
        };
        assert!(payload.validate().is_err());

        let payload = SchedulePayload {
            start_time: "08:00".to_string(),
            end_time: "16:30".to_string(),
        };
        assert!(payload.validate().is_ok());
    }
}
