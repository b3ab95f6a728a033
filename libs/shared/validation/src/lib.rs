//! Pure field validators shared by every screen-level flow.
//!
//! The original client repeated these checks ad hoc per screen; here each
//! rule exists once. Validators return the Spanish message the user sees in
//! the blocking alert, and never touch the network.

use chrono::{Datelike, NaiveDate, NaiveTime, Weekday};
use regex::Regex;
use std::sync::OnceLock;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct ValidationError(pub String);

pub type ValidationResult<T> = Result<T, ValidationError>;

fn fail<T>(message: &str) -> ValidationResult<T> {
    Err(ValidationError(message.to_string()))
}

/// Date-boundary rule. Both variants exist in the original client (create
/// screens require strictly-after-today, the update screen allows today);
/// the inconsistency is preserved deliberately, so every call site has to
/// pick one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateBound {
    AfterToday,
    TodayOrLater,
}

pub fn require_non_empty(value: &str, message: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return fail(message);
    }
    Ok(())
}

pub fn validate_email(email: &str) -> ValidationResult<()> {
    static EMAIL_RE: OnceLock<Regex> = OnceLock::new();
    let re = EMAIL_RE.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
    });

    if !re.is_match(email.trim()) {
        return fail("El correo electrónico no es válido");
    }
    Ok(())
}

pub fn validate_password_confirmation(password: &str, confirmation: &str) -> ValidationResult<()> {
    if password != confirmation {
        return fail("Las contraseñas no coinciden");
    }
    Ok(())
}

/// Accepts exactly `YYYY-MM-DD`.
pub fn validate_date_format(fecha: &str) -> ValidationResult<NaiveDate> {
    NaiveDate::parse_from_str(fecha.trim(), "%Y-%m-%d")
        .map_err(|_| ValidationError("La fecha debe tener el formato YYYY-MM-DD".to_string()))
}

/// Accepts `HH:MM` or `HH:MM:SS` as the forms and the server both produce.
pub fn validate_time_format(hora: &str) -> ValidationResult<NaiveTime> {
    let hora = hora.trim();
    NaiveTime::parse_from_str(hora, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(hora, "%H:%M:%S"))
        .map_err(|_| ValidationError("La hora debe tener el formato HH:MM".to_string()))
}

pub fn validate_date_bound(
    fecha: NaiveDate,
    today: NaiveDate,
    bound: DateBound,
) -> ValidationResult<()> {
    match bound {
        DateBound::AfterToday if fecha <= today => {
            fail("La fecha debe ser posterior a hoy")
        }
        DateBound::TodayOrLater if fecha < today => {
            fail("La fecha no puede ser anterior a hoy")
        }
        _ => Ok(()),
    }
}

pub fn validate_weekday(fecha: NaiveDate) -> ValidationResult<()> {
    if matches!(fecha.weekday(), Weekday::Sat | Weekday::Sun) {
        return fail("No se pueden agendar citas los fines de semana");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn empty_and_whitespace_values_are_rejected() {
        assert!(require_non_empty("", "obligatorio").is_err());
        assert!(require_non_empty("   ", "obligatorio").is_err());
        assert!(require_non_empty("Ana", "obligatorio").is_ok());
    }

    #[test]
    fn email_shape_is_checked() {
        assert!(validate_email("ana@example.com").is_ok());
        assert!(validate_email("ana@example").is_err());
        assert!(validate_email("sin arroba").is_err());
    }

    #[test]
    fn password_confirmation_must_match() {
        assert!(validate_password_confirmation("secreta1", "secreta1").is_ok());
        let err = validate_password_confirmation("secreta1", "secreta2").unwrap_err();
        assert_eq!(err.0, "Las contraseñas no coinciden");
    }

    #[test]
    fn date_format_is_strict_iso() {
        assert_eq!(validate_date_format("2099-01-02").unwrap(), date(2099, 1, 2));
        assert!(validate_date_format("02/01/2099").is_err());
        assert!(validate_date_format("2099-13-40").is_err());
    }

    #[test]
    fn time_format_accepts_optional_seconds() {
        assert_eq!(
            validate_time_format("10:30").unwrap(),
            NaiveTime::from_hms_opt(10, 30, 0).unwrap()
        );
        assert_eq!(
            validate_time_format("10:30:00").unwrap(),
            NaiveTime::from_hms_opt(10, 30, 0).unwrap()
        );
        assert!(validate_time_format("25:00").is_err());
    }

    #[test]
    fn after_today_rejects_today_but_today_or_later_accepts_it() {
        let today = date(2026, 8, 26);
        assert!(validate_date_bound(today, today, DateBound::AfterToday).is_err());
        assert!(validate_date_bound(today, today, DateBound::TodayOrLater).is_ok());

        let tomorrow = date(2026, 8, 27);
        assert!(validate_date_bound(tomorrow, today, DateBound::AfterToday).is_ok());

        let yesterday = date(2026, 8, 25);
        assert!(validate_date_bound(yesterday, today, DateBound::TodayOrLater).is_err());
    }

    #[test]
    fn weekends_are_rejected() {
        // 2026-08-29 is a Saturday, 2026-08-30 a Sunday
        assert!(validate_weekday(date(2026, 8, 29)).is_err());
        assert!(validate_weekday(date(2026, 8, 30)).is_err());
        assert!(validate_weekday(date(2026, 8, 31)).is_ok());
    }
}
