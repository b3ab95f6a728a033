//! Slot-list helpers. The server's available-slot list is authoritative;
//! the one client-side adjustment is re-injecting the slot an existing cita
//! already occupies, so editing never makes the current time look
//! unavailable.

use shared_models::parse_hora;

/// Build the selectable slot list for a booking screen.
///
/// `current` is the hora of the cita being edited, if any. Slots are ordered
/// by time of day; entries that do not parse as times are dropped.
pub fn selectable_slots(available: &[String], current: Option<&str>) -> Vec<String> {
    let mut slots: Vec<(chrono::NaiveTime, String)> = available
        .iter()
        .filter_map(|s| parse_hora(s).map(|t| (t, s.clone())))
        .collect();

    if let Some(current) = current {
        if let Some(time) = parse_hora(current) {
            if !slots.iter().any(|(t, _)| *t == time) {
                slots.push((time, current.to_string()));
            }
        }
    }

    slots.sort_by_key(|(t, _)| *t);
    slots.dedup_by_key(|(t, _)| *t);
    slots.into_iter().map(|(_, s)| s).collect()
}
