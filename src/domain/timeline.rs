// src/domain/timeline.rs

use crate::models::Station;

/// Orders stations sharing a timestamp by legislative phase.
pub fn phase_bucket(typ: &str) -> u8 {
    if typ.starts_with("prep") {
        0
    } else if typ.starts_with("parl") {
        1
    } else {
        2
    }
}

/// Stations by `(zp_start, phase)`. The sort is stable, so equal keys
/// keep their input order.
pub fn sorted_stations(stationen: &[Station]) -> Vec<&Station> {
    let mut sorted: Vec<&Station> = stationen.iter().collect();
    sorted.sort_by_key(|s| (s.zp_start, phase_bucket(&s.typ)));
    sorted
}
