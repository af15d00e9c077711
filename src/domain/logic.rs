// src/domain/logic.rs

use crate::errors::{RenderError, RenderResult};
use crate::models::Station;

/// Coarse lifecycle status of a Vorgang.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    InVorbereitung,
    InBeratung,
    InNachbereitung,
    Unbekannt,
}

impl Status {
    pub fn label(self) -> &'static str {
        match self {
            Status::InVorbereitung => "In Vorbereitung",
            Status::InBeratung => "In Beratung",
            Status::InNachbereitung => "In Nachbereitung",
            Status::Unbekannt => "Unbekannt",
        }
    }

    /// Classifies the code of the latest station.
    /// The order of checks determines the outcome: the first rule that
    /// matches wins.
    pub fn from_station_typ(typ: &str) -> Self {
        if typ.starts_with("preparl") {
            return Status::InVorbereitung;
        }
        // Decided parliamentary stations fall through to the next rule.
        if typ.starts_with("parl") && !matches!(typ, "parl-akzeptanz" | "parl-ablehnung") {
            return Status::InBeratung;
        }
        if typ.starts_with("postparl")
            || matches!(typ, "parl-akzeptanz" | "parl-ablehnung" | "parl-zurueckgz")
        {
            return Status::InNachbereitung;
        }
        Status::Unbekannt
    }
}

/// The chronologically latest station. On equal `zp_start` the earliest
/// one in input order wins.
pub fn latest_station<'a>(stationen: &'a [Station], titel: &str) -> RenderResult<&'a Station> {
    stationen
        .iter()
        .reduce(|best, s| if s.zp_start > best.zp_start { s } else { best })
        .ok_or_else(|| RenderError::EmptyStations {
            titel: titel.to_string(),
        })
}
