// src/domain/selection.rs

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::models::{Dokument, Station};

/// Stations whose "entwurf" document may replace an earlier pick.
pub const PRIVILEGED_STATIONS: [&str; 3] = ["parl-ausschber", "parl-akzeptanz", "postparl-gsblt"];

pub const ENTWURF: &str = "entwurf";

/// The document picked as the latest Drucksache and the start time of the
/// station it came from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Selected<'a> {
    pub dokument: &'a Dokument,
    pub zp_start: DateTime<Utc>,
}

/// Both document selections for one Vorgang, computed in a single place so
/// header and body agree.
#[derive(Debug, Clone, Copy, Default)]
pub struct Auswahl<'a> {
    pub initiative: Option<&'a Dokument>,
    pub drucksache: Option<Selected<'a>>,
}

impl<'a> Auswahl<'a> {
    pub fn from_stations(stationen: &'a [Station]) -> Self {
        let auswahl = Self {
            initiative: select_initiative(stationen),
            drucksache: select_latest_drucksache(stationen),
        };
        debug!(
            initiative = auswahl.initiative.map(|d| d.link.as_str()),
            drucksache = auswahl.drucksache.map(|s| s.dokument.link.as_str()),
            "selected documents"
        );
        auswahl
    }
}

/// First document of the first "parl-initiativ" station that has one.
///
/// Stations are visited in input order. Only the first document slot of a
/// station counts; an unresolved reference there yields nothing for that
/// station.
pub fn select_initiative(stationen: &[Station]) -> Option<&Dokument> {
    stationen
        .iter()
        .filter(|s| s.typ == "parl-initiativ")
        .find_map(|s| s.dokumente.first())
        .and_then(|first| first.dokument())
}

/// Picks the most relevant "entwurf" document.
///
/// Stations are visited in input order, not chronologically. The first
/// "entwurf" found anywhere becomes the pick. After that, only a station of
/// a privileged type that starts strictly later than the current pick can
/// replace it, and only if it carries an "entwurf" itself.
pub fn select_latest_drucksache(stationen: &[Station]) -> Option<Selected<'_>> {
    let mut best: Option<Selected<'_>> = None;

    for station in stationen {
        let may_replace = match best {
            None => true,
            Some(current) => {
                PRIVILEGED_STATIONS.contains(&station.typ.as_str())
                    && current.zp_start < station.zp_start
            }
        };
        if !may_replace {
            continue;
        }

        if let Some(dokument) = station.resolved_dokumente().find(|d| d.typ == ENTWURF) {
            best = Some(Selected {
                dokument,
                zp_start: station.zp_start,
            });
        }
    }

    best
}
