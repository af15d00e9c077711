// src/templates/header.rs

use tracing::debug;

use crate::config::RenderConfig;
use crate::domain::labels::gesetzestyp_label_or_code;
use crate::domain::{latest_station, Auswahl, Status};
use crate::errors::RenderResult;
use crate::models::{Dokument, Vorgang};
use crate::templates::toml::{push_kv, FENCE};

/// Everything the page header shows, derived from one Vorgang.
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderVm {
    pub title: String,
    pub date: String,
    pub station: String,
    pub status: Status,
    pub initiator: String,
    pub gesetzestyp: String,
    pub zusammenfassung: String,
    pub drucksache: Option<DrucksacheVm>,
    pub entwurf_link: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DrucksacheVm {
    pub link: String,
    pub drucksnr: Option<String>,
    /// `None` when the document has no author list at all.
    pub autoren: Option<String>,
}

impl HeaderVm {
    pub fn derive(vorgang: &Vorgang, cfg: &RenderConfig) -> RenderResult<Self> {
        let latest = latest_station(&vorgang.stationen, &vorgang.titel)?;
        let status = Status::from_station_typ(&latest.typ);
        let auswahl = Auswahl::from_stations(&vorgang.stationen);
        let drucksache = auswahl.drucksache.map(|s| s.dokument);

        debug!(
            station = %latest.typ,
            status = status.label(),
            "classified Vorgang"
        );

        let zusammenfassung = drucksache
            .and_then(|d| d.zusammenfassung.as_deref())
            .filter(|z| !z.is_empty())
            .unwrap_or(cfg.summary_fallback.as_str())
            .to_string();

        Ok(HeaderVm {
            title: normalize_whitespace(&vorgang.titel),
            date: cfg.format_date(&latest.zp_start)?,
            station: latest.typ.clone(),
            status,
            initiator: join_initiators(vorgang, cfg.initiator_ellipsis_after),
            gesetzestyp: gesetzestyp_label_or_code(&vorgang.typ).to_string(),
            zusammenfassung,
            drucksache: drucksache.map(DrucksacheVm::from_dokument),
            entwurf_link: auswahl.initiative.map(|d| d.link.clone()),
        })
    }
}

impl DrucksacheVm {
    fn from_dokument(d: &Dokument) -> Self {
        DrucksacheVm {
            link: d.link.clone(),
            drucksnr: d.drucksnr.clone().filter(|nr| !nr.is_empty()),
            autoren: d
                .autoren
                .as_ref()
                .filter(|a| !a.is_empty())
                .map(|autoren| {
                    unique_in_order(autoren.iter().filter_map(|a| a.person.as_deref())).join(", ")
                }),
        }
    }
}

pub fn render_header(vm: &HeaderVm, cfg: &RenderConfig) -> String {
    let mut out = String::from(FENCE);
    push_kv(&mut out, "title", &vm.title);
    push_kv(&mut out, "date", &vm.date);
    push_kv(&mut out, "template", &cfg.page_template);
    out.push_str("[extra]\n");
    push_kv(&mut out, "station", &vm.station);
    push_kv(&mut out, "status", vm.status.label());
    push_kv(&mut out, "date", &vm.date);
    push_kv(&mut out, "initiator", &vm.initiator);
    push_kv(&mut out, "gesetzestyp", &vm.gesetzestyp);
    push_kv(&mut out, "zusammenfassung", &vm.zusammenfassung);

    if let Some(ds) = &vm.drucksache {
        push_kv(&mut out, "drucksache_link", &ds.link);
        if let Some(nr) = &ds.drucksnr {
            push_kv(&mut out, "drucksnr", nr);
        }
        if let Some(autoren) = &ds.autoren {
            push_kv(&mut out, "authoren", autoren);
        }
    }

    if let Some(link) = &vm.entwurf_link {
        push_kv(&mut out, "entwurf_link", link);
    }

    out.push_str(FENCE);
    out
}

/// Collapses every whitespace run to one space and trims the ends.
pub fn normalize_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Distinct organisations joined by ", ". The ellipsis depends on the
/// number of distinct organisations, not on the string length.
fn join_initiators(vorgang: &Vorgang, ellipsis_after: usize) -> String {
    let orgs = unique_in_order(vorgang.initiatoren.iter().map(|i| i.organisation.as_str()));
    let mut joined = orgs.join(", ");
    if orgs.len() > ellipsis_after {
        joined.push_str(", ...");
    }
    joined
}

fn unique_in_order<'a>(items: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = Vec::new();
    for item in items {
        if !seen.contains(&item) {
            seen.push(item);
        }
    }
    seen
}
