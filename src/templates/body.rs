// src/templates/body.rs

use tracing::warn;
use url::Url;

use crate::config::RenderConfig;
use crate::domain::labels::{dokument_typ_label_or_sonstiges, station_heading};
use crate::domain::timeline::sorted_stations;
use crate::errors::RenderResult;
use crate::models::{DokumentRef, Station};

pub fn render_timeline(stationen: &[Station], cfg: &RenderConfig) -> RenderResult<String> {
    let mut out = String::from("# Beratungsverlauf\n");

    for station in sorted_stations(stationen) {
        out.push_str("## ");
        out.push_str(station_heading(&station.typ));
        if station.typ == "parl-ausschber" {
            if let Some(gremium) = station.gremium.as_ref().filter(|g| !g.name.is_empty()) {
                out.push_str(" im ");
                out.push_str(&gremium.name);
            }
        }
        out.push('\n');

        out.push_str(&format!("Datum: {}\n\n", cfg.format_date(&station.zp_start)?));

        if station.resolved_dokumente().next().is_some() {
            out.push_str("### Dokumente\n");
        }
        for slot in &station.dokumente {
            match slot {
                DokumentRef::Dokument(d) => out.push_str(&format!(
                    "- [{} ({})]({})\n",
                    d.display_titel(),
                    dokument_typ_label_or_sonstiges(&d.typ),
                    d.link
                )),
                DokumentRef::Verweis(id) => {
                    warn!(station = %station.typ, dokument = %id, "skipping unresolved document");
                }
            }
        }
    }

    Ok(out)
}

pub fn render_links(links: Option<&[String]>) -> String {
    let mut out = String::from("\n# Weiterführende Links\n");

    for link in links.unwrap_or_default() {
        let Some(entry) = link_entry(link) else {
            warn!(link = %link, "skipping link without host");
            continue;
        };
        out.push_str(&entry);
    }

    out
}

/// `- [host](link) (PDF)` or `(Website)`; `None` when no host can be read.
///
/// The label is the host plus a non-default port. User info and a port
/// equal to the scheme default are not shown.
fn link_entry(link: &str) -> Option<String> {
    let url = Url::parse(link).ok()?;
    let host = url.host_str()?;
    let netloc = match url.port() {
        Some(port) => format!("{host}:{port}"),
        None => host.to_string(),
    };
    let kind = if url.path().ends_with(".pdf") {
        "PDF"
    } else {
        "Website"
    };
    Some(format!("- [{netloc}]({link}) ({kind})\n"))
}
