// src/templates/renderer.rs

use tracing::debug;

use crate::config::RenderConfig;
use crate::domain::{latest_station, Status};
use crate::errors::RenderResult;
use crate::models::Vorgang;
use crate::templates::body::{render_links, render_timeline};
use crate::templates::categories::{render_category_page, Kategorie};
use crate::templates::header::{render_header, HeaderVm};

/// Renders Vorgang records into pages for the static site generator.
///
/// Rendering only reads its input, so one renderer can be shared freely.
#[derive(Debug, Clone, Default)]
pub struct PageRenderer {
    cfg: RenderConfig,
}

impl PageRenderer {
    pub fn new(cfg: RenderConfig) -> Self {
        Self { cfg }
    }

    /// The `+++` delimited front matter of a law page.
    pub fn header(&self, vorgang: &Vorgang) -> RenderResult<String> {
        let vm = HeaderVm::derive(vorgang, &self.cfg)?;
        Ok(render_header(&vm, &self.cfg))
    }

    /// Timeline and further links of a law page.
    pub fn body(&self, vorgang: &Vorgang) -> RenderResult<String> {
        // Same precondition as the header.
        latest_station(&vorgang.stationen, &vorgang.titel)?;

        let mut out = render_timeline(&vorgang.stationen, &self.cfg)?;
        out.push_str(&render_links(vorgang.links.as_deref()));
        Ok(out)
    }

    /// Complete page: header, a blank line, then body.
    pub fn content(&self, vorgang: &Vorgang) -> RenderResult<String> {
        let header = self.header(vorgang)?;
        let body = self.body(vorgang)?;
        debug!(
            titel = %vorgang.titel,
            stationen = vorgang.stationen.len(),
            "rendered page"
        );
        Ok(format!("{header}\n{body}"))
    }

    /// The category index page a Vorgang is listed on, by the status of
    /// its latest station. `None` for status "Unbekannt".
    pub fn kategorie(&self, vorgang: &Vorgang) -> RenderResult<Option<Kategorie>> {
        let latest = latest_station(&vorgang.stationen, &vorgang.titel)?;
        Ok(Kategorie::for_status(Status::from_station_typ(&latest.typ)))
    }

    pub fn category_page(&self, kategorie: Kategorie, laws: &[String]) -> String {
        render_category_page(kategorie, laws, &self.cfg)
    }
}
