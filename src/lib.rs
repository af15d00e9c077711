//! Renders the lifecycle of a legislative proposal (a "Vorgang") into
//! pages for a static site generator: TOML front matter for the header,
//! a markdown timeline for the body, and the three category index pages.
//!
//! The free functions use [`RenderConfig::default`]; build a
//! [`PageRenderer`] to change template names or fallback texts.

pub mod config;
pub mod domain;
pub mod errors;
pub mod models;
pub mod templates;


pub use config::RenderConfig;
pub use domain::Status;
pub use errors::{RenderError, RenderResult};
pub use models::{Autor, Dokument, DokumentRef, Gremium, Initiator, Station, Vorgang};
pub use templates::{Kategorie, PageRenderer};

/// Front matter of a law page, delimited by `+++` lines.
///
/// Fails with [`RenderError::EmptyStations`] when the record has no station.
pub fn render_header(vorgang: &Vorgang) -> RenderResult<String> {
    PageRenderer::default().header(vorgang)
}

/// Markdown body of a law page: the sorted timeline, then the further links.
///
/// Fails with [`RenderError::EmptyStations`] when the record has no station.
pub fn render_body(vorgang: &Vorgang) -> RenderResult<String> {
    PageRenderer::default().body(vorgang)
}

/// Header and body joined by a blank line.
pub fn render_content(vorgang: &Vorgang) -> RenderResult<String> {
    PageRenderer::default().content(vorgang)
}

/// Category page a law is listed on, `None` when its status is unknown.
pub fn kategorie(vorgang: &Vorgang) -> RenderResult<Option<Kategorie>> {
    PageRenderer::default().kategorie(vorgang)
}

/// Category index page listing `laws` under the fixed station tables.
pub fn render_category_page(kategorie: Kategorie, laws: &[String]) -> String {
    PageRenderer::default().category_page(kategorie, laws)
}

/// Category page "In Vorbereitung".
pub fn render_vorbereitung(laws: &[String]) -> String {
    render_category_page(Kategorie::Vorbereitung, laws)
}

/// Category page "In Beratung".
pub fn render_beratung(laws: &[String]) -> String {
    render_category_page(Kategorie::Beratung, laws)
}

/// Category page "In Nachbereitung".
pub fn render_nachbereitung(laws: &[String]) -> String {
    render_category_page(Kategorie::Nachbereitung, laws)
}
