// src/templates/categories.rs

use crate::config::RenderConfig;
use crate::domain::Status;
use crate::templates::toml::{push_kv, python_list_literal, FENCE};

/// The three category index pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kategorie {
    Vorbereitung,
    Beratung,
    Nachbereitung,
}

impl Kategorie {
    pub const ALL: [Kategorie; 3] = [
        Kategorie::Vorbereitung,
        Kategorie::Beratung,
        Kategorie::Nachbereitung,
    ];

    pub fn title(self) -> &'static str {
        self.status().label()
    }

    pub fn status(self) -> Status {
        match self {
            Kategorie::Vorbereitung => Status::InVorbereitung,
            Kategorie::Beratung => Status::InBeratung,
            Kategorie::Nachbereitung => Status::InNachbereitung,
        }
    }

    /// The page a law with this status is listed on.
    pub fn for_status(status: Status) -> Option<Self> {
        match status {
            Status::InVorbereitung => Some(Kategorie::Vorbereitung),
            Status::InBeratung => Some(Kategorie::Beratung),
            Status::InNachbereitung => Some(Kategorie::Nachbereitung),
            Status::Unbekannt => None,
        }
    }

    /// Station groupings the category template renders as tables.
    pub fn tables(self) -> &'static str {
        match self {
            Kategorie::Vorbereitung => {
                r#"[{name="Diskussionsentwurf", stations=["preparl-regent"]}, {name="Eckpunktepapier", stations=["preparl-eckpup"]}]"#
            }
            Kategorie::Beratung => {
                r#"[{name="Initiative", stations=["parl-initiativ"]},{name="Ausschussberatung", stations=["parl-ausschber", "parl-vollvlsgn"]}]"#
            }
            Kategorie::Nachbereitung => {
                r#"[{name="Abgelehnt/Zurückgezogen", stations=["parl-ablehnung", "parl-zurueckgz"]},{name="Angenommen", stations=["parl-akzeptanz"]},{name="Veröffentlicht", stations=["postparl-vesja", "postparl-vesne", "postparl-gsblt", "postparl-kraft"]}]"#
            }
        }
    }
}

pub fn render_category_page(kategorie: Kategorie, laws: &[String], cfg: &RenderConfig) -> String {
    let mut out = String::from(FENCE);
    push_kv(&mut out, "title", kategorie.title());
    push_kv(&mut out, "template", &cfg.category_template);
    out.push_str("[extra]\n");
    out.push_str("tables=");
    out.push_str(kategorie.tables());
    out.push('\n');
    out.push_str("laws=");
    out.push_str(&python_list_literal(laws));
    out.push('\n');
    out.push_str(FENCE);
    out
}
