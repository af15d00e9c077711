use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::RenderResult;

// vorgang
//  ├── titel
//  ├── typ
//  ├── initiatoren[]
//  │    └── organisation
//  ├── stationen[]
//  │    ├── typ
//  │    ├── zp_start
//  │    ├── gremium?
//  │    │    └── name
//  │    └── dokumente[]
//  │         └── Dokument | "<id>"
//  │              ├── typ
//  │              ├── titel
//  │              ├── link
//  │              ├── zusammenfassung?
//  │              ├── drucksnr?
//  │              └── autoren[]?
//  │                   └── person?
//  └── links[]?

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vorgang {
    pub titel: String,
    /// Law-type code, e.g. "gg-einspruch".
    pub typ: String,
    #[serde(default)]
    pub initiatoren: Vec<Initiator>,
    pub stationen: Vec<Station>,
    #[serde(default)]
    pub links: Option<Vec<String>>,
}

impl Vorgang {
    pub fn from_json(raw: &str) -> RenderResult<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Initiator {
    pub organisation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    /// Station code, e.g. "parl-ausschber".
    pub typ: String,
    pub zp_start: DateTime<Utc>,
    #[serde(default)]
    pub dokumente: Vec<DokumentRef>,
    /// Only set on committee stations.
    #[serde(default)]
    pub gremium: Option<Gremium>,
}

impl Station {
    /// Resolved documents in their original order.
    pub fn resolved_dokumente(&self) -> impl Iterator<Item = &Dokument> {
        self.dokumente.iter().filter_map(DokumentRef::dokument)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gremium {
    pub name: String,
}

/// A document slot on a station. The upstream API either embeds the full
/// document or only refers to it by identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DokumentRef {
    Dokument(Box<Dokument>),
    Verweis(String),
}

impl DokumentRef {
    pub fn dokument(&self) -> Option<&Dokument> {
        match self {
            DokumentRef::Dokument(d) => Some(d),
            DokumentRef::Verweis(_) => None,
        }
    }
}

impl From<Dokument> for DokumentRef {
    fn from(d: Dokument) -> Self {
        DokumentRef::Dokument(Box::new(d))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dokument {
    /// Document kind code, e.g. "entwurf".
    pub typ: String,
    /// The upstream API writes the literal "None" when a document has no title.
    pub titel: String,
    pub link: String,
    #[serde(default)]
    pub zusammenfassung: Option<String>,
    #[serde(default)]
    pub drucksnr: Option<String>,
    #[serde(default)]
    pub autoren: Option<Vec<Autor>>,
}

impl Dokument {
    pub const NO_TITLE: &'static str = "None";

    /// Title for display, empty when upstream sent the "None" sentinel.
    pub fn display_titel(&self) -> &str {
        if self.titel == Self::NO_TITLE {
            ""
        } else {
            &self.titel
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Autor {
    #[serde(default)]
    pub person: Option<String>,
}
