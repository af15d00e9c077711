use crate::models::{Dokument, Initiator, Station, Vorgang};
use chrono::{DateTime, TimeZone, Utc};

/// Noon UTC on the given day, so the rendered date is stable.
pub fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 12, 0, 0)
        .single()
        .unwrap_or_else(|| panic!("invalid test date {year}-{month}-{day}"))
}

/// Station without documents or committee.
pub fn station(typ: &str, zp_start: DateTime<Utc>) -> Station {
    Station {
        typ: typ.to_string(),
        zp_start,
        dokumente: Vec::new(),
        gremium: None,
    }
}

pub fn with_docs(mut station: Station, docs: Vec<Dokument>) -> Station {
    station.dokumente = docs.into_iter().map(Into::into).collect();
    station
}

/// Document with a generic title and only the required fields.
pub fn dokument(typ: &str, link: &str) -> Dokument {
    Dokument {
        typ: typ.to_string(),
        titel: "Drucksache".to_string(),
        link: link.to_string(),
        zusammenfassung: None,
        drucksnr: None,
        autoren: None,
    }
}

pub fn vorgang(stationen: Vec<Station>) -> Vorgang {
    Vorgang {
        titel: "Testgesetz".to_string(),
        typ: "gg-einspruch".to_string(),
        initiatoren: vec![Initiator {
            organisation: "Bundesregierung".to_string(),
        }],
        stationen,
        links: None,
    }
}

pub fn initiatoren(orgs: &[&str]) -> Vec<Initiator> {
    orgs.iter()
        .map(|o| Initiator {
            organisation: o.to_string(),
        })
        .collect()
}

/// A Vorgang as the upstream API delivers it.
pub const SAMPLE_JSON: &str = r#"{
    "titel": "Gesetz zur Stärkung\n   der Digitalisierung",
    "typ": "gg-zustimmung",
    "initiatoren": [
        {"organisation": "Bundesregierung"},
        {"organisation": "Bundesrat"},
        {"organisation": "Bundesregierung"}
    ],
    "stationen": [
        {
            "typ": "parl-ausschber",
            "zp_start": "2024-05-14T09:00:00Z",
            "gremium": {"name": "Ausschuss für Digitales"},
            "dokumente": [
                {
                    "typ": "entwurf",
                    "titel": "Beschlussfassung Digitalgesetz",
                    "link": "https://dserver.bundestag.de/btd/20/111/2011100.pdf",
                    "zusammenfassung": "Überarbeiteter Entwurf.",
                    "drucksnr": "20/11100",
                    "autoren": [{"person": "Erika Mustermann"}, {"person": null}]
                }
            ]
        },
        {
            "typ": "parl-initiativ",
            "zp_start": "2024-02-01T09:00:00Z",
            "dokumente": [
                {
                    "typ": "entwurf",
                    "titel": "Entwurf eines Digitalgesetzes",
                    "link": "https://dserver.bundestag.de/btd/20/100/2010000.pdf",
                    "zusammenfassung": "Erster Entwurf."
                }
            ]
        },
        {
            "typ": "preparl-regent",
            "zp_start": "2023-11-20T09:00:00Z",
            "dokumente": ["7b0c2f4e-9f51-4b39-8a53-3a8d9b1c0e11"]
        }
    ],
    "links": [
        "https://dip.bundestag.de/vorgang/digitalgesetz/305000"
    ]
}"#;
