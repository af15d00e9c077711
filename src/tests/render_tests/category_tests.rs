// src/tests/render_tests/category_tests.rs

use crate::config::RenderConfig;
use crate::templates::PageRenderer;
use crate::{render_beratung, render_category_page, render_nachbereitung, render_vorbereitung};
use crate::Kategorie;

fn laws() -> Vec<String> {
    vec!["gesetz-a".to_string(), "gesetz-b".to_string()]
}

#[test]
fn vorbereitung_page() {
    assert_eq!(
        render_vorbereitung(&laws()),
        r#"+++
title="In Vorbereitung"
template="categorypage.html"
[extra]
tables=[{name="Diskussionsentwurf", stations=["preparl-regent"]}, {name="Eckpunktepapier", stations=["preparl-eckpup"]}]
laws=['gesetz-a', 'gesetz-b']
+++
"#
    );
}

#[test]
fn beratung_page() {
    assert_eq!(
        render_beratung(&laws()),
        r#"+++
title="In Beratung"
template="categorypage.html"
[extra]
tables=[{name="Initiative", stations=["parl-initiativ"]},{name="Ausschussberatung", stations=["parl-ausschber", "parl-vollvlsgn"]}]
laws=['gesetz-a', 'gesetz-b']
+++
"#
    );
}

#[test]
fn nachbereitung_page() {
    assert_eq!(
        render_nachbereitung(&[]),
        r#"+++
title="In Nachbereitung"
template="categorypage.html"
[extra]
tables=[{name="Abgelehnt/Zurückgezogen", stations=["parl-ablehnung", "parl-zurueckgz"]},{name="Angenommen", stations=["parl-akzeptanz"]},{name="Veröffentlicht", stations=["postparl-vesja", "postparl-vesne", "postparl-gsblt", "postparl-kraft"]}]
laws=[]
+++
"#
    );
}

#[test]
fn category_pages_are_byte_identical_across_calls() {
    for k in Kategorie::ALL {
        assert_eq!(render_category_page(k, &laws()), render_category_page(k, &laws()));
    }
}

#[test]
fn category_template_comes_from_config() {
    let renderer = PageRenderer::new(RenderConfig {
        category_template: "liste.html".to_string(),
        ..RenderConfig::default()
    });

    let page = renderer.category_page(Kategorie::Beratung, &laws());
    assert!(page.contains("template=\"liste.html\"\n"));
}

#[test]
fn laws_are_assigned_by_latest_station() {
    use crate::kategorie;
    use crate::tests::utils::{at, station, vorgang};

    let beratung = vorgang(vec![
        station("preparl-regent", at(2024, 1, 1)),
        station("parl-ausschber", at(2024, 3, 1)),
    ]);
    let nachbereitung = vorgang(vec![station("parl-ablehnung", at(2024, 3, 1))]);
    let unbekannt = vorgang(vec![station("sonstig", at(2024, 3, 1))]);

    assert_eq!(kategorie(&beratung).unwrap(), Some(Kategorie::Beratung));
    assert_eq!(kategorie(&nachbereitung).unwrap(), Some(Kategorie::Nachbereitung));
    assert_eq!(kategorie(&unbekannt).unwrap(), None);
    assert!(kategorie(&vorgang(Vec::new())).is_err());
}
