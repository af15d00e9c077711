// src/domain/labels.rs

/// Display label for a station code, if the code is known.
pub fn station_label(code: &str) -> Option<&'static str> {
    let label = match code {
        "preparl-regent" => "Referentenentwurf",
        "preparl-eckpup" => "Eckpunktepapier",
        "preparl-regbsl" => "Kabinettsbeschluss",
        "preparl-vbegde" => "Volksbegehren/Diskussionsentwurf",
        "parl-initiativ" => "Parlamentarische Initiative",
        "parl-ausschber" => "Ausschussberatung",
        "parl-vollvlsgn" => "Lesung",
        "parl-akzeptanz" => "Akzeptiert",
        "parl-ablehnung" => "Abgelehnt",
        "parl-ggentwurf" => "Gegenentwurf des Parlaments",
        "postparl-vesja" => "Volksentscheid (Ja)",
        "postparl-vesne" => "Volksentscheid (Nein)",
        "postparl-gsblt" => "Veröffentlicht",
        "postparl-kraft" => "In Kraft",
        "sonstig" => "Sonstiges",
        _ => return None,
    };
    Some(label)
}

/// Station label falling back to the raw code.
///
/// This is the general lookup for callers showing a station code; only
/// timeline headings use the "Unbekannte Station" fallback instead.
pub fn station_label_or_code(code: &str) -> &str {
    station_label(code).unwrap_or(code)
}

/// Station label used for timeline headings.
pub fn station_heading(code: &str) -> &'static str {
    station_label(code).unwrap_or("Unbekannte Station")
}

pub fn gesetzestyp_label(code: &str) -> Option<&'static str> {
    let label = match code {
        "gg-einspruch" => "Einspruchsgesetz",
        "gg-zustimmung" => "Zustimmungsgesetz",
        "gg-land-parl" => "Parlamentsgesetz",
        "gg-land-volk" => "Volksgesetzgebung",
        "sonstig" => "Sonstiges",
        _ => return None,
    };
    Some(label)
}

/// Law-type label falling back to the raw code.
pub fn gesetzestyp_label_or_code(code: &str) -> &str {
    gesetzestyp_label(code).unwrap_or(code)
}

pub fn dokument_typ_label(code: &str) -> Option<&'static str> {
    let label = match code {
        "preparl-entwurf" => "Vorparlamentarischer Entwurf",
        "entwurf" => "Gesetzesentwurf",
        "beschlussempf" => "Beschlussempfehlung",
        "stellungnahme" => "Stellungnahme",
        "plenar-protokoll" => "Plenarprotokoll",
        "plenar-tops" => "Plenarsitzung TOPs",
        "as-tops" => "Ausschusssitzung TOPs",
        "as-tops-aend" => "Ausschusssitzung TOPs (Änderung)",
        "as-tops-ergz" => "Ausschusssitzung TOPs (Ergänzung)",
        "sonstig" => "Sonstiges",
        _ => return None,
    };
    Some(label)
}

/// Unknown document kinds always read "Sonstiges", never the raw code.
pub fn dokument_typ_label_or_sonstiges(code: &str) -> &'static str {
    dokument_typ_label(code).unwrap_or("Sonstiges")
}
