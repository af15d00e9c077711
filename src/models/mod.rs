mod vorgang;

pub use vorgang::{Autor, Dokument, DokumentRef, Gremium, Initiator, Station, Vorgang};
