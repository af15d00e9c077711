// src/config.rs

use std::fmt::Write;

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Utc};

use crate::errors::{RenderError, RenderResult};

#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Template the static site generator uses for a single law page.
    pub page_template: String,
    /// Template for the three category index pages.
    pub category_template: String,
    /// Written to `zusammenfassung` when no summary could be selected.
    pub summary_fallback: String,
    /// More distinct initiators than this appends ", ..." after the
    /// joined list. The list itself is never cut.
    pub initiator_ellipsis_after: usize,
    /// chrono format string for every rendered date.
    pub date_format: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            page_template: "gesetzpage.html".to_string(),
            category_template: "categorypage.html".to_string(),
            summary_fallback: "Keine Zusammenfassung verfügbar.".to_string(),
            initiator_ellipsis_after: 5,
            date_format: "%Y-%m-%d".to_string(),
        }
    }
}

impl RenderConfig {
    /// Formats `dt` with `date_format`. An unknown specifier is an error
    /// instead of a panic inside `Display`.
    pub fn format_date(&self, dt: &DateTime<Utc>) -> RenderResult<String> {
        let invalid = || RenderError::DateFormat(self.date_format.clone());

        let items = StrftimeItems::new(&self.date_format);
        if items.clone().any(|item| matches!(item, Item::Error)) {
            return Err(invalid());
        }

        let mut out = String::new();
        write!(out, "{}", dt.format_with_items(items)).map_err(|_| invalid())?;
        Ok(out)
    }
}
