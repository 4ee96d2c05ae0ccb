use web_sys::Document;

use crate::simulation::{Statistics, StatsSink};

pub const TITLE_ID: &str = "title-text";
pub const GRAVITY_TOGGLE_ID: &str = "gravity-toggle";
pub const AUTOSPAWN_TOGGLE_ID: &str = "autospawn-toggle";
pub const AUTOCLEAR_TOGGLE_ID: &str = "autoclear-toggle";

/// Write text into an element by id. Missing elements are skipped;
/// the page may omit any counter it does not show.
pub fn set_text(document: &Document, id: &str, text: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        el.set_inner_html(text);
    }
}

/// Publishes statistics into the page's counter elements
pub struct DomStatsSink {
    document: Document,
}

impl DomStatsSink {
    pub fn new(document: Document) -> Self {
        Self { document }
    }
}

impl StatsSink for DomStatsSink {
    fn publish(&mut self, stats: &Statistics) {
        let fields = [
            ("total-spawns", stats.total_spawned()),
            ("max-balls", stats.max_bodies()),
            ("current-balls", stats.current_count()),
            ("active-balls", stats.active_count()),
            ("inert-balls", stats.inert_count()),
            ("removed-balls", stats.removed_count()),
        ];
        for (id, value) in fields {
            set_text(&self.document, id, &value.to_string());
        }
    }
}
