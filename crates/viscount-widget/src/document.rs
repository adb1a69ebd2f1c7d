//! Display surface the widget writes into.
//!
//! Elements are looked up by id at call time, never cached, so a page that
//! gains or loses the element between runs is handled per run.

use dashmap::DashMap;

pub trait Document: Send + Sync {
    fn has_element(&self, id: &str) -> bool;

    /// Replace the element's text. Returns false if the element is absent.
    fn set_text_content(&self, id: &str, text: &str) -> bool;
}

/// In-memory page: element id -> text content.
#[derive(Debug, Default)]
pub struct Page {
    elements: DashMap<String, String>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_element(id: impl Into<String>, text: impl Into<String>) -> Self {
        let page = Self::new();
        page.insert_element(id, text);
        page
    }

    pub fn insert_element(&self, id: impl Into<String>, text: impl Into<String>) {
        self.elements.insert(id.into(), text.into());
    }

    pub fn remove_element(&self, id: &str) -> Option<String> {
        self.elements.remove(id).map(|(_, text)| text)
    }

    pub fn text_content(&self, id: &str) -> Option<String> {
        self.elements.get(id).map(|e| e.value().clone())
    }
}

impl Document for Page {
    fn has_element(&self, id: &str) -> bool {
        self.elements.contains_key(id)
    }

    fn set_text_content(&self, id: &str, text: &str) -> bool {
        match self.elements.get_mut(id) {
            Some(mut e) => {
                *e.value_mut() = text.to_string();
                true
            }
            None => false,
        }
    }
}
