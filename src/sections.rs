use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    pub title: String,
    /// Offset of the section top from the document top, in pixels.
    pub top: f64,
}

impl Section {
    pub fn new(id: &str, title: &str, top: f64) -> Section {
        Section { id: id.to_string(), title: title.to_string(), top }
    }
}

/// Sidebar tabs, highlighting the section under the top of the viewport.
#[derive(Debug, Clone)]
pub struct SectionNav {
    sections: Vec<Section>,
    offset: f64,
}

impl SectionNav {
    /// `offset` lets a section become active slightly before its top
    /// reaches the top of the viewport.
    pub fn new(mut sections: Vec<Section>, offset: f64) -> SectionNav {
        sections.sort_by(|a, b| a.top.total_cmp(&b.top));
        SectionNav { sections, offset }
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn active(&self, position: f64) -> Option<usize> {
        if self.sections.is_empty() {
            return None;
        }
        let reached = self.sections.iter().take_while(|s| s.top <= position + self.offset).count();
        Some(reached.saturating_sub(1))
    }

    pub fn scroll_target(&self, index: usize, max_scroll: f64) -> Option<f64> {
        self.sections
            .get(index)
            .map(|section| section.top.min(max_scroll).max(0.0))
    }
}
