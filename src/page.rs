use crate::scroll_tracker::ViewportMetrics;

const SMOOTH_FACTOR: f64 = 0.2;
const SNAP_DISTANCE: f64 = 0.5;

/// The scrollable document shown by the viewer.
#[derive(Debug, Clone)]
pub struct Page {
    offset: f64,
    document_height: f64,
    viewport_height: f64,
    target: Option<f64>,
}

impl Page {
    pub fn new(document_height: f64, viewport_height: f64) -> Page {
        Page {
            offset: 0.0,
            document_height,
            viewport_height,
            target: None,
        }
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn max_scroll(&self) -> f64 {
        (self.document_height - self.viewport_height).max(0.0)
    }

    pub fn is_animating(&self) -> bool {
        self.target.is_some()
    }

    /// Immediate scroll, returns `true` when the offset changed.
    pub fn scroll_by(&mut self, delta: f64) -> bool {
        self.target = None;
        self.set_offset(self.offset + delta)
    }

    pub fn scroll_to_edge(&mut self, bottom: bool) -> bool {
        self.target = None;
        let edge = if bottom { self.max_scroll() } else { 0.0 };
        self.set_offset(edge)
    }

    pub fn scroll_to(&mut self, target: f64) {
        let target = target.clamp(0.0, self.max_scroll());
        log::debug!("smooth scroll from {:.0} to {:.0}", self.offset, target);
        self.target = Some(target);
    }

    /// Advances a smooth scroll by one frame.
    pub fn step(&mut self) -> bool {
        let Some(target) = self.target else {
            return false;
        };
        let mut next = self.offset + (target - self.offset) * SMOOTH_FACTOR;
        if (target - next).abs() < SNAP_DISTANCE {
            next = target;
            self.target = None;
        }
        self.set_offset(next)
    }

    pub fn resize(&mut self, viewport_height: f64) {
        self.viewport_height = viewport_height.max(0.0);
        let offset = self.offset;
        self.set_offset(offset);
        if let Some(target) = self.target {
            self.target = Some(target.min(self.max_scroll()));
        }
    }

    fn set_offset(&mut self, offset: f64) -> bool {
        let offset = offset.clamp(0.0, self.max_scroll());
        let moved = offset != self.offset;
        self.offset = offset;
        moved
    }
}

impl ViewportMetrics for Page {
    fn scroll_offset(&self) -> Option<f64> {
        Some(self.offset)
    }

    fn document_height(&self) -> f64 {
        self.document_height
    }

    fn viewport_height(&self) -> f64 {
        self.viewport_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn scroll_by_clamps_to_document() {
        let mut page = Page::new(3000.0, 1000.0);
        assert!(!page.scroll_by(-50.0));
        assert!(page.scroll_by(2500.0));
        assert_eq!(page.offset(), 2000.0);
        assert!(page.scroll_to_edge(false));
        assert_eq!(page.offset(), 0.0);
    }

    #[test]
    fn short_document_cannot_scroll() {
        let mut page = Page::new(500.0, 1000.0);
        assert_eq!(page.max_scroll(), 0.0);
        assert!(!page.scroll_by(300.0));
    }

    #[test]
    fn smooth_scroll_reaches_target() {
        let mut page = Page::new(3000.0, 1000.0);
        page.scroll_to(1000.0);
        assert!(page.step());
        assert_eq!(page.offset(), 200.0);

        let mut frames = 1;
        while page.is_animating() {
            page.step();
            frames += 1;
            assert!(frames < 100);
        }
        assert_eq!(page.offset(), 1000.0);
        assert!(!page.step());
    }

    #[test]
    fn manual_scroll_cancels_smooth_scroll() {
        let mut page = Page::new(3000.0, 1000.0);
        page.scroll_to(1500.0);
        page.scroll_by(10.0);
        assert!(!page.is_animating());
        assert_eq!(page.offset(), 10.0);
    }

    #[test]
    fn resize_keeps_offset_in_range() {
        let mut page = Page::new(3000.0, 1000.0);
        page.scroll_by(2000.0);
        page.resize(2500.0);
        assert_eq!(page.offset(), 500.0);
        assert_eq!(page.viewport_height(), 2500.0);
    }
}
