use ggez::GameResult;
use ggez::glam::Vec2;
use ggez::graphics::{Color, DrawMode, DrawParam, MeshBuilder, Rect, Text};
use crate::layers::{DrawData, Layer, PageView};
use crate::sections::SectionNav;

const TOP: f32 = 48.0;
const TAB_HEIGHT: f32 = 44.0;
const LABEL_SIZE: f32 = 18.0;
const LABEL_PADDING: f32 = 16.0;
const PANEL_COLOR: Color = Color::new(0.0, 0.0, 0.0, 0.35);
const ACTIVE_COLOR: Color = Color::new(1.0, 1.0, 1.0, 0.2);
const MARKER_WIDTH: f32 = 4.0;

/// Sidebar navigation with the active tab highlighted.
pub struct SectionSidebar {
    width: f32,
}

impl SectionSidebar {
    pub fn new(width: f32) -> SectionSidebar {
        SectionSidebar { width }
    }

    fn tab_rect(&self, index: usize) -> Rect {
        Rect::new(0.0, TOP + (index as f32) * TAB_HEIGHT, self.width, TAB_HEIGHT)
    }
}

impl Layer for SectionSidebar {
    fn compute_drawables(&self, view: &PageView, size: Vec2) -> GameResult<Vec<DrawData>> {
        let mut panel = MeshBuilder::new();
        panel.rectangle(DrawMode::fill(), Rect::new(0.0, 0.0, self.width, size.y), PANEL_COLOR)?;

        if let Some(active) = view.active {
            let tab = self.tab_rect(active);
            panel.rectangle(DrawMode::fill(), tab, ACTIVE_COLOR)?;
            panel.rectangle(DrawMode::fill(), Rect::new(0.0, tab.y, MARKER_WIDTH, tab.h), view.colors[2].into())?;
        }

        let mut drawables = vec![DrawData::Meshes(panel, DrawParam::default())];
        for (index, section) in view.nav.sections().iter().enumerate() {
            let tab = self.tab_rect(index);
            let mut label = Text::new(section.title.as_str());
            label.set_scale(LABEL_SIZE);
            let alpha = if view.active == Some(index) { 1.0 } else { 0.6 };
            let dest = Vec2::new(LABEL_PADDING, tab.y + (TAB_HEIGHT - LABEL_SIZE) / 2.0);
            drawables.push(DrawData::Label(
                label,
                DrawParam::new().dest(dest).color(Color::new(1.0, 1.0, 1.0, alpha)),
            ));
        }

        Ok(drawables)
    }

    fn section_at(&self, nav: &SectionNav, x: f32, y: f32) -> Option<usize> {
        (0..nav.len()).find(|&index| self.tab_rect(index).contains(Vec2::new(x, y)))
    }

    fn name(&self) -> &str {
        "sidebar"
    }
}
