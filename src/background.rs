use ggez::GameResult;
use ggez::glam::Vec2;
use ggez::graphics::{Color, DrawMode, DrawParam, MeshBuilder, Rect, Text};
use crate::gradient::color_at;
use crate::layers::{DrawData, Layer, PageView};

const BANDS: usize = 96;
const HEADING_SIZE: f32 = 40.0;
const RULE_WIDTH: f32 = 2.0;
const RULE_COLOR: Color = Color::new(1.0, 1.0, 1.0, 0.35);

/// Full-window background painted as horizontal bands of the scroll gradient.
pub struct GradientBackground {
    bands: usize,
}

impl GradientBackground {
    pub fn new() -> GradientBackground {
        GradientBackground { bands: BANDS }
    }
}

impl Layer for GradientBackground {
    fn compute_drawables(&self, view: &PageView, size: Vec2) -> GameResult<Vec<DrawData>> {
        let mut builder = MeshBuilder::new();
        let band_height = size.y / (self.bands as f32);

        for i in 0..self.bands {
            let t = (i as f32 + 0.5) / (self.bands as f32);
            let color = color_at(&view.colors, t);
            // Overlap by a pixel so rounding never leaves seams
            let rect = Rect::new(0.0, (i as f32) * band_height, size.x, band_height + 1.0);
            builder.rectangle(DrawMode::fill(), rect, color.into())?;
        }

        Ok(vec![DrawData::Meshes(builder, DrawParam::default())])
    }

    fn name(&self) -> &str {
        "background"
    }
}

/// Section headings, placed at their document position minus the scroll offset.
pub struct SectionContent {
    left: f32,
}

impl SectionContent {
    pub fn new(left: f32) -> SectionContent {
        SectionContent { left }
    }
}

impl Layer for SectionContent {
    fn compute_drawables(&self, view: &PageView, size: Vec2) -> GameResult<Vec<DrawData>> {
        let mut drawables = Vec::new();
        let mut rules = MeshBuilder::new();
        let mut has_rules = false;

        for section in view.nav.sections() {
            let y = (section.top - view.offset) as f32;
            if y + HEADING_SIZE < 0.0 || y > size.y {
                continue;
            }
            let heading_y = y + HEADING_SIZE;
            let mut heading = Text::new(section.title.as_str());
            heading.set_scale(HEADING_SIZE);
            drawables.push(DrawData::Label(
                heading,
                DrawParam::new().dest(Vec2::new(self.left, heading_y)).color(Color::WHITE),
            ));

            let rule_y = heading_y + HEADING_SIZE * 1.5;
            rules.line(&[Vec2::new(self.left, rule_y), Vec2::new(size.x - self.left / 2.0, rule_y)], RULE_WIDTH, RULE_COLOR)?;
            has_rules = true;
        }

        if has_rules {
            drawables.insert(0, DrawData::Meshes(rules, DrawParam::default()));
        }
        Ok(drawables)
    }

    fn name(&self) -> &str {
        "content"
    }
}
