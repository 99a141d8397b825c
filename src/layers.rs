use ggez::GameResult;
use ggez::glam::Vec2;
use ggez::graphics::{Color, DrawMode, DrawParam, MeshBuilder, Rect, Text};
use crate::color::Rgb;
use crate::scroll_tracker::ScrollState;
use crate::sections::SectionNav;

const PROGRESS_HEIGHT: f32 = 4.0;
const READOUT_MARGIN: f32 = 16.0;
const READOUT_SIZE: f32 = 16.0;

/// Everything a layer needs to paint one frame.
pub struct PageView<'a> {
    pub state: ScrollState,
    pub offset: f64,
    pub colors: [Rgb; 3],
    pub nav: &'a SectionNav,
    pub active: Option<usize>,
}

pub trait Layer {
    fn compute_drawables(&self, view: &PageView, size: Vec2) -> GameResult<Vec<DrawData>>;

    /// Section whose tab is under the pointer, if this layer has tabs.
    fn section_at(&self, _nav: &SectionNav, _x: f32, _y: f32) -> Option<usize> {
        None
    }

    fn name(&self) -> &str;
}

pub enum DrawData {
    Meshes(MeshBuilder, DrawParam),
    Label(Text, DrawParam),
}

pub struct ProgressBar;

impl Layer for ProgressBar {
    fn compute_drawables(&self, view: &PageView, size: Vec2) -> GameResult<Vec<DrawData>> {
        let width = size.x * view.state.progress as f32;
        if width <= 0.0 {
            return Ok(Vec::new());
        }
        let mut builder = MeshBuilder::new();
        builder.rectangle(DrawMode::fill(), Rect::new(0.0, 0.0, width, PROGRESS_HEIGHT), view.colors[2].into())?;
        Ok(vec![DrawData::Meshes(builder, DrawParam::default())])
    }

    fn name(&self) -> &str {
        "progress"
    }
}

pub struct ScrollReadout;

impl ScrollReadout {
    pub fn describe(state: &ScrollState) -> String {
        format!(
            "{:>3.0}%  {:+.2} px/ms  {}",
            state.progress * 100.0, state.velocity, state.direction
        )
    }
}

impl Layer for ScrollReadout {
    fn compute_drawables(&self, view: &PageView, size: Vec2) -> GameResult<Vec<DrawData>> {
        let mut text = Text::new(ScrollReadout::describe(&view.state));
        text.set_scale(READOUT_SIZE);
        let dest = Vec2::new(size.x - 260.0, size.y - READOUT_MARGIN - READOUT_SIZE);
        Ok(vec![DrawData::Label(text, DrawParam::new().dest(dest).color(Color::WHITE))])
    }

    fn name(&self) -> &str {
        "readout"
    }
}
