use std::cell::RefCell;
use std::rc::Rc;
use ggez::{Context, GameResult};
use ggez::event::{self, MouseButton};
use ggez::glam::Vec2;
use ggez::graphics::{Canvas, Color, Mesh};
use ggez::input::keyboard::{KeyCode, KeyInput};
use crate::config::{ConfigError, PageConfig};
use crate::background::{GradientBackground, SectionContent};
use crate::gradient::ScrollGradient;
use crate::layers::{DrawData, Layer, PageView, ProgressBar, ScrollReadout};
use crate::page::Page;
use crate::scroll_events::{ScrollEvents, Subscription};
use crate::scroll_tracker::{ScrollState, ScrollTracker, ViewportMetrics};
use crate::sections::SectionNav;
use crate::sidebar::SectionSidebar;

const SIDEBAR_WIDTH: f32 = 220.0;
const CONTENT_MARGIN: f32 = 48.0;
const PAGE_FRACTION: f64 = 0.9;

pub struct PageApp {
    page: Page,
    nav: SectionNav,
    gradient: ScrollGradient,
    wheel_step: f64,
    events: ScrollEvents,
    tracker: Rc<RefCell<ScrollTracker>>,
    subscription: Option<Subscription>,
    layers: Vec<Box<dyn Layer>>,
    active: Option<usize>,
}

impl PageApp {
    pub fn new(config: &PageConfig) -> Result<PageApp, ConfigError> {
        config.validate()?;
        let events = ScrollEvents::new();
        let tracker = Rc::new(RefCell::new(ScrollTracker::new()));
        let subscription = events.subscribe(&tracker);

        let app = PageApp {
            page: Page::new(config.page.document_height, config.window.height as f64),
            nav: config.nav(),
            gradient: config.gradient.build()?,
            wheel_step: config.page.wheel_step,
            events,
            tracker,
            subscription: Some(subscription),
            layers: vec![
                Box::new(GradientBackground::new()) as Box<dyn Layer>,
                Box::new(SectionContent::new(SIDEBAR_WIDTH + CONTENT_MARGIN)),
                Box::new(SectionSidebar::new(SIDEBAR_WIDTH)),
                Box::new(ProgressBar),
                Box::new(ScrollReadout),
            ],
            active: None,
        };
        let names: Vec<&str> = app.layers.iter().map(|layer| layer.name()).collect();
        log::debug!("page layers: {}", names.join(", "));
        Ok(app)
    }

    pub fn state(&self) -> ScrollState {
        self.tracker.borrow().state()
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn active_section(&self) -> Option<usize> {
        self.active
    }

    /// Scrolls immediately and raises a scroll notification when the page moved.
    pub fn scroll_by(&mut self, delta: f64) {
        if self.page.scroll_by(delta) {
            self.events.notify_scroll();
        }
    }

    pub fn go_to_section(&mut self, index: usize) {
        if let Some(target) = self.nav.scroll_target(index, self.page.max_scroll()) {
            self.page.scroll_to(target);
        }
    }

    /// One frame of work: advance smooth scrolling, run pending
    /// recomputations, follow the active tab.
    pub fn tick(&mut self, now_ms: f64) {
        if self.page.step() {
            self.events.notify_scroll();
        }
        self.events.frame(&self.page, now_ms);

        let active = self.nav.active(self.state().position);
        if active != self.active {
            if let Some(section) = active.and_then(|index| self.nav.sections().get(index)) {
                log::info!("active section: {}", section.id);
            }
            self.active = active;
        }
    }

    /// Releases the scroll listener, pending recomputations are dropped.
    pub fn teardown(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.detach();
        }
    }

    fn title(&self) -> String {
        let state = self.state();
        format!(
            "progress {:.0}% | velocity {:.2} px/ms | {}",
            state.progress * 100.0, state.velocity, state.direction
        )
    }
}

impl event::EventHandler<ggez::GameError> for PageApp {
    fn update(&mut self, ctx: &mut Context) -> GameResult {
        let now_ms = ctx.time.time_since_start().as_secs_f64() * 1000.0;
        self.tick(now_ms);
        Ok(ctx.gfx.window().set_title(&self.title()))
    }

    fn draw(&mut self, ctx: &mut Context) -> GameResult {
        let size = Vec2::new(ctx.gfx.frame().width() as f32, ctx.gfx.frame().height() as f32);
        let state = self.state();
        let view = PageView {
            state,
            offset: self.page.offset(),
            colors: self.gradient.colors_at(state.progress),
            nav: &self.nav,
            active: self.active,
        };

        let mut canvas = Canvas::from_frame(ctx, Color::BLACK);
        for layer in self.layers.iter() {
            for drawable in layer.compute_drawables(&view, size)? {
                match drawable {
                    DrawData::Meshes(builder, params) => canvas.draw(
                        &Mesh::from_data(ctx, builder.build()),
                        params
                    ),
                    DrawData::Label(text, params) => canvas.draw(&text, params),
                }
            }
        }
        canvas.finish(ctx)
    }

    fn mouse_button_down_event(
        &mut self,
        _ctx: &mut Context,
        button: MouseButton,
        x: f32,
        y: f32,
    ) -> GameResult {
        if button != MouseButton::Left {
            return Ok(());
        }
        let hit = self.layers.iter().find_map(|layer| layer.section_at(&self.nav, x, y));
        if let Some(index) = hit {
            self.go_to_section(index);
        }
        Ok(())
    }

    fn mouse_wheel_event(&mut self, _ctx: &mut Context, _wheel_x: f32, wheel_y: f32) -> GameResult {
        // wheel_y is positive when the wheel turns away from the user
        Ok(self.scroll_by(-(wheel_y as f64) * self.wheel_step))
    }

    fn key_down_event(&mut self, ctx: &mut Context, input: KeyInput, _repeated: bool) -> GameResult {
        let page = self.page.viewport_height() * PAGE_FRACTION;
        match input.keycode {
            Some(KeyCode::Down) => self.scroll_by(self.wheel_step),
            Some(KeyCode::Up) => self.scroll_by(-self.wheel_step),
            Some(KeyCode::PageDown) | Some(KeyCode::Space) => self.scroll_by(page),
            Some(KeyCode::PageUp) => self.scroll_by(-page),
            Some(KeyCode::Home) => {
                if self.page.scroll_to_edge(false) {
                    self.events.notify_scroll();
                }
            }
            Some(KeyCode::End) => {
                if self.page.scroll_to_edge(true) {
                    self.events.notify_scroll();
                }
            }
            Some(KeyCode::Escape) => ctx.request_quit(),
            Some(key) => {
                if let Some(index) = section_key(key) {
                    self.go_to_section(index);
                }
            }
            None => (),
        }
        Ok(())
    }

    fn resize_event(&mut self, _ctx: &mut Context, _width: f32, height: f32) -> GameResult {
        self.page.resize(height as f64);
        self.events.notify_scroll();
        Ok(())
    }

    fn quit_event(&mut self, _ctx: &mut Context) -> Result<bool, ggez::GameError> {
        log::info!("closing page view");
        self.teardown();
        Ok(false)
    }
}

fn section_key(key: KeyCode) -> Option<usize> {
    let index = match key {
        KeyCode::Key1 => 0,
        KeyCode::Key2 => 1,
        KeyCode::Key3 => 2,
        KeyCode::Key4 => 3,
        KeyCode::Key5 => 4,
        KeyCode::Key6 => 5,
        KeyCode::Key7 => 6,
        KeyCode::Key8 => 7,
        KeyCode::Key9 => 8,
        _ => return None,
    };
    Some(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use crate::scroll_tracker::Direction;

    fn app() -> PageApp {
        // 5400 document, 720 viewport, sections every 1080
        PageApp::new(&PageConfig::default()).unwrap()
    }

    #[test]
    fn wheel_scroll_is_sampled_on_next_frame() {
        let mut app = app();
        app.tick(0.0);
        app.scroll_by(120.0);
        app.scroll_by(120.0);
        assert_eq!(app.state().position, 0.0);

        app.tick(16.0);
        let state = app.state();
        assert_eq!(state.position, 240.0);
        assert_eq!(state.direction, Direction::Idle);

        app.scroll_by(-160.0);
        app.tick(32.0);
        let state = app.state();
        assert_eq!(state.position, 80.0);
        assert_eq!(state.velocity, -10.0);
        assert_eq!(state.direction, Direction::Up);
    }

    #[test]
    fn active_tab_follows_scroll() {
        let mut app = app();
        app.tick(0.0);
        assert_eq!(app.active_section(), Some(0));
        app.scroll_by(1000.0);
        app.tick(16.0);
        assert_eq!(app.active_section(), Some(1));
    }

    #[test]
    fn section_navigation_scrolls_smoothly() {
        let mut app = app();
        app.go_to_section(2);
        let mut now = 0.0;
        while app.page().is_animating() {
            now += 16.0;
            app.tick(now);
            assert!(now < 10_000.0);
        }
        assert_eq!(app.state().position, 2160.0);
        assert_eq!(app.active_section(), Some(2));
    }

    #[test]
    fn teardown_stops_updates() {
        let mut app = app();
        app.teardown();
        app.scroll_by(500.0);
        app.tick(16.0);
        assert_eq!(app.page().offset(), 500.0);
        assert_eq!(app.state().position, 0.0);
    }

    #[test]
    fn digit_keys_map_to_sections() {
        assert_eq!(section_key(KeyCode::Key1), Some(0));
        assert_eq!(section_key(KeyCode::Key9), Some(8));
        assert_eq!(section_key(KeyCode::A), None);
    }
}
