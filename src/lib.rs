pub mod background;
pub mod color;
pub mod config;
pub mod gradient;
pub mod layers;
pub mod page;
pub mod page_app;
pub mod scroll_events;
pub mod scroll_tracker;
pub mod sections;
pub mod sidebar;

use ggez::{conf, event, ContextBuilder, GameError, GameResult};
use crate::config::PageConfig;
use crate::page_app::PageApp;

pub use crate::color::{interpolate, Rgb};
pub use crate::scroll_tracker::{Direction, ScrollState, ScrollTracker, ViewportMetrics};

pub fn run(config: PageConfig) -> GameResult {
    let app = PageApp::new(&config).map_err(|e| GameError::ConfigError(e.to_string()))?;

    let (ctx, event_loop) = ContextBuilder::new("brandscroll", "brandscroll")
        .window_setup(conf::WindowSetup::default().title(&config.window.title))
        .window_mode(
            conf::WindowMode::default()
                .dimensions(config.window.width, config.window.height)
                .resizable(true),
        )
        .build()?;

    log::info!(
        "opening {}x{} window over a {}px document",
        config.window.width, config.window.height, config.page.document_height
    );
    event::run(ctx, event_loop, app)
}
