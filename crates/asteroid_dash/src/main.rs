//! Asteroid Dash
//!
//! Type `up`, `down`, `left` or `right` (or `w`/`a`/`s`/`d`) and press enter
//! to steer; `quit` or end-of-input leaves.

use asteroid_dash::{DashApp, GameConfig};
use scene_engine::events::ConsoleEvents;
use scene_engine::foundation::logging;
use scene_engine::render::ConsoleRenderer;
use scene_engine::Engine;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init("info");

    log::info!("Starting Asteroid Dash");
    let config = GameConfig::load()?;

    let mut app = DashApp::new(config.clone());
    let mut events = ConsoleEvents::spawn();
    let mut renderer = ConsoleRenderer::stdout();

    let report = Engine::run(config.engine, &mut app, &mut events, &mut renderer)?;
    log::info!("Stopped after {} frames ({:?})", report.frames, report.stop_reason);
    Ok(())
}
