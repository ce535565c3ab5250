//! Spinning sphere demo

use scene_engine::events::ConsoleEvents;
use scene_engine::foundation::logging;
use scene_engine::render::ConsoleRenderer;
use scene_engine::Engine;
use sphere_demos::{DemoConfig, SpinningSphereApp};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init("info");

    log::info!("Starting spinning sphere demo");
    let mut config = DemoConfig::load()?;
    config.engine.window.title = "Spinning Sphere".to_string();

    let mut app = SpinningSphereApp::new(config.spinning);
    let report = Engine::run(config.engine, &mut app, &mut ConsoleEvents::spawn(), &mut ConsoleRenderer::stdout())?;
    log::info!("Stopped after {} frames ({:?})", report.frames, report.stop_reason);
    Ok(())
}
