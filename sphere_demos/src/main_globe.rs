//! Globe viewer
//!
//! Console commands: `left`/`right`/`up`/`down` orbit, `+`/`-` zoom,
//! `drag <dx> <dy>` orbits by pixels, `space` toggles auto-rotation.

use scene_engine::events::ConsoleEvents;
use scene_engine::foundation::logging;
use scene_engine::render::ConsoleRenderer;
use scene_engine::Engine;
use sphere_demos::{DemoConfig, GlobeApp};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init("info");

    log::info!("Starting globe viewer");
    let mut config = DemoConfig::load()?;
    config.engine.window.title = "Globe Viewer".to_string();

    let mut app = GlobeApp::new(config.globe);
    let mut events = ConsoleEvents::spawn();
    let mut renderer = ConsoleRenderer::stdout();
    let report = Engine::run(config.engine, &mut app, &mut events, &mut renderer)?;
    log::info!("Stopped after {} frames ({:?})", report.frames, report.stop_reason);
    Ok(())
}
