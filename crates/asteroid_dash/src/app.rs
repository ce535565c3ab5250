//! Frame-loop wiring for the game

use scene_engine::assets::TextureCache;
use scene_engine::input::{Direction, KeyCode, TouchControls};
use scene_engine::{AppError, AppEvent, Application, Engine, FrameControl, FrameTick};

use crate::config::GameConfig;
use crate::field;
use crate::flight::{FlightState, Obstacle, StepOutcome};
use crate::scene::{chase_camera, FlightScene};

/// The game as an engine [`Application`]
///
/// Direction commands are applied to the flight state as soon as they are
/// drained, so they take effect on the next step. `update` advances exactly
/// one step per frame and halts the engine on the transition frame.
pub struct DashApp {
    config: GameConfig,
    state: FlightState,
    touch: TouchControls,
    textures: TextureCache,
    flight_scene: Option<FlightScene>,
}

impl DashApp {
    /// Create a game with a freshly generated asteroid field
    pub fn new(config: GameConfig) -> Self {
        let obstacles = field::generate(&config.field);
        Self::with_obstacles(config, obstacles)
    }

    /// Create a game over a given set of obstacles
    pub fn with_obstacles(config: GameConfig, obstacles: Vec<Obstacle>) -> Self {
        let state = FlightState::new(config.rules(), obstacles);
        let touch = TouchControls::new(config.controls.touch_supported);
        Self {
            config,
            state,
            touch,
            textures: TextureCache::new(),
            flight_scene: None,
        }
    }

    /// Current game state
    pub fn state(&self) -> &FlightState {
        &self.state
    }

    fn steer(&mut self, direction: Direction) {
        if self.state.steer(direction) {
            log::debug!("Steered {} to {:?}", direction.name(), self.state.ship().position);
        }
    }
}

impl Application for DashApp {
    fn initialize(&mut self, engine: &mut Engine) -> Result<(), AppError> {
        log::info!(
            "Asteroid Dash: {} asteroids, planet {:.1} units ahead",
            self.state.obstacles().len(),
            self.state.distance_to_goal()
        );

        engine.camera = chase_camera(&self.config, engine.surface().aspect(), &self.state);
        engine.hud.buttons = self.touch.buttons().iter().map(|d| d.name()).collect();
        engine.hud.set_status(self.state.status_message());

        let flight_scene = FlightScene::build(&mut engine.scene, &self.state, &self.config, &mut self.textures);
        flight_scene.sync(&mut engine.scene, &mut engine.camera, &self.state);
        self.flight_scene = Some(flight_scene);
        Ok(())
    }

    fn update(&mut self, engine: &mut Engine, _frame: FrameTick) -> Result<FrameControl, AppError> {
        let outcome = self.state.step();

        if let Some(flight_scene) = &self.flight_scene {
            flight_scene.sync(&mut engine.scene, &mut engine.camera, &self.state);
        }
        engine.hud.set_status(self.state.status_message());

        Ok(match outcome {
            StepOutcome::Continue => FrameControl::Continue,
            StepOutcome::Ended(_) | StepOutcome::Halted => FrameControl::Halt,
        })
    }

    fn handle_event(&mut self, engine: &mut Engine, event: AppEvent) -> Result<(), AppError> {
        match event {
            AppEvent::KeyInput { key, pressed } => {
                if !engine.input.handle_key_input(key, pressed) {
                    return Ok(());
                }
                if key == KeyCode::Escape {
                    engine.quit();
                } else if let Some(direction) = Direction::from_key(key) {
                    self.steer(direction);
                }
            }
            AppEvent::TouchTap(button) => match self.touch.tap(button) {
                Some(direction) => self.steer(direction),
                None => log::debug!("Ignoring tap on hidden button {}", button.name()),
            },
            other => engine.handle_event(other),
        }
        Ok(())
    }

    fn cleanup(&mut self, _engine: &mut Engine) {
        match self.state.outcome() {
            Some(outcome) => log::info!("Game over after {} frames: {:?}", self.state.frame(), outcome),
            None => log::info!("Left the game after {} frames", self.state.frame()),
        }
    }
}
