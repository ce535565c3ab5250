//! The flight loop: ship drift, steering and the end-of-game rule
//!
//! All game state lives in [`FlightState`]. The driver calls
//! [`FlightState::step`] once per frame and renders afterwards; the state
//! itself never schedules anything.
//!
//! Per frame, while flying:
//! 1. the ship drifts one `forward_step` along the forward axis (-Z);
//! 2. every obstacle is checked (linear scan); closer than
//!    `obstacle_threshold` ends the game as lost;
//! 3. only if not lost, closer than `goal_threshold` to the goal ends it as won.
//!
//! Collision is checked first, so a frame satisfying both conditions is a
//! loss. Once over, the state never changes again.

use scene_engine::foundation::math::Vec3;
use scene_engine::input::Direction;
use scene_engine::physics::BoundingSphere;

/// Status text after hitting an asteroid
pub const LOST_MESSAGE: &str = "Game Over! You crashed into an asteroid.";

/// Status text after reaching the planet
pub const WON_MESSAGE: &str = "You Win! You reached the planet.";

/// Axis the ship drifts along every frame
pub fn forward_axis() -> Vec3 {
    -Vec3::z()
}

/// How a game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Hit an asteroid
    Lost,
    /// Reached the planet
    Won,
}

impl Outcome {
    /// End-of-game status text
    pub fn message(self) -> &'static str {
        match self {
            Outcome::Lost => LOST_MESSAGE,
            Outcome::Won => WON_MESSAGE,
        }
    }
}

/// Where the game is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Still flying
    Flying,
    /// Terminal; permanent until the process restarts
    Over(Outcome),
}

/// Result of one call to [`FlightState::step`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Still flying; schedule another frame
    Continue,
    /// This frame ended the game
    Ended(Outcome),
    /// The game was already over; nothing happened
    Halted,
}

/// Fixed movement and collision constants
#[derive(Debug, Clone, PartialEq)]
pub struct FlightRules {
    /// Forward drift per frame
    pub forward_step: f32,
    /// Sideways/vertical move per command
    pub lateral_step: f32,
    /// Ship-to-asteroid distance below which the ship crashes
    pub obstacle_threshold: f32,
    /// Ship-to-planet distance below which the ship arrives
    pub goal_threshold: f32,
    /// Where the ship starts
    pub ship_start: Vec3,
    /// Where the planet sits
    pub goal_position: Vec3,
}

impl Default for FlightRules {
    fn default() -> Self {
        Self {
            forward_step: 0.1,
            lateral_step: 0.5,
            obstacle_threshold: 1.0,
            goal_threshold: 3.0,
            ship_start: Vec3::zeros(),
            goal_position: Vec3::new(0.0, 0.0, -50.0),
        }
    }
}

/// The player's ship
#[derive(Debug, Clone, PartialEq)]
pub struct Ship {
    /// World position
    pub position: Vec3,
}

/// A static asteroid
#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    /// World position
    pub position: Vec3,
    /// Visual scale only; collisions use the fixed threshold
    pub scale: f32,
}

impl Obstacle {
    /// Asteroid at `position` with unit visual scale
    pub fn at(position: Vec3) -> Self {
        Self { position, scale: 1.0 }
    }
}

/// The planet
#[derive(Debug, Clone, PartialEq)]
pub struct Goal {
    /// World position
    pub position: Vec3,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct FlightState {
    rules: FlightRules,
    ship: Ship,
    goal: Goal,
    obstacles: Vec<Obstacle>,
    phase: Phase,
    frame: u64,
}

impl FlightState {
    /// Start a game: ship at the start position, flying, frame 0
    pub fn new(rules: FlightRules, obstacles: Vec<Obstacle>) -> Self {
        Self {
            ship: Ship { position: rules.ship_start },
            goal: Goal { position: rules.goal_position },
            rules,
            obstacles,
            phase: Phase::Flying,
            frame: 0,
        }
    }

    /// Advance one frame
    pub fn step(&mut self) -> StepOutcome {
        if self.is_terminal() {
            return StepOutcome::Halted;
        }

        self.frame += 1;
        self.ship.position += forward_axis() * self.rules.forward_step;

        let ship = &self.ship.position;
        let crashed = self
            .obstacles
            .iter()
            .any(|obstacle| BoundingSphere::new(obstacle.position, self.rules.obstacle_threshold).contains_point(ship));

        let outcome = if crashed {
            Outcome::Lost
        } else if BoundingSphere::new(self.goal.position, self.rules.goal_threshold).contains_point(ship) {
            Outcome::Won
        } else {
            log::trace!("Frame {}: ship at {:?}", self.frame, self.ship.position);
            return StepOutcome::Continue;
        };

        self.phase = Phase::Over(outcome);
        log::info!(
            "Flight ended on frame {} at {:?}: {:?}",
            self.frame,
            self.ship.position,
            outcome
        );
        StepOutcome::Ended(outcome)
    }

    /// Move the ship one lateral step; returns whether it moved
    ///
    /// Movement is unbounded: the ship may leave the visible area.
    pub fn steer(&mut self, direction: Direction) -> bool {
        if self.is_terminal() {
            log::debug!("Ignoring {:?} after the game ended", direction);
            return false;
        }
        let (dx, dy) = direction.offset();
        self.ship.position.x += dx * self.rules.lateral_step;
        self.ship.position.y += dy * self.rules.lateral_step;
        true
    }

    /// Current phase
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// How the game ended, if it has
    pub fn outcome(&self) -> Option<Outcome> {
        match self.phase {
            Phase::Over(outcome) => Some(outcome),
            Phase::Flying => None,
        }
    }

    /// Whether the game is over
    pub fn is_terminal(&self) -> bool {
        matches!(self.phase, Phase::Over(_))
    }

    /// Empty while flying, one of the two end messages afterwards
    pub fn status_message(&self) -> &'static str {
        self.outcome().map_or("", Outcome::message)
    }

    /// The ship
    pub fn ship(&self) -> &Ship {
        &self.ship
    }

    /// The planet
    pub fn goal(&self) -> &Goal {
        &self.goal
    }

    /// The asteroids
    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    /// The rules this game runs with
    pub fn rules(&self) -> &FlightRules {
        &self.rules
    }

    /// Frames stepped while flying
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Remaining distance to the planet
    pub fn distance_to_goal(&self) -> f32 {
        (self.goal.position - self.ship.position).norm()
    }
}
