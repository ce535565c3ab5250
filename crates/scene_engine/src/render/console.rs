//! Headless renderer that reports frames instead of rasterizing them
//!
//! Every visible mesh is culled against the camera frustum and counted. The
//! status text region is written to the output whenever its content changes,
//! so an empty status during play prints nothing.

use std::io::Write;

use super::{Camera, FrameStats, Hud, RenderError, Renderer, Surface};
use crate::scene::{NodeKind, Scene};

/// Frames between debug-level summaries
const SUMMARY_INTERVAL: u64 = 120;

/// Renderer writing the status region to a text sink
pub struct ConsoleRenderer<W: Write> {
    out: W,
    surface: Surface,
    frames: u64,
    last_status: String,
    last_buttons: Vec<&'static str>,
}

impl ConsoleRenderer<std::io::Stdout> {
    /// Renderer printing to standard output
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> ConsoleRenderer<W> {
    /// Create a renderer writing to `out`
    pub fn new(out: W) -> Self {
        Self {
            out,
            surface: Surface::new(1, 1),
            frames: 0,
            last_status: String::new(),
            last_buttons: Vec::new(),
        }
    }

    /// Frames rendered so far
    pub fn frames_rendered(&self) -> u64 {
        self.frames
    }

    /// Current surface
    pub fn surface(&self) -> Surface {
        self.surface
    }

    /// Recover the output sink
    pub fn into_output(self) -> W {
        self.out
    }

    fn write_overlay(&mut self, hud: &Hud) -> Result<(), RenderError> {
        if hud.buttons != self.last_buttons {
            if !hud.buttons.is_empty() {
                writeln!(self.out, "[controls] {}", hud.buttons.join(" "))?;
            }
            self.last_buttons = hud.buttons.clone();
        }
        if hud.status != self.last_status {
            if !hud.status.is_empty() {
                writeln!(self.out, "{}", hud.status)?;
            }
            self.last_status.clone_from(&hud.status);
        }
        self.out.flush()?;
        Ok(())
    }
}

impl<W: Write> Renderer for ConsoleRenderer<W> {
    fn resize(&mut self, surface: Surface) {
        log::debug!("Surface resized to {}x{}", surface.width, surface.height);
        self.surface = surface;
    }

    fn render(&mut self, scene: &Scene, camera: &Camera, hud: &Hud) -> Result<FrameStats, RenderError> {
        if camera.is_degenerate() {
            return Err(RenderError::InvalidCamera(format!(
                "position {:?}, target {:?}, near {}, far {}",
                camera.position, camera.target, camera.near, camera.far
            )));
        }

        let frustum = camera.frustum();
        let mut stats = FrameStats {
            frame: self.frames,
            lights: scene.lights().count(),
            ..FrameStats::default()
        };

        for (_, node) in scene.meshes() {
            stats.meshes += 1;
            let (Some(bounds), NodeKind::Mesh { geometry, .. }) = (node.world_bounds(), &node.kind) else {
                continue;
            };
            if frustum.intersects_sphere(&bounds.center, bounds.radius) {
                stats.drawn += 1;
                stats.triangles += u64::from(geometry.triangle_count());
            } else {
                log::trace!("Culled '{}'", node.name);
            }
        }

        self.write_overlay(hud)?;

        if self.frames % SUMMARY_INTERVAL == 0 {
            log::debug!(
                "Frame {}: {}/{} meshes drawn, {} triangles, {} lights, {}x{}",
                stats.frame,
                stats.drawn,
                stats.meshes,
                stats.triangles,
                stats.lights,
                self.surface.width,
                self.surface.height
            );
        }
        self.frames += 1;
        Ok(stats)
    }
}
