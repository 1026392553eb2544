//! Background animation lifecycle.

use std::time::Instant;

use glowfield_core::SurfaceSize;
use log::{debug, trace};
use rand::{Rng, rngs::ThreadRng};

use crate::particle::ParticleField;
use crate::render::SceneRenderer;
use crate::schedule::{CancelToken, FrameSchedule};
use crate::surface::Surface;

/// State that only exists between `start` and `stop`.
///
/// Holding a `Running` is what it means to listen for viewport resizes.
#[derive(Debug)]
struct Running {
    /// Particles currently on screen.
    field: ParticleField,
    /// Pending frame and its cancel token.
    schedule: FrameSchedule,
    /// Origin of the elapsed time fed to the renderer.
    started_at: Instant,
}

/// Owns the drawing surface, the particle field and the frame schedule.
///
/// A driver is `Idle` until [`start`](Self::start) succeeds and `Running`
/// until [`stop`](Self::stop). The host pumps [`tick`](Self::tick) once per
/// rendering opportunity and forwards viewport changes to
/// [`on_viewport_resize`](Self::on_viewport_resize).
#[derive(Debug)]
pub struct AnimationDriver<S: Surface, R: Rng = ThreadRng> {
    /// Surface handed over by the host on start.
    surface: Option<S>,
    /// `Some` while running.
    running: Option<Running>,
    /// Random source for particle generation.
    rng: R,
    renderer: SceneRenderer,
    /// Frames painted since construction.
    frames_rendered: u64,
}

impl<S: Surface> Default for AnimationDriver<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Surface> AnimationDriver<S> {
    /// Create an idle driver using the thread-local random source.
    pub fn new() -> Self {
        Self::with_rng(rand::rng())
    }
}

impl<S: Surface, R: Rng> AnimationDriver<S, R> {
    /// Create an idle driver with an explicit random source.
    pub fn with_rng(rng: R) -> Self {
        Self {
            surface: None,
            running: None,
            rng,
            renderer: SceneRenderer::new(),
            frames_rendered: 0,
        }
    }

    /// Start animating on `surface`, sized to `viewport`.
    ///
    /// Does nothing when the surface is absent, cannot provide a 2D context,
    /// or the driver is already running. Returns whether the driver started.
    pub fn start(&mut self, surface: Option<S>, viewport: SurfaceSize) -> bool {
        self.start_at(surface, viewport, Instant::now())
    }

    /// Like [`start`](Self::start) with an explicit time origin.
    pub fn start_at(&mut self, surface: Option<S>, viewport: SurfaceSize, now: Instant) -> bool {
        if self.running.is_some() {
            debug!("background already running, ignoring start");
            return false;
        }
        let Some(mut surface) = surface else {
            debug!("no drawing surface attached, background not started");
            return false;
        };
        if surface.context_2d().is_none() {
            debug!("surface has no 2d context, background not started");
            return false;
        }

        surface.resize(viewport);
        let field = ParticleField::create(viewport, &mut self.rng);
        debug!(
            "background started at {}x{} with {} particles",
            viewport.width,
            viewport.height,
            field.len()
        );

        self.surface = Some(surface);
        self.running = Some(Running {
            field,
            schedule: FrameSchedule::begin(),
            started_at: now,
        });
        true
    }

    /// Run the pending frame, if any, using the current time.
    pub fn tick(&mut self) -> bool {
        self.tick_at(Instant::now())
    }

    /// Run the pending frame: advance, render, then queue the next frame.
    ///
    /// Returns whether a frame was painted.
    pub fn tick_at(&mut self, now: Instant) -> bool {
        let Some(running) = self.running.as_mut() else {
            return false;
        };
        let Some(ticket) = running.schedule.take_due() else {
            return false;
        };

        let mut painted = false;
        if let Some(surface) = self.surface.as_mut() {
            let size = surface.size();
            running.field.advance(size);

            if let Some(ctx) = surface.context_2d() {
                let elapsed = now.saturating_duration_since(running.started_at);
                self.renderer
                    .render(ctx, &running.field, elapsed.as_secs_f32());
                painted = true;
            }
        }

        running.schedule.request_next();
        if painted {
            self.frames_rendered += 1;
            trace!("frame {} painted", ticket.seq);
        }
        painted
    }

    /// Resize the surface and regenerate the particle field. Ignored while idle.
    pub fn on_viewport_resize(&mut self, viewport: SurfaceSize) {
        let (Some(running), Some(surface)) = (self.running.as_mut(), self.surface.as_mut()) else {
            return;
        };
        surface.resize(viewport);
        running.field = ParticleField::create(viewport, &mut self.rng);
        debug!(
            "background resized to {}x{}",
            viewport.width, viewport.height
        );
    }

    /// Cancel the pending frame, stop listening for resizes and hand back the surface.
    ///
    /// Safe to call repeatedly and before any `start`.
    pub fn stop(&mut self) -> Option<S> {
        if let Some(mut running) = self.running.take() {
            running.schedule.cancel();
            debug!(
                "background stopped after {} frames",
                self.frames_rendered
            );
        }
        self.surface.take()
    }

    pub fn is_running(&self) -> bool {
        self.running.is_some()
    }

    /// True when a frame is queued and will run on the next tick.
    pub fn is_tick_pending(&self) -> bool {
        self.running
            .as_ref()
            .is_some_and(|running| running.schedule.is_pending())
    }

    /// Cancel token of the current schedule, while running.
    pub fn cancel_token(&self) -> Option<CancelToken> {
        self.running.as_ref().map(|running| running.schedule.token())
    }

    pub fn field(&self) -> Option<&ParticleField> {
        self.running.as_ref().map(|running| &running.field)
    }

    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }
}

impl<S: Surface, R: Rng> Drop for AnimationDriver<S, R> {
    fn drop(&mut self) {
        self.stop();
    }
}
