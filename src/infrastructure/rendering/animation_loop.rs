use super::particle_painter::ParticlePainter;
use crate::domain::{
    animation::{AnimatorState, ParticleField, SpawnVolume, PARTICLE_COUNT},
    logging::LogComponent,
};
use crate::{log_debug, log_trace, log_warn};
use gloo::render::{request_animation_frame, AnimationFrame};
use rand::{rngs::SmallRng, SeedableRng};
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use web_sys::HtmlCanvasElement;

struct LoopShared {
    field: RefCell<ParticleField>,
    painter: ParticlePainter,
    /// Next scheduled frame; dropping it cancels the callback
    pending: RefCell<Option<AnimationFrame>>,
    state: Cell<AnimatorState>,
    frames: Cell<u64>,
}

/// Handle to the running particle animation.
///
/// Created by [`AnimationLoop::start`] on mount. [`AnimationLoop::stop`]
/// (or dropping the handle) cancels the pending frame and releases the
/// canvas; a stopped loop is never resumed.
pub struct AnimationLoop {
    shared: Rc<LoopShared>,
}

impl AnimationLoop {
    /// `None` when there is no canvas or it has no 2D context.
    pub fn start(canvas: Option<HtmlCanvasElement>) -> Option<Self> {
        let painter = ParticlePainter::attach(canvas?).ok()?;
        let mut rng = SmallRng::seed_from_u64(browser_seed());
        let field = ParticleField::scatter(&mut rng, PARTICLE_COUNT, SpawnVolume::default());

        let shared = Rc::new(LoopShared {
            field: RefCell::new(field),
            painter,
            pending: RefCell::new(None),
            state: Cell::new(AnimatorState::Uninitialized),
            frames: Cell::new(0),
        });
        shared.state.set(AnimatorState::Running);

        log_debug!(
            LogComponent::Infrastructure("AnimationLoop"),
            "▶️ {} particles on a {:?} canvas",
            PARTICLE_COUNT,
            shared.painter.size()
        );

        run_frame(&shared);
        Some(Self { shared })
    }

    pub fn stop(&self) {
        let current = self.shared.state.get();
        let Some(next) = current.transition(AnimatorState::Stopped) else {
            if current != AnimatorState::Stopped {
                log_warn!(
                    LogComponent::Infrastructure("AnimationLoop"),
                    "ignoring stop while {}",
                    current
                );
            }
            return;
        };
        self.shared.state.set(next);
        self.shared.pending.borrow_mut().take();
        self.shared.painter.release();

        log_debug!(
            LogComponent::Infrastructure("AnimationLoop"),
            "⏹️ stopped after {} frames",
            self.shared.frames.get()
        );
    }

    pub fn state(&self) -> AnimatorState {
        self.shared.state.get()
    }

    /// Frames painted so far
    pub fn frames_rendered(&self) -> u64 {
        self.shared.frames.get()
    }
}

impl Drop for AnimationLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

fn run_frame(shared: &Rc<LoopShared>) {
    if shared.state.get() != AnimatorState::Running {
        return;
    }

    shared.field.borrow_mut().step(js_sys::Date::now());
    shared.painter.paint(&shared.field.borrow());
    let frame = shared.frames.get() + 1;
    shared.frames.set(frame);
    log_trace!(LogComponent::Infrastructure("AnimationLoop"), "🎞️ frame {}", frame);

    let weak: Weak<LoopShared> = Rc::downgrade(shared);
    let next = request_animation_frame(move |_| {
        if let Some(shared) = weak.upgrade() {
            run_frame(&shared);
        }
    });
    shared.pending.replace(Some(next));
}

fn browser_seed() -> u64 {
    let clock = js_sys::Date::now() as u64;
    let noise = (js_sys::Math::random() * u32::MAX as f64) as u64;
    clock ^ (noise << 32)
}
