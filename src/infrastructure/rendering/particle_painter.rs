use crate::domain::{
    animation::{ParticleField, PerspectiveCamera, PARTICLE_COLOR, PARTICLE_RADIUS},
    errors::AppError,
};
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// Canvas 2D painter for the particle background.
///
/// The canvas is sized to the viewport once, when the painter is attached;
/// later window resizes are not tracked.
pub struct ParticlePainter {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
    width: f64,
    height: f64,
    camera: PerspectiveCamera,
}

impl ParticlePainter {
    pub fn attach(canvas: HtmlCanvasElement) -> Result<Self, AppError> {
        let (width, height) = viewport_size()?;
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);

        let context = canvas
            .get_context("2d")
            .map_err(|_| AppError::Rendering("Failed to get 2D context".to_string()))?
            .ok_or_else(|| AppError::Rendering("2D context unavailable".to_string()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| AppError::Rendering("Failed to cast to 2D context".to_string()))?;

        Ok(Self { canvas, context, width, height, camera: PerspectiveCamera::for_viewport(width, height) })
    }

    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    /// Clear the canvas and draw every particle as a filled disc.
    pub fn paint(&self, field: &ParticleField) {
        let ctx = &self.context;
        ctx.clear_rect(0.0, 0.0, self.width, self.height);
        ctx.set_fill_style_str(PARTICLE_COLOR);
        ctx.begin_path();
        for particle in field.particles() {
            let Some(disc) = self.camera.project(*particle, PARTICLE_RADIUS, self.width, self.height)
            else {
                continue;
            };
            ctx.move_to(disc.x + disc.radius, disc.y);
            let _ = ctx.arc(disc.x, disc.y, disc.radius, 0.0, TAU);
        }
        ctx.fill();
    }

    /// Wipe the canvas and shrink its backing store to nothing.
    pub fn release(&self) {
        self.context.clear_rect(0.0, 0.0, self.width, self.height);
        self.canvas.set_width(0);
        self.canvas.set_height(0);
    }
}

fn viewport_size() -> Result<(f64, f64), AppError> {
    let window = web_sys::window().ok_or_else(|| AppError::Rendering("Window not available".to_string()))?;
    let dimension = |value: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
    };
    Ok((dimension(window.inner_width()), dimension(window.inner_height())))
}
