use rand::Rng;

pub const PARTICLE_COUNT: usize = 100;
/// World-space radius of each particle sphere
pub const PARTICLE_RADIUS: f64 = 0.7;
pub const PARTICLE_COLOR: &str = "#00bfff";

const DRIFT_AMPLITUDE: f64 = 0.02;
const DRIFT_RATE_PER_MS: f64 = 0.001;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// Axis-aligned box centred on the origin that particles are spawned in
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnVolume {
    pub half_x: f64,
    pub half_y: f64,
    pub half_z: f64,
}

impl Default for SpawnVolume {
    fn default() -> Self {
        Self { half_x: 100.0, half_y: 50.0, half_z: 25.0 }
    }
}

impl SpawnVolume {
    pub fn contains(&self, p: Vec3) -> bool {
        p.x.abs() <= self.half_x && p.y.abs() <= self.half_y && p.z.abs() <= self.half_z
    }
}

/// Fixed population of drifting particles.
///
/// Nothing is added or removed after [`ParticleField::scatter`]; each frame
/// only nudges x and y.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleField {
    particles: Vec<Vec3>,
}

impl ParticleField {
    pub fn scatter<R: Rng + ?Sized>(rng: &mut R, count: usize, volume: SpawnVolume) -> Self {
        let particles = (0..count)
            .map(|_| {
                Vec3::new(
                    rng.gen_range(-volume.half_x..volume.half_x),
                    rng.gen_range(-volume.half_y..volume.half_y),
                    rng.gen_range(-volume.half_z..volume.half_z),
                )
            })
            .collect();
        Self { particles }
    }

    pub fn from_positions(particles: Vec<Vec3>) -> Self {
        Self { particles }
    }

    /// Advance one frame at wall-clock time `now_ms`.
    pub fn step(&mut self, now_ms: f64) {
        let phase = now_ms * DRIFT_RATE_PER_MS;
        for (index, p) in self.particles.iter_mut().enumerate() {
            let angle = phase + index as f64;
            p.x += angle.sin() * DRIFT_AMPLITUDE;
            p.y += angle.cos() * DRIFT_AMPLITUDE;
        }
    }

    pub fn particles(&self) -> &[Vec3] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}
