use super::particles::Vec3;

pub const CAMERA_FOV_DEG: f64 = 75.0;
pub const CAMERA_NEAR: f64 = 0.1;
pub const CAMERA_FAR: f64 = 1000.0;
pub const CAMERA_DISTANCE: f64 = 100.0;

/// A particle after projection, in canvas pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedDisc {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
}

/// Pinhole camera on the +z axis looking towards the origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerspectiveCamera {
    pub fov_deg: f64,
    pub aspect: f64,
    pub near: f64,
    pub far: f64,
    pub position_z: f64,
}

impl PerspectiveCamera {
    /// Camera matching a canvas of the given pixel size
    pub fn for_viewport(width: f64, height: f64) -> Self {
        let aspect = if height > 0.0 { width / height } else { 1.0 };
        Self {
            fov_deg: CAMERA_FOV_DEG,
            aspect,
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
            position_z: CAMERA_DISTANCE,
        }
    }

    fn focal(&self) -> f64 {
        1.0 / (self.fov_deg.to_radians() / 2.0).tan()
    }

    /// Project a sphere of world `radius` at `p`; `None` when it lies
    /// outside the near/far planes.
    pub fn project(&self, p: Vec3, radius: f64, width: f64, height: f64) -> Option<ProjectedDisc> {
        let depth = self.position_z - p.z;
        if depth < self.near || depth > self.far {
            return None;
        }
        let f = self.focal();
        let ndc_x = p.x * f / self.aspect / depth;
        let ndc_y = p.y * f / depth;
        Some(ProjectedDisc {
            x: (ndc_x + 1.0) / 2.0 * width,
            y: (1.0 - ndc_y) / 2.0 * height,
            radius: radius * f / depth * height / 2.0,
        })
    }
}
