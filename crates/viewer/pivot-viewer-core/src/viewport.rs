//! Viewport and camera bookkeeping. The resize check runs once per frame and
//! is a no-op unless the reported size actually changed.

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct ViewportSize {
    pub width: u32,
    pub height: u32,
}

impl ViewportSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn aspect(&self) -> f32 {
        if self.height == 0 {
            1.0
        } else {
            self.width as f32 / self.height as f32
        }
    }
}

#[derive(Clone, Debug)]
pub struct Camera {
    pub fov_deg: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    /// Derived vertical projection scale, 1 / tan(fov / 2).
    projection_scale: f32,
}

impl Camera {
    pub fn new(fov_deg: f32, aspect: f32, near: f32, far: f32) -> Self {
        let mut cam = Self {
            fov_deg,
            aspect,
            near,
            far,
            projection_scale: 0.0,
        };
        cam.update_projection();
        cam
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
        self.update_projection();
    }

    pub fn update_projection(&mut self) {
        self.projection_scale = 1.0 / (self.fov_deg.to_radians() * 0.5).tan();
    }

    #[inline]
    pub fn projection_scale(&self) -> f32 {
        self.projection_scale
    }
}

#[derive(Clone, Debug)]
pub struct Viewport {
    size: ViewportSize,
    pixel_ratio: f32,
    pub camera: Camera,
}

impl Viewport {
    pub fn new(size: ViewportSize, pixel_ratio: f32) -> Self {
        Self {
            camera: Camera::new(50.0, size.aspect(), 0.1, 1000.0),
            size,
            pixel_ratio,
        }
    }

    #[inline]
    pub fn size(&self) -> ViewportSize {
        self.size
    }

    #[inline]
    pub fn pixel_ratio(&self) -> f32 {
        self.pixel_ratio
    }

    /// Adopt `reported` and update the camera aspect if it differs from the
    /// last-applied size. Returns false without touching anything otherwise.
    pub fn resize_if_needed(&mut self, reported: ViewportSize) -> bool {
        if reported == self.size {
            return false;
        }
        self.size = reported;
        self.camera.set_aspect(reported.aspect());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resize_is_idempotent() {
        let mut vp = Viewport::new(ViewportSize::new(800, 600), 1.0);
        assert!(!vp.resize_if_needed(ViewportSize::new(800, 600)));

        assert!(vp.resize_if_needed(ViewportSize::new(1920, 1080)));
        assert!((vp.camera.aspect - 1920.0 / 1080.0).abs() < 1e-6);

        assert!(!vp.resize_if_needed(ViewportSize::new(1920, 1080)));
    }

    #[test]
    fn zero_height_does_not_divide_by_zero() {
        let size = ViewportSize::new(640, 0);
        assert_eq!(size.aspect(), 1.0);
    }
}
