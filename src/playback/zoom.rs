use crate::options::ZoomOptions;

/// Log2 zoom exponent with a rate integrator.
///
/// The renderer scales its field of view by `2^exponent`; the exponent is
/// kept inside the configured bounds after every change.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Zoom {
    exponent: f64,
    rate: f64,
}

impl Zoom {
    /// Current exponent.
    #[must_use]
    pub fn exponent(&self) -> f64 {
        self.exponent
    }

    /// Exponent change per second.
    #[must_use]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Multiplier the exponent stands for.
    #[must_use]
    pub fn factor(&self) -> f64 {
        self.exponent.exp2()
    }

    /// Start (or stop, with 0) a continuous zoom.
    pub fn set_rate(&mut self, rate: f64) {
        if rate.is_finite() {
            self.rate = rate;
        }
    }

    /// Step the exponent by `delta`.
    pub fn zoom_by(&mut self, delta: f64, bounds: &ZoomOptions) {
        if delta.is_finite() {
            self.exponent = bounds.clamp(self.exponent + delta);
        }
    }

    /// Back to no zoom. Stops any continuous zoom.
    pub fn home(&mut self) {
        self.exponent = 0.0;
        self.rate = 0.0;
    }

    /// Integrate the rate over `dt` seconds.
    pub fn tick(&mut self, dt: f64, bounds: &ZoomOptions) {
        if self.rate != 0.0 && dt.is_finite() && dt > 0.0 {
            self.exponent = bounds.clamp(self.exponent + self.rate * dt);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_integrates_and_clamps() {
        let bounds = ZoomOptions::default();
        let mut zoom = Zoom::default();
        zoom.set_rate(1.0);
        zoom.tick(0.5, &bounds);
        assert_eq!(zoom.exponent(), 0.5);
        zoom.tick(10.0, &bounds);
        assert_eq!(zoom.exponent(), bounds.max);

        zoom.set_rate(-1.0);
        zoom.tick(100.0, &bounds);
        assert_eq!(zoom.exponent(), bounds.min);
    }

    #[test]
    fn wheel_steps_and_home() {
        let bounds = ZoomOptions::default();
        let mut zoom = Zoom::default();
        zoom.zoom_by(1.0, &bounds);
        assert_eq!(zoom.factor(), 2.0);
        zoom.zoom_by(f64::NAN, &bounds);
        assert_eq!(zoom.exponent(), 1.0);

        zoom.set_rate(0.3);
        zoom.home();
        assert_eq!(zoom.exponent(), 0.0);
        assert_eq!(zoom.rate(), 0.0);
        assert_eq!(zoom.factor(), 1.0);
    }

    #[test]
    fn stopped_rate_leaves_exponent_alone() {
        let bounds = ZoomOptions::default();
        let mut zoom = Zoom::default();
        zoom.zoom_by(-0.25, &bounds);
        zoom.tick(1.0, &bounds);
        assert_eq!(zoom.exponent(), -0.25);
    }
}
