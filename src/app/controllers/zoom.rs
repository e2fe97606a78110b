use crate::app::domain::FontZoom;

/// Font points added or removed per zoom step.
pub const ZOOM_STEP: i32 = 1;

/// Signed count of zoom steps applied since construction.
///
/// Steps that would push the font outside `[min, max]` are refused and do
/// not move the counter, so undoing `steps` steps always lands back on the
/// starting size.
#[derive(Debug, Clone)]
pub struct ZoomController {
    steps: i32,
    min_font_size: i32,
    max_font_size: i32,
}

impl ZoomController {
    pub fn new(min_font_size: i32, max_font_size: i32) -> Self {
        let min_font_size = min_font_size.max(1);
        Self {
            steps: 0,
            min_font_size,
            max_font_size: max_font_size.max(min_font_size),
        }
    }

    pub fn steps(&self) -> i32 {
        self.steps
    }

    pub fn zoom_in(&mut self, target: &mut impl FontZoom) -> bool {
        let size = target.font_size();
        if size + ZOOM_STEP > self.max_font_size {
            tracing::debug!("Zoom in refused at {}pt", size);
            return false;
        }
        target.set_font_size(size + ZOOM_STEP);
        self.steps += 1;
        true
    }

    pub fn zoom_out(&mut self, target: &mut impl FontZoom) -> bool {
        let size = target.font_size();
        if size - ZOOM_STEP < self.min_font_size {
            tracing::debug!("Zoom out refused at {}pt", size);
            return false;
        }
        target.set_font_size(size - ZOOM_STEP);
        self.steps -= 1;
        true
    }

    /// Undo every applied step one at a time. Returns whether anything changed.
    pub fn zoom_reset(&mut self, target: &mut impl FontZoom) -> bool {
        if self.steps == 0 {
            return false;
        }
        let delta = if self.steps > 0 { -ZOOM_STEP } else { ZOOM_STEP };
        for _ in 0..self.steps.unsigned_abs() {
            let size = target.font_size();
            target.set_font_size(size + delta);
        }
        self.steps = 0;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::test_support::MemorySurface;
    use proptest::prelude::*;

    #[test]
    fn test_in_then_out_is_identity() {
        let mut surface = MemorySurface::default();
        let mut zoom = ZoomController::new(6, 72);
        assert!(zoom.zoom_in(&mut surface));
        assert_eq!(surface.font_size(), 13);
        assert!(zoom.zoom_out(&mut surface));
        assert_eq!(surface.font_size(), 12);
        assert_eq!(zoom.steps(), 0);
    }

    #[test]
    fn test_reset_walks_back_net_steps() {
        let mut surface = MemorySurface::default();
        let mut zoom = ZoomController::new(6, 72);
        for _ in 0..3 {
            zoom.zoom_out(&mut surface);
        }
        zoom.zoom_in(&mut surface);
        assert_eq!(zoom.steps(), -2);
        assert_eq!(surface.font_size(), 10);
        assert!(zoom.zoom_reset(&mut surface));
        assert_eq!(surface.font_size(), 12);
        assert_eq!(zoom.steps(), 0);
        assert!(!zoom.zoom_reset(&mut surface));
    }

    #[test]
    fn test_clamped_steps_do_not_count() {
        let mut surface = MemorySurface::default();
        let mut zoom = ZoomController::new(10, 13);
        assert!(zoom.zoom_out(&mut surface));
        assert!(zoom.zoom_out(&mut surface));
        assert!(!zoom.zoom_out(&mut surface));
        assert_eq!(surface.font_size(), 10);
        assert_eq!(zoom.steps(), -2);
        for _ in 0..5 {
            zoom.zoom_in(&mut surface);
        }
        assert_eq!(surface.font_size(), 13);
        assert_eq!(zoom.steps(), 1);
        zoom.zoom_reset(&mut surface);
        assert_eq!(surface.font_size(), 12);
    }

    #[test]
    fn test_font_never_reaches_zero() {
        let mut surface = MemorySurface::default();
        let mut zoom = ZoomController::new(0, 72);
        for _ in 0..50 {
            zoom.zoom_out(&mut surface);
        }
        assert_eq!(surface.font_size(), 1);
    }

    proptest! {
        #[test]
        fn prop_reset_restores_initial_size(ops in proptest::collection::vec(any::<bool>(), 0..200)) {
            let mut surface = MemorySurface::default();
            let mut zoom = ZoomController::new(6, 72);
            for grow in ops {
                if grow {
                    zoom.zoom_in(&mut surface);
                } else {
                    zoom.zoom_out(&mut surface);
                }
            }
            zoom.zoom_reset(&mut surface);
            prop_assert_eq!(surface.font_size(), 12);
            prop_assert_eq!(zoom.steps(), 0);
        }
    }
}
