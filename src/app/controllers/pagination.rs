use crate::app::domain::TextSurface;
use crate::app::services::pagination::{PageGeometry, PageLayout};

use super::zoom::ZoomController;

/// Keeps the page stack in step with the editor content and font size.
#[derive(Debug, Clone)]
pub struct PaginationController {
    layout: PageLayout,
    zoom: ZoomController,
}

impl PaginationController {
    pub fn new(geometry: PageGeometry, zoom: ZoomController) -> Self {
        Self {
            layout: PageLayout::new(geometry),
            zoom,
        }
    }

    pub fn layout(&self) -> &PageLayout {
        &self.layout
    }

    pub fn zoom_steps(&self) -> i32 {
        self.zoom.steps()
    }

    /// Height the content needs on paper: the laid-out text plus the top
    /// and bottom page margins it is set inside.
    pub fn page_content_height(&self, surface: &impl TextSurface) -> f64 {
        let g = self.layout.geometry();
        surface.content_height() + (g.margin_top + g.margin_bottom) as f64
    }

    /// Content-change notification: defer the recompute to the next flush.
    pub fn content_changed(&mut self) {
        self.layout.mark_dirty();
    }

    /// Run the pending layout pass, if any. Returns whether one ran.
    pub fn flush(&mut self, surface: &impl TextSurface) -> bool {
        if !self.layout.is_dirty() {
            return false;
        }
        let height = self.page_content_height(surface);
        self.layout.recompute(height);
        true
    }

    pub fn zoom_in(&mut self, surface: &mut impl TextSurface) -> bool {
        let applied = self.zoom.zoom_in(surface);
        if applied {
            let height = self.page_content_height(surface);
            self.layout.recompute(height);
        }
        applied
    }

    pub fn zoom_out(&mut self, surface: &mut impl TextSurface) -> bool {
        let applied = self.zoom.zoom_out(surface);
        if applied {
            let height = self.page_content_height(surface);
            self.layout.recompute(height);
        }
        applied
    }

    pub fn zoom_reset(&mut self, surface: &mut impl TextSurface) -> bool {
        let applied = self.zoom.zoom_reset(surface);
        if applied {
            let height = self.page_content_height(surface);
            self.layout.recompute(height);
        }
        applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::domain::{FontZoom, PaperSize};
    use crate::app::test_support::MemorySurface;

    fn controller() -> PaginationController {
        PaginationController::new(
            PageGeometry::from_dpi(96, PaperSize::Letter),
            ZoomController::new(6, 72),
        )
    }

    #[test]
    fn test_burst_of_edits_costs_one_layout_pass() {
        let mut pages = controller();
        let mut surface = MemorySurface::default();
        assert!(pages.flush(&surface));

        for _ in 0..10 {
            surface.type_text("word ");
            pages.content_changed();
        }
        surface.height_override = Some(2500.0);
        assert!(pages.flush(&surface));
        assert!(!pages.flush(&surface));
        assert_eq!(pages.layout().page_count(), 3);
    }

    #[test]
    fn test_flush_reads_latest_height() {
        let mut pages = controller();
        let mut surface = MemorySurface::default();
        surface.height_override = Some(5000.0);
        pages.flush(&surface);
        assert_eq!(pages.layout().page_count(), 5);

        pages.content_changed();
        surface.height_override = Some(100.0);
        pages.flush(&surface);
        assert_eq!(pages.layout().page_count(), 1);
    }

    #[test]
    fn test_zoom_recomputes_immediately() {
        let mut pages = controller();
        let text = "line\n".repeat(50);
        let mut surface = MemorySurface::with_text(&text);
        pages.flush(&surface);
        assert_eq!(pages.layout().page_count(), 1);

        for _ in 0..6 {
            pages.zoom_in(&mut surface);
        }
        assert_eq!(surface.font_size(), 18);
        assert_eq!(pages.layout().page_count(), 2);
        assert!(!pages.layout().is_dirty());

        pages.zoom_reset(&mut surface);
        assert_eq!(surface.font_size(), 12);
        assert_eq!(pages.layout().page_count(), 1);
        assert_eq!(pages.zoom_steps(), 0);
    }

    #[test]
    fn test_refused_zoom_leaves_layout_alone() {
        let mut pages = PaginationController::new(
            PageGeometry::from_dpi(96, PaperSize::Letter),
            ZoomController::new(12, 12),
        );
        let mut surface = MemorySurface::default();
        assert!(!pages.zoom_in(&mut surface));
        assert!(!pages.zoom_out(&mut surface));
        assert!(pages.layout().is_dirty());
    }
}
