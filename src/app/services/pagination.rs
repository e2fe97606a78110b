//! Page geometry and the virtual page stack drawn behind the editor.

use crate::app::domain::PaperSize;

pub const SHADOW_OFFSET: i32 = 4;
pub const SHADOW_ALPHA: u8 = 40;

const GAP_INCHES: f64 = 0.4;
const MARGIN_INCHES: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

pub const SURFACE_COLOR: Rgb = Rgb(0xd4, 0xd4, 0xd4);
pub const PAGE_COLOR: Rgb = Rgb(0xff, 0xff, 0xff);
pub const BORDER_COLOR: Rgb = Rgb(0xc0, 0xc0, 0xc0);

/// Alpha-blend `over` onto `under`.
pub fn blend(over: Rgb, under: Rgb, alpha: u8) -> Rgb {
    let mix = |o: u8, u: u8| -> u8 {
        let a = alpha as u32;
        ((o as u32 * a + u as u32 * (255 - a) + 127) / 255) as u8
    };
    Rgb(mix(over.0, under.0), mix(over.1, under.1), mix(over.2, under.2))
}

pub fn shadow_color() -> Rgb {
    blend(Rgb(0, 0, 0), SURFACE_COLOR, SHADOW_ALPHA)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }
}

/// One paint primitive, in surface-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawOp {
    Fill(Rect, Rgb),
    Outline(Rect, Rgb),
}

/// Sheet dimensions in display pixels, fixed once the view is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageGeometry {
    pub page_width: i32,
    pub page_height: i32,
    pub gap: i32,
    pub margin_side: i32,
    pub margin_top: i32,
    pub margin_bottom: i32,
}

impl PageGeometry {
    pub fn from_dpi(dpi: u32, paper: PaperSize) -> Self {
        let dpi = dpi.max(1) as f64;
        let (w, h) = paper.inches();
        let px = |inches: f64| (dpi * inches) as i32;
        Self {
            page_width: px(w),
            page_height: px(h),
            gap: px(GAP_INCHES),
            margin_side: px(MARGIN_INCHES),
            margin_top: px(MARGIN_INCHES),
            margin_bottom: px(MARGIN_INCHES),
        }
    }

    /// Width of the drawn surface, page plus its shadow.
    pub fn surface_width(&self) -> i32 {
        self.page_width + SHADOW_OFFSET
    }

    pub fn surface_height(&self, page_count: usize) -> i32 {
        let n = page_count.max(1) as i32;
        n * self.page_height + (n - 1) * self.gap
    }

    /// Top edge of page `index`.
    pub fn page_top(&self, index: usize) -> i32 {
        index as i32 * (self.page_height + self.gap)
    }

    /// Text column inside the page margins, spanning every page.
    pub fn text_area(&self, page_count: usize) -> Rect {
        Rect::new(
            self.margin_side,
            self.margin_top,
            (self.page_width - 2 * self.margin_side).max(1),
            (self.surface_height(page_count) - self.margin_top - self.margin_bottom).max(1),
        )
    }
}

/// `max(1, ceil(height / page_height))`. Negative and NaN heights count as empty.
pub fn page_count_for(content_height: f64, page_height: i32) -> usize {
    if page_height <= 0 || !(content_height > 0.0) {
        return 1;
    }
    let pages = (content_height / page_height as f64).ceil();
    if pages >= usize::MAX as f64 {
        usize::MAX
    } else {
        (pages as usize).max(1)
    }
}

/// Background, shadow, sheet and border for every page.
pub fn render(geometry: &PageGeometry, page_count: usize) -> Vec<DrawOp> {
    let page_count = page_count.max(1);
    let shadow = shadow_color();
    let mut ops = Vec::with_capacity(1 + page_count * 3);
    ops.push(DrawOp::Fill(
        Rect::new(0, 0, geometry.surface_width(), geometry.surface_height(page_count) + SHADOW_OFFSET),
        SURFACE_COLOR,
    ));
    for i in 0..page_count {
        let y = geometry.page_top(i);
        let page = Rect::new(0, y, geometry.page_width, geometry.page_height);
        ops.push(DrawOp::Fill(
            Rect::new(SHADOW_OFFSET, y + SHADOW_OFFSET, geometry.page_width, geometry.page_height),
            shadow,
        ));
        ops.push(DrawOp::Fill(page, PAGE_COLOR));
        ops.push(DrawOp::Outline(page, BORDER_COLOR));
    }
    ops
}

/// Parts of `rect` left and right of the column `[left, right)`.
fn outside_column(rect: Rect, left: i32, right: i32) -> impl Iterator<Item = Rect> {
    let before = Rect::new(rect.x, rect.y, left.min(rect.x + rect.w) - rect.x, rect.h);
    let start = right.max(rect.x);
    let after = Rect::new(start, rect.y, rect.x + rect.w - start, rect.h);
    [before, after].into_iter().filter(|r| r.w > 0 && r.h > 0)
}

/// Repaint of the gaps between pages, drawn over the editor beside the text
/// column. The column itself is never covered so no wrapped line is hidden.
pub fn gap_overlay(geometry: &PageGeometry, page_count: usize) -> Vec<DrawOp> {
    let shadow = shadow_color();
    let area = geometry.text_area(page_count);
    let (left, right) = (area.x, area.x + area.w);
    let mut ops = Vec::new();
    for i in 1..page_count.max(1) {
        let gap_top = geometry.page_top(i) - geometry.gap;
        let gap = Rect::new(0, gap_top, geometry.surface_width(), geometry.gap);
        ops.extend(outside_column(gap, left, right).map(|r| DrawOp::Fill(r, SURFACE_COLOR)));
        let drop = Rect::new(SHADOW_OFFSET, gap_top, geometry.page_width, SHADOW_OFFSET.min(geometry.gap));
        ops.extend(outside_column(drop, left, right).map(|r| DrawOp::Fill(r, shadow)));
    }
    ops
}

/// Page count plus the "needs recompute" flag.
///
/// Content changes only mark the layout dirty; the owner flushes it once
/// before the next paint, so a burst of edits costs one layout pass.
#[derive(Debug, Clone)]
pub struct PageLayout {
    geometry: PageGeometry,
    page_count: usize,
    dirty: bool,
}

impl PageLayout {
    pub fn new(geometry: PageGeometry) -> Self {
        Self {
            geometry,
            page_count: 1,
            dirty: true,
        }
    }

    pub fn geometry(&self) -> &PageGeometry {
        &self.geometry
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    pub fn surface_height(&self) -> i32 {
        self.geometry.surface_height(self.page_count)
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Recompute from a fresh content height. Returns whether the page count changed.
    pub fn recompute(&mut self, content_height: f64) -> bool {
        self.dirty = false;
        let pages = page_count_for(content_height, self.geometry.page_height);
        let changed = pages != self.page_count;
        if changed {
            tracing::debug!(
                "Page count {} -> {} (content height {:.1})",
                self.page_count,
                pages,
                content_height
            );
        }
        self.page_count = pages;
        changed
    }

    pub fn render(&self) -> Vec<DrawOp> {
        render(&self.geometry, self.page_count)
    }

    pub fn gap_overlay(&self) -> Vec<DrawOp> {
        gap_overlay(&self.geometry, self.page_count)
    }
}
