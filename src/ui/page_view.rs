use std::cell::Cell;
use std::rc::Rc;

use fltk::{
    app::Sender,
    draw,
    enums::{Damage, Event, FrameType},
    frame::Frame,
    group::{Group, Scroll, ScrollType},
    prelude::*,
    text::TextEditor,
};

use crate::app::domain::Message;
use crate::app::services::pagination::{DrawOp, PageGeometry, PageLayout, gap_overlay, render};
use crate::app::services::viewport::{CONTAINER_MARGIN, ScrollState, centered_origin};
use super::theme::to_color;

/// Scroll container holding the page surface with the editor on top.
pub struct PageView {
    pub scroll: Scroll,
    surface: Group,
    editor: TextEditor,
    spacer: Frame,
    geometry: PageGeometry,
    page_count: Rc<Cell<usize>>,
}

impl PageView {
    pub fn new(geometry: PageGeometry, sender: Sender<Message>) -> Self {
        let mut scroll = Scroll::default();
        scroll.set_type(ScrollType::Both);

        let page_count = Rc::new(Cell::new(1));

        let mut surface = Group::new(
            CONTAINER_MARGIN,
            CONTAINER_MARGIN,
            geometry.surface_width(),
            geometry.surface_height(1),
            None,
        );
        let area = geometry.text_area(1);
        let mut editor = TextEditor::new(
            surface.x() + area.x,
            surface.y() + area.y,
            area.w,
            area.h,
            None,
        );
        surface.end();
        surface.make_resizable(false);

        let mut spacer = Frame::new(
            surface.x() + surface.w(),
            surface.y() + surface.h(),
            CONTAINER_MARGIN,
            CONTAINER_MARGIN,
            None,
        );
        spacer.set_frame(FrameType::NoBox);
        scroll.end();

        let draw_pages = page_count.clone();
        surface.draw(move |g| {
            let pages = draw_pages.get();
            // Child-only damage means the editor repaints itself over an intact sheet
            if g.damage_type() != Damage::Child {
                paint(g.x(), g.y(), &render(&geometry, pages));
            }
            g.draw_children();
            paint(g.x(), g.y(), &gap_overlay(&geometry, pages));
        });

        editor.handle(move |_, event| {
            if matches!(event, Event::KeyDown | Event::Push | Event::Drag | Event::Paste) {
                sender.send(Message::CursorMoved);
            }
            false
        });

        scroll.resize_callback(move |_, _, _, _, _| {
            sender.send(Message::ViewportResized);
        });

        Self {
            scroll,
            surface,
            editor,
            spacer,
            geometry,
            page_count,
        }
    }

    /// The editor widget placed inside the page margins.
    pub fn editor(&self) -> TextEditor {
        self.editor.clone()
    }

    fn viewport_width(&self) -> i32 {
        self.scroll.w() - self.scroll.scrollbar().w()
    }

    fn viewport_height(&self) -> i32 {
        self.scroll.h() - self.scroll.hscrollbar().h()
    }

    /// Resize the surface and editor for the current page count and
    /// re-center them in the viewport.
    pub fn apply_layout(&mut self, layout: &PageLayout) {
        let pages = layout.page_count();
        self.page_count.set(pages);

        let origin_x = self.scroll.x() - self.scroll.xposition();
        let origin_y = self.scroll.y() - self.scroll.yposition();
        let left = centered_origin(self.viewport_width(), self.geometry.surface_width(), CONTAINER_MARGIN);
        let sx = origin_x + left;
        let sy = origin_y + CONTAINER_MARGIN;
        let sw = self.geometry.surface_width();
        let sh = layout.surface_height();

        self.surface.resize(sx, sy, sw, sh);
        let area = self.geometry.text_area(pages);
        self.editor.resize(sx + area.x, sy + area.y, area.w, area.h);
        self.spacer.resize(sx + sw, sy + sh, CONTAINER_MARGIN, CONTAINER_MARGIN);

        self.surface.redraw();
        self.scroll.redraw();
    }

    /// Scroll just enough to keep the caret at window position (`cx`, `cy`)
    /// inside the viewport.
    pub fn reveal(&mut self, cx: i32, cy: i32) {
        let x = self.scroll.xposition();
        let y = self.scroll.yposition();
        let state = ScrollState {
            x,
            y,
            viewport_w: self.viewport_width(),
            viewport_h: self.viewport_height(),
            content_w: self.spacer.x() + self.spacer.w() - (self.scroll.x() - x),
            content_h: self.spacer.y() + self.spacer.h() - (self.scroll.y() - y),
        };
        let content_x = cx - (self.scroll.x() - x);
        let content_y = cy - (self.scroll.y() - y);
        let (nx, ny) = state.reveal(content_x, content_y);
        if (nx, ny) != (x, y) {
            self.scroll.scroll_to(nx, ny);
        }
    }
}

fn paint(ox: i32, oy: i32, ops: &[DrawOp]) {
    for op in ops {
        match *op {
            DrawOp::Fill(r, color) => draw::draw_rect_fill(ox + r.x, oy + r.y, r.w, r.h, to_color(color)),
            DrawOp::Outline(r, color) => {
                draw::set_draw_color(to_color(color));
                draw::draw_rect(ox + r.x, oy + r.y, r.w, r.h);
            }
        }
    }
}
