use fltk::{
    app::Sender,
    enums::Event,
    group::Flex,
    menu::MenuBar,
    prelude::*,
    window::Window,
};

use crate::app::domain::{APP_NAME, Message};
use crate::app::services::pagination::PageGeometry;
use super::page_view::PageView;

pub const MENU_HEIGHT: i32 = 30;

pub struct MainWidgets {
    pub wind: Window,
    pub menu: MenuBar,
    pub view: PageView,
}

pub fn build_main_window(geometry: PageGeometry, sender: &Sender<Message>) -> MainWidgets {
    let mut wind = Window::new(100, 100, 1000, 760, APP_NAME);
    wind.set_xclass(APP_NAME);

    let mut flex = Flex::new(0, 0, 1000, 760, None);
    flex.set_type(fltk::group::FlexType::Column);

    let menu = MenuBar::new(0, 0, 0, MENU_HEIGHT, "");
    flex.fixed(&menu, MENU_HEIGHT);

    let view = PageView::new(geometry, *sender);

    flex.end();
    wind.end();
    wind.resizable(&flex);

    // Closing via the title bar goes through the same confirmation as Exit.
    wind.set_callback({
        let s = *sender;
        move |_| {
            if fltk::app::event() == Event::Close {
                s.send(Message::WindowClose);
            }
        }
    });

    MainWidgets {
        wind,
        menu,
        view,
    }
}
