use crate::constants::{EXPLORE_ID, LOGO_ID, MOBILE_MENU_ID, NAV_SECTION_ATTR};
use crate::dom;
use crate::overlay;
use field_core::{NavState, Section};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Wire nav buttons, logo, mobile menu and the "Explore Work" button to the
/// shared navigation state.
pub fn wire_nav_handlers(document: &web::Document, nav: Rc<RefCell<NavState>>) {
    for btn in dom::query_all(document, &format!("[{NAV_SECTION_ATTR}]")) {
        let Some(section) = btn
            .get_attribute(NAV_SECTION_ATTR)
            .and_then(|key| Section::from_key(&key))
        else {
            log::warn!("[nav] button with unknown section key");
            continue;
        };
        let nav = nav.clone();
        let closure = Closure::wrap(Box::new(move || {
            apply(&nav, |n| n.select(section));
        }) as Box<dyn FnMut()>);
        _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    let nav_logo = nav.clone();
    dom::add_click_listener(document, LOGO_ID, move || {
        apply(&nav_logo, NavState::go_home);
    });
    let nav_menu = nav.clone();
    dom::add_click_listener(document, MOBILE_MENU_ID, move || {
        apply(&nav_menu, NavState::toggle_mobile);
    });
    dom::add_click_listener(document, EXPLORE_ID, move || {
        apply(&nav, NavState::explore);
    });
}

fn apply(nav: &Rc<RefCell<NavState>>, op: impl FnOnce(&mut NavState) -> bool) {
    let (changed, current) = {
        let mut n = nav.borrow_mut();
        (op(&mut n), n.current())
    };
    if changed {
        log::info!("[nav] section -> {}", current.label());
        if let Some(document) = dom::window_document() {
            overlay::show_section(&document, current);
        }
    }
}
