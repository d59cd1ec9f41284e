use crate::constants::{
    ACTIVE_CLASS, FALLBACK_ATTR, HIDDEN_CLASS, INTRO_ID, INTRO_WORD_CLASS, NAV_SECTION_ATTR,
};
use crate::dom;
use field_core::constants::{INTRO_TEXT, INTRO_WORD_FADE_SEC};
use field_core::nav::{fallback_source, intro_word_timings};
use field_core::Section;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Show `current`, hide the other sections and highlight its nav button.
pub fn show_section(document: &web::Document, current: Section) {
    for s in Section::ALL {
        if let Some(el) = document.get_element_by_id(&s.element_id()) {
            dom::set_class(&el, HIDDEN_CLASS, s != current);
        }
    }
    for btn in dom::query_all(document, &format!("[{NAV_SECTION_ATTR}]")) {
        let is_current = btn
            .get_attribute(NAV_SECTION_ATTR)
            .and_then(|key| Section::from_key(&key))
            == Some(current);
        dom::set_class(&btn, ACTIVE_CLASS, is_current);
    }
}

/// Fill the intro line with one span per word, each fading in on its own delay.
pub fn render_intro(document: &web::Document) {
    let Some(container) = document.get_element_by_id(INTRO_ID) else {
        return;
    };
    container.set_inner_html("");
    for timing in intro_word_timings(INTRO_TEXT) {
        let Ok(span) = document.create_element("span") else {
            continue;
        };
        span.set_class_name(INTRO_WORD_CLASS);
        span.set_text_content(Some(timing.word));
        _ = span.set_attribute(
            "style",
            &format!(
                "animation-delay:{:.2}s;animation-duration:{:.2}s",
                timing.delay_sec, INTRO_WORD_FADE_SEC
            ),
        );
        _ = container.append_child(&span);
    }
}

/// Swap images that fail to load to their `data-fallback` source, once.
pub fn wire_image_fallbacks(document: &web::Document) {
    for el in dom::query_all(document, &format!("img[{FALLBACK_ATTR}]")) {
        let Ok(img) = el.dyn_into::<web::HtmlImageElement>() else {
            continue;
        };
        let img_err = img.clone();
        let closure = Closure::wrap(Box::new(move || {
            let current = img_err.get_attribute("src").unwrap_or_default();
            let fallback = img_err.get_attribute(FALLBACK_ATTR).unwrap_or_default();
            if let Some(src) = fallback_source(&current, &fallback) {
                log::warn!("image {} failed to load, using fallback", current);
                img_err.set_src(src);
            }
        }) as Box<dyn FnMut()>);
        _ = img.add_event_listener_with_callback("error", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
