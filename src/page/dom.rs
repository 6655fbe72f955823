//! Document wiring for the page behaviours
//!
//! Every `init_*` function attaches its listeners once and returns quietly
//! when the elements it needs are missing.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, Event, EventTarget, FillMode, HtmlButtonElement, HtmlElement,
    HtmlFormElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    KeyframeAnimationOptions, MouseEvent, NodeList, ScrollBehavior, ScrollToOptions, Window,
};

use super::counter::{COUNTER_THRESHOLD, Counter, CounterStep};
use super::form::{self, SubmitButton, SubmitPhase};
use super::scroll::{self, HeaderStyle};
use super::{ACTIVE_CLASS, REVEAL_THRESHOLD, cursor, preloader};

// === Helpers ===

fn query(document: &Document, selector: &str) -> Option<Element> {
    document.query_selector(selector).ok().flatten()
}

fn elements(list: Result<NodeList, JsValue>) -> Vec<Element> {
    let Ok(list) = list else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Attach a listener for the life of the page
fn on<F>(target: &EventTarget, event: &str, handler: F)
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    let _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Run `f` once after `ms` milliseconds
fn after<F>(window: &Window, ms: i32, f: F)
where
    F: FnOnce() + 'static,
{
    let callback = Closure::once_into_js(f);
    let _ = window
        .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), ms);
}

fn create_with_class(document: &Document, tag: &str, class: &str) -> Option<Element> {
    let element = document.create_element(tag).ok()?;
    element.set_class_name(class);
    Some(element)
}

fn smooth_scroll_to(window: &Window, top: f64) {
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

fn scroll_y(window: &Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

/// Call `on_visible` the first time each matching element crosses `threshold`
fn observe_once<F>(document: &Document, selector: &str, threshold: f64, mut on_visible: F)
where
    F: FnMut(Element) + 'static,
{
    let targets = elements(document.query_selector_all(selector));
    if targets.is_empty() {
        return;
    }

    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    let target = entry.target();
                    observer.unobserve(&target);
                    on_visible(target);
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_root_margin("0px");
    options.set_threshold(&JsValue::from_f64(threshold));
    let Ok(observer) =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
    else {
        return;
    };
    callback.forget();

    for target in &targets {
        observer.observe(target);
    }
}

// === Behaviours ===

/// Insert the skeleton preloader and fade it out once the page has loaded
pub fn init_preloader(window: &Window, document: &Document) {
    let selector = format!(".{}", preloader::PRELOADER_CLASS);
    if query(document, &selector).is_none() {
        if let (Some(body), Some(el)) = (
            document.body(),
            create_with_class(document, "div", preloader::PRELOADER_CLASS),
        ) {
            el.set_inner_html(preloader::SKELETON_HTML);
            let _ = body.prepend_with_node_1(&el);
        }
    }

    let Some(element) = query(document, &selector) else {
        return;
    };

    if preloader::waits_for_load(&document.ready_state()) {
        let w = window.clone();
        let on_load = Closure::once_into_js(move || dismiss_preloader(&w, element));
        let _ = window.add_event_listener_with_callback("load", on_load.unchecked_ref());
    } else {
        dismiss_preloader(window, element);
    }
}

fn dismiss_preloader(window: &Window, element: Element) {
    let w = window.clone();
    after(window, preloader::FADE_DELAY_MS, move || {
        let _ = element.class_list().add_1(preloader::FADE_OUT_CLASS);
        after(&w, preloader::REMOVE_DELAY_MS, move || element.remove());
    });
}

/// Hamburger button opens/closes the nav; following a link closes it
pub fn init_mobile_menu(document: &Document) {
    let (Some(button), Some(nav)) = (
        query(document, ".mobile-menu-btn"),
        query(document, ".nav"),
    ) else {
        return;
    };

    {
        let nav = nav.clone();
        on(&button, "click", move |_| {
            let _ = nav.class_list().toggle(ACTIVE_CLASS);
        });
    }

    for link in elements(nav.query_selector_all("a")) {
        let nav = nav.clone();
        on(&link, "click", move |_| {
            let _ = nav.class_list().remove_1(ACTIVE_CLASS);
        });
    }
}

/// In-page links scroll smoothly, leaving room for the fixed header
pub fn init_smooth_scroll(window: &Window, document: &Document) {
    for anchor in elements(document.query_selector_all(scroll::ANCHOR_SELECTOR)) {
        let window = window.clone();
        let document = document.clone();
        let link = anchor.clone();
        on(&anchor, "click", move |event| {
            event.prevent_default();
            let Some(href) = link.get_attribute("href") else {
                return;
            };
            let Some(target) = scroll::anchor_target(&href).and_then(|s| query(&document, s))
            else {
                return;
            };
            let top = target.get_bounding_client_rect().top();
            let page_y = window.page_y_offset().unwrap_or(0.0);
            smooth_scroll_to(&window, scroll::scroll_offset(top, page_y));
        });
    }
}

/// Dot-and-outline cursor, on fine pointers only
pub fn init_custom_cursor(window: &Window, document: &Document) {
    let fine_pointer = window
        .match_media(cursor::FINE_POINTER_QUERY)
        .ok()
        .flatten()
        .is_some_and(|query| query.matches());
    if !fine_pointer {
        return;
    }

    let Some(body) = document.body() else {
        return;
    };
    let make = |class: &str| {
        create_with_class(document, "div", class).and_then(|el| el.dyn_into::<HtmlElement>().ok())
    };
    let (Some(dot), Some(outline)) = (make(cursor::DOT_CLASS), make(cursor::OUTLINE_CLASS)) else {
        return;
    };
    let _ = body.append_child(&dot);
    let _ = body.append_child(&outline);

    {
        let outline = outline.clone();
        let trail_options = outline_trail_options();
        on(window, "mousemove", move |event| {
            let Some(mouse) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            let (x, y) = (mouse.client_x(), mouse.client_y());
            let style = dot.style();
            let _ = style.set_property("left", &cursor::px(x));
            let _ = style.set_property("top", &cursor::px(y));

            let _ = outline.animate_with_keyframe_animation_options(
                Some(&keyframe(&cursor::trail_keyframe(x, y))),
                &trail_options,
            );
        });
    }

    for el in elements(document.query_selector_all(cursor::INTERACTIVE_SELECTOR)) {
        let hovered = outline.clone();
        on(&el, "mouseenter", move |_| {
            let _ = hovered.class_list().add_1(cursor::HOVERED_CLASS);
        });
        let hovered = outline.clone();
        on(&el, "mouseleave", move |_| {
            let _ = hovered.class_list().remove_1(cursor::HOVERED_CLASS);
        });
    }
}

fn outline_trail_options() -> KeyframeAnimationOptions {
    let options = KeyframeAnimationOptions::new();
    options.set_duration(&JsValue::from_f64(cursor::OUTLINE_TRAIL_MS));
    options.set_fill(FillMode::Forwards);
    options
}

/// A single keyframe object, e.g. `{ left: "10px", top: "4px" }`
fn keyframe(properties: &[(&str, String)]) -> js_sys::Object {
    let frame = js_sys::Object::new();
    for (name, value) in properties {
        let _ = js_sys::Reflect::set(&frame, &JsValue::from_str(name), &JsValue::from_str(value));
    }
    frame
}

/// `.reveal` elements animate in once, the first time they scroll into view
pub fn init_scroll_animations(document: &Document) {
    observe_once(document, ".reveal", REVEAL_THRESHOLD, |el| {
        let _ = el.class_list().add_1(ACTIVE_CLASS);
    });
}

/// Header turns solid once the page is scrolled
pub fn init_sticky_header(window: &Window, document: &Document) {
    let Some(header) = query(document, ".header").and_then(|h| h.dyn_into::<HtmlElement>().ok())
    else {
        return;
    };

    let w = window.clone();
    on(window, "scroll", move |_| {
        let look = HeaderStyle::for_scroll(scroll_y(&w));
        let style = header.style();
        let _ = style.set_property("background", look.background);
        let _ = style.set_property("box-shadow", look.box_shadow);
    });
}

/// Required-field validation and a mocked send for the contact form
pub fn init_form_validation(window: &Window, document: &Document) {
    let Some(form_el) =
        query(document, form::FORM_SELECTOR).and_then(|f| f.dyn_into::<HtmlFormElement>().ok())
    else {
        return;
    };

    let window = window.clone();
    let document = document.clone();
    let state: Rc<RefCell<Option<SubmitButton>>> = Rc::new(RefCell::new(None));
    let target = form_el.clone();

    on(&target, "submit", move |event| {
        event.prevent_default();

        let fields = elements(form_el.query_selector_all(form::FIELD_SELECTOR));
        let values: Vec<String> = fields.iter().map(field_value).collect();
        for field in &fields {
            clear_field_error(field);
        }
        let invalid = form::invalid_fields(values.iter().map(String::as_str));
        for &i in &invalid {
            mark_field_error(&document, &fields[i]);
        }
        if !invalid.is_empty() {
            return;
        }

        let Some(button) = form_el
            .query_selector(form::SUBMIT_SELECTOR)
            .ok()
            .flatten()
            .and_then(|b| b.dyn_into::<HtmlButtonElement>().ok())
        else {
            return;
        };

        let delay = {
            let mut slot = state.borrow_mut();
            if slot.as_ref().is_none_or(|s| s.phase() == SubmitPhase::Idle) {
                *slot = Some(SubmitButton::new(button.inner_text()));
            }
            let Some(submit) = slot.as_mut() else {
                return;
            };
            let Some(delay) = submit.submit() else {
                return;
            };
            apply_button(&button, submit);
            delay
        };

        schedule_send_step(
            window.clone(),
            form_el.clone(),
            button,
            state.clone(),
            delay,
        );
    });
}

fn field_value(field: &Element) -> String {
    js_sys::Reflect::get(field, &JsValue::from_str("value"))
        .ok()
        .and_then(|v| v.as_string())
        .unwrap_or_default()
}

fn clear_field_error(field: &Element) {
    let _ = field.class_list().remove_1(form::ERROR_CLASS);
    if let Some(parent) = field.parent_element() {
        let _ = parent.class_list().remove_1(form::PARENT_ERROR_CLASS);
        let selector = format!(".{}", form::ERROR_MESSAGE_CLASS);
        if let Ok(Some(message)) = parent.query_selector(&selector) {
            message.remove();
        }
    }
}

fn mark_field_error(document: &Document, field: &Element) {
    let _ = field.class_list().add_1(form::ERROR_CLASS);
    let Some(parent) = field.parent_element() else {
        return;
    };
    let _ = parent.class_list().add_1(form::PARENT_ERROR_CLASS);
    if let Some(message) = create_with_class(document, "div", form::ERROR_MESSAGE_CLASS) {
        message.set_text_content(Some(form::REQUIRED_MESSAGE));
        let _ = parent.append_child(&message);
    }
}

fn apply_button(button: &HtmlButtonElement, submit: &SubmitButton) {
    button.set_inner_text(submit.label());
    button.set_disabled(submit.disabled());
}

fn schedule_send_step(
    window: Window,
    form_el: HtmlFormElement,
    button: HtmlButtonElement,
    state: Rc<RefCell<Option<SubmitButton>>>,
    delay: i32,
) {
    let w = window.clone();
    after(&window, delay, move || {
        let next = {
            let mut slot = state.borrow_mut();
            let Some(submit) = slot.as_mut() else {
                return;
            };
            let next = submit.advance();
            apply_button(&button, submit);
            if submit.phase() == SubmitPhase::Sent {
                let style = button.style();
                let _ = style.set_property("background-color", "var(--color-primary)");
                let _ = style.set_property("color", "var(--color-bg)");
                form_el.reset();
            }
            next
        };
        if let Some(delay) = next {
            schedule_send_step(w, form_el, button, state, delay);
        }
    });
}

/// Floating button that appears after scrolling down and returns to the top
pub fn init_back_to_top(window: &Window, document: &Document) {
    let (Some(body), Some(button)) = (
        document.body(),
        create_with_class(document, "button", scroll::BACK_TO_TOP_CLASS),
    ) else {
        return;
    };
    button.set_inner_html(scroll::BACK_TO_TOP_ICON);
    let _ = button.set_attribute("aria-label", scroll::BACK_TO_TOP_LABEL);
    let _ = body.append_child(&button);

    {
        let button = button.clone();
        let w = window.clone();
        on(window, "scroll", move |_| {
            let classes = button.class_list();
            let _ = if scroll::back_to_top_visible(scroll_y(&w)) {
                classes.add_1(scroll::VISIBLE_CLASS)
            } else {
                classes.remove_1(scroll::VISIBLE_CLASS)
            };
        });
    }

    let w = window.clone();
    on(&button, "click", move |_| smooth_scroll_to(&w, 0.0));
}

/// `.counter` elements count up to `data-target` when half visible
pub fn init_counter_animation(window: &Window, document: &Document) {
    let window = window.clone();
    observe_once(document, ".counter", COUNTER_THRESHOLD, move |el| {
        let counter = Counter::from_attributes(
            el.get_attribute("data-target").as_deref(),
            el.get_attribute("data-suffix").as_deref(),
        );
        step_counter(window.clone(), el, counter);
    });
}

fn step_counter(window: Window, element: Element, mut counter: Counter) {
    match counter.step() {
        CounterStep::Running(text) => {
            element.set_text_content(Some(&text));
            let w = window.clone();
            let next = Closure::once_into_js(move || step_counter(w, element, counter));
            let _ = window.request_animation_frame(next.unchecked_ref());
        }
        CounterStep::Done(text) => element.set_text_content(Some(&text)),
    }
}
