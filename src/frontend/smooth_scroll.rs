use gloo::events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use super::{query_all, smooth_scroll_to};
use crate::error::Result;
use crate::motion::anchor_scroll_top;

fn fragment_target(document: &Document, href: &str) -> Option<HtmlElement> {
    document
        .query_selector(href)
        // Invalid selectors such as a bare `#` resolve to no target.
        .ok()
        .flatten()
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
}

pub(super) fn install(document: &Document) -> Result<()> {
    for anchor in query_all(document, "a[href^=\"#\"]")? {
        let document = document.clone();
        let link = anchor.clone();

        EventListener::new_with_options(
            &anchor,
            "click",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                event.prevent_default();

                let Some(target) = link
                    .get_attribute("href")
                    .and_then(|href| fragment_target(&document, &href))
                else {
                    return;
                };

                smooth_scroll_to(anchor_scroll_top(f64::from(target.offset_top())));
            },
        )
        .forget();
    }

    Ok(())
}
