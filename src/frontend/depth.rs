use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, MouseEvent};

use super::visibility::observe_visibility;
use super::{query_all, set_style};
use crate::error::Result;
use crate::motion::{CardRect, Tilt, NEUTRAL_TILT};
use crate::reveal::RevealOptions;

const ENTER_CLASS: &str = "section-3d-enter";
const ACTIVE_CLASS: &str = "section-3d-active";
const TILT_SELECTOR: &str = ".project-card, .article-card, .repo-card";

pub(super) fn install_sections(document: &Document) -> Result<()> {
    let sections = query_all(document, ".section")?;

    for section in &sections {
        let _ = section.class_list().add_1(ENTER_CLASS);
    }

    observe_visibility(&sections, RevealOptions::SECTIONS_3D, |section, _| {
        let classes = section.class_list();
        let _ = classes.remove_1(ENTER_CLASS);
        let _ = classes.add_1(ACTIVE_CLASS);
    })
}

fn tilt_towards(card: &HtmlElement, event: &MouseEvent) {
    let rect = card.get_bounding_client_rect();
    let tilt = Tilt::at_pointer(
        CardRect {
            left: rect.left(),
            top: rect.top(),
            width: rect.width(),
            height: rect.height(),
        },
        f64::from(event.client_x()),
        f64::from(event.client_y()),
    );

    set_style(card, "transform", &tilt.transform());
}

pub(super) fn install_tilt(document: &Document) -> Result<()> {
    for card in query_all(document, TILT_SELECTOR)? {
        {
            let card_handle = card.clone();
            EventListener::new(&card, "mousemove", move |event| {
                if let Some(event) = event.dyn_ref::<MouseEvent>() {
                    tilt_towards(&card_handle, event);
                }
            })
            .forget();
        }

        let card_handle = card.clone();
        EventListener::new(&card, "mouseleave", move |_| {
            set_style(&card_handle, "transform", NEUTRAL_TILT);
        })
        .forget();
    }

    Ok(())
}
