use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Document, MouseEvent};

use super::{browser_window, query_all, set_style, viewport_size};
use crate::error::Result;
use crate::motion::{parallax_offset, translate};

pub(super) fn install(document: &Document) -> Result<()> {
    let orbs = query_all(document, ".gradient-orb")?;
    if orbs.is_empty() {
        return Ok(());
    }

    EventListener::new(&browser_window()?, "mousemove", move |event| {
        let Some(event) = event.dyn_ref::<MouseEvent>() else {
            return;
        };
        let client_x = f64::from(event.client_x());
        let client_y = f64::from(event.client_y());
        let viewport = viewport_size();

        for (index, orb) in orbs.iter().enumerate() {
            let offset = parallax_offset(index, client_x, client_y, viewport);
            set_style(orb, "transform", &translate(offset));
        }
    })
    .forget();

    Ok(())
}
