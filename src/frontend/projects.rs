use gloo::events::EventListener;
use web_sys::{Document, HtmlElement};

use super::{query_all, set_style};
use crate::error::Result;
use crate::motion::project_visible;

const SHOW_ALL: &str = "all";

pub(super) fn filter_projects(cards: &[HtmlElement], filter: &str) {
    for card in cards {
        let category = card.get_attribute("data-category");
        let display = if project_visible(filter, category.as_deref()) {
            "flex"
        } else {
            "none"
        };
        set_style(card, "display", display);
    }
}

pub(super) fn install(document: &Document) -> Result<()> {
    let buttons = query_all(document, "[data-filter]")?;
    if buttons.is_empty() {
        return Ok(());
    }
    let cards = query_all(document, ".project-card")?;

    for button in &buttons {
        let button_handle = button.clone();
        let buttons = buttons.clone();
        let cards = cards.clone();

        EventListener::new(button, "click", move |_| {
            let filter = button_handle
                .get_attribute("data-filter")
                .unwrap_or_else(|| SHOW_ALL.to_string());
            filter_projects(&cards, &filter);

            for other in &buttons {
                let _ = other.class_list().remove_1("active");
            }
            let _ = button_handle.class_list().add_1("active");
        })
        .forget();
    }

    Ok(())
}
