use gloo::events::EventListener;
use web_sys::{Document, Element, HtmlElement};

use super::visibility::observe_visibility;
use super::{browser_window, query_all, required, scroll_offset, set_style};
use crate::error::{EffectsError, Result};
use crate::motion::{link_targets_section, navbar_scrolled, scroll_progress};
use crate::reveal::RevealOptions;

const OPEN_CLASS: &str = "active";
const ACTIVE_LINK_CLASS: &str = "active";
const SCROLLED_CLASS: &str = "scrolled";

fn install_menu(nav_toggle: &HtmlElement, nav_menu: &HtmlElement, links: &[HtmlElement]) {
    {
        let toggle = nav_toggle.clone();
        let menu = nav_menu.clone();
        EventListener::new(nav_toggle, "click", move |_| {
            let _ = toggle.class_list().toggle(OPEN_CLASS);
            let _ = menu.class_list().toggle(OPEN_CLASS);
        })
        .forget();
    }

    for link in links {
        let toggle = nav_toggle.clone();
        let menu = nav_menu.clone();
        EventListener::new(link, "click", move |_| {
            let _ = toggle.class_list().remove_1(OPEN_CLASS);
            let _ = menu.class_list().remove_1(OPEN_CLASS);
        })
        .forget();
    }
}

fn on_scroll(root: &Element, navbar: &HtmlElement, progress: &HtmlElement) {
    let offset = scroll_offset();

    let classes = navbar.class_list();
    let _ = if navbar_scrolled(offset) {
        classes.add_1(SCROLLED_CLASS)
    } else {
        classes.remove_1(SCROLLED_CLASS)
    };

    let percent = scroll_progress(
        offset,
        f64::from(root.scroll_height()),
        f64::from(root.client_height()),
    );
    set_style(progress, "width", &format!("{percent}%"));
}

fn highlight(links: &[HtmlElement], section_id: &str) {
    for link in links {
        let classes = link.class_list();
        let _ = classes.remove_1(ACTIVE_LINK_CLASS);
        if link_targets_section(link.get_attribute("href").as_deref(), section_id) {
            let _ = classes.add_1(ACTIVE_LINK_CLASS);
        }
    }
}

pub(super) fn install(document: &Document) -> Result<()> {
    let navbar = required(document, "#navbar")?;
    let nav_toggle = required(document, "#nav-toggle")?;
    let nav_menu = required(document, "#nav-menu")?;
    let progress = required(document, "#scroll-progress")?;
    let root = document
        .document_element()
        .ok_or_else(|| EffectsError::Js("document has no root element".to_string()))?;
    let links = query_all(document, ".nav-link")?;

    install_menu(&nav_toggle, &nav_menu, &links);

    EventListener::new(&browser_window()?, "scroll", move |_| {
        on_scroll(&root, &navbar, &progress);
    })
    .forget();

    let sections = query_all(document, ".section, .hero")?;
    observe_visibility(&sections, RevealOptions::NAV_SECTIONS, move |section, _| {
        highlight(&links, &section.id());
    })
}
