use gloo::timers::callback::Timeout;
use web_sys::Document;

use super::visibility::observe_visibility;
use super::{query_all, set_style};
use crate::error::Result;
use crate::reveal::{stagger_delay_ms, RevealOptions};

const CARD_SELECTOR: &str = ".stat-card, .cert-item, .publication-card, .timeline-item, \
                             .project-card, .article-card, .repo-card, .contact-card";

pub(super) fn install(document: &Document) -> Result<()> {
    let cards = query_all(document, CARD_SELECTOR)?;

    for card in &cards {
        set_style(card, "opacity", "0");
        set_style(card, "transform", "translateY(30px)");
        set_style(card, "transition", "opacity 0.6s ease, transform 0.6s ease");
    }

    observe_visibility(&cards, RevealOptions::CARDS, |card, index| {
        let card = card.clone();
        Timeout::new(stagger_delay_ms(index), move || {
            set_style(&card, "opacity", "1");
            set_style(&card, "transform", "translateY(0)");
        })
        .forget();
    })
}
