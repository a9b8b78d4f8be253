use gloo::timers::callback::Timeout;
use web_sys::{Document, HtmlElement};

use super::query_all;
use super::visibility::observe_visibility;
use crate::config::EffectsConfig;
use crate::counter::CounterAnimation;
use crate::error::Result;
use crate::reveal::RevealOptions;

fn step(mut animation: CounterAnimation, counter: HtmlElement, interval_ms: u32) {
    Timeout::new(interval_ms, move || {
        let Some(frame) = animation.next() else {
            return;
        };
        counter.set_text_content(Some(&frame));

        if !animation.is_finished() {
            step(animation, counter, interval_ms);
        }
    })
    .forget();
}

pub(super) fn install(document: &Document, config: &EffectsConfig) -> Result<()> {
    let counters = query_all(document, ".stat-number")?;
    let duration_ms = config.counter_duration_ms;
    let steps = config.counter_steps;

    observe_visibility(&counters, RevealOptions::COUNTERS, move |counter, _| {
        let text = counter.text_content().unwrap_or_default();
        let Some(animation) = CounterAnimation::parse(&text, steps) else {
            log::debug!("stat {text:?} has no number to animate");
            return;
        };

        let interval_ms = animation.step_interval_ms(duration_ms);
        step(animation, counter.clone(), interval_ms);
    })
}
