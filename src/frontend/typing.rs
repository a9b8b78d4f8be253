use gloo::timers::callback::Timeout;
use web_sys::{Document, HtmlElement};

use super::required;
use crate::config::EffectsConfig;
use crate::error::Result;
use crate::typing::TypingMachine;

fn schedule(mut machine: TypingMachine, element: HtmlElement, delay_ms: u32) {
    Timeout::new(delay_ms, move || {
        let frame = machine.tick();
        element.set_text_content(Some(&frame.text));
        schedule(machine, element, frame.delay_ms);
    })
    .forget();
}

pub(super) fn install(document: &Document, config: &EffectsConfig) -> Result<()> {
    let element = required(document, ".typing-text")?;

    let Some(machine) = TypingMachine::new(&config.phrases, config.typing) else {
        log::warn!("no phrases to type, typing effect skipped");
        return Ok(());
    };

    schedule(machine, element, config.typing_start_ms);
    Ok(())
}
