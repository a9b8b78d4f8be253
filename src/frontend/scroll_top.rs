use gloo::events::EventListener;
use web_sys::{window, Document, MouseEvent};
use yew::prelude::*;

use super::{scroll_offset, smooth_scroll_to};
use crate::error::{EffectsError, Result};
use crate::motion::scroll_top_visible;

const BUTTON_STYLE: &str = "position: fixed; bottom: 30px; right: 30px; width: 50px; height: 50px; \
     border-radius: 50%; \
     background: linear-gradient(135deg, var(--color-accent-cyan) 0%, var(--color-accent-purple) 100%); \
     border: none; color: white; font-size: 20px; cursor: pointer; \
     transition: all 0.3s ease; z-index: 999; box-shadow: 0 4px 16px rgba(0, 217, 255, 0.3);";

fn button_style(visible: bool, hovered: bool) -> String {
    let (opacity, visibility) = if visible { ("1", "visible") } else { ("0", "hidden") };
    let transform = if hovered {
        "translateY(-5px) scale(1.1)"
    } else {
        "translateY(0) scale(1)"
    };

    format!("{BUTTON_STYLE} opacity: {opacity}; visibility: {visibility}; transform: {transform};")
}

#[function_component(ScrollToTop)]
fn scroll_to_top() -> Html {
    let visible = use_state_eq(|| scroll_top_visible(scroll_offset()));
    let hovered = use_state_eq(|| false);

    {
        let visible = visible.clone();
        use_effect_with((), move |_| {
            let listener = window().map(|win| {
                EventListener::new(&win, "scroll", move |_| {
                    visible.set(scroll_top_visible(scroll_offset()));
                })
            });
            move || drop(listener)
        });
    }

    let onclick = Callback::from(|_: MouseEvent| smooth_scroll_to(0.0));

    let onmouseenter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };

    let onmouseleave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(false))
    };

    html! {
        <button
            class="scroll-to-top"
            type="button"
            aria-label="Scroll to top"
            style={button_style(*visible, *hovered)}
            {onclick}
            {onmouseenter}
            {onmouseleave}
        >
            <i class="fas fa-arrow-up"></i>
        </button>
    }
}

/// Appends a host node to `<body>` and renders the button into it.
pub(super) fn mount(document: &Document) -> Result<()> {
    let body = document
        .body()
        .ok_or_else(|| EffectsError::Js("document has no body".to_string()))?;
    let host = document.create_element("div")?;
    host.set_class_name("scroll-to-top-host");
    body.append_child(&host)?;

    yew::Renderer::<ScrollToTop>::with_root(host).render();
    Ok(())
}
