mod counters;
mod debounce;
mod depth;
mod lazy_images;
mod navigation;
mod parallax;
mod projects;
mod reveal;
mod scroll_top;
mod smooth_scroll;
mod theme;
mod typing;
mod visibility;

use gloo::timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{window, Document, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

use crate::config::{EffectsConfig, CONFIG_ELEMENT_ID};
use crate::error::{EffectsError, Result};
use crate::manifest::{self, REQUIRED_ELEMENTS};

const FADE_IN_DELAY_MS: u32 = 100;

pub(crate) fn browser_window() -> Result<Window> {
    window().ok_or_else(|| EffectsError::Js("window unavailable".to_string()))
}

fn browser_document() -> Result<Document> {
    browser_window()?
        .document()
        .ok_or_else(|| EffectsError::Js("document unavailable".to_string()))
}

pub(crate) fn query_all(document: &Document, selector: &str) -> Result<Vec<HtmlElement>> {
    let nodes = document.query_selector_all(selector)?;

    Ok((0..nodes.length())
        .filter_map(|index| nodes.item(index))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect())
}

pub(crate) fn required(document: &Document, selector: &str) -> Result<HtmlElement> {
    document
        .query_selector(selector)?
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
        .ok_or_else(|| EffectsError::MissingElements(vec![selector.to_string()]))
}

pub(crate) fn set_style(element: &HtmlElement, property: &str, value: &str) {
    let _ = element.style().set_property(property, value);
}

pub(crate) fn scroll_offset() -> f64 {
    window()
        .and_then(|w| w.page_y_offset().ok())
        .unwrap_or(0.0)
}

pub(crate) fn viewport_size() -> (f64, f64) {
    let Some(win) = window() else {
        return (1280.0, 720.0);
    };

    let width = win
        .inner_width()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(1280.0);
    let height = win
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(720.0);

    (width, height)
}

pub(crate) fn smooth_scroll_to(top: f64) {
    let Some(win) = window() else {
        return;
    };

    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    win.scroll_to_with_scroll_to_options(&options);
}

fn load_config(document: &Document) -> (EffectsConfig, Option<EffectsError>) {
    let Some(source) = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|element| element.text_content())
    else {
        return (EffectsConfig::default(), None);
    };

    match EffectsConfig::from_json(&source) {
        Ok(config) => (config, None),
        Err(error) => (EffectsConfig::default(), Some(error)),
    }
}

fn install(document: &Document, config: &EffectsConfig) -> Result<()> {
    manifest::verify(REQUIRED_ELEMENTS, |selector| {
        document.query_selector(selector).ok().flatten().is_some()
    })?;

    theme::install(document)?;
    navigation::install(document)?;
    smooth_scroll::install(document)?;
    typing::install(document, config)?;
    reveal::install(document)?;
    depth::install_sections(document)?;
    depth::install_tilt(document)?;
    counters::install(document, config)?;
    parallax::install(document)?;
    projects::install(document)?;
    lazy_images::install(document)?;
    scroll_top::mount(document)?;
    Ok(())
}

fn fade_in_body(document: &Document) {
    let Some(body) = document.body() else {
        return;
    };

    set_style(&body, "opacity", "0");
    Timeout::new(FADE_IN_DELAY_MS, move || {
        set_style(&body, "transition", "opacity 0.5s ease");
        set_style(&body, "opacity", "1");
    })
    .forget();
}

fn greet(config: &EffectsConfig) {
    log::info!("Portfolio loaded successfully!");
    log::info!("Hello there!");
    log::info!("Looking for something? Feel free to reach out!");
    if let Some(email) = config.contact_email.as_deref() {
        log::info!("Email: {email}");
    }
    if let Some(url) = config.contact_url.as_deref() {
        log::info!("Profile: {url}");
    }
}

pub fn run() {
    std::panic::set_hook(Box::new(console_error_panic_hook::hook));

    let document = match browser_document() {
        Ok(document) => document,
        Err(error) => {
            let _ = console_log::init_with_level(log::Level::Error);
            log::error!("page effects disabled: {error}");
            return;
        }
    };

    let (config, config_error) = load_config(&document);
    let _ = console_log::init_with_level(config.log_level);
    if let Some(error) = config_error {
        log::warn!("{error}; using default effects config");
    }

    // The palette does not depend on the rest of the markup.
    theme::apply_initial(&document);

    if let Err(error) = install(&document, &config) {
        log::error!("page effects disabled: {error}");
        return;
    }

    fade_in_body(&document);
    greet(&config);
}
