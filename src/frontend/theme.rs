use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use js_sys::Date;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{window, Document, HtmlDocument, HtmlElement};

use super::{required, set_style};
use crate::error::Result;
use crate::theme::{self, Theme, ThemeHost, THEME_ATTRIBUTE};

const SPIN_MS: u32 = 300;
const MS_PER_DAY: f64 = 24.0 * 60.0 * 60.0 * 1000.0;

pub(crate) struct BrowserThemeHost {
    document: Document,
}

impl BrowserThemeHost {
    pub(crate) fn new(document: &Document) -> Self {
        Self {
            document: document.clone(),
        }
    }
}

impl ThemeHost for BrowserThemeHost {
    fn cookies(&self) -> String {
        self.document
            .dyn_ref::<HtmlDocument>()
            .and_then(|document| document.cookie().ok())
            .unwrap_or_default()
    }

    fn write_cookie(&self, cookie: &str) {
        if let Some(document) = self.document.dyn_ref::<HtmlDocument>() {
            let _ = document.set_cookie(cookie);
        }
    }

    fn expiry_after_days(&self, ttl_days: u32) -> String {
        let expires_at = Date::now() + f64::from(ttl_days) * MS_PER_DAY;
        Date::new(&JsValue::from_f64(expires_at)).to_utc_string().into()
    }

    fn prefers_dark(&self) -> bool {
        window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .map(|mq| mq.matches())
            .unwrap_or(false)
    }

    fn root_theme(&self) -> Option<String> {
        self.document
            .document_element()?
            .get_attribute(THEME_ATTRIBUTE)
    }

    fn set_root_theme(&self, theme: Theme) {
        if let Some(root) = self.document.document_element() {
            let _ = root.set_attribute(THEME_ATTRIBUTE, theme.as_str());
        }
    }
}

pub(super) fn apply_initial(document: &Document) {
    let theme = theme::initialize(&BrowserThemeHost::new(document));
    log::debug!("initial theme: {}", theme.as_str());
}

fn spin(button: &HtmlElement) {
    set_style(button, "transform", "rotate(360deg)");

    let button = button.clone();
    Timeout::new(SPIN_MS, move || set_style(&button, "transform", "")).forget();
}

pub(super) fn install(document: &Document) -> Result<()> {
    let toggle_button = required(document, "#theme-toggle")?;
    let host = BrowserThemeHost::new(document);
    let button = toggle_button.clone();

    EventListener::new(&toggle_button, "click", move |_| {
        let next = theme::toggle(&host);
        log::debug!("theme switched to {}", next.as_str());
        spin(&button);
    })
    .forget();

    Ok(())
}
