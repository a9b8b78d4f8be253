use crate::error::{EffectsError, Result};

/// Elements the page markup must provide before any effect is installed.
pub const REQUIRED_ELEMENTS: &[&str] = &[
    "#theme-toggle",
    "#navbar",
    "#nav-toggle",
    "#nav-menu",
    "#scroll-progress",
    ".typing-text",
];

/// Checks every selector and reports all missing ones together.
pub fn verify(selectors: &[&str], is_present: impl Fn(&str) -> bool) -> Result<()> {
    let missing: Vec<String> = selectors
        .iter()
        .filter(|selector| !is_present(selector))
        .map(|selector| selector.to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(EffectsError::MissingElements(missing))
    }
}
