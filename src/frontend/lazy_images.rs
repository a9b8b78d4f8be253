use web_sys::{Document, HtmlElement};

use super::query_all;
use super::visibility::observe_visibility;
use crate::error::Result;
use crate::lazy::{load_deferred_source, AttributeTarget};
use crate::reveal::RevealOptions;

impl AttributeTarget for HtmlElement {
    fn attribute(&self, name: &str) -> Option<String> {
        self.get_attribute(name)
    }

    fn put_attribute(&self, name: &str, value: &str) {
        let _ = self.set_attribute(name, value);
    }

    fn drop_attribute(&self, name: &str) {
        let _ = self.remove_attribute(name);
    }
}

pub(super) fn install(document: &Document) -> Result<()> {
    let images = query_all(document, "img[data-src]")?;

    observe_visibility(&images, RevealOptions::LAZY_IMAGES, |image, _| {
        load_deferred_source(image);
    })
}
