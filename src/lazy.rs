pub const DEFERRED_SOURCE: &str = "data-src";

pub trait AttributeTarget {
    fn attribute(&self, name: &str) -> Option<String>;
    fn put_attribute(&self, name: &str, value: &str);
    fn drop_attribute(&self, name: &str);
}

/// Moves `data-src` into `src`. Returns `false` when the image has no
/// deferred source left to load.
pub fn load_deferred_source(image: &impl AttributeTarget) -> bool {
    let Some(source) = image.attribute(DEFERRED_SOURCE) else {
        return false;
    };

    image.put_attribute("src", &source);
    image.drop_attribute(DEFERRED_SOURCE);
    true
}
