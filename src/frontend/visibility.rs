use js_sys::Array;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::error::Result;
use crate::reveal::{Admission, RevealLedger, RevealOptions};

/// Calls `on_reveal` with each target that becomes visible and its position in
/// the observer batch. With `options.once` a target is unobserved after its
/// first reveal. The observer lives for the rest of the page session.
pub(crate) fn observe_visibility<F>(
    targets: &[HtmlElement],
    options: RevealOptions,
    mut on_reveal: F,
) -> Result<()>
where
    F: FnMut(&HtmlElement, usize) + 'static,
{
    if targets.is_empty() {
        return Ok(());
    }

    let mut ledger = RevealLedger::new(options.once);
    for target in targets {
        ledger.track(target.clone());
    }

    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            for (index, entry) in entries.iter().enumerate() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let Ok(target) = entry.target().dyn_into::<HtmlElement>() else {
                    continue;
                };

                let admission = ledger.admit(&target, entry.is_intersecting());
                if let Admission::Reveal { unobserve } = admission {
                    if unobserve {
                        observer.unobserve(&target);
                    }
                    on_reveal(&target, index);
                }
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.threshold));
    init.set_root_margin(options.root_margin);

    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    for target in targets {
        observer.observe(target);
    }

    callback.forget();
    Ok(())
}
