//! Sentinel visibility detection for infinite scroll.
//!
//! The rest of the page only ever learns "the sentinel became visible";
//! how visibility is detected stays behind [`on_sentinel_visible`], wired
//! to `IntersectionObserver` in the browser and inert elsewhere.

/// Decide whether a sentinel sighting should reveal another page.
///
/// Another page is revealed only while the displayed list is still shorter
/// than the full filtered result set. Repeated sightings while a reveal is
/// underway are harmless: the page advance is synchronous over
/// already-fetched data.
pub fn should_load_more(displayed_len: usize, matching_len: usize) -> bool {
    displayed_len < matching_len
}

/// Handle keeping a sentinel subscription alive.
///
/// Dropping the guard disconnects the underlying observer.
pub struct SentinelGuard {
    #[cfg(target_arch = "wasm32")]
    observer: web_sys::IntersectionObserver,
    #[cfg(target_arch = "wasm32")]
    _on_entries: wasm_bindgen::closure::Closure<dyn FnMut(js_sys::Array)>,
}

#[cfg(target_arch = "wasm32")]
impl Drop for SentinelGuard {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Invoke `callback` whenever `element` enters the viewport.
///
/// Returns `None` if the platform observer cannot be constructed.
#[cfg(target_arch = "wasm32")]
pub fn on_sentinel_visible(
    element: &web_sys::Element,
    callback: impl Fn() + 'static,
) -> Option<SentinelGuard> {
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;

    let on_entries = Closure::<dyn FnMut(js_sys::Array)>::new(move |entries: js_sys::Array| {
        for entry in entries.iter() {
            let entry: web_sys::IntersectionObserverEntry = entry.unchecked_into();
            if entry.is_intersecting() {
                callback();
            }
        }
    });

    let observer =
        web_sys::IntersectionObserver::new(on_entries.as_ref().unchecked_ref()).ok()?;
    observer.observe(element);

    Some(SentinelGuard {
        observer,
        _on_entries: on_entries,
    })
}

/// Host-side stand-in; there is no viewport to observe.
#[cfg(not(target_arch = "wasm32"))]
pub fn on_sentinel_visible(
    _element: &web_sys::Element,
    _callback: impl Fn() + 'static,
) -> Option<SentinelGuard> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loads_more_while_matches_remain() {
        assert!(should_load_more(10, 25));
        assert!(should_load_more(0, 1));
    }

    #[test]
    fn test_stops_when_everything_is_displayed() {
        assert!(!should_load_more(25, 25));
        assert!(!should_load_more(0, 0));
    }

    #[test]
    fn test_tolerates_overshoot() {
        // A stale sighting after a filter change narrows the match set.
        assert!(!should_load_more(30, 12));
    }
}
