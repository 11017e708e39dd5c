//! Reveal-on-visible behavior shared by the content sections.
//!
//! A section opts its descendants in with a marker class; each marked element
//! gets the `is-visible` class the first time it intersects the viewport and
//! is then left alone. Elements already on screen at mount are revealed
//! without waiting for a scroll event.

use leptos::{html::Section, prelude::*};

#[cfg(feature = "hydrate")]
use std::time::Duration;

#[cfg(feature = "hydrate")]
use js_sys::Array;
#[cfg(feature = "hydrate")]
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
#[cfg(feature = "hydrate")]
use web_sys::{
    Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

/// Class applied to an element once it has been revealed.
pub const REVEALED_CLASS: &str = "is-visible";

/// Classes that opt an element in to reveal animation. `animate-on-scroll` is
/// the common case; the rest are the directional/scale variants used by the
/// case-study sections.
pub const REVEAL_MARKERS: [&str; 7] = [
    "animate-on-scroll",
    "animate-fade-up",
    "animate-scale-up",
    "animate-slide-left",
    "animate-slide-right",
    "animate-blur-in",
    "animate-title-reveal",
];

/// Delay before the mount-time scan, so layout can settle first.
#[cfg(feature = "hydrate")]
const SETTLE_DELAY_MS: u64 = 100;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealOptions {
    /// Fraction of the element's area that must be visible to trigger.
    pub threshold: f64,
    /// Margin applied to the viewport for the intersection test; the negative
    /// bottom component makes the reveal fire slightly before full entry.
    pub root_margin: &'static str,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: "0px 0px -50px 0px",
        }
    }
}

/// Selector matching every opted-in element.
pub fn marker_selector() -> String {
    REVEAL_MARKERS
        .iter()
        .map(|marker| format!(".{marker}"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// True when any part of a box with the given edges is inside a viewport of
/// the given height.
pub fn in_viewport(top: f64, bottom: f64, viewport_height: f64) -> bool {
    top < viewport_height && bottom > 0.0
}

/// Attach reveal-on-visible behavior to a section and its opted-in
/// descendants, with the default threshold and margin.
pub fn use_scroll_reveal(root: NodeRef<Section>) {
    use_scroll_reveal_with_options(root, RevealOptions::default());
}

/// Attach reveal-on-visible behavior to a section and its opted-in
/// descendants.
///
/// The scan runs once per mount, after a short settle delay; elements added
/// to the DOM later are not observed. Unmounting cancels the pending scan and
/// disconnects the observer so no callback touches a removed element.
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
pub fn use_scroll_reveal_with_options(root: NodeRef<Section>, options: RevealOptions) {
    #[cfg(feature = "hydrate")]
    {
        let observer: StoredValue<Option<RevealObserver>, LocalStorage> =
            StoredValue::new_local(None);
        let settle: StoredValue<Option<TimeoutHandle>, LocalStorage> =
            StoredValue::new_local(None);

        Effect::new(move |_| {
            let Some(section) = root.get() else {
                return;
            };
            if observer.with_value(|o| o.is_some()) || settle.with_value(|t| t.is_some()) {
                return;
            }
            let handle = set_timeout_with_handle(
                move || {
                    let scanned = RevealObserver::new(options);
                    scanned.scan(&section);
                    observer.set_value(Some(scanned));
                },
                Duration::from_millis(SETTLE_DELAY_MS),
            )
            .expect("should be able to schedule reveal scan");
            settle.set_value(Some(handle));
        });

        on_cleanup(move || {
            if let Some(handle) = settle.try_update_value(|t| t.take()).flatten() {
                handle.clear();
            }
            if let Some(scanned) = observer.try_update_value(|o| o.take()).flatten() {
                scanned.disconnect();
            }
        });
    }
}

#[cfg(feature = "hydrate")]
struct RevealObserver {
    observer: IntersectionObserver,
    // Kept alive for as long as the observer may fire.
    _callback: Closure<dyn Fn(Array, IntersectionObserver)>,
}

#[cfg(feature = "hydrate")]
impl RevealObserver {
    fn new(options: RevealOptions) -> Self {
        let callback = Closure::new(|entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if entry.is_intersecting() {
                    let target = entry.target();
                    let _ = target.class_list().add_1(REVEALED_CLASS);
                    // Reveal is one-time; stop watching this element.
                    observer.unobserve(&target);
                }
            }
        });

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));
        init.set_root_margin(options.root_margin);
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
                .expect("should be able to create intersection observer");

        Self {
            observer,
            _callback: callback,
        }
    }

    /// Reveal elements already on screen and start observing every opted-in
    /// element under (and including) the section root.
    fn scan(&self, section: &HtmlElement) {
        let viewport_height = window()
            .inner_height()
            .expect("should be able to read viewport height")
            .as_f64()
            .unwrap_or_default();

        if REVEAL_MARKERS
            .iter()
            .any(|marker| section.class_list().contains(marker))
        {
            self.watch(section, viewport_height);
        }

        let Ok(elements) = section.query_selector_all(&marker_selector()) else {
            return;
        };
        for index in 0..elements.length() {
            let Some(node) = elements.item(index) else {
                continue;
            };
            if let Some(element) = node.dyn_ref::<Element>() {
                self.watch(element, viewport_height);
            }
        }
    }

    fn watch(&self, element: &Element, viewport_height: f64) {
        let rect = element.get_bounding_client_rect();
        if in_viewport(rect.top(), rect.bottom(), viewport_height) {
            let _ = element.class_list().add_1(REVEALED_CLASS);
        }
        self.observer.observe(element);
    }

    fn disconnect(&self) {
        self.observer.disconnect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options_fire_slightly_early() {
        let options = RevealOptions::default();
        assert!(options.threshold > 0.0 && options.threshold < 1.0);
        assert!(options.root_margin.contains("-50px"));
    }

    #[test]
    fn test_marker_selector_lists_every_marker() {
        let selector = marker_selector();
        for marker in REVEAL_MARKERS {
            assert!(selector.contains(&format!(".{marker}")));
        }
        assert_eq!(selector.matches(", ").count(), REVEAL_MARKERS.len() - 1);
    }

    #[test]
    fn test_in_viewport() {
        // fully inside
        assert!(in_viewport(100.0, 300.0, 800.0));
        // straddling the top edge
        assert!(in_viewport(-50.0, 20.0, 800.0));
        // straddling the bottom edge
        assert!(in_viewport(750.0, 900.0, 800.0));
        // entirely above the viewport
        assert!(!in_viewport(-300.0, -10.0, 800.0));
        // entirely below the viewport
        assert!(!in_viewport(900.0, 1100.0, 800.0));
        // zero-height box sitting exactly on the fold
        assert!(!in_viewport(800.0, 800.0, 800.0));
    }
}
