use leptos::prelude::*;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions};

/// Extract the element id from an in-page anchor href.
pub fn anchor_id(href: &str) -> Option<&str> {
    let id = href.strip_prefix('#')?;
    if id.is_empty() {
        None
    } else {
        Some(id)
    }
}

/// Smooth-scroll the viewport to the section an anchor points at. A missing
/// target is a silent no-op.
pub fn scroll_to_section(href: &str) {
    let Some(id) = anchor_id(href) else {
        return;
    };
    if let Some(element) = document().get_element_by_id(id) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

/// Smooth-scroll back to the top of the page.
pub fn scroll_to_top() {
    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(ScrollBehavior::Smooth);
    window().scroll_to_with_scroll_to_options(&options);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_id_parses_fragments() {
        assert_eq!(anchor_id("#skills"), Some("skills"));
        assert_eq!(anchor_id("#project-reservo"), Some("project-reservo"));
    }

    #[test]
    fn test_anchor_id_rejects_non_fragments() {
        assert_eq!(anchor_id(""), None);
        assert_eq!(anchor_id("#"), None);
        assert_eq!(anchor_id("skills"), None);
        assert_eq!(anchor_id("/blog#skills"), None);
    }
}
