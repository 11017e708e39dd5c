use leptos::prelude::*;

/// Ambient flag controlling whether supplementary technical content (the
/// case-study architecture overlays) is shown.
///
/// Exactly one writer exists: the header toggle. Any descendant may read it
/// through [`use_developer_mode`]. The value is not persisted; a reload
/// starts over at `false`.
#[derive(Debug, Clone, Copy)]
pub struct DeveloperMode {
    inner: RwSignal<bool>,
}

impl DeveloperMode {
    fn new() -> Self {
        Self {
            inner: RwSignal::new(false),
        }
    }

    pub fn get(&self) -> bool {
        self.inner.get()
    }

    pub fn set(&self, value: bool) {
        self.inner.set(value);
    }

    pub fn toggle(&self) {
        self.inner.update(|v| *v = !*v);
    }
}

/// Install the developer-mode context at the composition root and mirror its
/// value onto the root element as `data-developer-mode` for styling hooks.
pub fn provide_developer_mode() {
    let mode = DeveloperMode::new();
    provide_context(mode);

    Effect::new(move |_| {
        let value = if mode.get() { "true" } else { "false" };
        if let Some(root) = document().document_element() {
            root.set_attribute("data-developer-mode", value)
                .expect("should be able to set root attribute");
        }
    });
}

/// Read the ambient developer-mode flag.
///
/// Panics when called outside the provider's subtree; that is a wiring bug in
/// the component tree, not a recoverable runtime condition.
pub fn use_developer_mode() -> DeveloperMode {
    expect_context::<DeveloperMode>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_developer_mode_round_trips() {
        let owner = Owner::new();
        owner.set();

        let mode = DeveloperMode::new();
        assert!(!mode.get());

        mode.toggle();
        assert!(mode.get());
        mode.toggle();
        assert!(!mode.get());

        mode.set(true);
        assert!(mode.get());
        mode.set(false);
        assert!(!mode.get());
    }
}
