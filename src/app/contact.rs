use std::time::Duration;

use leptos::{html, prelude::*};
use serde::Serialize;
use thiserror::Error;

use crate::content::{CONTACT_EMAIL, CONTACT_LOCATION, SOCIAL_LINKS};

use super::reveal::use_scroll_reveal;

/// Simulated delivery delay before the form flips to "submitted".
pub const SUBMIT_DELAY_MS: u64 = 1500;
/// How long the "submitted" state is shown before the form resets.
pub const RESET_DELAY_MS: u64 = 3000;

/// Lifecycle of the simulated submission. No network is involved; the
/// transitions are driven by timers only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormStatus {
    #[default]
    Idle,
    Submitting,
    Submitted,
}

impl FormStatus {
    /// Idle -> Submitting; any other state ignores the submit.
    pub fn submit(self) -> Self {
        match self {
            FormStatus::Idle => FormStatus::Submitting,
            other => other,
        }
    }

    /// Submitting -> Submitted, once the simulated delay elapses.
    pub fn complete(self) -> Self {
        match self {
            FormStatus::Submitting => FormStatus::Submitted,
            other => other,
        }
    }

    /// Submitted -> Idle, after the reset delay.
    pub fn reset(self) -> Self {
        match self {
            FormStatus::Submitted => FormStatus::Idle,
            other => other,
        }
    }
}

/// Transient draft held in component memory; cleared after the simulated
/// submit, never sent anywhere.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("name is required")]
    MissingName,
    #[error("email is required")]
    MissingEmail,
    #[error("message is required")]
    MissingMessage,
}

impl ContactDraft {
    /// Presence checks only; anything beyond that is left to the browser's
    /// native form validation.
    pub fn validate(&self) -> Result<(), DraftError> {
        if self.name.trim().is_empty() {
            return Err(DraftError::MissingName);
        }
        if self.email.trim().is_empty() {
            return Err(DraftError::MissingEmail);
        }
        if self.message.trim().is_empty() {
            return Err(DraftError::MissingMessage);
        }
        Ok(())
    }
}

const FIELD_CLASS: &str = "w-full px-4 py-3 rounded-md border border-white/10 bg-white/[0.03] \
text-white placeholder-white/30 focus:outline-none focus:ring-2 focus:ring-violet-500 \
focus:border-violet-500 transition-all duration-200";

#[component]
pub fn Contact() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    use_scroll_reveal(section_ref);

    let name_ref = NodeRef::<html::Input>::new();
    let email_ref = NodeRef::<html::Input>::new();
    let message_ref = NodeRef::<html::Textarea>::new();
    let (status, set_status) = signal(FormStatus::default());
    let timers: StoredValue<Vec<TimeoutHandle>, LocalStorage> = StoredValue::new_local(Vec::new());

    on_cleanup(move || {
        timers.try_update_value(|handles| {
            for handle in handles.drain(..) {
                handle.clear();
            }
        });
    });

    let clear_fields = move || {
        if let Some(el) = name_ref.get_untracked() {
            el.set_value("");
        }
        if let Some(el) = email_ref.get_untracked() {
            el.set_value("");
        }
        if let Some(el) = message_ref.get_untracked() {
            el.set_value("");
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if status.get_untracked() != FormStatus::Idle {
            return;
        }

        let draft = ContactDraft {
            name: name_ref
                .get_untracked()
                .map(|el| el.value())
                .unwrap_or_default(),
            email: email_ref
                .get_untracked()
                .map(|el| el.value())
                .unwrap_or_default(),
            message: message_ref
                .get_untracked()
                .map(|el| el.value())
                .unwrap_or_default(),
        };
        if let Err(err) = draft.validate() {
            // Native `required` validation normally blocks this path.
            log::warn!("contact form rejected: {err}");
            return;
        }

        set_status.update(|s| *s = s.submit());
        let payload = serde_json::to_string(&draft).unwrap_or_default();

        let deliver = set_timeout_with_handle(
            move || {
                // Simulated delivery: log the payload, nothing leaves the page.
                log::info!("contact form submitted: {payload}");
                set_status.update(|s| *s = s.complete());
                let reset = set_timeout_with_handle(
                    move || {
                        set_status.update(|s| *s = s.reset());
                        clear_fields();
                    },
                    Duration::from_millis(RESET_DELAY_MS),
                )
                .expect("should be able to schedule form reset");
                timers.update_value(|handles| handles.push(reset));
            },
            Duration::from_millis(SUBMIT_DELAY_MS),
        )
        .expect("should be able to schedule form submit");
        timers.update_value(|handles| handles.push(deliver));
    };

    let button_label = move || match status.get() {
        FormStatus::Idle => "Send Message",
        FormStatus::Submitting => "Sending...",
        FormStatus::Submitted => "Message Sent ✓",
    };

    view! {
        <section
            node_ref=section_ref
            id="contact"
            class="relative py-[clamp(5rem,15vh,10rem)] overflow-hidden"
        >
            // background and atmosphere
            <div class="absolute inset-0 bg-gradient-to-br from-[#0a0a0f] via-[#0d0a14] to-[#0f0a18] z-0"></div>
            <div
                class="absolute top-1/4 -right-64 w-[500px] h-[500px] bg-violet-500/10 rounded-full blur-3xl animate-pulse z-0"
                style="animation-duration: 8s"
            ></div>
            <div
                class="absolute bottom-1/4 -left-64 w-[500px] h-[500px] bg-blue-500/10 rounded-full blur-3xl animate-pulse z-0"
                style="animation-duration: 10s; animation-delay: 2s"
            ></div>

            <div class="container mx-auto px-6 lg:px-8 relative z-20">
                <div class="max-w-6xl mx-auto grid lg:grid-cols-2 gap-[clamp(3rem,8vh,6rem)] items-start">
                    // direct communication
                    <div class="flex flex-col gap-10 relative animate-on-scroll">
                        <div class="absolute -top-12 -left-12 w-32 h-32 border border-white/5 rotate-45 hidden md:block"></div>

                        <div class="flex flex-col gap-3">
                            <span class="text-white/20 text-xs uppercase tracking-[0.4em]">
                                "Section 01"
                            </span>
                            <h2 class="text-6xl md:text-8xl font-bold font-heading leading-none">
                                <span class="text-white">"Get in"</span>
                                <br />
                                <span class="text-white/40">"Touch"</span>
                            </h2>
                        </div>

                        <div class="flex flex-col gap-8">
                            <a
                                href=format!("mailto:{CONTACT_EMAIL}")
                                class="group flex flex-col gap-2 pl-8 border-l-2 border-white/5 hover:border-white/20 transition-all duration-500"
                            >
                                <div class="text-white/30 text-xs uppercase tracking-widest">
                                    "Email"
                                </div>
                                <div class="text-xl md:text-2xl text-white group-hover:translate-x-3 transition-transform duration-500 font-body">
                                    {CONTACT_EMAIL}
                                </div>
                            </a>

                            {SOCIAL_LINKS
                                .iter()
                                .map(|social| {
                                    view! {
                                        <a
                                            href=social.href
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            class="group flex flex-col gap-2 pl-8 border-l-2 border-white/5 hover:border-white/20 transition-all duration-500"
                                        >
                                            <div class="text-white/30 text-xs uppercase tracking-widest">
                                                {social.label}
                                            </div>
                                            <div class="text-xl md:text-2xl text-white group-hover:translate-x-3 transition-transform duration-500 font-body">
                                                "View Profile →"
                                            </div>
                                        </a>
                                    }
                                })
                                .collect_view()}

                            <div class="flex flex-col gap-2 pl-8 border-l-2 border-white/5">
                                <div class="text-white/30 text-xs uppercase tracking-widest">
                                    "Location"
                                </div>
                                <div class="text-xl md:text-2xl text-white/70 font-body">
                                    {CONTACT_LOCATION}
                                </div>
                            </div>
                        </div>
                    </div>

                    // message form
                    <div class="flex flex-col gap-10 relative animate-on-scroll stagger-1">
                        <div class="absolute -bottom-12 -right-12 w-32 h-32 border border-white/5 rotate-12 hidden md:block"></div>

                        <div class="flex flex-col gap-3">
                            <span class="text-white/20 text-xs uppercase tracking-[0.4em]">
                                "Section 02"
                            </span>
                            <h2 class="text-6xl md:text-8xl font-bold font-heading leading-none">
                                <span class="text-white/40">"Send a"</span>
                                <br />
                                <span class="text-white">"Message"</span>
                            </h2>
                        </div>

                        <form class="flex flex-col gap-6" on:submit=on_submit>
                            <div class="flex flex-col gap-2">
                                <label for="contact_name" class="text-white/30 text-xs uppercase tracking-widest">
                                    "Name"
                                </label>
                                <input
                                    id="contact_name"
                                    node_ref=name_ref
                                    type="text"
                                    required
                                    placeholder="Your name"
                                    class=FIELD_CLASS
                                />
                            </div>
                            <div class="flex flex-col gap-2">
                                <label for="contact_email" class="text-white/30 text-xs uppercase tracking-widest">
                                    "Email"
                                </label>
                                <input
                                    id="contact_email"
                                    node_ref=email_ref
                                    type="email"
                                    required
                                    placeholder="you@example.com"
                                    class=FIELD_CLASS
                                />
                            </div>
                            <div class="flex flex-col gap-2">
                                <label for="contact_message" class="text-white/30 text-xs uppercase tracking-widest">
                                    "Message"
                                </label>
                                <textarea
                                    id="contact_message"
                                    node_ref=message_ref
                                    required
                                    rows=5
                                    placeholder="What would you like to build?"
                                    class=FIELD_CLASS
                                ></textarea>
                            </div>
                            <button
                                type="submit"
                                disabled=move || status.get() != FormStatus::Idle
                                class="self-start px-8 py-4 bg-white text-purple-900 font-semibold rounded-lg hover:bg-violet-100 transition-all duration-300 shadow-lg disabled:opacity-60 disabled:cursor-not-allowed"
                            >
                                {button_label}
                            </button>
                        </form>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_draft() -> ContactDraft {
        ContactDraft {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "Hello!".to_string(),
        }
    }

    #[test]
    fn test_status_happy_path() {
        let status = FormStatus::default();
        assert_eq!(status, FormStatus::Idle);

        let status = status.submit();
        assert_eq!(status, FormStatus::Submitting);

        let status = status.complete();
        assert_eq!(status, FormStatus::Submitted);

        let status = status.reset();
        assert_eq!(status, FormStatus::Idle);
    }

    #[test]
    fn test_status_ignores_out_of_order_transitions() {
        // a second submit while in flight changes nothing
        assert_eq!(FormStatus::Submitting.submit(), FormStatus::Submitting);
        assert_eq!(FormStatus::Submitted.submit(), FormStatus::Submitted);

        // complete/reset only apply to their own predecessor
        assert_eq!(FormStatus::Idle.complete(), FormStatus::Idle);
        assert_eq!(FormStatus::Idle.reset(), FormStatus::Idle);
        assert_eq!(FormStatus::Submitted.complete(), FormStatus::Submitted);
        assert_eq!(FormStatus::Submitting.reset(), FormStatus::Submitting);
    }

    #[test]
    fn test_validate_accepts_full_draft() {
        assert_eq!(full_draft().validate(), Ok(()));
    }

    #[test]
    fn test_validate_requires_every_field() {
        let mut draft = full_draft();
        draft.name = String::new();
        assert_eq!(draft.validate(), Err(DraftError::MissingName));

        let mut draft = full_draft();
        draft.email = "   ".to_string();
        assert_eq!(draft.validate(), Err(DraftError::MissingEmail));

        let mut draft = full_draft();
        draft.message = String::new();
        assert_eq!(draft.validate(), Err(DraftError::MissingMessage));
    }

    #[test]
    fn test_fields_are_independent() {
        // one populated field never satisfies another
        let draft = ContactDraft {
            name: "Ada".to_string(),
            ..ContactDraft::default()
        };
        assert_eq!(draft.validate(), Err(DraftError::MissingEmail));
    }
}
