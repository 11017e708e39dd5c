use std::time::Duration;

use leptos::{html, prelude::*};

use crate::content::{DEVELOPER_NAME, DEVELOPER_TITLE, HERO_SUMMARY, SOCIAL_LINKS};

use super::decor::FloatingShapes;
use super::scroll::scroll_to_section;

/// How often the scroll indicator alternates between its two icons.
const ICON_CYCLE_MS: u64 = 3000;

/// Render a string as per-character spans with staggered entry animation.
pub(crate) fn entry_chars(text: &'static str, step_s: f64) -> impl IntoView {
    text.chars()
        .enumerate()
        .map(|(index, c)| {
            let delay = index as f64 * step_s;
            let c = if c == ' ' { '\u{a0}' } else { c };
            view! {
                <span
                    class="inline-block animate-name-entry"
                    style=format!("animation-delay: {delay:.2}s; animation-fill-mode: both;")
                >
                    {c.to_string()}
                </span>
            }
        })
        .collect_view()
}

#[component]
pub fn Hero() -> impl IntoView {
    let title_ref = NodeRef::<html::H2>::new();
    let (hovering, set_hovering) = signal(false);
    let (gradient_pos, set_gradient_pos) = signal((50.0_f64, 50.0_f64));
    let (show_hand, set_show_hand) = signal(false);

    // Alternate the scroll-indicator icon while mounted.
    let cycle: StoredValue<Option<IntervalHandle>, LocalStorage> = StoredValue::new_local(None);
    Effect::new(move |_| {
        if cycle.with_value(|handle| handle.is_some()) {
            return;
        }
        let handle = set_interval_with_handle(
            move || set_show_hand.update(|v| *v = !*v),
            Duration::from_millis(ICON_CYCLE_MS),
        )
        .expect("should be able to schedule icon cycle");
        cycle.set_value(Some(handle));
    });
    on_cleanup(move || {
        if let Some(handle) = cycle.try_update_value(|h| h.take()).flatten() {
            handle.clear();
        }
    });

    let on_title_move = move |ev: leptos::ev::MouseEvent| {
        let Some(el) = title_ref.get_untracked() else {
            return;
        };
        let rect = el.get_bounding_client_rect();
        if rect.width() <= 0.0 || rect.height() <= 0.0 {
            return;
        }
        let x = (ev.client_x() as f64 - rect.left()) / rect.width() * 100.0;
        let y = (ev.client_y() as f64 - rect.top()) / rect.height() * 100.0;
        set_gradient_pos.set((x, y));
    };

    let title_style = move || {
        let clip = "-webkit-background-clip: text; -webkit-text-fill-color: transparent; \
background-clip: text; color: transparent;";
        if hovering.get() {
            let (x, y) = gradient_pos.get();
            format!(
                "background-image: radial-gradient(circle 1000px at {x:.1}% {y:.1}%, \
#60a5fa, #a78bfa, #ec4899, #06b6d4, #60a5fa); {clip}"
            )
        } else {
            format!(
                "background-image: linear-gradient(90deg, #60a5fa, #a78bfa, #ec4899, \
#06b6d4, #60a5fa); background-size: 200% 100%; {clip}"
            )
        }
    };

    view! {
        <section
            id="home"
            class="min-h-screen flex items-center justify-center pt-20 relative overflow-hidden"
        >
            <FloatingShapes />

            <div class="container mx-auto px-4 sm:px-6 lg:px-8 relative z-10">
                <div class="max-w-4xl mx-auto text-center">
                    <div class="mb-6 animate-fade-in">
                        <span class="text-violet-300 font-semibold text-lg">"Hi, my name is"</span>
                    </div>

                    <h1 class="text-5xl sm:text-6xl md:text-7xl font-bold mb-4 font-heading">
                        <span class="text-white inline-block">{entry_chars(DEVELOPER_NAME, 0.05)}</span>
                    </h1>

                    <div class="animate-fade-in-up">
                        <h2
                            node_ref=title_ref
                            on:mousemove=on_title_move
                            on:mouseenter=move |_| set_hovering.set(true)
                            on:mouseleave=move |_| set_hovering.set(false)
                            class=move || {
                                format!(
                                    "text-3xl sm:text-4xl md:text-5xl font-bold mb-8 font-heading cursor-pointer transition-all duration-300 inline-block {}",
                                    if hovering.get() { "" } else { "animate-gradient-pulse" },
                                )
                            }
                            style=title_style
                        >
                            {DEVELOPER_TITLE}
                        </h2>
                    </div>

                    <p class="text-xl text-gray-200 mb-12 max-w-2xl mx-auto leading-relaxed animate-fade-in-up font-body">
                        {HERO_SUMMARY}
                    </p>

                    <div class="flex flex-col sm:flex-row items-center justify-center gap-4 mb-12 animate-fade-in-up">
                        <button
                            on:click=move |_| scroll_to_section("#projects")
                            class="w-full sm:w-auto px-8 py-4 bg-white text-purple-900 font-semibold rounded-lg hover:bg-violet-100 transition-all duration-300 shadow-lg hover:shadow-xl hover:scale-105"
                        >
                            "View My Work"
                        </button>
                        <button
                            on:click=move |_| scroll_to_section("#contact")
                            class="w-full sm:w-auto px-8 py-4 bg-transparent text-white font-semibold rounded-lg border-2 border-white hover:bg-white/10 transition-all duration-300 shadow-md hover:shadow-lg hover:scale-105"
                        >
                            "Get In Touch"
                        </button>
                    </div>

                    <div class="flex items-center justify-center space-x-6 animate-fade-in-up">
                        {SOCIAL_LINKS
                            .iter()
                            .filter(|social| social.label != "WhatsApp")
                            .map(|social| {
                                view! {
                                    <a
                                        href=social.href
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="text-gray-200 hover:text-white transition-colors duration-300 text-3xl"
                                        aria-label=social.label
                                    >
                                        <i class=social.icon></i>
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>

            // scroll indicator
            <div
                class="absolute bottom-8 left-1/2 -translate-x-1/2 flex flex-col items-center gap-3 cursor-pointer group"
                on:click=move |_| scroll_to_section("#skills")
            >
                <div class="animate-bounce relative w-10 h-10 flex items-center justify-center">
                    <div class=move || {
                        format!(
                            "absolute inset-0 flex items-center justify-center transition-all duration-500 {}",
                            if show_hand.get() { "opacity-0 scale-75" } else { "opacity-100 scale-100" },
                        )
                    }>
                        <div class="w-6 h-10 border-2 border-white/70 group-hover:border-white rounded-full flex items-start justify-center p-2 transition-colors duration-300">
                            <div class="w-1 h-3 bg-white/70 group-hover:bg-white rounded-full animate-scroll-dot transition-colors duration-300"></div>
                        </div>
                    </div>
                    <div class=move || {
                        format!(
                            "absolute inset-0 flex items-center justify-center transition-all duration-500 {}",
                            if show_hand.get() { "opacity-100 scale-100" } else { "opacity-0 scale-75" },
                        )
                    }>
                        <span class="text-3xl text-white/70 group-hover:text-white transition-colors duration-300">
                            "👇"
                        </span>
                    </div>
                </div>
                <p class="text-sm text-white/70 group-hover:text-white transition-colors duration-300 font-body">
                    "Scroll to discover more"
                </p>
            </div>
        </section>
    }
}
