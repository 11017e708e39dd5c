use leptos::prelude::*;
use leptos_use::use_window_scroll;

use crate::content::{LOGO_INITIALS, NAV_LINKS};

use super::mode::use_developer_mode;
use super::scroll::scroll_to_section;

/// Scroll depth at which the bar switches to its condensed styling.
const SCROLLED_THRESHOLD_PX: f64 = 50.0;

#[component]
pub fn Header() -> impl IntoView {
    let (_scroll_x, scroll_y) = use_window_scroll();
    let scrolled = Memo::new(move |_| scroll_y.get() > SCROLLED_THRESHOLD_PX);
    let (menu_open, set_menu_open) = signal(false);
    let mode = use_developer_mode();

    let navigate = move |href: &'static str| {
        set_menu_open.set(false);
        scroll_to_section(href);
    };

    view! {
        <header class=move || {
            format!(
                "fixed top-0 left-0 right-0 z-50 transition-all duration-300 {}",
                if scrolled.get() {
                    "bg-black/30 backdrop-blur-md shadow-lg py-4"
                } else {
                    "bg-black/20 backdrop-blur-sm py-6"
                },
            )
        }>
            <nav class="container mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between">
                    <a
                        href="#home"
                        on:click=move |ev| {
                            ev.prevent_default();
                            navigate("#home");
                        }
                        class="text-2xl font-bold bg-gradient-to-r from-purple-400 via-pink-400 to-cyan-400 bg-clip-text text-transparent hover:opacity-80 transition-opacity"
                    >
                        {LOGO_INITIALS}
                    </a>

                    <div class="hidden md:flex items-center space-x-8">
                        {NAV_LINKS
                            .iter()
                            .map(|link| {
                                let href = link.href;
                                view! {
                                    <a
                                        href=href
                                        on:click=move |ev| {
                                            ev.prevent_default();
                                            navigate(href);
                                        }
                                        class="text-white hover:text-violet-300 transition-colors font-medium"
                                    >
                                        {link.label}
                                    </a>
                                }
                            })
                            .collect_view()}
                        <button
                            on:click=move |_| mode.toggle()
                            class=move || {
                                format!(
                                    "px-2 py-1 rounded-md border font-mono text-sm transition-colors {}",
                                    if mode.get() {
                                        "border-violet-400 text-violet-300 bg-violet-500/10"
                                    } else {
                                        "border-white/20 text-white/60 hover:text-white"
                                    },
                                )
                            }
                            aria-pressed=move || mode.get().to_string()
                            title="Toggle developer mode"
                        >
                            "</>"
                        </button>
                    </div>

                    <button
                        on:click=move |_| set_menu_open.update(|v| *v = !*v)
                        class="md:hidden text-white hover:text-violet-300 transition-colors text-2xl"
                        aria-label="Toggle menu"
                    >
                        {move || if menu_open.get() { "✕" } else { "☰" }}
                    </button>
                </div>

                {move || {
                    menu_open
                        .get()
                        .then(|| {
                            view! {
                                <div class="md:hidden mt-4 pb-4 animate-fade-in">
                                    <div class="flex flex-col space-y-4">
                                        {NAV_LINKS
                                            .iter()
                                            .map(|link| {
                                                let href = link.href;
                                                view! {
                                                    <a
                                                        href=href
                                                        on:click=move |ev| {
                                                            ev.prevent_default();
                                                            navigate(href);
                                                        }
                                                        class="text-white hover:text-violet-300 transition-colors font-medium text-lg"
                                                    >
                                                        {link.label}
                                                    </a>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                </div>
                            }
                        })
                }}
            </nav>
        </header>
    }
}
