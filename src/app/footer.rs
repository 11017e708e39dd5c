use leptos::prelude::*;

use crate::content::{CONTACT_EMAIL, DEVELOPER_NAME, NAV_LINKS, SOCIAL_LINKS};

use super::scroll::{scroll_to_section, scroll_to_top};

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-black/40 backdrop-blur-md text-white py-12 relative z-10 border-t border-white/10">
            <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex flex-col items-center">
                    // anchor nav
                    <nav class="flex flex-wrap justify-center gap-x-8 gap-y-2 mb-8">
                        {NAV_LINKS
                            .iter()
                            .map(|link| {
                                let href = link.href;
                                view! {
                                    <a
                                        href=href
                                        on:click=move |ev| {
                                            ev.prevent_default();
                                            scroll_to_section(href);
                                        }
                                        class="text-gray-400 hover:text-white transition-colors duration-300 font-body text-sm"
                                    >
                                        {link.label}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </nav>

                    // social links
                    <div class="flex space-x-6 mb-8">
                        {SOCIAL_LINKS
                            .iter()
                            .map(|social| {
                                view! {
                                    <a
                                        href=social.href
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="text-gray-300 hover:text-white transition-colors duration-300 text-2xl"
                                        aria-label=social.label
                                    >
                                        <i class=social.icon></i>
                                    </a>
                                }
                            })
                            .collect_view()}
                        <a
                            href=format!("mailto:{CONTACT_EMAIL}")
                            class="text-gray-300 hover:text-white transition-colors duration-300 text-2xl"
                            aria-label="Email"
                        >
                            <i class="extra-email"></i>
                        </a>
                    </div>

                    // copyright
                    <p class="text-gray-300 text-center mb-8 font-body">
                        {format!(
                            "© {} {}. All rights reserved.",
                            env!("BUILD_YEAR"),
                            DEVELOPER_NAME,
                        )}
                    </p>

                    // back to top
                    <button
                        on:click=move |_| scroll_to_top()
                        class="flex items-center space-x-2 text-gray-300 hover:text-white transition-colors duration-300 group font-body"
                        aria-label="Back to top"
                    >
                        <span>"Back to top"</span>
                        <span class="group-hover:-translate-y-1 transition-transform duration-300">
                            "↑"
                        </span>
                    </button>
                </div>
            </div>
        </footer>
    }
}
