use leptos::{either::Either, html, prelude::*};
use leptos_use::{use_intersection_observer_with_options, UseIntersectionObserverOptions};

use crate::content::{skills_in, SkillCategory};

use super::hero::entry_chars;

/// Fraction of the section that must be visible before the headings animate
/// in. This variant reveals the whole section at once and keeps observing;
/// repeat intersections are idempotent signal writes.
const SECTION_THRESHOLD: f64 = 0.2;

#[component]
pub fn Skills() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let (is_visible, set_is_visible) = signal(false);

    use_intersection_observer_with_options(
        section_ref,
        move |entries, _| {
            if entries.iter().any(|entry| entry.is_intersecting()) {
                set_is_visible.set(true);
            }
        },
        UseIntersectionObserverOptions::default().thresholds(vec![SECTION_THRESHOLD]),
    );

    view! {
        <section
            node_ref=section_ref
            id="skills"
            class="py-20 bg-black/20 backdrop-blur-md relative z-10 overflow-hidden"
        >
            // floating particles
            <div class="absolute top-10 left-1/4 w-2 h-2 bg-purple-400/30 rounded-full animate-float-particle"></div>
            <div
                class="absolute top-20 right-1/3 w-1.5 h-1.5 bg-blue-400/30 rounded-full animate-float-particle"
                style="animation-delay: 2s"
            ></div>
            <div
                class="absolute bottom-20 left-1/3 w-2 h-2 bg-pink-400/30 rounded-full animate-float-particle"
                style="animation-delay: 4s"
            ></div>
            <div
                class="absolute top-1/2 right-1/4 w-1 h-1 bg-cyan-400/30 rounded-full animate-float-particle"
                style="animation-delay: 6s"
            ></div>

            <div class="container mx-auto px-4 sm:px-6 lg:px-8 relative z-20">
                <div class="max-w-6xl mx-auto">
                    <div class="text-center mb-16">
                        <h2 class="text-4xl md:text-5xl font-bold mb-4 text-white font-heading">
                            {move || {
                                if is_visible.get() {
                                    Either::Left(
                                        view! {
                                            <span class="inline-block">
                                                {entry_chars("Skills & Technologies", 0.05)}
                                            </span>
                                        },
                                    )
                                } else {
                                    Either::Right(
                                        view! { <span class="opacity-0">"Skills & Technologies"</span> },
                                    )
                                }
                            }}
                        </h2>
                        <p class=move || {
                            format!(
                                "text-xl text-gray-200 max-w-2xl mx-auto font-body transition-all duration-1000 {}",
                                if is_visible.get() {
                                    "animate-subtitle-entry"
                                } else {
                                    "opacity-0 translate-y-4"
                                },
                            )
                        }>"Technologies and tools I use to bring ideas to life"</p>
                    </div>

                    <div class="space-y-16">
                        {SkillCategory::ALL
                            .into_iter()
                            .map(|category| {
                                view! {
                                    <div>
                                        <h3 class="text-2xl font-semibold mb-8 text-white font-heading text-center">
                                            {move || {
                                                if is_visible.get() {
                                                    Either::Left(
                                                        view! {
                                                            <span class="inline-block">
                                                                {entry_chars(category.label(), 0.03)}
                                                            </span>
                                                        },
                                                    )
                                                } else {
                                                    Either::Right(
                                                        view! { <span class="opacity-0">{category.label()}</span> },
                                                    )
                                                }
                                            }}
                                        </h3>

                                        // infinite carousel: the set is rendered twice for a
                                        // seamless CSS loop
                                        <div class="relative overflow-hidden py-4">
                                            <div class="flex justify-center">
                                                <div class="flex animate-carousel" style="width: fit-content">
                                                    <SkillRow category=category />
                                                    <SkillRow category=category />
                                                </div>
                                            </div>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn SkillRow(category: SkillCategory) -> impl IntoView {
    view! {
        {skills_in(category)
            .map(|skill| {
                view! {
                    <div class="flex-shrink-0 mx-3 group" style="width: 200px">
                        <div class="flex flex-col items-center p-2 transition-all duration-300 cursor-pointer">
                            <i class=format!(
                                "{} text-6xl mb-2 text-gray-200 group-hover:text-white transition-all duration-300 group-hover:scale-125",
                                skill.icon,
                            )></i>
                            <span class="text-sm font-medium text-gray-200 group-hover:text-white transition-colors duration-300 text-center font-body whitespace-nowrap">
                                {skill.name}
                            </span>
                        </div>
                    </div>
                }
            })
            .collect_view()}
    }
}
