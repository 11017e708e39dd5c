use leptos::{children::ViewFn, html, prelude::*};

use crate::content::{Accent, CaseStudy};

use super::decor::{seed_from, Starfield};
use super::mode::use_developer_mode;
use super::reveal::use_scroll_reveal;
use super::widgets::{
    CodeShowcase, FlowStepper, ImpactMetrics, PhoneBorder, PhoneMockup, TechStackOrbit,
};

struct AccentStyle {
    gradient: &'static str,
    glow: &'static str,
    glow2: &'static str,
    badge: &'static str,
    title_gradient: &'static str,
}

fn accent_style(accent: Accent) -> AccentStyle {
    match accent {
        Accent::Violet => AccentStyle {
            gradient: "from-violet-900/20 via-transparent to-fuchsia-900/10",
            glow: "bg-violet-600/20",
            glow2: "bg-fuchsia-600/20",
            badge: "text-violet-400",
            title_gradient: "from-white via-violet-200 to-white",
        },
        Accent::Orange => AccentStyle {
            gradient: "from-orange-900/10 via-transparent to-amber-900/5",
            glow: "bg-orange-600/15",
            glow2: "bg-amber-600/15",
            badge: "text-orange-400",
            title_gradient: "from-white via-orange-200 to-white",
        },
        Accent::Cyan => AccentStyle {
            gradient: "from-cyan-900/20 via-transparent to-blue-900/10",
            glow: "bg-cyan-600/20",
            glow2: "bg-blue-600/20",
            badge: "text-cyan-400",
            title_gradient: "from-white via-cyan-200 to-white",
        },
    }
}

/// Shared frame for a project case study: starfield hero, accent-tinted
/// backdrop, and an architecture overlay that only renders while developer
/// mode is on.
#[component]
pub fn CaseStudyLayout(
    id: &'static str,
    title: &'static str,
    subtitle: &'static str,
    badge: &'static str,
    accent: Accent,
    children: Children,
    #[prop(optional, into)] architecture_overlay: Option<ViewFn>,
) -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    use_scroll_reveal(section_ref);
    let mode = use_developer_mode();
    let style = accent_style(accent);

    view! {
        <section
            node_ref=section_ref
            id=format!("project-{id}")
            class="relative overflow-hidden"
        >
            // hero
            <div class="relative min-h-[70vh] flex items-center justify-center py-24">
                <div class="absolute inset-0 bg-gradient-to-br from-[#050510] via-[#0a0a1a] to-[#0f0f2a]"></div>
                <Starfield count=80 seed=seed_from(id) shooting_stars=true />
                <div class=format!("absolute inset-0 bg-gradient-to-t {}", style.gradient)></div>
                <div class=format!(
                    "absolute top-1/4 -left-32 w-96 h-96 {} rounded-full blur-[128px] animate-glow-pulse-subtle",
                    style.glow,
                )></div>
                <div
                    class=format!(
                        "absolute bottom-1/4 -right-32 w-96 h-96 {} rounded-full blur-[128px] animate-glow-pulse-subtle",
                        style.glow2,
                    )
                    style="animation-delay: 2s"
                ></div>

                <div class="container mx-auto px-4 sm:px-6 lg:px-8 relative z-10">
                    <div class="max-w-4xl mx-auto text-center">
                        <p
                            class=format!(
                                "animate-fade-in-up {} text-sm uppercase tracking-[0.3em] mb-4 font-medium",
                                style.badge,
                            )
                            style="animation-delay: 0.1s; animation-fill-mode: both;"
                        >
                            {badge}
                        </p>
                        <h2
                            class="animate-fade-in-up text-5xl md:text-7xl lg:text-8xl font-bold font-heading tracking-tight"
                            style="animation-delay: 0.3s; animation-fill-mode: both;"
                        >
                            <span class=format!(
                                "bg-gradient-to-r {} bg-clip-text text-transparent",
                                style.title_gradient,
                            )>{title}</span>
                        </h2>
                        <p
                            class="animate-fade-in-up text-gray-400 text-lg md:text-xl mt-6 font-body"
                            style="animation-delay: 0.5s; animation-fill-mode: both;"
                        >
                            {subtitle}
                        </p>
                    </div>
                </div>
            </div>

            // body
            <div class="relative py-24 bg-gradient-to-b from-[#0f0f2a] to-[#0a0a1a]">
                <div class="container mx-auto px-4 sm:px-6 lg:px-8 relative z-10">{children()}</div>
            </div>

            // architecture overlay, developer mode only
            {move || {
                mode.get()
                    .then(|| {
                        architecture_overlay
                            .as_ref()
                            .map(|overlay| {
                                view! {
                                    <div class="relative py-12 border-t border-white/10 bg-black/20">
                                        <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                                            <p class="text-xs uppercase tracking-[0.3em] text-violet-400 mb-4">
                                                "Technical architecture (Developer Mode)"
                                            </p>
                                            {overlay.run()}
                                        </div>
                                    </div>
                                }
                            })
                    })
            }}
        </section>
    }
}

/// One project case study, rendered from its content record.
#[component]
pub fn CaseStudySection(study: &'static CaseStudy) -> impl IntoView {
    let accent = study.accent;

    view! {
        <CaseStudyLayout
            id=study.id
            title=study.title
            subtitle=study.subtitle
            badge=study.badge
            accent=accent
            architecture_overlay=ViewFn::from(move || {
                view! {
                    <div class="rounded-xl border border-white/10 bg-white/[0.02] p-6">
                        <FlowStepper steps=study.flow accent=accent />
                    </div>
                }
            })
        >
            <div class="max-w-4xl mx-auto space-y-20">
                // hero phones
                <div class="flex justify-center items-end gap-4 md:gap-8">
                    {study
                        .screens
                        .get(1)
                        .map(|screen| {
                            view! {
                                <div class="relative w-36 md:w-52 -rotate-6 translate-y-8 hidden sm:block animate-phone-float-delayed">
                                    <PhoneMockup src=screen.image alt=screen.label />
                                </div>
                            }
                        })}
                    {study
                        .screens
                        .first()
                        .map(|screen| {
                            view! {
                                <div class="relative w-52 md:w-72 z-10 animate-phone-float">
                                    <PhoneMockup
                                        src=screen.image
                                        alt=screen.label
                                        border=PhoneBorder::Gray
                                    />
                                </div>
                            }
                        })}
                    {study
                        .screens
                        .get(2)
                        .map(|screen| {
                            view! {
                                <div class="relative w-36 md:w-52 rotate-6 translate-y-8 hidden sm:block animate-phone-float-delayed-2">
                                    <PhoneMockup src=screen.image alt=screen.label />
                                </div>
                            }
                        })}
                </div>

                <section class="animate-on-scroll text-center">
                    <p class="text-2xl md:text-3xl text-white/90 font-light leading-relaxed font-body">
                        {study.intro}
                    </p>
                </section>

                <section class="animate-on-scroll stagger-1 text-center">
                    <p class="text-gray-500 text-sm mb-4">{study.tech_line}</p>
                    <p class="text-white/60 text-sm">{study.platform_line}</p>
                </section>

                <div class="animate-on-scroll stagger-2 w-full h-px bg-gradient-to-r from-transparent via-white/10 to-transparent"></div>

                <section class="animate-on-scroll stagger-3 text-center">
                    <p class="text-xs uppercase tracking-[0.2em] text-gray-500 mb-4">"My Role"</p>
                    <p class="text-gray-300 text-lg leading-relaxed font-body max-w-2xl mx-auto">
                        {study.role}
                    </p>
                </section>

                <section class="animate-on-scroll stagger-4 text-center">
                    <p class="text-xs uppercase tracking-[0.2em] text-gray-500 mb-4">
                        "Key Capabilities"
                    </p>
                    <div class="flex flex-wrap justify-center gap-x-6 gap-y-3 text-gray-400">
                        {study
                            .capabilities
                            .iter()
                            .map(|capability| {
                                view! {
                                    <span class="flex items-center gap-2 group">
                                        <span class="w-1 h-1 rounded-full bg-white/40 group-hover:scale-150 transition-transform"></span>
                                        <span class="group-hover:text-white transition-colors">
                                            {*capability}
                                        </span>
                                    </span>
                                }
                            })
                            .collect_view()}
                    </div>
                </section>

                <section class="animate-on-scroll">
                    <h3 class="text-xs uppercase tracking-[0.2em] text-gray-500 mb-4">
                        "Tech Stack"
                    </h3>
                    <TechStackOrbit items=study.orbit center_label=study.title />
                </section>

                <section class="animate-on-scroll">
                    <CodeShowcase snippet=&study.snippet />
                </section>

                <section class="animate-on-scroll">
                    <h3 class="text-xs uppercase tracking-[0.2em] text-gray-500 mb-4">
                        "Result-oriented KPIs"
                    </h3>
                    <ImpactMetrics metrics=study.metrics />
                </section>

                // screens grid
                <section>
                    <div class="text-center mb-12">
                        <h3 class="animate-on-scroll text-2xl md:text-3xl font-bold text-white font-heading mb-2">
                            "App Screens"
                        </h3>
                        <p class="animate-on-scroll stagger-1 text-gray-500 font-body">
                            "Key interfaces and user flows"
                        </p>
                    </div>
                    <div class="grid grid-cols-2 md:grid-cols-4 gap-4 md:gap-6">
                        {study
                            .screens
                            .iter()
                            .enumerate()
                            .map(|(index, screen)| {
                                view! {
                                    <div class=format!(
                                        "animate-on-scroll stagger-{} group",
                                        (index % 4) + 2,
                                    )>
                                        <PhoneMockup src=screen.image alt=screen.label />
                                        <p class="text-center text-gray-500 text-sm mt-3 font-body">
                                            {screen.label}
                                        </p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </section>
            </div>
        </CaseStudyLayout>
    }
}
