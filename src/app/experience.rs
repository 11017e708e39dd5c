use leptos::{html, prelude::*};

use crate::content::{case_study_by_id, Accent, EXPERIENCES};

use super::reveal::use_scroll_reveal;
use super::scroll::scroll_to_section;

/// Company headline gradient, keyed on the accent of the linked case study.
fn company_gradient(project: Option<&str>) -> &'static str {
    match project.and_then(case_study_by_id).map(|study| study.accent) {
        Some(Accent::Violet) => {
            "bg-gradient-to-r from-violet-400 to-blue-400 bg-clip-text text-transparent"
        }
        Some(Accent::Orange) => {
            "bg-gradient-to-r from-orange-400 via-amber-300 to-yellow-400 bg-clip-text text-transparent"
        }
        Some(Accent::Cyan) => {
            "bg-gradient-to-r from-cyan-400 via-teal-300 to-emerald-400 bg-clip-text text-transparent"
        }
        None => "text-white",
    }
}

#[component]
pub fn ExperienceSection() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    use_scroll_reveal(section_ref);
    let count = EXPERIENCES.len();

    view! {
        <section node_ref=section_ref id="experience" class="relative py-32 overflow-hidden">
            <div class="absolute inset-0 bg-[#0a0a0f]"></div>
            <div class="absolute top-0 left-0 w-full h-px bg-gradient-to-r from-transparent via-white/10 to-transparent"></div>
            <div class="absolute bottom-0 left-0 w-full h-px bg-gradient-to-r from-transparent via-white/10 to-transparent"></div>

            <div class="container mx-auto px-4 sm:px-6 lg:px-8 relative z-10">
                <div class="max-w-6xl mx-auto">
                    <div class="mb-24">
                        <p class="animate-on-scroll text-white/40 text-xs uppercase tracking-[0.3em] mb-4">
                            "Professional Journey"
                        </p>
                        <h2 class="animate-on-scroll stagger-1 text-5xl md:text-6xl lg:text-7xl font-bold font-heading leading-tight">
                            <span class="text-white">"Where I've"</span>
                            <br />
                            <span class="text-white/40">"made impact."</span>
                        </h2>
                    </div>

                    <div class="space-y-24">
                        {EXPERIENCES
                            .iter()
                            .enumerate()
                            .map(|(index, exp)| {
                                view! {
                                    <div class=format!("animate-on-scroll stagger-{}", index + 2)>
                                        <div class="grid md:grid-cols-12 gap-8 md:gap-12">
                                            <div class="md:col-span-5">
                                                <div class="mb-4">
                                                    <span class="text-xs text-white/20 uppercase tracking-wider">
                                                        {exp.period}
                                                    </span>
                                                </div>
                                                <h3 class=format!(
                                                    "text-5xl md:text-6xl lg:text-7xl font-bold font-heading mb-3 leading-tight {}",
                                                    company_gradient(exp.project),
                                                )>{exp.company}</h3>
                                                <p class="text-xl md:text-2xl text-white/60 font-body mb-6">
                                                    {exp.role}
                                                </p>
                                                {exp.project
                                                    .map(|project| {
                                                        view! {
                                                            <button
                                                                on:click=move |_| scroll_to_section(
                                                                    &format!("#project-{project}"),
                                                                )
                                                                class="group inline-flex items-center gap-3 text-sm text-white/40 hover:text-white transition-colors"
                                                            >
                                                                <span class="w-8 h-px bg-white/20 group-hover:w-12 group-hover:bg-white/40 transition-all"></span>
                                                                <span class="uppercase tracking-wider">"View Project"</span>
                                                            </button>
                                                        }
                                                    })}
                                            </div>

                                            <div class="md:col-span-7">
                                                <p class="text-lg md:text-xl text-white/70 font-body leading-relaxed mb-8">
                                                    {exp.description}
                                                </p>
                                                <div class="flex flex-wrap gap-3">
                                                    {exp.technologies
                                                        .iter()
                                                        .map(|tech| {
                                                            view! {
                                                                <span class="text-sm text-white/40 font-body">{*tech}</span>
                                                            }
                                                        })
                                                        .collect_view()}
                                                </div>
                                            </div>
                                        </div>

                                        {(index != count - 1)
                                            .then(|| {
                                                view! {
                                                    <div class="mt-24 w-full h-px bg-gradient-to-r from-white/5 via-white/10 to-white/5"></div>
                                                }
                                            })}
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_company_gradient_follows_linked_accent() {
        assert!(company_gradient(Some("reservo")).contains("violet"));
        assert!(company_gradient(Some("emprendia")).contains("orange"));
        assert!(company_gradient(Some("xmotics")).contains("cyan"));
        assert_eq!(company_gradient(None), "text-white");
        assert_eq!(company_gradient(Some("unknown")), "text-white");
    }
}
