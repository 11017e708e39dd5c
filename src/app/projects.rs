use leptos::{either::Either, html, prelude::*};

use crate::content::{Project, CASE_STUDIES, PROJECTS};

use super::case_study::CaseStudySection;
use super::reveal::use_scroll_reveal;

/// Intro heading plus one case-study section per project. Each section gets
/// the id `project-<id>` so experience entries can link down to it.
#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <div id="projects">
            <section class="py-20 relative z-10">
                <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                    <div class="max-w-4xl mx-auto text-center">
                        <h2 class="text-4xl md:text-6xl font-bold mb-6 text-white font-heading">
                            "Featured "
                            <span class="bg-gradient-to-r from-purple-400 via-pink-400 to-cyan-400 bg-clip-text text-transparent">
                                "Projects"
                            </span>
                        </h2>
                        <p class="text-xl text-gray-300 font-body">
                            "A deep dive into my most impactful work, from AI-powered applications to industrial automation platforms"
                        </p>
                    </div>
                </div>
            </section>

            {CASE_STUDIES
                .iter()
                .map(|study| view! { <CaseStudySection study=study /> })
                .collect_view()}

            <OtherProjects />
        </div>
    }
}

/// Grid of the smaller projects that don't get a full case study.
#[component]
fn OtherProjects() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    use_scroll_reveal(section_ref);

    view! {
        <section node_ref=section_ref class="relative py-24 bg-[#0a0a1a]">
            <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                <div class="max-w-6xl mx-auto">
                    <div class="text-center mb-12">
                        <h3 class="animate-on-scroll text-2xl md:text-3xl font-bold text-white font-heading mb-2">
                            "More Projects"
                        </h3>
                        <p class="animate-on-scroll stagger-1 text-gray-500 font-body">
                            "Smaller builds and experiments"
                        </p>
                    </div>
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                        {PROJECTS
                            .iter()
                            .filter(|project| !project.featured)
                            .enumerate()
                            .map(|(index, project)| {
                                view! {
                                    <div class=format!("animate-on-scroll stagger-{}", index + 2)>
                                        <ProjectCard project=project />
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
fn ProjectCard(project: &'static Project) -> impl IntoView {
    let (errored, set_errored) = signal(false);

    view! {
        <div class="hover-lift h-full rounded-xl border border-white/10 bg-white/[0.03] overflow-hidden">
            <div class="aspect-video bg-slate-900">
                {move || {
                    if errored.get() {
                        Either::Left(
                            view! {
                                <div class="w-full h-full bg-gradient-to-br from-slate-900 to-slate-950 flex items-center justify-center">
                                    <span class="text-white/30 text-sm">{project.title}</span>
                                </div>
                            },
                        )
                    } else {
                        Either::Right(
                            view! {
                                <img
                                    src=project.image
                                    alt=project.title
                                    class="w-full h-full object-cover"
                                    loading="lazy"
                                    on:error=move |_| set_errored.set(true)
                                />
                            },
                        )
                    }
                }}
            </div>
            <div class="p-6">
                <h4 class="text-lg font-semibold text-white font-heading mb-2">{project.title}</h4>
                <p class="text-sm text-gray-400 font-body leading-relaxed mb-4">
                    {project.description}
                </p>
                <div class="flex flex-wrap gap-2 mb-4">
                    {project
                        .technologies
                        .iter()
                        .map(|tech| {
                            view! {
                                <span class="text-xs text-white/40 bg-white/5 rounded-full px-2.5 py-1">
                                    {*tech}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="flex gap-4 text-sm">
                    {project
                        .demo_url
                        .map(|url| {
                            view! {
                                <a
                                    href=url
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="text-violet-300 hover:text-white transition-colors"
                                >
                                    "Live Demo"
                                </a>
                            }
                        })}
                    {project
                        .source_url
                        .map(|url| {
                            view! {
                                <a
                                    href=url
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="text-gray-400 hover:text-white transition-colors"
                                >
                                    "Source"
                                </a>
                            }
                        })}
                </div>
            </div>
        </div>
    }
}
