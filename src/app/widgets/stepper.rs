use leptos::prelude::*;

use crate::content::{Accent, FlowStep};

fn card_accent(accent: Accent) -> &'static str {
    match accent {
        Accent::Violet => "text-violet-400 bg-violet-500/10 border-violet-500/30",
        Accent::Orange => "text-orange-400 bg-orange-500/10 border-orange-500/30",
        Accent::Cyan => "text-cyan-400 bg-cyan-500/10 border-cyan-500/30",
    }
}

fn dot_accent(accent: Accent) -> &'static str {
    match accent {
        Accent::Violet => "bg-violet-500 shadow-violet-500/50",
        Accent::Orange => "bg-orange-500 shadow-orange-500/50",
        Accent::Cyan => "bg-cyan-500 shadow-cyan-500/50",
    }
}

/// Horizontal snap-scrolling stepper for an ordered flow; primary steps carry
/// the accent color.
#[component]
pub fn FlowStepper(
    steps: &'static [FlowStep],
    #[prop(default = Accent::Violet)] accent: Accent,
) -> impl IntoView {
    let card = card_accent(accent);
    let dot = dot_accent(accent);
    let count = steps.len();

    view! {
        <div class="w-full relative py-6">
            <div class="flex gap-4 overflow-x-auto pb-8 snap-x snap-mandatory no-scrollbar">
                {steps
                    .iter()
                    .enumerate()
                    .map(|(index, step)| {
                        let card_class = if step.primary {
                            format!(
                                "h-full p-6 rounded-2xl border transition-all duration-300 hover:scale-[1.02] backdrop-blur-md {card}"
                            )
                        } else {
                            "h-full p-6 rounded-2xl border transition-all duration-300 hover:scale-[1.02] bg-white/[0.03] border-white/10 hover:border-white/20"
                                .to_string()
                        };
                        let dot_class = if step.primary {
                            format!(
                                "w-8 h-8 rounded-full flex items-center justify-center text-sm font-bold shadow-lg text-white {dot}"
                            )
                        } else {
                            "w-8 h-8 rounded-full flex items-center justify-center text-sm font-bold bg-white/10 text-white/60"
                                .to_string()
                        };
                        let label_class = if step.primary { "text-white" } else { "text-white/80" };

                        view! {
                            <div class="flex-shrink-0 w-[280px] md:w-[320px] snap-center group">
                                <div class=card_class>
                                    <div class="flex items-center gap-4 mb-4">
                                        <div class=dot_class>{index + 1}</div>
                                        {(index < count - 1)
                                            .then(|| {
                                                view! {
                                                    <div class="flex-1 h-px bg-gradient-to-r from-white/10 to-transparent"></div>
                                                }
                                            })}
                                    </div>
                                    <h4 class=format!("text-lg font-semibold mb-2 {label_class}")>
                                        {step.label}
                                    </h4>
                                    <p class="text-gray-400 text-sm leading-relaxed font-body">
                                        {step.description}
                                    </p>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="flex items-center justify-center gap-2 mt-2 text-gray-500 text-xs uppercase tracking-widest sm:hidden">
                <span>"Swipe to explore flow"</span>
                <div class="w-8 h-px bg-gray-500/30 animate-pulse"></div>
            </div>
        </div>
    }
}
