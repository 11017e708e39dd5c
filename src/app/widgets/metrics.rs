use leptos::prelude::*;

use crate::content::Metric;

/// Stat grid for a case study's outcome numbers.
#[component]
pub fn ImpactMetrics(
    metrics: &'static [Metric],
    #[prop(default = 3)] columns: u8,
) -> impl IntoView {
    let grid_class = if columns == 2 {
        "grid grid-cols-1 gap-4 md:grid-cols-2"
    } else {
        "grid grid-cols-1 gap-4 md:grid-cols-3"
    };

    view! {
        <div class=grid_class>
            {metrics
                .iter()
                .map(|metric| {
                    view! {
                        <div class="hover-lift rounded-xl border border-white/10 bg-white/[0.04] p-5 backdrop-blur-sm transition-all">
                            <div class="font-heading text-3xl font-bold text-violet-300 md:text-4xl">
                                {metric.value}
                            </div>
                            <div class="mt-1 font-body font-medium text-white/90">{metric.label}</div>
                            {metric
                                .description
                                .map(|description| {
                                    view! {
                                        <p class="mt-2 text-sm text-gray-400 font-body">{description}</p>
                                    }
                                })}
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
