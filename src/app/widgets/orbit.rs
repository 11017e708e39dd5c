use leptos::prelude::*;

use crate::content::OrbitItem;

const ORBIT_RADIUS_PX: f64 = 140.0;

/// Placement angle for the item at `index` of `count`, in degrees.
fn orbit_angle(index: usize, count: usize) -> f64 {
    (index as f64 / count.max(1) as f64) * 360.0
}

/// Labeled items orbiting a center label. The ring spins via CSS; each card
/// counter-spins to stay upright.
#[component]
pub fn TechStackOrbit(
    items: &'static [OrbitItem],
    #[prop(default = "App")] center_label: &'static str,
) -> impl IntoView {
    let count = items.len();

    view! {
        <div class="relative flex items-center justify-center min-h-[320px]">
            <div class="relative w-[320px] h-[320px]">
                <div class="absolute inset-0 flex items-center justify-center">
                    <div class="flex items-center justify-center w-24 h-24 rounded-2xl bg-violet-500/20 border border-violet-400/50 backdrop-blur-sm font-heading font-bold text-white text-lg shadow-lg z-10">
                        {center_label}
                    </div>
                </div>

                <div class="absolute inset-0 animate-orbit-spin">
                    {items
                        .iter()
                        .enumerate()
                        .map(|(index, item)| {
                            let angle = orbit_angle(index, count);
                            view! {
                                <div
                                    class="absolute left-1/2 top-1/2 -ml-8 -mt-8"
                                    style=format!(
                                        "transform: rotate({angle:.1}deg) translate({ORBIT_RADIUS_PX}px) rotate(-{angle:.1}deg);"
                                    )
                                >
                                    <div
                                        class="animate-orbit-counter-spin flex flex-col items-center justify-center w-16 h-16 rounded-xl border backdrop-blur-sm font-body text-sm font-medium text-white shadow-lg"
                                        style=format!(
                                            "background-color: {}20; border-color: {}80;",
                                            item.color,
                                            item.color,
                                        )
                                    >
                                        {item.icon.map(|icon| view! { <i class=format!("{icon} text-xl")></i> })}
                                        <span class="mt-1 text-xs">{item.label}</span>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orbit_angles_are_evenly_spaced() {
        assert_eq!(orbit_angle(0, 4), 0.0);
        assert_eq!(orbit_angle(1, 4), 90.0);
        assert_eq!(orbit_angle(3, 4), 270.0);
        // never reaches a full turn
        assert!(orbit_angle(2, 3) < 360.0);
        // empty list must not divide by zero
        assert_eq!(orbit_angle(0, 0), 0.0);
    }
}
