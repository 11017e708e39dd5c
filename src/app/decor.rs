//! Decorative widgets: starfields, floating shapes, and the CSS 3D solids.
//! Pure visuals, no state machine.

use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    pub left_pct: f64,
    pub top_pct: f64,
    pub size_px: f64,
    pub delay_s: f64,
    pub duration_s: f64,
    pub opacity: f64,
}

/// Derive a starfield seed from a label, so each section gets its own stable
/// sky.
pub fn seed_from(label: &str) -> u64 {
    // FNV-1a
    label
        .bytes()
        .fold(0xcbf29ce484222325u64, |hash, byte| {
            (hash ^ byte as u64).wrapping_mul(0x100000001b3)
        })
}

/// Deterministic star placement. Positions come from a seeded generator
/// rather than a random source: the server-rendered HTML and the hydrated
/// DOM must agree.
pub fn star_field(count: usize, seed: u64) -> Vec<Star> {
    let mut state = seed.wrapping_add(0x9E3779B97F4A7C15) | 1;
    let mut next = move || {
        // xorshift*
        state ^= state >> 12;
        state ^= state << 25;
        state ^= state >> 27;
        (state.wrapping_mul(0x2545F4914F6CDD1D) >> 33) as f64 / (1u64 << 31) as f64
    };

    (0..count)
        .map(|_| Star {
            left_pct: next() * 100.0,
            top_pct: next() * 100.0,
            size_px: next() * 2.0 + 1.0,
            delay_s: next() * 3.0,
            duration_s: next() * 2.0 + 2.0,
            opacity: next() * 0.5 + 0.3,
        })
        .collect()
}

#[component]
pub fn Starfield(
    count: usize,
    seed: u64,
    #[prop(default = false)] shooting_stars: bool,
) -> impl IntoView {
    view! {
        <div class="absolute inset-0 overflow-hidden pointer-events-none z-0">
            {star_field(count, seed)
                .into_iter()
                .map(|star| {
                    view! {
                        <div
                            class="absolute rounded-full bg-white animate-twinkle"
                            style=format!(
                                "left: {:.2}%; top: {:.2}%; width: {:.1}px; height: {:.1}px; animation-delay: {:.2}s; animation-duration: {:.2}s; opacity: {:.2};",
                                star.left_pct,
                                star.top_pct,
                                star.size_px,
                                star.size_px,
                                star.delay_s,
                                star.duration_s,
                                star.opacity,
                            )
                        ></div>
                    }
                })
                .collect_view()}
            {shooting_stars
                .then(|| {
                    view! {
                        <div class="absolute top-1/4 left-1/4 w-1 h-1 bg-white rounded-full animate-shooting-star"></div>
                        <div
                            class="absolute top-1/3 left-2/3 w-1 h-1 bg-white rounded-full animate-shooting-star"
                            style="animation-delay: 4s"
                        ></div>
                        <div
                            class="absolute top-1/2 left-1/3 w-1 h-1 bg-white rounded-full animate-shooting-star"
                            style="animation-delay: 8s"
                        ></div>
                    }
                })}
        </div>
    }
}

#[component]
pub fn Css3dCube() -> impl IntoView {
    view! {
        <div class="cube-3d">
            <div class="cube-face front"></div>
            <div class="cube-face back"></div>
            <div class="cube-face right"></div>
            <div class="cube-face left"></div>
            <div class="cube-face top"></div>
            <div class="cube-face bottom"></div>
        </div>
    }
}

#[component]
pub fn Css3dPyramid() -> impl IntoView {
    view! {
        <div class="pyramid-3d">
            <div class="pyramid-face front"></div>
            <div class="pyramid-face back"></div>
            <div class="pyramid-face left"></div>
            <div class="pyramid-face right"></div>
            <div class="pyramid-base"></div>
        </div>
    }
}

/// The hero's background layer: orbs, solids, dots, and gradient lines.
#[component]
pub fn FloatingShapes() -> impl IntoView {
    view! {
        <div class="absolute inset-0 pointer-events-none">
            // 3D sphere - top left
            <div class="absolute top-24 left-20 animate-float-3d-slow">
                <div class="sphere-3d"></div>
            </div>

            // 3D cube - top right
            <div class="absolute top-32 right-32 animate-float-3d" style="perspective: 1000px">
                <Css3dCube />
            </div>

            // 3D pyramid - bottom left
            <div class="absolute bottom-20 left-16 animate-float-3d-reverse" style="perspective: 1000px">
                <Css3dPyramid />
            </div>

            // gradient orbs
            <div class="absolute top-20 left-10 w-64 h-64 bg-gradient-to-br from-blue-500/20 to-purple-500/20 rounded-full blur-3xl animate-float"></div>
            <div class="absolute bottom-32 right-20 w-48 h-48 bg-gradient-to-br from-pink-500/20 to-cyan-500/20 rounded-full blur-2xl animate-float-delayed"></div>

            // rotating cubes
            <div class="absolute top-40 right-1/4 w-20 h-20 animate-float-rotate">
                <div class="w-full h-full bg-gradient-to-br from-blue-400/10 to-purple-600/10 backdrop-blur-sm border border-white/10 rounded-lg rotate-45"></div>
            </div>
            <div class="absolute bottom-40 left-1/4 w-16 h-16 animate-float-rotate-reverse">
                <div class="w-full h-full bg-gradient-to-br from-pink-400/10 to-cyan-600/10 backdrop-blur-sm border border-white/10 rounded-lg rotate-12"></div>
            </div>

            // diamond
            <div class="absolute top-1/2 left-20 w-24 h-24 animate-float-delayed">
                <div class="w-full h-full bg-gradient-to-br from-cyan-400/10 to-blue-600/10 backdrop-blur-sm border border-white/10 rotate-45 rounded-sm"></div>
            </div>

            // floating dots
            <div class="absolute top-1/4 left-1/3 w-3 h-3 bg-white/30 rounded-full animate-pulse"></div>
            <div
                class="absolute top-2/3 right-1/3 w-2 h-2 bg-blue-400/40 rounded-full animate-pulse"
                style="animation-delay: 1s"
            ></div>
            <div
                class="absolute bottom-1/4 left-1/2 w-2 h-2 bg-purple-400/40 rounded-full animate-pulse"
                style="animation-delay: 2s"
            ></div>

            // gradient lines
            <div class="absolute top-0 left-1/4 w-px h-40 bg-gradient-to-b from-transparent via-blue-400/20 to-transparent animate-float-slow"></div>
            <div class="absolute bottom-0 right-1/3 w-px h-32 bg-gradient-to-b from-transparent via-purple-400/20 to-transparent animate-float"></div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_star_field_is_deterministic() {
        let a = star_field(40, 7);
        let b = star_field(40, 7);
        assert_eq!(a, b);
        assert_eq!(a.len(), 40);

        let other = star_field(40, 8);
        assert_ne!(a, other);
    }

    #[test]
    fn test_star_field_values_stay_in_range() {
        for star in star_field(200, seed_from("range-check")) {
            assert!((0.0..100.0).contains(&star.left_pct));
            assert!((0.0..100.0).contains(&star.top_pct));
            assert!((1.0..3.0).contains(&star.size_px));
            assert!((0.0..3.0).contains(&star.delay_s));
            assert!((2.0..4.0).contains(&star.duration_s));
            assert!((0.3..0.8).contains(&star.opacity));
        }
    }

    #[test]
    fn test_seed_from_is_stable_and_distinguishes_labels() {
        assert_eq!(seed_from("reservo"), seed_from("reservo"));
        assert_ne!(seed_from("reservo"), seed_from("xmotics"));
    }
}
