use leptos::{either::Either, prelude::*};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PhoneBorder {
    /// Titanium/Pro look
    Gray,
    /// Dark/Graphite look
    #[default]
    Dark,
}

/// Device frame around a screenshot. A failed image load swaps in a
/// placeholder visual instead of a broken image.
#[component]
pub fn PhoneMockup(
    src: &'static str,
    alt: &'static str,
    #[prop(optional)] border: PhoneBorder,
) -> impl IntoView {
    let (errored, set_errored) = signal(false);

    let bezel = match border {
        PhoneBorder::Gray => "from-gray-500 via-gray-300 to-gray-500",
        PhoneBorder::Dark => "from-gray-800 via-gray-700 to-gray-900",
    };

    view! {
        <div class="relative">
            <div class="relative rounded-[3rem] md:rounded-[3.5rem] bg-[#121212] overflow-hidden select-none">
                // chassis shadow
                <div class="absolute inset-0 rounded-[3rem] md:rounded-[3.5rem] shadow-[0_0_0_2px_#333,0_0_0_6px_#111,0_20px_50px_-10px_rgba(0,0,0,0.5)]"></div>

                // metallic bezel
                <div class=format!(
                    "absolute -inset-[2px] rounded-[3.1rem] md:rounded-[3.6rem] bg-gradient-to-tr {bezel} z-0 pointer-events-none opacity-80"
                )></div>

                // inner black bezel
                <div class="absolute inset-[4px] md:inset-[6px] bg-black rounded-[2.8rem] md:rounded-[3.2rem] z-10 pointer-events-none"></div>

                // screen
                <div class="relative z-20 m-[10px] md:m-[14px] rounded-[2.4rem] md:rounded-[2.8rem] overflow-hidden bg-black aspect-[9/19.5]">
                    {move || {
                        if errored.get() {
                            Either::Left(
                                view! {
                                    <div class="w-full h-full bg-gradient-to-br from-slate-900 to-slate-950 flex items-center justify-center">
                                        <span class="text-white/30 text-xs text-center px-4">{alt}</span>
                                    </div>
                                },
                            )
                        } else {
                            Either::Right(
                                view! {
                                    <img
                                        src=src
                                        alt=alt
                                        class="w-full h-full object-cover"
                                        loading="lazy"
                                        on:error=move |_| set_errored.set(true)
                                    />
                                },
                            )
                        }
                    }}
                    // glass reflections
                    <div class="absolute inset-0 bg-gradient-to-tr from-transparent via-white/[0.02] to-transparent pointer-events-none z-20"></div>
                    <div class="absolute top-0 right-0 w-2/3 h-full bg-gradient-to-l from-white/[0.02] to-transparent pointer-events-none z-20"></div>
                </div>

                // side buttons
                <div class="absolute top-24 -left-[3px] w-[3px] h-10 bg-gray-700 rounded-l-md z-0"></div>
                <div class="absolute top-36 -left-[3px] w-[3px] h-10 bg-gray-700 rounded-l-md z-0"></div>
                <div class="absolute top-28 -right-[3px] w-[3px] h-16 bg-gray-700 rounded-r-md z-0"></div>
            </div>
        </div>
    }
}
