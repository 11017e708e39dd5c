use leptos::prelude::*;
use leptos_meta::Title;

use super::contact::Contact;
use super::experience::ExperienceSection;
use super::hero::Hero;
use super::projects::Projects;
use super::skills::Skills;

/// The whole site is this one page: independent sections in fixed order.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <Hero />
        <Skills />
        <Projects />
        <ExperienceSection />
        <Contact />
    }
}
