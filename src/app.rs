mod case_study;
mod contact;
mod decor;
mod experience;
mod footer;
mod header;
mod hero;
mod home;
pub mod mode;
mod projects;
pub mod reveal;
pub mod scroll;
mod skills;
mod widgets;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use footer::Footer;
use header::Header;
use home::HomePage;
use mode::provide_developer_mode;

use crate::content::DEVELOPER_NAME;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="min-h-screen bg-[#0a0a0f] text-white font-body">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    // Single writer lives in the header; everything below may read it.
    provide_developer_mode();

    view! {
        // sets the document title
        <Title formatter=|title| format!("{DEVELOPER_NAME} - {title}") />

        <Router>
            <Header />
            <main>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=HomePage />
                </Routes>
            </main>
            <Footer />
        </Router>
    }
}
