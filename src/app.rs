mod content;
mod hero;
mod homepage;
mod terminal;

use homepage::HomePage;
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

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
            <body class="font-mono">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        // sets the document title
        <Title formatter=|title| format!("Chetan Jadhav - {title}") />

        <Router>
            <main class="flex flex-col flex-grow w-full">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=HomePage />
                </Routes>
            </main>
            <Footer />
        </Router>
    }
}

const BUILD_TIME: &str = env!("BUILD_TIME");

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="border-t border-muted/30 py-10">
            <div class="mx-auto max-w-6xl text-center space-y-2">
                <p class="text-sm">
                    "© 2026 " <span class="text-cyan font-semibold">"Chetan Jadhav"</span>
                    ". All rights reserved."
                </p>
                <p class="text-xs text-muted tracking-widest uppercase">
                    "Built with Rust · Leptos · Tailwind · build " {BUILD_TIME}
                </p>
            </div>
        </footer>
    }
}
