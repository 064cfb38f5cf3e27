use leptos::prelude::*;
use leptos_use::{use_interval, UseIntervalReturn};

use super::content::ROLES;
use super::terminal::TerminalHero;

const ROLE_ROTATE_MS: u64 = 3000;

#[component]
pub fn HeroSection() -> impl IntoView {
    view! {
        <section id="hero" class="relative w-full min-h-screen flex items-center section-content">
            <div class="mx-auto w-full max-w-6xl px-4 grid grid-cols-1 lg:grid-cols-2 gap-8 items-center">
                <div class="w-full py-6">
                    <TerminalHero />
                </div>
                <div class="w-full text-center space-y-4">
                    <h1 class="text-4xl font-bold">"Chetan Jadhav"</h1>
                    <RoleSlider />
                    <p class="text-muted max-w-md mx-auto leading-relaxed">
                        "Engineering student building secure, data-driven applications end to end, from Android clients to ML pipelines."
                    </p>
                </div>
            </div>
        </section>
    }
}

/// Cycles through the role labels on a fixed interval. The interval is owned
/// by the reactive scope and stops when the component is disposed.
#[component]
fn RoleSlider() -> impl IntoView {
    let UseIntervalReturn { counter, .. } = use_interval(ROLE_ROTATE_MS);
    view! {
        <div class="h-10 overflow-hidden flex justify-center items-center">
            <span class="text-2xl text-cyan uppercase tracking-widest">
                {move || ROLES[counter.get() as usize % ROLES.len()]}
            </span>
        </div>
    }
}
