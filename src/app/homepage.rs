use leptos::prelude::*;
use leptos_meta::Title;

use super::content::{CONTACT_LINKS, PROJECTS, SKILL_GROUPS, TIMELINE};
use super::hero::HeroSection;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <div class="w-full">
            <HeroSection />
            <AboutSection />
            <SkillsSection />
            <ProjectsSection />
            <ExperienceSection />
            <ContactSection />
        </div>
    }
}

#[component]
fn SectionHeading(text: &'static str) -> impl IntoView {
    view! { <h2 class="text-2xl font-bold my-8 text-center">{text}</h2> }
}

#[component]
fn AboutSection() -> impl IntoView {
    view! {
        <section id="about" class="py-16 section-content">
            <div class="mx-auto max-w-4xl px-4">
                <SectionHeading text="About" />
                <div class="flex flex-col lg:flex-row gap-8">
                    <div class="w-full">
                        <p class="text-base mb-4 leading-relaxed">
                            "Third-year Computer Engineering student who ships across the stack: Android apps, web frontends, ML models, and the APIs that tie them together."
                        </p>
                        <p class="text-base mb-4 leading-relaxed">
                            "Security is the thread through all of it. I break things on purpose in CTFs and bug bounties so the things I build don't break by accident."
                        </p>
                        <div class="bg-brightBlack/30 p-4 rounded-md border-l-4 border-purple">
                            <p class="text-sm text-purple mb-2 font-medium">"💡 Open to internships"</p>
                            <p class="text-sm">
                                "Happy to talk about app development, security engineering, or anything in between."
                            </p>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn SkillsSection() -> impl IntoView {
    view! {
        <section id="skills" class="py-16 section-content">
            <div class="mx-auto max-w-6xl px-4">
                <SectionHeading text="Skills" />
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6">
                    {SKILL_GROUPS
                        .iter()
                        .map(|group| {
                            view! {
                                <div class="bg-brightBlack/30 p-4 rounded-md">
                                    <h3 class="text-lg font-bold mb-2">
                                        {group.icon} " " {group.name}
                                    </h3>
                                    <ul class="text-sm space-y-1">
                                        {group
                                            .skills
                                            .iter()
                                            .map(|skill| view! { <li>{*skill}</li> })
                                            .collect_view()}
                                    </ul>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectsSection() -> impl IntoView {
    view! {
        <section id="projects" class="py-16 section-content">
            <div class="mx-auto max-w-6xl px-4">
                <SectionHeading text="Projects" />
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                    {PROJECTS
                        .iter()
                        .map(|project| {
                            view! {
                                <div class="bg-brightBlack/30 p-4 rounded-md border border-muted/30">
                                    <h3 class="text-lg font-bold mb-2">{project.title}</h3>
                                    <p class="text-sm text-muted mb-4 leading-relaxed">
                                        {project.description}
                                    </p>
                                    <div class="flex flex-wrap gap-2">
                                        {project
                                            .tech
                                            .iter()
                                            .map(|tag| {
                                                view! {
                                                    <span class="text-xs text-cyan bg-cyan/10 px-2 py-1 rounded">
                                                        {*tag}
                                                    </span>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ExperienceSection() -> impl IntoView {
    view! {
        <section id="experience" class="py-16 section-content">
            <div class="mx-auto max-w-4xl px-4">
                <SectionHeading text="Experience" />
                <div class="space-y-8">
                    {TIMELINE
                        .iter()
                        .map(|entry| {
                            view! {
                                <div class="border-l-4 border-cyan/30 pl-4">
                                    <p class="text-sm text-muted">{entry.years}</p>
                                    <h3 class="text-lg font-bold">
                                        {entry.icon} " " {entry.title}
                                    </h3>
                                    <p class="text-sm text-cyan mb-2">{entry.org}</p>
                                    <p class="text-sm mb-2 leading-relaxed">{entry.description}</p>
                                    <ul class="text-sm text-muted space-y-1">
                                        {entry
                                            .milestones
                                            .iter()
                                            .map(|m| view! { <li>"· " {*m}</li> })
                                            .collect_view()}
                                    </ul>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ContactSection() -> impl IntoView {
    view! {
        <section id="contact" class="py-16 section-content">
            <div class="mx-auto max-w-2xl px-4 text-center">
                <SectionHeading text="Contact" />
                <div class="bg-brightBlack/30 p-6 rounded-lg border border-muted/30">
                    <p class="text-lg mb-4 text-cyan font-medium">
                        "Open to collaboration and interesting conversations"
                    </p>
                    <div class="flex flex-col sm:flex-row items-center justify-center gap-4 mt-6">
                        {CONTACT_LINKS
                            .iter()
                            .map(|link| {
                                view! {
                                    <a
                                        href=link.href
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="text-green hover:text-cyan text-sm"
                                        aria-label=link.label
                                    >
                                        {link.value}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}
