//! Landing page: hero, about, skills, stats, and project sections.
//!
//! Every `<section>` carries an `id` so the scroll listener can track which
//! one is active and highlight its nav link.

use leptos::prelude::*;

use crate::components::{hero::Hero, reveal::Reveal, stats::StatsSection, tech_tag::TechTag};

#[derive(Clone, Copy)]
struct SkillGroup {
    title: &'static str,
    items: &'static [&'static str],
}

const SKILLS: &[SkillGroup] = &[
    SkillGroup { title: "Frontend", items: &["HTML", "CSS", "JavaScript", "TypeScript", "React"] },
    SkillGroup { title: "Backend", items: &["Rust", "Node.js", "PostgreSQL", "REST APIs"] },
    SkillGroup { title: "Tooling", items: &["Git", "Docker", "CI/CD", "Linux"] },
];

#[derive(Clone, Copy)]
struct Project {
    title: &'static str,
    summary: &'static str,
    tech: &'static [&'static str],
    link: &'static str,
}

const PROJECTS: &[Project] = &[
    Project {
        title: "Task Board",
        summary: "Real-time kanban board with drag-and-drop and offline support.",
        tech: &["TypeScript", "WebSockets"],
        link: "https://github.com/",
    },
    Project {
        title: "Weather Dashboard",
        summary: "Forecast dashboard with location search and charts.",
        tech: &["JavaScript", "REST"],
        link: "https://github.com/",
    },
    Project {
        title: "Portfolio",
        summary: "This site: server-rendered, hydrated, and accessible by keyboard.",
        tech: &["Rust", "Leptos", "Axum"],
        link: "https://github.com/",
    },
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Hero/>

        <section id="about" class="about">
            <h2 class="section-title">"About Me"</h2>
            <Reveal class="about-text">
                <p>
                    "I build web applications end to end, from database schemas to the last pixel "
                    "of the interface. I care about performance, accessibility, and code that the "
                    "next person can read."
                </p>
            </Reveal>
        </section>

        <StatsSection/>

        <section id="skills" class="skills">
            <h2 class="section-title">"Skills"</h2>
            <div class="skills-grid">
                {SKILLS
                    .iter()
                    .map(|group| {
                        view! {
                            <Reveal class="skill-category">
                                <h3>{group.title}</h3>
                                <ul>{group.items.iter().map(|item| view! { <li>{*item}</li> }).collect_view()}</ul>
                            </Reveal>
                        }
                    })
                    .collect_view()}
            </div>
        </section>

        <section id="projects" class="projects">
            <h2 class="section-title">"Projects"</h2>
            <div class="projects-grid">
                {PROJECTS
                    .iter()
                    .map(|project| {
                        view! {
                            <Reveal class="project-card">
                                <h3>{project.title}</h3>
                                <p>{project.summary}</p>
                                <div class="tech-tags">
                                    {project
                                        .tech
                                        .iter()
                                        .map(|tag| view! { <TechTag label=*tag/> })
                                        .collect_view()}
                                </div>
                                <a href=project.link target="_blank" rel="noopener noreferrer">
                                    "View Code"
                                </a>
                            </Reveal>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
