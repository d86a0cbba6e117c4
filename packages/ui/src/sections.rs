use dioxus::prelude::*;

const SECTIONS_CSS: Asset = asset!("/assets/styling/sections.css");

struct Project {
    id: &'static str,
    title_key: &'static str,
    body_key: &'static str,
    tags: &'static [&'static str],
    href: &'static str,
}

const PROJECTS: [Project; 3] = [
    Project {
        id: "project-sync-cli",
        title_key: "projects.cli.title",
        body_key: "projects.cli.body",
        tags: &["Rust", "Tokio", "CLI"],
        href: "https://github.com/",
    },
    Project {
        id: "project-dashboard",
        title_key: "projects.dash.title",
        body_key: "projects.dash.body",
        tags: &["Dioxus", "WebAssembly", "WebSocket"],
        href: "https://github.com/",
    },
    Project {
        id: "project-config-parser",
        title_key: "projects.parser.title",
        body_key: "projects.parser.body",
        tags: &["Rust", "Parsing"],
        href: "https://github.com/",
    },
];

const SKILLS: [&str; 8] = [
    "Rust",
    "WebAssembly",
    "Dioxus",
    "Tokio",
    "PostgreSQL",
    "TypeScript",
    "Docker",
    "Linux",
];

#[component]
pub fn About() -> Element {
    let lang = crate::use_lang()();
    rsx! {
        document::Link { rel: "stylesheet", href: SECTIONS_CSS }

        crate::Reveal { id: "about", class: "panel",
            h2 { {crate::t(lang, "about.title")} }
            p { {crate::t(lang, "about.body")} }
        }
    }
}

#[component]
pub fn Projects() -> Element {
    let lang = crate::use_lang()();
    rsx! {
        section { id: "projects", class: "panel",
            h2 { {crate::t(lang, "projects.title")} }
            div { class: "project_grid",
                for project in PROJECTS.iter() {
                    crate::Reveal { key: "{project.id}", id: project.id, class: "project_card",
                        h3 { {crate::t(lang, project.title_key)} }
                        p { {crate::t(lang, project.body_key)} }
                        ul { class: "tag_list",
                            for tag in project.tags.iter() {
                                li { key: "{tag}", class: "tag", "{tag}" }
                            }
                        }
                        a {
                            class: "card_link",
                            href: project.href,
                            target: "_blank",
                            rel: "noopener noreferrer",
                            i { class: "fa-brands fa-github", "aria-hidden": "true" }
                            " GitHub"
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Skills() -> Element {
    let lang = crate::use_lang()();
    rsx! {
        crate::Reveal { id: "skills", class: "panel",
            h2 { {crate::t(lang, "skills.title")} }
            ul { class: "tag_list",
                for skill in SKILLS {
                    li { key: "{skill}", class: "tag", "{skill}" }
                }
            }
        }
    }
}

#[component]
pub fn Contact() -> Element {
    let lang = crate::use_lang()();
    rsx! {
        crate::Reveal { id: "contact", class: "panel",
            h2 { {crate::t(lang, "contact.title")} }
            p { class: "hint", {crate::t(lang, "contact.intro")} }
            crate::ContactForm {}
        }
    }
}
