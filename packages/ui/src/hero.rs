use dioxus::prelude::*;

const HERO_CSS: Asset = asset!("/assets/styling/hero.css");

#[component]
pub fn Hero() -> Element {
    let lang = crate::use_lang()();
    rsx! {
        document::Link { rel: "stylesheet", href: HERO_CSS }

        crate::Reveal { id: "hero", class: "hero",
            p { class: "hero_kicker", {crate::t(lang, "hero.greeting")} }
            h1 { {crate::t(lang, "brand.name")} }
            p { class: "hero_role", {crate::t(lang, "brand.role")} }
            p { class: "hero_subtitle", {crate::t(lang, "hero.subtitle")} }

            div { class: "cta_row",
                crate::AnchorLink { href: "#projects", class: "btn primary", {crate::t(lang, "hero.cta.projects")} }
                crate::AnchorLink { href: "#contact", class: "btn", {crate::t(lang, "hero.cta.contact")} }
            }
        }
    }
}
