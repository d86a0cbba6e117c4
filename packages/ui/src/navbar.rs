use dioxus::prelude::*;

use crate::nav::{NavLink, SiteNav};

const NAV_LINKS: [NavLink; 4] = [
    NavLink { href: "#about", label_key: "nav.about" },
    NavLink { href: "#projects", label_key: "nav.projects" },
    NavLink { href: "#skills", label_key: "nav.skills" },
    NavLink { href: "#contact", label_key: "nav.contact" },
];

/// Sticky page header: brand, section links and the theme toggle.
#[component]
pub fn Navbar() -> Element {
    let lang = crate::use_lang()();

    rsx! {
        header { id: "top", class: "site_header",
            div { class: "site_header_inner",
                crate::AnchorLink { href: "#hero", class: "brand",
                    span { class: "brand_mark" }
                    span { class: "brand_name", {crate::t(lang, "brand.name")} }
                }
                div { class: "header_actions",
                    SiteNav { links: NAV_LINKS.to_vec() }
                    crate::ThemeToggle {}
                }
            }
        }
    }
}
