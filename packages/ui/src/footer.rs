use chrono::Datelike;
use dioxus::prelude::*;

/// Calendar year shown in the footer, in the visitor's local time.
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

#[component]
pub fn Footer() -> Element {
    let lang = crate::use_lang()();
    let year = use_signal(current_year);

    rsx! {
        footer { class: "site_footer",
            p {
                "© "
                span { id: "year", "{year}" }
                " "
                {crate::t(lang, "brand.name")}
                ". "
                {crate::t(lang, "footer.rights")}
            }
            crate::LangSwitch {}
            crate::AnchorLink { href: "#top", class: "nav_link", {crate::t(lang, "footer.top")} }
        }
    }
}
