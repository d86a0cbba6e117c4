use dioxus::prelude::*;
use ui::{About, Contact, Hero, Projects, Skills};

#[component]
pub fn Home() -> Element {
    rsx! {
        Hero {}
        About {}
        Projects {}
        Skills {}
        Contact {}
    }
}
