use dioxus::prelude::*;

use crate::nav::NavState;

/// How a click on a link with this `href` is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorTarget<'a> {
    /// Not an in-page link; the browser navigates normally.
    External,
    /// `""` or `"#"`: left to the browser.
    Bare,
    /// `#id`: smooth-scrolled to the element with that id.
    Fragment(&'a str),
}

impl<'a> AnchorTarget<'a> {
    pub fn parse(href: &'a str) -> Self {
        match href.strip_prefix('#') {
            None if href.is_empty() => AnchorTarget::Bare,
            None => AnchorTarget::External,
            Some("") => AnchorTarget::Bare,
            Some(id) => AnchorTarget::Fragment(id),
        }
    }
}

/// What a click on a link did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorOutcome {
    /// Left to the browser.
    Ignored,
    Scrolled,
    /// The fragment names no element; navigation is still suppressed.
    MissingTarget,
}

/// Handle a click on `href`: in-page fragments are scrolled to with `scroll`
/// and always close `nav`, even when the target does not exist.
pub fn follow_anchor(
    href: &str,
    nav: &mut NavState,
    scroll: impl FnOnce(&str) -> bool,
) -> AnchorOutcome {
    let AnchorTarget::Fragment(id) = AnchorTarget::parse(href) else {
        return AnchorOutcome::Ignored;
    };
    let outcome = if scroll(id) {
        AnchorOutcome::Scrolled
    } else {
        AnchorOutcome::MissingTarget
    };
    nav.set_menu(false);
    outcome
}

/// In-page link that scrolls smoothly to its target and closes the mobile
/// nav panel afterwards.
#[component]
pub fn AnchorLink(
    #[props(into)] href: String,
    #[props(default, into)] class: String,
    children: Element,
) -> Element {
    let nav = crate::use_nav();
    let target = href.clone();

    rsx! {
        a {
            href: "{href}",
            class: "{class}",
            onclick: move |evt: MouseEvent| {
                let mut next = nav.peek();
                match follow_anchor(&target, &mut next, crate::dom::scroll_to_id) {
                    AnchorOutcome::Ignored => return,
                    AnchorOutcome::MissingTarget => {
                        tracing::debug!(href = %target, "anchor target not found");
                    }
                    AnchorOutcome::Scrolled => {}
                }
                evt.prevent_default();
                nav.set_menu(next.is_open());
            },
            {children}
        }
    }
}
