use dioxus::prelude::*;

use crate::dom::{self, ClickOrigin};

const NAV_CSS: Asset = asset!("/assets/styling/nav.css");

pub const NAV_MENU_ID: &str = "navMenu";
pub const NAV_TOGGLE_ID: &str = "navToggle";

/// Open/closed state of the mobile navigation panel.
///
/// Every accessor derives from the single `open` flag, so the panel class,
/// `aria-expanded`, the toggle label and the icon always agree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavState {
    open: bool,
}

impl NavState {
    pub fn is_open(self) -> bool {
        self.open
    }

    /// Returns whether the state actually changed.
    pub fn set_menu(&mut self, open: bool) -> bool {
        let changed = self.open != open;
        self.open = open;
        changed
    }

    /// Close on clicks outside the panel and toggle. Does nothing while the
    /// menu is already closed.
    pub fn on_document_click(&mut self, origin: ClickOrigin) -> bool {
        if origin == ClickOrigin::Outside && self.open {
            return self.set_menu(false);
        }
        false
    }

    /// Desktop layouts never show the panel, whatever its previous state.
    pub fn on_resize(&mut self, desktop: bool) {
        if desktop {
            self.set_menu(false);
        }
    }

    pub fn menu_class(self) -> &'static str {
        if self.open {
            "nav_menu is-open"
        } else {
            "nav_menu"
        }
    }

    pub fn aria_expanded(self) -> &'static str {
        if self.open {
            "true"
        } else {
            "false"
        }
    }

    pub fn toggle_label(self) -> &'static str {
        if self.open {
            "Fermer le menu"
        } else {
            "Ouvrir le menu"
        }
    }

    pub fn toggle_icon(self) -> &'static str {
        if self.open {
            "fa-solid fa-xmark"
        } else {
            "fa-solid fa-bars"
        }
    }
}

/// Shared handle on the page's [`NavState`].
#[derive(Clone, Copy)]
pub struct NavHandle {
    state: Signal<NavState>,
}

impl NavHandle {
    /// Current state; subscribes the calling component.
    pub fn state(&self) -> NavState {
        (self.state)()
    }

    /// Apply `open`, skipping the signal write when nothing changes. Like
    /// every nav operation it is a no-op unless both the panel and the toggle
    /// are on the page.
    pub fn set_menu(&self, open: bool) {
        if !nav_present() {
            return;
        }
        let mut next = *self.state.peek();
        if next.set_menu(open) {
            let mut state = self.state;
            state.set(next);
        }
    }

    /// Current state without subscribing; for event handlers.
    pub fn peek(&self) -> NavState {
        *self.state.peek()
    }

    fn update(&self, f: impl FnOnce(&mut NavState)) {
        let current = *self.state.peek();
        let mut next = current;
        f(&mut next);
        if next != current {
            let mut state = self.state;
            state.set(next);
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn nav_present() -> bool {
    dom::has_element(NAV_MENU_ID) && dom::has_element(NAV_TOGGLE_ID)
}

// Without a browser there is no markup to guard against.
#[cfg(not(target_arch = "wasm32"))]
fn nav_present() -> bool {
    true
}

/// Provide a [`NavHandle`] to the component tree and wire the document click
/// and window resize listeners that close the panel.
#[component]
pub fn NavProvider(children: Element) -> Element {
    let state = use_signal(NavState::default);
    let nav = use_context_provider(|| NavHandle { state });

    use_hook(move || {
        let click = dom::on_document_click(&[NAV_MENU_ID, NAV_TOGGLE_ID], move |origin| {
            nav.update(|s| {
                s.on_document_click(origin);
            });
        });
        let resize = dom::on_viewport_resize(move |desktop| {
            if nav_present() {
                nav.update(|s| s.on_resize(desktop));
            }
        });
        std::rc::Rc::new((click, resize))
    });

    rsx! { {children} }
}

pub fn use_nav() -> NavHandle {
    if let Some(nav) = try_use_context::<NavHandle>() {
        return nav;
    }

    tracing::debug!("missing NavProvider context, using a detached nav state");
    let state = use_signal(NavState::default);
    NavHandle { state }
}

/// A link inside the navigation panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavLink {
    pub href: &'static str,
    pub label_key: &'static str,
}

/// Header navigation: `#navToggle` button plus the `#navMenu` panel.
#[component]
pub fn SiteNav(links: Vec<NavLink>) -> Element {
    let lang = crate::use_lang()();
    let menu = use_nav();
    let state = menu.state();

    rsx! {
        document::Link { rel: "stylesheet", href: NAV_CSS }

        button {
            id: NAV_TOGGLE_ID,
            class: "icon_btn nav_toggle",
            r#type: "button",
            "aria-controls": NAV_MENU_ID,
            "aria-expanded": state.aria_expanded(),
            "aria-label": state.toggle_label(),
            onclick: move |_| menu.set_menu(!menu.peek().is_open()),
            i { class: state.toggle_icon(), "aria-hidden": "true" }
        }
        nav { id: NAV_MENU_ID, class: state.menu_class(),
            ul {
                for link in links {
                    li { key: "{link.href}",
                        crate::AnchorLink { href: link.href, class: "nav_link", {crate::t(lang, link.label_key)} }
                    }
                }
            }
        }
    }
}
