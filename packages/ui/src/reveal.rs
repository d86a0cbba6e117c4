use std::rc::Rc;

use dioxus::prelude::*;

use crate::config::REVEAL_THRESHOLD;
use crate::dom::{self, Watch};

/// One-shot visibility of a `.reveal` element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RevealState {
    visible: bool,
}

impl RevealState {
    pub fn is_visible(self) -> bool {
        self.visible
    }

    /// Feed one intersection entry. Returns whether the element should stay
    /// observed; once visible it never goes back.
    pub fn on_intersection(&mut self, is_intersecting: bool) -> bool {
        if is_intersecting {
            self.visible = true;
        }
        !self.visible
    }

    /// Hosts without intersection observation show everything at once.
    pub fn reveal_now(&mut self) {
        self.visible = true;
    }

    pub fn class(self) -> &'static str {
        if self.visible {
            "reveal visible"
        } else {
            "reveal"
        }
    }
}

/// Section that fades in the first time 12% of it scrolls into view.
///
/// The observer finds the section by `id`, so the id must be the same in
/// server-rendered and hydrated markup.
#[component]
pub fn Reveal(
    #[props(into)] id: String,
    #[props(default, into)] class: String,
    children: Element,
) -> Element {
    let mut state = use_signal(RevealState::default);
    let mut watch = use_signal(|| None::<Rc<Watch>>);

    let observed_id = id.clone();
    use_effect(move || {
        let outcome = dom::watch_visibility(&observed_id, REVEAL_THRESHOLD, move |hit| {
            let mut next = *state.peek();
            let keep = next.on_intersection(hit);
            if next != *state.peek() {
                state.set(next);
            }
            keep
        });
        match outcome {
            Watch::Unsupported => {
                tracing::debug!(id = %observed_id, "IntersectionObserver unavailable, revealing");
                state.with_mut(RevealState::reveal_now);
            }
            Watch::MissingElement => {
                tracing::debug!(id = %observed_id, "reveal element not mounted");
            }
            Watch::Observing(_) => {}
        }
        watch.set(Some(Rc::new(outcome)));
    });

    let classes = if class.is_empty() {
        state().class().to_string()
    } else {
        format!("{} {class}", state().class())
    };

    rsx! {
        section { id: "{id}", class: "{classes}", {children} }
    }
}
