use dioxus::prelude::*;

use crate::config::THEME_STORAGE_KEY;
use crate::storage::{LocalStorage, PreferenceStore};

const THEME_CSS: Asset = asset!("/assets/styling/theme.css");

/// Visual theme of the page. Dark unless the visitor picked light.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ThemePreference {
    #[default]
    Dark,
    Light,
}

impl ThemePreference {
    /// Only the exact stored string `"light"` selects the light theme.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("light") => ThemePreference::Light,
            _ => ThemePreference::Dark,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemePreference::Dark => "dark",
            ThemePreference::Light => "light",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemePreference::Dark => ThemePreference::Light,
            ThemePreference::Light => ThemePreference::Dark,
        }
    }

    pub fn is_light(self) -> bool {
        self == ThemePreference::Light
    }

    pub fn icon_class(self) -> &'static str {
        match self {
            ThemePreference::Dark => "fa-solid fa-moon",
            ThemePreference::Light => "fa-solid fa-sun",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ThemePreference::Dark => "Dark",
            ThemePreference::Light => "Light",
        }
    }
}

/// Reads and persists the theme through a [`PreferenceStore`].
pub struct ThemeController<S> {
    store: S,
}

impl<S: PreferenceStore> ThemeController<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Preference saved by a previous visit, or dark.
    pub fn initial(&self) -> ThemePreference {
        let stored = self.store.load(THEME_STORAGE_KEY);
        let theme = ThemePreference::from_stored(stored.as_deref());
        tracing::debug!(stored = ?stored, theme = theme.as_str(), "theme restored");
        theme
    }

    /// Flip `current`, persist the result and return it.
    pub fn toggle(&self, current: ThemePreference) -> ThemePreference {
        let next = current.toggled();
        self.store.save(THEME_STORAGE_KEY, next.as_str());
        tracing::info!(theme = next.as_str(), "theme toggled");
        next
    }
}

#[component]
pub fn PortfolioTheme() -> Element {
    rsx! { document::Link { rel: "stylesheet", href: THEME_CSS } }
}

/// Header button switching between the light and dark themes.
///
/// Renders `#themeToggle` with `#themeIcon` and `#themeLabel`, and keeps the
/// `<body>` theme class in sync with the current choice.
#[component]
pub fn ThemeToggle() -> Element {
    let lang = crate::use_lang()();
    let mut theme = use_signal(ThemePreference::default);

    use_effect(move || {
        theme.set(ThemeController::new(LocalStorage).initial());
    });

    use_effect(move || {
        crate::dom::apply_body_theme(theme().is_light());
    });

    let current = theme();
    let aria_label = match current.toggled() {
        ThemePreference::Light => crate::t(lang, "theme.switch_light"),
        ThemePreference::Dark => crate::t(lang, "theme.switch_dark"),
    };

    rsx! {
        button {
            id: "themeToggle",
            class: "icon_btn theme_toggle",
            r#type: "button",
            "aria-label": "{aria_label}",
            onclick: move |_| {
                let next = ThemeController::new(LocalStorage).toggle(theme());
                theme.set(next);
            },
            i { id: "themeIcon", class: current.icon_class(), "aria-hidden": "true" }
            span { id: "themeLabel", {current.label()} }
        }
    }
}
