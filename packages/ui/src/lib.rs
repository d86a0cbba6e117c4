//! This crate contains all shared UI for the portfolio page.

pub mod config;
pub mod dom;
pub mod storage;

mod hero;
pub use hero::Hero;

mod navbar;
pub use navbar::Navbar;

mod nav;
pub use nav::{use_nav, NavHandle, NavLink, NavProvider, NavState, SiteNav};

mod anchor;
pub use anchor::{follow_anchor, AnchorLink, AnchorOutcome, AnchorTarget};

mod reveal;
pub use reveal::{Reveal, RevealState};

mod contact;
pub use contact::{
    validate_contact, ContactForm, ContactFormState, ContactInput, FieldError, FieldErrors,
    FormStatus,
};

mod sections;
pub use sections::{About, Contact, Projects, Skills};

mod footer;
pub use footer::{current_year, Footer};

mod theme;
pub use theme::{PortfolioTheme, ThemeController, ThemePreference, ThemeToggle};

mod i18n;
pub use i18n::{t, use_lang, I18nProvider, Lang, LangSwitch};

