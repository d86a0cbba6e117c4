use dioxus::prelude::*;

/// Supported languages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Lang {
    #[default]
    Fr,
    En,
}

impl Lang {
    pub fn code(self) -> &'static str {
        match self {
            Lang::Fr => "fr",
            Lang::En => "en",
        }
    }
}

/// Provide `Signal<Lang>` to the component tree. The page is French until the
/// visitor switches; the choice lasts for the visit only.
#[component]
pub fn I18nProvider(children: Element) -> Element {
    let lang = use_signal(Lang::default);
    use_context_provider(|| lang);

    rsx! { {children} }
}

pub fn use_lang() -> Signal<Lang> {
    if let Some(sig) = try_use_context::<Signal<Lang>>() {
        return sig;
    }

    tracing::debug!("missing I18nProvider context, using local Lang::Fr signal");
    use_signal(|| Lang::Fr)
}

/// FR / EN switch shown in the footer.
#[component]
pub fn LangSwitch() -> Element {
    let mut lang = use_lang();
    let current = lang();

    rsx! {
        div { class: "lang_switch", role: "group", "aria-label": t(current, "lang.label"),
            for option in [Lang::Fr, Lang::En] {
                button {
                    key: "{option.code()}",
                    class: if option == current { "btn small active" } else { "btn small" },
                    r#type: "button",
                    "aria-pressed": if option == current { "true" } else { "false" },
                    onclick: move |_| lang.set(option),
                    {option.code().to_uppercase()}
                }
            }
        }
    }
}

/// Translate a key for a given language. Falls back to French if missing.
///
/// Control labels and form feedback only exist in French, so they read the
/// same in both languages.
pub fn t(lang: Lang, key: &str) -> String {
    match (lang, key) {
        // Header / nav
        (Lang::Fr, "brand.name") => "Camille Laurent".to_string(),
        (Lang::Fr, "brand.role") => "Développeuse Rust & Web".to_string(),
        (Lang::En, "brand.role") => "Rust & Web developer".to_string(),
        (Lang::Fr, "nav.about") => "À propos".to_string(),
        (Lang::En, "nav.about") => "About".to_string(),
        (Lang::Fr, "nav.projects") => "Projets".to_string(),
        (Lang::En, "nav.projects") => "Projects".to_string(),
        (Lang::Fr, "nav.skills") => "Compétences".to_string(),
        (Lang::En, "nav.skills") => "Skills".to_string(),
        (Lang::Fr, "nav.contact") => "Contact".to_string(),
        (Lang::Fr, "theme.switch_light") => "Passer au thème clair".to_string(),
        (Lang::Fr, "theme.switch_dark") => "Passer au thème sombre".to_string(),
        (Lang::Fr, "lang.label") => "Langue".to_string(),
        (Lang::En, "lang.label") => "Language".to_string(),

        // Hero
        (Lang::Fr, "hero.greeting") => "Bonjour, je suis".to_string(),
        (Lang::En, "hero.greeting") => "Hi, I'm".to_string(),
        (Lang::Fr, "hero.subtitle") => "Je conçois des outils rapides et fiables, du terminal jusqu'au navigateur.".to_string(),
        (Lang::En, "hero.subtitle") => "I build fast, dependable tools, from the terminal to the browser.".to_string(),
        (Lang::Fr, "hero.cta.projects") => "Voir mes projets".to_string(),
        (Lang::En, "hero.cta.projects") => "See my projects".to_string(),
        (Lang::Fr, "hero.cta.contact") => "Me contacter".to_string(),
        (Lang::En, "hero.cta.contact") => "Get in touch".to_string(),

        // Sections
        (Lang::Fr, "about.title") => "À propos".to_string(),
        (Lang::En, "about.title") => "About".to_string(),
        (Lang::Fr, "about.body") => "Après plusieurs années sur des services back-end, je travaille aujourd'hui sur des interfaces web compilées en WebAssembly. J'aime les systèmes simples, bien testés et agréables à maintenir.".to_string(),
        (Lang::En, "about.body") => "After several years on back-end services, I now work on web interfaces compiled to WebAssembly. I like simple, well-tested systems that are pleasant to maintain.".to_string(),
        (Lang::Fr, "projects.title") => "Projets".to_string(),
        (Lang::En, "projects.title") => "Projects".to_string(),
        (Lang::Fr, "projects.cli.title") => "Outil CLI de synchronisation".to_string(),
        (Lang::En, "projects.cli.title") => "Sync CLI".to_string(),
        (Lang::Fr, "projects.cli.body") => "Synchronise des dossiers entre machines avec reprise après coupure.".to_string(),
        (Lang::En, "projects.cli.body") => "Keeps folders in sync across machines and resumes after interruptions.".to_string(),
        (Lang::Fr, "projects.dash.title") => "Tableau de bord temps réel".to_string(),
        (Lang::En, "projects.dash.title") => "Real-time dashboard".to_string(),
        (Lang::Fr, "projects.dash.body") => "Visualisation de métriques en direct, rendue côté client.".to_string(),
        (Lang::En, "projects.dash.body") => "Live metrics visualisation rendered on the client.".to_string(),
        (Lang::Fr, "projects.parser.title") => "Analyseur de configuration".to_string(),
        (Lang::En, "projects.parser.title") => "Config parser".to_string(),
        (Lang::Fr, "projects.parser.body") => "Bibliothèque de parsing avec messages d'erreur précis.".to_string(),
        (Lang::En, "projects.parser.body") => "Parsing library with precise error messages.".to_string(),
        (Lang::Fr, "skills.title") => "Compétences".to_string(),
        (Lang::En, "skills.title") => "Skills".to_string(),

        // Contact
        (Lang::Fr, "contact.title") => "Contact".to_string(),
        (Lang::Fr, "contact.intro") => "Un projet, une question ? Écrivez-moi.".to_string(),
        (Lang::En, "contact.intro") => "A project or a question? Drop me a line.".to_string(),
        (Lang::Fr, "contact.name") => "Nom".to_string(),
        (Lang::En, "contact.name") => "Name".to_string(),
        (Lang::Fr, "contact.email") => "Email".to_string(),
        (Lang::Fr, "contact.message") => "Message".to_string(),
        (Lang::Fr, "contact.send") => "Envoyer".to_string(),
        (Lang::En, "contact.send") => "Send".to_string(),
        (Lang::Fr, "contact.error.name_required") => "Le nom est requis.".to_string(),
        (Lang::Fr, "contact.error.email_required") => "L’email est requis.".to_string(),
        (Lang::Fr, "contact.error.email_invalid") => "Format d’email invalide.".to_string(),
        (Lang::Fr, "contact.error.message_required") => "Le message est requis.".to_string(),
        (Lang::Fr, "contact.error.message_too_short") => "Message trop court (min. 10 caractères).".to_string(),
        (Lang::Fr, "contact.status.error") => "Veuillez corriger les erreurs du formulaire.".to_string(),
        (Lang::Fr, "contact.status.success") => "Message envoyé (simulation). Je reviens vers vous rapidement !".to_string(),

        // Footer
        (Lang::Fr, "footer.rights") => "Tous droits réservés.".to_string(),
        (Lang::En, "footer.rights") => "All rights reserved.".to_string(),
        (Lang::Fr, "footer.top") => "Haut de page".to_string(),
        (Lang::En, "footer.top") => "Back to top".to_string(),

        // Fallback: use French string if present, else show key.
        (Lang::En, k) => t(Lang::Fr, k),
        (Lang::Fr, _) => key.to_string(),
    }
}
