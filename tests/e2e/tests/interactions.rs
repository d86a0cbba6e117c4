//! Browser-level checks of the page controllers. They need Chrome and a
//! hydrated build, e.g. `dx serve --platform web` with
//! `PORTFOLIO_E2E_URL=http://localhost:8080`.

use std::thread::sleep;
use std::time::Duration;

use e2e::browser::Browser;
use e2e::test_server::TestServer;
use serde_json::Value;

fn settle() {
    sleep(Duration::from_millis(300));
}

#[tokio::test]
#[ignore = "requires Chrome and a hydrated dev server"]
async fn theme_toggle_persists_choice() {
    let server = TestServer::start().await.expect("server");
    let browser = Browser::launch().expect("browser");
    let page = browser.new_page().expect("page");
    page.goto(server.url()).expect("goto");

    page.eval("localStorage.removeItem('portfolio_theme')").expect("clear");
    page.reload().expect("reload");
    settle();
    assert_eq!(page.find_element("#themeLabel").expect("label"), "Dark");
    assert_eq!(
        page.eval("document.body.classList.contains('dark')").expect("eval"),
        Value::Bool(true)
    );

    page.click("#themeToggle").expect("toggle");
    settle();
    assert_eq!(page.find_element("#themeLabel").expect("label"), "Light");
    assert_eq!(
        page.eval("localStorage.getItem('portfolio_theme')").expect("eval"),
        Value::String("light".into())
    );

    page.reload().expect("reload");
    settle();
    assert_eq!(
        page.eval("document.body.classList.contains('light') && !document.body.classList.contains('dark')")
            .expect("eval"),
        Value::Bool(true)
    );
}

#[tokio::test]
#[ignore = "requires Chrome and a hydrated dev server"]
async fn mobile_nav_opens_and_closes_on_outside_click() {
    let server = TestServer::start().await.expect("server");
    let browser = Browser::launch_with_size(420, 900).expect("browser");
    let page = browser.new_page().expect("page");
    page.goto(server.url()).expect("goto");
    settle();

    page.click("#navToggle").expect("open");
    settle();
    assert_eq!(
        page.attribute("#navToggle", "aria-expanded").expect("attr").as_deref(),
        Some("true")
    );
    assert_eq!(
        page.attribute("#navToggle", "aria-label").expect("attr").as_deref(),
        Some("Fermer le menu")
    );

    page.click("#navMenu").expect("inside click");
    settle();
    assert_eq!(
        page.attribute("#navToggle", "aria-expanded").expect("attr").as_deref(),
        Some("true")
    );

    page.click("#about h2").expect("outside click");
    settle();
    assert_eq!(
        page.attribute("#navMenu", "class").expect("attr").as_deref(),
        Some("nav_menu")
    );
}

#[tokio::test]
#[ignore = "requires Chrome and a hydrated dev server"]
async fn nav_link_scrolls_and_closes_mobile_menu() {
    let server = TestServer::start().await.expect("server");
    let browser = Browser::launch_with_size(420, 900).expect("browser");
    let page = browser.new_page().expect("page");
    page.goto(server.url()).expect("goto");
    settle();

    page.click("#navToggle").expect("open");
    settle();
    assert_eq!(
        page.attribute("#navToggle", "aria-expanded").expect("attr").as_deref(),
        Some("true")
    );

    page.click(r##"#navMenu a[href="#about"]"##).expect("nav link");
    settle();
    assert_eq!(
        page.attribute("#navToggle", "aria-expanded").expect("attr").as_deref(),
        Some("false")
    );
    assert_eq!(
        page.eval("window.location.hash === ''").expect("eval"),
        Value::Bool(true)
    );
}

#[tokio::test]
#[ignore = "requires Chrome and a hydrated dev server"]
async fn contact_form_reports_errors_then_succeeds() {
    let server = TestServer::start().await.expect("server");
    let browser = Browser::launch().expect("browser");
    let page = browser.new_page().expect("page");
    page.goto(server.url()).expect("goto");
    settle();

    page.type_text("#email", "bad").expect("email");
    page.type_text("#message", "short").expect("message");
    page.click("#contactForm button[type=submit]").expect("submit");
    settle();

    assert_eq!(page.find_element("#nameError").expect("err"), "Le nom est requis.");
    assert_eq!(page.find_element("#emailError").expect("err"), "Format d’email invalide.");
    assert_eq!(
        page.find_element("#messageError").expect("err"),
        "Message trop court (min. 10 caractères)."
    );
    assert_eq!(
        page.find_element("#formStatus").expect("status"),
        "Veuillez corriger les erreurs du formulaire."
    );
    assert_eq!(page.attribute("#name", "aria-invalid").expect("attr").as_deref(), Some("true"));

    page.reload().expect("reload");
    settle();
    page.type_text("#name", "Jane").expect("name");
    page.type_text("#email", "jane@example.com").expect("email");
    page.type_text("#message", "Hello, this is long enough.").expect("message");
    page.click("#contactForm button[type=submit]").expect("submit");
    settle();

    assert_eq!(
        page.find_element("#formStatus").expect("status"),
        "Message envoyé (simulation). Je reviens vers vous rapidement !"
    );
    assert_eq!(page.eval("document.getElementById('name').value").expect("eval"), Value::String(String::new()));
    assert_eq!(page.attribute("#email", "aria-invalid").expect("attr").as_deref(), Some("false"));
}
