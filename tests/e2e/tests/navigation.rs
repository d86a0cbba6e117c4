use e2e::test_server::TestServer;

const PAGE_IDS: [&str; 15] = [
    "year",
    "themeToggle",
    "themeIcon",
    "themeLabel",
    "navToggle",
    "navMenu",
    "contactForm",
    "name",
    "email",
    "message",
    "nameError",
    "emailError",
    "messageError",
    "formStatus",
    "contact",
];

#[tokio::test]
#[ignore = "spawns the web server; set PORTFOLIO_E2E_URL to reuse a running one"]
async fn test_homepage_loads() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");

    let response = reqwest::get(server.url())
        .await
        .expect("Failed to fetch homepage");

    assert_eq!(response.status(), 200, "Homepage should return 200 OK");

    let body = response.text().await.expect("Failed to read body");
    for id in PAGE_IDS {
        assert!(body.contains(&format!("id=\"{id}\"")), "missing #{id}");
    }
    assert!(body.contains("class=\"reveal"), "missing .reveal sections");
    assert!(body.contains("href=\"#about\""), "missing in-page links");
}
