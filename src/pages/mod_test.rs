use super::*;


#[test]
fn nav_routes_have_paths_and_labels() {
    assert_eq!(NavRoute::Home.path(), "/home");
    assert_eq!(NavRoute::About.path(), "/about");
    assert_eq!(NavRoute::Home.label(), "Home");
    assert_eq!(NavRoute::About.label(), "About");
}

#[test]
fn not_found_page_highlights_nothing() {
    let html = render_not_found();
    assert!(html.contains("Page not found."));
    assert!(html.contains(shell::STYLESHEET_PATH));
    assert!(!html.contains(r#"class="active""#));
    assert!(html.contains(r#"href="/home""#));
}
