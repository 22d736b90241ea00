use super::*;

#[test]
fn escape_closes_other_keys_do_not() {
    assert!(is_close_key("Escape"));
    assert!(!is_close_key("Enter"));
    assert!(!is_close_key("escape"));
}

#[test]
fn nav_links_cover_public_routes() {
    let hrefs: Vec<&str> = NAV_LINKS.iter().map(|(href, _)| *href).collect();
    assert_eq!(hrefs, vec!["/", "/tutors", "/signup", "/login"]);
}
