//! robots.txt gate.
//!
//! The check is deliberately narrow: a path is refused only when the
//! document carries a blanket `Disallow: /` and also a `Disallow:` line for
//! exactly the requested path. Prefixes and user-agent groups are not
//! considered.

use url::Url;

/// `{scheme}://{host[:port]}/robots.txt` for the given page.
pub fn robots_url(page: &Url) -> Result<Url, url::ParseError> {
    page.join("/robots.txt")
}

pub fn is_path_allowed(robots: &str, path: &str) -> bool {
    let disallowed: Vec<&str> = robots
        .lines()
        .filter_map(|line| line.trim().strip_prefix("Disallow:"))
        .map(str::trim)
        .collect();

    let blanket = disallowed.iter().any(|p| *p == "/");
    let exact = disallowed.iter().any(|p| *p == path);

    !(blanket && exact)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROBOTS: &str = "User-agent: *\nDisallow: /\nDisallow: /private\n";

    #[test]
    fn test_robots_url() {
        let page = Url::parse("https://example.com/team/contact?x=1").unwrap();
        assert_eq!(robots_url(&page).unwrap().as_str(), "https://example.com/robots.txt");

        let page = Url::parse("http://localhost:8080/a/b").unwrap();
        assert_eq!(robots_url(&page).unwrap().as_str(), "http://localhost:8080/robots.txt");
    }

    #[test]
    fn test_exact_path_is_refused() {
        assert!(!is_path_allowed(ROBOTS, "/private"));
    }

    #[test]
    fn test_other_paths_are_allowed() {
        assert!(is_path_allowed(ROBOTS, "/public"));
        assert!(is_path_allowed(ROBOTS, "/private/nested"));
        assert!(is_path_allowed(ROBOTS, "/priv"));
    }

    #[test]
    fn test_root_with_blanket_is_refused() {
        assert!(!is_path_allowed(ROBOTS, "/"));
    }

    #[test]
    fn test_exact_match_without_blanket_is_allowed() {
        let robots = "User-agent: *\nDisallow: /private\n";
        assert!(is_path_allowed(robots, "/private"));
    }

    #[test]
    fn test_empty_document_allows() {
        assert!(is_path_allowed("", "/"));
        assert!(is_path_allowed("<html>Not Found</html>", "/private"));
    }
}
