//! Keyword selection for decision requests.
//!
//! Flights are targeted by site name; the front page has no name of its own
//! and is targeted with [`FRONTPAGE_KEYWORD`].

/// Keyword used for the front page (a site with an empty name).
pub const FRONTPAGE_KEYWORD: &str = "reddit.com";

pub fn srname_to_keyword(name: &str) -> &str {
    if name.is_empty() {
        FRONTPAGE_KEYWORD
    } else {
        name
    }
}

/// Keywords for one request: the current page's site if there is one,
/// otherwise the fallback list unchanged.
///
/// An empty `post_site` counts as absent.
pub fn select_keywords(post_site: Option<&str>, fallback: &[String]) -> Vec<String> {
    match post_site {
        Some(site) if !site.is_empty() => vec![site.to_string()],
        _ => fallback.to_vec(),
    }
}

/// Build a keyword list from the sites that currently have live promos.
///
/// The front page (empty name) goes first, the rest keep their order.
pub fn keywords_for_sites<I, S>(names: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut has_frontpage = false;
    let mut rest = Vec::new();
    for name in names {
        let name = name.as_ref();
        if name.is_empty() {
            has_frontpage = true;
        } else {
            rest.push(name.to_string());
        }
    }

    let mut keywords = Vec::with_capacity(rest.len() + 1);
    if has_frontpage {
        keywords.push(srname_to_keyword("").to_string());
    }
    keywords.extend(rest);
    keywords
}
