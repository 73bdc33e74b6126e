//! URL construction for search and pagination.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use reqwest::Url;

use crate::error::ScraperError;

/// Characters escaped in the search path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'\\')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Builds the results URL for `term` under `base_url`.
///
/// The listing site addresses searches as a single path segment with words
/// joined by `-`, e.g. `"Notebook Gamer"` → `{base_url}/notebook-gamer`.
///
/// # Errors
///
/// - [`ScraperError::InvalidSearchTerm`] if `term` is empty, whitespace, or
///   reduces to a `.`/`..` path segment.
/// - [`ScraperError::InvalidUrl`] if `base_url` is not an absolute URL.
pub fn search_url(base_url: &str, term: &str) -> Result<String, ScraperError> {
    let slug = term
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-");
    if slug.is_empty() {
        return Err(ScraperError::InvalidSearchTerm {
            term: term.to_owned(),
            reason: "search term is empty".into(),
        });
    }
    if slug == "." || slug == ".." {
        return Err(ScraperError::InvalidSearchTerm {
            term: term.to_owned(),
            reason: "search term is a dot path segment".into(),
        });
    }

    let base = base_url.trim_end_matches('/');
    Url::parse(base).map_err(|e| ScraperError::InvalidUrl {
        url: base_url.to_owned(),
        reason: e.to_string(),
    })?;

    Ok(format!("{base}/{}", utf8_percent_encode(&slug, PATH_SEGMENT)))
}

/// Resolves a possibly-relative `href` against the page it appeared on.
///
/// # Errors
///
/// Returns [`ScraperError::InvalidUrl`] if either URL cannot be parsed.
pub fn resolve_href(page_url: &str, href: &str) -> Result<String, ScraperError> {
    let base = Url::parse(page_url).map_err(|e| ScraperError::InvalidUrl {
        url: page_url.to_owned(),
        reason: e.to_string(),
    })?;
    let resolved = base.join(href).map_err(|e| ScraperError::InvalidUrl {
        url: href.to_owned(),
        reason: e.to_string(),
    })?;
    Ok(resolved.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_url_joins_words_with_dash() {
        let url = search_url("https://lista.mercadolivre.com.br", "Notebook  Gamer").unwrap();
        assert_eq!(url, "https://lista.mercadolivre.com.br/notebook-gamer");
    }

    #[test]
    fn search_url_strips_trailing_slash_from_base() {
        let url = search_url("https://lista.mercadolivre.com.br/", "mouse").unwrap();
        assert_eq!(url, "https://lista.mercadolivre.com.br/mouse");
    }

    #[test]
    fn search_url_percent_encodes_reserved_and_non_ascii() {
        let url = search_url("https://lista.example", "fone/sem fio ção?").unwrap();
        assert_eq!(url, "https://lista.example/fone%2Fsem-fio-%C3%A7%C3%A3o%3F");
    }

    #[test]
    fn search_url_empty_term_is_error() {
        let err = search_url("https://lista.example", "   ").unwrap_err();
        assert!(matches!(err, ScraperError::InvalidSearchTerm { .. }));
    }

    #[test]
    fn search_url_percent_encodes_backslash() {
        let url = search_url("https://lista.example", "fone\\bluetooth").unwrap();
        assert_eq!(url, "https://lista.example/fone%5Cbluetooth");
        let parsed = Url::parse(&url).unwrap();
        assert_eq!(parsed.path(), "/fone%5Cbluetooth");
    }

    #[test]
    fn search_url_dot_segments_are_error() {
        for term in [".", "..", " .. "] {
            let err = search_url("https://lista.example", term).unwrap_err();
            assert!(
                matches!(err, ScraperError::InvalidSearchTerm { .. }),
                "expected InvalidSearchTerm for {term:?}, got: {err:?}"
            );
        }
    }

    #[test]
    fn search_url_dots_inside_term_are_kept() {
        let url = search_url("https://lista.example", "cabo 1.5m").unwrap();
        assert_eq!(url, "https://lista.example/cabo-1.5m");
    }

    #[test]
    fn search_url_invalid_base_is_error() {
        let err = search_url("not a url", "mouse").unwrap_err();
        assert!(matches!(err, ScraperError::InvalidUrl { .. }));
    }

    #[test]
    fn resolve_href_relative() {
        let url = resolve_href("https://lista.example/mouse", "/mouse_Desde_49").unwrap();
        assert_eq!(url, "https://lista.example/mouse_Desde_49");
    }

    #[test]
    fn resolve_href_absolute_passes_through() {
        let url = resolve_href(
            "https://lista.example/mouse",
            "https://other.example/mouse_Desde_49",
        )
        .unwrap();
        assert_eq!(url, "https://other.example/mouse_Desde_49");
    }
}
