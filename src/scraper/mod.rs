pub(crate) mod match_detail;
pub(crate) mod matchlist;

use ::scraper::{ElementRef, Selector};
use itertools::Itertools;
use tracing::debug;

use crate::error::{CricketError, Result};

/// Origin prepended to relative match links.
pub(crate) const LINK_ORIGIN: &str = "https://www.cricbuzz.com";

/// Path fragment shared by every per-match scorecard link.
pub(crate) const MATCH_PATH_MARKER: &str = "/live-cricket-scores/";

/// Fetch a URL and return the response body as markup text.
pub(crate) async fn get_markup(client: &reqwest::Client, url: &str) -> Result<String> {
    debug!(url, "fetching page");

    let response = client.get(url).send().await.map_err(|e| CricketError::Http {
        url: url.to_owned(),
        source: e,
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(CricketError::UnexpectedStatus {
            url: url.to_owned(),
            status,
        });
    }

    response.text().await.map_err(|e| CricketError::ResponseBody {
        url: url.to_owned(),
        source: e,
    })
}

/// Trim and collapse every run of whitespace into a single space.
pub(crate) fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().join(" ")
}

/// All text beneath `element`, whitespace-collapsed.
pub(crate) fn clean_text(element: &ElementRef) -> String {
    collapse_whitespace(&element.text().collect::<String>())
}

/// Turn a scraped href into an absolute URL.
pub(crate) fn absolute_link(href: &str) -> String {
    if href.starts_with("http://") || href.starts_with("https://") {
        href.to_string()
    } else if href.starts_with('/') {
        format!("{LINK_ORIGIN}{href}")
    } else {
        format!("{LINK_ORIGIN}/{href}")
    }
}

/// Match id carried by a link such as `/live-cricket-scores/12345/ind-vs-aus`.
pub(crate) fn match_id_from_href(href: &str) -> Option<String> {
    href.split('/')
        .nth(2)
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
}

/// A single selector matching any of `markers`, yielding elements in document order.
pub(crate) fn any_of(markers: &[&str]) -> Result<Selector> {
    let markers = markers.join(", ");
    let selector = Selector::parse(&markers)?;
    Ok(selector)
}

/// An ordered list of structural markers tried one after another.
///
/// The first marker that produces a non-empty text wins; later markers are only
/// consulted when every earlier one comes up empty.
pub(crate) struct Lookup {
    selectors: Vec<Selector>,
}

impl Lookup {
    pub(crate) fn parse(markers: &[&str]) -> Result<Self> {
        let selectors = markers
            .iter()
            .map(|marker| Selector::parse(marker))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(Self { selectors })
    }

    /// Text of the first non-empty match under `element`.
    pub(crate) fn text(&self, element: &ElementRef) -> Option<String> {
        self.nth_text(element, 0)
    }

    /// Text of the `n`th non-empty match for the first marker that has one.
    pub(crate) fn nth_text(&self, element: &ElementRef, n: usize) -> Option<String> {
        self.selectors.iter().find_map(|selector| {
            element
                .select(selector)
                .map(|e| clean_text(&e))
                .filter(|text| !text.is_empty())
                .nth(n)
        })
    }

    /// Whether any marker matches beneath `element`.
    pub(crate) fn is_present(&self, element: &ElementRef) -> bool {
        self.selectors
            .iter()
            .any(|selector| element.select(selector).next().is_some())
    }
}
