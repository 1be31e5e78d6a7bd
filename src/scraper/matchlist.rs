use ::scraper::{ElementRef, Html, Selector};
use chrono::Utc;
use itertools::Itertools;
use tracing::{debug, instrument, warn};

use crate::error::{CricketError, Result};
use crate::model::{Feed, MatchList, MatchRecord};
use crate::scraper::{
    self, absolute_link, any_of, clean_text, match_id_from_href, Lookup, LINK_ORIGIN,
    MATCH_PATH_MARKER,
};

const SCORE_PLACEHOLDER: &str = "N/A";
const RECENT_EMPTY_STATUS: &str = "Scheduled";
const MATCH_TYPE: &str = "Cricket";

const LIVE_KEYWORDS: [&str; 6] = ["need", "trail", "lead", "opt to", "batting", "stumps"];

const CARD_MARKERS: [&str; 3] = ["div.cb-mtch-lst", "div.cb-lv-main", "div.match-card"];
const CARD_TEAM_MARKERS: [&str; 3] = [".cb-hmscg-tm-nm", ".cb-team-name", ".team-name"];
const CARD_SCORE_MARKERS: [&str; 3] = [".cb-hmscg-tm-scr", ".cb-team-score", ".score"];
const CARD_STATUS_MARKERS: [&str; 5] = [
    ".cb-text-live",
    ".cb-text-complete",
    ".cb-text-stump",
    ".cb-text-preview",
    ".status",
];
const CARD_LIVE_MARKERS: [&str; 2] = [".cb-text-live", ".live-indicator"];

#[instrument(skip(client))]
pub(crate) async fn get_matchlist(
    client: &reqwest::Client,
    base_url: &str,
    feed: Feed,
) -> Result<MatchList> {
    let url = format!("{base_url}/cricket-match/live-scores");
    let markup = scraper::get_markup(client, &url).await?;
    let matches = extract_matches(&markup, feed)?;
    debug!(count = matches.len(), %feed, "parsed match list");

    if matches.is_empty() && feed == Feed::Live {
        return Err(CricketError::NoMatches {
            context: "live score listing",
        });
    }
    Ok(matches)
}

/// Extract the normalized match list for `feed` from a listing page.
///
/// Runs [`collect_candidates`] and then [`Extraction::finish`] with the feed's cap.
pub fn extract_matches(markup: &str, feed: Feed) -> Result<MatchList> {
    Ok(collect_candidates(markup, feed)?.finish(feed.cap()))
}

/// Which strategy produced the candidates of an [`Extraction`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Headline anchors linking to a scorecard.
    Anchors,
    /// Score cards, scanned only when no anchor qualified.
    Cards,
    /// Neither strategy found anything.
    Empty,
}

/// Raw, unfiltered output of the first extraction stage.
#[derive(Debug, Clone)]
pub struct Extraction {
    pub strategy: Strategy,
    pub candidates: Vec<MatchRecord>,
}

impl Extraction {
    fn empty() -> Self {
        Self {
            strategy: Strategy::Empty,
            candidates: vec![],
        }
    }

    /// Drop repeated ids (first occurrence wins) and keep at most `cap` records.
    pub fn finish(self, cap: usize) -> MatchList {
        self.candidates
            .into_iter()
            .unique_by(|m| m.id.clone())
            .take(cap)
            .collect_vec()
    }
}

/// First extraction stage: anchors, then score cards if the feed allows it and no
/// anchor produced a record.
pub fn collect_candidates(markup: &str, feed: Feed) -> Result<Extraction> {
    let document = Html::parse_document(markup);
    let stamp = Utc::now().timestamp_millis();

    let anchors = parse_anchors(&document, feed, stamp)?;
    if !anchors.is_empty() {
        return Ok(Extraction {
            strategy: Strategy::Anchors,
            candidates: anchors,
        });
    }
    if !feed.uses_card_fallback() {
        return Ok(Extraction::empty());
    }

    warn!(%feed, "no match anchors found, scanning score cards");
    let cards = parse_cards(&document)?;
    if cards.is_empty() {
        return Ok(Extraction::empty());
    }
    Ok(Extraction {
        strategy: Strategy::Cards,
        candidates: cards,
    })
}

/// Teams and status read off a listing headline such as
/// `"India vs Australia - India need 70 runs"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Headline {
    pub team1: String,
    pub team2: String,
    pub status: Option<String>,
}

/// Split a headline into teams and status.
///
/// - no `" vs "`: `None`
/// - only the text between the first and second `" vs "` is used for team two
/// - the first `" - "` after `" vs "` separates team two from the status; any later
///   dashes stay inside the status
/// - no `" - "`: status is `None`
pub(crate) fn parse_headline(text: &str) -> Option<Headline> {
    let mut parts = text.split(" vs ");
    let team1 = parts.next()?.trim().to_string();
    let rest = parts.next()?;

    let (team2, status) = match rest.split_once(" - ") {
        Some((team2, status)) => (team2, Some(status.trim().to_string())),
        None => (rest, None),
    };

    Some(Headline {
        team1,
        team2: team2.trim().to_string(),
        status,
    })
}

/// Permissive live detection: anything that reads like play in progress, or anything
/// that has not been won yet.
pub(crate) fn is_live_status(status: &str) -> bool {
    let status = status.to_lowercase();
    LIVE_KEYWORDS.iter().any(|k| status.contains(k)) || !status.contains("won")
}

fn parse_anchors(document: &Html, feed: Feed, stamp: i64) -> Result<Vec<MatchRecord>> {
    let anchor_selector = format!(r#"a[href*="{MATCH_PATH_MARKER}"]"#);
    let selector = Selector::parse(&anchor_selector)?;
    let records = document
        .select(&selector)
        .enumerate()
        .filter_map(|(index, anchor)| {
            let href = anchor.value().attr("href").unwrap_or_default();
            let headline = parse_headline(&clean_text(&anchor))?;
            Some(anchor_record(href, headline, feed, stamp, index))
        })
        .collect_vec();
    Ok(records)
}

fn anchor_record(
    href: &str,
    headline: Headline,
    feed: Feed,
    stamp: i64,
    index: usize,
) -> MatchRecord {
    let status = headline
        .status
        .unwrap_or_else(|| feed.default_status().to_string());
    let (status, is_live) = match feed {
        Feed::Live => {
            let is_live = is_live_status(&status);
            (status, is_live)
        }
        Feed::Recent if status.is_empty() => (RECENT_EMPTY_STATUS.to_string(), false),
        Feed::Recent => (status, false),
    };

    MatchRecord {
        id: match_id_from_href(href).unwrap_or_else(|| feed.synthesize_id(stamp, index)),
        team1: headline.team1,
        team2: headline.team2,
        score1: SCORE_PLACEHOLDER.to_string(),
        score2: SCORE_PLACEHOLDER.to_string(),
        status,
        match_info: feed.match_info().to_string(),
        is_live,
        match_type: MATCH_TYPE.to_string(),
        link: absolute_link(href),
    }
}

struct CardMarkers {
    team: Lookup,
    score: Lookup,
    status: Lookup,
    live: Lookup,
    link: Selector,
}

impl CardMarkers {
    fn parse() -> Result<Self> {
        let link_selector = format!(r#"a[href*="{MATCH_PATH_MARKER}"]"#);
        let link = Selector::parse(&link_selector)?;
        Ok(Self {
            team: Lookup::parse(&CARD_TEAM_MARKERS)?,
            score: Lookup::parse(&CARD_SCORE_MARKERS)?,
            status: Lookup::parse(&CARD_STATUS_MARKERS)?,
            live: Lookup::parse(&CARD_LIVE_MARKERS)?,
            link,
        })
    }
}

fn parse_cards(document: &Html) -> Result<Vec<MatchRecord>> {
    let selector = any_of(&CARD_MARKERS)?;
    let markers = CardMarkers::parse()?;
    let records = document
        .select(&selector)
        .enumerate()
        .filter_map(|(index, card)| parse_card(&card, &markers, index))
        .collect_vec();
    debug!(count = records.len(), "parsed score cards");
    Ok(records)
}

fn parse_card(card: &ElementRef, markers: &CardMarkers, index: usize) -> Option<MatchRecord> {
    let team1 = markers.team.nth_text(card, 0)?;
    let team2 = markers.team.nth_text(card, 1)?;
    if team1.chars().count() <= 2 || team2.chars().count() <= 2 {
        return None;
    }

    let href = card
        .select(&markers.link)
        .next()
        .and_then(|a| a.value().attr("href"));
    let id = href
        .and_then(match_id_from_href)
        .unwrap_or_else(|| format!("card-{index}"));
    let link = href
        .map(absolute_link)
        .unwrap_or_else(|| format!("{LINK_ORIGIN}/cricket-match/live-scores"));

    let score = |n| {
        markers
            .score
            .nth_text(card, n)
            .unwrap_or_else(|| SCORE_PLACEHOLDER.to_string())
    };

    Some(MatchRecord {
        id,
        team1,
        team2,
        score1: score(0),
        score2: score(1),
        status: markers
            .status
            .text(card)
            .unwrap_or_else(|| Feed::Live.default_status().to_string()),
        match_info: Feed::Live.match_info().to_string(),
        is_live: markers.live.is_present(card),
        match_type: MATCH_TYPE.to_string(),
        link,
    })
}
