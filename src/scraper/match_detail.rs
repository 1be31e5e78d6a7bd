use ::scraper::{ElementRef, Html};
use itertools::Itertools;
use tracing::{debug, instrument};

use crate::error::Result;
use crate::model::{CommentaryEntry, MatchDetail, TeamScore};
use crate::scraper::{self, any_of, clean_text, Lookup};

const MAX_COMMENTARY: usize = 10;
const MIN_COMMENT_LEN: usize = 10;

const TITLE_MARKERS: [&str; 3] = ["h1.cb-nav-hdr", ".cb-nav-hdr", "h1"];
const STATUS_MARKERS: [&str; 5] = [
    ".cb-text-complete",
    ".cb-text-live",
    ".cb-text-inprogress",
    ".cb-text-stump",
    ".cb-min-stts",
];
const VENUE_MARKERS: [&str; 3] = [r#"a[itemprop="location"]"#, ".cb-venue", ".venue"];
const TEAM_ROW_MARKERS: [&str; 3] = ["div.cb-min-bat-rw", "div.cb-min-tm", "div.team-score"];
const TEAM_CELL_MARKERS: [&str; 3] = [".cb-font-20", ".team-name", "span"];
const COMMENT_MARKERS: [&str; 3] = ["p.cb-com-ln", "div.cb-com-ln", ".commentary-line"];
const OVER_MARKERS: [&str; 2] = [".cb-ovr-num", ".over-number"];

#[instrument(skip(client))]
pub(crate) async fn get_match(
    client: &reqwest::Client,
    base_url: &str,
    match_id: &str,
) -> Result<MatchDetail> {
    let url = format!("{base_url}/live-cricket-scores/{match_id}");
    let markup = scraper::get_markup(client, &url).await?;
    let detail = extract_detail(&markup, match_id)?;
    debug!(
        teams = detail.teams.len(),
        commentary = detail.commentary.len(),
        "parsed match detail"
    );
    Ok(detail)
}

/// Extract header, innings scores and recent commentary from a scorecard page.
///
/// Missing elements leave empty strings and collections behind; nothing here fails
/// on unfamiliar markup.
pub fn extract_detail(markup: &str, match_id: &str) -> Result<MatchDetail> {
    let document = Html::parse_document(markup);
    let root = document.root_element();

    let header_text = |markers: &[&str]| -> Result<String> {
        Ok(Lookup::parse(markers)?.text(&root).unwrap_or_default())
    };

    Ok(MatchDetail {
        id: match_id.to_string(),
        title: header_text(&TITLE_MARKERS)?,
        status: header_text(&STATUS_MARKERS)?,
        venue: header_text(&VENUE_MARKERS)?,
        teams: parse_teams(&root)?,
        commentary: parse_commentary(&root)?,
    })
}

fn parse_teams(root: &ElementRef) -> Result<Vec<TeamScore>> {
    let row_selector = any_of(&TEAM_ROW_MARKERS)?;
    let cells = Lookup::parse(&TEAM_CELL_MARKERS)?;
    let teams = root
        .select(&row_selector)
        .filter_map(|row| {
            let name = cells.nth_text(&row, 0)?;
            let score = cells.nth_text(&row, 1)?;
            (name.chars().count() > 2).then_some(TeamScore { name, score })
        })
        .collect_vec();
    Ok(teams)
}

fn parse_commentary(root: &ElementRef) -> Result<Vec<CommentaryEntry>> {
    let line_selector = any_of(&COMMENT_MARKERS)?;
    let over = Lookup::parse(&OVER_MARKERS)?;
    let commentary = root
        .select(&line_selector)
        .take(MAX_COMMENTARY)
        .map(|line| CommentaryEntry {
            over: over.text(&line).unwrap_or_default(),
            comment: clean_text(&line),
        })
        .filter(|entry| entry.comment.chars().count() > MIN_COMMENT_LEN)
        .collect_vec();
    Ok(commentary)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCORECARD: &str = r#"
        <html><body>
          <h1 class="cb-nav-hdr">India vs Australia, 3rd ODI - Live Cricket Score</h1>
          <div class="cb-nav-subhdr">
            <a itemprop="location" href="/venue/1">  Wankhede Stadium,
               Mumbai </a>
          </div>
          <div class="cb-text-inprogress">Australia need 45 runs in 38 balls</div>
          <div class="cb-min-bat-rw">
            <span class="cb-font-20 text-bold">IND</span>
            <span class="cb-font-20 text-bold">312/7 (50)</span>
          </div>
          <div class="cb-min-bat-rw">
            <span class="cb-font-20 text-bold">AUS</span>
            <span class="cb-font-20 text-bold">268/5 (43.4)</span>
          </div>
          <div class="cb-min-bat-rw"><span class="cb-font-20">NZ</span><span class="cb-font-20">1/0</span></div>
          <div class="cb-min-bat-rw"><span class="cb-font-20">Nobody</span></div>
          <p class="cb-com-ln"><span class="cb-ovr-num">43.4</span> Siraj to Maxwell, FOUR, slashed over point</p>
          <p class="cb-com-ln">Drinks</p>
          <p class="cb-com-ln">Siraj into the attack, replacing Bumrah</p>
        </body></html>
    "#;

    #[test]
    fn test_extract_detail_header() {
        let detail = extract_detail(SCORECARD, "9001").unwrap();
        assert_eq!(detail.id, "9001");
        assert_eq!(
            detail.title,
            "India vs Australia, 3rd ODI - Live Cricket Score"
        );
        assert_eq!(detail.status, "Australia need 45 runs in 38 balls");
        assert_eq!(detail.venue, "Wankhede Stadium, Mumbai");
    }

    #[test]
    fn test_extract_detail_teams() {
        let detail = extract_detail(SCORECARD, "9001").unwrap();
        assert_eq!(
            detail.teams,
            vec![
                TeamScore {
                    name: "IND".to_string(),
                    score: "312/7 (50)".to_string(),
                },
                TeamScore {
                    name: "AUS".to_string(),
                    score: "268/5 (43.4)".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_extract_detail_commentary_drops_short_lines() {
        let detail = extract_detail(SCORECARD, "9001").unwrap();
        assert_eq!(detail.commentary.len(), 2);
        assert_eq!(detail.commentary[0].over, "43.4");
        assert_eq!(
            detail.commentary[0].comment,
            "43.4 Siraj to Maxwell, FOUR, slashed over point"
        );
        assert_eq!(detail.commentary[1].over, "");
    }

    #[test]
    fn test_comment_of_exactly_ten_chars_is_dropped() {
        let markup = r#"<p class="cb-com-ln">0123456789</p><p class="cb-com-ln">0123456789A</p>"#;
        let detail = extract_detail(markup, "1").unwrap();
        assert_eq!(detail.commentary.len(), 1);
        assert_eq!(detail.commentary[0].comment, "0123456789A");
    }

    #[test]
    fn test_commentary_capped_at_ten() {
        let lines = (0..25)
            .map(|i| format!(r#"<p class="cb-com-ln">Ball number {i}, no run, defended</p>"#))
            .join("");
        let detail = extract_detail(&format!("<html><body>{lines}</body></html>"), "1").unwrap();
        assert_eq!(detail.commentary.len(), 10);
        assert_eq!(detail.commentary[9].comment, "Ball number 9, no run, defended");
    }

    #[test]
    fn test_commentary_cap_applies_before_length_filter() {
        let short = r#"<p class="cb-com-ln">Dot ball</p>"#.repeat(10);
        let long = r#"<p class="cb-com-ln">Edged and taken at slip</p>"#;
        let detail = extract_detail(&format!("{short}{long}"), "1").unwrap();
        assert!(detail.commentary.is_empty());
    }

    #[test]
    fn test_unfamiliar_markup_yields_empty_detail() {
        let detail = extract_detail("<html><body><p>Page moved</p></body></html>", "77").unwrap();
        assert_eq!(
            detail,
            MatchDetail {
                id: "77".to_string(),
                title: String::new(),
                status: String::new(),
                venue: String::new(),
                teams: vec![],
                commentary: vec![],
            }
        );
    }
}
