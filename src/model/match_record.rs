use serde::Serialize;

/// Normalized matches extracted from a listing page.
pub type MatchList = Vec<MatchRecord>;

/// Summary of a single match as shown on a score listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRecord {
    pub id: String,
    pub team1: String,
    pub team2: String,
    pub score1: String,
    pub score2: String,
    pub status: String,
    pub match_info: String,
    pub is_live: bool,
    pub match_type: String,
    pub link: String,
}
