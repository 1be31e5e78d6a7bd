use serde::Serialize;

/// Scorecard summary for a single match.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchDetail {
    pub id: String,
    pub title: String,
    pub status: String,
    pub venue: String,
    pub teams: Vec<TeamScore>,
    pub commentary: Vec<CommentaryEntry>,
}

/// A team and its innings score as shown in the match header.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamScore {
    pub name: String,
    pub score: String,
}

/// One line of ball-by-ball commentary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommentaryEntry {
    /// Over label such as `19.4`, empty when the line carries none.
    pub over: String,
    pub comment: String,
}
