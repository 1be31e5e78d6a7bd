/// Which match listing an extraction serves. Each feed has its own defaults and cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Feed {
    Live,
    Recent,
}

impl Feed {
    /// Maximum number of records returned for this feed.
    pub fn cap(self) -> usize {
        match self {
            Feed::Live => 20,
            Feed::Recent => 15,
        }
    }

    /// Status used when a headline carries no `" - "` status part.
    pub fn default_status(self) -> &'static str {
        match self {
            Feed::Live => "Check Cricbuzz",
            Feed::Recent => "",
        }
    }

    /// Category label attached to records from this feed.
    pub fn match_info(self) -> &'static str {
        match self {
            Feed::Live => "Live Match",
            Feed::Recent => "Recent Match",
        }
    }

    /// Only the live listing falls back to scanning score cards.
    pub fn uses_card_fallback(self) -> bool {
        matches!(self, Feed::Live)
    }

    /// Identifier for a record whose link carries none.
    pub fn synthesize_id(self, stamp: i64, index: usize) -> String {
        match self {
            Feed::Live => format!("{self}-{index}"),
            Feed::Recent => format!("{self}-{stamp}-{index}"),
        }
    }
}
