//! In-memory scoring search over the mind-map tree.
//!
//! # Responsibility
//! - Flatten the tree, score each node against a query, rank and truncate.
//! - Produce highlighted titles safe against arbitrary user input.
//!
//! # Invariants
//! - Queries shorter than [`MIN_QUERY_CHARS`] characters return no hits.
//! - The root node is never a hit.
//! - At most [`MAX_SEARCH_RESULTS`] hits are returned.
//! - Ranking is stable: equal scores keep pre-order tree position.

use crate::model::node::{MindMapNode, NodeKind};
use log::{debug, warn};
use regex::RegexBuilder;
use std::fmt::{Display, Formatter};

/// Minimum normalized query length, in characters.
pub const MIN_QUERY_CHARS: usize = 2;
/// Maximum number of hits returned by [`search`].
pub const MAX_SEARCH_RESULTS: usize = 10;
/// Score multiplier applied to domain nodes.
pub const DOMAIN_BOOST: f64 = 1.2;

/// Opening marker wrapped around highlighted matches.
pub const HIGHLIGHT_OPEN: &str = "<mark>";
/// Closing marker wrapped around highlighted matches.
pub const HIGHLIGHT_CLOSE: &str = "</mark>";

const SCORE_TITLE_EXACT: f64 = 100.0;
const SCORE_TITLE_START: f64 = 75.0;
const SCORE_TITLE_CONTAINS: f64 = 50.0;
const SCORE_TITLE_FUZZY: f64 = 30.0;
const SCORE_DESCRIPTION: f64 = 25.0;
const SCORE_DESCRIPTION_FUZZY: f64 = 15.0;
const SCORE_CONTENT: f64 = 10.0;

/// Field rule that contributed to a hit's score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MatchField {
    TitleExact,
    TitleStart,
    Title,
    TitleFuzzy,
    Description,
    DescriptionFuzzy,
    Content,
}

impl MatchField {
    /// Stable tag string shown by result badges and logs.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::TitleExact => "title-exact",
            Self::TitleStart => "title-start",
            Self::Title => "title",
            Self::TitleFuzzy => "title-fuzzy",
            Self::Description => "description",
            Self::DescriptionFuzzy => "description-fuzzy",
            Self::Content => "content",
        }
    }
}

impl Display for MatchField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Single ranked result returned by [`search`].
#[derive(Debug, Clone, PartialEq)]
pub struct SearchHit<'a> {
    pub node: &'a MindMapNode,
    pub score: f64,
    /// Contributing rules in evaluation order (title, description, content).
    pub matched_fields: Vec<MatchField>,
    /// Original title with every literal query occurrence wrapped in `<mark>`.
    pub highlighted_title: String,
}

impl SearchHit<'_> {
    pub fn matched(&self, field: MatchField) -> bool {
        self.matched_fields.contains(&field)
    }
}

/// Lowercases and trims a raw query.
pub fn normalize_query(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Searches every non-root node under `root` for `query`.
///
/// Returns an empty list for short queries or a missing root.
pub fn search<'a>(query: &str, root: Option<&'a MindMapNode>) -> Vec<SearchHit<'a>> {
    let query = normalize_query(query);
    let Some(root) = root else {
        return Vec::new();
    };
    if query.chars().count() < MIN_QUERY_CHARS {
        return Vec::new();
    }

    let mut candidates = Vec::new();
    flatten_into(root, &mut candidates);
    let scanned = candidates.len();

    let mut scored = candidates
        .into_iter()
        .filter_map(|node| score_node(node, &query))
        .collect::<Vec<_>>();
    let matched = scored.len();

    // `sort_by` is stable, so ties keep pre-order position.
    scored.sort_by(|a, b| b.1.total_cmp(&a.1));
    scored.truncate(MAX_SEARCH_RESULTS);

    let hits = scored
        .into_iter()
        .map(|(node, score, matched_fields)| SearchHit {
            node,
            score,
            matched_fields,
            highlighted_title: highlight_matches(&node.title, &query),
        })
        .collect::<Vec<_>>();

    debug!(
        "event=search module=search query_chars={} scanned={} matched={} returned={}",
        query.chars().count(),
        scanned,
        matched,
        hits.len()
    );
    hits
}

fn flatten_into<'a>(node: &'a MindMapNode, out: &mut Vec<&'a MindMapNode>) {
    if !node.is_root() {
        out.push(node);
    }
    for child in &node.children {
        flatten_into(child, out);
    }
}

/// Scores one node against an already normalized query.
///
/// Returns `None` when no rule matched.
fn score_node<'a>(
    node: &'a MindMapNode,
    query: &str,
) -> Option<(&'a MindMapNode, f64, Vec<MatchField>)> {
    let title = node.title.to_lowercase();
    let description = node.description.to_lowercase();
    let content = node.content_text().to_lowercase();

    let mut score = 0.0;
    let mut fields = Vec::new();

    if title == query {
        score += SCORE_TITLE_EXACT;
        fields.push(MatchField::TitleExact);
    } else if title.starts_with(query) {
        score += SCORE_TITLE_START;
        fields.push(MatchField::TitleStart);
    } else if title.contains(query) {
        score += SCORE_TITLE_CONTAINS;
        fields.push(MatchField::Title);
    } else if fuzzy_match(&title, query) {
        score += SCORE_TITLE_FUZZY;
        fields.push(MatchField::TitleFuzzy);
    }

    if description.contains(query) {
        score += SCORE_DESCRIPTION;
        fields.push(MatchField::Description);
    } else if fuzzy_match(&description, query) {
        score += SCORE_DESCRIPTION_FUZZY;
        fields.push(MatchField::DescriptionFuzzy);
    }

    if content.contains(query) {
        score += SCORE_CONTENT;
        fields.push(MatchField::Content);
    }

    if node.kind == NodeKind::Domain {
        score *= DOMAIN_BOOST;
    }

    (score > 0.0).then_some((node, score, fields))
}

/// Ordered-subsequence test: every query character appears in `text` in order.
///
/// Both inputs are expected to be lowercased already.
pub fn fuzzy_match(text: &str, query: &str) -> bool {
    let mut pending = query.chars().peekable();
    for ch in text.chars() {
        match pending.peek() {
            Some(expected) if *expected == ch => {
                pending.next();
            }
            Some(_) => {}
            None => break,
        }
    }
    pending.peek().is_none()
}

/// Wraps every case-insensitive occurrence of `query` in `text` with highlight markers.
///
/// The query is matched literally; regex metacharacters are escaped. If the
/// pattern cannot be compiled the text is returned unchanged.
pub fn highlight_matches(text: &str, query: &str) -> String {
    if query.is_empty() {
        return text.to_string();
    }

    let pattern = format!("({})", regex::escape(query));
    match RegexBuilder::new(&pattern).case_insensitive(true).build() {
        Ok(regex) => regex
            .replace_all(text, format!("{HIGHLIGHT_OPEN}${{1}}{HIGHLIGHT_CLOSE}").as_str())
            .into_owned(),
        Err(err) => {
            warn!("event=highlight module=search status=error error={err}");
            text.to_string()
        }
    }
}
