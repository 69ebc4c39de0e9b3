//! Token-based search index over the department directory.
//!
//! Each department contributes one document whose indexed fields are
//! name, slug, and email. Tokenization happens once at build time; a
//! query is answered by scoring every document against the query tokens
//! (the directory is small and fixed, so a linear scan with
//! precomputed tokens is the whole engine).

use crate::error::{SearchError, SearchResult as SearchQueryResult};
use crate::models::{Department, SearchHit};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

/// Score contribution of a query token equal to a document token.
const EXACT_TOKEN_SCORE: u32 = 3;

/// Score contribution of a query token that is a prefix of a document token.
const PREFIX_TOKEN_SCORE: u32 = 1;

/// Bonus when the whole query appears as a substring of an indexed field.
const PHRASE_BONUS: u32 = 4;

static TOKEN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\p{L}\p{N}]+").expect("valid regex"));

/// Split text into lowercased runs of Unicode letters and digits.
fn tokenize(text: &str) -> Vec<String> {
    TOKEN_RE
        .find_iter(&text.to_lowercase())
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Read-only query capability over a built directory.
///
/// The concrete backend is interchangeable: anything that can answer
/// slug lookups and ranked token queries satisfies the contract. The
/// serving layer only ever holds this trait behind a shared handle, so
/// a backend swap never touches callers.
pub trait SearchIndex: Send + Sync {
    /// Exact, case-sensitive lookup of a stored slug. O(1) expected.
    fn lookup_slug(&self, slug: &str) -> Option<&Department>;

    /// Ranked token/substring query over name, slug, and email.
    fn query(&self, text: &str) -> SearchQueryResult<Vec<SearchHit>>;

    /// All loaded departments, in name-ascending order.
    fn departments(&self) -> &[Department];

    /// Number of indexed departments.
    fn len(&self) -> usize;

    /// Whether the index holds no departments.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One searchable document, precomputed at build time.
#[derive(Debug, Clone)]
struct IndexedDocument {
    /// Tokens extracted from name, slug, and email
    tokens: Vec<String>,

    /// Lowercased concatenation of the indexed fields, for phrase matching
    haystack: String,
}

/// In-memory token index over the full department set.
///
/// Built once at startup, immutable afterwards. "Reload" means building
/// a fresh `TokenIndex` and swapping it in through
/// [`IndexHandle`](crate::search::IndexHandle).
pub struct TokenIndex {
    /// Departments in name-ascending order; doc id = position
    departments: Vec<Department>,

    /// Per-department search documents, parallel to `departments`
    documents: Vec<IndexedDocument>,

    /// slug -> doc id
    by_slug: HashMap<String, usize>,
}

impl TokenIndex {
    /// Build the index from a loaded department set.
    ///
    /// Departments are expected sorted by name ascending with unique
    /// slugs already assigned (the loader guarantees both).
    pub fn build(departments: Vec<Department>) -> Self {
        let mut documents = Vec::with_capacity(departments.len());
        let mut by_slug = HashMap::with_capacity(departments.len());

        for (doc_id, dept) in departments.iter().enumerate() {
            let haystack =
                format!("{} {} {}", dept.name, dept.slug, dept.email).to_lowercase();
            documents.push(IndexedDocument {
                tokens: tokenize(&haystack),
                haystack,
            });
            by_slug.insert(dept.slug.clone(), doc_id);
        }

        Self {
            departments,
            documents,
            by_slug,
        }
    }

    /// Score one document against the query, or None if it does not match.
    ///
    /// Every query token must match some document token (exactly or as a
    /// prefix); a whole-query substring hit adds [`PHRASE_BONUS`].
    fn score_document(&self, doc: &IndexedDocument, query: &str, tokens: &[String]) -> Option<u32> {
        let mut score = 0;

        for token in tokens {
            let mut best = 0;
            for doc_token in &doc.tokens {
                if doc_token == token {
                    best = EXACT_TOKEN_SCORE;
                    break;
                }
                if doc_token.starts_with(token.as_str()) {
                    best = best.max(PREFIX_TOKEN_SCORE);
                }
            }
            if best == 0 {
                return None;
            }
            score += best;
        }

        if doc.haystack.contains(query) {
            score += PHRASE_BONUS;
        }

        Some(score)
    }
}

impl SearchIndex for TokenIndex {
    fn lookup_slug(&self, slug: &str) -> Option<&Department> {
        self.by_slug.get(slug).map(|&doc_id| &self.departments[doc_id])
    }

    fn query(&self, text: &str) -> SearchQueryResult<Vec<SearchHit>> {
        let query = text.trim().to_lowercase();
        let tokens = tokenize(&query);
        if tokens.is_empty() {
            return Err(SearchError::InvalidQuery(text.to_string()));
        }

        let mut matched: Vec<(u32, usize)> = self
            .documents
            .iter()
            .enumerate()
            .filter_map(|(doc_id, doc)| {
                self.score_document(doc, &query, &tokens)
                    .map(|score| (score, doc_id))
            })
            .collect();

        // Best match first; equal scores fall back to name ascending,
        // which is the documented deterministic tiebreak. Doc ids are
        // assigned in name order, so comparing ids is comparing names.
        matched.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| a.1.cmp(&b.1)));

        Ok(matched
            .into_iter()
            .map(|(_, doc_id)| self.departments[doc_id].search_hit())
            .collect())
    }

    fn departments(&self) -> &[Department] {
        &self.departments
    }

    fn len(&self) -> usize {
        self.departments.len()
    }
}
