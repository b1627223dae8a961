//! Fuzzy word matching for the spelling pass
//!
//! Scores are normalized Damerau-Levenshtein similarity scaled to 0-100:
//! one edit, counting an adjacent transposition as one, costs
//! `100 / max(len)` points.

use strsim::normalized_damerau_levenshtein;

/// Best candidate for a misspelled word
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuzzyMatch<'a> {
    /// Matched candidate
    pub candidate: &'a str,
    /// Similarity on a 0-100 scale
    pub score: f64,
}

/// Edit-distance similarity of two words on a 0-100 scale
pub fn similarity(a: &str, b: &str) -> f64 {
    normalized_damerau_levenshtein(a, b) * 100.0
}

/// Highest [`similarity`] two different words of these character lengths can reach
///
/// Lets callers skip whole groups of candidates that cannot clear a threshold.
pub fn similarity_ceiling(word_len: usize, candidate_len: usize) -> f64 {
    let longest = word_len.max(candidate_len);
    if longest == 0 {
        return 0.0;
    }
    let min_edits = word_len.abs_diff(candidate_len).max(1);
    (1.0 - min_edits as f64 / longest as f64) * 100.0
}

/// Highest-scoring candidate for `word`
///
/// Among equal maximal scores the lexicographically smallest candidate wins,
/// regardless of iteration order. Returns `None` when there are no candidates.
pub fn best_match<'a, I>(word: &str, candidates: I) -> Option<FuzzyMatch<'a>>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut best: Option<FuzzyMatch<'a>> = None;

    for candidate in candidates {
        let score = similarity(word, candidate);
        let better = match best {
            None => true,
            Some(current) => {
                score > current.score || (score == current.score && candidate < current.candidate)
            }
        };
        if better {
            best = Some(FuzzyMatch { candidate, score });
        }
    }

    if let Some(found) = best {
        log::trace!(
            "Best fuzzy candidate for '{}': '{}' ({:.1})",
            word,
            found.candidate,
            found.score
        );
    }

    best
}
