//! Token-level diff between the original and polished text
//!
//! Tokens are whitespace-separated words. A longest common subsequence
//! aligns the two sides in linear space, and adjacent unmatched tokens are
//! grouped into replace, delete or insert runs.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Index, IndexMut, Range};

/// Opcode of a diff run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffOp {
    /// Tokens present unchanged on both sides
    Equal,
    /// Tokens on the original side were rewritten
    Replace,
    /// Tokens only on the original side
    Delete,
    /// Tokens only on the polished side
    Insert,
}

impl DiffOp {
    /// Lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            DiffOp::Equal => "equal",
            DiffOp::Replace => "replace",
            DiffOp::Delete => "delete",
            DiffOp::Insert => "insert",
        }
    }
}

impl fmt::Display for DiffOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One diff run as space-joined token spans
///
/// The absent side of an insert or delete is the empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffPair {
    /// Opcode
    pub op: DiffOp,
    /// Tokens from the original text
    pub original: String,
    /// Tokens from the polished text
    pub polished: String,
}

impl DiffPair {
    fn new(op: DiffOp, original: &[&str], polished: &[&str]) -> Self {
        Self {
            op,
            original: original.join(" "),
            polished: polished.join(" "),
        }
    }

    /// Whether this run differs between the two sides
    pub fn is_change(&self) -> bool {
        self.op != DiffOp::Equal
    }
}

/// Diff the whitespace tokens of two texts
pub fn diff_pairs(original: &str, polished: &str) -> Vec<DiffPair> {
    let before: Vec<&str> = original.split_whitespace().collect();
    let after: Vec<&str> = polished.split_whitespace().collect();
    diff_tokens(&before, &after)
}

/// Diff two token sequences
pub fn diff_tokens(original: &[&str], polished: &[&str]) -> Vec<DiffPair> {
    let matches = matching_tokens(original, polished);
    build_pairs_from_matches(original, polished, &matches)
}

/// Index pairs of a longest common subsequence, in ascending order
///
/// Myers' divide-and-conquer over middle snakes: O((N + M) D) time and
/// O(N + M) space, where D is the edit distance.
fn matching_tokens(original: &[&str], polished: &[&str]) -> Vec<(usize, usize)> {
    let max_d = max_d(original.len(), polished.len());
    let mut forward = V::new(max_d);
    let mut backward = V::new(max_d);
    let mut matches = Vec::new();
    conquer(
        original,
        0..original.len(),
        polished,
        0..polished.len(),
        &mut forward,
        &mut backward,
        &mut matches,
    );
    matches
}

/// Furthest-reaching x per diagonal k, with negative diagonals offset
struct V {
    offset: isize,
    v: Vec<usize>,
}

impl V {
    fn new(max_d: usize) -> Self {
        Self {
            offset: max_d as isize,
            v: vec![0; 2 * max_d],
        }
    }
}

impl Index<isize> for V {
    type Output = usize;

    fn index(&self, k: isize) -> &usize {
        &self.v[(k + self.offset) as usize]
    }
}

impl IndexMut<isize> for V {
    fn index_mut(&mut self, k: isize) -> &mut usize {
        &mut self.v[(k + self.offset) as usize]
    }
}

fn max_d(len1: usize, len2: usize) -> usize {
    (len1 + len2 + 1) / 2 + 1
}

fn common_prefix_len(a: &[&str], b: &[&str]) -> usize {
    a.iter().zip(b).take_while(|(x, y)| x == y).count()
}

fn common_suffix_len(a: &[&str], b: &[&str]) -> usize {
    a.iter()
        .rev()
        .zip(b.iter().rev())
        .take_while(|(x, y)| x == y)
        .count()
}

/// Start of a snake on an optimal path through the two ranges
fn find_middle_snake(
    original: &[&str],
    original_range: Range<usize>,
    polished: &[&str],
    polished_range: Range<usize>,
    forward: &mut V,
    backward: &mut V,
) -> Option<(usize, usize)> {
    let n = original_range.len();
    let m = polished_range.len();
    let old = &original[original_range.clone()];
    let new = &polished[polished_range.clone()];

    let delta = n as isize - m as isize;
    let odd = delta & 1 == 1;

    forward[1] = 0;
    backward[1] = 0;

    for d in 0..max_d(n, m) as isize {
        for k in (-d..=d).rev().step_by(2) {
            let mut x = if k == -d || (k != d && forward[k - 1] < forward[k + 1]) {
                forward[k + 1]
            } else {
                forward[k - 1] + 1
            };
            let y = (x as isize - k) as usize;
            let (x0, y0) = (x, y);
            if x < n && y < m {
                x += common_prefix_len(&old[x..], &new[y..]);
            }
            forward[k] = x;

            if odd && (k - delta).abs() <= d - 1 && forward[k] + backward[-(k - delta)] >= n {
                return Some((original_range.start + x0, polished_range.start + y0));
            }
        }

        for k in (-d..=d).rev().step_by(2) {
            let mut x = if k == -d || (k != d && backward[k - 1] < backward[k + 1]) {
                backward[k + 1]
            } else {
                backward[k - 1] + 1
            };
            let mut y = (x as isize - k) as usize;
            if x < n && y < m {
                let advance = common_suffix_len(&old[..n - x], &new[..m - y]);
                x += advance;
                y += advance;
            }
            backward[k] = x;

            if !odd && (k - delta).abs() <= d && backward[k] + forward[-(k - delta)] >= n {
                return Some((
                    original_range.start + n - x,
                    polished_range.start + m - y,
                ));
            }
        }
    }

    None
}

fn conquer(
    original: &[&str],
    mut original_range: Range<usize>,
    polished: &[&str],
    mut polished_range: Range<usize>,
    forward: &mut V,
    backward: &mut V,
    matches: &mut Vec<(usize, usize)>,
) {
    let prefix = common_prefix_len(
        &original[original_range.clone()],
        &polished[polished_range.clone()],
    );
    matches.extend((0..prefix).map(|t| (original_range.start + t, polished_range.start + t)));
    original_range.start += prefix;
    polished_range.start += prefix;

    let suffix = common_suffix_len(
        &original[original_range.clone()],
        &polished[polished_range.clone()],
    );
    original_range.end -= suffix;
    polished_range.end -= suffix;

    if !original_range.is_empty() && !polished_range.is_empty() {
        if let Some((x, y)) = find_middle_snake(
            original,
            original_range.clone(),
            polished,
            polished_range.clone(),
            forward,
            backward,
        ) {
            conquer(
                original,
                original_range.start..x,
                polished,
                polished_range.start..y,
                forward,
                backward,
                matches,
            );
            conquer(
                original,
                x..original_range.end,
                polished,
                y..polished_range.end,
                forward,
                backward,
                matches,
            );
        }
    }

    matches.extend((0..suffix).map(|t| (original_range.end + t, polished_range.end + t)));
}

fn build_pairs_from_matches(
    original: &[&str],
    polished: &[&str],
    matches: &[(usize, usize)],
) -> Vec<DiffPair> {
    let mut pairs = Vec::new();
    let (mut i, mut j) = (0, 0);
    let mut k = 0;

    while k < matches.len() {
        let (start_i, start_j) = matches[k];
        push_gap(&mut pairs, &original[i..start_i], &polished[j..start_j]);

        while k + 1 < matches.len() && matches[k + 1] == (matches[k].0 + 1, matches[k].1 + 1) {
            k += 1;
        }
        let (end_i, end_j) = matches[k];
        pairs.push(DiffPair::new(
            DiffOp::Equal,
            &original[start_i..=end_i],
            &polished[start_j..=end_j],
        ));

        i = end_i + 1;
        j = end_j + 1;
        k += 1;
    }

    push_gap(&mut pairs, &original[i..], &polished[j..]);
    pairs
}

fn push_gap(pairs: &mut Vec<DiffPair>, original: &[&str], polished: &[&str]) {
    let op = match (original.is_empty(), polished.is_empty()) {
        (true, true) => return,
        (false, false) => DiffOp::Replace,
        (false, true) => DiffOp::Delete,
        (true, false) => DiffOp::Insert,
    };
    pairs.push(DiffPair::new(op, original, polished));
}
