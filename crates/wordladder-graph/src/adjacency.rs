//! Word adjacency: two words are adjacent when exactly one character edit
//! (substitution, insertion or deletion) turns one into the other.
//!
//! Words are compared by Unicode scalar value. No trimming or case folding
//! happens here; callers pass normalized tokens.

use serde::Serialize;

/// The single edit that turns one word into an adjacent one.
///
/// Positions are character offsets into the longer of the two words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase", tag = "kind", content = "position")]
pub enum Edit {
    /// One character replaced, same length.
    Substitution(usize),
    /// The second word has one extra character.
    Insertion(usize),
    /// The second word is missing one character.
    Deletion(usize),
}

impl std::fmt::Display for Edit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Substitution(pos) => write!(f, "substitute at {}", pos),
            Self::Insertion(pos) => write!(f, "insert at {}", pos),
            Self::Deletion(pos) => write!(f, "delete at {}", pos),
        }
    }
}

/// Whether `word1` and `word2` differ by exactly one character edit.
///
/// Equal words and empty words are never adjacent.
pub fn is_adjacent(word1: &str, word2: &str) -> bool {
    edit_kind(word1, word2).is_some()
}

/// The edit turning `word1` into `word2`, if they are adjacent.
pub fn edit_kind(word1: &str, word2: &str) -> Option<Edit> {
    if word1.is_empty() || word2.is_empty() || word1 == word2 {
        return None;
    }

    let chars1: Vec<char> = word1.chars().collect();
    let chars2: Vec<char> = word2.chars().collect();

    match chars1.len().abs_diff(chars2.len()) {
        0 => single_substitution(&chars1, &chars2).map(Edit::Substitution),
        1 => {
            if chars1.len() > chars2.len() {
                single_skip(&chars1, &chars2).map(Edit::Deletion)
            } else {
                single_skip(&chars2, &chars1).map(Edit::Insertion)
            }
        }
        _ => None,
    }
}

/// Position of the only differing character between equal-length words.
fn single_substitution(a: &[char], b: &[char]) -> Option<usize> {
    let mut diff = None;
    for (pos, (x, y)) in a.iter().zip(b).enumerate() {
        if x != y {
            if diff.is_some() {
                return None;
            }
            diff = Some(pos);
        }
    }
    diff
}

/// Position in `longer` whose removal yields `shorter`.
///
/// Single synchronized scan: both cursors advance on a match; the first
/// mismatch advances only the cursor into `longer`; a second mismatch
/// means more than one edit.
fn single_skip(longer: &[char], shorter: &[char]) -> Option<usize> {
    debug_assert_eq!(longer.len(), shorter.len() + 1);

    let mut i = 0;
    let mut j = 0;
    let mut skipped = None;

    while j < shorter.len() {
        if longer[i] == shorter[j] {
            i += 1;
            j += 1;
        } else if skipped.is_none() {
            skipped = Some(i);
            i += 1;
        } else {
            return None;
        }
    }

    // No mismatch inside the shorter word: the extra character is last.
    Some(skipped.unwrap_or(longer.len() - 1))
}
