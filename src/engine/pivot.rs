//! Pivot (Optimal Recognition Point) calculation.
//!
//! For each displayed word a single pivot character is chosen and the word is
//! decomposed into left/pivot/right parts. The renderer right-aligns `left`
//! and left-aligns `right` around a fixed column, so the pivot stays at the
//! same screen position regardless of word length. That fixed anchor is what
//! lets the eye stay still while words stream past.
//!
//! Lengths are counted in grapheme clusters, not bytes, so accented and
//! combined characters never split mid-cluster.

use unicode_segmentation::UnicodeSegmentation;

/// How the pivot index is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PivotMode {
    /// Length-banded heuristic, slightly left of center.
    #[default]
    Recognition,
    /// Strict mathematical middle.
    Center,
}

impl PivotMode {
    pub fn toggled(self) -> Self {
        match self {
            PivotMode::Recognition => PivotMode::Center,
            PivotMode::Center => PivotMode::Recognition,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PivotMode::Recognition => "ORP",
            PivotMode::Center => "center",
        }
    }
}

/// A word split around its pivot character.
///
/// `left + pivot + right` reconstructs the word exactly. Computed fresh per
/// render; never cached.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Decomposition {
    pub left: String,
    pub pivot: String,
    pub right: String,
}

/// Picks the pivot index for a word of `len` characters.
///
/// The recognition bands place the anchor slightly left of center:
/// 1 char → 0, 2-5 → 1, 6-9 → 2, 10-13 → 3, 14+ → 4. If the band index
/// would fall outside the word it falls back to the strict middle, which is
/// also what `Center` mode always uses.
pub fn pivot_index(len: usize, mode: PivotMode) -> usize {
    if len == 0 {
        return 0;
    }
    let index = match mode {
        PivotMode::Recognition => match len {
            1 => 0,
            2..=5 => 1,
            6..=9 => 2,
            10..=13 => 3,
            _ => 4,
        },
        PivotMode::Center => (len - 1) / 2,
    };
    if index >= len {
        (len - 1) / 2
    } else {
        index
    }
}

/// Decomposes a word into left/pivot/right around its pivot character.
///
/// The empty string yields an all-empty decomposition (no active unit).
pub fn decompose(word: &str, mode: PivotMode) -> Decomposition {
    let graphemes: Vec<&str> = word.graphemes(true).collect();
    if graphemes.is_empty() {
        return Decomposition::default();
    }

    let p = pivot_index(graphemes.len(), mode);
    Decomposition {
        left: graphemes[..p].concat(),
        pivot: graphemes[p].to_string(),
        right: graphemes[p + 1..].concat(),
    }
}
