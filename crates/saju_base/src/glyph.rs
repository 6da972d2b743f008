//! Glyph resolution: hanja or hangul character → canonical stem/branch.
//!
//! Lookup tries the hanja column first, then hangul. A glyph matching neither
//! resolves to `None`; callers must treat that as absent, never as index 0.

use serde::{Deserialize, Serialize};

use crate::branch::{ALL_BRANCHES, Branch};
use crate::element::{Element, Polarity};
use crate::stem::{ALL_STEMS, Stem};

/// Fixed per-symbol metadata shared by stems and branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphInfo {
    pub hangul: &'static str,
    pub hanja: &'static str,
    pub element: Element,
    pub polarity: Polarity,
}

/// Which symbol table a glyph is looked up in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GlyphKind {
    Stem,
    Branch,
}

/// Resolve a stem glyph in either script.
pub fn resolve_stem(glyph: &str) -> Option<Stem> {
    let g = glyph.trim();
    if g.is_empty() {
        return None;
    }
    ALL_STEMS
        .iter()
        .find(|s| s.hanja() == g)
        .or_else(|| ALL_STEMS.iter().find(|s| s.hangul() == g))
        .copied()
}

/// Resolve a branch glyph in either script.
pub fn resolve_branch(glyph: &str) -> Option<Branch> {
    let g = glyph.trim();
    if g.is_empty() {
        return None;
    }
    ALL_BRANCHES
        .iter()
        .find(|b| b.hanja() == g)
        .or_else(|| ALL_BRANCHES.iter().find(|b| b.hangul() == g))
        .copied()
}

/// Resolve a glyph to its 0-based table index.
pub fn resolve_index(glyph: &str, kind: GlyphKind) -> Option<u8> {
    match kind {
        GlyphKind::Stem => resolve_stem(glyph).map(Stem::index),
        GlyphKind::Branch => resolve_branch(glyph).map(Branch::index),
    }
}

/// Split a two-character pair ("甲子", "갑자") into its stem and branch glyphs.
///
/// Surrounding whitespace is ignored. Anything other than exactly two
/// characters yields `None`.
pub fn split_pair(pair: &str) -> Option<(&str, &str)> {
    let s = pair.trim();
    let mut chars = s.char_indices();
    chars.next()?;
    let (second_at, _) = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    Some((&s[..second_at], &s[second_at..]))
}
