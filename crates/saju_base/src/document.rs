//! Wire shape of chart documents.
//!
//! Documents come from upstream services and are loosely typed: every field
//! is optional and indices are plain integers that may be out of range.
//! Nothing is validated here; [`crate::Chart::from_document`] does that.

use serde::{Deserialize, Serialize};

use crate::error::SajuError;

/// A chart document: base pillars, day master, and optional fortune periods.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChartDocument {
    pub day_master: Option<i64>,
    pub pillars: Option<Vec<RawPillar>>,
    /// Raw glyph-pair record, used for slots missing from `pillars`.
    pub glyphs: Option<GlyphPillars>,
    pub birth_year: Option<i32>,
    pub daeun: Option<RawFortunePeriod>,
    pub seun: Option<RawFortunePeriod>,
    pub wolun: Option<RawFortunePeriod>,
    pub ilun: Option<RawFortunePeriod>,
    pub daeun_list: Option<Vec<RawFortunePeriod>>,
    pub seun_list: Option<Vec<RawFortunePeriod>>,
    pub wolun_list: Option<Vec<RawFortunePeriod>>,
    pub ilun_list: Option<Vec<RawFortunePeriod>>,
}

impl ChartDocument {
    pub fn from_json(s: &str) -> Result<Self, SajuError> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn to_json_pretty(&self) -> Result<String, SajuError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// One structured pillar: slot key (`Y`/`M`/`D`/`H`, any case) plus indices.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawPillar {
    pub k: String,
    pub stem: Option<i64>,
    pub branch: Option<i64>,
}

/// Raw `{y, m, d, h}` record of two-glyph pairs in either script.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlyphPillars {
    pub y: Option<String>,
    pub m: Option<String>,
    pub d: Option<String>,
    pub h: Option<String>,
}

/// A fortune period as found in documents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawFortunePeriod {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub order: Option<i64>,
    pub stem: Option<i64>,
    pub branch: Option<i64>,
    pub stem_ko: Option<String>,
    pub stem_hanja: Option<String>,
    pub branch_ko: Option<String>,
    pub branch_hanja: Option<String>,
    pub ganji_ko: Option<String>,
    pub ganji_hanja: Option<String>,
    pub age_from: Option<i64>,
    pub age_to: Option<i64>,
    pub start_year: Option<i64>,
    pub year: Option<i64>,
    pub month: Option<i64>,
    pub day: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_full_document() {
        let json = r#"{
            "dayMaster": 4,
            "pillars": [
                {"k": "Y", "stem": 6, "branch": 6},
                {"k": "D", "stem": 4, "branch": 6}
            ],
            "daeun": {"type": "DAEUN", "order": 3, "stem": 2, "branch": 2, "ageFrom": 21, "ageTo": 30},
            "seunList": null,
            "daeunList": [{"order": 1, "ganjiHanja": "甲子", "ageFrom": 1, "ageTo": 10, "startYear": 1991}]
        }"#;
        let doc = ChartDocument::from_json(json).unwrap();
        assert_eq!(doc.day_master, Some(4));
        assert_eq!(doc.pillars.as_ref().map(Vec::len), Some(2));
        assert_eq!(doc.daeun.as_ref().and_then(|d| d.age_from), Some(21));
        assert_eq!(doc.daeun.as_ref().and_then(|d| d.kind.clone()).as_deref(), Some("DAEUN"));
        assert!(doc.seun_list.is_none());
        assert_eq!(
            doc.daeun_list.as_ref().and_then(|l| l[0].ganji_hanja.clone()).as_deref(),
            Some("甲子")
        );
    }

    #[test]
    fn empty_object_is_default() {
        let doc = ChartDocument::from_json("{}").unwrap();
        assert_eq!(doc, ChartDocument::default());
    }

    #[test]
    fn malformed_json_is_document_error() {
        assert!(matches!(
            ChartDocument::from_json("{"),
            Err(SajuError::Document(_))
        ));
    }
}
