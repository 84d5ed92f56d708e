//! Static lookup tables consumed by the pipeline.
//!
//! Everything here is immutable once built; the pipeline receives a
//! `&ReferenceData` on every call instead of reaching for globals, so tests
//! can inject reduced tables.

mod mbti;
mod regions;
pub mod zodiac;

use std::collections::HashMap;

pub use zodiac::zodiac_sign;

/// Best-match and challenging counterparts of one personality type.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Compatibility {
    pub best_match: Vec<String>,
    pub challenging: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct ReferenceData {
    /// Temperament label and member types, in display order.
    pub temperaments: Vec<(String, Vec<String>)>,
    /// Bucket for unrecognized types.
    pub default_temperament: String,
    pub type_names: HashMap<String, String>,
    pub type_tags: HashMap<String, Vec<String>>,
    pub compatibility: HashMap<String, Compatibility>,
    /// Fixed gender enumeration for the demographic dimension.
    pub genders: Vec<String>,
    pub region_names: HashMap<String, String>,
}

impl ReferenceData {
    /// The tables shipped with the application.
    pub fn builtin() -> Self {
        let owned = |xs: &[&str]| xs.iter().map(|s| s.to_string()).collect::<Vec<_>>();

        Self {
            temperaments: mbti::TEMPERAMENTS
                .iter()
                .map(|(label, types)| (label.to_string(), owned(types)))
                .collect(),
            default_temperament: mbti::DEFAULT_TEMPERAMENT.to_string(),
            type_names: mbti::TYPES
                .iter()
                .map(|(code, name, _)| (code.to_string(), name.to_string()))
                .collect(),
            type_tags: mbti::TYPES
                .iter()
                .map(|(code, name, traits)| {
                    let mut tags = vec![name.to_string()];
                    tags.extend(owned(traits));
                    (code.to_string(), tags)
                })
                .collect(),
            compatibility: mbti::COMPATIBILITY
                .iter()
                .map(|(code, best, hard)| {
                    (
                        code.to_string(),
                        Compatibility {
                            best_match: owned(best),
                            challenging: owned(hard),
                        },
                    )
                })
                .collect(),
            genders: owned(mbti::GENDERS),
            region_names: regions::PROVINCE_NAMES
                .iter()
                .map(|(short, full)| (short.to_string(), full.to_string()))
                .collect(),
        }
    }

    /// All known type codes, grouped by temperament.
    pub fn type_codes(&self) -> impl Iterator<Item = &str> {
        self.temperaments
            .iter()
            .flat_map(|(_, types)| types.iter().map(String::as_str))
    }

    pub fn is_known_type(&self, code: &str) -> bool {
        self.type_codes().any(|t| t == code)
    }

    /// Temperament of a type; unknown codes land in the default bucket.
    pub fn coarse_group(&self, code: &str) -> &str {
        self.temperaments
            .iter()
            .find(|(_, types)| types.iter().any(|t| t == code))
            .map(|(label, _)| label.as_str())
            .unwrap_or(&self.default_temperament)
    }

    /// Display name of a type (e.g. `INTJ` → `建筑师`), or the code itself.
    pub fn type_name<'a>(&'a self, code: &'a str) -> &'a str {
        self.type_names.get(code).map(String::as_str).unwrap_or(code)
    }

    /// Tags assigned to a record of this type at submit time.
    pub fn tags_for(&self, code: &str) -> Vec<String> {
        self.type_tags
            .get(code)
            .cloned()
            .unwrap_or_else(|| vec![mbti::UNKNOWN_TAG.to_string()])
    }

    pub fn compatibility(&self, code: &str) -> Option<&Compatibility> {
        self.compatibility.get(code)
    }

    pub fn genders(&self) -> &[String] {
        &self.genders
    }

    /// Map geometry name for a province; unknown names pass through.
    pub fn region_map_name<'a>(&'a self, province: &'a str) -> &'a str {
        self.region_names
            .get(province)
            .map(String::as_str)
            .unwrap_or(province)
    }
}

impl Default for ReferenceData {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sixteen_types_in_four_groups() {
        let r = ReferenceData::builtin();
        assert_eq!(r.type_codes().count(), 16);
        assert_eq!(r.temperaments.len(), 4);
        assert!(r.type_codes().all(|t| r.type_tags.contains_key(t)));
        assert!(r.type_codes().all(|t| r.compatibility.contains_key(t)));
    }

    #[test]
    fn coarse_group_falls_back() {
        let r = ReferenceData::builtin();
        assert_eq!(r.coarse_group("INTJ"), "分析家");
        assert_eq!(r.coarse_group("ESFP"), "探险家");
        assert_eq!(r.coarse_group("XXXX"), "守护者");
    }

    #[test]
    fn tags_fall_back_to_unknown() {
        let r = ReferenceData::builtin();
        assert_eq!(r.tags_for("INTJ"), vec!["建筑师", "战略性", "独立"]);
        assert_eq!(r.tags_for("QQQQ"), vec!["未知"]);
    }

    #[test]
    fn region_names() {
        let r = ReferenceData::builtin();
        assert_eq!(r.region_map_name("广西"), "广西壮族自治区");
        assert_eq!(r.region_map_name("Atlantis"), "Atlantis");
    }
}
