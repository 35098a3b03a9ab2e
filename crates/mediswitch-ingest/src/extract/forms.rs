//! Dosage-form classification from item names.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse pharmaceutical delivery form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FormTag {
    Tablet,
    Syrup,
    Cream,
    Inhaler,
    Suspension,
    Capsule,
    Injection,
    Ointment,
    Gel,
    Solution,
    Drops,
    Powder,
    Spray,
    Lotion,
}

/// Keywords in match priority order. When a name contains several of them,
/// the earliest entry here wins regardless of where each occurs in the name.
pub const FORM_KEYWORDS: &[FormTag] = &[
    FormTag::Tablet,
    FormTag::Syrup,
    FormTag::Cream,
    FormTag::Inhaler,
    FormTag::Suspension,
    FormTag::Capsule,
    FormTag::Injection,
    FormTag::Ointment,
    FormTag::Gel,
    FormTag::Solution,
    FormTag::Drops,
    FormTag::Powder,
    FormTag::Spray,
    FormTag::Lotion,
];

impl FormTag {
    /// Display keyword, e.g. `"Tablet"`.
    pub fn as_str(self) -> &'static str {
        match self {
            FormTag::Tablet => "Tablet",
            FormTag::Syrup => "Syrup",
            FormTag::Cream => "Cream",
            FormTag::Inhaler => "Inhaler",
            FormTag::Suspension => "Suspension",
            FormTag::Capsule => "Capsule",
            FormTag::Injection => "Injection",
            FormTag::Ointment => "Ointment",
            FormTag::Gel => "Gel",
            FormTag::Solution => "Solution",
            FormTag::Drops => "Drops",
            FormTag::Powder => "Powder",
            FormTag::Spray => "Spray",
            FormTag::Lotion => "Lotion",
        }
    }

    fn needle(self) -> &'static str {
        match self {
            FormTag::Tablet => "tablet",
            FormTag::Syrup => "syrup",
            FormTag::Cream => "cream",
            FormTag::Inhaler => "inhaler",
            FormTag::Suspension => "suspension",
            FormTag::Capsule => "capsule",
            FormTag::Injection => "injection",
            FormTag::Ointment => "ointment",
            FormTag::Gel => "gel",
            FormTag::Solution => "solution",
            FormTag::Drops => "drops",
            FormTag::Powder => "powder",
            FormTag::Spray => "spray",
            FormTag::Lotion => "lotion",
        }
    }
}

impl fmt::Display for FormTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify an item name by case-insensitive substring match against
/// [`FORM_KEYWORDS`]. Returns `None` when no keyword occurs.
pub fn classify(name: &str) -> Option<FormTag> {
    let name_lower = name.to_lowercase();
    FORM_KEYWORDS
        .iter()
        .copied()
        .find(|tag| name_lower.contains(tag.needle()))
}

/// Distinct form tags present among `names`, in [`FORM_KEYWORDS`] order.
pub fn distinct_forms<'a, I>(names: I) -> Vec<FormTag>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = [false; FORM_KEYWORDS.len()];
    for name in names {
        if let Some(tag) = classify(name) {
            seen[tag as usize] = true;
        }
    }
    FORM_KEYWORDS
        .iter()
        .copied()
        .filter(|tag| seen[*tag as usize])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_basic() {
        assert_eq!(classify("Crocin 650 Tablet"), Some(FormTag::Tablet));
        assert_eq!(classify("Benadryl Cough Syrup"), Some(FormTag::Syrup));
        assert_eq!(classify("Asthalin Inhaler"), Some(FormTag::Inhaler));
    }

    #[test]
    fn test_classify_case_insensitive() {
        assert_eq!(classify("VOLINI GEL"), Some(FormTag::Gel));
        assert_eq!(classify("otrivin nasal spray"), Some(FormTag::Spray));
    }

    #[test]
    fn test_classify_none() {
        assert_eq!(classify("Dolo 650"), None);
        assert_eq!(classify(""), None);
    }

    #[test]
    fn test_list_order_beats_position() {
        // "Gel" appears first in the name but "Tablet" is earlier in the list.
        assert_eq!(classify("Gel coated Tablet"), Some(FormTag::Tablet));
        assert_eq!(classify("Tablet Gel"), Some(FormTag::Tablet));
        // Suspension precedes Drops.
        assert_eq!(classify("Drops Oral Suspension"), Some(FormTag::Suspension));
    }

    #[test]
    fn test_substring_anywhere() {
        // Substring match, not word match.
        assert_eq!(classify("Angel Tabletop"), Some(FormTag::Tablet));
        assert_eq!(classify("Nystatin oil"), None);
        assert_eq!(classify("Angelica extract"), Some(FormTag::Gel));
    }

    #[test]
    fn test_keyword_table_consistent() {
        assert_eq!(FORM_KEYWORDS.len(), 14);
        for (i, tag) in FORM_KEYWORDS.iter().enumerate() {
            assert_eq!(*tag as usize, i);
            assert_eq!(tag.needle(), tag.as_str().to_lowercase());
            assert_eq!(classify(tag.as_str()), Some(*tag));
        }
    }

    #[test]
    fn test_distinct_forms_ordered() {
        let names = ["Zyrtec Syrup", "Crocin Tablet", "Dolo Tablet", "Plain water"];
        assert_eq!(
            distinct_forms(names.iter().copied()),
            vec![FormTag::Tablet, FormTag::Syrup]
        );
    }

    #[test]
    fn test_serializes_as_keyword() {
        let json = serde_json::to_string(&FormTag::Ointment).unwrap();
        assert_eq!(json, "\"Ointment\"");
    }
}
