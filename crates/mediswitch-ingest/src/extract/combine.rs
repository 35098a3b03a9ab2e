//! Combined feature text — the unit the similarity index vectorizes.

/// Text fields an item contributes to its combined feature text.
pub trait FeatureSource {
    fn composition(&self) -> &str;
    fn uses(&self) -> &str;
    fn side_effects(&self) -> &str;
}

/// Join composition, uses and side effects with single spaces, in that order.
///
/// Absent fields arrive as empty strings, so an item with nothing but a
/// composition yields `"<composition>  "`; the tokenizer ignores the extra
/// whitespace.
pub fn build_combined_text<T: FeatureSource + ?Sized>(item: &T) -> String {
    [item.composition(), item.uses(), item.side_effects()].join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fields(&'static str, &'static str, &'static str);

    impl FeatureSource for Fields {
        fn composition(&self) -> &str {
            self.0
        }
        fn uses(&self) -> &str {
            self.1
        }
        fn side_effects(&self) -> &str {
            self.2
        }
    }

    #[test]
    fn test_field_order() {
        let item = Fields("Paracetamol (500mg)", "Fever Pain relief", "Nausea");
        assert_eq!(
            build_combined_text(&item),
            "Paracetamol (500mg) Fever Pain relief Nausea"
        );
    }

    #[test]
    fn test_empty_fields_never_render_placeholders() {
        let item = Fields("Ibuprofen", "", "");
        let text = build_combined_text(&item);
        assert_eq!(text, "Ibuprofen  ");
        assert!(!text.contains("nan"));
    }
}
