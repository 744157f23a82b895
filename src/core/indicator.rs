// PlantTox - core/indicator.rs
//
// View-model for the per-animal toxicity cell. Decides what the cell says;
// `ui::panels::table` draws it with egui and `core::markup` writes it as HTML.

/// Check mark shown for animals the plant is safe for.
pub const SAFE_GLYPH: &str = "\u{2714}";

/// Cross shown for animals the plant is toxic to.
pub const TOXIC_GLYPH: &str = "\u{2716}";

/// Column heading for an animal label: "dogs" -> "Dogs".
pub fn animal_heading(animal: &str) -> String {
    let mut chars = animal.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// One toxicity indicator cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToxicityCell<'a> {
    /// Not toxic to `animal`.
    Safe { animal: &'a str },

    /// Toxic to `animal`; `clinical_signs` is exposed as the tooltip.
    Toxic {
        animal: &'a str,
        clinical_signs: &'a str,
    },
}

impl<'a> ToxicityCell<'a> {
    /// Build the cell for one animal column.
    ///
    /// Missing `animal` or `clinical_signs` degrade to the empty string; the
    /// resulting label is less useful but still well-formed.
    pub fn new(toxic: bool, animal: Option<&'a str>, clinical_signs: Option<&'a str>) -> Self {
        let animal = animal.unwrap_or("");
        if toxic {
            Self::Toxic {
                animal,
                clinical_signs: clinical_signs.unwrap_or(""),
            }
        } else {
            Self::Safe { animal }
        }
    }

    pub fn is_toxic(&self) -> bool {
        matches!(self, Self::Toxic { .. })
    }

    pub fn animal(&self) -> &'a str {
        match *self {
            Self::Safe { animal } | Self::Toxic { animal, .. } => animal,
        }
    }

    /// Glyph drawn in the cell.
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Safe { .. } => SAFE_GLYPH,
            Self::Toxic { .. } => TOXIC_GLYPH,
        }
    }

    /// Text alternative for assistive technology. Always present; includes the
    /// clinical signs whenever the cell is toxic.
    pub fn accessible_text(&self) -> String {
        match self {
            Self::Safe { animal } => format!("Safe for {animal}"),
            Self::Toxic {
                animal,
                clinical_signs,
            } => format!("Not safe for {animal}: {clinical_signs}"),
        }
    }

    /// Hover/focus tooltip. Only toxic cells have one.
    pub fn tooltip(&self) -> Option<&'a str> {
        match *self {
            Self::Safe { .. } => None,
            Self::Toxic { clinical_signs, .. } => Some(clinical_signs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toxic_accessible_text() {
        let cell = ToxicityCell::new(true, Some("dogs"), Some("vomiting, lethargy"));
        assert!(cell.is_toxic());
        assert_eq!(cell.accessible_text(), "Not safe for dogs: vomiting, lethargy");
        assert_eq!(cell.tooltip(), Some("vomiting, lethargy"));
        assert_eq!(cell.glyph(), TOXIC_GLYPH);
    }

    #[test]
    fn test_safe_accessible_text() {
        let cell = ToxicityCell::new(false, Some("cats"), Some("ignored"));
        assert!(!cell.is_toxic());
        assert_eq!(cell.accessible_text(), "Safe for cats");
        assert_eq!(cell.tooltip(), None);
        assert_eq!(cell.glyph(), SAFE_GLYPH);
    }

    #[test]
    fn test_animal_heading() {
        assert_eq!(animal_heading("dogs"), "Dogs");
        assert_eq!(animal_heading(""), "");
    }

    #[test]
    fn test_missing_inputs_degrade_to_empty() {
        let toxic = ToxicityCell::new(true, None, None);
        assert_eq!(toxic.accessible_text(), "Not safe for : ");
        assert_eq!(toxic.tooltip(), Some(""));

        let safe = ToxicityCell::new(false, None, None);
        assert_eq!(safe.accessible_text(), "Safe for ");
        assert_eq!(safe.animal(), "");
    }
}
