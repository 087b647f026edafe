//! Form Draft & Validation
//!
//! Raw form field state and the presence checks that gate a submit.

use crate::model::NewEntry;

/// Validation failure message shown under the form.
pub const MSG_REQUIRED: &str = "タグと数値は必須です";

/// Raw field values as typed by the user.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EntryDraft {
    pub tag: String,
    pub value: String,
    pub note: String,
}

impl EntryDraft {
    /// Check the draft and coerce it into an insert payload.
    ///
    /// Tag must be non-empty and value must parse to a finite number; the
    /// note passes through as-is (empty allowed). Any finite number is
    /// accepted, no range bounds.
    pub fn validate(&self) -> Result<NewEntry, &'static str> {
        if self.tag.is_empty() {
            return Err(MSG_REQUIRED);
        }
        let value = match self.value.trim().parse::<f64>() {
            Ok(v) if v.is_finite() => v,
            _ => return Err(MSG_REQUIRED),
        };
        Ok(NewEntry {
            tag: self.tag.clone(),
            value,
            note: self.note.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(tag: &str, value: &str, note: &str) -> EntryDraft {
        EntryDraft {
            tag: tag.to_string(),
            value: value.to_string(),
            note: note.to_string(),
        }
    }

    #[test]
    fn empty_tag_is_rejected() {
        assert_eq!(draft("", "5", "memo").validate(), Err(MSG_REQUIRED));
    }

    #[test]
    fn empty_value_is_rejected() {
        assert_eq!(draft("酒", "", "").validate(), Err(MSG_REQUIRED));
    }

    #[test]
    fn non_numeric_value_is_rejected() {
        assert_eq!(draft("酒", "abc", "").validate(), Err(MSG_REQUIRED));
    }

    #[test]
    fn non_finite_value_is_rejected() {
        assert_eq!(draft("酒", "NaN", "").validate(), Err(MSG_REQUIRED));
        assert_eq!(draft("酒", "inf", "").validate(), Err(MSG_REQUIRED));
    }

    #[test]
    fn valid_draft_coerces_to_payload() {
        let new = draft("酒", "16.8", "ジムビーム350ml").validate().unwrap();
        assert_eq!(new.tag, "酒");
        assert_eq!(new.value, 16.8);
        assert_eq!(new.note, "ジムビーム350ml");
    }

    #[test]
    fn note_may_be_empty() {
        let new = draft("体重", "62.5", "").validate().unwrap();
        assert_eq!(new.note, "");
    }

    #[test]
    fn negative_and_scientific_values_accepted() {
        assert_eq!(draft("t", "-3.5", "").validate().unwrap().value, -3.5);
        assert_eq!(draft("t", "1e3", "").validate().unwrap().value, 1000.0);
    }
}
