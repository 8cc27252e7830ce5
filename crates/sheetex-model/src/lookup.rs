//! Case-insensitive field lookup.

use std::collections::HashMap;

use crate::field::FieldSpec;

/// Maps column names to field specs, matching case-insensitively (ASCII)
/// while preserving the declared specs. When two specs share a name the
/// first declaration wins.
#[derive(Debug, Clone)]
pub struct FieldLookup<'a> {
    by_upper: HashMap<String, &'a FieldSpec>,
}

impl<'a> FieldLookup<'a> {
    pub fn new(fields: &'a [FieldSpec]) -> Self {
        let mut by_upper = HashMap::with_capacity(fields.len());
        for field in fields {
            by_upper
                .entry(field.column_name.to_ascii_uppercase())
                .or_insert(field);
        }
        Self { by_upper }
    }

    pub fn get(&self, column_name: &str) -> Option<&'a FieldSpec> {
        self.by_upper
            .get(&column_name.to_ascii_uppercase())
            .copied()
    }

    pub fn contains(&self, column_name: &str) -> bool {
        self.by_upper.contains_key(&column_name.to_ascii_uppercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_any_casing() {
        let fields = vec![FieldSpec::new("UserId"), FieldSpec::new("Name")];
        let lookup = FieldLookup::new(&fields);

        assert!(lookup.contains("userid"));
        assert!(lookup.contains("USERID"));
        assert!(!lookup.contains("Other"));
        assert_eq!(lookup.get("name").unwrap().column_name, "Name");
    }

    #[test]
    fn first_declaration_wins() {
        let fields = vec![
            FieldSpec::new("Id").required(),
            FieldSpec::new("ID"),
        ];
        let lookup = FieldLookup::new(&fields);
        assert!(lookup.get("id").unwrap().required);
    }
}
