use crate::errors::{AppError, AppResult};
use serde::Serialize;

/// Dropdown sources: the values a form field may take.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Lookups {
    pub sites: Vec<String>,
    pub meter_types: Vec<String>,
    pub materials: Vec<String>,
    pub workers: Vec<String>,
}

impl Lookups {
    /// Materials that can be received: the material master plus the box of
    /// every meter type, since installations consume those too.
    pub fn receivable_materials(&self) -> Vec<String> {
        let mut out = self.materials.clone();
        for m in &self.meter_types {
            let boxed = format!("{} Box", m.trim());
            if !out.contains(&boxed) {
                out.push(boxed);
            }
        }
        out
    }
}

/// Require `value` to be one of `known` (exact match after trimming).
pub fn require_known(kind: &'static str, value: &str, known: &[String]) -> AppResult<String> {
    let v = value.trim();
    if v.is_empty() {
        return Err(AppError::EmptyField(kind));
    }
    known
        .iter()
        .find(|k| k.as_str() == v)
        .cloned()
        .ok_or_else(|| AppError::UnknownLookup {
            kind,
            value: v.to_string(),
            known: known.join(", "),
        })
}

/// Unique non-empty values in order of first appearance.
pub fn unique_non_empty<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for v in values.map(str::trim).filter(|v| !v.is_empty()) {
        if !out.iter().any(|o| o == v) {
            out.push(v.to_string());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unique_values_keep_first_order() {
        let got = unique_non_empty(["North", "", "South", "North ", "  "].into_iter());
        assert_eq!(got, vec!["North", "South"]);
    }

    #[test]
    fn boxes_are_receivable() {
        let l = Lookups {
            sites: vec![],
            meter_types: vec!["1 Phase".into()],
            materials: vec!["Cable".into()],
            workers: vec![],
        };
        assert_eq!(l.receivable_materials(), vec!["Cable", "1 Phase Box"]);
    }

    #[test]
    fn unknown_value_lists_choices() {
        let known = vec!["1 Phase".to_string(), "3 Phase".to_string()];
        assert_eq!(require_known("meter type", " 1 Phase", &known).unwrap(), "1 Phase");
        let err = require_known("meter type", "2 Phase", &known).unwrap_err();
        assert!(err.to_string().contains("1 Phase, 3 Phase"));
        assert!(matches!(
            require_known("meter type", "", &known),
            Err(AppError::EmptyField("meter type"))
        ));
    }
}
