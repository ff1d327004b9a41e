// SPDX-License-Identifier: GPL-3.0-only

use crate::models::compatibility_rule::{CompatibilityRule, RuleKind};

/// The first required option of `option_id` that is not selected
pub fn missing_requirement<'a>(
    option_id: &str,
    selected: &[String],
    rules: &'a [CompatibilityRule],
) -> Option<&'a str> {
    rules
        .iter()
        .filter(|r| r.kind == RuleKind::Requires && r.option_id == option_id)
        .map(|r| r.target_id.as_str())
        .find(|target| !selected.iter().any(|s| s == target))
}

/// Options that can't be selected together with `option_id`. Exclusions work both ways.
pub fn excluded_by<'a>(option_id: &str, rules: &'a [CompatibilityRule]) -> Vec<&'a str> {
    rules
        .iter()
        .filter(|r| r.kind == RuleKind::Excludes)
        .filter_map(|r| {
            if r.option_id == option_id {
                Some(r.target_id.as_str())
            } else if r.target_id == option_id {
                Some(r.option_id.as_str())
            } else {
                None
            }
        })
        .collect()
}

/// Selected options that stop being valid once `removed` is deselected, following chains
pub fn dependents_of(
    removed: &str,
    selected: &[String],
    rules: &[CompatibilityRule],
) -> Vec<String> {
    let mut gone = vec![removed.to_string()];
    let mut dependents = Vec::new();

    while let Some(current) = gone.pop() {
        for rule in rules
            .iter()
            .filter(|r| r.kind == RuleKind::Requires && r.target_id == current)
        {
            let already = dependents.contains(&rule.option_id);
            if !already && selected.contains(&rule.option_id) {
                dependents.push(rule.option_id.clone());
                gone.push(rule.option_id.clone());
            }
        }
    }

    dependents
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selected(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn requirements_must_be_selected() {
        let rules = vec![CompatibilityRule::requires("champagne", "sea-view")];

        assert_eq!(missing_requirement("champagne", &[], &rules), Some("sea-view"));
        assert_eq!(
            missing_requirement("champagne", &selected(&["sea-view"]), &rules),
            None
        );
        assert_eq!(missing_requirement("pillows", &[], &rules), None);
    }

    #[test]
    fn exclusions_are_symmetric() {
        let rules = vec![CompatibilityRule::excludes("twin", "crib")];

        assert_eq!(excluded_by("twin", &rules), vec!["crib"]);
        assert_eq!(excluded_by("crib", &rules), vec!["twin"]);
        assert!(excluded_by("king", &rules).is_empty());
    }

    #[test]
    fn dependents_cascade() {
        let rules = vec![
            CompatibilityRule::requires("balcony-dinner", "sea-view"),
            CompatibilityRule::requires("candles", "balcony-dinner"),
        ];
        let current = selected(&["sea-view", "balcony-dinner", "candles"]);

        assert_eq!(
            dependents_of("sea-view", &current, &rules),
            vec!["balcony-dinner".to_string(), "candles".to_string()]
        );
        assert!(dependents_of("candles", &current, &rules).is_empty());
    }
}
