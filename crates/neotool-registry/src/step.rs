// SPDX-FileCopyrightText: 2026 Neotool Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Step definitions and the ordered step registry.
//!
//! A step definition maps a recognized natural-language pattern to a list of
//! structured blueprint hints. The registry only stores definitions in
//! insertion order; selecting a definition for a free-text input is the
//! caller's policy. [`match_step`] implements the conventional
//! first-match-wins policy over a definition slice.

use std::sync::Arc;

use neotool_core::{BlueprintHint, StepKind};
use tracing::debug;

/// Pattern a step input is matched against: an exact string or a regex.
#[derive(Debug, Clone)]
pub enum StepPattern {
    Exact(String),
    Regex(regex::Regex),
}

impl StepPattern {
    /// Compiles a regex pattern, anchoring it to the full input.
    pub fn regex(pattern: &str) -> Result<Self, regex::Error> {
        let anchored = format!("^{pattern}$");
        Ok(StepPattern::Regex(regex::Regex::new(&anchored)?))
    }

    /// Matches the input against this pattern.
    ///
    /// Exact patterns produce a match with no captures; regex patterns
    /// capture every numbered group in order.
    pub fn matches(&self, input: &str) -> Option<StepMatch> {
        match self {
            StepPattern::Exact(expected) => (input == expected).then(|| StepMatch {
                text: input.to_string(),
                captures: Vec::new(),
            }),
            StepPattern::Regex(re) => re.captures(input).map(|caps| StepMatch {
                text: input.to_string(),
                captures: caps
                    .iter()
                    .skip(1)
                    .map(|c| c.map(|m| m.as_str().to_string()).unwrap_or_default())
                    .collect(),
            }),
        }
    }
}

impl std::fmt::Display for StepPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StepPattern::Exact(s) => write!(f, "{s}"),
            StepPattern::Regex(re) => write!(f, "{}", re.as_str()),
        }
    }
}

/// A successful pattern match: the matched input and captured groups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepMatch {
    pub text: String,
    pub captures: Vec<String>,
}

impl StepMatch {
    /// Returns the nth capture group, or an empty string if absent.
    pub fn capture(&self, n: usize) -> &str {
        self.captures.get(n).map(String::as_str).unwrap_or("")
    }
}

/// Maps a natural-language step pattern to structured blueprint hints.
#[derive(Clone)]
pub struct StepDefinition {
    pub kind: StepKind,
    pub pattern: StepPattern,
    pub description: Option<String>,
    hints: Arc<dyn Fn(&StepMatch) -> Vec<BlueprintHint> + Send + Sync>,
}

impl StepDefinition {
    /// Creates a step definition from a kind, a pattern, and a pure
    /// hint-generation function.
    pub fn new(
        kind: StepKind,
        pattern: StepPattern,
        hints: impl Fn(&StepMatch) -> Vec<BlueprintHint> + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            pattern,
            description: None,
            hints: Arc::new(hints),
        }
    }

    /// Attaches a human-readable description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Translates a successful match into blueprint hints.
    ///
    /// Pure: no I/O, no side effects, equal inputs give equal outputs.
    /// One step may legally produce multiple hints.
    pub fn to_blueprint_hints(&self, step_match: &StepMatch) -> Vec<BlueprintHint> {
        (self.hints)(step_match)
    }
}

impl std::fmt::Debug for StepDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StepDefinition")
            .field("kind", &self.kind)
            .field("pattern", &self.pattern)
            .field("description", &self.description)
            .finish()
    }
}

/// Selects the first definition whose pattern matches the input.
pub fn match_step<'a>(
    steps: &'a [StepDefinition],
    input: &str,
) -> Option<(&'a StepDefinition, StepMatch)> {
    steps
        .iter()
        .find_map(|step| step.pattern.matches(input).map(|m| (step, m)))
}

/// Ordered registry of step definitions.
///
/// Registration appends; duplicates of the same pattern are legal and both
/// remain discoverable. Insertion order is preserved because matching policy
/// may treat earlier definitions as higher priority.
pub struct StepRegistry {
    steps: Vec<StepDefinition>,
}

impl StepRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Appends a step definition to the sequence.
    pub fn register(&mut self, step: StepDefinition) {
        debug!(kind = %step.kind, pattern = %step.pattern, "step registered");
        self.steps.push(step);
    }

    /// Returns a snapshot of the registered definitions, in insertion order.
    pub fn list(&self) -> Vec<StepDefinition> {
        self.steps.clone()
    }

    /// Returns the number of registered definitions.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns true if no definitions are registered.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl Default for StepRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for StepRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StepRegistry")
            .field("len", &self.steps.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use neotool_core::{FieldSpec, HttpMethod};

    fn click_step() -> StepDefinition {
        StepDefinition::new(
            StepKind::When,
            StepPattern::regex(r"the user clicks the (\w+) button").unwrap(),
            |m| {
                vec![BlueprintHint::Interaction {
                    component: format!("{}-button", m.capture(0)),
                    event: "click".to_string(),
                    action: m.capture(0).to_string(),
                }]
            },
        )
        .with_description("wires a button click to an action")
    }

    fn entity_step() -> StepDefinition {
        StepDefinition::new(
            StepKind::Given,
            StepPattern::regex(r"a (\w+) entity exists").unwrap(),
            |m| {
                vec![BlueprintHint::DataEntityAdd {
                    entity: m.capture(0).to_string(),
                    fields: vec![FieldSpec {
                        name: "id".to_string(),
                        field_type: "uuid".to_string(),
                    }],
                }]
            },
        )
    }

    #[test]
    fn exact_pattern_matches_whole_input_only() {
        let pattern = StepPattern::Exact("the operation succeeds".to_string());
        assert!(pattern.matches("the operation succeeds").is_some());
        assert!(pattern.matches("the operation succeeds!").is_none());

        let m = pattern.matches("the operation succeeds").unwrap();
        assert!(m.captures.is_empty());
    }

    #[test]
    fn regex_pattern_is_anchored_and_captures_groups() {
        let pattern = StepPattern::regex(r"a (\w+) entity exists").unwrap();
        let m = pattern.matches("a todo entity exists").unwrap();
        assert_eq!(m.captures, vec!["todo"]);

        // Anchoring: a partial match inside a longer sentence must not count.
        assert!(pattern.matches("whenever a todo entity exists here").is_none());
    }

    #[test]
    fn registry_preserves_insertion_order_and_duplicates() {
        let mut registry = StepRegistry::new();
        registry.register(click_step());
        registry.register(entity_step());
        registry.register(click_step());

        let listed = registry.list();
        assert_eq!(listed.len(), 3);
        assert_eq!(listed[0].kind, StepKind::When);
        assert_eq!(listed[1].kind, StepKind::Given);
        assert_eq!(listed[2].kind, StepKind::When);
    }

    #[test]
    fn list_returns_a_snapshot() {
        let mut registry = StepRegistry::new();
        registry.register(click_step());

        let mut snapshot = registry.list();
        snapshot.clear();
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn match_step_is_first_match_wins() {
        // Two definitions matching the same input: the earlier one wins.
        let broad = StepDefinition::new(
            StepKind::When,
            StepPattern::regex(r"the user clicks the (\w+) button").unwrap(),
            |_| vec![],
        );
        let steps = vec![click_step(), broad];

        let (chosen, m) = match_step(&steps, "the user clicks the save button").unwrap();
        assert_eq!(m.captures, vec!["save"]);
        assert!(chosen.description.is_some(), "first definition expected");

        assert!(match_step(&steps, "unrelated input").is_none());
    }

    #[test]
    fn to_blueprint_hints_is_pure_and_deterministic() {
        let step = click_step();
        let m = step
            .pattern
            .matches("the user clicks the save button")
            .unwrap();

        let first = step.to_blueprint_hints(&m);
        let second = step.to_blueprint_hints(&m);
        assert_eq!(first, second);
        assert_eq!(
            first,
            vec![BlueprintHint::Interaction {
                component: "save-button".to_string(),
                event: "click".to_string(),
                action: "save".to_string(),
            }]
        );
    }

    #[test]
    fn one_step_may_emit_multiple_hints() {
        let step = StepDefinition::new(
            StepKind::When,
            StepPattern::regex(r"the user submits the (\w+) form").unwrap(),
            |m| {
                vec![
                    BlueprintHint::Interaction {
                        component: format!("{}-form", m.capture(0)),
                        event: "submit".to_string(),
                        action: format!("submit-{}", m.capture(0)),
                    },
                    BlueprintHint::ApiOperationAdd {
                        method: HttpMethod::Post,
                        path: format!("/{}", m.capture(0)),
                        operation_id: format!("create-{}", m.capture(0)),
                    },
                ]
            },
        );

        let m = step
            .pattern
            .matches("the user submits the order form")
            .unwrap();
        let hints = step.to_blueprint_hints(&m);
        assert_eq!(hints.len(), 2);
    }
}
