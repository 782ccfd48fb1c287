// SPDX-FileCopyrightText: 2026 Neotool Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Built-in step definitions registered by the sample plugin.
//!
//! Each step translates a recognized natural-language sentence into
//! blueprint hints. Patterns are anchored to the full input; earlier
//! definitions take priority under first-match-wins.

use neotool_core::{BlueprintHint, FieldSpec, HttpMethod, StepKind};
use neotool_registry::{StepDefinition, StepPattern};

/// Returns the sample plugin's step definitions, in priority order.
pub fn sample_steps() -> Vec<StepDefinition> {
    vec![
        StepDefinition::new(
            StepKind::Given,
            StepPattern::regex(r"a ([\w-]+) entity exists").unwrap(),
            |m| {
                vec![BlueprintHint::DataEntityAdd {
                    entity: m.capture(0).to_string(),
                    fields: vec![
                        FieldSpec {
                            name: "id".to_string(),
                            field_type: "uuid".to_string(),
                        },
                        FieldSpec {
                            name: "name".to_string(),
                            field_type: "string".to_string(),
                        },
                    ],
                }]
            },
        )
        .with_description("declares a persisted entity"),
        StepDefinition::new(
            StepKind::When,
            StepPattern::regex(r"the user clicks the ([\w-]+) button").unwrap(),
            |m| {
                vec![BlueprintHint::Interaction {
                    component: format!("{}-button", m.capture(0)),
                    event: "click".to_string(),
                    action: m.capture(0).to_string(),
                }]
            },
        )
        .with_description("wires a button click to an action"),
        StepDefinition::new(
            StepKind::When,
            StepPattern::regex(r"the user submits the ([\w-]+) form").unwrap(),
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
        )
        .with_description("submits a form and adds the backing API operation"),
        StepDefinition::new(
            StepKind::Then,
            StepPattern::regex(r"the ([\w-]+) view is shown").unwrap(),
            |m| {
                vec![BlueprintHint::ViewChange {
                    view: m.capture(0).to_string(),
                    description: format!("navigate to the {} view", m.capture(0)),
                }]
            },
        )
        .with_description("asserts navigation to a view"),
        StepDefinition::new(
            StepKind::Then,
            StepPattern::Exact("the operation succeeds".to_string()),
            |_| {
                vec![BlueprintHint::ViewChange {
                    view: "current".to_string(),
                    description: "show a success confirmation".to_string(),
                }]
            },
        )
        .with_description("asserts a success confirmation"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use neotool_registry::match_step;

    #[test]
    fn sample_steps_returns_five_definitions() {
        assert_eq!(sample_steps().len(), 5);
    }

    #[test]
    fn entity_step_produces_data_entity_hint() {
        let steps = sample_steps();
        let (step, m) = match_step(&steps, "a customer entity exists").unwrap();
        assert_eq!(step.kind, StepKind::Given);

        let hints = step.to_blueprint_hints(&m);
        assert_eq!(hints.len(), 1);
        assert!(matches!(
            &hints[0],
            BlueprintHint::DataEntityAdd { entity, fields }
                if entity == "customer" && fields.len() == 2
        ));
    }

    #[test]
    fn submit_step_produces_interaction_and_api_hints() {
        let steps = sample_steps();
        let (step, m) = match_step(&steps, "the user submits the order form").unwrap();

        let hints = step.to_blueprint_hints(&m);
        assert_eq!(hints.len(), 2);
        assert!(matches!(&hints[0], BlueprintHint::Interaction { event, .. } if event == "submit"));
        assert!(matches!(
            &hints[1],
            BlueprintHint::ApiOperationAdd { method, operation_id, .. }
                if *method == HttpMethod::Post && operation_id == "create-order"
        ));
    }

    #[test]
    fn exact_step_matches_literal_sentence() {
        let steps = sample_steps();
        let (step, m) = match_step(&steps, "the operation succeeds").unwrap();
        assert_eq!(step.kind, StepKind::Then);

        let hints = step.to_blueprint_hints(&m);
        assert!(matches!(&hints[0], BlueprintHint::ViewChange { view, .. } if view == "current"));
    }

    #[test]
    fn unrecognized_sentence_matches_nothing() {
        let steps = sample_steps();
        assert!(match_step(&steps, "the moon is made of cheese").is_none());
    }
}
