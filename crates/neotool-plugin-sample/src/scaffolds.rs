// SPDX-FileCopyrightText: 2026 Neotool Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Built-in scaffolds registered by the sample plugin.
//!
//! Each scaffold renders source text with `format!` templates. Paths are
//! relative to the target project root (`app/web/...`, `app/api/...`,
//! `infra/migrations/...`, `.github/...`).

use async_trait::async_trait;
use chrono::Utc;
use neotool_core::{
    FileMode, GeneratedFile, NeotoolError, Scaffold, ScaffoldContext, ScaffoldKind,
};

/// The subject a scaffold renders for: the feature name when present,
/// otherwise the app name.
fn subject(ctx: &ScaffoldContext) -> &str {
    ctx.feature
        .as_ref()
        .map(|f| f.name.as_str())
        .unwrap_or(&ctx.app.name)
}

/// Validates a name used in generated identifiers and paths.
fn validate_name(scaffold_id: &str, name: &str) -> Result<(), NeotoolError> {
    if name.is_empty() {
        return Err(NeotoolError::Scaffold {
            id: scaffold_id.to_string(),
            message: "subject name must not be empty".to_string(),
            source: None,
        });
    }
    if !name
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
    {
        return Err(NeotoolError::Scaffold {
            id: scaffold_id.to_string(),
            message: format!(
                "subject name '{name}' contains invalid characters \
                 (only alphanumeric, hyphens, underscores allowed)"
            ),
            source: None,
        });
    }
    Ok(())
}

/// Converts a kebab/snake name to PascalCase for component identifiers.
fn pascal_case(name: &str) -> String {
    name.split(['-', '_'])
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

/// Renders a React page component and its route entry.
#[derive(Debug)]
pub struct ReactPageScaffold;

#[async_trait]
impl Scaffold for ReactPageScaffold {
    fn id(&self) -> &str {
        "react-page"
    }

    fn applies_to(&self) -> ScaffoldKind {
        ScaffoldKind::Ui
    }

    async fn render(&self, ctx: &ScaffoldContext) -> Result<Vec<GeneratedFile>, NeotoolError> {
        let name = subject(ctx);
        validate_name(self.id(), name)?;
        let component = format!("{}Page", pascal_case(name));

        let page = format!(
            r#"import React from "react";

export function {component}() {{
  return (
    <main>
      <h1>{title}</h1>
    </main>
  );
}}
"#,
            component = component,
            title = ctx.app.title,
        );

        let route = format!(
            r#"import {{ {component} }} from "../pages/{component}";

export const route = {{
  path: "/{name}",
  element: <{component} />,
}};
"#,
            component = component,
            name = name,
        );

        Ok(vec![
            GeneratedFile {
                path: format!("app/web/src/pages/{component}.tsx"),
                content: page,
                mode: Some(FileMode::Regular),
            },
            GeneratedFile {
                path: format!("app/web/src/routes/{name}.tsx"),
                content: route,
                mode: Some(FileMode::Regular),
            },
        ])
    }
}

/// Renders a form component wired to schema validation.
#[derive(Debug)]
pub struct ReactFormScaffold;

#[async_trait]
impl Scaffold for ReactFormScaffold {
    fn id(&self) -> &str {
        "react-form"
    }

    fn applies_to(&self) -> ScaffoldKind {
        ScaffoldKind::Ui
    }

    async fn render(&self, ctx: &ScaffoldContext) -> Result<Vec<GeneratedFile>, NeotoolError> {
        let name = subject(ctx);
        validate_name(self.id(), name)?;
        let component = format!("{}Form", pascal_case(name));

        let form = format!(
            r#"import React from "react";
import {{ useForm }} from "react-hook-form";

type {component}Values = {{
  name: string;
}};

export function {component}(props: {{ onSubmit: (values: {component}Values) => void }}) {{
  const {{ register, handleSubmit }} = useForm<{component}Values>();
  return (
    <form onSubmit={{handleSubmit(props.onSubmit)}}>
      <input {{...register("name", {{ required: true }})}} />
      <button type="submit">Save</button>
    </form>
  );
}}
"#,
            component = component,
        );

        Ok(vec![GeneratedFile {
            path: format!("app/web/src/forms/{component}.tsx"),
            content: form,
            mode: Some(FileMode::Regular),
        }])
    }
}

/// Renders a REST handler plus its OpenAPI fragment.
#[derive(Debug)]
pub struct RestEndpointScaffold;

#[async_trait]
impl Scaffold for RestEndpointScaffold {
    fn id(&self) -> &str {
        "rest-endpoint"
    }

    fn applies_to(&self) -> ScaffoldKind {
        ScaffoldKind::Api
    }

    async fn render(&self, ctx: &ScaffoldContext) -> Result<Vec<GeneratedFile>, NeotoolError> {
        let name = subject(ctx);
        validate_name(self.id(), name)?;

        let handler = format!(
            r#"import {{ Router }} from "express";

export const {name}Router = Router();

{name}Router.get("/{name}", async (_req, res) => {{
  res.json({{ items: [] }});
}});

{name}Router.post("/{name}", async (req, res) => {{
  res.status(201).json(req.body);
}});
"#,
            name = name,
        );

        let openapi = format!(
            r#"paths:
  /{name}:
    get:
      operationId: list-{name}
      responses:
        "200":
          description: List {name} items
    post:
      operationId: create-{name}
      responses:
        "201":
          description: Created
"#,
            name = name,
        );

        Ok(vec![
            GeneratedFile {
                path: format!("app/api/src/routes/{name}.ts"),
                content: handler,
                mode: Some(FileMode::Regular),
            },
            GeneratedFile {
                path: format!("app/api/openapi/{name}.yaml"),
                content: openapi,
                mode: Some(FileMode::Regular),
            },
        ])
    }
}

/// Renders a timestamped SQL migration creating the subject entity's table.
#[derive(Debug)]
pub struct SqlMigrationScaffold;

#[async_trait]
impl Scaffold for SqlMigrationScaffold {
    fn id(&self) -> &str {
        "sql-migration"
    }

    fn applies_to(&self) -> ScaffoldKind {
        ScaffoldKind::Data
    }

    async fn render(&self, ctx: &ScaffoldContext) -> Result<Vec<GeneratedFile>, NeotoolError> {
        let entity = ctx
            .data
            .as_ref()
            .and_then(|d| d.entities.first().map(String::as_str))
            .unwrap_or_else(|| subject(ctx));
        validate_name(self.id(), entity)?;

        let table = entity.replace('-', "_");
        let stamp = Utc::now().format("%Y%m%d%H%M%S");

        let migration = format!(
            r#"-- create {table}
CREATE TABLE {table} (
    id UUID PRIMARY KEY,
    name TEXT NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
);
"#,
            table = table,
        );

        Ok(vec![GeneratedFile {
            path: format!("infra/migrations/{stamp}_create_{table}.sql"),
            content: migration,
            mode: Some(FileMode::Regular),
        }])
    }
}

/// Renders a CI workflow plus the executable check script it invokes.
#[derive(Debug)]
pub struct CiWorkflowScaffold;

#[async_trait]
impl Scaffold for CiWorkflowScaffold {
    fn id(&self) -> &str {
        "ci-workflow"
    }

    fn applies_to(&self) -> ScaffoldKind {
        ScaffoldKind::Ci
    }

    async fn render(&self, ctx: &ScaffoldContext) -> Result<Vec<GeneratedFile>, NeotoolError> {
        let workflow = format!(
            r#"name: {name} checks
on:
  push:
    branches: [main]
  pull_request: {{}}

jobs:
  checks:
    runs-on: ubuntu-latest
    steps:
      - uses: actions/checkout@v4
      - run: ./scripts/ci/run-checks.sh
"#,
            name = ctx.app.name,
        );

        let script = r#"#!/usr/bin/env bash
set -euo pipefail

npm ci
npm run lint
npm test
"#;

        Ok(vec![
            GeneratedFile {
                path: ".github/workflows/ci.yml".to_string(),
                content: workflow,
                mode: Some(FileMode::Regular),
            },
            GeneratedFile {
                path: "scripts/ci/run-checks.sh".to_string(),
                content: script.to_string(),
                mode: Some(FileMode::Executable),
            },
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use neotool_core::{AppSpec, DataBlueprint, FeatureSpec};

    fn ctx() -> ScaffoldContext {
        ScaffoldContext::new(AppSpec {
            name: "shop".to_string(),
            title: "Shop Admin".to_string(),
        })
    }

    fn ctx_with_feature(name: &str) -> ScaffoldContext {
        let mut ctx = ctx();
        ctx.feature = Some(FeatureSpec {
            name: name.to_string(),
            description: format!("{name} feature"),
        });
        ctx
    }

    #[test]
    fn pascal_case_handles_separators() {
        assert_eq!(pascal_case("order-history"), "OrderHistory");
        assert_eq!(pascal_case("order_history"), "OrderHistory");
        assert_eq!(pascal_case("shop"), "Shop");
    }

    #[tokio::test]
    async fn react_page_renders_component_and_route() {
        let files = ReactPageScaffold
            .render(&ctx_with_feature("order-history"))
            .await
            .unwrap();

        assert_eq!(files.len(), 2);
        assert_eq!(files[0].path, "app/web/src/pages/OrderHistoryPage.tsx");
        assert!(files[0].content.contains("export function OrderHistoryPage()"));
        assert!(files[0].content.contains("<h1>Shop Admin</h1>"));
        assert_eq!(files[1].path, "app/web/src/routes/order-history.tsx");
        assert!(files[1].content.contains("path: \"/order-history\""));
    }

    #[tokio::test]
    async fn react_page_falls_back_to_app_name() {
        let files = ReactPageScaffold.render(&ctx()).await.unwrap();
        assert_eq!(files[0].path, "app/web/src/pages/ShopPage.tsx");
    }

    #[tokio::test]
    async fn react_page_rejects_invalid_subject() {
        let err = ReactPageScaffold
            .render(&ctx_with_feature("bad name!"))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            NeotoolError::Scaffold { ref id, .. } if id == "react-page"
        ));
    }

    #[tokio::test]
    async fn react_form_renders_validated_form() {
        let files = ReactFormScaffold
            .render(&ctx_with_feature("customer"))
            .await
            .unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].path, "app/web/src/forms/CustomerForm.tsx");
        assert!(files[0].content.contains("useForm<CustomerFormValues>"));
    }

    #[tokio::test]
    async fn rest_endpoint_renders_handler_and_openapi_fragment() {
        let files = RestEndpointScaffold
            .render(&ctx_with_feature("orders"))
            .await
            .unwrap();

        assert_eq!(files.len(), 2);
        assert_eq!(files[0].path, "app/api/src/routes/orders.ts");
        assert!(files[0].content.contains("ordersRouter.post"));
        assert_eq!(files[1].path, "app/api/openapi/orders.yaml");
        assert!(files[1].content.contains("operationId: create-orders"));
    }

    #[tokio::test]
    async fn sql_migration_prefers_data_blueprint_entity() {
        let mut ctx = ctx();
        ctx.data = Some(DataBlueprint {
            entities: vec!["order-item".to_string()],
        });

        let files = SqlMigrationScaffold.render(&ctx).await.unwrap();
        assert_eq!(files.len(), 1);
        assert!(files[0].path.starts_with("infra/migrations/"));
        assert!(files[0].path.ends_with("_create_order_item.sql"));
        assert!(files[0].content.contains("CREATE TABLE order_item"));
    }

    #[tokio::test]
    async fn ci_workflow_marks_script_executable() {
        let files = CiWorkflowScaffold.render(&ctx()).await.unwrap();

        assert_eq!(files.len(), 2);
        assert_eq!(files[0].path, ".github/workflows/ci.yml");
        assert_eq!(files[0].mode, Some(FileMode::Regular));
        assert_eq!(files[1].path, "scripts/ci/run-checks.sh");
        assert_eq!(files[1].mode, Some(FileMode::Executable));
        assert!(files[1].content.starts_with("#!/usr/bin/env bash"));
    }
}
