//! Fixed templates for every file the generators emit.
//!
//! The scaffolder produces TypeScript sources for the layered project layout
//! (controller, schema stub, action, query stub); the templates here are the
//! single source of truth for their shape. Rendering goes through the
//! [`TemplateRenderer`] seam with a context built from the confirmed plan.

use crate::error::Result;
use crate::plan::{Method, Plan};
use crate::renderer::TemplateRenderer;

/// Controller file: validates the payload when a schema is requested, invokes
/// the action and delegates to the success/error responder pair.
const CONTROLLER_TEMPLATE: &str = r#"import { Request, Response } from "express";
import handleError from "@/utils/handleError";
import handleSuccess from "@/utils/handleSuccess";
import {{ action_name }} from "@/actions/{{ scope }}/{{ domain }}/{{ action_name }}";
{% if needs_schema %}import {{ operation_name }}Schema from "./schema/{{ operation_name }}.schema";{% endif %}

const {{ controller_name }} = async (req: Request, res: Response) => {
    try {
        {% if needs_schema %}const validatedData = await {{ operation_name }}Schema.parseAsync({});{% else %}// const validatedData = {};{% endif %}

        const { data } = await {{ action_name }}({
            // pass data here
        });

        return handleSuccess({
            req,
            res,
            message: "Operation successful",
            data,
            code: {{ status_code }},
        });
    } catch (error) {
        return handleError({
            req,
            res,
            error,
        });
    }
};

export default {{ controller_name }};
"#;

/// Structural-validation stub, emitted only when the plan asks for one.
const SCHEMA_TEMPLATE: &str = r#"import { z } from "zod";

const {{ operation_name }}Schema = z.object({
    // Define your schema here
});

export default {{ operation_name }}Schema;
"#;

/// Action file: invokes the query and returns its result verbatim.
const ACTION_TEMPLATE: &str = r#"import {{ query_name }} from "./queries/{{ query_name }}";

export const {{ action_name }} = async ({}: {}) => {
    const { data } = await {{ query_name }}({});

    return {
        data,
    };
};

export default {{ action_name }};
"#;

/// Query stub: returns a null-data placeholder result.
const QUERY_TEMPLATE: &str = r#"import { db } from "@/database";
import { camelKeys } from "@/database/utils";

export const {{ query_name }} = async ({}: {}) => {
    // const result = await db.selectFrom("table").selectAll().execute();
    // return { data: camelKeys(result) };
    return { data: null };
};

export default {{ query_name }};
"#;

/// Starting text for a router file that does not exist yet.
pub const ROUTER_SKELETON: &str = r#"import { Router } from "express";

const router = Router();

export default router;
"#;

/// Reusable schema helper stub.
const HELPER_TEMPLATE: &str = r#"import { db } from "@/database";
import { camelKeys } from "@/database/utils";

/**
 * Reusable schema helper for async validation
 */
export const {{ helper_name }} = async ({}: {}) => {
    const result = await db
        .selectFrom("")
        .select([])
        .where("", "=", "")
        .executeTakeFirst();

    return result ? camelKeys(result) : null;
};

export default {{ helper_name }};
"#;

/// Replacement body for migration scripts, loading their SQL from the
/// sibling queries directory. Static text; the script resolves its own name
/// at run time.
pub const MIGRATION_WRAPPER: &str = r#"import { Knex } from 'knex';
import * as fs from 'fs/promises';
import * as path from 'path';

export async function up(knex: Knex): Promise<void> {
  const migrationName = path.basename(__filename, '.ts');
  const sqlPath = path.resolve(__dirname, '../queries', `${migrationName}.up.sql`);
  const sql = await fs.readFile(sqlPath, 'utf8');
  await knex.raw(sql);
}

export async function down(knex: Knex): Promise<void> {
  const migrationName = path.basename(__filename, '.ts');
  const sqlPath = path.resolve(__dirname, '../queries', `${migrationName}.down.sql`);
  const sql = await fs.readFile(sqlPath, 'utf8');
  await knex.raw(sql);
}
"#;

/// Builds the render context shared by the four endpoint templates: the
/// plan's own fields plus the operation name and response status code.
fn plan_context(plan: &Plan) -> serde_json::Value {
    let mut context = serde_json::to_value(plan).unwrap_or(serde_json::Value::Null);
    if let Some(map) = context.as_object_mut() {
        map.insert("operation_name".to_string(), plan.operation_name().into());
        let status_code = if plan.method == Method::Post { 201 } else { 200 };
        map.insert("status_code".to_string(), status_code.into());
    }
    context
}

/// Renders the controller file text for a plan.
pub fn render_controller(engine: &dyn TemplateRenderer, plan: &Plan) -> Result<String> {
    engine.render(CONTROLLER_TEMPLATE, &plan_context(plan))
}

/// Renders the schema stub text for a plan.
pub fn render_schema(engine: &dyn TemplateRenderer, plan: &Plan) -> Result<String> {
    engine.render(SCHEMA_TEMPLATE, &plan_context(plan))
}

/// Renders the action file text for a plan.
pub fn render_action(engine: &dyn TemplateRenderer, plan: &Plan) -> Result<String> {
    engine.render(ACTION_TEMPLATE, &plan_context(plan))
}

/// Renders the query stub text for a plan.
pub fn render_query(engine: &dyn TemplateRenderer, plan: &Plan) -> Result<String> {
    engine.render(QUERY_TEMPLATE, &plan_context(plan))
}

/// Renders a schema helper stub for an already camel-cased helper name.
pub fn render_helper(engine: &dyn TemplateRenderer, helper_name: &str) -> Result<String> {
    engine.render(HELPER_TEMPLATE, &serde_json::json!({ "helper_name": helper_name }))
}
