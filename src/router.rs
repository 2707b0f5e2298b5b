//! Idempotent router-file patching.
//!
//! Ensures a per-scope router file contains exactly one import statement and
//! one route-registration statement for a new controller, without disturbing
//! unrelated lines. Presence is checked by exact substring match, so running
//! the patch twice with the same plan is a fixed point.

use std::path::Path;

use crate::error::Result;
use crate::fsutil::{read_file, write_file};
use crate::plan::Plan;
use crate::templates::ROUTER_SKELETON;

/// The exact import statement implied by a plan.
pub fn import_statement(plan: &Plan) -> String {
    format!(
        "import {} from \"@/controllers/{}/{}/{}\";",
        plan.controller_name,
        plan.scope,
        plan.domain,
        plan.operation_name()
    )
}

/// The exact route-registration statement implied by a plan.
pub fn route_statement(plan: &Plan) -> String {
    format!(
        "router.{}(\"{}\", {});",
        plan.method.lower(),
        plan.route_path,
        plan.controller_name
    )
}

/// Merges the import and route statements into the router text.
///
/// The import is inserted after the last existing import line (at the top if
/// none exists); the route is inserted before the first `export default`
/// line (at the end of the file if none exists). Statements already present
/// verbatim are left alone, as is every other line.
pub fn patch(content: &str, import_line: &str, route_line: &str) -> String {
    let mut lines: Vec<String> = content.split('\n').map(|line| line.to_string()).collect();

    if !content.contains(import_line) {
        let insert_at = lines
            .iter()
            .rposition(|line| line.starts_with("import"))
            .map(|index| index + 1)
            .unwrap_or(0);
        lines.insert(insert_at, import_line.to_string());
    }

    if !content.contains(route_line) {
        match lines.iter().position(|line| line.starts_with("export default")) {
            Some(index) => lines.insert(index, route_line.to_string()),
            None => lines.push(route_line.to_string()),
        }
    }

    lines.join("\n")
}

/// Ensures the router file registers the plan's controller, creating the
/// file from the minimal skeleton when it does not exist yet. The patched
/// text is written back in a single pass.
pub fn patch_router_file(route_file: &Path, plan: &Plan) -> Result<()> {
    let content = if route_file.exists() {
        read_file(route_file)?
    } else {
        ROUTER_SKELETON.to_string()
    };

    let patched = patch(&content, &import_statement(plan), &route_statement(plan));
    write_file(&patched, route_file)
}
