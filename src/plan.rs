//! Endpoint scaffold planning.
//!
//! Derives the canonical controller/action/query names and route path for a
//! new endpoint from the HTTP method, scope and domain, and runs the
//! interactive configuration loop that lets the user override any default.
//! The confirmed [`Plan`] is immutable and drives one generation run.

use std::path::Path;

use cruet::Inflector;
use serde::Serialize;
use walkdir::WalkDir;

use crate::constants::{CONTROLLERS_DIR, ROUTES_DIR, ROUTE_FILE_SUFFIX, SRC_DIR};
use crate::error::{Error, Result};
use crate::prompt::Prompter;

/// HTTP methods supported by the endpoint scaffolder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    /// All methods, in prompt display order.
    pub const ALL: [Method; 5] =
        [Method::Get, Method::Post, Method::Put, Method::Patch, Method::Delete];

    /// Upper-case wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }

    /// Lower-case name, as used by the router registration call.
    pub fn lower(&self) -> &'static str {
        match self {
            Method::Get => "get",
            Method::Post => "post",
            Method::Put => "put",
            Method::Patch => "patch",
            Method::Delete => "delete",
        }
    }

    /// Prefix of the default controller name.
    pub fn operation_prefix(&self) -> &'static str {
        self.lower()
    }

    /// Verb of the default action name.
    pub fn action_verb(&self) -> &'static str {
        match self {
            Method::Get => "fetch",
            Method::Post => "create",
            Method::Put | Method::Patch => "modify",
            Method::Delete => "remove",
        }
    }

    /// Verb of the default query name.
    pub fn query_verb(&self) -> &'static str {
        match self {
            Method::Get => "select",
            Method::Post => "insert",
            Method::Put | Method::Patch => "update",
            Method::Delete => "delete",
        }
    }
}

/// The four user-overridable naming fields of a plan.
///
/// Produced with computed defaults by [`derive_defaults`] and carried into
/// [`Plan::new`] after the user has had a chance to override each value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanNames {
    pub controller_name: String,
    pub action_name: String,
    pub query_name: String,
    pub route_path: String,
}

/// A fully-resolved endpoint configuration, immutable once confirmed.
#[derive(Debug, Clone, Serialize)]
pub struct Plan {
    pub method: Method,
    pub scope: String,
    pub domain: String,
    pub controller_name: String,
    pub action_name: String,
    pub query_name: String,
    pub route_path: String,
    pub needs_schema: bool,
}

impl Plan {
    /// Builds a plan from its parts, trimming every field and rejecting empty
    /// names or route paths.
    ///
    /// # Errors
    /// * `Error::ValidationError` if any required field is empty after trimming
    pub fn new(
        method: Method,
        scope: String,
        domain: String,
        names: PlanNames,
        needs_schema: bool,
    ) -> Result<Plan> {
        let plan = Plan {
            method,
            scope: scope.trim().to_lowercase(),
            domain: domain.trim().to_lowercase(),
            controller_name: names.controller_name.trim().to_string(),
            action_name: names.action_name.trim().to_string(),
            query_name: names.query_name.trim().to_string(),
            route_path: names.route_path.trim().to_string(),
            needs_schema,
        };

        for (field, value) in [
            ("scope", &plan.scope),
            ("domain", &plan.domain),
            ("controller name", &plan.controller_name),
            ("action name", &plan.action_name),
            ("query name", &plan.query_name),
            ("route path", &plan.route_path),
        ] {
            if value.is_empty() {
                return Err(Error::ValidationError(format!("{} cannot be empty", field)));
            }
        }

        Ok(plan)
    }

    /// Directory name of the controller; mirrors the controller name.
    pub fn operation_name(&self) -> &str {
        &self.controller_name
    }
}

/// Computes the default names for a (method, scope, domain) triple.
///
/// The scheme is `<verb><PascalScope><PascalDomain>`, where the verb depends
/// on the operation category, and `/<domain>` for the route path. Identical
/// inputs always derive identical defaults.
pub fn derive_defaults(method: Method, scope: &str, domain: &str) -> PlanNames {
    let suffix = format!("{}{}", scope.to_pascal_case(), domain.to_pascal_case());
    PlanNames {
        controller_name: format!("{}{}", method.operation_prefix(), suffix),
        action_name: format!("{}{}", method.action_verb(), suffix),
        query_name: format!("{}{}", method.query_verb(), suffix),
        route_path: format!("/{}", domain),
    }
}

/// Lists scopes that already have a router file under `src/routes/`.
/// Read-only; a missing routes directory yields an empty list.
pub fn existing_scopes(project_dir: &Path) -> Vec<String> {
    let routes_dir = project_dir.join(SRC_DIR).join(ROUTES_DIR);
    let mut scopes: Vec<String> = WalkDir::new(routes_dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter_map(|entry| {
            entry
                .file_name()
                .to_str()
                .and_then(|name| name.strip_suffix(ROUTE_FILE_SUFFIX))
                .map(|scope| scope.to_string())
        })
        .collect();
    scopes.sort();
    scopes
}

/// Lists domains that already exist under `src/controllers/<scope>/`.
/// Read-only; a missing directory yields an empty list.
pub fn existing_domains(project_dir: &Path, scope: &str) -> Vec<String> {
    let scope_dir = project_dir.join(SRC_DIR).join(CONTROLLERS_DIR).join(scope);
    let mut domains: Vec<String> = WalkDir::new(scope_dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_dir())
        .filter_map(|entry| entry.file_name().to_str().map(|name| name.to_string()))
        .collect();
    domains.sort();
    domains
}

/// Asks the user to pick an existing name or type a new one. The typed value
/// is lowercased; dialoguer re-prompts until it is non-empty.
fn choose_or_create(
    prompt: &dyn Prompter,
    select_message: &str,
    input_message: &str,
    existing: Vec<String>,
) -> Result<String> {
    if existing.is_empty() {
        return Ok(prompt.input(input_message, None)?.trim().to_lowercase());
    }

    let mut items = existing;
    items.push("+ Create new".to_string());
    let choice = prompt.fuzzy_select(select_message, &items)?;
    if choice == items.len() - 1 {
        Ok(prompt.input(input_message, None)?.trim().to_lowercase())
    } else {
        Ok(items[choice].clone())
    }
}

fn print_preview(plan: &Plan) {
    println!("\n--- Configuration preview ---");
    println!("Method:      {}", plan.method.as_str());
    println!("Scope:       {}", plan.scope);
    println!("Domain:      {}", plan.domain);
    println!("Controller:  {}", plan.controller_name);
    println!("Action:      {}", plan.action_name);
    println!("Query:       {}", plan.query_name);
    println!("Route:       {} {}", plan.method.as_str(), plan.route_path);
    println!("Schema:      {}", if plan.needs_schema { "Yes" } else { "No" });
    println!("-----------------------------\n");
}

/// Runs the interactive configuration loop until the user confirms a plan.
///
/// Every derived name is offered as an editable default; rejecting the
/// preview restarts the whole sequence. No files are touched here beyond the
/// read-only scans for existing scopes and domains.
pub fn build_plan(prompt: &dyn Prompter, project_dir: &Path) -> Result<Plan> {
    loop {
        let methods: Vec<String> =
            Method::ALL.iter().map(|m| m.as_str().to_string()).collect();
        let method = Method::ALL[prompt.select("Select HTTP method", &methods, 0)?];

        let scope = choose_or_create(
            prompt,
            "Select or create a scope",
            "Enter scope name (e.g. \"app\", \"hub\", \"admin\")",
            existing_scopes(project_dir),
        )?;
        let domain = choose_or_create(
            prompt,
            "Select or create a domain",
            "Enter domain name (e.g. \"users\", \"products\")",
            existing_domains(project_dir, &scope),
        )?;

        let defaults = derive_defaults(method, &scope, &domain);
        let names = PlanNames {
            controller_name: prompt
                .input("Controller name", Some(&defaults.controller_name))?,
            action_name: prompt.input("Action name", Some(&defaults.action_name))?,
            query_name: prompt.input("Query name", Some(&defaults.query_name))?,
            route_path: prompt.input("Route path", Some(&defaults.route_path))?,
        };
        let needs_schema = prompt.confirm("Generate a validation schema file?", true)?;

        let plan = Plan::new(method, scope, domain, names, needs_schema)?;
        print_preview(&plan);

        if prompt.confirm("Does this look correct?", true)? {
            return Ok(plan);
        }
        println!("Restarting configuration...\n");
    }
}
