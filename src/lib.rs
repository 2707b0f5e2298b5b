//! indigo is a code-generation and source-patching engine for layered web
//! projects. It scaffolds HTTP endpoint implementations, keeps per-scope
//! router files up to date through an idempotent textual patch, generates
//! database type definitions from live catalog introspection, and maintains
//! SQL stub files for migrations.

/// Command-line interface module for the indigo application
pub mod cli;

/// Database connection settings for catalog introspection
pub mod config;

/// Common constants: directory layout and generated file locations
pub mod constants;

/// Rendering of the generated database type file
pub mod emitter;

/// Error types and handling for the indigo application
pub mod error;

/// Small filesystem helpers shared by the generators
pub mod fsutil;

/// Reusable schema-helper generation
pub mod helper;

/// Catalog introspection for the database type generator
pub mod introspect;

/// Migration SQL stub generation and idempotent script patching
pub mod migrations;

/// Endpoint scaffold planning: naming derivation and the interactive flow
pub mod plan;

/// User input and interaction handling
pub mod prompt;

/// Template rendering functionality
pub mod renderer;

/// Idempotent router-file patching
pub mod router;

/// Endpoint file synthesis
pub mod scaffold;

/// Fixed templates for every generated file
pub mod templates;

/// Mapping from storage column types to TypeScript value types
pub mod typemap;
