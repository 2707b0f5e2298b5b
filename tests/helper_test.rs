use std::cell::RefCell;
use std::collections::VecDeque;
use std::fs;

use indigo::error::Result;
use indigo::helper;
use indigo::prompt::Prompter;
use indigo::renderer::MiniJinjaRenderer;
use tempfile::TempDir;

/// Minimal scripted prompter: queued text inputs and confirmations.
struct StubPrompter {
    inputs: RefCell<VecDeque<String>>,
    confirmations: RefCell<VecDeque<bool>>,
}

impl StubPrompter {
    fn new(inputs: Vec<&str>, confirmations: Vec<bool>) -> Self {
        Self {
            inputs: RefCell::new(inputs.into_iter().map(|s| s.to_string()).collect()),
            confirmations: RefCell::new(confirmations.into()),
        }
    }
}

impl Prompter for StubPrompter {
    fn select(&self, _prompt: &str, _items: &[String], _default: usize) -> Result<usize> {
        unreachable!("helper flow never selects")
    }

    fn fuzzy_select(&self, _prompt: &str, _items: &[String]) -> Result<usize> {
        unreachable!("helper flow never selects")
    }

    fn input(&self, _prompt: &str, _default: Option<&str>) -> Result<String> {
        Ok(self.inputs.borrow_mut().pop_front().expect("input script exhausted"))
    }

    fn confirm(&self, _prompt: &str, _default: bool) -> Result<bool> {
        Ok(self.confirmations.borrow_mut().pop_front().expect("confirm script exhausted"))
    }
}

#[test]
fn test_creates_camel_cased_helper() {
    let temp_dir = TempDir::new().unwrap();
    let engine = MiniJinjaRenderer::new();
    let prompt = StubPrompter::new(vec!["select user by id"], vec![]);

    helper::run(&prompt, &engine, temp_dir.path()).unwrap();

    let content =
        fs::read_to_string(temp_dir.path().join("src/schemaHelpers/selectUserById.ts"))
            .unwrap();
    assert!(content.contains("export const selectUserById = async ({}: {}) => {"));
    assert!(content.contains("export default selectUserById;"));
}

#[test]
fn test_declining_overwrite_keeps_existing_helper() {
    let temp_dir = TempDir::new().unwrap();
    let engine = MiniJinjaRenderer::new();
    let target = temp_dir.path().join("src/schemaHelpers/selectUserById.ts");
    fs::create_dir_all(target.parent().unwrap()).unwrap();
    fs::write(&target, "// customized helper\n").unwrap();

    let prompt = StubPrompter::new(vec!["select user by id"], vec![false]);
    helper::run(&prompt, &engine, temp_dir.path()).unwrap();

    assert_eq!(fs::read_to_string(&target).unwrap(), "// customized helper\n");
}

#[test]
fn test_confirming_overwrite_replaces_helper() {
    let temp_dir = TempDir::new().unwrap();
    let engine = MiniJinjaRenderer::new();
    let target = temp_dir.path().join("src/schemaHelpers/selectUserById.ts");
    fs::create_dir_all(target.parent().unwrap()).unwrap();
    fs::write(&target, "// customized helper\n").unwrap();

    let prompt = StubPrompter::new(vec!["select user by id"], vec![true]);
    helper::run(&prompt, &engine, temp_dir.path()).unwrap();

    let content = fs::read_to_string(&target).unwrap();
    assert!(content.contains("export const selectUserById"));
}

#[test]
fn test_empty_helper_name_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let engine = MiniJinjaRenderer::new();
    let prompt = StubPrompter::new(vec!["   "], vec![]);

    assert!(helper::run(&prompt, &engine, temp_dir.path()).is_err());
}
