//! CLI probe for the family graph core.
//!
//! # Responsibility
//! - Load a dataset file, report normalization repairs, and summarize the
//!   root family, independently of any UI runtime.
//! - Optionally run one search query against the loaded tree.

use kinship_core::{
    children_of, load_tree_from_path, resolve_display_name, search_persons, spouses_of,
    FamilyTree, Person,
};
use std::path::PathBuf;
use std::process::ExitCode;

const SEARCH_SUGGESTION_LIMIT: usize = 8;

fn main() -> ExitCode {
    let mut args = std::env::args().skip(1);
    let Some(dataset) = args.next() else {
        eprintln!("usage: kinship_cli <dataset.json> [query]");
        return ExitCode::from(2);
    };
    let query = args.next();

    let normalized = match load_tree_from_path(&PathBuf::from(&dataset)) {
        Ok(normalized) => normalized,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    println!(
        "loaded {} persons from {dataset} (core v{})",
        normalized.tree.len(),
        kinship_core::core_version()
    );
    for warning in &normalized.warnings {
        println!("warning: {warning}");
    }

    print_root_summary(&normalized.tree);

    if let Some(query) = query {
        println!("matches for `{query}`:");
        let hits = search_persons(&normalized.tree, &query, None, SEARCH_SUGGESTION_LIMIT);
        if hits.is_empty() {
            println!("  none recorded");
        }
        for person in hits {
            println!("  {} ({})", resolve_display_name(Some(person)), person.id);
        }
    }

    ExitCode::SUCCESS
}

fn print_root_summary(tree: &FamilyTree) {
    let root = tree.root();
    println!("root: {}", resolve_display_name(root));
    let Some(root) = root else {
        return;
    };

    let spouses = spouses_of(tree, root);
    println!("spouses: {}", name_list(&spouses));
    let children = children_of(tree, root);
    println!("children: {}", name_list(&children));
}

fn name_list(persons: &[&Person]) -> String {
    if persons.is_empty() {
        return "none recorded".to_string();
    }
    persons
        .iter()
        .map(|person| resolve_display_name(Some(person)))
        .collect::<Vec<_>>()
        .join(", ")
}
