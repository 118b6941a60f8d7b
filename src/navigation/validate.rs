use std::collections::HashSet;

use thiserror::Error;

use super::tree::{RouteItem, RouteTree};

/// Authoring mistakes in a route tree. None of these affect lookups at
/// runtime; they are reported at startup and by `hq nav check`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteTreeError {
    #[error("duplicate sibling path '{path}' under '{parent}'")]
    DuplicateSibling { parent: String, path: String },

    #[error("path '{0}' is not absolute")]
    RelativePath(String),

    #[error("path '{0}' has a trailing slash")]
    TrailingSlash(String),

    #[error("route '{0}' has an empty label")]
    EmptyLabel(String),
}

impl RouteTree {
    /// Collect every authoring problem in the tree.
    pub fn validate(&self) -> Result<(), Vec<RouteTreeError>> {
        let mut problems = Vec::new();
        check_siblings("/", self.roots(), &mut problems);

        if problems.is_empty() {
            Ok(())
        } else {
            Err(problems)
        }
    }
}

fn check_siblings(parent: &str, items: &[RouteItem], problems: &mut Vec<RouteTreeError>) {
    let mut seen = HashSet::new();

    for item in items {
        if !seen.insert(item.path.as_str()) {
            problems.push(RouteTreeError::DuplicateSibling {
                parent: parent.to_string(),
                path: item.path.clone(),
            });
        }
        if !item.path.starts_with('/') {
            problems.push(RouteTreeError::RelativePath(item.path.clone()));
        } else if item.path.len() > 1 && item.path.ends_with('/') {
            problems.push(RouteTreeError::TrailingSlash(item.path.clone()));
        }
        if item.label.trim().is_empty() {
            problems.push(RouteTreeError::EmptyLabel(item.path.clone()));
        }

        check_siblings(&item.path, &item.children, problems);
    }
}
