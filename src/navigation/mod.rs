pub mod tree;
pub mod validate;

pub use tree::{hq_portal_tree, Crumb, RouteItem, RouteTree, ROUTES};
pub use validate::RouteTreeError;

/// Process-wide route tree, built on first access.
pub fn routes() -> &'static RouteTree {
    &ROUTES
}
