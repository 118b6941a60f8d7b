pub mod navigation;

pub use navigation::breadcrumbs as navigation_breadcrumbs;
pub use navigation::children as navigation_children;
pub use navigation::tree as navigation_tree;
