use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// One navigable location in the portal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteItem {
    pub path: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<RouteItem>,
}

impl RouteItem {
    pub fn new(path: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            label: label.into(),
            children: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<RouteItem>) -> Self {
        self.children = children;
        self
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// `current` is this node's path, or lies underneath it.
    fn matches(&self, current: &str) -> bool {
        match current.strip_prefix(self.path.as_str()) {
            Some("") => true,
            Some(rest) => rest.starts_with('/'),
            None => false,
        }
    }

    fn first_matching_child(&self, current: &str) -> Option<&RouteItem> {
        self.children.iter().find(|child| child.matches(current))
    }
}

/// Breadcrumb entry handed to renderers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Crumb {
    pub path: String,
    pub label: String,
}

impl From<&RouteItem> for Crumb {
    fn from(item: &RouteItem) -> Self {
        Self {
            path: item.path.clone(),
            label: item.label.clone(),
        }
    }
}

/// Immutable forest of navigable routes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteTree {
    roots: Vec<RouteItem>,
}

impl RouteTree {
    pub fn new(roots: Vec<RouteItem>) -> Self {
        Self { roots }
    }

    pub fn roots(&self) -> &[RouteItem] {
        &self.roots
    }

    /// Children of the first node (depth-first, declared order) whose path is
    /// exactly `section`. Unknown sections and leaves yield an empty slice.
    pub fn children(&self, section: &str) -> &[RouteItem] {
        find_section(&self.roots, section)
            .map(|item| item.children.as_slice())
            .unwrap_or(&[])
    }

    /// Chain of nodes from a root down to the most specific node matching
    /// `current`. Empty when nothing matches.
    ///
    /// A node matches when `current` equals its path or continues it with a
    /// `/`. Children need not be literal sub-paths of their parent, so when a
    /// node has no deeper match its immediate children are scanned once more
    /// as a fallback.
    pub fn resolve_trail(&self, current: &str) -> Vec<&RouteItem> {
        resolve_in(&self.roots, current).unwrap_or_default()
    }

    /// Same as [`RouteTree::resolve_trail`], copied out as `{path, label}` pairs.
    pub fn breadcrumbs(&self, current: &str) -> Vec<Crumb> {
        self.resolve_trail(current)
            .into_iter()
            .map(Crumb::from)
            .collect()
    }

    /// Every node, parents before children, in declared order.
    pub fn iter(&self) -> impl Iterator<Item = &RouteItem> {
        let mut stack: Vec<&RouteItem> = self.roots.iter().rev().collect();
        std::iter::from_fn(move || {
            let item = stack.pop()?;
            stack.extend(item.children.iter().rev());
            Some(item)
        })
    }
}

fn find_section<'a>(items: &'a [RouteItem], section: &str) -> Option<&'a RouteItem> {
    items.iter().find_map(|item| {
        if item.path == section {
            Some(item)
        } else {
            find_section(&item.children, section)
        }
    })
}

fn resolve_in<'a>(items: &'a [RouteItem], current: &str) -> Option<Vec<&'a RouteItem>> {
    // Siblings that match directly win over any child fallback.
    for item in items {
        if item.path == current {
            return Some(vec![item]);
        }

        if item.matches(current) {
            if let Some(rest) = resolve_in(&item.children, current) {
                return Some(std::iter::once(item).chain(rest).collect());
            }
            // Prefix-matching leaf below a subtree that found nothing deeper.
            if let Some(child) = item.first_matching_child(current) {
                return Some(vec![item, child]);
            }
        }
    }

    // Children whose path doesn't nest under their parent at all.
    items
        .iter()
        .filter(|item| !item.matches(current))
        .find_map(|item| item.first_matching_child(current).map(|child| vec![item, child]))
}

/// Route tree served by the portal frontend.
pub fn hq_portal_tree() -> RouteTree {
    RouteTree::new(vec![
        RouteItem::new("/", "Dashboard"),
        RouteItem::new("/menus", "Menu Management").with_children(vec![
            RouteItem::new("/menus/categories", "Categories"),
            RouteItem::new("/menus/virtual-categories", "Virtual Categories"),
            RouteItem::new("/menus/items", "Menu Items"),
            RouteItem::new("/menus/modifiers", "Modifiers"),
            RouteItem::new("/menus/promotions", "Promotions"),
            RouteItem::new("/menus/discounts", "Discounts"),
            RouteItem::new("/operations/menu/button-styles", "Button Styles"),
        ]),
        RouteItem::new("/organization-management", "Organization Management"),
    ])
}

pub static ROUTES: Lazy<RouteTree> = Lazy::new(hq_portal_tree);

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(trail: &[&RouteItem]) -> Vec<String> {
        trail.iter().map(|item| item.label.clone()).collect()
    }

    fn crumb(path: &str, label: &str) -> Crumb {
        Crumb {
            path: path.to_string(),
            label: label.to_string(),
        }
    }

    #[test]
    fn resolves_nested_child() {
        let tree = hq_portal_tree();
        assert_eq!(
            tree.breadcrumbs("/menus/categories"),
            vec![
                crumb("/menus", "Menu Management"),
                crumb("/menus/categories", "Categories"),
            ]
        );
    }

    #[test]
    fn resolves_child_outside_parent_prefix() {
        let tree = hq_portal_tree();
        assert_eq!(
            tree.breadcrumbs("/operations/menu/button-styles"),
            vec![
                crumb("/menus", "Menu Management"),
                crumb("/operations/menu/button-styles", "Button Styles"),
            ]
        );
    }

    #[test]
    fn resolves_root_exactly() {
        let tree = hq_portal_tree();
        assert_eq!(
            tree.breadcrumbs("/organization-management"),
            vec![crumb("/organization-management", "Organization Management")]
        );
        assert_eq!(labels(&tree.resolve_trail("/")), vec!["Dashboard"]);
    }

    #[test]
    fn unknown_path_yields_empty_trail() {
        let tree = hq_portal_tree();
        assert!(tree.resolve_trail("/unknown/path").is_empty());
        assert!(tree.resolve_trail("").is_empty());
        assert!(tree.resolve_trail("/menusx").is_empty());
    }

    #[test]
    fn detail_page_below_leaf_falls_back_to_leaf() {
        let tree = hq_portal_tree();
        assert_eq!(
            labels(&tree.resolve_trail("/menus/items/42")),
            vec!["Menu Management", "Menu Items"]
        );
        assert_eq!(
            labels(&tree.resolve_trail("/operations/menu/button-styles/7/edit")),
            vec!["Menu Management", "Button Styles"]
        );
    }

    #[test]
    fn unmatched_child_under_prefix_stops_at_parent_miss() {
        let tree = hq_portal_tree();
        // "/menus" prefix-matches but nothing below it does.
        assert!(tree.resolve_trail("/menus/reports").is_empty());
    }

    #[test]
    fn children_of_section_in_order() {
        let tree = hq_portal_tree();
        let paths: Vec<&str> = tree.children("/menus").iter().map(|c| c.path.as_str()).collect();
        assert_eq!(
            paths,
            vec![
                "/menus/categories",
                "/menus/virtual-categories",
                "/menus/items",
                "/menus/modifiers",
                "/menus/promotions",
                "/menus/discounts",
                "/operations/menu/button-styles",
            ]
        );
    }

    #[test]
    fn children_of_leaf_or_unknown_is_empty() {
        let tree = hq_portal_tree();
        assert!(tree.children("/menus/categories").is_empty());
        assert!(tree.children("/organization-management").is_empty());
        assert!(tree.children("/nope").is_empty());
    }

    #[test]
    fn every_node_resolves_to_itself_through_ancestors() {
        let tree = hq_portal_tree();
        for node in tree.iter() {
            let trail = tree.resolve_trail(&node.path);
            let last = trail.last().expect("trail for a known node");
            assert_eq!(*last, node, "trail for {}", node.path);
            for pair in trail.windows(2) {
                assert!(
                    pair[0].children.contains(pair[1]),
                    "{} is not the parent of {}",
                    pair[0].path,
                    pair[1].path
                );
            }
            assert!(tree.roots().contains(trail[0]));
        }
    }

    #[test]
    fn children_lookup_matches_every_node() {
        let tree = hq_portal_tree();
        for node in tree.iter() {
            assert_eq!(tree.children(&node.path), node.children.as_slice());
        }
    }

    #[test]
    fn repeated_calls_are_identical() {
        let tree = hq_portal_tree();
        for path in ["/menus/items", "/operations/menu/button-styles", "/x"] {
            assert_eq!(tree.resolve_trail(path), tree.resolve_trail(path));
            assert_eq!(tree.children(path), tree.children(path));
        }
    }

    #[test]
    fn first_match_wins_among_siblings() {
        let tree = RouteTree::new(vec![
            RouteItem::new("/a", "A").with_children(vec![RouteItem::new("/shared", "Shared under A")]),
            RouteItem::new("/b", "B").with_children(vec![RouteItem::new("/shared", "Shared under B")]),
        ]);
        assert_eq!(labels(&tree.resolve_trail("/shared")), vec!["A", "Shared under A"]);
        assert_eq!(tree.children("/shared"), &[] as &[RouteItem]);
    }

    #[test]
    fn deeper_match_preferred_over_fallback() {
        let tree = RouteTree::new(vec![RouteItem::new("/reports", "Reports").with_children(vec![
            RouteItem::new("/reports/sales", "Sales").with_children(vec![
                RouteItem::new("/reports/sales/daily", "Daily"),
            ]),
        ])]);
        assert_eq!(
            labels(&tree.resolve_trail("/reports/sales/daily")),
            vec!["Reports", "Sales", "Daily"]
        );
        assert_eq!(
            labels(&tree.resolve_trail("/reports/sales/weekly")),
            vec!["Reports", "Sales"]
        );
    }

    #[test]
    fn direct_sibling_match_beats_child_fallback() {
        let tree = RouteTree::new(vec![
            RouteItem::new("/a", "A").with_children(vec![RouteItem::new("/x", "X under A")]),
            RouteItem::new("/x", "X root"),
        ]);
        assert_eq!(labels(&tree.resolve_trail("/x")), vec!["X root"]);

        let nested = RouteTree::new(vec![RouteItem::new("/s", "S").with_children(vec![
            RouteItem::new("/s/a", "SA").with_children(vec![RouteItem::new("/s/b", "SB under SA")]),
            RouteItem::new("/s/b", "SB"),
        ])]);
        assert_eq!(labels(&nested.resolve_trail("/s/b")), vec!["S", "SB"]);
    }

    #[test]
    fn fallback_is_one_level_only() {
        let tree = RouteTree::new(vec![RouteItem::new("/a", "A").with_children(vec![
            RouteItem::new("/b", "B").with_children(vec![RouteItem::new("/c", "C")]),
        ])]);
        assert_eq!(labels(&tree.resolve_trail("/b")), vec!["A", "B"]);
        assert!(tree.resolve_trail("/c").is_empty());
    }

    #[test]
    fn iter_is_preorder() {
        let tree = hq_portal_tree();
        let paths: Vec<&str> = tree.iter().take(4).map(|n| n.path.as_str()).collect();
        assert_eq!(paths, vec!["/", "/menus", "/menus/categories", "/menus/virtual-categories"]);
        assert_eq!(tree.iter().count(), 10);
    }

    #[test]
    fn serializes_leaves_without_children() {
        let value = serde_json::to_value(RouteItem::new("/x", "X")).unwrap();
        assert_eq!(value, serde_json::json!({ "path": "/x", "label": "X" }));
    }
}
