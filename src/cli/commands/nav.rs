use clap::Subcommand;
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::navigation::{self, Crumb, RouteItem, RouteTree};

#[derive(Subcommand)]
pub enum NavCommands {
    #[command(about = "Print the whole route tree")]
    Tree,

    #[command(about = "List the entries of a section menu")]
    Children {
        #[arg(help = "Section path, e.g. /menus")]
        section: String,
    },

    #[command(about = "Resolve the breadcrumb trail for a path")]
    Trail {
        #[arg(help = "Current path, e.g. /menus/categories")]
        path: String,
    },

    #[command(about = "Validate the route tree")]
    Check,
}

pub fn handle(cmd: NavCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    let routes = navigation::routes();

    match cmd {
        NavCommands::Tree => emit(output_format, routes, || render_tree(routes)),
        NavCommands::Children { section } => {
            let children = routes.children(&section);
            emit(output_format, &children, || render_entries(children))
        }
        NavCommands::Trail { path } => {
            let trail = routes.breadcrumbs(&path);
            emit(output_format, &trail, || render_trail(&trail))
        }
        NavCommands::Check => match routes.validate() {
            Ok(()) => emit(output_format, &serde_json::json!({ "valid": true }), || {
                "route tree OK\n".to_string()
            }),
            Err(problems) => {
                let messages: Vec<String> = problems.iter().map(ToString::to_string).collect();
                emit(
                    output_format,
                    &serde_json::json!({ "valid": false, "problems": messages }),
                    || messages.iter().map(|m| format!("{}\n", m)).collect(),
                )?;
                anyhow::bail!("route tree has {} problem(s)", problems.len())
            }
        },
    }
}

fn emit<T: Serialize + ?Sized>(
    output_format: OutputFormat,
    value: &T,
    text: impl FnOnce() -> String,
) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
        OutputFormat::Text => print!("{}", text()),
    }
    Ok(())
}

fn render_tree(tree: &RouteTree) -> String {
    fn walk(items: &[RouteItem], depth: usize, out: &mut String) {
        for item in items {
            out.push_str(&format!("{}{}  {}\n", "  ".repeat(depth), item.label, item.path));
            walk(&item.children, depth + 1, out);
        }
    }

    let mut out = String::new();
    walk(tree.roots(), 0, &mut out);
    out
}

fn render_entries(items: &[RouteItem]) -> String {
    items
        .iter()
        .map(|item| format!("{}\t{}\n", item.path, item.label))
        .collect()
}

fn render_trail(trail: &[Crumb]) -> String {
    if trail.is_empty() {
        return String::new();
    }
    let labels: Vec<&str> = trail.iter().map(|c| c.label.as_str()).collect();
    format!("{}\n", labels.join(" > "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::hq_portal_tree;

    #[test]
    fn renders_trail_as_label_chain() {
        let tree = hq_portal_tree();
        assert_eq!(
            render_trail(&tree.breadcrumbs("/menus/categories")),
            "Menu Management > Categories\n"
        );
        assert_eq!(render_trail(&tree.breadcrumbs("/nowhere")), "");
    }

    #[test]
    fn renders_tree_indented() {
        let out = render_tree(&hq_portal_tree());
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "Dashboard  /");
        assert_eq!(lines[1], "Menu Management  /menus");
        assert_eq!(lines[2], "  Categories  /menus/categories");
        assert_eq!(lines.last().copied(), Some("Organization Management  /organization-management"));
    }

    #[test]
    fn renders_section_entries() {
        let tree = hq_portal_tree();
        let out = render_entries(tree.children("/menus"));
        assert_eq!(out.lines().count(), 7);
        assert!(out.starts_with("/menus/categories\tCategories\n"));
    }
}
