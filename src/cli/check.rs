//! `timedial check`: validate a menu file without starting the interface

use std::path::Path;

use crate::core::config::Config;
use crate::error::Result;
use crate::menu::{builtin_providers, load_menu, EntryKind, MenuSet};

/// Load the menu at `menu_path` and print its tree
pub fn handle_check(menu_path: &Path, config: &Config) -> Result<()> {
    let providers = builtin_providers(config);
    let menu = load_menu(menu_path, &providers)?;
    for line in tree_lines(&menu) {
        println!("{}", line);
    }
    println!();
    println!("{} is valid.", menu_path.display());
    Ok(())
}

/// One line per entry, indented by depth
pub fn tree_lines(menu: &MenuSet) -> Vec<String> {
    let mut lines = Vec::new();
    push_lines(menu, 0, &mut lines);
    lines
}

fn push_lines(menu: &MenuSet, depth: usize, lines: &mut Vec<String>) {
    let indent = "  ".repeat(depth);
    for entry in menu {
        match entry.kind() {
            EntryKind::Group(children) => {
                lines.push(format!("{}{}/", indent, entry.name()));
                push_lines(children, depth + 1, lines);
            }
            EntryKind::Command(command) => {
                lines.push(format!(
                    "{}{}  -> {}",
                    indent,
                    entry.name(),
                    command.argv().join(" ")
                ));
            }
            EntryKind::Dynamic(id) => {
                lines.push(format!("{}{}  [{}]", indent, entry.name(), id));
            }
        }
    }
}
