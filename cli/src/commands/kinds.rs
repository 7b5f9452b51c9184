use colored::*;

use crate::terminal::{colors, print};
use solid_common::config::Config;
use solid_core::registry::{ShapeKind, ShapeRegistry};

pub fn kinds(cfg: &Config) -> anyhow::Result<()> {
    let registry: ShapeRegistry = ShapeRegistry::with_builtin();
    let kinds: Vec<ShapeKind<'_>> = registry.kinds();

    print::header("shape kinds", cfg.quiet);
    let names: Vec<&str> = kinds.iter().map(|k| k.name).collect();
    print::set_key_width(&names);

    for kind in &kinds {
        let mut value: String = match kind.arity {
            0 => "no dimensions".to_string(),
            _ => kind.labels.join(" x "),
        };
        if !kind.aliases.is_empty() {
            value.push_str(&format!(", alias {}", kind.aliases.join(", ")));
        }
        print::aligned_line(kind.name, value.color(colors::ACCENT));
    }
    Ok(())
}
