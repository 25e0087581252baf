//! `styles` command handler.

use std::fmt::Write as _;
use storyloom_core::StoryloomConfig;
use storyloom_narrative::DEFAULT_STYLE_PROMPT;

/// Render the catalog listing.
pub fn format_styles(config: &StoryloomConfig) -> String {
    let styles = config.art_styles();
    let mut out = String::from("Genres:\n");
    if styles.genres().is_empty() {
        out.push_str("  (none)\n");
    }
    for (genre, entries) in styles.genres().iter() {
        let _ = writeln!(out, "  {genre}");
        for entry in entries {
            let _ = writeln!(out, "    - {entry}");
        }
    }

    out.push_str("Custom styles:\n");
    if styles.custom_styles().is_empty() {
        out.push_str("  (none)\n");
    }
    for (name, style) in styles.custom_styles().iter() {
        let _ = writeln!(out, "  {name}: {style}");
    }

    let _ = writeln!(out, "Default style: {DEFAULT_STYLE_PROMPT}");
    out
}

/// Handle the `styles` command
pub fn handle_styles(config: &StoryloomConfig) {
    print!("{}", format_styles(config));
}
