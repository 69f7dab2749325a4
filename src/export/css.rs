/// CSS variable export
///
/// Emits a `:root` block with one custom property per color (palette order)
/// followed by one class rule per typography entry. Values are emitted as
/// stored; the boundary validation on color names and hex codes is what keeps
/// this output well-formed.

use crate::brand::types::ProjectWithDetails;
use std::fmt::Write;

/// Lowercase a color name and collapse each whitespace run into one hyphen
///
/// "Primary Blue" -> "primary-blue", "X  Y" -> "x-y". Leading/trailing
/// whitespace also maps to a hyphen, matching the historical behavior.
fn css_variable_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut in_whitespace = false;
    for ch in name.to_lowercase().chars() {
        if ch.is_whitespace() {
            if !in_whitespace {
                out.push('-');
                in_whitespace = true;
            }
        } else {
            out.push(ch);
            in_whitespace = false;
        }
    }
    out
}

/// Render the CSS document for a project aggregate
pub fn render_css(project: &ProjectWithDetails) -> String {
    let mut css = String::new();

    css.push_str(":root {\n");
    for color in &project.colors {
        let _ = writeln!(css, "  --{}: {};", css_variable_name(&color.name), color.hex_code);
    }
    css.push_str("}\n\n");

    for typo in &project.typography {
        // Binary split: exactly "primary" gets the primary rule, everything
        // else (including "secondary", "", and unknown tags) is secondary.
        if typo.kind == "primary" {
            let _ = write!(
                css,
                ".font-primary {{\n  font-family: '{}', sans-serif;\n}}\n\n",
                typo.font_family
            );
        } else {
            let _ = write!(
                css,
                ".font-secondary {{\n  font-family: '{}', monospace;\n}}\n\n",
                typo.font_family
            );
        }
    }

    css
}
