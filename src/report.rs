//! Rendering a [`ParseOutput`] for people and for tools.

use crate::parser::ParseOutput;
use crate::vocabulary::Vocabulary;
use anyhow::Result;

/// Output formats understood by [`render`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Format {
    /// One canonical script line per command.
    #[default]
    Text,
    /// A JSON document with `commands` and `errors` arrays.
    Json,
}

/// Render the parsed commands in `format`.
pub fn render(out: &ParseOutput, format: Format) -> Result<String> {
    match format {
        Format::Text => Ok(render_text(out)),
        Format::Json => render_json(out),
    }
}

/// Commands in canonical form, one per line.
pub fn render_text(out: &ParseOutput) -> String {
    let mut text = String::new();
    for command in &out.commands {
        text.push_str(&command.to_string());
        text.push('\n');
    }
    text
}

pub fn render_json(out: &ParseOutput) -> Result<String> {
    Ok(serde_json::to_string_pretty(out)?)
}

/// Error reports, separated by blank lines, each ending in a newline.
pub fn render_errors(out: &ParseOutput) -> String {
    out.errors
        .iter()
        .map(|err| format!("{err}\n"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Keywords in match order with their parse mode, then the `set` options.
pub fn render_vocabulary(vocabulary: &Vocabulary) -> String {
    let mut text = String::from("keywords:\n");
    for (keyword, kind) in vocabulary.keywords() {
        text.push_str(&format!("  {keyword:<12} {kind:<10} {:?}\n", kind.mode()));
    }
    text.push_str("set options:\n");
    for option in vocabulary.options() {
        text.push_str(&format!("  {option}\n"));
    }
    text
}
