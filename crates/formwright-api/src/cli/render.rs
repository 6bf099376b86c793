//! `fwright render` -- extract and render a schema document offline.

use anyhow::Context;
use clap::ValueEnum;
use tokio::io::AsyncReadExt;

use formwright_core::render::html::to_html;
use formwright_core::render::render;
use formwright_core::schema::extract_schema;

use super::form_view::format_state;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RenderFormat {
    /// Styled terminal view.
    Text,
    /// HTML fragment.
    Html,
    /// Normalized schema JSON.
    Json,
}

/// Read `input` (a path, or `-` for stdin) and print it rendered.
///
/// Fails when the text is not a form schema, so the process exits non-zero.
pub async fn run_render(input: &str, format: RenderFormat) -> anyhow::Result<()> {
    let text = if input == "-" {
        let mut buf = String::new();
        tokio::io::stdin()
            .read_to_string(&mut buf)
            .await
            .context("failed to read stdin")?;
        buf
    } else {
        tokio::fs::read_to_string(input)
            .await
            .with_context(|| format!("failed to read {input}"))?
    };

    println!("{}", render_document(&text, format)?);
    Ok(())
}

/// Render assistant text in the requested format.
pub fn render_document(text: &str, format: RenderFormat) -> anyhow::Result<String> {
    let schema =
        extract_schema(text).map_err(|reason| anyhow::anyhow!("not a form schema: {reason}"))?;

    let output = match format {
        RenderFormat::Text => format_state(&render(Some(&schema), false)),
        RenderFormat::Html => to_html(&render(Some(&schema), false)),
        RenderFormat::Json => serde_json::to_string_pretty(&schema)?,
    };
    Ok(output)
}
