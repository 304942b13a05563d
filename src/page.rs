//! Page assembly into the shared layout template

use crate::template::{self, Template};
use anyhow::Result;
use chrono::Utc;
use log::{debug, warn};
use std::path::Path;

/// Layout template shared by every page
pub const LAYOUT_TEMPLATE: &str = "template.html";

/// One page of the site
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSpec {
    /// File name written to the output folder
    pub output: &'static str,
    pub title: &'static str,
    /// Extra `<script>` markup for the page head
    pub scripts: &'static str,
    /// Content page the layout loads
    pub content: &'static str,
}

/// Generation time, e.g. `Mon Oct 19 18:45:00 2026 UTC`
pub fn timestamp() -> String {
    format!("{} UTC", Utc::now().format("%c"))
}

/// Substitute the page fields and `date` into the layout
pub fn render(layout: Template, page: &PageSpec, date: &str) -> Template {
    layout
        .replace(template::TITLE, page.title)
        .replace(template::SCRIPTS, page.scripts)
        .replace(template::CONTENT, page.content)
        .replace(template::DATE, date)
}

/// Render `page` from the layout in `site` and write it into `out`
pub fn assemble(site: &Path, out: &Path, page: &PageSpec) -> Result<()> {
    let template_path = site.join(LAYOUT_TEMPLATE);
    debug!(
        "Creating page {} by template {} title={:?} scripts={:?} content={:?}",
        page.output,
        template_path.display(),
        page.title,
        page.scripts,
        page.content
    );

    let layout = Template::load(&template_path)?;
    let rendered = render(layout, page, &timestamp());
    let unresolved = rendered.unresolved();
    if !unresolved.is_empty() {
        warn!("Page {} still contains {}", page.output, unresolved.join(", "));
    }
    rendered.write(&out.join(page.output))
}
