// ABOUTME: Page templating for the m2s application
// ABOUTME: Compiles the page skeleton with Tera and renders page data into it

use crate::errors::Result;
use crate::page::{Page, PageTemplate};
use tera::{Context, Tera};

/// Name the skeleton is registered under. The `.html` suffix turns on Tera's
/// autoescaping, so `{{ value }}` is escaped and `{{ value | safe }}` is not.
const PAGE_TEMPLATE_NAME: &str = "page.html";

/// A compiled page skeleton
pub struct TeraTemplate {
    tera: Tera,
}

impl TeraTemplate {
    /// Parse `source`; syntax errors surface here, before any rendering.
    pub fn compile(source: &str) -> Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_template(PAGE_TEMPLATE_NAME, source)?;
        Ok(Self { tera })
    }

    /// Render against an arbitrary context. Undefined variables are errors.
    pub fn render_context(&self, context: &Context) -> Result<String> {
        Ok(self.tera.render(PAGE_TEMPLATE_NAME, context)?)
    }
}

impl PageTemplate for TeraTemplate {
    fn render(&self, page: &Page) -> Result<String> {
        let context = Context::from_serialize(page)?;
        self.render_context(&context)
    }
}
