//! Placeholder rendering for release names
//!
//! Supports `{{ tag }}` and `{{ project_name }}`. Unknown placeholders are
//! left untouched so template typos stay visible in the rendered name.

use crate::core::context::Context;
use regex::{Captures, Regex};
use std::sync::OnceLock;

/// Default release name template, rendering to the current tag
pub const DEFAULT_NAME_TEMPLATE: &str = "{{ tag }}";

fn placeholder() -> &'static Regex {
  static PLACEHOLDER: OnceLock<Regex> = OnceLock::new();
  PLACEHOLDER.get_or_init(|| Regex::new(r"\{\{\s*([a-z_]+)\s*\}\}").expect("valid placeholder pattern"))
}

/// Render a name template against the context
pub fn render(template: &str, ctx: &Context) -> String {
  placeholder()
    .replace_all(template, |caps: &Captures<'_>| match &caps[1] {
      "tag" => ctx.current_tag.clone(),
      "project_name" => ctx.config.project_name.clone(),
      _ => caps[0].to_string(),
    })
    .into_owned()
}
