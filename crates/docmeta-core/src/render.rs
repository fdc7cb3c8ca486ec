//! Serialized forms of a resolved page for downstream page logic.

use anyhow::{bail, Result};
use serde::Serialize;

use crate::meta::PageMetadata;
use crate::resolver::ResolvedPage;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PageOutput<'a> {
    doc_meta: &'a PageMetadata,
    page_id: &'a str,
}

/// `{"docMeta": {...}, "pageId": "..."}`, pretty-printed.
pub fn to_json(page: &ResolvedPage) -> Result<String> {
    let out = PageOutput {
        doc_meta: &page.meta,
        page_id: &page.page_id,
    };
    Ok(serde_json::to_string_pretty(&out)?)
}

/// Script assigning `window.docMeta` and `window.<page_id_variable>`.
///
/// Safe to inline in a `<script>` element: `<` never appears literally.
pub fn to_script(page: &ResolvedPage, page_id_variable: &str) -> Result<String> {
    if !is_js_identifier(page_id_variable) {
        bail!("`{page_id_variable}` is not a valid JavaScript identifier");
    }
    let meta = escape_for_script(&serde_json::to_string_pretty(&page.meta)?);
    let page_id = escape_for_script(&serde_json::to_string(&page.page_id)?);
    Ok(format!(
        "window.docMeta = {meta};\nwindow.{page_id_variable} = {page_id};\n"
    ))
}

/// `<` only occurs inside JSON string literals, where `\u003c` decodes to the same text.
fn escape_for_script(json: &str) -> String {
    json.replace('<', "\\u003c")
}

pub(crate) fn is_js_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}
