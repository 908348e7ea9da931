//! Copy-to-clipboard for code windows.
//!
//! Uses `navigator.clipboard.writeText` when the page is allowed to, and falls
//! back to a hidden `<textarea>` plus `document.execCommand("copy")`
//! otherwise.

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, HtmlDocument, HtmlTextAreaElement};

const HIDDEN_TEXTAREA_STYLE: &str = "position: fixed; top: 0; left: 0; opacity: 0;";

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("no browser window")]
    NoWindow,
    #[error("async clipboard API is unavailable")]
    Unavailable,
    #[error("clipboard write rejected: {0}")]
    Rejected(String),
    #[error("legacy copy failed: {0}")]
    Legacy(String),
}

/// Which mechanism ended up writing the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyMethod {
    Clipboard,
    Legacy,
}

/// Exactly what lands on the clipboard for a given code block.
pub fn copy_payload(code: &str) -> &str {
    code.trim()
}

/// Lines rendered in a code window.
pub fn display_lines(code: &str) -> Vec<&str> {
    code.trim_end().split('\n').collect()
}

/// Copy the trimmed `code`, trying the async clipboard first.
pub async fn copy_text(code: &str) -> Result<CopyMethod, ClipboardError> {
    let payload = copy_payload(code);
    match write_clipboard(payload).await {
        Ok(()) => Ok(CopyMethod::Clipboard),
        Err(err) => {
            tracing::debug!(%err, "falling back to execCommand copy");
            legacy_copy(payload)?;
            Ok(CopyMethod::Legacy)
        }
    }
}

async fn write_clipboard(text: &str) -> Result<(), ClipboardError> {
    let window = web_sys::window().ok_or(ClipboardError::NoWindow)?;
    let clipboard = window.navigator().clipboard();
    if clipboard.is_undefined() || clipboard.is_null() {
        return Err(ClipboardError::Unavailable);
    }

    JsFuture::from(clipboard.write_text(text))
        .await
        .map(|_| ())
        .map_err(|err| ClipboardError::Rejected(describe(&err)))
}

/// Select a throwaway textarea holding `text` and run the copy command.
pub fn legacy_copy(text: &str) -> Result<(), ClipboardError> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or(ClipboardError::NoWindow)?;
    let body = document
        .body()
        .ok_or_else(|| ClipboardError::Legacy("document has no body".into()))?;

    let textarea: HtmlTextAreaElement = document
        .create_element("textarea")
        .map_err(|err| ClipboardError::Legacy(describe(&err)))?
        .dyn_into()
        .map_err(|_| ClipboardError::Legacy("created element is not a textarea".into()))?;
    textarea.set_value(text);
    textarea
        .set_attribute("style", HIDDEN_TEXTAREA_STYLE)
        .map_err(|err| ClipboardError::Legacy(describe(&err)))?;

    body.append_child(&textarea)
        .map_err(|err| ClipboardError::Legacy(describe(&err)))?;
    textarea.select();
    let copied = exec_copy(&document);
    textarea.remove();

    if copied? {
        Ok(())
    } else {
        Err(ClipboardError::Legacy("copy command was not executed".into()))
    }
}

fn exec_copy(document: &Document) -> Result<bool, ClipboardError> {
    document
        .dyn_ref::<HtmlDocument>()
        .ok_or_else(|| ClipboardError::Legacy("not an HTML document".into()))?
        .exec_command("copy")
        .map_err(|err| ClipboardError::Legacy(describe(&err)))
}

fn describe(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| String::from(err.message()))
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn payload_is_trimmed() {
        assert_eq!(copy_payload("hello\n  "), "hello");
        assert_eq!(copy_payload("\n\tpip install ollabridge\n"), "pip install ollabridge");
    }

    #[test]
    fn payload_keeps_inner_whitespace() {
        let code = "ollabridge-node join \\\n  --token abc\n";
        assert_eq!(copy_payload(code), "ollabridge-node join \\\n  --token abc");
    }

    #[test]
    fn display_drops_trailing_blank_lines() {
        assert_eq!(
            display_lines("ollabridge start\n\n# online\n   \n"),
            vec!["ollabridge start", "", "# online"]
        );
    }

    #[test]
    fn display_keeps_leading_indent() {
        assert_eq!(display_lines("  a\n    b"), vec!["  a", "    b"]);
    }

    #[test]
    fn errors_render_readably() {
        let err = ClipboardError::Rejected("NotAllowedError".into());
        assert_eq!(err.to_string(), "clipboard write rejected: NotAllowedError");
    }
}
