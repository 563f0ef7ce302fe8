// Accessibility helpers

/// Id of the polite live region that mirrors blocking notices.
pub const STATUS_REGION_ID: &str = "status-region";

/// Critical focus-ring and screen-reader CSS, injected with the page shell.
#[must_use]
pub const fn visible_focus_css() -> &'static str {
    ":focus{outline:3px solid #1565C0;outline-offset:2px} .sr-only{position:absolute;width:1px;height:1px;margin:-1px;overflow:hidden;clip:rect(0 0 0 0);white-space:nowrap;}"
}

/// Announce a message through the live region.
///
/// A missing region is logged and otherwise ignored.
pub fn announce(msg: &str) {
    match crate::dom::element_by_id(STATUS_REGION_ID) {
        Ok(node) => node.set_text_content(Some(msg)),
        Err(err) => log::warn!("status not announced: {err}"),
    }
}
