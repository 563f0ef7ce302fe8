//! Thin wrappers over the browser globals.
//!
//! Every accessor returns a [`DomError`] instead of panicking so pages can
//! degrade when a surface is missing. On non-wasm targets there is no
//! window and every accessor reports [`DomError::NoWindow`].

use chrono::NaiveDate;
use thiserror::Error;
use web_sys::{Document, Element, Storage, Window};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomError {
    #[error("`window` is unavailable")]
    NoWindow,
    #[error("`document` is unavailable")]
    NoDocument,
    #[error("element #{0} is missing")]
    MissingElement(String),
    #[error("JavaScript error: {0}")]
    Js(String),
}

/// Retrieve the global `window` object.
///
/// # Errors
///
/// Returns [`DomError::NoWindow`] outside a browser context.
pub fn window() -> Result<Window, DomError> {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window().ok_or(DomError::NoWindow)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Err(DomError::NoWindow)
    }
}

/// Retrieve the document object for DOM interactions.
///
/// # Errors
///
/// Returns an error when the window or its document is unavailable.
pub fn document() -> Result<Document, DomError> {
    window()?.document().ok_or(DomError::NoDocument)
}

/// Look up an element by id.
///
/// # Errors
///
/// Returns [`DomError::MissingElement`] when no element carries `id`.
pub fn element_by_id(id: &str) -> Result<Element, DomError> {
    document()?
        .get_element_by_id(id)
        .ok_or_else(|| DomError::MissingElement(id.to_string()))
}

/// Convert a JavaScript value into a readable string for error reporting.
#[cfg(target_arch = "wasm32")]
#[must_use]
pub fn js_error_message(value: &wasm_bindgen::JsValue) -> String {
    use wasm_bindgen::JsCast;
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Access the browser `localStorage` handle.
///
/// # Errors
///
/// Returns an error if the window cannot be accessed or `localStorage` is
/// disabled.
pub fn local_storage() -> Result<Storage, DomError> {
    #[cfg(target_arch = "wasm32")]
    {
        window()?
            .local_storage()
            .map_err(|err| DomError::Js(js_error_message(&err)))?
            .ok_or_else(|| DomError::Js("localStorage unavailable".to_string()))
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Err(DomError::NoWindow)
    }
}

/// Current query string including the leading `?`, or empty.
///
/// # Errors
///
/// Returns an error when the location cannot be read.
pub fn location_search() -> Result<String, DomError> {
    #[cfg(target_arch = "wasm32")]
    {
        window()?
            .location()
            .search()
            .map_err(|err| DomError::Js(js_error_message(&err)))
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Err(DomError::NoWindow)
    }
}

/// Full-page navigation. The current page's in-memory state is discarded.
///
/// # Errors
///
/// Returns an error when the browser rejects the new location.
pub fn navigate(href: &str) -> Result<(), DomError> {
    #[cfg(target_arch = "wasm32")]
    {
        window()?
            .location()
            .set_href(href)
            .map_err(|err| DomError::Js(js_error_message(&err)))
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = href;
        Err(DomError::NoWindow)
    }
}

/// Show a blocking notice. Falls back to a warning when no window exists.
pub fn alert(message: &str) {
    let shown = window().and_then(|win| {
        win.alert_with_message(message).map_err(|err| {
            #[cfg(target_arch = "wasm32")]
            {
                DomError::Js(js_error_message(&err))
            }
            #[cfg(not(target_arch = "wasm32"))]
            {
                let _ = err;
                DomError::NoWindow
            }
        })
    });
    if let Err(err) = shown {
        log::warn!("notice not shown ({err}): {message}");
    }
}

/// Today's local calendar date.
#[must_use]
pub fn today() -> NaiveDate {
    #[cfg(target_arch = "wasm32")]
    {
        let now = js_sys::Date::new_0();
        NaiveDate::from_ymd_opt(
            i32::try_from(now.get_full_year()).unwrap_or(1970),
            now.get_month() + 1,
            now.get_date(),
        )
        .unwrap_or_default()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let secs = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0, |elapsed| elapsed.as_secs());
        chrono::DateTime::from_timestamp(i64::try_from(secs).unwrap_or(0), 0)
            .map(|at| at.date_naive())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_has_no_window() {
        assert_eq!(window().unwrap_err(), DomError::NoWindow);
        assert_eq!(document().unwrap_err(), DomError::NoWindow);
        assert!(element_by_id("status-region").is_err());
        assert!(local_storage().is_err());
        assert!(navigate("/schedule").is_err());
    }

    #[test]
    fn alert_without_window_does_not_panic() {
        alert("Not enough space available for booking.");
    }

    #[test]
    fn today_is_after_epoch() {
        assert!(today() > NaiveDate::from_ymd_opt(2020, 1, 1).unwrap());
    }
}
