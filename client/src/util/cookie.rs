//! Profile cookie access from the browser.
//!
//! Reads `document.cookie` in the browser. SSR has no document and always
//! reports the record as absent.

#[cfg(test)]
#[path = "cookie_test.rs"]
mod cookie_test;

use gate::ProfileSource;
use gate::profile::cookie_value;

#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentCookieSource;

impl ProfileSource for DocumentCookieSource {
    fn profile_record(&self, name: &str) -> Option<String> {
        cookie_value(&document_cookie()?, name)
    }
}

fn document_cookie() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let document = web_sys::window()?.document()?;
        document.dyn_into::<web_sys::HtmlDocument>().ok()?.cookie().ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
