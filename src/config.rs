pub const SITE_NAME: &str = "Basel Dynamics Tech Solutions";
pub const THEME_STORAGE_KEY: &str = "theme";
pub const LOADER_DURATION_MS: u32 = 2000;

const DEFAULT_FORMS_ACCESS_KEY: &str = "da3d0f25-8051-46a6-9645-b7442c0c75a1";
const FORMS_RELAY_URL: &str = "https://api.web3forms.com/submit";

#[cfg(debug_assertions)]
pub fn get_forms_endpoint() -> &'static str {
    // Point local builds at a mock relay with FORMS_ENDPOINT=http://localhost:8787/submit
    option_env!("FORMS_ENDPOINT").unwrap_or(FORMS_RELAY_URL)
}

#[cfg(not(debug_assertions))]
pub fn get_forms_endpoint() -> &'static str {
    FORMS_RELAY_URL
}

pub fn get_forms_access_key() -> &'static str {
    option_env!("FORMS_ACCESS_KEY").unwrap_or(DEFAULT_FORMS_ACCESS_KEY)
}

/// Formats a browser tab title, e.g. `Blog | Basel Dynamics Tech Solutions`.
pub fn page_title(page: &str) -> String {
    format!("{} | {}", page, SITE_NAME)
}

pub fn set_document_title(page: &str) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        document.set_title(&page_title(page));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_title_appends_site_name() {
        assert_eq!(page_title("Blog"), "Blog | Basel Dynamics Tech Solutions");
    }

    #[test]
    fn forms_access_key_is_never_empty() {
        assert!(!get_forms_access_key().is_empty());
    }
}
