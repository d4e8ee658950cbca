use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use web_sys::window;

/// Top-level screens of the client
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    #[default]
    Storefront,
    Login,
    Register,
    Admin,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct PageQuery {
    #[serde(default)]
    page: Page,
}

/// Page named by a `?page=...` query string; unknown values fall back to the storefront
pub fn page_from_query(search: &str) -> Page {
    serde_qs::from_str::<PageQuery>(search.trim_start_matches('?'))
        .map(|q| q.page)
        .unwrap_or_default()
}

/// Query string that reopens `page` after a reload
pub fn query_for_page(page: Page) -> String {
    let query = serde_qs::to_string(&PageQuery { page }).unwrap_or_default();
    format!("?{}", query)
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub page: RwSignal<Page>,
    /// Bumped whenever stock may have changed so product views refetch
    pub catalog_version: RwSignal<u32>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            page: RwSignal::new(Page::default()),
            catalog_version: RwSignal::new(0),
        }
    }

    pub fn navigate(&self, page: Page) {
        if self.page.get_untracked() != page {
            log::debug!("navigate: {:?}", page);
            self.page.set(page);
        }
    }

    pub fn refresh_catalog(&self) {
        self.catalog_version.update(|v| *v = v.wrapping_add(1));
    }

    /// Restore the page from the address bar and keep the two in sync
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        self.page.set(page_from_query(&search));

        let this = *self;
        Effect::new(move |_| {
            let new_url = query_for_page(this.page.get());
            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_from_query() {
        assert_eq!(page_from_query("?page=admin"), Page::Admin);
        assert_eq!(page_from_query("page=login"), Page::Login);
        assert_eq!(page_from_query(""), Page::Storefront);
        assert_eq!(page_from_query("?page=nowhere"), Page::Storefront);
    }

    #[test]
    fn test_query_round_trips_through_address_bar() {
        for page in [Page::Storefront, Page::Login, Page::Register, Page::Admin] {
            assert_eq!(page_from_query(&query_for_page(page)), page);
        }
    }
}
