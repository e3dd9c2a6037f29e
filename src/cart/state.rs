//! Shopping Cart State Management
//!
//! This module manages the application state: one cart per session plus
//! the location of the HTML pages and the public site URL.

use super::models::{Cart, CartError, Receipt};
use crate::config::Config;
use crate::error::{AppError, Result};
use dashmap::DashMap;
use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

// =============================================================================
// Application State
// =============================================================================

/// Shared application state that can be safely passed between threads
pub type SharedState = Arc<AppState>;

/// Core application state containing carts and asset information
pub struct AppState {
    /// In-memory storage for carts, keyed by cart_id.
    /// DashMap allows concurrent access without external Mutexes.
    pub carts: DashMap<String, Cart>,

    /// Path to the directory containing HTML assets.
    pub assets_dir: PathBuf,

    /// Public origin of the site, without trailing slash.
    pub site_url: String,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Creates a new AppState with empty carts, the default site URL and
    /// an auto-located assets directory
    pub fn new() -> Self {
        let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        let assets_dir = Self::locate_assets_directory(&current_dir);

        Self::with_settings(assets_dir, crate::config::DEFAULT_SITE_URL)
    }

    pub fn from_config(config: &Config) -> Self {
        let assets_dir = match &config.assets_dir {
            Some(dir) => dir.clone(),
            None => {
                let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
                Self::locate_assets_directory(&current_dir)
            }
        };

        Self::with_settings(assets_dir, &config.site_url)
    }

    pub fn with_settings(assets_dir: PathBuf, site_url: &str) -> Self {
        tracing::info!("Using assets directory: {:?}", assets_dir);

        Self {
            carts: DashMap::new(),
            assets_dir,
            site_url: site_url.trim_end_matches('/').to_string(),
        }
    }

    /// Absolute URL of the menu page, the payload of the menu QR code
    pub fn menu_url(&self) -> String {
        format!("{}/menu", self.site_url)
    }

    /// Runs `f` against the cart for `cart_id`, creating it when missing.
    pub fn with_cart<R>(&self, cart_id: &str, f: impl FnOnce(&mut Cart) -> R) -> R {
        let mut cart = self.carts.entry(cart_id.to_string()).or_default();
        f(&mut cart)
    }

    /// Runs `f` against the cart for `cart_id` without creating one.
    ///
    /// Unknown ids see a detached empty cart, and a cart left empty by `f`
    /// is dropped from the store.
    pub fn update_cart<R>(&self, cart_id: &str, f: impl FnOnce(&mut Cart) -> R) -> R {
        let result = match self.carts.get_mut(cart_id) {
            Some(mut cart) => f(&mut cart),
            None => return f(&mut Cart::new()),
        };

        self.carts.remove_if(cart_id, |_, cart| cart.is_empty());
        result
    }

    /// Stores `cart` under `cart_id`, or forgets the id when `cart` is empty.
    pub fn replace_cart(&self, cart_id: &str, cart: Cart) {
        if cart.is_empty() {
            self.carts.remove(cart_id);
        } else {
            self.carts.insert(cart_id.to_string(), cart);
        }
    }

    /// Copy of the cart for `cart_id`; unknown ids read as empty.
    pub fn snapshot(&self, cart_id: &str) -> Cart {
        self.carts
            .get(cart_id)
            .map(|cart| cart.clone())
            .unwrap_or_default()
    }

    /// Checks out the cart for `cart_id` and forgets it on success.
    pub fn checkout(
        &self,
        cart_id: &str,
        notes: Option<String>,
    ) -> std::result::Result<Receipt, CartError> {
        let receipt = match self.carts.get_mut(cart_id) {
            Some(mut cart) => cart.checkout(notes)?,
            None => return Err(CartError::Empty),
        };

        self.carts.remove_if(cart_id, |_, cart| cart.is_empty());
        Ok(receipt)
    }

    /// Attempts to locate the assets directory using a multi-step strategy
    fn locate_assets_directory(current_dir: &Path) -> PathBuf {
        // 1. ./assets
        // 2. ../assets (if running from a subdir)
        // 3. Fallback to "assets" relative path

        if current_dir.join("assets").exists() {
            return current_dir.join("assets");
        }

        if let Some(parent) = current_dir.parent() {
            if parent.join("assets").exists() {
                return parent.join("assets");
            }
        }

        PathBuf::from("assets")
    }

    /// Reads `<page>.html` from the assets directory
    pub async fn load_page_html(&self, page: &str) -> Result<String> {
        let path = self.assets_dir.join(format!("{}.html", page));
        if !path.is_file() {
            return Err(AppError::PageNotFound(page.to_string()));
        }

        Ok(tokio::fs::read_to_string(path).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::find_item;

    fn state() -> AppState {
        AppState::with_settings(PathBuf::from("assets"), "https://edens.example/")
    }

    #[test]
    fn test_menu_url_strips_trailing_slash() {
        assert_eq!(state().menu_url(), "https://edens.example/menu");
    }

    #[test]
    fn test_carts_are_isolated() {
        let state = state();
        let squid = find_item("starter-1").unwrap();
        let mimosa = find_item("drink-4").unwrap();

        state.with_cart("one", |cart| cart.add(squid));
        state.with_cart("two", |cart| cart.add(mimosa));

        assert_eq!(state.snapshot("one").total(), 850);
        assert_eq!(state.snapshot("two").total(), 550);
        assert!(state.snapshot("three").is_empty());
    }

    #[test]
    fn test_checkout_forgets_cart() {
        let state = state();
        let squid = find_item("starter-1").unwrap();
        state.with_cart("one", |cart| cart.add(squid));

        let receipt = state.checkout("one", None).unwrap();
        assert_eq!(receipt.total, 850);
        assert!(!state.carts.contains_key("one"));
        assert_eq!(state.checkout("one", None), Err(CartError::Empty));
    }

    #[test]
    fn test_update_unknown_cart_is_not_stored() {
        let state = state();
        let count = state.update_cart("ghost", |cart| {
            cart.remove("starter-1");
            cart.item_count()
        });

        assert_eq!(count, 0);
        assert!(state.carts.is_empty());
    }

    #[test]
    fn test_emptied_cart_is_dropped() {
        let state = state();
        let squid = find_item("starter-1").unwrap();
        state.with_cart("one", |cart| cart.add(squid));

        state.update_cart("one", |cart| cart.set_quantity("starter-1", 0));
        assert!(!state.carts.contains_key("one"));
    }

    #[test]
    fn test_replace_with_empty_cart_forgets_id() {
        let state = state();
        let squid = find_item("starter-1").unwrap();
        state.with_cart("one", |cart| cart.add(squid));

        state.replace_cart("one", Cart::new());
        assert!(!state.carts.contains_key("one"));
    }

    #[tokio::test]
    async fn test_missing_page_is_not_found() {
        let state = AppState::with_settings(PathBuf::from("does-not-exist"), "http://x");
        let err = state.load_page_html("index").await.unwrap_err();
        assert!(matches!(err, AppError::PageNotFound(_)));
    }

    #[tokio::test]
    async fn test_only_exact_page_name_is_served() {
        let state = state();
        assert!(state.load_page_html("menu").await.is_ok());

        let err = state.load_page_html("men").await.unwrap_err();
        assert!(matches!(err, AppError::PageNotFound(page) if page == "men"));
    }
}
