//! User and seller actions
//!
//! The storefront has no backend: favorites, sharing, logout and the seller
//! dashboard are placeholders. Calling a boutique and opening its social
//! profile resolve to a URL for the platform to open.

use serde::{Deserialize, Serialize};
use shared::models::Boutique;

/// What the presentation layer should do after an action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ActionOutcome {
    /// Hand the URL to the platform (dialer, browser)
    OpenUrl { url: String },
    /// Show an informational alert; nothing happened
    Placeholder { message: String },
}

impl ActionOutcome {
    fn placeholder(message: impl Into<String>) -> Self {
        Self::Placeholder {
            message: message.into(),
        }
    }
}

/// Actions reachable from the boutique detail and profile screens
pub trait StorefrontActions {
    fn toggle_favorite(&mut self, boutique: &Boutique) -> ActionOutcome;
    fn call_seller(&self, boutique: &Boutique) -> ActionOutcome;
    fn open_social(&self, boutique: &Boutique) -> ActionOutcome;
    fn share(&self, boutique: &Boutique) -> ActionOutcome;
    fn logout(&mut self) -> ActionOutcome;
    fn seller_dashboard(&self) -> ActionOutcome;
}

/// Default implementation with no persisted effect
#[derive(Debug, Clone, Default)]
pub struct PlaceholderActions;

impl StorefrontActions for PlaceholderActions {
    fn toggle_favorite(&mut self, boutique: &Boutique) -> ActionOutcome {
        tracing::info!(boutique_id = boutique.id, "favorite toggled (not persisted)");
        ActionOutcome::placeholder("Favorites are not saved yet")
    }

    fn call_seller(&self, boutique: &Boutique) -> ActionOutcome {
        tracing::info!(boutique_id = boutique.id, "calling seller");
        let number: String = boutique
            .contact_number
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '+')
            .collect();
        ActionOutcome::OpenUrl {
            url: format!("tel:{}", number),
        }
    }

    fn open_social(&self, boutique: &Boutique) -> ActionOutcome {
        tracing::info!(boutique_id = boutique.id, "opening social profile");
        let handle = boutique.instagram.trim().trim_start_matches('@');
        ActionOutcome::OpenUrl {
            url: format!("https://instagram.com/{}", handle),
        }
    }

    fn share(&self, boutique: &Boutique) -> ActionOutcome {
        tracing::info!(boutique_id = boutique.id, "share requested");
        ActionOutcome::placeholder("Share functionality would be implemented here")
    }

    fn logout(&mut self) -> ActionOutcome {
        tracing::info!("logout requested");
        ActionOutcome::placeholder("Logout functionality would be implemented here")
    }

    fn seller_dashboard(&self) -> ActionOutcome {
        tracing::info!("seller dashboard requested");
        ActionOutcome::placeholder("Seller dashboard would open here")
    }
}
