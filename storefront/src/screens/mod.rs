//! Screen controllers
//!
//! Each screen owns its own [`FilterCriteria`](crate::filter::FilterCriteria)
//! and borrows the shared [`Catalog`](crate::catalog::Catalog). Nothing is
//! shared between screens; results are recomputed on every call.

pub mod boutique_detail;
pub mod explore;
pub mod favorites;
pub mod home;
pub mod mall_detail;
pub mod search;
pub mod selection;

pub use boutique_detail::BoutiqueDetailScreen;
pub use explore::ExploreScreen;
pub use favorites::FavoritesScreen;
pub use home::{HomeScreen, SearchRequest};
pub use mall_detail::MallDetailScreen;
pub use search::{SearchParams, SearchResults, SearchScreen};
pub use selection::{CategoryChip, FavoritesTab, ResultState, SearchTab, category_chips};
