//! Storefront Directory - 商场 / 店铺 / 商品目录
//!
//! # 架构概述
//!
//! A read-only catalog of malls, boutiques and products, browsed through
//! per-screen filter criteria. No server, no persistence, no accounts.
//!
//! - **目录** (`catalog`): frozen dataset snapshot and point lookups
//! - **过滤** (`filter`): pure, order-preserving catalog filter
//! - **页面** (`screens`): explore / mall detail / boutique detail / search / home / favorites
//! - **操作** (`actions`): placeholder seller and user actions
//!
//! # 模块结构
//!
//! ```text
//! storefront/src/
//! ├── core/          # 配置、状态
//! ├── catalog/       # 数据加载与查找
//! ├── filter/        # 过滤条件与匹配
//! ├── screens/       # 各页面控制器
//! ├── actions.rs     # 占位操作
//! └── utils/         # 日志
//! ```
//!
//! # Example
//!
//! ```
//! use storefront::{Catalog, ExploreScreen};
//!
//! let catalog = Catalog::bundled().unwrap();
//! let mut explore = ExploreScreen::new(&catalog);
//! explore.select_category(3);
//! assert!(explore.malls().iter().all(|m| m.categories.contains(&3)));
//! ```

pub mod actions;
pub mod catalog;
pub mod core;
pub mod filter;
pub mod screens;
pub mod utils;

// Re-export 公共类型
pub use actions::{ActionOutcome, PlaceholderActions, StorefrontActions};
pub use catalog::{Catalog, CatalogData};
pub use core::{Config, StorefrontState};
pub use filter::{CategoryPredicate, FilterCriteria, Filterable, TextScope, filter, select};
pub use screens::{
    BoutiqueDetailScreen, ExploreScreen, FavoritesScreen, HomeScreen, MallDetailScreen,
    ResultState, SearchParams, SearchScreen,
};
pub use shared::{AppError, AppResult, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// Load `.env`, read the config and install the logger
pub fn setup_environment() -> AppResult<Config> {
    dotenv::dotenv().ok();
    let config = Config::from_env();
    config.validate()?;
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());
    tracing::debug!(environment = %config.environment, "environment ready");
    Ok(config)
}
