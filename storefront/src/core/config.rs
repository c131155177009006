use std::path::PathBuf;

use shared::error::{AppError, AppResult};

/// 店铺目录配置
///
/// # 环境变量
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | CATALOG_DATA_PATH | (内置样例) | 目录数据 JSON 文件 |
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_DIR | (无) | 日志目录，存在时按天滚动写文件 |
/// | ENVIRONMENT | development | 运行环境 |
/// | FAVORITE_MALLS_PREVIEW | 2 | 收藏页商场预览数量 |
/// | FAVORITE_BOUTIQUES_PREVIEW | 3 | 收藏页店铺预览数量 |
/// | RECENT_MALLS_PREVIEW | 3 | 首页"最近添加"商场数量 |
///
/// # 示例
///
/// ```ignore
/// CATALOG_DATA_PATH=./catalog.json LOG_LEVEL=debug cargo test
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// 目录数据文件；`None` 使用内置样例数据
    pub data_path: Option<PathBuf>,
    /// 日志级别: trace | debug | info | warn | error
    pub log_level: String,
    /// 日志目录
    pub log_dir: Option<String>,
    /// 运行环境: development | production
    pub environment: String,
    /// 收藏页占位预览: 前 N 个商场
    pub favorite_malls_preview: usize,
    /// 收藏页占位预览: 前 N 个店铺
    pub favorite_boutiques_preview: usize,
    /// 首页"最近添加": 前 N 个商场
    pub recent_malls_preview: usize,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置或无法解析，使用默认值
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 从任意键值来源加载配置 (测试时传入 HashMap)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            data_path: lookup("CATALOG_DATA_PATH")
                .filter(|p| !p.is_empty())
                .map(PathBuf::from),
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".into()),
            log_dir: lookup("LOG_DIR").filter(|d| !d.is_empty()),
            environment: lookup("ENVIRONMENT").unwrap_or_else(|| "development".into()),
            favorite_malls_preview: lookup("FAVORITE_MALLS_PREVIEW")
                .and_then(|v| v.parse().ok())
                .unwrap_or(2),
            favorite_boutiques_preview: lookup("FAVORITE_BOUTIQUES_PREVIEW")
                .and_then(|v| v.parse().ok())
                .unwrap_or(3),
            recent_malls_preview: lookup("RECENT_MALLS_PREVIEW")
                .and_then(|v| v.parse().ok())
                .unwrap_or(3),
        }
    }

    /// 使用自定义数据文件覆盖配置
    ///
    /// 常用于测试场景
    pub fn with_overrides(data_path: Option<PathBuf>) -> Self {
        let mut config = Self::from_lookup(|_| None);
        config.data_path = data_path;
        config
    }

    /// 检查日志级别是否合法
    pub fn validate(&self) -> AppResult<()> {
        match self.log_level.to_ascii_lowercase().as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
            other => Err(AppError::config(format!("Unknown LOG_LEVEL '{}'", other))
                .with_detail("key", "LOG_LEVEL")),
        }
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// 是否开发环境
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
