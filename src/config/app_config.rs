// ==========================================
// 校园招聘就业管理系统 - 应用配置
// ==========================================
// 职责: 从环境变量加载运行配置
// 环境变量:
// - PLACEMENT_TRACKER_DB_PATH   数据库路径（默认: 用户数据目录）
// - PLACEMENT_TRACKER_BIND_ADDR HTTP 监听地址（默认: 127.0.0.1:8080）
// - PLACEMENT_TRACKER_LOCALE    界面语言（默认: en）
// - PLACEMENT_TRACKER_LOG_FORMAT 日志格式 text|json（默认: text）
// ==========================================

use std::net::SocketAddr;
use std::path::PathBuf;
use thiserror::Error;

use crate::i18n;
use crate::logging::LogFormat;

pub const ENV_DB_PATH: &str = "PLACEMENT_TRACKER_DB_PATH";
pub const ENV_BIND_ADDR: &str = "PLACEMENT_TRACKER_BIND_ADDR";
pub const ENV_LOCALE: &str = "PLACEMENT_TRACKER_LOCALE";
pub const ENV_LOG_FORMAT: &str = "PLACEMENT_TRACKER_LOG_FORMAT";

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
pub const DEFAULT_LOCALE: &str = "en";
const DB_FILE_NAME: &str = "placement_tracker.db";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("监听地址无效: {value} ({reason})")]
    InvalidBindAddr { value: String, reason: String },

    #[error("不支持的语言: {0}")]
    UnsupportedLocale(String),

    #[error("日志格式无效: {0}")]
    InvalidLogFormat(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub db_path: String,
    pub bind_addr: SocketAddr,
    pub locale: String,
    pub log_format: LogFormat,
}

impl AppConfig {
    /// 从进程环境变量加载
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 从任意键值来源加载（测试时注入）
    ///
    /// # 参数
    /// - lookup: 按环境变量名取值；空白值视为未设置
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let db_path = get(ENV_DB_PATH).unwrap_or_else(get_default_db_path);

        let bind_raw = get(ENV_BIND_ADDR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_raw
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidBindAddr {
                value: bind_raw.clone(),
                reason: e.to_string(),
            })?;

        let locale = match get(ENV_LOCALE) {
            Some(raw) => i18n::normalize_locale(&raw)
                .ok_or(ConfigError::UnsupportedLocale(raw))?
                .to_string(),
            None => DEFAULT_LOCALE.to_string(),
        };

        let log_format = match get(ENV_LOG_FORMAT) {
            Some(raw) => raw
                .parse::<LogFormat>()
                .map_err(|_| ConfigError::InvalidLogFormat(raw))?,
            None => LogFormat::default(),
        };

        Ok(Self {
            db_path,
            bind_addr,
            locale,
            log_format,
        })
    }
}

/// 默认数据库路径
///
/// 优先 PLACEMENT_TRACKER_DB_PATH；否则使用用户数据目录，
/// 无法获取数据目录时回退到当前目录。
pub fn get_default_db_path() -> String {
    if let Ok(path) = std::env::var(ENV_DB_PATH) {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return trimmed.to_string();
        }
    }

    let mut path = PathBuf::from(format!("./{}", DB_FILE_NAME));

    if let Some(data_dir) = dirs::data_dir() {
        // 开发环境使用独立目录，避免污染生产数据
        #[cfg(debug_assertions)]
        let dir = data_dir.join("placement-tracker-dev");

        #[cfg(not(debug_assertions))]
        let dir = data_dir.join("placement-tracker");

        if std::fs::create_dir_all(&dir).is_ok() {
            path = dir.join(DB_FILE_NAME);
        }
    }

    path.to_string_lossy().to_string()
}
