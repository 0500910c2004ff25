// ==========================================
// 校园招聘就业管理系统 - 配置层
// ==========================================
// 职责: 运行配置加载（环境变量 + 默认值）
// ==========================================

pub mod app_config;

pub use app_config::{get_default_db_path, AppConfig, ConfigError};
