// ==========================================
// 校园招聘就业管理系统 - 核心库
// ==========================================
// 技术栈: axum + Rust + SQLite
// 系统定位: 学生就业档案管理 + 批量导入 + 统计看板
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "en");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 数据仓储层 - 数据访问
pub mod repository;

// 引擎层 - 统计与筛选
pub mod engine;

// 导入层 - 电子表格
pub mod importer;

// 配置层 - 运行配置
pub mod config;

// 数据库基础设施（连接初始化/PRAGMA 统一/建表）
pub mod db;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// API 层 - 业务接口
pub mod api;

// 应用层 - HTTP 集成
pub mod app;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{OfferStatus, OfferType, PlacementStatus, BRANCHES};

// 领域实体
pub use domain::{
    BranchStat, DashboardStats, NewOffer, NewStudent, PlacementOffer, Student, StudentPatch,
};

// 引擎
pub use engine::{DashboardAggregator, StudentFilter};

// 导入
pub use importer::{validate_and_transform, StudentImporter, ValidationResult};

// API
pub use api::{DashboardApi, ImportApi, StudentApi};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "校园招聘就业管理系统";
