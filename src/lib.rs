// ==========================================
// 地产数据导入系统 - 核心库
// ==========================================
// 技术栈: Rust + SQLite
// 系统定位: 经纪人与房源 CSV 数据的校验入库工具
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 数据仓储层 - 数据访问
pub mod repository;

// 导入层 - 外部数据
pub mod importer;

// 配置层 - 运行配置
pub mod config;

// 数据库基础设施（连接初始化/PRAGMA 统一）
pub mod db;

// 日志系统
pub mod logging;

// 应用层 - 上下文装配
pub mod app;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{District, EntityKind, ALL_DISTRICTS};

// 领域实体
pub use domain::{ListingRecord, RealtorRecord, RunSummary, Verdict};

// 导入层
pub use importer::{ImportError, ImportResult, RecordImporter, RecordImporterImpl};

// 仓储层
pub use repository::{EstateImportRepository, EstateImportRepositoryImpl};

// 应用层
pub use app::ImportContext;

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "地产数据导入系统";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
