// ==========================================
// 地产数据导入系统 - 数据仓储层
// ==========================================
// 职责: 提供数据访问接口,屏蔽数据库细节
// 红线: Repository 不含业务逻辑
// ==========================================

pub mod error;
pub mod estate_import_repo;
pub mod estate_import_repo_impl;

// 重导出核心仓储
pub use error::{RepositoryError, RepositoryResult};
pub use estate_import_repo::EstateImportRepository;
pub use estate_import_repo_impl::EstateImportRepositoryImpl;
