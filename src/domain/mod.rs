// ==========================================
// 地产数据导入系统 - 领域层
// ==========================================
// 职责: 实体记录与共享类型，不含 IO
// ==========================================

pub mod import_run;
pub mod listing;
pub mod realtor;
pub mod types;

// 重导出核心类型
pub use import_run::{RunSummary, Verdict};
pub use listing::ListingRecord;
pub use realtor::RealtorRecord;
pub use types::{District, EntityKind, ALL_DISTRICTS};
