// ==========================================
// 地产数据导入系统 - 导入仓储 Trait
// ==========================================
// 职责: 定义导入流程所需的最小存储接口（不包含实现）
// 红线: 仓储不含业务逻辑；核心只通过这两类操作访问数据库
// ==========================================

use crate::domain::{ListingRecord, RealtorRecord};
use crate::repository::error::RepositoryResult;

// ==========================================
// EstateImportRepository Trait
// ==========================================
// 用途: 导入流程的存储接口
// 实现者: EstateImportRepositoryImpl（SQLite）
pub trait EstateImportRepository: Send + Sync {
    /// 插入一条经纪人记录
    ///
    /// # 参数
    /// - record: 已通过校验的经纪人记录
    ///
    /// # 返回
    /// - Ok(i64): 数据库分配的主键
    /// - Err: 约束违反（单行级）或连接错误（运行级）
    fn insert_realtor(&self, record: &RealtorRecord) -> RepositoryResult<i64>;

    /// 插入一条房源记录
    ///
    /// # 参数
    /// - record: 已通过校验且 realtor_id 已解析的房源记录
    ///
    /// # 返回
    /// - Ok(i64): 数据库分配的主键
    /// - Err: 约束违反（单行级）或连接错误（运行级）
    fn insert_listing(&self, record: &ListingRecord) -> RepositoryResult<i64>;

    /// 查询指定 id 的经纪人是否存在
    ///
    /// # 返回
    /// - Ok(true/false): 存在性
    /// - Err: 存储不可用（调用方不得把错误当作"不存在"处理）
    fn realtor_exists(&self, realtor_id: i64) -> RepositoryResult<bool>;
}
