// ==========================================
// 地产数据导入系统 - 经纪人领域模型
// ==========================================
// 用途: 导入层写入 realtor 表
// 红线: 记录本身不携带 id，主键由数据库在插入时分配
// ==========================================

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

// ==========================================
// RealtorRecord - 经纪人记录
// ==========================================
// 生命周期: 每个 CSV 行构造一条，校验 → 入库 → 丢弃
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RealtorRecord {
    // ===== 必填字段 =====
    pub name: String,  // 姓名（非空）
    pub phone: String, // 电话（非空，仅校验存在性）
    pub email: String, // 邮箱（非空，仅校验存在性）

    // ===== 可选字段 =====
    pub photo: Option<String>,       // 头像路径（仅存路径文本）
    pub description: Option<String>, // 简介

    // ===== 标记与日期 =====
    pub is_mvp: bool,                 // 金牌经纪人标记（缺省 false）
    pub hire_date: Option<NaiveDate>, // 入职日期（缺失存 NULL）

    // ===== 审计字段 =====
    pub created_at: DateTime<Utc>, // 记录创建时间
}
