// ==========================================
// 地产数据导入系统 - 房源领域模型
// ==========================================
// 用途: 导入层写入 listing 表
// 红线: realtor_id 必须在入库前通过引用解析确认存在
// ==========================================

use crate::domain::types::District;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

// ==========================================
// ListingRecord - 房源记录
// ==========================================
// 生命周期: 每个 CSV 行构造一条，校验 → 引用解析 → 入库 → 丢弃
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingRecord {
    // ===== 必填字段 =====
    pub realtor_id: i64, // 所属经纪人（外键，入库前确认存在）
    pub title: String,   // 标题（非空）
    pub price: i64,      // 价格

    // ===== 位置信息 =====
    pub address: Option<String>,    // 地址
    pub street: Option<String>,     // 街道
    pub district: Option<District>, // 行政区（18 区之一，可缺失）

    // ===== 描述与规格 =====
    pub description: Option<String>, // 描述
    pub bedrooms: Option<i64>,       // 卧室数
    pub bathrooms: Option<f64>,      // 浴室数（可为半间，如 1.5）
    pub clubhouse: Option<i64>,      // 会所设施数
    pub sqft: Option<i64>,           // 建筑面积（平方英尺）
    pub estate_size: Option<f64>,    // 屋苑规模

    // ===== 发布状态 =====
    pub is_published: bool,          // 是否发布（缺省 false）
    pub list_date: Option<NaiveDate>, // 挂牌日期

    // ===== 图片路径（仅存路径文本，不搬运文件）=====
    pub photo_main: Option<String>,
    pub photo_1: Option<String>,
    pub photo_2: Option<String>,
    pub photo_3: Option<String>,
    pub photo_4: Option<String>,
    pub photo_5: Option<String>,
    pub photo_6: Option<String>,

    // ===== 审计字段 =====
    pub created_at: DateTime<Utc>, // 记录创建时间
}
