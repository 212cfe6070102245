// ==========================================
// 地产数据导入系统 - 列定义表
// ==========================================
// 职责: 每种实体的 CSV 列名 → 语义类型 + 必填标记
// 红线: 列定义顺序即校验原因的输出顺序（确定性）
// ==========================================

use crate::domain::EntityKind;
use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// FieldType - 语义类型
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldType {
    Text,    // 文本（按原样保留，两端去空白）
    Integer, // 整数
    Decimal, // 小数
    Boolean, // 布尔（仅接受 true/false 字面量，其余取缺省值 false）
    Date,    // 日期（严格 YYYY-MM-DD）
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldType::Text => write!(f, "文本"),
            FieldType::Integer => write!(f, "整数"),
            FieldType::Decimal => write!(f, "小数"),
            FieldType::Boolean => write!(f, "布尔"),
            FieldType::Date => write!(f, "日期"),
        }
    }
}

// ==========================================
// FieldSpec - 单列定义
// ==========================================
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,    // CSV 列名（按名匹配，列顺序无关）
    pub field_type: FieldType, // 语义类型
    pub required: bool,        // 必填标记
}

const fn field(name: &'static str, field_type: FieldType, required: bool) -> FieldSpec {
    FieldSpec {
        name,
        field_type,
        required,
    }
}

// ==========================================
// 经纪人 CSV 列定义
// ==========================================
pub const REALTOR_FIELDS: &[FieldSpec] = &[
    field("name", FieldType::Text, true),
    field("photo", FieldType::Text, false),
    field("description", FieldType::Text, false),
    field("phone", FieldType::Text, true),
    field("email", FieldType::Text, true),
    field("is_mvp", FieldType::Boolean, false),
    field("hire_date", FieldType::Date, false),
];

// ==========================================
// 房源 CSV 列定义
// ==========================================
pub const LISTING_FIELDS: &[FieldSpec] = &[
    field("realtor_id", FieldType::Integer, true),
    field("title", FieldType::Text, true),
    field("address", FieldType::Text, false),
    field("street", FieldType::Text, false),
    field("district", FieldType::Text, false), // 枚举成员资格由行校验器检查
    field("description", FieldType::Text, false),
    field("price", FieldType::Integer, true),
    field("bedrooms", FieldType::Integer, false),
    field("bathrooms", FieldType::Decimal, false),
    field("clubhouse", FieldType::Integer, false),
    field("sqft", FieldType::Integer, false),
    field("estate_size", FieldType::Decimal, false),
    field("is_published", FieldType::Boolean, false),
    field("list_date", FieldType::Date, false),
    field("photo_main", FieldType::Text, false),
    field("photo_1", FieldType::Text, false),
    field("photo_2", FieldType::Text, false),
    field("photo_3", FieldType::Text, false),
    field("photo_4", FieldType::Text, false),
    field("photo_5", FieldType::Text, false),
    field("photo_6", FieldType::Text, false),
];

/// 按实体种类取列定义
pub fn fields_for(kind: EntityKind) -> &'static [FieldSpec] {
    match kind {
        EntityKind::Realtor => REALTOR_FIELDS,
        EntityKind::Listing => LISTING_FIELDS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_fields_realtor() {
        let required: Vec<&str> = REALTOR_FIELDS
            .iter()
            .filter(|f| f.required)
            .map(|f| f.name)
            .collect();
        assert_eq!(required, vec!["name", "phone", "email"]);
    }

    #[test]
    fn test_required_fields_listing() {
        let required: Vec<&str> = LISTING_FIELDS
            .iter()
            .filter(|f| f.required)
            .map(|f| f.name)
            .collect();
        assert_eq!(required, vec!["realtor_id", "title", "price"]);
    }

    #[test]
    fn test_fields_for_dispatch() {
        assert_eq!(fields_for(EntityKind::Realtor).len(), 7);
        assert_eq!(fields_for(EntityKind::Listing).len(), 21);
    }
}
