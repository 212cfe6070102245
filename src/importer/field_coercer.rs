// ==========================================
// 地产数据导入系统 - 字段类型转换器实现
// ==========================================
// 职责: 原始单元格文本 → 类型化值（纯函数，无副作用）
// 红线: 空值不是错误，必填判定属于行校验器，不在这里做
// ==========================================

use crate::importer::record_importer_trait::FieldCoercer as FieldCoercerTrait;
use crate::importer::schema::{FieldSpec, FieldType};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ==========================================
// CellValue - 类型化单元格值
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CellValue {
    Text(String),
    Integer(i64),
    Decimal(f64),
    Boolean(bool),
    Date(NaiveDate),
}

// ==========================================
// Coerced - 单字段转换结果
// ==========================================
// 三态: 缺失 / 成功 / 失败（失败保留原始文本用于报告）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Coerced {
    Absent,
    Value(CellValue),
    Failed { raw: String, expected: FieldType },
}

// ==========================================
// CoercedRow - 整行转换结果
// ==========================================
// 每个声明列各占一格；未出现在 CSV 中的列视为缺失
#[derive(Debug, Clone)]
pub struct CoercedRow {
    pub row_number: usize,
    fields: HashMap<&'static str, Coerced>,
}

impl CoercedRow {
    pub fn new(row_number: usize) -> Self {
        Self {
            row_number,
            fields: HashMap::new(),
        }
    }

    pub fn set(&mut self, name: &'static str, coerced: Coerced) {
        self.fields.insert(name, coerced);
    }

    pub fn get(&self, name: &str) -> &Coerced {
        static ABSENT: Coerced = Coerced::Absent;
        self.fields.get(name).unwrap_or(&ABSENT)
    }

    // ===== 类型化取值辅助（仅在裁决为接受后用于构造实体记录）=====

    pub fn text(&self, name: &str) -> Option<String> {
        match self.get(name) {
            Coerced::Value(CellValue::Text(s)) => Some(s.clone()),
            _ => None,
        }
    }

    pub fn integer(&self, name: &str) -> Option<i64> {
        match self.get(name) {
            Coerced::Value(CellValue::Integer(n)) => Some(*n),
            _ => None,
        }
    }

    pub fn decimal(&self, name: &str) -> Option<f64> {
        match self.get(name) {
            Coerced::Value(CellValue::Decimal(x)) => Some(*x),
            _ => None,
        }
    }

    pub fn boolean(&self, name: &str) -> bool {
        match self.get(name) {
            Coerced::Value(CellValue::Boolean(b)) => *b,
            _ => false,
        }
    }

    pub fn date(&self, name: &str) -> Option<NaiveDate> {
        match self.get(name) {
            Coerced::Value(CellValue::Date(d)) => Some(*d),
            _ => None,
        }
    }
}

// ==========================================
// FieldCoercer 实现
// ==========================================
pub struct FieldCoercer;

impl FieldCoercerTrait for FieldCoercer {
    /// 转换单个原始单元格
    ///
    /// # 规则
    /// - 空白（去空格后）→ Absent（布尔列除外）
    /// - 布尔: 不区分大小写的 "true"/"false"；其余一律取缺省值 false
    /// - 整数/小数: 去空白后 parse，失败 → Failed
    /// - 日期: 严格 YYYY-MM-DD，失败 → Failed
    fn coerce(&self, raw: &str, spec: &FieldSpec) -> Coerced {
        let trimmed = raw.trim();

        match spec.field_type {
            // 布尔列永远有值：仅接受 true/false 字面量，其余（含空值）取缺省 false
            FieldType::Boolean => {
                Coerced::Value(CellValue::Boolean(trimmed.eq_ignore_ascii_case("true")))
            }
            _ if trimmed.is_empty() => Coerced::Absent,
            FieldType::Text => Coerced::Value(CellValue::Text(trimmed.to_string())),
            FieldType::Integer => match trimmed.parse::<i64>() {
                Ok(n) => Coerced::Value(CellValue::Integer(n)),
                Err(_) => Coerced::Failed {
                    raw: trimmed.to_string(),
                    expected: spec.field_type,
                },
            },
            FieldType::Decimal => match trimmed.parse::<f64>() {
                Ok(x) => Coerced::Value(CellValue::Decimal(x)),
                Err(_) => Coerced::Failed {
                    raw: trimmed.to_string(),
                    expected: spec.field_type,
                },
            },
            FieldType::Date => match NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
                Ok(d) => Coerced::Value(CellValue::Date(d)),
                Err(_) => Coerced::Failed {
                    raw: trimmed.to_string(),
                    expected: spec.field_type,
                },
            },
        }
    }
}
