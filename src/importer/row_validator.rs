// ==========================================
// 地产数据导入系统 - 行校验器实现
// ==========================================
// 职责: 必填字段 + 行政区枚举成员资格 + 类型转换失败汇总
// 红线: 收集全部违规后一次性拒绝，不在第一条就短路
// 红线: 纯函数，相同输入永远得到相同裁决，不触碰外部状态
// ==========================================

use crate::domain::types::District;
use crate::domain::{EntityKind, Verdict};
use crate::importer::field_coercer::{CellValue, Coerced, CoercedRow};
use crate::importer::record_importer_trait::RowValidator as RowValidatorTrait;
use crate::importer::schema::fields_for;

pub struct RowValidator;

impl RowValidatorTrait for RowValidator {
    /// 对转换后的整行做裁决
    ///
    /// # 检查顺序（即原因输出顺序）
    /// 1. 按列定义顺序逐列检查：类型转换失败或必填缺失各记一条原因
    ///    （转换失败的必填列只记转换失败，不重复记缺失）
    /// 2. 房源独有：district 若存在，必须精确命中 18 区标签之一
    fn validate(&self, kind: EntityKind, row: &CoercedRow) -> Verdict {
        let mut reasons = Vec::new();

        for spec in fields_for(kind) {
            match row.get(spec.name) {
                Coerced::Failed { raw, expected } => {
                    reasons.push(format!(
                        "字段 {} 类型转换失败: 原始值 \"{}\" 无法解析为{}",
                        spec.name, raw, expected
                    ));
                }
                Coerced::Absent if spec.required => {
                    reasons.push(format!("必填字段缺失: {}", spec.name));
                }
                _ => {}
            }
        }

        if kind == EntityKind::Listing {
            if let Coerced::Value(CellValue::Text(label)) = row.get("district") {
                if District::from_label(label).is_none() {
                    reasons.push(format!(
                        "无效行政区: \"{}\"（必须为 18 区标签之一）",
                        label
                    ));
                }
            }
        }

        if reasons.is_empty() {
            Verdict::Accepted
        } else {
            Verdict::Rejected(reasons)
        }
    }
}
