// ==========================================
// 地产数据导入系统 - 导入流程 Trait
// ==========================================
// 职责: 定义导入管道各阶段接口（不包含实现）
// ==========================================

use crate::domain::{EntityKind, RunSummary, Verdict};
use crate::importer::error::ImportResult;
use crate::importer::field_coercer::{Coerced, CoercedRow};
use crate::importer::schema::FieldSpec;
use std::path::Path;

// ==========================================
// RecordImporter Trait
// ==========================================
// 用途: 导入主接口
// 实现者: RecordImporterImpl
pub trait RecordImporter {
    /// 从 CSV 文件导入指定实体的数据
    ///
    /// # 参数
    /// - kind: 实体种类（决定列定义与校验规则）
    /// - file_path: CSV 文件路径（首行为表头，按列名匹配）
    ///
    /// # 返回
    /// - Ok(RunSummary): 运行完成（含跳过行也算完成）
    /// - Err: 运行级错误（文件打不开 / 存储不可用），
    ///   返回前部分计数已写入日志
    ///
    /// # 行级流程
    /// 解析 → 类型转换 → 校验 → [房源: 引用解析] → 入库
    /// 任意一行的失败都不影响其它行；已入库的行不会被回滚
    fn import_file(&self, kind: EntityKind, file_path: &Path) -> ImportResult<RunSummary>;
}

// ==========================================
// FieldCoercer Trait
// ==========================================
// 用途: 单元格类型转换接口（纯函数）
// 实现者: FieldCoercerImpl
pub trait FieldCoercer: Send + Sync {
    /// 将原始单元格文本按列定义转换为类型化值
    ///
    /// # 参数
    /// - raw: 原始文本（可能为空串）
    /// - spec: 该列的定义（名称/类型/必填标记）
    ///
    /// # 返回
    /// - Coerced::Absent: 空值（是否违规由行校验器判定）
    /// - Coerced::Value: 转换成功
    /// - Coerced::Failed: 类型不匹配（保留原始文本）
    fn coerce(&self, raw: &str, spec: &FieldSpec) -> Coerced;
}

// ==========================================
// RowValidator Trait
// ==========================================
// 用途: 整行校验接口
// 实现者: RowValidatorImpl
pub trait RowValidator: Send + Sync {
    /// 对转换后的整行做出裁决
    ///
    /// # 参数
    /// - kind: 实体种类
    /// - row: 转换后的行（每个声明列一格）
    ///
    /// # 返回
    /// - Verdict::Accepted: 全部检查通过
    /// - Verdict::Rejected: 全部违规原因（确定性顺序，非短路）
    fn validate(&self, kind: EntityKind, row: &CoercedRow) -> Verdict;
}
