// ==========================================
// 地产数据导入系统 - 导入层
// ==========================================
// 职责: 外部 CSV 数据导入，生成实体记录并入库
// 流程: 解析 → 类型转换 → 校验 → 引用解析 → 入库
// ==========================================

// 模块声明
pub mod error;
pub mod field_coercer;
pub mod file_parser;
pub mod record_importer_impl;
pub mod record_importer_trait;
pub mod reference_resolver;
pub mod reporter;
pub mod row_validator;
pub mod schema;

// 重导出核心类型
pub use error::{ImportError, ImportResult};
pub use field_coercer::{CellValue, Coerced, CoercedRow, FieldCoercer as FieldCoercerImpl};
pub use file_parser::{CsvRowReader, RawRow};
pub use record_importer_impl::RecordImporterImpl;
pub use reference_resolver::{ReferenceResolver, ResolveOutcome};
pub use reporter::RunReporter;
pub use row_validator::RowValidator as RowValidatorImpl;
pub use schema::{fields_for, FieldSpec, FieldType, LISTING_FIELDS, REALTOR_FIELDS};

// 重导出 Trait 接口
pub use record_importer_trait::{FieldCoercer, RecordImporter, RowValidator};
