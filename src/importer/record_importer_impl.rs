// ==========================================
// 地产数据导入系统 - 记录导入器实现
// ==========================================
// 职责: 整合导入流程，从文件到数据库
// 流程: 解析 → 类型转换 → 校验 → [房源: 引用解析] → 入库
// 红线: 行与行完全独立；单行失败绝不中断运行，
//       只有运行级错误（文件/存储不可用）才向外传播
// ==========================================

use crate::domain::{EntityKind, ListingRecord, RealtorRecord, RunSummary, Verdict};
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::field_coercer::CoercedRow;
use crate::importer::file_parser::{CsvRowReader, RawRow};
use crate::importer::record_importer_trait::{
    FieldCoercer, RecordImporter, RowValidator,
};
use crate::importer::reference_resolver::{ReferenceResolver, ResolveOutcome};
use crate::importer::reporter::RunReporter;
use crate::importer::schema::fields_for;
use crate::repository::EstateImportRepository;
use chrono::Utc;
use std::path::Path;
use tracing::info;

// ==========================================
// RecordImporterImpl - 记录导入器实现
// ==========================================
pub struct RecordImporterImpl<R>
where
    R: EstateImportRepository,
{
    // 数据访问层
    repo: R,

    // 导入组件
    coercer: Box<dyn FieldCoercer>,
    validator: Box<dyn RowValidator>,
}

impl<R> RecordImporterImpl<R>
where
    R: EstateImportRepository,
{
    /// 创建新的 RecordImporter 实例
    ///
    /// # 参数
    /// - repo: 导入数据仓储
    /// - coercer: 字段类型转换器
    /// - validator: 行校验器
    pub fn new(repo: R, coercer: Box<dyn FieldCoercer>, validator: Box<dyn RowValidator>) -> Self {
        Self {
            repo,
            coercer,
            validator,
        }
    }

    /// 访问底层仓储（测试与上层查询用）
    pub fn repo(&self) -> &R {
        &self.repo
    }
}

impl<R> RecordImporter for RecordImporterImpl<R>
where
    R: EstateImportRepository,
{
    fn import_file(&self, kind: EntityKind, file_path: &Path) -> ImportResult<RunSummary> {
        let reader = CsvRowReader::open(file_path)?;
        let mut reporter = RunReporter::new();
        let mut resolver = ReferenceResolver::new(&self.repo);

        info!(
            run_id = %reporter.run_id(),
            entity = %kind,
            file = %file_path.display(),
            "开始导入 CSV 数据"
        );

        for row_result in reader {
            // 行读取失败属于文件级问题，中止前输出部分计数
            let raw = match row_result {
                Ok(raw) => raw,
                Err(e) => {
                    reporter.finish_aborted();
                    return Err(e);
                }
            };

            // === 阶段 1: 类型转换 ===
            let coerced = self.coerce_row(kind, &raw);

            // === 阶段 2: 行校验 ===
            if let Verdict::Rejected(reasons) = self.validator.validate(kind, &coerced) {
                let raw_json =
                    serde_json::to_string(&raw.cells).unwrap_or_else(|_| "{}".to_string());
                reporter.row_skipped(raw.row_number, &reasons, &raw_json);
                continue;
            }

            // === 阶段 3: 引用解析（仅房源）+ 入库 ===
            let insert_result = match kind {
                EntityKind::Realtor => {
                    let record = build_realtor(&coerced);
                    self.repo.insert_realtor(&record)
                }
                EntityKind::Listing => {
                    // realtor_id 必填且为整数，校验已通过，此处必定取得值
                    let Some(realtor_id) = coerced.integer("realtor_id") else {
                        reporter.row_skipped(
                            raw.row_number,
                            &["必填字段缺失: realtor_id".to_string()],
                            "{}",
                        );
                        continue;
                    };

                    match resolver.resolve(realtor_id) {
                        Ok(ResolveOutcome::Found) => {
                            let record = build_listing(&coerced, realtor_id);
                            self.repo.insert_listing(&record)
                        }
                        Ok(ResolveOutcome::NotFound) => {
                            reporter.row_skipped(
                                raw.row_number,
                                &[format!("未知 realtor_id: {}", realtor_id)],
                                &serde_json::to_string(&raw.cells)
                                    .unwrap_or_else(|_| "{}".to_string()),
                            );
                            continue;
                        }
                        // 存在性查询出错 = 存储不可用，立即中止
                        Err(e) => {
                            reporter.finish_aborted();
                            return Err(ImportError::StoreUnavailable(e.to_string()));
                        }
                    }
                }
            };

            // === 阶段 4: 入库结果归类 ===
            match insert_result {
                Ok(id) => reporter.row_imported(raw.row_number, id),
                Err(e) if e.is_row_scoped() => reporter.row_errored(raw.row_number, &e),
                Err(e) => {
                    reporter.finish_aborted();
                    return Err(ImportError::StoreUnavailable(e.to_string()));
                }
            }
        }

        Ok(reporter.finish())
    }
}

// 辅助方法
impl<R> RecordImporterImpl<R>
where
    R: EstateImportRepository,
{
    /// 对声明的每一列应用类型转换
    fn coerce_row(&self, kind: EntityKind, raw: &RawRow) -> CoercedRow {
        let mut row = CoercedRow::new(raw.row_number);
        for spec in fields_for(kind) {
            let cell = raw.cells.get(spec.name).map(String::as_str).unwrap_or("");
            row.set(spec.name, self.coercer.coerce(cell, spec));
        }
        row
    }
}

/// 从已接受的行构造经纪人记录
fn build_realtor(row: &CoercedRow) -> RealtorRecord {
    RealtorRecord {
        name: row.text("name").unwrap_or_default(),
        phone: row.text("phone").unwrap_or_default(),
        email: row.text("email").unwrap_or_default(),
        photo: row.text("photo"),
        description: row.text("description"),
        is_mvp: row.boolean("is_mvp"),
        hire_date: row.date("hire_date"),
        created_at: Utc::now(),
    }
}

/// 从已接受的行构造房源记录
fn build_listing(row: &CoercedRow, realtor_id: i64) -> ListingRecord {
    ListingRecord {
        realtor_id,
        title: row.text("title").unwrap_or_default(),
        price: row.integer("price").unwrap_or_default(),
        address: row.text("address"),
        street: row.text("street"),
        // 枚举成员资格校验已通过，未命中只会是缺失
        district: row
            .text("district")
            .and_then(|label| crate::domain::types::District::from_label(&label)),
        description: row.text("description"),
        bedrooms: row.integer("bedrooms"),
        bathrooms: row.decimal("bathrooms"),
        clubhouse: row.integer("clubhouse"),
        sqft: row.integer("sqft"),
        estate_size: row.decimal("estate_size"),
        is_published: row.boolean("is_published"),
        list_date: row.date("list_date"),
        photo_main: row.text("photo_main"),
        photo_1: row.text("photo_1"),
        photo_2: row.text("photo_2"),
        photo_3: row.text("photo_3"),
        photo_4: row.text("photo_4"),
        photo_5: row.text("photo_5"),
        photo_6: row.text("photo_6"),
        created_at: Utc::now(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::importer::field_coercer::FieldCoercer as FieldCoercerImpl;
    use crate::importer::schema::fields_for;
    use std::collections::HashMap;

    fn coerce_cells(kind: EntityKind, cells: &[(&str, &str)]) -> CoercedRow {
        let cells: HashMap<&str, &str> = cells.iter().copied().collect();
        let coercer = FieldCoercerImpl;
        let mut row = CoercedRow::new(1);
        for spec in fields_for(kind) {
            let raw = cells.get(spec.name).copied().unwrap_or("");
            row.set(spec.name, coercer.coerce(raw, spec));
        }
        row
    }

    #[test]
    fn test_build_realtor_mixed_case_boolean() {
        let row = coerce_cells(
            EntityKind::Realtor,
            &[
                ("name", "Jane Doe"),
                ("phone", "555-0100"),
                ("email", "jane@x.com"),
                ("is_mvp", "TRUE"),
            ],
        );
        let record = build_realtor(&row);
        assert!(record.is_mvp);
        assert_eq!(record.name, "Jane Doe");
        assert_eq!(record.hire_date, None);
    }

    #[test]
    fn test_build_listing_optional_fields_absent() {
        let row = coerce_cells(
            EntityKind::Listing,
            &[("realtor_id", "3"), ("title", "Flat A"), ("price", "4200000")],
        );
        let record = build_listing(&row, 3);
        assert_eq!(record.realtor_id, 3);
        assert_eq!(record.price, 4_200_000);
        assert_eq!(record.district, None);
        assert_eq!(record.bedrooms, None);
        assert!(!record.is_published);
    }

    #[test]
    fn test_build_listing_district_resolved() {
        let row = coerce_cells(
            EntityKind::Listing,
            &[
                ("realtor_id", "3"),
                ("title", "Flat A"),
                ("price", "4200000"),
                ("district", "Sha Tin"),
            ],
        );
        let record = build_listing(&row, 3);
        assert_eq!(
            record.district,
            Some(crate::domain::types::District::ShaTin)
        );
    }
}
