// ==========================================
// 地产数据导入系统 - 应用上下文
// ==========================================
// 职责: 持有整次运行的共享资源（数据库连接 + 配置）
// 生命周期: open → run → close；不使用进程级单例，
// 上下文显式传入导入器，退出路径上连接随 drop 释放
// ==========================================

use crate::config::ImportConfig;
use crate::domain::{EntityKind, RunSummary};
use crate::importer::record_importer_trait::RecordImporter;
use crate::importer::{FieldCoercerImpl, ImportError, ImportResult, RecordImporterImpl, RowValidatorImpl};
use crate::repository::EstateImportRepositoryImpl;
use std::path::Path;
use tracing::info;

// ==========================================
// ImportContext
// ==========================================
pub struct ImportContext {
    config: ImportConfig,
    importer: RecordImporterImpl<EstateImportRepositoryImpl>,
}

impl ImportContext {
    /// 建立数据库连接并装配导入器
    ///
    /// # 返回
    /// - Ok(ImportContext): 就绪的上下文
    /// - Err(StoreUnavailable): 连接建立或建表失败（运行级致命）
    pub fn open(config: ImportConfig) -> ImportResult<Self> {
        let repo = EstateImportRepositoryImpl::new(&config.db_path)
            .map_err(|e| ImportError::StoreUnavailable(e.to_string()))?;
        repo.ensure_schema()
            .map_err(|e| ImportError::StoreUnavailable(e.to_string()))?;

        info!(db_path = %config.db_path, "数据库连接就绪");

        let importer = RecordImporterImpl::new(
            repo,
            Box::new(FieldCoercerImpl),
            Box::new(RowValidatorImpl),
        );

        Ok(Self { config, importer })
    }

    pub fn config(&self) -> &ImportConfig {
        &self.config
    }

    /// 执行一次文件导入
    pub fn run(&self, kind: EntityKind, file_path: &Path) -> ImportResult<RunSummary> {
        self.importer.import_file(kind, file_path)
    }

    /// 释放资源（连接随 drop 关闭）
    pub fn close(self) {
        drop(self.importer);
        info!("数据库连接已关闭");
    }
}
