// ==========================================
// 地产数据导入系统 - 运行报告器
// ==========================================
// 职责: 行级结果计数 + 结构化日志输出
// 说明: 三个计数器单调递增，是行与行之间唯一的共享状态
// ==========================================

use crate::domain::RunSummary;
use crate::repository::RepositoryError;
use std::time::Instant;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

// ==========================================
// RunReporter
// ==========================================
// 每次文件导入构造一个；跑完（或中止）时输出汇总行
pub struct RunReporter {
    run_id: String,
    total_rows: usize,
    imported: usize,
    skipped: usize,
    errored: usize,
    started: Instant,
}

impl RunReporter {
    pub fn new() -> Self {
        Self {
            run_id: Uuid::new_v4().to_string(),
            total_rows: 0,
            imported: 0,
            skipped: 0,
            errored: 0,
            started: Instant::now(),
        }
    }

    pub fn run_id(&self) -> &str {
        &self.run_id
    }

    /// 行入库成功
    pub fn row_imported(&mut self, row_number: usize, id: i64) {
        self.total_rows += 1;
        self.imported += 1;
        debug!(run_id = %self.run_id, row_number, id, "行导入成功");
    }

    /// 行因数据问题跳过（类型/必填/枚举/外键）
    ///
    /// 畸形输入是预期内情况，记 warning 而非 error；
    /// raw_json 为原始行快照，便于离线排查。
    pub fn row_skipped(&mut self, row_number: usize, reasons: &[String], raw_json: &str) {
        self.total_rows += 1;
        self.skipped += 1;
        warn!(
            run_id = %self.run_id,
            row_number,
            reasons = %reasons.join("; "),
            raw = %raw_json,
            "行被跳过"
        );
    }

    /// 行入库失败（单行级存储错误，如约束冲突）
    pub fn row_errored(&mut self, row_number: usize, err: &RepositoryError) {
        self.total_rows += 1;
        self.errored += 1;
        error!(run_id = %self.run_id, row_number, error = %err, "行入库失败");
    }

    fn summary(&self) -> RunSummary {
        RunSummary {
            total_rows: self.total_rows,
            imported: self.imported,
            skipped: self.skipped,
            errored: self.errored,
            elapsed_ms: self.started.elapsed().as_millis() as u64,
        }
    }

    /// 正常收尾：输出汇总并返回
    pub fn finish(self) -> RunSummary {
        let summary = self.summary();
        info!(
            run_id = %self.run_id,
            total = summary.total_rows,
            imported = summary.imported,
            skipped = summary.skipped,
            errored = summary.errored,
            elapsed_ms = summary.elapsed_ms,
            "导入完成"
        );
        summary
    }

    /// 中止收尾：运行级错误导致提前结束，仍输出部分计数
    pub fn finish_aborted(self) -> RunSummary {
        let summary = self.summary();
        error!(
            run_id = %self.run_id,
            total = summary.total_rows,
            imported = summary.imported,
            skipped = summary.skipped,
            errored = summary.errored,
            elapsed_ms = summary.elapsed_ms,
            "导入中止（部分计数）"
        );
        summary
    }
}

impl Default for RunReporter {
    fn default() -> Self {
        Self::new()
    }
}
