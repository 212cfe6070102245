// ==========================================
// 地产数据导入系统 - 导入运行领域模型
// ==========================================
// 用途: 行级裁决与运行汇总（导入接口返回值）
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// Verdict - 行校验裁决
// ==========================================
// 行校验器输出: 接受或拒绝（附全部拒绝原因，不止第一条）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Accepted,              // 通过全部校验
    Rejected(Vec<String>), // 拒绝原因列表（按列定义顺序，确定性输出）
}

impl Verdict {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accepted)
    }
}

// ==========================================
// RunSummary - 运行汇总
// ==========================================
// 单次文件导入的最终计数；运行中止时也会带着部分计数输出
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunSummary {
    pub total_rows: usize, // 数据行总数（不含表头与空行）
    pub imported: usize,   // 成功入库行数
    pub skipped: usize,    // 数据问题跳过行数
    pub errored: usize,    // 入库错误行数
    pub elapsed_ms: u64,   // 运行耗时（毫秒）
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verdict_is_accepted() {
        assert!(Verdict::Accepted.is_accepted());
        assert!(!Verdict::Rejected(vec!["x".to_string()]).is_accepted());
    }
}
