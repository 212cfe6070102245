// ==========================================
// 地产数据导入系统 - 运行配置
// ==========================================
// 职责: 数据库路径与日志文件路径的默认值 / 环境变量覆盖
// 优先级: 命令行参数 > 环境变量 > 默认值（覆盖在 main 中完成）
// ==========================================

use std::path::PathBuf;

/// 默认数据库文件
pub const DEFAULT_DB_PATH: &str = "estate_import.db";

/// 默认日志文件（追加写入）
pub const DEFAULT_LOG_PATH: &str = "data_import.log";

// ==========================================
// ImportConfig
// ==========================================
#[derive(Debug, Clone)]
pub struct ImportConfig {
    pub db_path: String,
    pub log_path: PathBuf,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            db_path: DEFAULT_DB_PATH.to_string(),
            log_path: PathBuf::from(DEFAULT_LOG_PATH),
        }
    }
}

impl ImportConfig {
    /// 读取环境变量覆盖默认值
    ///
    /// # 环境变量
    /// - ESTATE_DB_PATH: 数据库文件路径
    /// - ESTATE_IMPORT_LOG: 日志文件路径
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(db_path) = std::env::var("ESTATE_DB_PATH") {
            if !db_path.is_empty() {
                config.db_path = db_path;
            }
        }
        if let Ok(log_path) = std::env::var("ESTATE_IMPORT_LOG") {
            if !log_path.is_empty() {
                config.log_path = PathBuf::from(log_path);
            }
        }
        config
    }
}
