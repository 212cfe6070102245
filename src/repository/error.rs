// ==========================================
// 地产数据导入系统 - 仓储层错误类型
// ==========================================
// 依据: Rust 错误处理最佳实践
// 工具: thiserror 派生宏
// ==========================================

use thiserror::Error;

/// 仓储层错误类型
#[derive(Error, Debug)]
pub enum RepositoryError {
    // ===== 连接级错误（运行级致命）=====
    #[error("数据库连接失败: {0}")]
    ConnectionError(String),

    #[error("数据库锁获取失败: {0}")]
    LockError(String),

    // ===== 查询错误 =====
    #[error("数据库查询失败: {0}")]
    QueryError(String),

    #[error("记录未找到: {entity} with id={id}")]
    NotFound { entity: String, id: String },

    // ===== 约束错误（单行级）=====
    #[error("唯一约束违反: {0}")]
    UniqueConstraintViolation(String),

    #[error("外键约束违反: {0}")]
    ForeignKeyViolation(String),

    #[error("CHECK 约束违反: {0}")]
    CheckConstraintViolation(String),

    // ===== 通用错误 =====
    #[error("内部错误: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RepositoryError {
    /// 是否为单行级错误
    ///
    /// 约束类错误只影响当前行，运行可以继续；
    /// 连接/锁类错误意味着存储不可用，必须中止整个运行。
    pub fn is_row_scoped(&self) -> bool {
        matches!(
            self,
            RepositoryError::UniqueConstraintViolation(_)
                | RepositoryError::ForeignKeyViolation(_)
                | RepositoryError::CheckConstraintViolation(_)
        )
    }
}

// 实现 From<rusqlite::Error>
impl From<rusqlite::Error> for RepositoryError {
    fn from(err: rusqlite::Error) -> Self {
        match err {
            rusqlite::Error::SqliteFailure(_, Some(msg)) => {
                if msg.contains("UNIQUE") {
                    RepositoryError::UniqueConstraintViolation(msg)
                } else if msg.contains("FOREIGN KEY") {
                    RepositoryError::ForeignKeyViolation(msg)
                } else if msg.contains("CHECK") {
                    RepositoryError::CheckConstraintViolation(msg)
                } else {
                    RepositoryError::QueryError(msg)
                }
            }
            rusqlite::Error::QueryReturnedNoRows => RepositoryError::NotFound {
                entity: "Unknown".to_string(),
                id: "Unknown".to_string(),
            },
            _ => RepositoryError::QueryError(err.to_string()),
        }
    }
}

/// Result 类型别名
pub type RepositoryResult<T> = Result<T, RepositoryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_row_scoped() {
        assert!(RepositoryError::UniqueConstraintViolation("x".to_string()).is_row_scoped());
        assert!(RepositoryError::ForeignKeyViolation("x".to_string()).is_row_scoped());
        assert!(!RepositoryError::ConnectionError("x".to_string()).is_row_scoped());
        assert!(!RepositoryError::QueryError("x".to_string()).is_row_scoped());
    }

    #[test]
    fn test_from_rusqlite_classifies_constraints() {
        let err = rusqlite::Error::SqliteFailure(
            rusqlite::ffi::Error::new(787), // SQLITE_CONSTRAINT_FOREIGNKEY
            Some("FOREIGN KEY constraint failed".to_string()),
        );
        let repo_err: RepositoryError = err.into();
        assert!(matches!(repo_err, RepositoryError::ForeignKeyViolation(_)));
        assert!(repo_err.is_row_scoped());
    }
}
