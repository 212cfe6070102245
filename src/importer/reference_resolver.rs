// ==========================================
// 地产数据导入系统 - 引用解析器实现
// ==========================================
// 职责: 房源行入库前确认 realtor_id 指向真实存在的经纪人
// 红线: 存储错误必须原样向上传播，绝不折算成"不存在"
// ==========================================

use crate::repository::{EstateImportRepository, RepositoryResult};
use std::collections::HashMap;

// ==========================================
// ResolveOutcome - 解析结果
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveOutcome {
    Found,    // 经纪人存在
    NotFound, // 经纪人不存在（行级跳过）
}

// ==========================================
// ReferenceResolver
// ==========================================
// 每次运行构造一个实例；按 realtor_id 做运行内备忘，
// 同一文件里反复出现的 id 只查一次库。
// 单写者短批次运行，备忘不会掩盖运行中途被删除的经纪人。
pub struct ReferenceResolver<'a, R: EstateImportRepository> {
    repo: &'a R,
    memo: HashMap<i64, bool>,
}

impl<'a, R: EstateImportRepository> ReferenceResolver<'a, R> {
    pub fn new(repo: &'a R) -> Self {
        Self {
            repo,
            memo: HashMap::new(),
        }
    }

    /// 解析一个外键值
    ///
    /// # 返回
    /// - Ok(Found/NotFound): 存在性结论
    /// - Err: 存储不可用（运行级，调用方中止整个运行）
    pub fn resolve(&mut self, realtor_id: i64) -> RepositoryResult<ResolveOutcome> {
        let exists = match self.memo.get(&realtor_id) {
            Some(cached) => *cached,
            None => {
                let exists = self.repo.realtor_exists(realtor_id)?;
                self.memo.insert(realtor_id, exists);
                exists
            }
        };

        if exists {
            Ok(ResolveOutcome::Found)
        } else {
            Ok(ResolveOutcome::NotFound)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ListingRecord, RealtorRecord};
    use crate::repository::{RepositoryError, RepositoryResult};
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// 记录查询次数的假仓储
    struct FakeRepo {
        existing_id: i64,
        exists_calls: AtomicUsize,
        fail: bool,
    }

    impl EstateImportRepository for FakeRepo {
        fn insert_realtor(&self, _record: &RealtorRecord) -> RepositoryResult<i64> {
            Ok(1)
        }

        fn insert_listing(&self, _record: &ListingRecord) -> RepositoryResult<i64> {
            Ok(1)
        }

        fn realtor_exists(&self, realtor_id: i64) -> RepositoryResult<bool> {
            self.exists_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(RepositoryError::ConnectionError("gone".to_string()));
            }
            Ok(realtor_id == self.existing_id)
        }
    }

    #[test]
    fn test_resolve_found_and_not_found() {
        let repo = FakeRepo {
            existing_id: 7,
            exists_calls: AtomicUsize::new(0),
            fail: false,
        };
        let mut resolver = ReferenceResolver::new(&repo);

        assert_eq!(resolver.resolve(7).unwrap(), ResolveOutcome::Found);
        assert_eq!(resolver.resolve(9999).unwrap(), ResolveOutcome::NotFound);
    }

    #[test]
    fn test_resolve_memoizes_per_run() {
        let repo = FakeRepo {
            existing_id: 7,
            exists_calls: AtomicUsize::new(0),
            fail: false,
        };
        let mut resolver = ReferenceResolver::new(&repo);

        for _ in 0..5 {
            resolver.resolve(7).unwrap();
        }
        assert_eq!(repo.exists_calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_resolve_store_error_propagates() {
        // 存储错误不得被当作 NotFound
        let repo = FakeRepo {
            existing_id: 7,
            exists_calls: AtomicUsize::new(0),
            fail: true,
        };
        let mut resolver = ReferenceResolver::new(&repo);
        assert!(resolver.resolve(7).is_err());
    }
}
