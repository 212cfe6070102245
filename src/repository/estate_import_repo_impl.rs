// ==========================================
// 地产数据导入系统 - 导入仓储 SQLite 实现
// ==========================================
// 职责: realtor / listing 表的插入与存在性查询
// 约束: 所有查询使用参数化,防止 SQL 注入
// ==========================================

use crate::db::open_sqlite_connection;
use crate::domain::{ListingRecord, RealtorRecord};
use crate::repository::error::{RepositoryError, RepositoryResult};
use crate::repository::estate_import_repo::EstateImportRepository;
use rusqlite::{params, Connection, OptionalExtension};
use std::sync::{Arc, Mutex};

// ==========================================
// EstateImportRepositoryImpl
// ==========================================
pub struct EstateImportRepositoryImpl {
    conn: Arc<Mutex<Connection>>,
}

impl EstateImportRepositoryImpl {
    /// 打开数据库并创建 Repository 实例
    ///
    /// # 参数
    /// - db_path: 数据库文件路径
    pub fn new(db_path: &str) -> RepositoryResult<Self> {
        let conn = open_sqlite_connection(db_path)
            .map_err(|e| RepositoryError::ConnectionError(e.to_string()))?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// 从已打开的连接创建 Repository 实例（测试用）
    pub fn from_connection(conn: Connection) -> Self {
        Self {
            conn: Arc::new(Mutex::new(conn)),
        }
    }

    /// 建表（幂等）
    ///
    /// realtor 与 listing 两张表；listing.realtor_id 带外键约束，
    /// 配合连接级 PRAGMA foreign_keys = ON 生效。
    pub fn ensure_schema(&self) -> RepositoryResult<()> {
        let conn = self.lock_conn()?;
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS realtor (
                id          INTEGER PRIMARY KEY AUTOINCREMENT,
                name        TEXT NOT NULL,
                photo       TEXT,
                description TEXT,
                phone       TEXT NOT NULL,
                email       TEXT NOT NULL,
                is_mvp      INTEGER NOT NULL DEFAULT 0,
                hire_date   TEXT,
                created_at  TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS listing (
                id           INTEGER PRIMARY KEY AUTOINCREMENT,
                realtor_id   INTEGER NOT NULL REFERENCES realtor(id),
                title        TEXT NOT NULL,
                address      TEXT,
                street       TEXT,
                district     TEXT,
                description  TEXT,
                price        INTEGER NOT NULL,
                bedrooms     INTEGER,
                bathrooms    REAL,
                clubhouse    INTEGER,
                sqft         INTEGER,
                estate_size  REAL,
                is_published INTEGER NOT NULL DEFAULT 0,
                list_date    TEXT,
                photo_main   TEXT,
                photo_1      TEXT,
                photo_2      TEXT,
                photo_3      TEXT,
                photo_4      TEXT,
                photo_5      TEXT,
                photo_6      TEXT,
                created_at   TEXT NOT NULL
            );
            "#,
        )?;
        Ok(())
    }

    fn lock_conn(&self) -> RepositoryResult<std::sync::MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }
}

impl EstateImportRepository for EstateImportRepositoryImpl {
    fn insert_realtor(&self, record: &RealtorRecord) -> RepositoryResult<i64> {
        let conn = self.lock_conn()?;
        conn.execute(
            r#"
            INSERT INTO realtor (
                name, photo, description, phone, email, is_mvp, hire_date, created_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
            "#,
            params![
                record.name,
                record.photo,
                record.description,
                record.phone,
                record.email,
                record.is_mvp,
                record.hire_date.map(|d| d.format("%Y-%m-%d").to_string()),
                record.created_at,
            ],
        )?;
        Ok(conn.last_insert_rowid())
    }

    fn insert_listing(&self, record: &ListingRecord) -> RepositoryResult<i64> {
        let conn = self.lock_conn()?;
        conn.execute(
            r#"
            INSERT INTO listing (
                realtor_id, title, address, street, district, description,
                price, bedrooms, bathrooms, clubhouse, sqft, estate_size,
                is_published, list_date, photo_main, photo_1, photo_2,
                photo_3, photo_4, photo_5, photo_6, created_at
            ) VALUES (
                ?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12,
                ?13, ?14, ?15, ?16, ?17, ?18, ?19, ?20, ?21, ?22
            )
            "#,
            params![
                record.realtor_id,
                record.title,
                record.address,
                record.street,
                record.district.map(|d| d.label()),
                record.description,
                record.price,
                record.bedrooms,
                record.bathrooms,
                record.clubhouse,
                record.sqft,
                record.estate_size,
                record.is_published,
                record.list_date.map(|d| d.format("%Y-%m-%d").to_string()),
                record.photo_main,
                record.photo_1,
                record.photo_2,
                record.photo_3,
                record.photo_4,
                record.photo_5,
                record.photo_6,
                record.created_at,
            ],
        )?;
        Ok(conn.last_insert_rowid())
    }

    fn realtor_exists(&self, realtor_id: i64) -> RepositoryResult<bool> {
        let conn = self.lock_conn()?;
        let found: Option<i64> = conn
            .query_row(
                "SELECT 1 FROM realtor WHERE id = ?1 LIMIT 1",
                params![realtor_id],
                |row| row.get(0),
            )
            .optional()?;
        Ok(found.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn create_test_repo() -> EstateImportRepositoryImpl {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch("PRAGMA foreign_keys = ON;").unwrap();
        let repo = EstateImportRepositoryImpl::from_connection(conn);
        repo.ensure_schema().unwrap();
        repo
    }

    fn sample_realtor() -> RealtorRecord {
        RealtorRecord {
            name: "Jane Doe".to_string(),
            phone: "555-0100".to_string(),
            email: "jane@x.com".to_string(),
            photo: None,
            description: None,
            is_mvp: false,
            hire_date: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_insert_realtor_assigns_id() {
        let repo = create_test_repo();
        let id = repo.insert_realtor(&sample_realtor()).unwrap();
        assert!(id > 0);
        assert!(repo.realtor_exists(id).unwrap());
    }

    #[test]
    fn test_realtor_exists_absent() {
        let repo = create_test_repo();
        assert!(!repo.realtor_exists(9999).unwrap());
    }

    #[test]
    fn test_insert_same_realtor_twice_creates_two_rows() {
        // 无去重语义：重复导入产生两条记录
        let repo = create_test_repo();
        let id1 = repo.insert_realtor(&sample_realtor()).unwrap();
        let id2 = repo.insert_realtor(&sample_realtor()).unwrap();
        assert_ne!(id1, id2);
    }
}
