// ==========================================
// 仓储层集成测试
// ==========================================
// 测试目标: realtor / listing 表的插入、存在性查询与外键约束
// ==========================================


use chrono::{NaiveDate, Utc};
use estate_data_import::domain::types::District;
use estate_data_import::domain::{ListingRecord, RealtorRecord};
use estate_data_import::repository::{EstateImportRepository, EstateImportRepositoryImpl};
use test_helpers::create_test_db;

fn sample_realtor(name: &str) -> RealtorRecord {
    RealtorRecord {
        name: name.to_string(),
        phone: "555-0100".to_string(),
        email: "jane@x.com".to_string(),
        photo: Some("photos/realtors/jane.jpg".to_string()),
        description: None,
        is_mvp: true,
        hire_date: NaiveDate::from_ymd_opt(2020, 3, 16),
        created_at: Utc::now(),
    }
}

fn sample_listing(realtor_id: i64) -> ListingRecord {
    ListingRecord {
        realtor_id,
        title: "City One 三房".to_string(),
        price: 6_800_000,
        address: Some("City One, Block 12".to_string()),
        street: None,
        district: Some(District::ShaTin),
        description: None,
        bedrooms: Some(3),
        bathrooms: Some(1.5),
        clubhouse: None,
        sqft: Some(620),
        estate_size: None,
        is_published: false,
        list_date: None,
        photo_main: None,
        photo_1: None,
        photo_2: None,
        photo_3: None,
        photo_4: None,
        photo_5: None,
        photo_6: None,
        created_at: Utc::now(),
    }
}

#[test]
fn test_insert_realtor_and_exists() {
    let (_temp_db, db_path) = create_test_db().unwrap();
    let repo = EstateImportRepositoryImpl::new(&db_path).unwrap();

    let id = repo.insert_realtor(&sample_realtor("Jane Doe")).unwrap();
    assert!(id > 0);
    assert!(repo.realtor_exists(id).unwrap());
    assert!(!repo.realtor_exists(id + 1).unwrap());
}

#[test]
fn test_insert_listing_with_valid_fk() {
    let (_temp_db, db_path) = create_test_db().unwrap();
    let repo = EstateImportRepositoryImpl::new(&db_path).unwrap();

    let realtor_id = repo.insert_realtor(&sample_realtor("Jane Doe")).unwrap();
    let listing_id = repo.insert_listing(&sample_listing(realtor_id)).unwrap();
    assert!(listing_id > 0);

    // 日期/枚举以文本落库
    let conn = rusqlite::Connection::open(&db_path).unwrap();
    let (district, hire_date): (String, String) = conn
        .query_row(
            "SELECT l.district, r.hire_date FROM listing l JOIN realtor r ON r.id = l.realtor_id",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .unwrap();
    assert_eq!(district, "Sha Tin");
    assert_eq!(hire_date, "2020-03-16");
}

#[test]
fn test_insert_listing_with_dangling_fk_is_row_scoped_error() {
    let (_temp_db, db_path) = create_test_db().unwrap();
    let repo = EstateImportRepositoryImpl::new(&db_path).unwrap();

    // 外键约束在连接级 PRAGMA 下生效；错误应归类为单行级
    let err = repo.insert_listing(&sample_listing(9999)).unwrap_err();
    assert!(err.is_row_scoped(), "unexpected error class: {}", err);
}

#[test]
fn test_ensure_schema_is_idempotent() {
    let (_temp_db, db_path) = create_test_db().unwrap();
    let repo = EstateImportRepositoryImpl::new(&db_path).unwrap();

    // 重复建表不报错，已有数据保留
    repo.insert_realtor(&sample_realtor("Jane Doe")).unwrap();
    repo.ensure_schema().unwrap();

    let conn = rusqlite::Connection::open(&db_path).unwrap();
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM realtor", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 1);
}
