// ==========================================
// 地产数据导入系统 - 示例 CSV 生成器
// ==========================================
// 生成可直接导入的示例文件，便于试运行:
//   cargo run --bin generate_sample_csv [输出目录]
//   estate-data-import --entity realtor --file realtors.csv
//   estate-data-import --entity listing --file listings.csv
// ==========================================

use std::error::Error;
use std::path::{Path, PathBuf};

fn main() -> Result<(), Box<dyn Error>> {
    let out_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));

    let realtor_path = out_dir.join("realtors.csv");
    let listing_path = out_dir.join("listings.csv");

    write_realtors(&realtor_path)?;
    write_listings(&listing_path)?;

    println!("已生成示例文件:");
    println!("  {}", realtor_path.display());
    println!("  {}", listing_path.display());

    Ok(())
}

fn write_realtors(path: &Path) -> Result<(), Box<dyn Error>> {
    let mut writer = csv::Writer::from_path(path)?;

    writer.write_record([
        "name", "photo", "description", "phone", "email", "is_mvp", "hire_date",
    ])?;
    writer.write_record([
        "Jane Doe",
        "photos/realtors/jane.jpg",
        "资深港岛区经纪人",
        "555-0100",
        "jane@example.com",
        "true",
        "2020-03-16",
    ])?;
    writer.write_record([
        "Sam Lee",
        "",
        "",
        "555-0101",
        "sam@example.com",
        "false",
        "",
    ])?;
    writer.write_record([
        "Wing Chan",
        "photos/realtors/wing.jpg",
        "新界西专线",
        "555-0102",
        "wing@example.com",
        "",
        "2023-11-01",
    ])?;

    writer.flush()?;
    Ok(())
}

fn write_listings(path: &Path) -> Result<(), Box<dyn Error>> {
    let mut writer = csv::Writer::from_path(path)?;

    writer.write_record([
        "realtor_id",
        "title",
        "address",
        "street",
        "district",
        "description",
        "price",
        "bedrooms",
        "bathrooms",
        "clubhouse",
        "sqft",
        "estate_size",
        "is_published",
        "list_date",
        "photo_main",
        "photo_1",
        "photo_2",
        "photo_3",
        "photo_4",
        "photo_5",
        "photo_6",
    ])?;
    writer.write_record([
        "1",
        "City One 三房海景",
        "City One, Block 12",
        "Ngan Shing Street",
        "Sha Tin",
        "近地铁，开扬望河景",
        "6800000",
        "3",
        "1.5",
        "1",
        "620",
        "52.0",
        "true",
        "2025-06-01",
        "photos/listings/c1-main.jpg",
        "photos/listings/c1-1.jpg",
        "",
        "",
        "",
        "",
        "",
    ])?;
    writer.write_record([
        "2",
        "坚尼地城两房",
        "Smithfield Terrace",
        "Smithfield Road",
        "Central & Western",
        "",
        "8900000",
        "2",
        "1",
        "0",
        "480",
        "",
        "false",
        "",
        "",
        "",
        "",
        "",
        "",
        "",
        "",
    ])?;

    writer.flush()?;
    Ok(())
}
