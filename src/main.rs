// ==========================================
// 地产数据导入系统 - 命令行入口
// ==========================================
// 用法: estate-data-import --entity realtor --file realtors.csv
// 退出码: 0 = 运行完成（含跳过行）；1 = 运行级错误中止；2 = 参数错误
// ==========================================

use clap::Parser;
use estate_data_import::config::ImportConfig;
use estate_data_import::domain::EntityKind;
use estate_data_import::{logging, ImportContext};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "estate-data-import",
    version,
    about = "从 CSV 文件导入经纪人/房源数据到数据库"
)]
struct Args {
    /// 实体种类（realtor 或 listing）
    #[arg(long)]
    entity: String,

    /// CSV 文件路径（首行为表头，按列名匹配）
    #[arg(long)]
    file: PathBuf,

    /// 数据库文件路径（覆盖 ESTATE_DB_PATH 与默认值）
    #[arg(long)]
    db: Option<String>,

    /// 日志文件路径（覆盖 ESTATE_IMPORT_LOG 与默认值）
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();

    let Some(kind) = EntityKind::parse(&args.entity) else {
        eprintln!("错误: 不支持的实体种类 '{}'（可选: realtor / listing）", args.entity);
        std::process::exit(2);
    };

    // 命令行参数 > 环境变量 > 默认值
    let mut config = ImportConfig::from_env();
    if let Some(db) = args.db {
        config.db_path = db;
    }
    if let Some(log_file) = args.log_file {
        config.log_path = log_file;
    }

    if let Err(e) = logging::init(&config.log_path) {
        eprintln!("错误: 无法打开日志文件 {}: {}", config.log_path.display(), e);
        std::process::exit(1);
    }

    tracing::info!("==================================================");
    tracing::info!("{}", estate_data_import::APP_NAME);
    tracing::info!("系统版本: {}", estate_data_import::VERSION);
    tracing::info!("==================================================");

    let context = match ImportContext::open(config) {
        Ok(context) => context,
        Err(e) => {
            tracing::error!(error = %e, "上下文初始化失败");
            std::process::exit(1);
        }
    };

    match context.run(kind, &args.file) {
        Ok(summary) => {
            context.close();
            println!(
                "导入完成: 总行数 {}, 成功 {}, 跳过 {}, 错误 {}",
                summary.total_rows, summary.imported, summary.skipped, summary.errored
            );
        }
        Err(e) => {
            tracing::error!(error = %e, "导入运行中止");
            context.close();
            std::process::exit(1);
        }
    }
}
