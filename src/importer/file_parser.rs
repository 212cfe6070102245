// ==========================================
// 地产数据导入系统 - CSV 行读取器
// ==========================================
// 职责: 按行流式产出 列名 → 单元格文本 的映射
// 支持: 仅 CSV（首行为表头，列顺序无关）
// ==========================================

use crate::importer::error::{ImportError, ImportResult};
use csv::{ReaderBuilder, StringRecordsIntoIter};
use std::collections::HashMap;
use std::fs::File;
use std::path::Path;

// ==========================================
// RawRow - 原始数据行
// ==========================================
// row_number 为数据行序号（表头不计，从 1 开始），
// 跳过的空行不占用序号。
#[derive(Debug, Clone)]
pub struct RawRow {
    pub row_number: usize,
    pub cells: HashMap<String, String>,
}

// ==========================================
// CsvRowReader - 流式 CSV 读取器
// ==========================================
// 一次只持有一行；行由调用方逐条消费后即丢弃
pub struct CsvRowReader {
    headers: Vec<String>,
    records: StringRecordsIntoIter<File>,
    next_row_number: usize,
}

impl CsvRowReader {
    /// 打开 CSV 文件并读取表头
    ///
    /// # 返回
    /// - Ok(CsvRowReader): 就绪的读取器
    /// - Err: 文件不存在 / 扩展名不是 .csv / 表头读取失败
    pub fn open(file_path: &Path) -> ImportResult<Self> {
        if !file_path.exists() {
            return Err(ImportError::FileNotFound(
                file_path.display().to_string(),
            ));
        }

        // 检查扩展名
        if let Some(ext) = file_path.extension() {
            if !ext.eq_ignore_ascii_case("csv") {
                return Err(ImportError::UnsupportedFormat(
                    ext.to_string_lossy().to_string(),
                ));
            }
        }

        let file = File::open(file_path)?;
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true) // 允许行长度不一致
            .from_reader(file);

        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        Ok(Self {
            headers,
            records: reader.into_records(),
            next_row_number: 1,
        })
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }
}

impl Iterator for CsvRowReader {
    type Item = ImportResult<RawRow>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let record = match self.records.next()? {
                Ok(record) => record,
                Err(e) => return Some(Err(e.into())),
            };

            let mut cells = HashMap::new();
            for (col_idx, value) in record.iter().enumerate() {
                if let Some(header) = self.headers.get(col_idx) {
                    cells.insert(header.clone(), value.trim().to_string());
                }
            }

            // 跳过完全空白的行（不占用行号）
            if cells.values().all(|v| v.is_empty()) {
                continue;
            }

            let row_number = self.next_row_number;
            self.next_row_number += 1;

            return Some(Ok(RawRow { row_number, cells }));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::Builder;

    fn write_csv(content: &str) -> tempfile::NamedTempFile {
        let mut temp_file = Builder::new().suffix(".csv").tempfile().unwrap();
        write!(temp_file, "{}", content).unwrap();
        temp_file
    }

    #[test]
    fn test_csv_reader_basic() {
        let temp_file = write_csv("name,phone,email\nJane Doe,555-0100,jane@x.com\n");

        let reader = CsvRowReader::open(temp_file.path()).unwrap();
        let rows: Vec<RawRow> = reader.map(|r| r.unwrap()).collect();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].row_number, 1);
        assert_eq!(rows[0].cells.get("name"), Some(&"Jane Doe".to_string()));
        assert_eq!(rows[0].cells.get("phone"), Some(&"555-0100".to_string()));
    }

    #[test]
    fn test_csv_reader_file_not_found() {
        let result = CsvRowReader::open(Path::new("non_existent.csv"));
        assert!(matches!(result, Err(ImportError::FileNotFound(_))));
    }

    #[test]
    fn test_csv_reader_rejects_other_extensions() {
        let temp_file = Builder::new().suffix(".xlsx").tempfile().unwrap();
        let result = CsvRowReader::open(temp_file.path());
        assert!(matches!(result, Err(ImportError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_csv_reader_skips_blank_rows() {
        let temp_file = write_csv("name,phone\nJane,111\n,\nBob,222\n");

        let reader = CsvRowReader::open(temp_file.path()).unwrap();
        let rows: Vec<RawRow> = reader.map(|r| r.unwrap()).collect();

        // 空行被跳过且不占用行号
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].row_number, 1);
        assert_eq!(rows[1].row_number, 2);
        assert_eq!(rows[1].cells.get("name"), Some(&"Bob".to_string()));
    }

    #[test]
    fn test_csv_reader_trims_headers_and_cells() {
        let temp_file = write_csv(" name , phone \n  Jane  , 111 \n");

        let reader = CsvRowReader::open(temp_file.path()).unwrap();
        assert_eq!(reader.headers(), &["name".to_string(), "phone".to_string()]);

        let rows: Vec<RawRow> = reader.map(|r| r.unwrap()).collect();
        assert_eq!(rows[0].cells.get("name"), Some(&"Jane".to_string()));
    }
}
