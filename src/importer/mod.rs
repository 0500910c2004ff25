// ==========================================
// 校园招聘就业管理系统 - 导入层
// ==========================================
// 职责: 电子表格批量导入学生档案
// 支持: Excel (.xlsx/.xls), CSV
// 流程: file_parser → field_mapper → data_cleaner → student_validator → student_importer
// ==========================================

// 模块声明
pub mod data_cleaner;
pub mod error;
pub mod field_mapper;
pub mod file_parser;
pub mod importer_trait;
pub mod student_importer;
pub mod student_validator;
pub mod template;

// 重导出核心类型
pub use data_cleaner::DataCleaner;
pub use error::{ImportError, ImportResult};
pub use field_mapper::{FieldMapper, StudentRow, TEMPLATE_HEADERS};
pub use file_parser::{CsvParser, ExcelParser, UniversalFileParser};
pub use importer_trait::{FileParser, RawRow};
pub use student_importer::{ImportOutcome, StudentImporter};
pub use student_validator::{validate_and_transform, StudentValidator, ValidationResult};
pub use template::{sample_rows, template_csv_bytes, write_template_csv};
