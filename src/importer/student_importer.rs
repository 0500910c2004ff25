// ==========================================
// 校园招聘就业管理系统 - 学生档案导入器
// ==========================================
// 职责: 整合导入流程，从文件到数据库
// 流程: 解析 → 读取已有学号 → 映射/清洗/校验 → 全有或全无 → 逐条落库
// ==========================================

use crate::importer::error::{ImportError, ImportResult};
use crate::importer::file_parser::UniversalFileParser;
use crate::importer::importer_trait::RawRow;
use crate::importer::student_validator::{StudentValidator, ValidationResult};
use crate::repository::StudentRepository;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, info, instrument, warn};
use uuid::Uuid;

/// 导入结果摘要
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportOutcome {
    pub batch_id: String,
    /// 数据行数（不含表头）
    pub total_rows: usize,
    /// 落库的学生档案数
    pub imported: usize,
    /// 行级错误（成功导入时为空）
    pub errors: Vec<String>,
    pub elapsed_ms: u64,
}

// ==========================================
// StudentImporter
// ==========================================
pub struct StudentImporter<R>
where
    R: StudentRepository + ?Sized,
{
    repo: Arc<R>,
    file_parser: UniversalFileParser,
}

impl<R> StudentImporter<R>
where
    R: StudentRepository + ?Sized,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self {
            repo,
            file_parser: UniversalFileParser,
        }
    }

    /// 预览: 解析并校验上传文件，不写库
    ///
    /// # 参数
    /// - file_name: 上传文件名（用于识别格式）
    /// - bytes: 文件内容
    #[instrument(skip(self, bytes), fields(size = bytes.len()))]
    pub async fn preview(&self, file_name: &str, bytes: &[u8]) -> ImportResult<ValidationResult> {
        let rows = self.file_parser.parse_upload(file_name, bytes)?;
        debug!(total_rows = rows.len(), "文件解析完成");
        self.validate(&rows).await
    }

    /// 导入上传文件
    #[instrument(skip(self, bytes), fields(size = bytes.len()))]
    pub async fn import(&self, file_name: &str, bytes: &[u8]) -> ImportResult<ImportOutcome> {
        let rows = self.file_parser.parse_upload(file_name, bytes)?;
        self.import_rows(rows).await
    }

    /// 导入本地文件（.xlsx/.xls/.csv）
    #[instrument(skip(self, file_path))]
    pub async fn import_file<P: AsRef<Path> + Send>(&self, file_path: P) -> ImportResult<ImportOutcome> {
        let path = file_path.as_ref();
        info!(file = %path.display(), "开始导入本地文件");
        let rows = self.file_parser.parse(path)?;
        self.import_rows(rows).await
    }

    async fn validate(&self, rows: &[RawRow]) -> ImportResult<ValidationResult> {
        let existing = self.repo.list_register_numbers().await?;
        debug!(existing = existing.len(), "已读取库内学号");

        let result = StudentValidator::for_today().validate_and_transform(rows, &existing);
        if !result.is_valid {
            warn!(errors = result.errors.len(), "导入数据校验未通过");
        }
        Ok(result)
    }

    async fn import_rows(&self, rows: Vec<RawRow>) -> ImportResult<ImportOutcome> {
        let start_time = Instant::now();
        let batch_id = Uuid::new_v4().to_string();
        let total_rows = rows.len();
        info!(batch_id = %batch_id, total_rows, "开始导入学生档案");

        if rows.is_empty() {
            return Err(ImportError::EmptyFile);
        }

        // === 校验（全有或全无）===
        let students = self.validate(&rows).await?.ensure_valid()?;
        debug!(students = students.len(), "校验通过");

        // === 逐条落库 ===
        let mut imported = 0;
        for student in students {
            let register_number = student.register_number.clone();
            if let Err(source) = self.repo.insert(student).await {
                error!(
                    batch_id = %batch_id,
                    register_number = %register_number,
                    persisted = imported,
                    error = %source,
                    "学生档案写入失败，中止导入"
                );
                return Err(ImportError::PersistFailed {
                    persisted: imported,
                    source,
                });
            }
            imported += 1;
        }

        let elapsed_ms = start_time.elapsed().as_millis() as u64;
        info!(
            batch_id = %batch_id,
            total = total_rows,
            imported,
            elapsed_ms,
            "学生档案导入完成"
        );

        Ok(ImportOutcome {
            batch_id,
            total_rows,
            imported,
            errors: Vec::new(),
            elapsed_ms,
        })
    }
}
