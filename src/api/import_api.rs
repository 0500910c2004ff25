// ==========================================
// 校园招聘就业管理系统 - 批量导入 API
// ==========================================
// 职责: 封装电子表格导入（预览 / 导入 / 模板下载）
// 约束: 全有或全无，任一行有错误则不写入任何数据
// ==========================================

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;
use tracing::info;

use crate::api::error::{ApiError, ApiResult};
use crate::domain::student::NewStudent;
use crate::i18n::t_with_args;
use crate::importer::{template_csv_bytes, StudentImporter};
use crate::repository::StudentRepository;

/// 模板下载文件名
pub const TEMPLATE_FILE_NAME: &str = "student_import_template.csv";

/// 导入预览响应
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportPreview {
    pub is_valid: bool,
    pub errors: Vec<String>,
    /// 去重后的学生数
    pub preview_count: usize,
    pub students: Vec<NewStudent>,
}

/// 导入API响应
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportApiResponse {
    pub batch_id: String,
    /// 数据行数（不含表头）
    pub total_rows: usize,
    /// 新增学生档案数
    pub imported: usize,
    pub elapsed_ms: u64,
    pub message: String,
}

// ==========================================
// ImportApi - 批量导入 API
// ==========================================
pub struct ImportApi {
    importer: StudentImporter<dyn StudentRepository>,
}

impl ImportApi {
    pub fn new(repo: Arc<dyn StudentRepository>) -> Self {
        Self {
            importer: StudentImporter::new(repo),
        }
    }

    /// 预览上传文件（只校验，不写库）
    ///
    /// # 参数
    /// - file_name: 上传文件名（决定解析格式）
    /// - bytes: 文件内容
    pub async fn preview_import(&self, file_name: &str, bytes: &[u8]) -> ApiResult<ImportPreview> {
        let result = self.importer.preview(file_name, bytes).await?;
        Ok(ImportPreview {
            is_valid: result.is_valid,
            errors: result.errors,
            preview_count: result.students.len(),
            students: result.students,
        })
    }

    /// 导入上传文件
    ///
    /// # 返回
    /// - Err(ApiError::ValidationError): 存在行级错误（携带全部错误），未写入任何数据
    pub async fn import_students(&self, file_name: &str, bytes: &[u8]) -> ApiResult<ImportApiResponse> {
        let outcome = self.importer.import(file_name, bytes).await?;
        info!(batch_id = %outcome.batch_id, imported = outcome.imported, "上传文件导入完成");
        Ok(ImportApiResponse {
            message: t_with_args("import.imported", &[("count", &outcome.imported.to_string())]),
            batch_id: outcome.batch_id,
            total_rows: outcome.total_rows,
            imported: outcome.imported,
            elapsed_ms: outcome.elapsed_ms,
        })
    }

    /// 导入本地文件（命令行/运维场景）
    pub async fn import_file(&self, file_path: &str) -> ApiResult<ImportApiResponse> {
        if file_path.trim().is_empty() {
            return Err(ApiError::InvalidInput("文件路径不能为空".to_string()));
        }
        let outcome = self.importer.import_file(Path::new(file_path.trim())).await?;
        Ok(ImportApiResponse {
            message: t_with_args("import.imported", &[("count", &outcome.imported.to_string())]),
            batch_id: outcome.batch_id,
            total_rows: outcome.total_rows,
            imported: outcome.imported,
            elapsed_ms: outcome.elapsed_ms,
        })
    }

    /// 导入模板（CSV 字节）
    pub fn template_csv(&self) -> ApiResult<Vec<u8>> {
        Ok(template_csv_bytes()?)
    }
}
