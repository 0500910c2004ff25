// ==========================================
// 校园招聘就业管理系统 - API层错误类型
// ==========================================
// 职责: 定义API层错误类型，转换Repository/导入错误为用户友好的错误消息
// 约定: 存储/解析等协作方故障对外只给一条通用提示，详细原因写日志
// ==========================================

use crate::i18n::{t, t_with_args};
use crate::importer::error::ImportError;
use crate::repository::error::RepositoryError;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 业务规则错误
    // ==========================================
    #[error("无效输入: {0}")]
    InvalidInput(String),

    #[error("资源未找到: {0}")]
    NotFound(String),

    #[error("学号重复: {0}")]
    DuplicateRegisterNumber(String),

    /// 表单/导入校验失败（带全部问题列表）
    #[error("数据验证失败: {message}")]
    ValidationError { message: String, errors: Vec<String> },

    // ==========================================
    // 协作方故障
    // ==========================================
    #[error("文件导入失败: {0}")]
    ImportError(String),

    #[error("数据库错误: {0}")]
    DatabaseError(String),
}

impl ApiError {
    /// 稳定的错误码（HTTP 响应体 code 字段）
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::InvalidInput(_) => "INVALID_INPUT",
            ApiError::NotFound(_) => "NOT_FOUND",
            ApiError::DuplicateRegisterNumber(_) => "DUPLICATE_REGISTER_NUMBER",
            ApiError::ValidationError { .. } => "VALIDATION_ERROR",
            ApiError::ImportError(_) => "IMPORT_ERROR",
            ApiError::DatabaseError(_) => "DATABASE_ERROR",
        }
    }

    /// 协作方故障: 记录详细原因，对外返回该操作的通用提示
    ///
    /// # 参数
    /// - message_key: 通用提示的 i18n 键（如 "student.create_failed"）
    /// - err: 仓储错误；NotFound / 唯一约束仍按业务错误返回
    pub fn from_collaborator(message_key: &str, err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound { .. } | RepositoryError::UniqueConstraintViolation(_) => {
                err.into()
            }
            other => {
                tracing::error!(operation = message_key, error = %other, "存储访问失败");
                ApiError::DatabaseError(t(message_key))
            }
        }
    }
}

// ==========================================
// 从 RepositoryError 转换
// ==========================================
impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound { id, .. } => {
                ApiError::NotFound(t_with_args("student.not_found", &[("id", &id)]))
            }
            RepositoryError::UniqueConstraintViolation(msg) => ApiError::DuplicateRegisterNumber(msg),
            RepositoryError::LockError(msg) => {
                ApiError::DatabaseError(format!("数据库锁获取失败: {}", msg))
            }
            RepositoryError::DatabaseConnectionError(msg)
            | RepositoryError::DatabaseQueryError(msg)
            | RepositoryError::SerializationError(msg) => ApiError::DatabaseError(msg),
        }
    }
}

// ==========================================
// 从 ImportError 转换
// ==========================================
impl From<ImportError> for ApiError {
    fn from(err: ImportError) -> Self {
        match err {
            ImportError::ValidationFailed { errors } => ApiError::ValidationError {
                message: t_with_args(
                    "import.validation_failed",
                    &[("count", &errors.len().to_string())],
                ),
                errors,
            },
            ImportError::FileNotFound(path) => {
                ApiError::NotFound(t_with_args("import.file_not_found", &[("path", &path)]))
            }
            ImportError::UnsupportedFormat(file_name) => ApiError::InvalidInput(t_with_args(
                "import.unsupported_format",
                &[("file_name", &file_name)],
            )),
            ImportError::EmptyFile => ApiError::InvalidInput(t("import.empty_file")),
            ImportError::FileReadError(_)
            | ImportError::ExcelParseError(_)
            | ImportError::CsvParseError(_) => {
                tracing::error!(error = %err, "导入文件解析失败");
                ApiError::ImportError(t("import.parse_failed"))
            }
            ImportError::PersistFailed { persisted, source } => {
                tracing::error!(persisted, error = %source, "导入中途写入失败");
                ApiError::ImportError(t("import.import_failed"))
            }
            ImportError::Repository(source) => ApiError::from_collaborator("import.import_failed", source),
        }
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_error_conversion() {
        let api_err: ApiError = RepositoryError::NotFound {
            entity: "Student".to_string(),
            id: "S001".to_string(),
        }
        .into();
        match api_err {
            ApiError::NotFound(msg) => assert!(msg.contains("S001")),
            other => panic!("Expected NotFound, got {:?}", other),
        }

        let api_err: ApiError =
            RepositoryError::UniqueConstraintViolation("students.register_number".to_string()).into();
        assert_eq!(api_err.code(), "DUPLICATE_REGISTER_NUMBER");
    }

    #[test]
    fn test_collaborator_failure_is_generic() {
        let api_err = ApiError::from_collaborator(
            "student.load_failed",
            RepositoryError::DatabaseQueryError("disk I/O error".to_string()),
        );
        match api_err {
            ApiError::DatabaseError(msg) => assert!(!msg.contains("disk I/O")),
            other => panic!("Expected DatabaseError, got {:?}", other),
        }
    }

    #[test]
    fn test_connection_failure_is_database_error() {
        let api_err: ApiError =
            RepositoryError::DatabaseConnectionError("/srv/students.db: unable to open".to_string())
                .into();
        assert_eq!(api_err.code(), "DATABASE_ERROR");

        let api_err = ApiError::from_collaborator(
            "dashboard.load_failed",
            RepositoryError::DatabaseConnectionError("/srv/students.db: unable to open".to_string()),
        );
        match api_err {
            ApiError::DatabaseError(msg) => assert!(!msg.contains("/srv/students.db")),
            other => panic!("Expected DatabaseError, got {:?}", other),
        }
    }

    #[test]
    fn test_import_validation_keeps_all_errors() {
        let api_err: ApiError = ImportError::ValidationFailed {
            errors: vec![
                "Row 2: Name is required".to_string(),
                "Row 3: Invalid email format".to_string(),
            ],
        }
        .into();
        match api_err {
            ApiError::ValidationError { errors, .. } => assert_eq!(errors.len(), 2),
            other => panic!("Expected ValidationError, got {:?}", other),
        }
    }
}
