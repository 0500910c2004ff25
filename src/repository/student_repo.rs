// ==========================================
// 校园招聘就业管理系统 - 学生档案仓储
// ==========================================
// 职责: students 表的 CRUD（文档式存储，Offer 随档案整体读写）
// 红线: Repository 不含业务规则，只做数据访问
// ==========================================

use crate::db::{
    ensure_schema, newer_schema_version, open_sqlite_connection, CURRENT_SCHEMA_VERSION,
};
use crate::domain::student::{NewStudent, Student, StudentPatch};
use crate::repository::error::{RepositoryError, RepositoryResult};
use async_trait::async_trait;
use chrono::{SecondsFormat, Utc};
use rusqlite::{params, Connection, OptionalExtension};
use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

// ==========================================
// StudentRepository Trait
// ==========================================
// 实现者: SqliteStudentRepository
#[async_trait]
pub trait StudentRepository: Send + Sync {
    /// 新增档案；id / created_at / updated_at 由存储层分配
    ///
    /// # 返回
    /// - Err(UniqueConstraintViolation): 学号已存在
    async fn insert(&self, student: NewStudent) -> RepositoryResult<Student>;

    async fn get(&self, id: &str) -> RepositoryResult<Option<Student>>;

    async fn find_by_register_number(&self, register_number: &str) -> RepositoryResult<Option<Student>>;

    /// 全部档案，按 created_at 倒序
    async fn list_all(&self) -> RepositoryResult<Vec<Student>>;

    async fn list_by_branch(&self, branch: &str) -> RepositoryResult<Vec<Student>>;

    /// 已入库学号集合（导入查重用）
    async fn list_register_numbers(&self) -> RepositoryResult<HashSet<String>>;

    /// 部分更新
    ///
    /// # 返回
    /// - Err(NotFound): id 不存在
    async fn update(&self, id: &str, patch: StudentPatch) -> RepositoryResult<Student>;

    /// 删除档案（连同其 Offer）
    ///
    /// # 返回
    /// - Err(NotFound): id 不存在
    async fn delete(&self, id: &str) -> RepositoryResult<()>;
}

// ==========================================
// SqliteStudentRepository
// ==========================================
pub struct SqliteStudentRepository {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteStudentRepository {
    /// 打开数据库并确保表结构存在
    ///
    /// # 参数
    /// - db_path: 数据库文件路径
    pub fn new(db_path: &str) -> RepositoryResult<Self> {
        let conn = open_sqlite_connection(db_path).map_err(|e| {
            RepositoryError::DatabaseConnectionError(format!("{}: {}", db_path, e))
        })?;
        ensure_schema(&conn)?;
        if let Some(version) = newer_schema_version(&conn)? {
            tracing::warn!(
                db_path,
                db_version = version,
                code_version = CURRENT_SCHEMA_VERSION,
                "数据库 schema 版本高于当前程序"
            );
        }
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// 从已有连接创建仓储实例（调用方负责 schema）
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    fn get_conn(&self) -> RepositoryResult<std::sync::MutexGuard<Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    fn timestamp(student: &Student) -> (String, String) {
        (
            student.created_at.to_rfc3339_opts(SecondsFormat::Micros, true),
            student.updated_at.to_rfc3339_opts(SecondsFormat::Micros, true),
        )
    }

    fn decode(doc: String) -> rusqlite::Result<Student> {
        serde_json::from_str(&doc).map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
        })
    }

    fn query_docs(conn: &Connection, sql: &str, args: &[&dyn rusqlite::ToSql]) -> RepositoryResult<Vec<Student>> {
        let mut stmt = conn.prepare(sql)?;
        let rows = stmt.query_map(args, |row| Self::decode(row.get(0)?))?;
        let mut students = Vec::new();
        for row in rows {
            students.push(row?);
        }
        Ok(students)
    }

    fn get_sync(conn: &Connection, id: &str) -> RepositoryResult<Option<Student>> {
        let student = conn
            .query_row(
                "SELECT doc FROM students WHERE id = ?1",
                params![id],
                |row| Self::decode(row.get(0)?),
            )
            .optional()?;
        Ok(student)
    }
}

#[async_trait]
impl StudentRepository for SqliteStudentRepository {
    async fn insert(&self, student: NewStudent) -> RepositoryResult<Student> {
        let student = student.into_student(Uuid::new_v4().to_string(), Utc::now());
        let doc = serde_json::to_string(&student)?;
        let (created_at, updated_at) = Self::timestamp(&student);

        let conn = self.get_conn()?;
        conn.execute(
            r#"
            INSERT INTO students (id, register_number, branch, doc, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
            params![
                student.id,
                student.register_number,
                student.branch,
                doc,
                created_at,
                updated_at
            ],
        )?;

        tracing::debug!(id = %student.id, register_number = %student.register_number, "学生档案已写入");
        Ok(student)
    }

    async fn get(&self, id: &str) -> RepositoryResult<Option<Student>> {
        let conn = self.get_conn()?;
        Self::get_sync(&conn, id)
    }

    async fn find_by_register_number(&self, register_number: &str) -> RepositoryResult<Option<Student>> {
        let conn = self.get_conn()?;
        let student = conn
            .query_row(
                "SELECT doc FROM students WHERE register_number = ?1",
                params![register_number],
                |row| Self::decode(row.get(0)?),
            )
            .optional()?;
        Ok(student)
    }

    async fn list_all(&self) -> RepositoryResult<Vec<Student>> {
        let conn = self.get_conn()?;
        Self::query_docs(
            &conn,
            "SELECT doc FROM students ORDER BY created_at DESC, rowid DESC",
            &[],
        )
    }

    async fn list_by_branch(&self, branch: &str) -> RepositoryResult<Vec<Student>> {
        let conn = self.get_conn()?;
        Self::query_docs(
            &conn,
            "SELECT doc FROM students WHERE branch = ?1 ORDER BY created_at DESC, rowid DESC",
            &[&branch],
        )
    }

    async fn list_register_numbers(&self) -> RepositoryResult<HashSet<String>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare("SELECT register_number FROM students")?;
        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;
        let mut numbers = HashSet::new();
        for row in rows {
            numbers.insert(row?);
        }
        Ok(numbers)
    }

    async fn update(&self, id: &str, patch: StudentPatch) -> RepositoryResult<Student> {
        let conn = self.get_conn()?;
        let mut student = Self::get_sync(&conn, id)?.ok_or_else(|| RepositoryError::NotFound {
            entity: "Student".to_string(),
            id: id.to_string(),
        })?;

        student.apply_patch(patch, Utc::now());
        let doc = serde_json::to_string(&student)?;
        let (_, updated_at) = Self::timestamp(&student);

        conn.execute(
            r#"
            UPDATE students
            SET register_number = ?2, branch = ?3, doc = ?4, updated_at = ?5
            WHERE id = ?1
            "#,
            params![id, student.register_number, student.branch, doc, updated_at],
        )?;

        Ok(student)
    }

    async fn delete(&self, id: &str) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        let affected = conn.execute("DELETE FROM students WHERE id = ?1", params![id])?;
        if affected == 0 {
            return Err(RepositoryError::NotFound {
                entity: "Student".to_string(),
                id: id.to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::configure_sqlite_connection;

    #[test]
    fn test_open_unreachable_path_is_connection_error() {
        let result = SqliteStudentRepository::new("/nonexistent-dir/placement/students.db");
        assert!(matches!(
            result,
            Err(RepositoryError::DatabaseConnectionError(msg)) if msg.contains("/nonexistent-dir")
        ));
    }

    #[tokio::test]
    async fn test_open_database_from_newer_version() {
        let temp_file = tempfile::NamedTempFile::new().unwrap();
        let db_path = temp_file.path().to_str().unwrap();
        {
            let conn = open_sqlite_connection(db_path).unwrap();
            ensure_schema(&conn).unwrap();
            conn.execute("INSERT INTO schema_version (version) VALUES (?1)", [CURRENT_SCHEMA_VERSION + 1])
                .unwrap();
        }

        let repo = SqliteStudentRepository::new(db_path).unwrap();
        assert!(repo.list_all().await.unwrap().is_empty());
    }

    fn repo() -> SqliteStudentRepository {
        let conn = Connection::open_in_memory().unwrap();
        configure_sqlite_connection(&conn).unwrap();
        ensure_schema(&conn).unwrap();
        SqliteStudentRepository::from_connection(Arc::new(Mutex::new(conn)))
    }

    fn new_student(reg: &str, branch: &str) -> NewStudent {
        NewStudent {
            register_number: reg.to_string(),
            name: format!("Student {}", reg),
            email: format!("{}@college.edu", reg.to_lowercase()),
            phone: String::new(),
            branch: branch.to_string(),
            batch: "2021-2025".to_string(),
            cgpa: 8.0,
            placement_offers: vec![],
        }
    }

    #[tokio::test]
    async fn test_insert_and_get() {
        let repo = repo();
        let created = repo.insert(new_student("21CS001", "Computer Science")).await.unwrap();

        let loaded = repo.get(&created.id).await.unwrap().unwrap();
        assert_eq!(loaded, created);
        assert!(repo.get("missing").await.unwrap().is_none());

        let by_reg = repo.find_by_register_number("21CS001").await.unwrap().unwrap();
        assert_eq!(by_reg.id, created.id);
    }

    #[tokio::test]
    async fn test_duplicate_register_number_is_unique_violation() {
        let repo = repo();
        repo.insert(new_student("21CS001", "Computer Science")).await.unwrap();
        let err = repo
            .insert(new_student("21CS001", "Civil"))
            .await
            .unwrap_err();
        assert!(matches!(err, RepositoryError::UniqueConstraintViolation(_)));
    }

    #[tokio::test]
    async fn test_list_all_newest_first() {
        let repo = repo();
        repo.insert(new_student("A1", "Civil")).await.unwrap();
        repo.insert(new_student("A2", "Mechanical")).await.unwrap();
        repo.insert(new_student("A3", "Civil")).await.unwrap();

        let regs: Vec<String> = repo
            .list_all()
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.register_number)
            .collect();
        assert_eq!(regs, vec!["A3", "A2", "A1"]);

        let civil = repo.list_by_branch("Civil").await.unwrap();
        assert_eq!(civil.len(), 2);

        let numbers = repo.list_register_numbers().await.unwrap();
        assert!(numbers.contains("A2"));
        assert_eq!(numbers.len(), 3);
    }

    #[tokio::test]
    async fn test_update_and_delete() {
        let repo = repo();
        let created = repo.insert(new_student("21CS001", "Computer Science")).await.unwrap();

        let updated = repo
            .update(
                &created.id,
                StudentPatch {
                    branch: Some("Civil".to_string()),
                    cgpa: Some(9.1),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.branch, "Civil");
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at >= created.updated_at);
        assert_eq!(repo.list_by_branch("Civil").await.unwrap().len(), 1);

        repo.delete(&created.id).await.unwrap();
        assert!(matches!(
            repo.delete(&created.id).await.unwrap_err(),
            RepositoryError::NotFound { .. }
        ));
        assert!(matches!(
            repo.update(&created.id, StudentPatch::default()).await.unwrap_err(),
            RepositoryError::NotFound { .. }
        ));
    }
}
