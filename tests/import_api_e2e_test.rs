// ==========================================
// 导入 API 端到端测试
// ==========================================
// 模拟前端上传文件的完整流程: 预览 → 导入 → 看板
// ==========================================

use placement_tracker::api::ApiError;
use placement_tracker::engine::StudentFilter;
use std::io::Write;

mod test_helpers;
use test_helpers::{create_test_state, csv_bytes, row, StudentBuilder};

/// 测试导入 API 完整流程
#[tokio::test]
async fn test_import_api_full_flow() {
    let (_temp_file, state) = create_test_state().expect("创建测试状态失败");

    let bytes = csv_bytes(&[
        row("21CS001", "John Doe", "Computer Science", "Google", "accepted"),
        row("21CS002", "Jane Smith", "Computer Science", "Microsoft", "pending"),
        row("21EE003", "Ravi Kumar", "Electrical Engineering", "", ""),
    ]);

    // 预览不写库
    let preview = state.import_api.preview_import("students.csv", &bytes).await.unwrap();
    assert!(preview.is_valid, "{:?}", preview.errors);
    assert_eq!(preview.preview_count, 3);
    assert!(state
        .student_api
        .list_students(&StudentFilter::default())
        .await
        .unwrap()
        .is_empty());

    // 导入
    let response = state.import_api.import_students("students.csv", &bytes).await.unwrap();
    assert_eq!(response.total_rows, 3);
    assert_eq!(response.imported, 3);
    assert!(!response.batch_id.is_empty());

    let stats = state.dashboard_api.get_dashboard_stats().await.unwrap();
    assert_eq!(stats.total_students, 3);
    assert_eq!(stats.placed_students, 1);
    assert_eq!(stats.total_companies, 2);
    assert_eq!(stats.branch_wise_stats["Computer Science"].total, 2);
    assert_eq!(stats.branch_wise_stats["Computer Science"].placed, 1);
}

/// 任一行有错误则整批不导入
#[tokio::test]
async fn test_import_rejects_whole_batch_on_any_error() {
    let (_temp_file, state) = create_test_state().unwrap();

    let bytes = csv_bytes(&[
        row("21CS001", "John Doe", "Computer Science", "Google", "accepted"),
        row("21CS002", "", "Computer Science", "", ""),
        row("21CS003", "Asha Rao", "Underwater Basket Weaving", "", ""),
    ]);

    let err = state
        .import_api
        .import_students("students.csv", &bytes)
        .await
        .unwrap_err();
    match err {
        ApiError::ValidationError { errors, .. } => {
            assert_eq!(errors.len(), 2);
            assert_eq!(errors[0], "Row 3: Name is required");
            assert!(errors[1].starts_with("Row 4: Invalid branch \"Underwater Basket Weaving\""));
        }
        other => panic!("Expected ValidationError, got {:?}", other),
    }

    let stats = state.dashboard_api.get_dashboard_stats().await.unwrap();
    assert_eq!(stats.total_students, 0);
}

/// 与库内已有学号重复
#[tokio::test]
async fn test_import_detects_existing_register_numbers() {
    let (_temp_file, state) = create_test_state().unwrap();
    state
        .student_api
        .create_student(StudentBuilder::new("21CS001").build())
        .await
        .unwrap();

    let bytes = csv_bytes(&[row("21CS001", "John Doe", "Computer Science", "", "")]);

    let preview = state.import_api.preview_import("students.csv", &bytes).await.unwrap();
    assert!(!preview.is_valid);
    assert_eq!(
        preview.errors,
        vec!["Row 2: Register number 21CS001 already exists in database".to_string()]
    );

    assert!(matches!(
        state.import_api.import_students("students.csv", &bytes).await,
        Err(ApiError::ValidationError { .. })
    ));
}

/// 模板本身可直接导入
#[tokio::test]
async fn test_template_imports_cleanly() {
    let (_temp_file, state) = create_test_state().unwrap();

    let template = state.import_api.template_csv().unwrap();
    let response = state
        .import_api
        .import_students("student_import_template.csv", &template)
        .await
        .unwrap();
    assert_eq!(response.imported, 2);

    let stats = state.dashboard_api.get_dashboard_stats().await.unwrap();
    assert_eq!(stats.placed_students, 2);
    assert_eq!(stats.highest_package, 25.0);
}

/// 本地文件导入
#[tokio::test]
async fn test_import_local_file() {
    let (_temp_file, state) = create_test_state().unwrap();

    let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
    file.write_all(&csv_bytes(&[row("21CS009", "Meera Iyer", "Computer Science", "Adobe", "accepted")]))
        .unwrap();
    file.flush().unwrap();

    let response = state
        .import_api
        .import_file(file.path().to_str().unwrap())
        .await
        .unwrap();
    assert_eq!(response.imported, 1);

    let missing = state.import_api.import_file("/nonexistent/students.csv").await;
    assert!(matches!(missing, Err(ApiError::NotFound(_))));
}

/// 文件格式与空文件
#[tokio::test]
async fn test_unsupported_and_empty_files() {
    let (_temp_file, state) = create_test_state().unwrap();

    let err = state
        .import_api
        .import_students("students.pdf", b"%PDF-1.4")
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::InvalidInput(_)));

    let header_only = csv_bytes(&[]);
    let err = state
        .import_api
        .import_students("students.csv", &header_only)
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::InvalidInput(_)));

    let preview = state
        .import_api
        .preview_import("students.csv", &header_only)
        .await
        .unwrap();
    assert!(preview.is_valid);
    assert_eq!(preview.preview_count, 0);
}

/// 非有限年薪按 0 入库，导入后列表与看板仍可读取
#[tokio::test]
async fn test_non_finite_package_imports_as_zero() {
    let (_temp_file, state) = create_test_state().unwrap();

    let mut huge = row("21CS001", "John Doe", "Computer Science", "Google", "accepted");
    huge[9] = "1e400";
    let mut infinite = row("21CS002", "Jane Smith", "Computer Science", "Microsoft", "accepted");
    infinite[9] = "Infinity";
    let bytes = csv_bytes(&[huge, infinite]);

    let preview = state.import_api.preview_import("students.csv", &bytes).await.unwrap();
    assert!(preview.is_valid, "{:?}", preview.errors);
    assert!(preview
        .students
        .iter()
        .all(|s| s.placement_offers[0].package_lpa == 0.0));

    let response = state.import_api.import_students("students.csv", &bytes).await.unwrap();
    assert_eq!(response.imported, 2);

    let students = state
        .student_api
        .list_students(&StudentFilter::default())
        .await
        .unwrap();
    assert_eq!(students.len(), 2);

    let stats = state.dashboard_api.get_dashboard_stats().await.unwrap();
    assert_eq!(stats.placed_students, 2);
    assert_eq!(stats.highest_package, 0.0);
}
