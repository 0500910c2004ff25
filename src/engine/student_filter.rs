// ==========================================
// 校园招聘就业管理系统 - 学生列表筛选
// ==========================================
// 职责: 关键字搜索（姓名/学号/邮箱，不区分大小写）+ 专业筛选
// ==========================================

use crate::domain::student::Student;
use serde::{Deserialize, Serialize};

/// 专业筛选的“全部”取值
pub const ALL_BRANCHES: &str = "all";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentFilter {
    #[serde(default)]
    pub search: Option<String>,
    /// None 或 "all" 表示不过滤
    #[serde(default)]
    pub branch: Option<String>,
}

impl StudentFilter {
    pub fn matches(&self, student: &Student) -> bool {
        self.matches_search(student) && self.matches_branch(student)
    }

    fn matches_search(&self, student: &Student) -> bool {
        let Some(search) = self.search.as_deref().map(str::trim).filter(|s| !s.is_empty()) else {
            return true;
        };
        let needle = search.to_lowercase();
        [&student.name, &student.register_number, &student.email]
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }

    fn matches_branch(&self, student: &Student) -> bool {
        match self.branch.as_deref().map(str::trim) {
            None | Some("") | Some(ALL_BRANCHES) => true,
            Some(branch) => student.branch == branch,
        }
    }

    /// 按筛选条件过滤（保持原顺序）
    pub fn apply(&self, students: Vec<Student>) -> Vec<Student> {
        students.into_iter().filter(|s| self.matches(s)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::student::NewStudent;
    use chrono::Utc;

    fn student(reg: &str, name: &str, email: &str, branch: &str) -> Student {
        NewStudent {
            register_number: reg.to_string(),
            name: name.to_string(),
            email: email.to_string(),
            phone: String::new(),
            branch: branch.to_string(),
            batch: String::new(),
            cgpa: 0.0,
            placement_offers: vec![],
        }
        .into_student(reg.to_string(), Utc::now())
    }

    fn roster() -> Vec<Student> {
        vec![
            student("21CS001", "John Doe", "john@college.edu", "Computer Science"),
            student("21CV007", "Asha Rao", "asha@college.edu", "Civil"),
            student("21ME010", "Ravi Kumar", "", "Mechanical"),
        ]
    }

    #[test]
    fn test_empty_filter_keeps_everything() {
        assert_eq!(StudentFilter::default().apply(roster()).len(), 3);
    }

    #[test]
    fn test_search_is_case_insensitive_across_fields() {
        let by_name = StudentFilter {
            search: Some("JOHN".to_string()),
            branch: None,
        };
        assert_eq!(by_name.apply(roster()).len(), 1);

        let by_reg = StudentFilter {
            search: Some("21cv".to_string()),
            branch: None,
        };
        assert_eq!(by_reg.apply(roster())[0].name, "Asha Rao");

        let by_email = StudentFilter {
            search: Some("college.edu".to_string()),
            branch: None,
        };
        assert_eq!(by_email.apply(roster()).len(), 2);
    }

    #[test]
    fn test_branch_filter() {
        let all = StudentFilter {
            search: None,
            branch: Some(ALL_BRANCHES.to_string()),
        };
        assert_eq!(all.apply(roster()).len(), 3);

        let civil = StudentFilter {
            search: Some("a".to_string()),
            branch: Some("Civil".to_string()),
        };
        let result = civil.apply(roster());
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].register_number, "21CV007");
    }
}
