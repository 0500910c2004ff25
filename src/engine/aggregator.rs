// ==========================================
// 校园招聘就业管理系统 - 看板统计引擎
// ==========================================
// 职责: 由全量学生档案计算看板统计快照
// 输入: 学生档案列表
// 输出: DashboardStats
// ==========================================

use crate::domain::dashboard::DashboardStats;
use crate::domain::student::Student;
use std::collections::HashSet;

// ==========================================
// DashboardAggregator - 看板统计引擎
// ==========================================
// 红线: 无状态引擎，纯函数，不访问存储
#[derive(Debug, Default, Clone, Copy)]
pub struct DashboardAggregator;

impl DashboardAggregator {
    pub fn new() -> Self {
        Self
    }

    /// 计算统计快照（单次遍历）
    ///
    /// # 规则
    /// - 已就业: 至少一个 accepted offer
    /// - 平均/最高年薪: 仅统计 accepted offer；无则为 0
    /// - 公司数: 所有 offer（任意状态）的公司名去重
    /// - 专业统计: 以档案上的原始专业字符串为键
    pub fn calculate(&self, students: &[Student]) -> DashboardStats {
        let mut stats = DashboardStats {
            total_students: students.len(),
            ..Default::default()
        };

        let mut companies: HashSet<&str> = HashSet::new();
        let mut package_sum = 0.0;
        let mut package_count = 0usize;
        let mut highest: Option<f64> = None;

        for student in students {
            let mut placed = false;
            for offer in &student.placement_offers {
                companies.insert(offer.company_name.as_str());
                if offer.is_accepted() {
                    placed = true;
                    package_sum += offer.package_lpa;
                    package_count += 1;
                    highest = Some(highest.map_or(offer.package_lpa, |h| h.max(offer.package_lpa)));
                }
            }

            let branch = stats
                .branch_wise_stats
                .entry(student.branch.clone())
                .or_default();
            branch.total += 1;
            if placed {
                branch.placed += 1;
                stats.placed_students += 1;
            }
        }

        if package_count > 0 {
            stats.avg_package = package_sum / package_count as f64;
        }
        stats.highest_package = highest.unwrap_or(0.0);
        stats.total_companies = companies.len();
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dashboard::BranchStat;
    use crate::domain::student::{NewStudent, PlacementOffer};
    use crate::domain::types::{OfferStatus, OfferType};
    use chrono::{NaiveDate, Utc};

    fn offer(company: &str, package: f64, status: OfferStatus) -> PlacementOffer {
        PlacementOffer {
            id: format!("{}-{}", company, package),
            company_name: company.to_string(),
            role: "SDE".to_string(),
            package_lpa: package,
            offer_type: OfferType::Placement,
            offer_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            status,
        }
    }

    fn student(reg: &str, branch: &str, offers: Vec<PlacementOffer>) -> Student {
        NewStudent {
            register_number: reg.to_string(),
            name: reg.to_string(),
            email: String::new(),
            phone: String::new(),
            branch: branch.to_string(),
            batch: String::new(),
            cgpa: 7.0,
            placement_offers: offers,
        }
        .into_student(reg.to_string(), Utc::now())
    }

    #[test]
    fn test_empty_input() {
        let stats = DashboardAggregator::new().calculate(&[]);
        assert_eq!(stats, DashboardStats::default());
    }

    #[test]
    fn test_accepted_offers_drive_packages() {
        let students = vec![
            student(
                "A",
                "Computer Science",
                vec![
                    offer("Google", 25.0, OfferStatus::Accepted),
                    offer("Amazon", 40.0, OfferStatus::Rejected),
                ],
            ),
            student("B", "Computer Science", vec![offer("Google", 15.0, OfferStatus::Accepted)]),
            student("C", "Civil", vec![offer("L&T", 6.0, OfferStatus::Pending)]),
        ];

        let stats = DashboardAggregator.calculate(&students);
        assert_eq!(stats.total_students, 3);
        assert_eq!(stats.placed_students, 2);
        assert_eq!(stats.avg_package, 20.0);
        assert_eq!(stats.highest_package, 25.0);
        assert_eq!(stats.total_companies, 3);
        assert_eq!(
            stats.branch_wise_stats["Computer Science"],
            BranchStat { total: 2, placed: 2 }
        );
        assert_eq!(stats.branch_wise_stats["Civil"], BranchStat { total: 1, placed: 0 });
    }

    #[test]
    fn test_no_accepted_offers_yields_zero_packages() {
        let students = vec![student("A", "Civil", vec![offer("X", 9.0, OfferStatus::Pending)])];
        let stats = DashboardAggregator.calculate(&students);
        assert_eq!(stats.avg_package, 0.0);
        assert_eq!(stats.highest_package, 0.0);
        assert_eq!(stats.total_companies, 1);
    }

    #[test]
    fn test_unknown_branch_kept_verbatim() {
        let students = vec![
            student("A", "Legacy Branch", vec![offer("X", 3.0, OfferStatus::Accepted)]),
            student("B", "Legacy Branch", vec![]),
        ];
        let stats = DashboardAggregator.calculate(&students);
        assert_eq!(
            stats.branch_wise_stats["Legacy Branch"],
            BranchStat { total: 2, placed: 1 }
        );
    }
}
