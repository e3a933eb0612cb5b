use serde::{Deserialize, Serialize};

/// Membership category. Each kind fixes a borrow limit and a daily fine rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MemberKind {
    Student,
    Faculty,
}

impl MemberKind {
    /// `student` in any case is a student; every other label is faculty.
    pub fn parse(label: &str) -> Self {
        if label.eq_ignore_ascii_case("student") {
            MemberKind::Student
        } else {
            MemberKind::Faculty
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MemberKind::Student => "Student",
            MemberKind::Faculty => "Faculty",
        }
    }

    /// Most books a member of this kind may hold at once.
    pub fn max_borrow_limit(self) -> usize {
        match self {
            MemberKind::Student => 3,
            MemberKind::Faculty => 5,
        }
    }

    /// Fine charged per overdue day.
    pub fn fine_rate(self) -> f64 {
        match self {
            MemberKind::Student => 1.0,
            MemberKind::Faculty => 0.5,
        }
    }
}
