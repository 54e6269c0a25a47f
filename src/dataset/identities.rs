use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserType {
    Admin,
    Student,
    Staff,
}

impl UserType {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserType::Admin => "admin",
            UserType::Student => "student",
            UserType::Staff => "staff",
        }
    }
}

/// A test identity.
///
/// `password` is plaintext here and only here: seeders hash it before it
/// reaches the store.
#[derive(Debug, Clone, Copy)]
pub struct IdentityRecord {
    pub username: &'static str,
    pub email: &'static str,
    pub password: &'static str,
    pub user_type: UserType,
    pub is_staff: bool,
    pub is_superuser: bool,
    pub student_id: Option<&'static str>,
    pub department: Option<&'static str>,
    pub year_of_study: Option<u8>,
    pub phone_number: Option<&'static str>,
}

/// Username that authors the canonical announcements.
pub const ADMIN_USERNAME: &str = "admin";

pub const IDENTITIES: &[IdentityRecord] = &[
    IdentityRecord {
        username: ADMIN_USERNAME,
        email: "admin@mut.ac.ke",
        password: "admin123",
        user_type: UserType::Admin,
        is_staff: true,
        is_superuser: true,
        student_id: None,
        department: None,
        year_of_study: None,
        phone_number: None,
    },
    IdentityRecord {
        username: "john.doe",
        email: "john.doe@student.mut.ac.ke",
        password: "student123",
        user_type: UserType::Student,
        is_staff: false,
        is_superuser: false,
        student_id: Some("MUT/01/2021/001"),
        department: Some("Computer Science"),
        year_of_study: Some(3),
        phone_number: Some("+254 712 345 001"),
    },
    IdentityRecord {
        username: "jane.smith",
        email: "jane.smith@student.mut.ac.ke",
        password: "student123",
        user_type: UserType::Student,
        is_staff: false,
        is_superuser: false,
        student_id: Some("MUT/01/2022/002"),
        department: Some("Business IT"),
        year_of_study: Some(2),
        phone_number: Some("+254 712 345 002"),
    },
    IdentityRecord {
        username: "staff.member",
        email: "staff@mut.ac.ke",
        password: "staff123",
        user_type: UserType::Staff,
        is_staff: false,
        is_superuser: false,
        student_id: None,
        department: Some("ICT Department"),
        year_of_study: None,
        phone_number: Some("+254 712 345 100"),
    },
];
