use super::identities::ADMIN_USERNAME;
use chrono::{DateTime, Duration, Utc};

/// A campus announcement, keyed by title.
///
/// The display window is stored as day offsets from the run's reference
/// instant, so the same table yields a current-looking window on every
/// fresh seed.
#[derive(Debug, Clone, Copy)]
pub struct AnnouncementRecord {
    pub title: &'static str,
    pub content: &'static str,
    pub priority: &'static str,
    pub target_audience: &'static str,
    pub starts_in_days: i64,
    pub ends_in_days: i64,
    /// Username of the authoring identity
    pub author: &'static str,
}

impl AnnouncementRecord {
    pub fn window(&self, reference: DateTime<Utc>) -> (DateTime<Utc>, DateTime<Utc>) {
        (
            reference + Duration::days(self.starts_in_days),
            reference + Duration::days(self.ends_in_days),
        )
    }
}

pub const ANNOUNCEMENTS: &[AnnouncementRecord] = &[
    AnnouncementRecord {
        title: "Semester Registration Now Open",
        content: r#"Course registration for the current semester is now open.

All students are required to register their courses through the student portal by the deadline.

Important:
- Ensure fees are paid (minimum 60%)
- Register within the first 2 weeks
- Late registration attracts penalty

Visit the Academic Registrar for any issues."#,
        priority: "high",
        target_audience: "students",
        starts_in_days: -2,
        ends_in_days: 14,
        author: ADMIN_USERNAME,
    },
    AnnouncementRecord {
        title: "Supplementary Exam Applications",
        content: r#"Applications for supplementary examinations are now being accepted.

Application Deadline: Two weeks from today
Exam Fee: KES 1,500 per unit

Apply through the student portal under Examinations section.

For inquiries, contact the Examination Office."#,
        priority: "high",
        target_audience: "students",
        starts_in_days: -1,
        ends_in_days: 14,
        author: ADMIN_USERNAME,
    },
    AnnouncementRecord {
        title: "Library Extended Hours During Exam Period",
        content: r#"The university library will operate extended hours during the examination period:

Monday - Friday: 6:00 AM - 11:00 PM
Saturday - Sunday: 7:00 AM - 10:00 PM

Take advantage of the quiet study spaces and resources.

Remember to carry your student ID for access."#,
        priority: "medium",
        target_audience: "all",
        starts_in_days: 0,
        ends_in_days: 30,
        author: ADMIN_USERNAME,
    },
    AnnouncementRecord {
        title: "Career Fair - Next Month",
        content: r#"MUT Career Fair 2025

Date: Next Month
Venue: University Grounds
Time: 9:00 AM - 5:00 PM

Meet with top employers, learn about internship opportunities, and get career guidance.

Over 50 companies confirmed!

Registration opens next week through the Career Services Office."#,
        priority: "medium",
        target_audience: "students",
        starts_in_days: 0,
        ends_in_days: 45,
        author: ADMIN_USERNAME,
    },
    AnnouncementRecord {
        title: "New Student Orientation",
        content: r#"Calling all new students!

New Student Orientation Week begins next Monday.

Program includes:
- Campus tour
- Introduction to facilities
- Academic requirements briefing
- Student life activities
- Meet your lecturers

Attendance is mandatory. Check your email for detailed schedule."#,
        priority: "urgent",
        target_audience: "students",
        starts_in_days: 0,
        ends_in_days: 7,
        author: ADMIN_USERNAME,
    },
    AnnouncementRecord {
        title: "Payment Deadline Reminder",
        content: r#"Reminder: Fee Payment Deadline

Date: End of this month

All students must clear at least 60% of their tuition fees to be eligible for examinations.

Payment Options:
- M-PESA Paybill: 247247
- Bank Deposit: Equity Bank
- Student Portal

Contact Finance Office for payment plans."#,
        priority: "high",
        target_audience: "students",
        starts_in_days: -10,
        ends_in_days: 20,
        author: ADMIN_USERNAME,
    },
    AnnouncementRecord {
        title: "ICT System Maintenance",
        content: r#"Scheduled System Maintenance

Date: This Saturday
Time: 11:00 PM - 5:00 AM Sunday

Services Affected:
- Student Portal
- Email
- Wi-Fi (may be intermittent)

Plan accordingly and download any materials you need beforehand.

We apologize for any inconvenience."#,
        priority: "medium",
        target_audience: "all",
        starts_in_days: 3,
        ends_in_days: 5,
        author: ADMIN_USERNAME,
    },
];
