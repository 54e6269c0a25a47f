use crate::error::{Result, SeedError};
use chrono::NaiveDate;

// ============================================================================
// ACADEMIC YEARS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YearStatus {
    Current,
    Upcoming,
}

impl YearStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            YearStatus::Current => "current",
            YearStatus::Upcoming => "upcoming",
        }
    }
}

/// An academic year, keyed by its label ("2025/2026").
#[derive(Debug, Clone, PartialEq)]
pub struct AcademicYearRecord {
    pub year: String,
    pub status: YearStatus,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub registration_start: NaiveDate,
    pub registration_end: NaiveDate,
    pub semester_1_start: NaiveDate,
    pub semester_1_end: NaiveDate,
    pub semester_2_start: NaiveDate,
    pub semester_2_end: NaiveDate,
}

/// "2025/2026" for a year starting in 2025
pub fn year_label(start_year: i32) -> String {
    format!("{}/{}", start_year, start_year + 1)
}

fn date(year: i32, month: u32, day: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        SeedError::Config(format!("invalid calendar date {}-{:02}-{:02}", year, month, day))
    })
}

/// The current and the upcoming academic year, anchored at `base_year`.
pub fn academic_years(base_year: i32) -> Result<Vec<AcademicYearRecord>> {
    [(0, YearStatus::Current), (1, YearStatus::Upcoming)]
        .into_iter()
        .map(|(offset, status)| {
            let y = base_year + offset;
            Ok(AcademicYearRecord {
                year: year_label(y),
                status,
                start_date: date(y, 9, 1)?,
                end_date: date(y + 1, 8, 31)?,
                registration_start: date(y, 8, 15)?,
                registration_end: date(y, 9, 15)?,
                semester_1_start: date(y, 9, 1)?,
                semester_1_end: date(y, 12, 20)?,
                semester_2_start: date(y + 1, 1, 10)?,
                semester_2_end: date(y + 1, 5, 15)?,
            })
        })
        .collect()
}

// ============================================================================
// EXAMINATIONS
// ============================================================================

/// Static part of an exam sitting; dates are (month, day) in the base year.
#[derive(Debug, Clone, Copy)]
pub struct ExamTemplate {
    pub exam_type: &'static str,
    pub semester: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub requirements: &'static str,
    pub application_process: &'static str,
    pub application_opens: Option<(u32, u32)>,
    pub application_deadline: Option<(u32, u32)>,
    pub exam_starts: (u32, u32),
    pub exam_ends: (u32, u32),
    pub application_fee: Option<f64>,
}

/// An exam sitting, keyed by (academic year, exam type, semester).
#[derive(Debug, Clone, PartialEq)]
pub struct ExamRecord {
    pub academic_year: String,
    pub exam_type: &'static str,
    pub semester: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub requirements: &'static str,
    pub application_process: &'static str,
    pub application_start_date: Option<NaiveDate>,
    pub application_deadline: Option<NaiveDate>,
    pub exam_start_date: NaiveDate,
    pub exam_end_date: NaiveDate,
    pub application_fee: Option<f64>,
}

pub const EXAM_TEMPLATES: &[ExamTemplate] = &[
    ExamTemplate {
        exam_type: "supplementary",
        semester: "Semester 1",
        title: "Supplementary Examinations - Semester 1",
        description: "Supplementary examinations for students who failed or missed regular exams",
        requirements: r#"1. Must have sat for the regular examination
2. Valid student ID
3. Clear fee balance or payment plan
4. Duly filled supplementary exam application form"#,
        application_process: r#"1. Log into the student portal
2. Navigate to Examinations > Supplementary Exams
3. Select the units you wish to sit for
4. Pay the application fee via M-Pesa or bank
5. Submit the application
6. Download your exam card from the portal
7. Attend the exam on scheduled date"#,
        application_opens: Some((1, 15)),
        application_deadline: Some((2, 15)),
        exam_starts: (3, 1),
        exam_ends: (3, 15),
        application_fee: Some(1500.0),
    },
    ExamTemplate {
        exam_type: "supplementary",
        semester: "Semester 2",
        title: "Supplementary Examinations - Semester 2",
        description: "Supplementary examinations for students who failed or missed regular exams",
        requirements: r#"1. Must have sat for the regular examination
2. Valid student ID
3. Clear fee balance or payment plan
4. Duly filled supplementary exam application form"#,
        application_process: r#"1. Log into the student portal
2. Navigate to Examinations > Supplementary Exams
3. Select the units you wish to sit for
4. Pay the application fee via M-Pesa or bank
5. Submit the application
6. Download your exam card from the portal
7. Attend the exam on scheduled date"#,
        application_opens: Some((8, 15)),
        application_deadline: Some((9, 15)),
        exam_starts: (10, 1),
        exam_ends: (10, 15),
        application_fee: Some(1500.0),
    },
    ExamTemplate {
        exam_type: "regular",
        semester: "Semester 1",
        title: "End of Semester Examinations - Semester 1",
        description: "Regular end of semester examinations for all students",
        requirements: r#"1. Must be a registered student
2. Must have paid at least 60% of tuition fees
3. Valid student ID
4. Attendance of at least 75% of lectures"#,
        application_process: r#"Regular exams are automatic for all registered students.
Download your exam card from the student portal 2 weeks before exams begin."#,
        application_opens: None,
        application_deadline: None,
        exam_starts: (12, 1),
        exam_ends: (12, 20),
        application_fee: None,
    },
];

/// Exam sittings of the current academic year.
pub fn exams(base_year: i32) -> Result<Vec<ExamRecord>> {
    let on = |(month, day): (u32, u32)| date(base_year, month, day);

    EXAM_TEMPLATES
        .iter()
        .map(|t| {
            Ok(ExamRecord {
                academic_year: year_label(base_year),
                exam_type: t.exam_type,
                semester: t.semester,
                title: t.title,
                description: t.description,
                requirements: t.requirements,
                application_process: t.application_process,
                application_start_date: t.application_opens.map(on).transpose()?,
                application_deadline: t.application_deadline.map(on).transpose()?,
                exam_start_date: on(t.exam_starts)?,
                exam_end_date: on(t.exam_ends)?,
                application_fee: t.application_fee,
            })
        })
        .collect()
}

// ============================================================================
// DISCONTINUATION
// ============================================================================

/// The discontinuation policy, keyed by `policy_id`.
#[derive(Debug, Clone, Copy)]
pub struct DiscontinuationRecord {
    pub policy_id: &'static str,
    pub title: &'static str,
    pub reason_types: &'static str,
    pub process_steps: &'static str,
    pub required_documents: &'static str,
    pub contact_office: &'static str,
    pub contact_email: &'static str,
    pub contact_phone: &'static str,
    pub fees_refund_policy: &'static str,
    pub timeline: &'static str,
    pub important_notes: &'static str,
}

pub const DISCONTINUATIONS: &[DiscontinuationRecord] = &[DiscontinuationRecord {
    policy_id: "student-discontinuation",
    title: "Student Discontinuation Procedures",
    reason_types: r#"Valid reasons for discontinuation include:
- Financial constraints
- Health issues
- Transfer to another institution
- Personal reasons
- Academic challenges
- Employment opportunities"#,
    process_steps: r#"1. Download discontinuation form from student portal
2. Fill the form completely with all required details
3. Attach supporting documents (if applicable)
4. Get approval from:
   - Head of Department
   - Dean of School
   - Finance Department (fee clearance)
5. Submit to Academic Registrar's office
6. Collect discontinuation letter (processing takes 7-14 days)
7. Return student ID card and library books
8. Collect clearance certificate"#,
    required_documents: r#"- Completed discontinuation form
- Copy of student ID
- Fee statement from Finance office
- Letter stating reasons for discontinuation
- Medical reports (if health-related)
- Acceptance letter from new institution (if transferring)
- Clearance form from library
- Clearance form from hostel (if applicable)"#,
    contact_office: "Academic Registrar's Office",
    contact_email: "registrar@mut.ac.ke",
    contact_phone: "+254 712 345 600",
    fees_refund_policy: r#"Refund Policy:
- Discontinuation before semester starts: 90% refund
- Discontinuation within first 4 weeks: 50% refund
- Discontinuation after 4 weeks: No refund
- Registration and exam fees are non-refundable
- Accommodation fees refunded on pro-rata basis
- Processing fee of KES 500 applies

Note: Refunds are processed within 60-90 days"#,
    timeline: r#"Expected processing timeline:
- Form submission and verification: 2-3 days
- Departmental approval: 3-5 days
- Finance clearance: 3-7 days
- Final approval: 2-3 days
- Letter issuance: 1-2 days

Total estimated time: 7-14 working days"#,
    important_notes: r#"Important things to note:
- Discontinuation is not the same as deferment
- You may reapply for admission in the future
- Transcripts can be requested after discontinuation
- Outstanding fees must be cleared or a payment plan established
- All university property must be returned
- Discontinuation does not affect your academic records
- You will need a clearance certificate for future applications"#,
}];
