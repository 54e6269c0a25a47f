/// A university bank account, keyed by account number
#[derive(Debug, Clone, Copy)]
pub struct BankAccountRecord {
    pub account_type: &'static str,
    pub bank_name: &'static str,
    pub account_name: &'static str,
    pub account_number: &'static str,
    pub branch: &'static str,
    pub swift_code: &'static str,
    pub paybill_number: &'static str,
    pub account_reference: &'static str,
    pub notes: &'static str,
}

/// A fee line, keyed by (program, payment type, year of study).
///
/// `year_of_study: None` means the fee applies to every year.
#[derive(Debug, Clone, Copy)]
pub struct FeeRecord {
    pub payment_type: &'static str,
    pub program: &'static str,
    pub year_of_study: Option<u8>,
    pub amount: f64,
    pub currency: &'static str,
    pub description: &'static str,
    pub academic_year: &'static str,
}

pub const BANK_ACCOUNTS: &[BankAccountRecord] = &[
    BankAccountRecord {
        account_type: "fees",
        bank_name: "Equity Bank",
        account_name: "Murang'a University of Technology",
        account_number: "0360291234567",
        branch: "Murang'a Branch",
        swift_code: "EQBLKENA",
        paybill_number: "247247",
        account_reference: "Student ID",
        notes: "Use your Student ID as the account number when paying via M-Pesa",
    },
    BankAccountRecord {
        account_type: "accommodation",
        bank_name: "Co-operative Bank",
        account_name: "MUT Accommodation Account",
        account_number: "01129123456789",
        branch: "Murang'a Branch",
        swift_code: "KCOOKENA",
        paybill_number: "400200",
        account_reference: "Student ID + HOSTEL",
        notes: "For hostel and accommodation payments",
    },
    BankAccountRecord {
        account_type: "main",
        bank_name: "KCB Bank",
        account_name: "Murang'a University of Technology",
        account_number: "1234567890",
        branch: "Murang'a Branch",
        swift_code: "KCBLKENX",
        paybill_number: "",
        account_reference: "",
        notes: "Main university account for general payments",
    },
];

pub const FEES: &[FeeRecord] = &[
    FeeRecord {
        payment_type: "tuition",
        program: "Bachelor of Science in Computer Science",
        year_of_study: Some(1),
        amount: 52000.0,
        currency: "KES",
        description: "Tuition fee per semester for Computer Science Year 1",
        academic_year: "2024/2025",
    },
    FeeRecord {
        payment_type: "tuition",
        program: "Bachelor of Science in Computer Science",
        year_of_study: Some(2),
        amount: 52000.0,
        currency: "KES",
        description: "Tuition fee per semester for Computer Science Year 2",
        academic_year: "2024/2025",
    },
    FeeRecord {
        payment_type: "tuition",
        program: "Bachelor of Business Information Technology",
        year_of_study: Some(1),
        amount: 48000.0,
        currency: "KES",
        description: "Tuition fee per semester for Business IT Year 1",
        academic_year: "2024/2025",
    },
    FeeRecord {
        payment_type: "registration",
        program: "All Programs",
        year_of_study: None,
        amount: 5000.0,
        currency: "KES",
        description: "Annual registration fee for all programs",
        academic_year: "2024/2025",
    },
    FeeRecord {
        payment_type: "exam",
        program: "All Programs",
        year_of_study: None,
        amount: 3000.0,
        currency: "KES",
        description: "Examination fee per semester",
        academic_year: "2024/2025",
    },
    FeeRecord {
        payment_type: "accommodation",
        program: "All Programs",
        year_of_study: None,
        amount: 12000.0,
        currency: "KES",
        description: "Hostel accommodation per semester",
        academic_year: "2024/2025",
    },
    FeeRecord {
        payment_type: "other",
        program: "All Programs",
        year_of_study: None,
        amount: 2000.0,
        currency: "KES",
        description: "Student ID card and other administrative charges",
        academic_year: "2024/2025",
    },
];
