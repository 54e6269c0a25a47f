/// A university official, keyed by (position title, full name)
#[derive(Debug, Clone, Copy)]
pub struct OfficialRecord {
    pub position: &'static str,
    pub position_title: &'static str,
    pub full_name: &'static str,
    pub department: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub office_location: &'static str,
    pub bio: &'static str,
    pub display_order: i64,
}

/// A campus office, keyed by name
#[derive(Debug, Clone, Copy)]
pub struct OfficeRecord {
    pub name: &'static str,
    pub office_type: &'static str,
    pub building: &'static str,
    pub floor: &'static str,
    pub room_number: &'static str,
    pub description: &'static str,
    pub services_offered: &'static str,
    pub contact_person: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub opening_hours: &'static str,
}

pub const OFFICIALS: &[OfficialRecord] = &[
    OfficialRecord {
        position: "vc",
        position_title: "Vice Chancellor",
        full_name: "Prof. James Kinyua Mwaura",
        department: "Administration",
        email: "vc@mut.ac.ke",
        phone: "+254 712 345 500",
        office_location: "Administration Block, 3rd Floor",
        bio: "Prof. Mwaura is an accomplished academician with over 20 years of experience in higher education. He holds a PhD in Engineering and has published extensively in international journals.",
        display_order: 1,
    },
    OfficialRecord {
        position: "dvc_academic",
        position_title: "Deputy Vice Chancellor - Academic Affairs",
        full_name: "Prof. Mary Wanjiku Kamau",
        department: "Academic Affairs",
        email: "dvc.academic@mut.ac.ke",
        phone: "+254 712 345 510",
        office_location: "Administration Block, 2nd Floor",
        bio: "Prof. Kamau oversees all academic programs and curriculum development at MUT.",
        display_order: 2,
    },
    OfficialRecord {
        position: "dvc_admin",
        position_title: "Deputy Vice Chancellor - Administration & Finance",
        full_name: "Prof. David Kimani Njoroge",
        department: "Administration",
        email: "dvc.admin@mut.ac.ke",
        phone: "+254 712 345 520",
        office_location: "Administration Block, 2nd Floor",
        bio: "Prof. Njoroge manages the administrative and financial operations of the university.",
        display_order: 3,
    },
    OfficialRecord {
        position: "registrar",
        position_title: "Academic Registrar",
        full_name: "Dr. Sarah Muthoni Githinji",
        department: "Academic Registry",
        email: "registrar@mut.ac.ke",
        phone: "+254 712 345 600",
        office_location: "Academic Block, Ground Floor",
        bio: "Dr. Githinji oversees student records, admissions, and academic administration.",
        display_order: 4,
    },
    OfficialRecord {
        position: "dean",
        position_title: "Dean - School of Computing & IT",
        full_name: "Dr. Peter Kariuki Mwangi",
        department: "Computing & IT",
        email: "dean.computing@mut.ac.ke",
        phone: "+254 712 345 700",
        office_location: "ICT Block, 1st Floor",
        bio: "Dr. Mwangi leads the School of Computing and IT with expertise in software engineering.",
        display_order: 5,
    },
    OfficialRecord {
        position: "dean",
        position_title: "Dean - School of Business & Economics",
        full_name: "Dr. Agnes Nyambura Ndung'u",
        department: "Business & Economics",
        email: "dean.business@mut.ac.ke",
        phone: "+254 712 345 710",
        office_location: "Business Block, 2nd Floor",
        bio: "Dr. Ndung'u oversees business and economics programs at MUT.",
        display_order: 6,
    },
    OfficialRecord {
        position: "director",
        position_title: "Director - Student Affairs",
        full_name: "Mr. John Kamau Kiarie",
        department: "Student Affairs",
        email: "student.affairs@mut.ac.ke",
        phone: "+254 712 345 800",
        office_location: "Student Center, Ground Floor",
        bio: "Mr. Kiarie manages student welfare, clubs, and co-curricular activities.",
        display_order: 7,
    },
    OfficialRecord {
        position: "director",
        position_title: "Director - Finance",
        full_name: "Ms. Lucy Wanjiru Kimemia",
        department: "Finance",
        email: "finance@mut.ac.ke",
        phone: "+254 712 345 650",
        office_location: "Administration Block, Ground Floor",
        bio: "Ms. Kimemia oversees all financial operations and student fee matters.",
        display_order: 8,
    },
];

pub const OFFICES: &[OfficeRecord] = &[
    OfficeRecord {
        name: "Finance Office",
        office_type: "financial",
        building: "Administration Block",
        floor: "Ground Floor",
        room_number: "A-G-12",
        description: "Handles all financial matters including fee payments, refunds, and financial statements",
        services_offered: "Fee payment processing, Fee statements, Payment plans, Refund processing, Financial clearance",
        contact_person: "Ms. Lucy Kimemia",
        email: "finance@mut.ac.ke",
        phone: "+254 712 345 650",
        opening_hours: r#"Monday - Friday: 8:00 AM - 5:00 PM
Saturday: 9:00 AM - 1:00 PM
Sunday & Public Holidays: Closed"#,
    },
    OfficeRecord {
        name: "Academic Registrar's Office",
        office_type: "academic",
        building: "Academic Block",
        floor: "Ground Floor",
        room_number: "AC-G-01",
        description: "Handles student registration, transcripts, certificates, and academic records",
        services_offered: "Student registration, Transcripts, Certificates, Academic records, ID cards, Discontinuation",
        contact_person: "Dr. Sarah Githinji",
        email: "registrar@mut.ac.ke",
        phone: "+254 712 345 600",
        opening_hours: r#"Monday - Friday: 8:00 AM - 5:00 PM
Lunch Break: 1:00 PM - 2:00 PM
Weekends: Closed"#,
    },
    OfficeRecord {
        name: "Examination Office",
        office_type: "academic",
        building: "Academic Block",
        floor: "Ground Floor",
        room_number: "AC-G-05",
        description: "Manages examination schedules, results, and supplementary exams",
        services_offered: "Exam registration, Exam cards, Supplementary exam applications, Results processing, Special exams",
        contact_person: "Mr. Thomas Ochieng",
        email: "exams@mut.ac.ke",
        phone: "+254 712 345 620",
        opening_hours: r#"Monday - Friday: 8:00 AM - 5:00 PM
Weekends: Closed"#,
    },
    OfficeRecord {
        name: "Student Affairs Office",
        office_type: "student_services",
        building: "Student Center",
        floor: "Ground Floor",
        room_number: "SC-G-01",
        description: "Handles student welfare, clubs, sports, and co-curricular activities",
        services_offered: "Student welfare, Club registration, Sports activities, Counseling referrals, Event approvals",
        contact_person: "Mr. John Kiarie",
        email: "student.affairs@mut.ac.ke",
        phone: "+254 712 345 800",
        opening_hours: r#"Monday - Friday: 8:00 AM - 5:00 PM
Saturday: 9:00 AM - 1:00 PM"#,
    },
    OfficeRecord {
        name: "ICT Support Desk",
        office_type: "it",
        building: "ICT Block",
        floor: "Ground Floor",
        room_number: "ICT-G-10",
        description: "Provides IT support for students and staff",
        services_offered: "Student portal issues, Email setup, Wi-Fi access, Computer lab support, Password resets",
        contact_person: "Mr. Kevin Mwangi",
        email: "ict.support@mut.ac.ke",
        phone: "+254 712 345 900",
        opening_hours: r#"Monday - Friday: 7:30 AM - 7:00 PM
Saturday: 8:00 AM - 4:00 PM
Sunday: Closed"#,
    },
    OfficeRecord {
        name: "University Library",
        office_type: "library",
        building: "Library Building",
        floor: "All Floors",
        room_number: "LIB",
        description: "Main university library with extensive book collections and study spaces",
        services_offered: "Book borrowing, Research materials, Study spaces, Computer access, Printing services, Digital library",
        contact_person: "Ms. Grace Wambui",
        email: "library@mut.ac.ke",
        phone: "+254 712 345 950",
        opening_hours: r#"Monday - Friday: 7:00 AM - 10:00 PM
Saturday: 8:00 AM - 8:00 PM
Sunday: 10:00 AM - 6:00 PM"#,
    },
    OfficeRecord {
        name: "Health Services",
        office_type: "health",
        building: "Medical Center",
        floor: "Ground Floor",
        room_number: "MC-G-01",
        description: "University health center providing basic medical services to students",
        services_offered: "First aid, Medical consultations, Prescriptions, Health insurance, Medical reports, Counseling",
        contact_person: "Dr. Elizabeth Njeri",
        email: "health@mut.ac.ke",
        phone: "+254 712 345 850",
        opening_hours: r#"Monday - Friday: 8:00 AM - 5:00 PM
Emergencies: 24/7
Weekends: 9:00 AM - 1:00 PM"#,
    },
    OfficeRecord {
        name: "Admissions Office",
        office_type: "academic",
        building: "Administration Block",
        floor: "1st Floor",
        room_number: "A-1-15",
        description: "Handles new student admissions and application inquiries",
        services_offered: "Application processing, Admission letters, Course information, Entry requirements, Transfer applications",
        contact_person: "Mrs. Anne Wangari",
        email: "admissions@mut.ac.ke",
        phone: "+254 712 345 550",
        opening_hours: r#"Monday - Friday: 8:00 AM - 5:00 PM
Weekends: Closed"#,
    },
    OfficeRecord {
        name: "Accommodation Office",
        office_type: "student_services",
        building: "Student Center",
        floor: "Ground Floor",
        room_number: "SC-G-08",
        description: "Manages student hostel allocation and accommodation matters",
        services_offered: "Hostel booking, Room allocation, Accommodation payments, Hostel transfers, Clearance",
        contact_person: "Mr. Patrick Omondi",
        email: "accommodation@mut.ac.ke",
        phone: "+254 712 345 820",
        opening_hours: r#"Monday - Friday: 8:00 AM - 5:00 PM
Saturday: 9:00 AM - 1:00 PM"#,
    },
    OfficeRecord {
        name: "Career Services Office",
        office_type: "student_services",
        building: "Student Center",
        floor: "1st Floor",
        room_number: "SC-1-10",
        description: "Provides career guidance, internship placement, and job opportunities",
        services_offered: "Career counseling, Internship placements, Job listings, CV writing workshops, Interview preparation",
        contact_person: "Ms. Betty Akinyi",
        email: "careers@mut.ac.ke",
        phone: "+254 712 345 880",
        opening_hours: r#"Monday - Friday: 8:00 AM - 5:00 PM
Weekends: Closed"#,
    },
];
