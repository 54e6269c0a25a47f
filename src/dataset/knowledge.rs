/// A knowledge category, keyed by name
#[derive(Debug, Clone, Copy)]
pub struct CategoryRecord {
    pub name: &'static str,
    pub slug: &'static str,
    pub icon: &'static str,
    pub display_order: i64,
}

/// A knowledge base article, keyed by (category name, title)
#[derive(Debug, Clone, Copy)]
pub struct KnowledgeEntryRecord {
    pub category: &'static str,
    pub title: &'static str,
    pub question: &'static str,
    pub answer: &'static str,
    pub keywords: &'static str,
    pub priority: i64,
}

/// A frequently asked question, keyed by the question text
#[derive(Debug, Clone, Copy)]
pub struct FaqRecord {
    pub category: &'static str,
    pub question: &'static str,
    pub answer: &'static str,
    pub display_order: i64,
    pub is_featured: bool,
}

pub const ADMISSIONS: &str = "Admissions";
pub const FEES_AND_PAYMENTS: &str = "Fees & Payments";
pub const ACADEMIC_INFORMATION: &str = "Academic Information";
pub const EXAMINATIONS: &str = "Examinations";
pub const STUDENT_SERVICES: &str = "Student Services";
pub const GENERAL_INFORMATION: &str = "General Information";

pub const CATEGORIES: &[CategoryRecord] = &[
    CategoryRecord { name: ADMISSIONS, slug: "admissions", icon: "fa-graduation-cap", display_order: 1 },
    CategoryRecord { name: FEES_AND_PAYMENTS, slug: "fees-payments", icon: "fa-money-bill-wave", display_order: 2 },
    CategoryRecord { name: ACADEMIC_INFORMATION, slug: "academic", icon: "fa-book", display_order: 3 },
    CategoryRecord { name: EXAMINATIONS, slug: "examinations", icon: "fa-file-alt", display_order: 4 },
    CategoryRecord { name: STUDENT_SERVICES, slug: "student-services", icon: "fa-users", display_order: 5 },
    CategoryRecord { name: "Campus Life", slug: "campus-life", icon: "fa-home", display_order: 6 },
    CategoryRecord { name: "Library", slug: "library", icon: "fa-book-open", display_order: 7 },
    CategoryRecord { name: "IT Services", slug: "it-services", icon: "fa-laptop", display_order: 8 },
    CategoryRecord { name: "Administration", slug: "administration", icon: "fa-building", display_order: 9 },
    CategoryRecord { name: GENERAL_INFORMATION, slug: "general", icon: "fa-info-circle", display_order: 10 },
];

pub const KNOWLEDGE_ENTRIES: &[KnowledgeEntryRecord] = &[
    KnowledgeEntryRecord {
        category: FEES_AND_PAYMENTS,
        title: "How to Pay School Fees",
        question: "How do I pay my school fees?",
        answer: r#"You can pay your school fees through the following methods:

1. M-PESA:
   - Go to M-PESA menu
   - Select Lipa na M-PESA
   - Select Paybill
   - Enter Paybill Number: 247247
   - Account Number: Your Student ID
   - Enter Amount
   - Enter PIN and confirm

2. Bank Deposit:
   - Visit any Equity Bank branch
   - Deposit to Account: 0360291234567
   - Account Name: Murang'a University of Technology
   - Indicate your Student ID as reference

3. Online Banking:
   - Log into your bank's online platform
   - Select "Pay to Paybill"
   - Use the details above

4. Student Portal:
   - Log into the student portal
   - Navigate to Finance > Make Payment
   - Follow the instructions

Note: Always keep your payment receipts and allow 24-48 hours for payment confirmation."#,
        keywords: "pay fees, school fees, payment, mpesa, paybill, bank deposit",
        priority: 100,
    },
    KnowledgeEntryRecord {
        category: FEES_AND_PAYMENTS,
        title: "Fee Structure",
        question: "What are the fee structures for different programs?",
        answer: r#"Fee structures vary by program and year of study:

TUITION FEES PER SEMESTER:
- Computer Science: KES 52,000
- Business IT: KES 48,000
- Engineering Programs: KES 55,000
- Business Programs: KES 45,000

ADDITIONAL FEES:
- Registration Fee (Annual): KES 5,000
- Examination Fee (Per Semester): KES 3,000
- Student ID & Admin Charges: KES 2,000
- Accommodation (Per Semester): KES 12,000

PAYMENT TERMS:
- At least 60% of tuition must be paid before exams
- Payment plans available through Finance Office
- Fees are payable at the beginning of each semester

For detailed fee structure for your specific program, visit the Finance Office or check the student portal."#,
        keywords: "fee structure, tuition fees, cost, amount, how much",
        priority: 95,
    },
    KnowledgeEntryRecord {
        category: EXAMINATIONS,
        title: "Supplementary Examinations",
        question: "How do I apply for supplementary exams?",
        answer: r#"To apply for supplementary examinations:

ELIGIBILITY:
- Must have sat for the regular exam
- Valid student ID
- Clear fee balance or approved payment plan

APPLICATION PROCESS:
1. Log into student portal
2. Go to Examinations > Supplementary Exams
3. Select units you want to retake
4. Pay application fee (KES 1,500 per unit)
5. Submit application
6. Download exam card

TIMELINE:
- Semester 1 Supplementary: March
- Semester 2 Supplementary: October
- Application opens 1 month before exams

PAYMENT:
- M-PESA Paybill: 247247
- Account: Your Student ID + SUP
- Amount: KES 1,500 per unit

Contact: exams@mut.ac.ke or visit Examination Office"#,
        keywords: "supplementary exams, sup exams, retake, failed exam, special exam",
        priority: 90,
    },
    KnowledgeEntryRecord {
        category: ACADEMIC_INFORMATION,
        title: "Course Registration",
        question: "How do I register for courses?",
        answer: r#"Course registration is done online through the student portal:

STEPS:
1. Log into student portal using your credentials
2. Ensure fees are paid (at least 60%)
3. Navigate to Academic > Course Registration
4. Select your semester and year
5. Choose courses from the list
6. Verify course units (normal load: 15-18 units)
7. Submit registration
8. Download and print course registration form
9. Get HOD approval (if required)

REGISTRATION PERIOD:
- Opens 2 weeks before semester starts
- Closes 2 weeks after semester begins
- Late registration attracts penalty fee

IMPORTANT:
- Minimum units: 12
- Maximum units: 21 (requires Dean's approval)
- Prerequisites must be met
- Check timetable for course scheduling

Need help? Visit Academic Registrar's Office"#,
        keywords: "course registration, register units, add courses, semester registration",
        priority: 85,
    },
    KnowledgeEntryRecord {
        category: ACADEMIC_INFORMATION,
        title: "Student Portal Access",
        question: "How do I access the student portal?",
        answer: r#"To access the MUT Student Portal:

PORTAL URL: portal.mut.ac.ke

LOGIN CREDENTIALS:
- Username: Your Student ID (e.g., MUT/01/2021/001)
- Password: Default is your ID number

FIRST TIME LOGIN:
1. Go to portal.mut.ac.ke
2. Enter your Student ID as username
3. Enter your ID number as password
4. You will be prompted to change password
5. Create a strong password
6. Set up security questions

FORGOT PASSWORD:
1. Click "Forgot Password" on login page
2. Enter Student ID and email
3. Check email for reset link
4. Follow instructions to reset

PORTAL FEATURES:
- Course registration
- Exam results
- Fee statements
- Exam cards
- Academic transcripts
- Timetables

ISSUES?
Contact ICT Support: ict.support@mut.ac.ke or +254 712 345 900"#,
        keywords: "student portal, login, access portal, password, portal.mut.ac.ke",
        priority: 88,
    },
    KnowledgeEntryRecord {
        category: STUDENT_SERVICES,
        title: "Student ID Card",
        question: "How do I get my student ID card?",
        answer: r#"To obtain your student ID card:

NEW STUDENTS:
1. Complete registration process
2. Pay ID card fee (KES 500)
3. Visit ICT office with:
   - Receipt of payment
   - Admission letter
   - 2 passport photos
4. Photo capture (if needed)
5. Collect ID after 3-5 working days

REPLACEMENT (Lost/Damaged):
1. Report to Security office (get police abstract if lost outside campus)
2. Pay replacement fee (KES 1,000)
3. Visit ICT office with receipt
4. Bring 2 passport photos
5. Fill replacement form
6. Collect after 5-7 working days

ID CARD USES:
- Library access
- Exam identification
- Campus facility access
- Student discounts
- Official identification

IMPORTANT: Always carry your ID on campus. Report lost cards immediately.

Contact: ICT Support Desk, ICT Block Ground Floor"#,
        keywords: "student id, id card, replacement id, lost id",
        priority: 75,
    },
    KnowledgeEntryRecord {
        category: GENERAL_INFORMATION,
        title: "University Contacts",
        question: "What are the main university contacts?",
        answer: r#"MURANG'A UNIVERSITY OF TECHNOLOGY
Main Campus: Murang'a Town, Kenya

MAIN CONTACTS:
- Main Line: +254 712 345 500
- Email: info@mut.ac.ke
- Website: www.mut.ac.ke

KEY OFFICES:
- Vice Chancellor: vc@mut.ac.ke | +254 712 345 500
- Academic Registrar: registrar@mut.ac.ke | +254 712 345 600
- Finance Office: finance@mut.ac.ke | +254 712 345 650
- Admissions: admissions@mut.ac.ke | +254 712 345 550
- Examinations: exams@mut.ac.ke | +254 712 345 620
- ICT Support: ict.support@mut.ac.ke | +254 712 345 900
- Student Affairs: student.affairs@mut.ac.ke | +254 712 345 800
- Library: library@mut.ac.ke | +254 712 345 950
- Health Center: health@mut.ac.ke | +254 712 345 850

EMERGENCY:
- Security: +254 712 345 999
- Medical Emergency: +254 712 345 850

WORKING HOURS:
Monday - Friday: 8:00 AM - 5:00 PM
Saturday: 9:00 AM - 1:00 PM (Selected offices)"#,
        keywords: "contacts, phone numbers, email addresses, reach university",
        priority: 80,
    },
    KnowledgeEntryRecord {
        category: STUDENT_SERVICES,
        title: "Accommodation Services",
        question: "How do I apply for university accommodation?",
        answer: r#"UNIVERSITY ACCOMMODATION APPLICATION:

HOSTELS AVAILABLE:
- Male Hostels: Block A, B, C
- Female Hostels: Block D, E, F
- Capacity: 2-4 students per room

FEES:
- KES 12,000 per semester
- Refundable deposit: KES 3,000

APPLICATION PROCESS:
1. Log into student portal
2. Go to Services > Accommodation
3. Select preferred hostel
4. Pay accommodation fee
5. Submit application
6. Await allocation (usually within 1 week)
7. Collect room keys from Accommodation Office

REQUIREMENTS:
- Must be a registered student
- Clear fee balance
- Valid student ID
- Sign hostel rules agreement

WHAT'S PROVIDED:
- Bed and mattress
- Study desk and chair
- Wardrobe
- 24/7 electricity
- Wi-Fi access
- Security

RULES:
- No visitors after 10 PM
- No cooking in rooms
- Maintain cleanliness
- No subletting

Contact: accommodation@mut.ac.ke | +254 712 345 820"#,
        keywords: "hostel, accommodation, room, boarding, campus housing",
        priority: 70,
    },
    KnowledgeEntryRecord {
        category: ACADEMIC_INFORMATION,
        title: "Academic Transcripts",
        question: "How do I get my academic transcript?",
        answer: r#"TO REQUEST ACADEMIC TRANSCRIPT:

REQUIREMENTS:
- Completed transcript request form
- Copy of ID
- Fee clearance certificate
- Processing fee: KES 1,000 (per copy)

PROCESS:
1. Visit Academic Registrar's Office
2. Fill transcript request form
3. Get fee clearance from Finance
4. Pay processing fee
5. Submit all documents
6. Collect after 7-14 working days

PROVISIONAL TRANSCRIPT:
- Available immediately after graduation
- Free of charge
- Valid for 6 months

OFFICIAL TRANSCRIPT:
- Processed after 1 month of graduation
- Includes university seal and signatures
- Can be collected or mailed

DELIVERY OPTIONS:
- Self-collection: Free
- Courier within Kenya: KES 500
- International courier: KES 3,000

FOR URGENT PROCESSING:
- Additional fee: KES 2,000
- Ready in 3 working days

Contact: registrar@mut.ac.ke | +254 712 345 600"#,
        keywords: "transcript, academic records, grades, documents",
        priority: 65,
    },
    KnowledgeEntryRecord {
        category: GENERAL_INFORMATION,
        title: "University Location and Directions",
        question: "Where is Murang'a University located?",
        answer: r#"MURANG'A UNIVERSITY OF TECHNOLOGY LOCATION:

ADDRESS:
Main Campus
Murang'a Town
Murang'a County, Kenya
P.O. Box 75-10200, Murang'a

GPS COORDINATES:
-0.7167° S, 37.1500° E

HOW TO GET THERE:

FROM NAIROBI:
- By Road: 80km via Thika-Murang'a Highway
- Travel time: 1.5 - 2 hours
- Matatu: Board at Muthurwa or Githurai (KES 150-200)
- By Car: Follow Thika Road to Murang'a

FROM THIKA:
- Distance: 40km
- Travel time: 45 minutes
- Matatu available (KES 100)

FROM NYERI:
- Distance: 55km via Karatina
- Travel time: 1 hour

LANDMARKS NEARBY:
- Murang'a County Headquarters (2km)
- Murang'a Level 5 Hospital (1km)
- Murang'a Stadium (500m)

ON CAMPUS:
- Main Gate on Murang'a-Nyeri Road
- Ample parking available
- Boda boda/taxi readily available

PUBLIC TRANSPORT:
Matatus from Nairobi drop at Murang'a Town
Campus is 10 minutes walk from town center"#,
        keywords: "location, where is mut, directions, how to get, address",
        priority: 60,
    },
];

pub const FAQS: &[FaqRecord] = &[
    FaqRecord {
        category: FEES_AND_PAYMENTS,
        question: "Can I pay my fees in installments?",
        answer: "Yes, MUT offers a flexible payment plan. You must pay at least 60% of your tuition fees before sitting for examinations. Visit the Finance Office to arrange a payment plan. Contact: finance@mut.ac.ke",
        display_order: 1,
        is_featured: true,
    },
    FaqRecord {
        category: FEES_AND_PAYMENTS,
        question: "What happens if I don't clear my fee balance?",
        answer: "If you have outstanding fees: 1) You cannot sit for examinations, 2) You cannot register for the next semester, 3) Your results will be withheld, 4) You cannot graduate. However, you can arrange a payment plan with the Finance Office.",
        display_order: 2,
        is_featured: false,
    },
    FaqRecord {
        category: FEES_AND_PAYMENTS,
        question: "How long does it take for fee payment to reflect?",
        answer: "M-PESA and bank payments typically reflect within 24-48 hours. If your payment hasn't reflected after 48 hours, visit the Finance Office with your payment receipt.",
        display_order: 3,
        is_featured: false,
    },
    FaqRecord {
        category: ACADEMIC_INFORMATION,
        question: "When does registration open each semester?",
        answer: "Course registration opens 2 weeks before the semester starts and closes 2 weeks after semester begins. Late registration attracts a penalty fee of KES 1,000. Check the academic calendar on the student portal for exact dates.",
        display_order: 1,
        is_featured: true,
    },
    FaqRecord {
        category: ACADEMIC_INFORMATION,
        question: "How many units can I register for per semester?",
        answer: "Normal course load is 15-18 units per semester. Minimum is 12 units, maximum is 21 units. Taking more than 18 units requires approval from your Dean.",
        display_order: 2,
        is_featured: false,
    },
    FaqRecord {
        category: ACADEMIC_INFORMATION,
        question: "Can I defer my studies?",
        answer: "Yes, you can defer for valid reasons (medical, financial, etc.). Submit a deferment application to the Academic Registrar with supporting documents. Maximum deferment period is usually 2 semesters.",
        display_order: 3,
        is_featured: false,
    },
    FaqRecord {
        category: EXAMINATIONS,
        question: "What is the minimum attendance required for exams?",
        answer: "You must attend at least 75% of all lectures to be eligible to sit for examinations. Lecturers submit attendance lists to the Examination Office.",
        display_order: 1,
        is_featured: true,
    },
    FaqRecord {
        category: EXAMINATIONS,
        question: "How do I get my exam card?",
        answer: "Exam cards are downloaded from the student portal 2 weeks before examinations begin. You must have paid at least 60% of your fees to access your exam card.",
        display_order: 2,
        is_featured: false,
    },
    FaqRecord {
        category: EXAMINATIONS,
        question: "When are exam results released?",
        answer: "Results are typically released 4-6 weeks after the examination period ends. You can view them on the student portal. Physical result slips can be collected from the Academic Registrar's Office.",
        display_order: 3,
        is_featured: false,
    },
    FaqRecord {
        category: ADMISSIONS,
        question: "What are the minimum entry requirements?",
        answer: "Minimum requirements: KCSE C+ (Plus) or equivalent. Specific programs have additional requirements. For diplomas: KCSE C- (Minus). Check the website or contact admissions@mut.ac.ke for detailed requirements.",
        display_order: 1,
        is_featured: true,
    },
    FaqRecord {
        category: ADMISSIONS,
        question: "When do applications open?",
        answer: "Applications for September intake open in March-May. January intake (if available) opens in September-November. Check www.mut.ac.ke for specific dates.",
        display_order: 2,
        is_featured: false,
    },
    FaqRecord {
        category: ADMISSIONS,
        question: "Can I transfer from another university?",
        answer: "Yes, transfers are accepted. Requirements: 1) Good academic standing, 2) Letter from current institution, 3) Transcripts, 4) Meet MUT's entry requirements. Contact admissions@mut.ac.ke",
        display_order: 3,
        is_featured: false,
    },
    FaqRecord {
        category: GENERAL_INFORMATION,
        question: "Is there Wi-Fi on campus?",
        answer: "Yes, free Wi-Fi is available across campus. Use your student portal credentials to connect. Network name: MUT-Student. For connection issues, contact ICT Support.",
        display_order: 1,
        is_featured: false,
    },
    FaqRecord {
        category: GENERAL_INFORMATION,
        question: "Are there computer labs available?",
        answer: "Yes, several computer labs are available in the ICT Block. Labs are open Monday-Friday: 7:00 AM - 9:00 PM, Saturday: 8:00 AM - 6:00 PM. Your student ID is required for access.",
        display_order: 2,
        is_featured: false,
    },
    FaqRecord {
        category: GENERAL_INFORMATION,
        question: "Does the university offer medical services?",
        answer: "Yes, the Health Center provides basic medical services Monday-Friday 8:00 AM - 5:00 PM. Emergency services available 24/7. Most services are free for registered students. Complex cases referred to Murang'a Level 5 Hospital.",
        display_order: 3,
        is_featured: false,
    },
];
