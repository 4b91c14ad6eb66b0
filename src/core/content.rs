// Static page content. Every section renders from these tables.

#[derive(Clone, Copy, Debug)]
pub struct NavItem {
    pub label: &'static str,
    pub target: &'static str,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { label: "Home", target: "home" },
    NavItem { label: "About", target: "about" },
    NavItem { label: "Projects", target: "projects" },
    NavItem { label: "Resume", target: "resume" },
    NavItem { label: "Contact", target: "contact" },
];

pub const OWNER_NAME: &str = "Yash Goyal";
pub const OWNER_INITIALS: &str = "YG";
pub const OWNER_ROLE: &str = "Data/Business Analyst";

pub const HERO_TAGLINE: &str = "Transforming Data into Insights";
pub const HERO_SUMMARY: &str = "Aspiring Data/Business Analyst with expertise in Python, Power BI, and Excel. \
I create compelling analytics dashboards that drive business decisions.";
pub const HERO_BADGES: &[&str] = &["Data Analysis", "Business Intelligence", "Dashboard Creation"];

#[derive(Clone, Copy, Debug)]
pub struct Skill {
    pub name: &'static str,
    pub level: u8,
    pub tone: &'static str,
}

pub const SKILLS: &[Skill] = &[
    Skill { name: "Python", level: 90, tone: "yellow" },
    Skill { name: "SQL", level: 85, tone: "blue" },
    Skill { name: "Power BI", level: 88, tone: "orange" },
    Skill { name: "Excel", level: 92, tone: "green" },
    Skill { name: "Machine Learning", level: 85, tone: "purple" },
    Skill { name: "Predictive Analytics", level: 82, tone: "pink" },
    Skill { name: "SAS", level: 85, tone: "slate" },
    Skill { name: "Spark", level: 80, tone: "red" },
];

#[derive(Clone, Copy, Debug)]
pub struct TimelineEntry {
    pub title: &'static str,
    pub place: &'static str,
    pub meta: &'static str,
    pub description: &'static str,
}

pub const EDUCATION: &[TimelineEntry] = &[
    TimelineEntry {
        title: "MBA in Business Intelligence & Analytics",
        place: "Narsee Monjee Institute of Management Studies, Mumbai",
        meta: "2024-2025",
        description: "Specializing in data-driven business strategy and advanced analytics",
    },
    TimelineEntry {
        title: "B.Tech in Computer Engineering",
        place: "Narsee Monjee Institute of Management Studies, Mumbai",
        meta: "2020-2024",
        description: "Strong foundation in computer science and programming",
    },
    TimelineEntry {
        title: "Senior Secondary Education",
        place: "Siddharth Public School, Deoli",
        meta: "78.8%",
        description: "Focused on science curriculum with emphasis on mathematics and computer studies",
    },
];

pub const EXPERIENCE: &[TimelineEntry] = &[
    TimelineEntry {
        title: "Analytics & Backend Software Intern",
        place: "NeuroSync AI",
        meta: "Internship",
        description: "Contributing to backend development using FastAPI framework by database integration \
and LangGraph optimization to improve workflow efficiency and system performance.",
    },
    TimelineEntry {
        title: "Microsoft Future Ready Talent",
        place: "Microsoft",
        meta: "Certification Program",
        description: "Advanced training in cloud technologies and data analytics",
    },
    TimelineEntry {
        title: "Data Analytics Intern",
        place: "Bank of Baroda",
        meta: "Internship",
        description: "Developed financial dashboards and performed risk analysis",
    },
];

#[derive(Clone, Copy, Debug)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tech_stack: &'static [&'static str],
    pub image: &'static str,
    pub tone: &'static str,
    pub features: &'static [&'static str],
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Sales Analytics Dashboard",
        description: "Interactive Excel dashboard analyzing sales performance across multiple stores with KPI tracking",
        tech_stack: &["Excel", "Pivot Table", "Power Query"],
        image: "https://images.pexels.com/photos/590020/pexels-photo-590020.jpeg?auto=compress&cs=tinysrgb&w=800",
        tone: "blue",
        features: &[
            "Real-time KPI monitoring",
            "Regional performance analysis",
            "Sales forecasting",
            "Interactive filters",
        ],
    },
    Project {
        title: "HR Analytics Dashboard",
        description: "Interactive Power BI dashboard analyzing attrition reasons across multiple departments with KPI tracking.",
        tech_stack: &["Power BI", "DAX", "Power Query"],
        image: "https://images.pexels.com/photos/265087/pexels-photo-265087.jpeg?auto=compress&cs=tinysrgb&w=800",
        tone: "purple",
        features: &[
            "K-means clustering",
            "Customer lifetime value",
            "Behavioral analysis",
            "Automated reporting",
        ],
    },
    Project {
        title: "Loan Prediction",
        description: "Loan amount prediction using linear regression and Excel",
        tech_stack: &["Excel", "VBA", "SQL", "Power Query"],
        image: "https://images.pexels.com/photos/159888/pexels-photo-159888.jpeg?auto=compress&cs=tinysrgb&w=800",
        tone: "green",
        features: &[
            "Risk scoring models",
            "Stress testing",
            "Regulatory compliance",
            "Automated alerts",
        ],
    },
    Project {
        title: "Heart Disease Prediction",
        description: "Heart disease Predictive analytics using Machine Learning algorithms like Logistic Regression, \
KNN, Random Forest and Python",
        tech_stack: &["Python", "Machine Learning", "Scikit-Learn", "Pandas", "Seaborn", "Matplotlib"],
        image: "https://images.pexels.com/photos/273230/pexels-photo-273230.jpeg?auto=compress&cs=tinysrgb&w=800",
        tone: "orange",
        features: &[
            "Multi-channel attribution",
            "ROI optimization",
            "A/B testing analysis",
            "Customer journey mapping",
        ],
    },
];

pub const RESUME_URL: &str =
    "https://drive.google.com/file/d/1jI-VqRln8txBXKW6MCUYyCIifmjCteIG/view?usp=sharing";
pub const RESUME_FILENAME: &str = "Yash_Goyal_Resume.pdf";
pub const RESUME_META: &[&str] = &["PDF Format", "2 Pages", "Updated Dec 2024"];

pub const RESUME_HIGHLIGHTS: &[&str] = &[
    "B.Tech in Computer Engineering + MBA in Business Intelligence",
    "Expertise in Python, SQL, Power BI, and Excel",
    "Microsoft Future Ready Talent Certified",
    "Banking Industry Experience (Bank of Baroda)",
    "Multiple Analytics Dashboard Projects",
    "Strong Business Intelligence Background",
];

pub const RESUME_INCLUDES: &[&str] = &[
    "Detailed work experience and internships",
    "Complete educational background",
    "Technical skills and certifications",
    "Project portfolio with descriptions",
    "Contact information and references",
];

#[derive(Clone, Copy, Debug)]
pub struct ContactLink {
    pub label: &'static str,
    pub value: &'static str,
    pub href: &'static str,
    pub tone: &'static str,
}

pub const CONTACT_INFO: &[ContactLink] = &[
    ContactLink {
        label: "Email",
        value: "yash.goyal2025@gmail.com",
        href: "mailto:yash.goyal2025@gmail.com",
        tone: "red",
    },
    ContactLink {
        label: "Phone",
        value: "+91 6376843277",
        href: "tel:+916376843277",
        tone: "green",
    },
    ContactLink {
        label: "Location",
        value: "India",
        href: "#",
        tone: "blue",
    },
];

pub const SOCIAL_LINKS: &[ContactLink] = &[
    ContactLink {
        label: "LinkedIn",
        value: "in/yashgoyal",
        href: "https://linkedin.com/in/yashgoyal",
        tone: "blue",
    },
    ContactLink {
        label: "GitHub",
        value: "yashgoyal",
        href: "https://github.com/yashgoyal",
        tone: "slate",
    },
    ContactLink {
        label: "Email",
        value: "yash.goyal2025@gmail.com",
        href: "mailto:yash.goyal2025@gmail.com",
        tone: "red",
    },
];
