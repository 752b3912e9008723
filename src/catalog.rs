use crate::content::{
    Bundle, Certification, Education, Experience, Localized, NavLabels, Profile, Project, Skill,
    SkillGroup, SkillIcon,
};

pub static PROFILE: Profile = Profile {
    name: "Muhammad Zaki",
    photo: "assets/zaki.png",
    cv_href: "/assets/CV_ATS_Muhammad Zaki.pdf",
    cv_file_name: "CV_Muhammad_Zaki.pdf",
    email: "mhmdzki00@gmail.com",
    phone_display: "+62 859-5471-1445",
    whatsapp_number: "6285954711445",
    linkedin_handle: "muhammad-zakii",
    github_handle: "mhmdzki",
    copyright_year: 2025,
};

pub static EN: Bundle = Bundle {
    nav: NavLabels {
        home: "// HOME",
        projects: "// PROJECTS",
        skills: "// SKILLS",
        experience: "// EXPERIENCE",
        contact: "// CONTACT",
    },
    role: "// FULL-STACK DEVELOPER",
    hi: "Hi, I'm",
    bio_short: "A 5th-semester Informatics Engineering student at Politeknik Negeri Malang with 2+ years experience building web and mobile apps using Laravel, Flutter, and modern databases.",
    bio_long: "I’m a 5th-semester Informatics Engineering student at Politeknik Negeri Malang learning full-stack development, focusing mainly on frontend design and implementation. I also have experience in QA testing and data analysis, which allows me to ensure both functionality and quality in the projects I work on. Over the past 2+ years, I’ve actively contributed to web projects, and still learning to sharpen my skills. I’m passionate about creating intuitive, user-focused solutions and eager to bring my expertise to collaborative, professional environments.",
    download: "Download CV",
    view_projects: "View Projects",
    about_title: "About Me",
    projects_title: "<PROJECTS/> ARCHIVE",
    projects_desc: "// A few projects I've worked on",
    view_repo: "View Repo",
    preview: "Preview",
    skills_title: "MY STACK",
    skills_desc: "Core technologies & tools I use",
    experience_title: "EXPERIENCE",
    education_title: "EDUCATION",
    certs_title: "LICENSE & CERTIFICATIONS",
    contact_title: "Let's Connect",
    contact_desc: "I'm open to collaborations and internships. Reach me on email, WhatsApp or socials.",
    send_email: "Send Email",
    find_me: "FIND ME HERE",
    footer: "Built with Rust + Yew",
    toggle_language: "Toggle language",
    toggle_theme: "Toggle theme",
    toggle_menu: "Toggle menu",
    opens_new_tab: " (opens in a new tab)",
};

pub static ID: Bundle = Bundle {
    nav: NavLabels {
        home: "// BERANDA",
        projects: "// PROYEK",
        skills: "// KEMAMPUAN",
        experience: "// PENGALAMAN",
        contact: "// KONTAK",
    },
    role: "// PENGEMBANG FULL-STACK",
    hi: "Halo, saya",
    bio_short: "Mahasiswa semester 5 Teknik Informatika Politeknik Negeri Malang dengan minat pada pengembangan full stack dan 2+ tahun pengalaman membangun aplikasi menggunakan Laravel, Flutter dan basis data modern.",
    bio_long: "Mahasiswa semester 5 Teknik Informatika Politeknik Negeri Malang dengan minat besar pada pengembangan full stack. Memiliki pengalaman lebih dari 2 tahun dalam pembangunan aplikasi full stack menggunakan Laravel, Flutter, dan basis data modern. Saat ini memperluas pengetahuan di pengembangan mobile, business intelligence, machine learning, dan computer vision. Antusias membangun sistem yang efisien, skalabel, dan berpusat pada pengguna sebagai bagian dari tim pengembangan profesional.",
    download: "Unduh CV",
    view_projects: "Lihat Proyek",
    about_title: "Tentang Saya",
    projects_title: "<PROYEK/> ARSIP",
    projects_desc: "// Beberapa proyek yang pernah saya kerjakan",
    view_repo: "Lihat Repo",
    preview: "Pratinjau",
    skills_title: "KEMAMPUAN SAYA",
    skills_desc: "Teknologi & alat utama yang saya gunakan",
    experience_title: "PENGALAMAN",
    education_title: "PENDIDIKAN",
    certs_title: "SERTIFIKASI",
    contact_title: "Mari Terhubung",
    contact_desc: "Saya terbuka untuk kolaborasi dan magang. Hubungi saya lewat email, WhatsApp, atau sosial media.",
    send_email: "Kirim Email",
    find_me: "TEMUKAN SAYA DI SINI",
    footer: "Dibangun dengan Rust + Yew",
    toggle_language: "Ganti bahasa",
    toggle_theme: "Ganti tema",
    toggle_menu: "Buka/tutup menu",
    opens_new_tab: " (terbuka di tab baru)",
};

pub static PROJECTS: &[Project] = &[
    Project {
        id: "sigmagang",
        title: "Sigmagang - Internship Recommendation",
        description: Localized::new(
            "Internship management system with recommendation feature built using Laravel and MySQL.",
            "Sistem manajemen magang dengan fitur rekomendasi dibangun menggunakan Laravel dan MySQL.",
        ),
        tech: &["Laravel", "MySQL", "PHP", "JavaScript", "Tailwind"],
        image: "assets/projects/sigmagang.png",
        link: "https://github.com/mhmdzki/sigmagang",
    },
    Project {
        id: "sipresma",
        title: "Sipresma - Student Achievement",
        description: Localized::new(
            "Student achievement recording system with role-based access and reporting.",
            "Sistem pencatatan prestasi mahasiswa dengan akses berbasis peran dan pelaporan.",
        ),
        tech: &["Bootstrap", "CSS", "JavaScript", "PHP", "MySQL"],
        image: "assets/projects/sipresma.png",
        link: "https://github.com/FarhanMawaludin/PBL-SIPRESMA",
    },
    Project {
        id: "chadshop",
        title: "ChadShop - E-commerce Web",
        description: Localized::new(
            "Web-based online sales system with product management and cart features.",
            "Sistem penjualan online berbasis web dengan manajemen produk dan fitur keranjang.",
        ),
        tech: &["HTML", "CSS", "JS", "PHP"],
        image: "assets/projects/chadshop.png",
        link: "https://github.com/mhmdzki/PWL_Zaki_2E",
    },
    Project {
        id: "newstingting",
        title: "Newstingting - News Reading Platform",
        description: Localized::new(
            "A web-based news reading platform that allows users to browse, search, and read articles easily.",
            "Platform web untuk membaca berita yang memungkinkan pengguna menjelajah, mencari, dan membaca artikel dengan mudah.",
        ),
        tech: &["HTML", "CSS", "PHP", "MySQL"],
        image: "assets/projects/newstingting.png",
        link: "https://github.com/lostboiii/basis-data-kel5",
    },
];

pub static SKILLS: &[SkillGroup] = &[
    SkillGroup {
        category: "Frontend",
        icon: SkillIcon::Code,
        items: &[
            Skill { name: "HTML", percent: 90 },
            Skill { name: "CSS", percent: 85 },
            Skill { name: "JavaScript", percent: 80 },
            Skill { name: "React", percent: 60 },
        ],
    },
    SkillGroup {
        category: "Backend",
        icon: SkillIcon::Server,
        items: &[
            Skill { name: "Laravel", percent: 85 },
            Skill { name: "PHP", percent: 80 },
            Skill { name: "MySQL", percent: 85 },
            Skill { name: "Node.js", percent: 60 },
        ],
    },
    SkillGroup {
        category: "Tools",
        icon: SkillIcon::Zap,
        items: &[
            Skill { name: "Git", percent: 95 },
            Skill { name: "VS Code", percent: 90 },
            Skill { name: "Figma", percent: 70 },
            Skill { name: "Flutter", percent: 60 },
        ],
    },
];

pub static EXPERIENCE: Experience = Experience {
    role: "Academic Project Developer — Politeknik Negeri Malang",
    place: "Malang, Indonesia",
    period: "Aug 2023 – Present",
    bullets: Localized {
        en: &[
            "Designed and developed several academic projects using HTML, CSS, JavaScript, PHP, Laravel, and MySQL.",
            "Built systems such as Sipresma (Student Achievement Recording System) and Sigmagang (Internship Management System with Recommendation Feature).",
            "Developed ChadShop (Web E-Commerce) and Web Learning (interactive web project).",
            "Implemented frontend, backend, and database schema for scalable systems.",
            "Designed creative assets using Canva aligning with branding needs.",
            "Applied software quality assurance and project management principles in team environments.",
        ],
        id: &[
            "Merancang dan mengembangkan berbagai proyek akademik menggunakan HTML, CSS, JavaScript, PHP, Laravel, dan MySQL.",
            "Membangun sistem seperti Sipresma (Sistem Pencatatan Prestasi Mahasiswa) dan Sigmagang (Sistem Manajemen Magang dengan Fitur Rekomendasi).",
            "Mengembangkan ChadShop (E-Commerce Web) dan Web Learning (proyek web interaktif).",
            "Menerapkan arsitektur frontend, backend, dan skema basis data untuk sistem yang skalabel.",
            "Mendesain aset kreatif menggunakan Canva sesuai kebutuhan branding.",
            "Menerapkan QA perangkat lunak dan prinsip manajemen proyek dalam tim.",
        ],
    },
};

pub static EDUCATION: Education = Education {
    school: "Politeknik Negeri Malang",
    period: "Aug 2023 – Present",
    degree: Localized::new(
        "Undergraduate in Informatics Engineering",
        "Sarjana Terapan Teknik Informatika",
    ),
    gpa: "GPA: 3.72 / 4.00",
    highlights: Localized::new(
        "Highlighted courses: Programming, Web Development, Databases, Software Engineering, AI, Networking, Mathematics, Project Management.",
        "Mata kuliah unggulan: Pemrograman, Pengembangan Web, Basis Data, Rekayasa Perangkat Lunak, AI, Jaringan, Matematika, Manajemen Proyek.",
    ),
};

pub static CERTIFICATIONS: &[Certification] = &[Certification {
    title: Localized::new(
        "Copyright Certificate — \"Sigmagang\"",
        "Sertifikat Hak Cipta — \"Sigmagang\"",
    ),
    issuer: Localized::new(
        "Directorate General of Intellectual Property — Ministry of Law and Human Rights, Republic of Indonesia (2025)",
        "Direktorat Jenderal Kekayaan Intelektual — Kementerian Hukum dan HAM RI (2025)",
    ),
}];
