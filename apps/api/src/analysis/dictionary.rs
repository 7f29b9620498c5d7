//! Fixed word lists the extractor scans a job description for.

use crate::models::keyword::KeywordCategory;

pub const TECHNICAL_SKILLS: &[&str] = &[
    "JavaScript", "TypeScript", "Python", "Java", "C#", "C++", "Ruby", "PHP", "Swift", "Kotlin",
    "React", "Angular", "Vue", "Node.js", "Express", "Django", "Flask", "Spring", "ASP.NET",
    "HTML", "CSS", "SASS", "LESS", "SQL", "NoSQL", "MongoDB", "PostgreSQL", "MySQL", "Oracle",
    "AWS", "Azure", "GCP", "Docker", "Kubernetes", "CI/CD", "Git", "GitHub", "GitLab", "BitBucket",
    "REST", "GraphQL", "Microservices", "Serverless", "API", "JSON", "XML", "AJAX",
];

pub const TOOLS: &[&str] = &[
    "Jira", "Confluence", "Trello", "Slack", "Teams", "Zoom", "Jenkins", "Travis CI", "CircleCI",
    "Webpack", "Babel", "ESLint", "Prettier", "npm", "yarn", "pnpm", "Gradle", "Maven",
    "VS Code", "IntelliJ", "Eclipse", "Xcode", "Android Studio", "Figma", "Sketch", "Photoshop",
];

pub const QUALIFICATIONS: &[&str] = &[
    "Bachelor", "Master", "PhD", "Degree", "Certificate", "Certification", "License", "Diploma",
    "Certified", "CSPO", "CSM", "PMP", "MBA", "CPA", "CFA", "AWS Certified", "Microsoft Certified",
    "Google Certified", "Cisco Certified", "CompTIA", "ITIL", "Agile", "Scrum", "Kanban", "Lean",
];

pub const EXPERIENCE_TERMS: &[&str] = &[
    "years", "experience", "lead", "senior", "junior", "entry-level", "mid-level", "architect",
    "manager", "director", "VP", "C-level", "CEO", "CTO", "CFO", "COO", "CMO", "CIO",
    "team", "project", "product", "development", "management", "leadership", "collaboration",
    "client", "customer", "stakeholder", "mentor", "coach", "consultant", "advisor",
];

/// Word lists in scan order. Extraction output follows this order.
pub const DICTIONARY: [(KeywordCategory, &[&str]); 4] = [
    (KeywordCategory::Skill, TECHNICAL_SKILLS),
    (KeywordCategory::Tool, TOOLS),
    (KeywordCategory::Qualification, QUALIFICATIONS),
    (KeywordCategory::Experience, EXPERIENCE_TERMS),
];
