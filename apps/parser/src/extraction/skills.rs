/// Skill vocabulary. Output follows this order, not the order skills appear in
/// the document.
pub const SKILL_VOCABULARY: &[&str] = &[
    // Languages
    "Python",
    "Java",
    "JavaScript",
    "TypeScript",
    "C++",
    "C#",
    "PHP",
    "Ruby",
    "Go",
    "Rust",
    "Kotlin",
    "Swift",
    "Scala",
    "HTML",
    "CSS",
    // Frameworks
    "React",
    "Angular",
    "Vue",
    "Node.js",
    "Express",
    "Django",
    "Flask",
    "FastAPI",
    "Spring",
    "Laravel",
    "Rails",
    // Data stores
    "SQL",
    "MySQL",
    "PostgreSQL",
    "MongoDB",
    "Redis",
    "Elasticsearch",
    "Kafka",
    // Cloud and platform
    "AWS",
    "Azure",
    "Google Cloud",
    "Docker",
    "Kubernetes",
    "Terraform",
    "Jenkins",
    "Git",
    "GitHub",
    "GitLab",
    "Bitbucket",
    // Data and ML
    "Machine Learning",
    "Deep Learning",
    "AI",
    "Data Science",
    "Analytics",
    "TensorFlow",
    "PyTorch",
    "Scikit-learn",
    "Pandas",
    "NumPy",
    // Operating systems
    "Linux",
    "Unix",
    "Windows",
    "MacOS",
    // Practices
    "Agile",
    "Scrum",
    "DevOps",
    "CI/CD",
];

/// Every vocabulary skill that occurs anywhere in `text`, case-insensitively.
/// Plain substring containment: no scoring, no word boundaries.
pub fn extract_skills(text: &str) -> Vec<String> {
    let text_lower = text.to_lowercase();
    SKILL_VOCABULARY
        .iter()
        .filter(|skill| text_lower.contains(&skill.to_lowercase()))
        .map(|skill| skill.to_string())
        .collect()
}
