/// Domains considered close enough to suggest as a next step.
const RELATED_DOMAINS: &[(&str, &[&str])] = &[
    (
        "Data Analysis",
        &["Machine Learning", "Full-Stack Development"],
    ),
    (
        "Full-Stack Development",
        &["Data Analysis", "Machine Learning"],
    ),
    (
        "Machine Learning",
        &["Data Analysis", "Full-Stack Development"],
    ),
];

/// Related domains in lookup order. Unknown domains have none.
pub fn related_domains(domain: &str) -> &'static [&'static str] {
    RELATED_DOMAINS
        .iter()
        .find(|(name, _)| *name == domain)
        .map(|(_, related)| *related)
        .unwrap_or(&[])
}
