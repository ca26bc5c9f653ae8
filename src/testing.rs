//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical fixtures so tests don't each invent their own talent pool.

#![doc(hidden)]

use crate::types::Candidate;

/// Create a candidate with a fixed location ("San Francisco, CA") and no optional fields.
///
/// This is the canonical implementation used across all tests.
pub fn make_candidate(id: &str, name: &str, title: &str, skills: &[&str]) -> Candidate {
    Candidate {
        id: id.to_string(),
        name: name.to_string(),
        title: title.to_string(),
        location: "San Francisco, CA".to_string(),
        skills: skills.iter().map(|s| s.to_string()).collect(),
        ..Candidate::default()
    }
}

/// The candidate from the "python engineer" worked example.
pub fn sarah_chen() -> Candidate {
    make_candidate("1", "Sarah Chen", "Senior AI Engineer", &["Python", "TensorFlow"])
}

#[allow(clippy::too_many_arguments)]
fn full(
    id: &str,
    name: &str,
    title: &str,
    location: &str,
    skills: &[&str],
    current_company: Option<&str>,
    past_companies: &[&str],
    schools: &[&str],
) -> Candidate {
    let slug = name.to_lowercase().replace(' ', "-");
    Candidate {
        id: id.to_string(),
        name: name.to_string(),
        title: title.to_string(),
        location: location.to_string(),
        skills: skills.iter().map(|s| s.to_string()).collect(),
        current_company: current_company.map(str::to_string),
        past_companies: past_companies.iter().map(|s| s.to_string()).collect(),
        schools: schools.iter().map(|s| s.to_string()).collect(),
        email: Some(format!("{}@example.com", slug)),
        linkedin_url: Some(format!("https://linkedin.com/in/{}", slug)),
        resume_url: None,
    }
}

/// A small, varied talent pool. Same records as `data/candidates.json`.
pub fn sample_candidates() -> Vec<Candidate> {
    vec![
        full(
            "1",
            "Sarah Chen",
            "Senior AI Engineer",
            "San Francisco, CA",
            &["Python", "TensorFlow", "PyTorch", "Machine Learning"],
            Some("OpenAI"),
            &["Google", "Meta"],
            &["Stanford University"],
        ),
        full(
            "2",
            "Marcus Johnson",
            "Full Stack Developer",
            "New York, NY",
            &["React", "Node.js", "TypeScript", "PostgreSQL"],
            Some("Stripe"),
            &["Square"],
            &["Columbia University"],
        ),
        full(
            "3",
            "Priya Patel",
            "Data Scientist",
            "Boston, MA",
            &["Python", "R", "SQL", "Statistics"],
            Some("HubSpot"),
            &["Wayfair"],
            &["MIT"],
        ),
        full(
            "4",
            "James Wilson",
            "Senior Backend Engineer",
            "Seattle, WA",
            &["Go", "Kubernetes", "AWS", "PostgreSQL"],
            Some("Amazon"),
            &["Microsoft"],
            &["University of Washington"],
        ),
        full(
            "5",
            "Elena Rodriguez",
            "Product Designer",
            "Austin, TX",
            &["Figma", "User Research", "Prototyping"],
            Some("Figma"),
            &["Dell"],
            &["Rhode Island School of Design"],
        ),
        full(
            "6",
            "David Kim",
            "Machine Learning Engineer",
            "Boston, MA",
            &["Python", "PyTorch", "Kubernetes"],
            None,
            &["Google", "Boston Dynamics"],
            &["MIT", "Carnegie Mellon University"],
        ),
        full(
            "7",
            "Aisha Okafor",
            "Senior Frontend Engineer",
            "Remote",
            &["React", "TypeScript", "JavaScript", "CSS"],
            Some("Shopify"),
            &[],
            &[],
        ),
        full(
            "8",
            "Tom Becker",
            "DevOps Engineer",
            "Denver, CO",
            &["AWS", "Terraform", "Python", "Java"],
            Some("Palantir"),
            &["IBM"],
            &["University of Colorado Boulder"],
        ),
    ]
}
