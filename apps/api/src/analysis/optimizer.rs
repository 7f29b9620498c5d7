//! Optimizer — splices keywords the resume is missing into its skills section.
//!
//! Resumes with a `SKILLS` heading get `Additional Skills` / `Additional Tools`
//! lines at the end of that section. Resumes without one get an
//! `ADDITIONAL SKILLS` section appended, one line per category.

use serde::{Deserialize, Serialize};

use crate::models::keyword::{Keyword, KeywordCategory};

const SKILLS_HEADING: &str = "SKILLS";
/// Headings that end the skills section, tried in order.
const SECTION_TERMINATORS: &[&str] = &["EXPERIENCE", "EDUCATION"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Optimization {
    pub optimized_resume: String,
    /// Keywords that were written into the resume.
    pub added_keywords: Vec<Keyword>,
}

pub fn generate_optimized_resume(resume_text: &str, keywords: &[Keyword]) -> Optimization {
    if resume_text.is_empty() {
        return Optimization::default();
    }

    let resume_lower = resume_text.to_lowercase();
    let missing: Vec<&Keyword> = keywords
        .iter()
        .filter(|keyword| !keyword.found_in(&resume_lower))
        .collect();

    if missing.is_empty() {
        return Optimization {
            optimized_resume: resume_text.to_string(),
            added_keywords: vec![],
        };
    }

    match resume_text.find(SKILLS_HEADING) {
        Some(skills_start) => extend_skills_section(resume_text, skills_start, &missing),
        None => append_additional_skills(resume_text, &missing),
    }
}

/// Adds missing skills and tools to the end of the existing skills section.
/// Other categories are left out.
fn extend_skills_section(
    resume_text: &str,
    skills_start: usize,
    missing: &[&Keyword],
) -> Optimization {
    let section_end = SECTION_TERMINATORS
        .iter()
        .find_map(|heading| {
            resume_text[skills_start..]
                .find(heading)
                .map(|offset| skills_start + offset)
        })
        .unwrap_or(resume_text.len());

    let section = &resume_text[skills_start..section_end];
    let body = section.trim_end();
    let trailing = &section[body.len()..];

    let mut added = Vec::new();
    let mut lines = String::new();
    for (category, label) in [
        (KeywordCategory::Skill, "Additional Skills"),
        (KeywordCategory::Tool, "Additional Tools"),
    ] {
        let group: Vec<&Keyword> = missing
            .iter()
            .copied()
            .filter(|keyword| keyword.category == category)
            .collect();
        if group.is_empty() {
            continue;
        }
        lines.push_str(&format!("\n- {label}: {}", join_texts(&group)));
        added.extend(group.into_iter().cloned());
    }

    if added.is_empty() {
        return Optimization {
            optimized_resume: resume_text.to_string(),
            added_keywords: vec![],
        };
    }

    let optimized_resume = format!(
        "{}{}{}{}{}",
        &resume_text[..skills_start],
        body,
        lines,
        trailing,
        &resume_text[section_end..]
    );

    Optimization {
        optimized_resume,
        added_keywords: added,
    }
}

/// Appends an `ADDITIONAL SKILLS` section grouped by category, in order of
/// first appearance.
fn append_additional_skills(resume_text: &str, missing: &[&Keyword]) -> Optimization {
    let mut groups: Vec<(KeywordCategory, Vec<&Keyword>)> = Vec::new();
    for &keyword in missing {
        match groups
            .iter()
            .position(|(category, _)| *category == keyword.category)
        {
            Some(index) => groups[index].1.push(keyword),
            None => groups.push((keyword.category, vec![keyword])),
        }
    }

    let mut optimized_resume = format!("{resume_text}\n\nADDITIONAL SKILLS\n");
    for (category, group) in &groups {
        optimized_resume.push_str(&format!("- {}: {}\n", category.label(), join_texts(group)));
    }

    Optimization {
        optimized_resume,
        added_keywords: missing.iter().map(|k| (*k).clone()).collect(),
    }
}

fn join_texts(keywords: &[&Keyword]) -> String {
    keywords
        .iter()
        .map(|k| k.text.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
