use crate::llm_client::prompts::ADVISOR_PERSONA;
use crate::report::shape::ReportShape;
use crate::wizard::profile::Profile;

const MINIMAL_INSTRUCTIONS: &str = "\
Given the following user profile, generate a minimal report with:
1. A concise summary of the user's input (education, experience, skills, interests, goal, companies, learning style, time commitment, constraints) in a minimal, readable format.
2. A section titled 'Dream Job' that returns ONLY the most suitable job title (e.g., 'Full Stack Developer', 'Data Analyst', etc.) for the user based on their goal and background. Do NOT include any explanation or extra text.
3. A section titled 'Salary Potential' that returns ONLY the median annual salary number (in INR, e.g., '1200000') for that job in India, based on their background and skillset. Do NOT include any currency symbol, explanation, or extra text.

Format your response as:
---
User Summary:
<minimal summary here>

Dream Job:
<job title only>

Salary Potential:
<salary number only>
---";

const STRUCTURED_INSTRUCTIONS: &str = "\
Given the following user profile, generate an upskilling report. Use exactly the section \
headers shown below, each on its own line and ending with a colon. Do not put a colon at the \
end of any other line.

Format your response as:
---
Estimated Salary Range:
<annual salary range in INR for their current profile>

{roles}:
<numbered list of job titles they can realistically target>

{skills}:
<bulleted list of missing skills for those roles>

Suggested Learning Tracks:
<numbered list of courses or tracks, most important first>

ROI of Upskilling:
<expected salary or career impact of completing the tracks>
---";

/// Renders the output-format instructions for `shape`.
fn instructions(shape: ReportShape) -> String {
    match shape {
        ReportShape::Minimal => MINIMAL_INSTRUCTIONS.to_string(),
        ReportShape::Structured | ReportShape::StructuredAlt => {
            let required = shape.required_sections();
            STRUCTURED_INSTRUCTIONS
                .replace("{roles}", required[1])
                .replace("{skills}", required[2])
        }
    }
}

/// Builds the user prompt embedding all nine profile fields.
pub fn build_prompt(profile: &Profile, shape: ReportShape) -> String {
    let tech = profile
        .tech_knowledge
        .iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "{persona} {instructions}

User Profile:
Education: {education}
Experience: {experience}
Technical Knowledge: {tech}
Interests: {interests}
Career Goal: {goal}
Dream Companies/Industries: {companies}
Learning Style: {learning_style}
Time Commitment: {hours} hours/week
Other Constraints: {constraints}
",
        persona = ADVISOR_PERSONA,
        instructions = instructions(shape),
        education = profile.education,
        experience = profile.experience,
        interests = profile.interests,
        goal = profile.goal,
        companies = profile.companies,
        learning_style = profile.learning_style,
        hours = profile.time_commitment,
        constraints = profile.other_constraints,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::profile::sample_profile;

    #[test]
    fn test_prompt_embeds_every_profile_field() {
        let prompt = build_prompt(&sample_profile(), ReportShape::Minimal);
        assert!(prompt.contains("Education: Bachelor's Degree"));
        assert!(prompt.contains("Experience: 6 months QA internship"));
        assert!(prompt.contains("Technical Knowledge: Python, SQL"));
        assert!(prompt.contains("Interests: Data Analytics, Automation"));
        assert!(prompt.contains("Career Goal: Data Analyst"));
        assert!(prompt.contains("Dream Companies/Industries: Amazon, FinTech"));
        assert!(prompt.contains("Learning Style: Hybrid"));
        assert!(prompt.contains("Time Commitment: 12 hours/week"));
        assert!(prompt.contains("Other Constraints: Weekend classes only"));
    }

    #[test]
    fn test_prompt_lists_required_headers_for_each_shape() {
        for shape in [
            ReportShape::Minimal,
            ReportShape::Structured,
            ReportShape::StructuredAlt,
        ] {
            let prompt = build_prompt(&sample_profile(), shape);
            for header in shape.required_sections() {
                assert!(
                    prompt.contains(&format!("{header}:\n")),
                    "{shape} prompt is missing header '{header}'"
                );
            }
        }
    }

    #[test]
    fn test_structured_alt_uses_alternate_wording() {
        let prompt = build_prompt(&sample_profile(), ReportShape::StructuredAlt);
        assert!(prompt.contains("Roles to Aim For:"));
        assert!(!prompt.contains("Roles They Can Aim For"));
    }

    #[test]
    fn test_prompt_starts_with_persona() {
        let prompt = build_prompt(&sample_profile(), ReportShape::Structured);
        assert!(prompt.starts_with(ADVISOR_PERSONA));
    }
}
