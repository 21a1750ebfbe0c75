use crate::search::Searchable;

#[derive(Debug, PartialEq)]
pub struct JobPosting {
    pub id: &'static str,
    pub title: &'static str,
    pub department: &'static str,
    pub location: &'static str,
    pub kind: &'static str,
    pub description: &'static str,
    pub requirements: &'static [&'static str],
    pub responsibilities: &'static [&'static str],
    pub benefits: &'static [&'static str],
}

impl Searchable for JobPosting {
    fn category(&self) -> &str {
        self.department
    }

    fn search_text(&self) -> [&str; 2] {
        [self.title, self.description]
    }
}

pub static JOB_POSTINGS: [JobPosting; 3] = [
    JobPosting {
        id: "sd-001",
        title: "Senior Software Developer",
        department: "Engineering",
        location: "Bangalore, India",
        kind: "Full-time",
        description: "We are looking for an experienced software developer to design, develop and implement software solutions for our clients. You will work with a team of talented developers to create high-quality applications.",
        requirements: &[
            "5+ years of experience in software development",
            "Strong proficiency in JavaScript, TypeScript, and React",
            "Experience with Node.js and Express",
            "Knowledge of database systems (SQL, NoSQL)",
            "Understanding of software development methodologies",
            "Excellent problem-solving skills",
        ],
        responsibilities: &[
            "Design and develop software solutions",
            "Write clean, maintainable, and efficient code",
            "Collaborate with cross-functional teams",
            "Perform code reviews and mentor junior developers",
            "Troubleshoot and debug applications",
            "Develop and implement new features",
        ],
        benefits: &[
            "Competitive salary and bonus structure",
            "Comprehensive health, dental, and vision insurance",
            "Generous paid time off",
            "Professional development opportunities",
            "Modern office with collaborative spaces",
            "Regular team-building activities",
        ],
    },
    JobPosting {
        id: "da-001",
        title: "Data Analyst",
        department: "Data Science",
        location: "Remote",
        kind: "Full-time",
        description: "We are seeking a skilled Data Analyst to interpret data and turn it into information which can offer ways to improve our business, explore new business opportunities, and develop marketing strategies.",
        requirements: &[
            "3+ years of experience in data analysis",
            "Proficiency in SQL and data manipulation",
            "Experience with data visualization tools",
            "Knowledge of statistical methods and data mining",
            "Excellent analytical and problem-solving skills",
            "Strong communication skills",
        ],
        responsibilities: &[
            "Analyze data to identify patterns and trends",
            "Create and maintain dashboards and reports",
            "Collaborate with teams to gather requirements",
            "Develop and implement data analysis strategies",
            "Present findings to stakeholders",
            "Identify process improvements",
        ],
        benefits: &[
            "Competitive salary and performance bonuses",
            "Comprehensive health insurance",
            "Flexible work schedule",
            "Home office stipend",
            "Regular virtual team events",
            "Continuous learning opportunities",
        ],
    },
    JobPosting {
        id: "ux-001",
        title: "UX/UI Designer",
        department: "Design",
        location: "Bangalore, India",
        kind: "Full-time",
        description: "We are looking for a talented UX/UI Designer to create amazing user experiences. The ideal candidate should have an eye for clean and artful design, possess superior UI/UX skills, and be able to translate high-level requirements into interaction flows and artifacts.",
        requirements: &[
            "3+ years of experience in UX/UI design",
            "Strong portfolio demonstrating design skills",
            "Proficiency in design tools like Figma, Sketch, Adobe XD",
            "Knowledge of UI/UX best practices",
            "Understanding of user research and usability principles",
            "Experience with responsive design",
        ],
        responsibilities: &[
            "Create user-centered designs",
            "Develop wireframes and prototypes",
            "Conduct user research and testing",
            "Collaborate with developers to implement designs",
            "Create visual elements and design systems",
            "Ensure designs are accessible and inclusive",
        ],
        benefits: &[
            "Competitive salary with performance bonuses",
            "Comprehensive benefits package",
            "Paid time off and holidays",
            "Creative work environment",
            "Professional development budget",
            "Regular team outings and events",
        ],
    },
];

/// Why-join cards: (title, blurb).
pub const PERKS: [(&str, &str); 3] = [
    ("Innovation", "Work on cutting-edge technologies and innovative solutions that are shaping the future of industries."),
    ("Collaboration", "Join a collaborative team environment where ideas are valued and diverse perspectives are encouraged."),
    ("Growth", "Develop your skills and advance your career with our comprehensive professional development programs."),
];

pub const APPLICATION_STEPS: [(&str, &str); 4] = [
    ("Application Submission", "Submit your application through our careers page. Include your resume and a cover letter explaining why you're interested in the position and how your skills match our requirements."),
    ("Initial Screening", "Our recruitment team will review your application and reach out to schedule an initial phone or video interview if your qualifications match our requirements."),
    ("Technical Assessment", "Depending on the role, you may be asked to complete a technical assessment or case study to demonstrate your skills and problem-solving abilities."),
    ("Team Interviews", "You'll meet with potential team members and managers through a series of interviews to assess your technical skills, experience, and cultural fit."),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{categories, filter};

    #[test]
    fn departments_become_filter_chips() {
        assert_eq!(
            categories(&JOB_POSTINGS),
            vec!["All", "Engineering", "Data Science", "Design"]
        );
        assert_eq!(filter(&JOB_POSTINGS, "", "Design")[0].id, "ux-001");
    }
}
