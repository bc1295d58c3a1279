//! Built-in sample resume served to the editor before a real resume is loaded.

use crate::resume::models::{ComponentMetadata, ComponentType, ResumeComponent};

fn job(
    id: &str,
    position: &str,
    company: &str,
    dates: &str,
    location: &str,
    bullets: Vec<ResumeComponent>,
) -> ResumeComponent {
    ResumeComponent::new(id, ComponentType::Job, position, format!("{company}, {location}"))
        .with_metadata(ComponentMetadata {
            company: Some(company.to_string()),
            position: Some(position.to_string()),
            dates: Some(dates.to_string()),
            location: Some(location.to_string()),
            ..Default::default()
        })
        .with_children(bullets)
}

fn bullet(id: &str, title: &str, content: &str) -> ResumeComponent {
    ResumeComponent::new(id, ComponentType::Bullet, title, content)
}

fn section(
    id: &str,
    kind: &str,
    title: &str,
    content: &str,
    children: Vec<ResumeComponent>,
) -> ResumeComponent {
    ResumeComponent::new(id, ComponentType::Section, title, content)
        .with_metadata(ComponentMetadata {
            kind: Some(kind.to_string()),
            ..Default::default()
        })
        .with_children(children)
}

pub fn sample_resume() -> ResumeComponent {
    let experience = section(
        "section-1",
        "experience",
        "Work Experience",
        "Professional experience",
        vec![
            job(
                "job-1",
                "Senior Software Engineer",
                "Northwind Systems",
                "Mar 2021 - Present",
                "Seattle, WA",
                vec![
                    bullet(
                        "bullet-1",
                        "Led event pipeline rewrite",
                        "Led rewrite of the event ingestion pipeline serving 8M+ users, reducing p99 latency by 45%",
                    ),
                    bullet(
                        "bullet-2",
                        "Implemented deployment automation",
                        "Implemented blue-green deployments with GitHub Actions and Terraform, cutting release time from 3 hours to 20 minutes",
                    ),
                    bullet(
                        "bullet-3",
                        "Mentored engineers",
                        "Mentored 4 engineers through design reviews and weekly pairing sessions",
                    ),
                ],
            ),
            job(
                "job-2",
                "Software Engineer",
                "Bluefin Labs",
                "Jul 2018 - Feb 2021",
                "Denver, CO",
                vec![
                    bullet(
                        "bullet-4",
                        "Built billing APIs",
                        "Built billing APIs in Go handling 2M+ requests per day",
                    ),
                    bullet(
                        "bullet-5",
                        "Worked on reporting",
                        "Was responsible for the reporting dashboards used by various internal teams",
                    ),
                ],
            ),
        ],
    );

    let education = section(
        "section-2",
        "education",
        "Education",
        "Academic background",
        vec![job(
            "job-3",
            "B.S. Computer Science",
            "University of Colorado Boulder",
            "2014 - 2018",
            "Boulder, CO",
            vec![
                bullet("bullet-6", "GPA", "GPA: 3.7/4.0, graduated with honors"),
                bullet(
                    "bullet-7",
                    "Relevant coursework",
                    "Relevant coursework: Operating Systems, Compilers, Databases, Networks",
                ),
            ],
        )],
    );

    let skills = section(
        "section-3",
        "skills",
        "Skills",
        "Technical skills",
        vec![
            bullet("bullet-8", "Languages", "Rust, Go, TypeScript, Python, SQL"),
            bullet(
                "bullet-9",
                "Tools",
                "PostgreSQL, Kafka, Docker, Kubernetes, Terraform, AWS",
            ),
        ],
    );

    ResumeComponent::new(
        "resume-1",
        ComponentType::Resume,
        "Alex Rivera - Software Engineer",
        "Full resume",
    )
    .with_children(vec![experience, education, skills])
}
