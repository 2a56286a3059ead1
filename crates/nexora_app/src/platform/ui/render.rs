use nexora_core::{
    AppViewModel, Availability, AuthStatus, ChatHistoryItem, ChatMessage, CommunityPost, Dashboard,
    InputKind, JobRecord, Mentor, Notice, NoticeLevel, Role, RoadmapStatus, RoadmapView,
    WizardPhaseView,
};

pub fn notice_line(notice: &Notice) -> String {
    let tag = match notice.level {
        NoticeLevel::Info => "info",
        NoticeLevel::Error => "error",
    };
    format!("[{}] {}: {}", tag, notice.title, notice.description)
}

pub fn message_line(message: &ChatMessage) -> String {
    match message.role {
        Role::Bot => format!("NEXORA: {}", message.text),
        Role::User => format!("You: {}", message.text),
    }
}

/// Everything below the transcript for the current wizard phase.
pub fn wizard_phase_lines(phase: &WizardPhaseView) -> Vec<String> {
    match phase {
        WizardPhaseView::Asking {
            step,
            total,
            kind,
            placeholder,
            ..
        } => {
            let mut lines = vec![format!("Step {} of {}", step + 1, total)];
            match kind {
                InputKind::Choice(options) => lines.extend(
                    options
                        .iter()
                        .enumerate()
                        .map(|(i, label)| format!("  {}. {}", i + 1, label)),
                ),
                InputKind::MultiLine => {
                    lines.push("(finish with an empty line)".to_string());
                }
                InputKind::SingleLine => {}
            }
            if let Some(placeholder) = placeholder {
                lines.push(format!("  {placeholder}"));
            }
            lines
        }
        WizardPhaseView::Submitting => vec!["Generating your career dashboard...".to_string()],
        WizardPhaseView::Dashboard(dashboard) => dashboard_lines(dashboard),
        WizardPhaseView::Error(message) => vec![
            "Something went wrong".to_string(),
            message.clone(),
            "Type :reset to try again.".to_string(),
        ],
    }
}

pub fn dashboard_lines(dashboard: &Dashboard) -> Vec<String> {
    match dashboard {
        Dashboard::Career(career) => {
            let mut lines = vec![
                career.summary.greeting.clone(),
                career.summary.recommendation.clone(),
            ];
            if !career.suggested_careers.is_empty() {
                lines.push(String::new());
                lines.push("Suggested careers:".to_string());
                for suggestion in &career.suggested_careers {
                    lines.push(format!(
                        "  - {} ({:.0}%)",
                        suggestion.title,
                        confidence_percent(suggestion.confidence)
                    ));
                }
            }
            if !career.next_steps.is_empty() {
                lines.push(String::new());
                lines.push("Next steps:".to_string());
                lines.extend(career.next_steps.iter().map(|step| format!("  - {step}")));
            }
            lines
        }
        Dashboard::Opaque(value) => serde_json::to_string_pretty(value)
            .unwrap_or_else(|_| value.to_string())
            .lines()
            .map(str::to_string)
            .collect(),
    }
}

// Confidence arrives either as a fraction or already as a percentage.
fn confidence_percent(confidence: f64) -> f64 {
    if confidence <= 1.0 {
        confidence * 100.0
    } else {
        confidence
    }
}

pub fn job_lines(jobs: &[JobRecord]) -> Vec<String> {
    if jobs.is_empty() {
        return vec!["No matching jobs.".to_string()];
    }
    let mut lines = Vec::new();
    for job in jobs {
        let score = job
            .match_score
            .map(|score| format!(" [{score}% match]"))
            .unwrap_or_default();
        let mut flags = Vec::new();
        if job.is_remote {
            flags.push("remote");
        }
        if job.is_urgent {
            flags.push("urgent");
        }
        let flags = if flags.is_empty() {
            String::new()
        } else {
            format!(" ({})", flags.join(", "))
        };
        lines.push(format!("{} at {}{}{}", job.title, job.company, score, flags));
        lines.push(format!(
            "  {} | {} | {} | {} | via {}",
            job.location,
            job.job_type.label(),
            job.salary,
            job.experience,
            job.source.label()
        ));
        if !job.skills.is_empty() {
            lines.push(format!("  skills: {}", job.skills.join(", ")));
        }
        lines.push(format!("  apply: {}", job.apply_url));
    }
    lines
}

pub fn mentor_lines(mentors: &[Mentor]) -> Vec<String> {
    if mentors.is_empty() {
        return vec!["No mentors found.".to_string()];
    }
    mentors
        .iter()
        .flat_map(|mentor| {
            let availability = match mentor.availability {
                Availability::Available => "available",
                Availability::Busy => "busy",
                Availability::Offline => "offline",
            };
            let verified = if mentor.is_verified { " ✓" } else { "" };
            let rate = mentor
                .hourly_rate
                .map(|rate| format!(" | ${rate}/hr"))
                .unwrap_or_default();
            [
                format!(
                    "{}{}, {} at {} ({})",
                    mentor.name, verified, mentor.title, mentor.company, availability
                ),
                format!(
                    "  rating {:.1} ({} reviews) | {}{}",
                    mentor.rating, mentor.reviews, mentor.experience, rate
                ),
                format!("  expertise: {}", mentor.expertise.join(", ")),
            ]
        })
        .collect()
}

pub fn community_lines(posts: &[CommunityPost]) -> Vec<String> {
    if posts.is_empty() {
        return vec!["No community posts yet.".to_string()];
    }
    posts
        .iter()
        .flat_map(|post| {
            let mut lines = vec![
                format!("[{}] {} ({})", post.id, post.title, post.kind.label()),
                format!(
                    "  by {} | {} likes | {} comments",
                    post.author, post.likes, post.comments
                ),
            ];
            if !post.content.is_empty() {
                lines.push(format!("  {}", post.content));
            }
            if !post.tags.is_empty() {
                let tags: Vec<String> = post.tags.iter().map(|tag| format!("#{tag}")).collect();
                lines.push(format!("  {}", tags.join(" ")));
            }
            lines
        })
        .collect()
}

pub fn roadmap_lines(roadmap: &RoadmapView) -> Vec<String> {
    let mut lines = Vec::new();
    if roadmap.generating {
        lines.push("Generating roadmap...".to_string());
    }
    if let Some(error) = &roadmap.error {
        lines.push(format!("error: {error}"));
    }
    if roadmap.items.is_empty() {
        lines.push("Your roadmap is empty.".to_string());
        return lines;
    }
    let done = roadmap
        .items
        .iter()
        .filter(|item| item.status == RoadmapStatus::Completed)
        .count();
    lines.push(format!("{} of {} completed", done, roadmap.items.len()));
    for item in &roadmap.items {
        lines.push(format!(
            "[{}] {} ({}, {:?} priority, {})",
            item.id,
            item.title,
            item.status.label(),
            item.priority,
            item.estimated_time
        ));
        if !item.skills.is_empty() {
            lines.push(format!("  skills: {}", item.skills.join(", ")));
        }
    }
    lines
}

pub fn history_lines(history: &[ChatHistoryItem], active: &str) -> Vec<String> {
    if history.is_empty() {
        return vec!["No previous chats.".to_string()];
    }
    history
        .iter()
        .map(|item| {
            let marker = if item.session_id == active { "*" } else { " " };
            format!(
                "{} {}  {}  {}",
                marker, item.session_id, item.title, item.last_message
            )
        })
        .collect()
}

pub fn trending_lines(view: &AppViewModel) -> Vec<String> {
    if let Some(error) = &view.trending_error {
        return vec![error.clone()];
    }
    if view.trending.is_empty() {
        return vec!["No trending careers right now.".to_string()];
    }
    view.trending
        .iter()
        .map(|career| {
            format!(
                "{}  +{}%  {}  [{}]",
                career.title,
                career.growth,
                career.salary,
                career.skills.join(", ")
            )
        })
        .collect()
}

pub fn auth_line(status: AuthStatus) -> &'static str {
    match status {
        AuthStatus::SignedOut => "Signed out.",
        AuthStatus::Authenticating => "Signing in...",
        AuthStatus::SignedIn => "Signed in.",
    }
}
