use std::io::{self, BufRead, Write};
use std::time::Duration;

use anyhow::{bail, Result};
use nexora_core::{
    mentors_for, rank, search, Catalog, InputKind, ItemSource, JobSource, JobType, LocationFilter,
    LoginForm, Msg, NewRoadmapItem, Priority, RegisterForm, RoadmapPatch, RoadmapStatus,
    SearchFilters, WizardPhaseView,
};
use nexora_engine::JsonFileCatalog;

use super::app::App;
use super::config::AppConfig;
use super::effects::{new_session_id, new_stamp};
use super::ui::input::{parse_command, resolve_choice, split_list, Command as LineCommand};
use super::ui::render;
use crate::{Command, CommunityAction, RoadmapAction};

pub fn execute(app: &mut App, config: &AppConfig, limit: Duration, command: Command) -> Result<()> {
    match command {
        Command::Assess => assess(app, limit),
        Command::Chat => chat(app, limit),
        Command::Jobs { interests } => {
            let catalog = JsonFileCatalog::load_or_empty(&config.catalog_path());
            let mut profile = app.state().skill_profile();
            if let Some(text) = interests {
                profile = profile.with_interest_text(&text);
            }
            if profile.skills.is_empty() {
                println!("Add skills to your roadmap to get job recommendations.");
            }
            let ranked = rank(&catalog.jobs(), &profile.skills, &profile.interests);
            print_lines(render::job_lines(&ranked));
            Ok(())
        }
        Command::Search {
            query,
            job_type,
            location,
            source,
        } => {
            let filters = SearchFilters {
                job_type: job_type.as_deref().map(parse_job_type).transpose()?,
                location: location.as_deref().map(LocationFilter::parse),
                source: source.as_deref().map(parse_source).transpose()?,
            };
            let catalog = JsonFileCatalog::load_or_empty(&config.catalog_path());
            let found = search(&catalog.jobs(), query.as_deref().unwrap_or(""), &filters);
            print_lines(render::job_lines(&found));
            Ok(())
        }
        Command::Mentors { topic } => {
            let catalog = JsonFileCatalog::load_or_empty(&config.catalog_path());
            let mentors = mentors_for(&catalog.mentors(), topic.as_deref().unwrap_or(""));
            print_lines(render::mentor_lines(&mentors));
            Ok(())
        }
        Command::Community { action } => {
            let catalog = JsonFileCatalog::load_or_empty(&config.catalog_path());
            app.restore_community(catalog.community_posts());
            match action.unwrap_or(CommunityAction::List) {
                CommunityAction::List => {}
                CommunityAction::Like { id } => {
                    app.dispatch(Msg::PostLiked { id });
                }
                CommunityAction::Comment { id, text } => {
                    app.dispatch(Msg::CommentAdded {
                        id,
                        comment: text.join(" "),
                    });
                }
            }
            show_notices(app);
            print_lines(render::community_lines(&app.view().community));
            Ok(())
        }
        Command::Trending => {
            app.dispatch(Msg::TrendingRequested);
            app.settle(limit);
            show_notices(app);
            print_lines(render::trending_lines(&app.view()));
            Ok(())
        }
        Command::Roadmap { action } => roadmap(app, limit, action),
        Command::Login { email } => {
            let email = match email {
                Some(email) => email,
                None => read_required("Email: ")?,
            };
            let password = read_required("Password: ")?;
            app.dispatch(Msg::LoginSubmitted(LoginForm { email, password }));
            finish_auth(app, limit);
            Ok(())
        }
        Command::Register {
            first_name,
            last_name,
            email,
            agree_terms,
        } => {
            let password = read_required("Password: ")?;
            let confirm_password = read_required("Confirm password: ")?;
            app.dispatch(Msg::RegisterSubmitted(RegisterForm {
                first_name,
                last_name,
                email,
                password,
                confirm_password,
                agree_to_terms: agree_terms,
            }));
            finish_auth(app, limit);
            Ok(())
        }
        Command::Logout => {
            app.dispatch(Msg::SignOutClicked);
            println!("{}", render::auth_line(app.view().auth));
            Ok(())
        }
    }
}

fn assess(app: &mut App, limit: Duration) -> Result<()> {
    let mut shown = 0;
    loop {
        let view = app.view();
        let transcript = &view.wizard.transcript;
        if transcript.len() < shown {
            shown = 0;
        }
        for message in &transcript[shown..] {
            println!("{}", render::message_line(message));
        }
        shown = transcript.len();
        print_lines(render::wizard_phase_lines(&view.wizard.phase));
        show_notices(app);

        let kind = match &view.wizard.phase {
            WizardPhaseView::Asking { kind, .. } => *kind,
            WizardPhaseView::Submitting => {
                app.settle(limit);
                continue;
            }
            WizardPhaseView::Dashboard(_) => return Ok(()),
            WizardPhaseView::Error(_) => InputKind::SingleLine,
        };

        let Some(input) = read_answer(kind)? else {
            return Ok(());
        };
        match parse_command(&input) {
            Some(LineCommand::Quit) => return Ok(()),
            Some(LineCommand::Reset) => {
                app.dispatch(Msg::AssessmentReset);
            }
            Some(_) => eprintln!("Only :reset and :quit work here."),
            None => {
                app.dispatch(Msg::AnswerSubmitted(resolve_choice(kind, &input)));
            }
        }
    }
}

fn chat(app: &mut App, limit: Duration) -> Result<()> {
    println!("Commands: :new, :history, :delete <id>, :quit");
    let mut session = String::new();
    let mut shown = 0;
    loop {
        let view = app.view();
        if view.chat_session_id != session {
            session = view.chat_session_id.clone();
            shown = 0;
        }
        for message in &view.chat_transcript[shown..] {
            println!("{}", render::message_line(message));
        }
        shown = view.chat_transcript.len();
        show_notices(app);

        let Some(line) = read_line("> ")? else {
            return Ok(());
        };
        match parse_command(&line) {
            Some(LineCommand::Quit) => return Ok(()),
            Some(LineCommand::NewChat) => {
                app.dispatch(Msg::NewChatStarted {
                    session_id: new_session_id(),
                });
            }
            Some(LineCommand::History) => {
                print_lines(render::history_lines(&view.chat_history, &view.chat_session_id));
            }
            Some(LineCommand::Delete(session_id)) => {
                app.dispatch(Msg::ChatDeleted {
                    session_id,
                    next_session_id: new_session_id(),
                });
            }
            Some(LineCommand::Reset) => eprintln!("Use :new to start over."),
            None => {
                app.dispatch(Msg::ChatSubmitted(line));
                app.settle(limit);
            }
        }
    }
}

fn roadmap(app: &mut App, limit: Duration, action: RoadmapAction) -> Result<()> {
    match action {
        RoadmapAction::List => {}
        RoadmapAction::Add {
            title,
            description,
            priority,
            estimated_time,
            skills,
            resources,
        } => {
            let Some(priority) = Priority::parse(&priority) else {
                bail!("unknown priority {priority:?}; use high, medium or low");
            };
            app.dispatch(Msg::RoadmapItemAdded {
                item: NewRoadmapItem {
                    title,
                    description,
                    status: RoadmapStatus::Pending,
                    priority,
                    estimated_time,
                    skills: split_list(&skills),
                    resources: split_list(&resources),
                    source: ItemSource::UserAdded,
                },
                stamp: new_stamp(),
            });
        }
        RoadmapAction::Status { id, status } => {
            let Some(status) = RoadmapStatus::parse(&status) else {
                bail!("unknown status {status:?}; use completed, in-progress or pending");
            };
            app.dispatch(Msg::RoadmapItemUpdated {
                id,
                patch: RoadmapPatch {
                    status: Some(status),
                    ..RoadmapPatch::default()
                },
            });
        }
        RoadmapAction::Delete { id } => {
            app.dispatch(Msg::RoadmapItemDeleted { id });
        }
        RoadmapAction::Generate { topic } => {
            app.dispatch(Msg::RoadmapGenerationRequested {
                topic: topic.join(" "),
            });
            app.settle(limit);
        }
    }
    show_notices(app);
    print_lines(render::roadmap_lines(&app.view().roadmap));
    Ok(())
}

fn finish_auth(app: &mut App, limit: Duration) {
    app.settle(limit);
    show_notices(app);
    println!("{}", render::auth_line(app.view().auth));
}

fn parse_job_type(raw: &str) -> Result<JobType> {
    match JobType::parse(raw) {
        Some(job_type) => Ok(job_type),
        None => bail!("unknown job type {raw:?}; use full-time, part-time, contract, internship or freelance"),
    }
}

fn parse_source(raw: &str) -> Result<JobSource> {
    match JobSource::parse(raw) {
        Some(source) => Ok(source),
        None => bail!("unknown source {raw:?}; use linkedin, naukri, fiverr, indeed or company"),
    }
}

fn show_notices(app: &mut App) {
    for notice in app.take_notices() {
        eprintln!("{}", render::notice_line(&notice));
    }
}

fn print_lines(lines: Vec<String>) {
    for line in lines {
        println!("{line}");
    }
}

/// `None` on end of input.
fn read_line(prompt: &str) -> Result<Option<String>> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

fn read_required(prompt: &str) -> Result<String> {
    match read_line(prompt)? {
        Some(value) => Ok(value),
        None => bail!("input ended before {}", prompt.trim_end_matches(": ").to_lowercase()),
    }
}

/// Multi-line answers end at the first empty line.
fn read_answer(kind: InputKind) -> Result<Option<String>> {
    let Some(first) = read_line("> ")? else {
        return Ok(None);
    };
    if kind != InputKind::MultiLine || first.trim().is_empty() || parse_command(&first).is_some() {
        return Ok(Some(first));
    }
    let mut lines = vec![first];
    while let Some(line) = read_line("  ")? {
        if line.trim().is_empty() {
            break;
        }
        lines.push(line);
    }
    Ok(Some(lines.join("\n")))
}
