mod platform;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "nexora")]
#[command(about = "NEXORA - career guidance, job matching and roadmaps in the terminal")]
#[command(version)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,
    #[command(subcommand)]
    command: Command,
}

#[derive(Args)]
struct GlobalArgs {
    /// Config file to read instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Base URL of the NEXORA API
    #[arg(long, env = "NEXORA_API_URL", global = true)]
    api_url: Option<String>,
    /// Directory holding the roadmap, token and log file
    #[arg(long, env = "NEXORA_DATA_DIR", global = true)]
    data_dir: Option<PathBuf>,
    /// JSON file with job, mentor and community listings
    #[arg(long, env = "NEXORA_CATALOG", global = true)]
    catalog: Option<PathBuf>,
    /// Log debug output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Take the career assessment
    Assess,
    /// Chat with the career assistant
    Chat,
    /// Jobs ranked against the skills in your roadmap
    Jobs {
        /// Extra interests, comma or space separated
        #[arg(long)]
        interests: Option<String>,
    },
    /// Search the job catalog
    Search {
        /// Matches title, company or skills
        query: Option<String>,
        /// full-time, part-time, contract, internship or freelance
        #[arg(long = "type")]
        job_type: Option<String>,
        /// Location substring, or "remote"
        #[arg(long)]
        location: Option<String>,
        /// linkedin, naukri, fiverr, indeed or company
        #[arg(long)]
        source: Option<String>,
    },
    /// Mentors, optionally filtered by expertise
    Mentors {
        topic: Option<String>,
    },
    /// Posts from the learner community
    Community {
        #[command(subcommand)]
        action: Option<CommunityAction>,
    },
    /// Careers trending right now
    Trending,
    /// Manage your career roadmap
    Roadmap {
        #[command(subcommand)]
        action: RoadmapAction,
    },
    /// Sign in to your account
    Login {
        #[arg(long)]
        email: Option<String>,
    },
    /// Create an account
    Register {
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        #[arg(long)]
        email: String,
        /// Accept the terms of service and privacy policy
        #[arg(long)]
        agree_terms: bool,
    },
    /// Sign out and forget the stored token
    Logout,
}

#[derive(Subcommand)]
enum RoadmapAction {
    /// Show all roadmap items
    List,
    /// Add an item
    Add {
        title: String,
        #[arg(short, long, default_value = "")]
        description: String,
        /// high, medium or low
        #[arg(short, long, default_value = "medium")]
        priority: String,
        #[arg(short, long, default_value = "1-2 months")]
        estimated_time: String,
        /// Comma separated
        #[arg(short, long, default_value = "")]
        skills: String,
        /// Comma separated
        #[arg(short, long, default_value = "")]
        resources: String,
    },
    /// Set an item's status: completed, in-progress or pending
    Status { id: String, status: String },
    /// Remove an item
    Delete { id: String },
    /// Ask the assistant to draft a roadmap item for a career
    Generate {
        #[arg(required = true)]
        topic: Vec<String>,
    },
}

#[derive(Subcommand)]
enum CommunityAction {
    /// Show all posts
    List,
    /// Like a post
    Like { id: String },
    /// Comment on a post
    Comment {
        id: String,
        #[arg(required = true)]
        text: Vec<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    platform::run(cli)
}
