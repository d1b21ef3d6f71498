use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use outpost_app_core::{FilePersistence, JsonContentRepo};
use outpost_cli::{commands, session, PromptMode};
use outpost_core::MessageDraft;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,
    /// Directory holding company.json and projects.json
    #[arg(
        long,
        global = true,
        env = "OUTPOST_CONTENT_DIR",
        default_value = "demos/content"
    )]
    content_dir: Utf8PathBuf,
    /// Overrides the platform config directory (settings and session)
    #[arg(long, global = true, env = "OUTPOST_CONFIG_DIR")]
    config_dir: Option<Utf8PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Contact form
    Contact {
        #[command(subcommand)]
        command: ContactCommands,
    },
    /// Project gallery and restricted specs
    Projects {
        #[command(subcommand)]
        command: ProjectCommands,
    },
    /// Local sign-in state
    Session {
        #[command(subcommand)]
        command: SessionCommands,
    },
}

#[derive(Subcommand)]
enum ContactCommands {
    Info,
    Send {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        subject: String,
        #[arg(long)]
        message: String,
        #[arg(long, help = "Return once the transmission is confirmed")]
        no_wait: bool,
    },
}

#[derive(Subcommand)]
enum ProjectCommands {
    List,
    View {
        id: String,
        #[arg(long, value_enum, default_value_t = PromptMode::Ask)]
        prompt: PromptMode,
    },
}

#[derive(Subcommand)]
enum SessionCommands {
    Login {
        #[arg(long)]
        role: String,
    },
    Logout,
    Status,
}

fn setup_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let persistence = match &cli.config_dir {
        Some(dir) => FilePersistence::with_root(dir.as_std_path()),
        None => FilePersistence::new(),
    };
    let settings = persistence.load_settings()?;
    let repo = JsonContentRepo::new(cli.content_dir.clone());

    match cli.command {
        Commands::Contact { command } => match command {
            ContactCommands::Info => commands::cmd_contact_info(&repo)?,
            ContactCommands::Send {
                name,
                email,
                subject,
                message,
                no_wait,
            } => {
                let draft = MessageDraft {
                    name,
                    email,
                    subject,
                    message,
                };
                commands::cmd_contact_send(&repo, &settings, draft, !no_wait).await?;
            }
        },
        Commands::Projects { command } => match command {
            ProjectCommands::List => commands::cmd_projects_list(&repo)?,
            ProjectCommands::View { id, prompt } => {
                commands::cmd_projects_view(&repo, &persistence, &settings, &id, prompt)?;
            }
        },
        Commands::Session { command } => match command {
            SessionCommands::Login { role } => {
                session::handle_login(&persistence, role)?;
            }
            SessionCommands::Logout => session::handle_logout(&persistence)?,
            SessionCommands::Status => session::handle_status(&persistence)?,
        },
    }

    Ok(())
}
