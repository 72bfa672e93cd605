use clap::{Parser, Subcommand};
use proposal_core::catalog::confirm::{AutoConfirm, Confirmation};
use proposal_core::catalog::render::{render_card, render_detail, render_history, render_stats};
use proposal_core::catalog::state::Catalog;
use proposal_core::config::DeskConfig;
use proposal_core::error::{CoreError, CoreResult};
use proposal_core::intake::attachments::{collect_dir, Attachment};
use proposal_core::intake::form::{IntakeForm, SUCCESS_NOTICE};
use proposal_core::intake::suggestion::{pick_suggestion, suggestion_rng};
use proposal_core::model::status::StatusFilter;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "proposal_desk",
    disable_help_subcommand = true,
    about = "Compose proposal requests and browse generated proposals",
    after_help = "Settings resolve in order: explicit flag, --config file, built-in defaults. Set RUST_LOG to adjust log verbosity."
)]
struct Cli {
    #[arg(long, global = true, help = "JSON config file")]
    config: Option<PathBuf>,
    #[arg(long, global = true, help = "Generation service URL")]
    endpoint: Option<String>,
    #[arg(long = "timeout-secs", global = true, help = "Request timeout in seconds")]
    timeout_secs: Option<u64>,
    #[arg(long, global = true, help = "JSON array of proposal records")]
    records: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Send a description and documents to the generation service
    Submit {
        #[arg(long)]
        text: Option<String>,
        #[arg(long = "file", value_name = "PATH")]
        files: Vec<PathBuf>,
        #[arg(long, help = "Attach every file under this directory")]
        dir: Option<PathBuf>,
        #[arg(long, help = "Start from a suggested description")]
        suggest: bool,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Print a suggested description
    Suggest {
        #[arg(long)]
        seed: Option<u64>,
    },
    /// List proposals with optional search and status filter
    List {
        #[arg(long, default_value = "")]
        search: String,
        #[arg(long, default_value = "all", help = "all|completed|draft|shared")]
        status: String,
    },
    /// Compact title/date listing
    History,
    /// Show one proposal in detail
    Show { id: String },
    /// Remove a proposal from the local view
    Delete {
        id: String,
        #[arg(long, help = "Skip the confirmation prompt")]
        yes: bool,
    },
    /// Print the artifact location of a proposal
    Download { id: String },
}

struct StdinConfirmation;

impl Confirmation for StdinConfirmation {
    fn confirm(&self, prompt: &str) -> bool {
        eprint!("{} [y/N] ", prompt);
        let _ = std::io::stderr().flush();
        let mut line = String::new();
        if std::io::stdin().lock().read_line(&mut line).is_err() {
            return false;
        }
        matches!(line.trim().to_ascii_lowercase().as_str(), "y" | "yes")
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(CoreError::OperatorDeclined(msg)) => {
            eprintln!("{}", msg);
            ExitCode::SUCCESS
        }
        Err(e @ CoreError::InvalidInput(_)) => {
            eprintln!("{}", e);
            ExitCode::from(2)
        }
        Err(e) => {
            eprintln!("{}", e.user_notice());
            ExitCode::FAILURE
        }
    }
}

fn resolve_config(cli: &Cli) -> CoreResult<DeskConfig> {
    let mut cfg = match &cli.config {
        Some(p) => DeskConfig::load(p)?,
        None => DeskConfig::default(),
    };
    if let Some(e) = &cli.endpoint {
        cfg.endpoint = e.clone();
    }
    if let Some(t) = cli.timeout_secs {
        cfg.timeout_secs = t;
    }
    if let Some(r) = &cli.records {
        cfg.records_path = Some(r.clone());
    }
    cfg.validate()?;
    Ok(cfg)
}

fn run(cli: Cli) -> CoreResult<()> {
    let cfg = resolve_config(&cli)?;
    match cli.command {
        Command::Submit {
            text,
            files,
            dir,
            suggest,
            seed,
        } => submit(&cfg, text, files, dir, suggest, seed),
        Command::Suggest { seed } => {
            let mut rng = suggestion_rng(seed);
            println!("{}", pick_suggestion(&mut rng));
            Ok(())
        }
        Command::List { search, status } => {
            let mut catalog = Catalog::load(cfg.record_source().as_ref())?;
            catalog.set_search(search);
            catalog.set_status_filter(status.parse::<StatusFilter>()?);
            print_catalog(&catalog);
            Ok(())
        }
        Command::History => {
            let catalog = Catalog::load(cfg.record_source().as_ref())?;
            println!("{}", render_history(catalog.records()));
            Ok(())
        }
        Command::Show { id } => {
            let mut catalog = Catalog::load(cfg.record_source().as_ref())?;
            catalog.select_record(Some(id.as_str()))?;
            if let Some(r) = catalog.selected_record() {
                println!("{}", render_detail(r));
            }
            Ok(())
        }
        Command::Delete { id, yes } => {
            let mut catalog = Catalog::load(cfg.record_source().as_ref())?;
            let removed = if yes {
                catalog.delete_record(&id, &AutoConfirm(true))?
            } else {
                catalog.delete_record(&id, &StdinConfirmation)?
            };
            println!("Removed \"{}\" from this session's view.", removed.title);
            println!();
            print_catalog(&catalog);
            Ok(())
        }
        Command::Download { id } => {
            let catalog = Catalog::load(cfg.record_source().as_ref())?;
            let title = catalog
                .get(&id)
                .map(|r| r.title.clone())
                .unwrap_or_default();
            let url = catalog.artifact_for(&id)?;
            println!("PDF download for {}: {}", title, url);
            Ok(())
        }
    }
}

fn submit(
    cfg: &DeskConfig,
    text: Option<String>,
    files: Vec<PathBuf>,
    dir: Option<PathBuf>,
    suggest: bool,
    seed: Option<u64>,
) -> CoreResult<()> {
    let mut form = IntakeForm::new();
    if suggest {
        let mut rng = suggestion_rng(seed);
        form.draft_mut().request_suggestion(&mut rng);
    }
    let mut batch = Vec::new();
    for p in &files {
        batch.push(Attachment::from_path(p)?);
    }
    if let Some(d) = &dir {
        batch.extend(collect_dir(d)?);
    }
    let report = form.compose(text.as_deref(), batch)?;
    if let Some(update) = report.text.filter(|u| u.truncated) {
        warn!(kept = update.accepted_chars, "description truncated");
        eprintln!("Description truncated to {}", form.draft().counter_label());
    }
    for name in &report.rejected {
        eprintln!("skipped unsupported file: {}", name);
    }

    for a in form.draft().attachments() {
        println!("attached {} ({} bytes, sha256 {})", a.filename, a.len(), &a.sha256_hex()[..12]);
    }

    let client = cfg.generation_client()?;
    println!("Generating PowerPoint...");
    let resp = form.submit(&client)?;
    println!("{}", SUCCESS_NOTICE);
    println!("{}", serde_json::to_string_pretty(&resp.payload)?);
    Ok(())
}

fn print_catalog(catalog: &Catalog) {
    println!("{}", render_stats(&catalog.counts()));
    println!();
    if let Some(empty) = catalog.empty_state() {
        println!("{}", empty.title());
        println!("{}", empty.hint());
        return;
    }
    for r in catalog.visible_records() {
        println!("{}", render_card(r));
        println!();
    }
}
