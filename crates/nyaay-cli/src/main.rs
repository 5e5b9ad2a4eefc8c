mod display;
mod draft;

use std::path::PathBuf;

use anyhow::Context;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use nyaay_advisor::AdvisorClient;
use nyaay_core::{AnalysisResult, DocumentType, Draft, PartyProfile, RenderContext};

#[derive(Parser)]
#[command(name = "nyaay", version)]
#[command(about = "Draft FIRs, RTI applications, legal notices and consumer complaints")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the document types that can be drafted
    Types,

    /// Render a draft from a profile (and optional analysis) JSON file
    Render {
        #[command(flatten)]
        draft: DraftArgs,

        /// Analysis JSON (legalIssues, applicableStatutes, recommendedActions)
        #[arg(long)]
        analysis: Option<PathBuf>,
    },

    /// Ask the advisor service about a legal problem
    Ask {
        /// Free-text description of the problem
        #[arg(required_unless_present = "audio")]
        query: Option<String>,

        /// Recorded description (wav, mp3, ...) sent instead of text
        #[arg(long, conflicts_with = "query")]
        audio: Option<PathBuf>,

        #[arg(long, env = "NYAAY_ADVISOR_URL", default_value = "http://localhost:8000")]
        advisor_url: String,
    },

    /// Ask the advisor, then render a draft using its analysis
    Draft {
        #[command(flatten)]
        draft: DraftArgs,

        /// Free-text description sent to the advisor
        #[arg(long)]
        query: String,

        #[arg(long, env = "NYAAY_ADVISOR_URL", default_value = "http://localhost:8000")]
        advisor_url: String,
    },
}

#[derive(Args)]
struct DraftArgs {
    /// Document type: fir, rti, notice, complaint
    #[arg(long = "type", short = 't', value_parser = parse_document_type)]
    document_type: DocumentType,

    /// Party profile JSON (fullName, address, description, ...)
    #[arg(long)]
    profile: Option<PathBuf>,

    /// Render date as YYYY-MM-DD (defaults to today)
    #[arg(long, value_parser = parse_date)]
    date: Option<NaiveDate>,

    /// Also write the draft as a .txt file into this directory
    #[arg(long)]
    save: Option<PathBuf>,
}

fn parse_document_type(s: &str) -> Result<DocumentType, String> {
    s.parse().map_err(|e: nyaay_core::DraftError| e.to_string())
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| format!("{s}: {e}"))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();
    tracing::info!("nyaay v{}", env!("CARGO_PKG_VERSION"));

    let cli = Cli::parse();
    match cli.command {
        Command::Types => display::print_document_types(),
        Command::Render { draft: args, analysis } => {
            let profile = draft::load_profile(args.profile.as_deref())?;
            let analysis = draft::load_analysis(analysis.as_deref())?;
            emit(&args, &profile, analysis.as_ref())?;
        }
        Command::Ask {
            query,
            audio,
            advisor_url,
        } => {
            let client = AdvisorClient::new(advisor_url);
            let response = match (query, audio) {
                (_, Some(path)) => client
                    .ask_audio(&path)
                    .await
                    .with_context(|| format!("sending {} to advisor", path.display()))?,
                (Some(query), None) => client
                    .ask(&query)
                    .await
                    .with_context(|| format!("asking advisor at {}", client.base_url()))?,
                (None, None) => anyhow::bail!("give a query or --audio FILE"),
            };
            display::print_advice_card(&response);
        }
        Command::Draft {
            draft: args,
            query,
            advisor_url,
        } => {
            let profile = draft::load_profile(args.profile.as_deref())?;
            let analysis = AdvisorClient::new(advisor_url).fetch_analysis(&query).await;
            emit(&args, &profile, analysis.as_ref())?;
        }
    }
    Ok(())
}

fn emit(
    args: &DraftArgs,
    profile: &PartyProfile,
    analysis: Option<&AnalysisResult>,
) -> anyhow::Result<()> {
    let ctx = args.date.map_or_else(RenderContext::now, RenderContext::fixed);
    let rendered = Draft::build(args.document_type, profile, analysis, &ctx);
    tracing::info!(
        document_type = %rendered.document_type,
        analysis = %display::analysis_summary(analysis),
        "draft rendered"
    );

    print!("{}", rendered.contents);
    if let Some(dir) = &args.save {
        let path = draft::save_draft(dir, &rendered)?;
        eprintln!("  Saved {}", path.display());
    }
    Ok(())
}
