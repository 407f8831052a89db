use clap::{Parser, Subcommand, builder::styling};
use eyre::Result;

// CLI Styling
const STYLES: styling::Styles = styling::Styles::styled()
    .header(styling::AnsiColor::BrightWhite.on_default())
    .usage(styling::AnsiColor::BrightWhite.on_default())
    .literal(styling::AnsiColor::Green.on_default())
    .placeholder(styling::AnsiColor::Cyan.on_default());

/// CV Transformer: --{cvt}-> sends a consultant CV through the transform webhook and downloads the result
#[derive(Parser)]
#[command(name = "cvt", version, styles = STYLES)]
struct Cli {
    /// The dotenv file to source webhook settings from
    #[arg(short, long, global = true, default_value = ".env")]
    env: String,

    /// More verbose logging
    #[arg(long, global = true)]
    debug: bool,

    /// Command to execute
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Send a CV through the transform webhook and download the result
    Transform {
        /// A PDF file to upload
        file: Option<String>,

        /// Consultant id to transform instead of an uploaded file
        #[arg(short, long, conflicts_with = "file")]
        consultant: Option<String>,
    },

    /// List the consultants offered by the selector
    Consultants {
        /// Only show consultants whose name matches this regex
        #[arg(short, long)]
        include: Option<String>,

        /// Hide consultants whose name matches this regex
        #[arg(short = 'x', long)]
        exclude: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    dotenvy::from_filename(&cli.env).ok();

    let log_level = match cli.debug {
        true => "debug",
        false => "info",
    };
    let env = env_logger::Env::default().filter_or("LOG_LEVEL", log_level);
    env_logger::Builder::from_env(env)
        .format_timestamp_millis()
        .init();

    match cli.command {
        Commands::Transform { file, consultant } => {
            cv_transformer::cli::run_transform(
                file.as_deref().map(std::path::Path::new),
                consultant.as_deref(),
            )
            .await?;
        }
        Commands::Consultants { include, exclude } => {
            cv_transformer::cli::list_consultants(include.as_deref(), exclude.as_deref())?;
        }
    }

    Ok(())
}
