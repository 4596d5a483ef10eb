//! # idv CLI entry point
//!
//! Parses command-line arguments and dispatches to flow handlers.
//! Connection settings (service URL, bearer token, timeout) come from
//! the `IDV_*` environment variables; everything flow-specific is an
//! argument on the subcommand.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use idv_cli::{run_document_ocr, run_onboarding, DocumentOcrArgs, OnboardArgs};
use idv_client::{IdvApiConfig, IdvClient};

/// idv — onboarding flows against the remote identity service.
///
/// Each subcommand creates a throwaway customer record on the service,
/// drives one linear sequence of calls against it, and deletes it at
/// the end of a successful run.
#[derive(Parser, Debug)]
#[command(name = "idv", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Full onboarding: selfie, passive liveness, document, crops,
    /// age + face-mask eligibility.
    Onboard(OnboardArgs),

    /// Reduced flow: classify one document page with advice and dump
    /// the customer record.
    DocumentOcr(DocumentOcrArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level.
    let filter = match cli.verbose {
        0 => EnvFilter::new("info"),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    match run(cli) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<u8> {
    let config = IdvApiConfig::from_env()?;
    let client = IdvClient::new(config)?;

    // Flows are strictly sequential; a current-thread runtime is enough.
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let outcome = match cli.command {
        Commands::Onboard(args) => runtime.block_on(run_onboarding(&client, &args))?,
        Commands::DocumentOcr(args) => runtime.block_on(run_document_ocr(&client, &args))?,
    };

    Ok(outcome.exit_code())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parse_onboard_defaults() {
        let cli = Cli::try_parse_from(["idv", "onboard"]).unwrap();
        assert!(matches!(cli.command, Commands::Onboard(_)));
        if let Commands::Onboard(args) = cli.command {
            assert_eq!(args.countries, vec!["INO".to_string()]);
            assert_eq!(args.output_dir.to_str(), Some("onboarding-images"));
            assert!(args.mask_image_url.is_none());
        }
    }

    #[test]
    fn cli_parse_onboard_with_overrides() {
        let cli = Cli::try_parse_from([
            "idv",
            "onboard",
            "--face-image",
            "selfie.jpeg",
            "--country",
            "SVK",
            "--mask-threshold",
            "0.4",
            "--mask-image-url",
            "https://img.example.com/face.jpeg",
        ])
        .unwrap();
        if let Commands::Onboard(args) = cli.command {
            assert_eq!(args.face_image.to_str(), Some("selfie.jpeg"));
            assert_eq!(args.countries, vec!["SVK".to_string()]);
            assert!((args.mask_threshold - 0.4).abs() < f64::EPSILON);
            assert_eq!(
                args.mask_image_url.as_deref(),
                Some("https://img.example.com/face.jpeg")
            );
        } else {
            panic!("expected onboard subcommand");
        }
    }

    #[test]
    fn cli_parse_document_ocr_advice_pair() {
        let cli = Cli::try_parse_from([
            "idv",
            "document-ocr",
            "--country",
            "INO",
            "--document-type",
            "passport",
        ])
        .unwrap();
        if let Commands::DocumentOcr(args) = cli.command {
            assert_eq!(args.country, "INO");
            assert_eq!(args.doc_type, "passport");
        } else {
            panic!("expected document-ocr subcommand");
        }
    }

    #[test]
    fn cli_parse_verbose_count() {
        let cli = Cli::try_parse_from(["idv", "-vv", "onboard"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn cli_rejects_unknown_subcommand() {
        assert!(Cli::try_parse_from(["idv", "enroll"]).is_err());
    }
}
