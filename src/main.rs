use anyhow::Result;
use clap::Parser;
use p3r_text_dumper::cli::{Cli, Mode};
use p3r_text_dumper::menu::TerminalKeys;
use p3r_text_dumper::pipeline;
use p3r_text_dumper::session::Session;
use std::io;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let profile = cli.load_profile()?;

    match cli.mode() {
        Mode::Batch => {
            let config = cli.batch_config(profile)?;
            let report = pipeline::run(&config)?;
            info!(
                "Extraction completed! {} of {} files dumped to {}",
                report.summary.collected,
                report.matched,
                report.dump_path.display()
            );
        }
        Mode::Interactive => {
            let stdin = io::stdin();
            let mut session = Session::new(
                TerminalKeys,
                stdin.lock(),
                io::stdout(),
                cli.session_options(profile),
                pipeline::run,
            );
            session.run()?;
        }
    }

    Ok(())
}
