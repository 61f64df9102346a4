use clap::Parser;
use prof_upload::cli::Args;
use prof_upload::uploader::IntakeClient;

fn main() {
    // Quiet by default: a successful upload prints nothing. RUST_LOG
    // raises verbosity when needed.
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Warn)
        .init();

    let args = Args::parse();

    if let Err(err) = run(args) {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let request = args.into_request();
    let client = IntakeClient::new()?;
    client.execute(&request)?;
    Ok(())
}
