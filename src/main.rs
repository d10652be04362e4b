// src/main.rs

use taskpool::{cli, logging, run};

#[tokio::main]
async fn main() {
    if let Err(err) = run_main().await {
        eprintln!("taskpool error: {err:?}");
        std::process::exit(1);
    }
}

async fn run_main() -> anyhow::Result<()> {
    let args = cli::parse();
    logging::init_logging()?;
    let report = run(args).await?;
    tracing::info!(
        tasks = report.snapshot.len(),
        elapsed_secs = report.elapsed.as_secs_f64(),
        "all tasks done"
    );
    Ok(())
}
