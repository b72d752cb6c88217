use clap::Parser;
use std::{process::exit, sync::Arc};
use tracing_subscriber::EnvFilter;
use zoo_submit::{
    client::{report_failure, Client},
    config::ZooPaths,
    opt::Opts,
    prompt::TerminalConfirm,
    runner::ShellExecutor,
};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let opt = Opts::parse();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(opt).await {
        let code = report_failure(&e, &mut std::io::stdout(), &mut std::io::stderr());
        if code != 0 {
            exit(code);
        }
    }
}

async fn run(opt: Opts) -> anyhow::Result<()> {
    let paths = ZooPaths::resolve(opt.opt.config_file, opt.opt.ssh_config)?;
    let client = Client::new(
        paths,
        Arc::new(ShellExecutor::default()),
        Arc::new(TerminalConfirm),
    );
    client.run(opt.cmd, &mut std::io::stdout()).await
}
