use clap::Parser;
use filesh::config::{Cli, Config, Mode};
use filesh::{server, shell};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.mode {
        Some(Mode::Shell(args)) => {
            let local = shell::Shell::new(args.start_dir());
            // rustyline blocks; keep it off the async workers
            tokio::task::spawn_blocking(move || shell::repl::run(local)).await?
        }
        Some(Mode::Serve(args)) => {
            init_tracing();
            server::serve(Config::from(args)).await
        }
        None => {
            init_tracing();
            server::serve(Config::from(cli.serve)).await
        }
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "filesh=info,tower_http=info".into()),
        )
        .init();
}
