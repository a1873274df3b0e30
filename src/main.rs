use book_reports::args::Config;
use book_reports::query::{FixedQuery, Prompt, QuerySource};
use book_reports::runner;
use std::io;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    // Logs go to stderr so the author prompt on stdout stays readable.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .try_init();

    let config = Config::parse();

    let mut query: Box<dyn QuerySource> = match &config.author {
        Some(author) => Box::new(FixedQuery(author.clone())),
        None => Box::new(Prompt::new(io::stdin().lock(), io::stdout())),
    };

    if let Err(err) = runner::run(&config, query.as_mut()) {
        eprintln!("{}", err);
        process::exit(err.exit_code());
    }
}
