use kirstify::shell::{LOADING_MESSAGE, PROMPT};
use kirstify::{Config, Shell, source_for};
use std::io::{self, Read};
use std::process;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_matches(&kirstify::config::command().get_matches())?;

    let default_level = if config.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let mut shell = Shell::new(config.options.clone());

    if config.interactive {
        println!("{}", LOADING_MESSAGE);
    }

    let source = source_for(&config.dictionary)?;
    tracing::debug!(source = %source.describe(), "loading dictionary");
    shell.on_loaded(source.load().await);

    if !shell.is_ready() {
        eprintln!("{}", shell.render());
        process::exit(1);
    }

    if config.interactive {
        println!("{}", shell.render());
        println!("{}", PROMPT);
        shell.run_lines(io::stdin().lock(), io::stdout().lock())?;
        return Ok(());
    }

    let text = match &config.text {
        Some(text) => text.clone(),
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    shell.set_text(&text);
    if let Some(output) = shell.trigger() {
        println!("{}", output);
    }

    Ok(())
}
