use anyhow::Context;
use bsd3gen::cli::Cli;
use bsd3gen::clipboard::ClipboardHandler;
use bsd3gen::config::Config;
use bsd3gen::license;
use bsd3gen::logging::init_tracing;
use bsd3gen::ui::app::App;
use bsd3gen::ui::runtime;
use clap::Parser;
use std::io::Write;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = match cli.config.as_deref() {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load configuration")?;

    let form = cli.initial_form(&config);

    if cli.print {
        let text = license::generate(&form.year, &form.author)?;
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{text}").context("Failed to write license to stdout")?;
        return Ok(());
    }

    let mut app = App::new(form, config.ui.status_timeout());
    match ClipboardHandler::new() {
        Ok(handler) => app = app.with_clipboard(Box::new(handler)),
        Err(err) => tracing::warn!(error = %err, "Copy will be disabled"),
    }

    runtime::run(app, config.ui.tick_rate()).context("Terminal UI failed")?;
    Ok(())
}
