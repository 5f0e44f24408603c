use anyhow::Result;
use clap::Parser;
use winit::event_loop::EventLoop;

use paneldock::cli::CliArgs;

mod runtime;

use runtime::App;

fn main() -> Result<()> {
    paneldock::tracing::init();

    let args = CliArgs::parse();
    let startup_config = args.into_config().map_err(|e| anyhow::anyhow!(e))?;

    tracing::info!(
        panels = startup_config.workspace.panels.len(),
        theme = %startup_config.workspace.theme,
        "Starting paneldock"
    );

    let event_loop = EventLoop::new()?;
    let mut app = App::new(1280, 800, startup_config);

    event_loop.run_app(&mut app)?;

    Ok(())
}
