//! Entry point: parse CLI, load the roster, run the menu loop.

use anyhow::Context;
use clap::Parser;
use dream_team::{cli::DreamTeam, menu::MenuSession, Roster};

/// Run the CLI.
fn main() -> anyhow::Result<()> {
    let app = DreamTeam::parse();

    let roster = Roster::load(&app.roster)
        .with_context(|| format!("loading roster from {}", app.roster.display()))?;

    MenuSession::new(&roster, app.export_dir).run();
    Ok(())
}
