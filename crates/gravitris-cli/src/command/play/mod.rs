use gravitris_engine::{Game, PieceSeed};

use crate::command::play::app::App;

mod app;

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct PlayArg {
    /// Seed for the piece sequence as 32 hex characters (random if omitted)
    #[clap(long)]
    seed: Option<PieceSeed>,
}

pub(crate) fn run(arg: &PlayArg) -> anyhow::Result<()> {
    let PlayArg { seed } = arg;

    let game = match seed {
        Some(seed) => Game::with_seed(*seed),
        None => Game::new(),
    };
    let mut app = App::new(game);

    ratatui::run(|terminal| app.run(terminal))?;

    Ok(())
}
