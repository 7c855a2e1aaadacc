// 2048 in the terminal.
// Controls: W/A/S/D, arrow keys or a mouse drag to slide tiles. N starts over, Q quits.

use anyhow::Result;
use clap::Parser;
use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;
use twenty48::config::Args;
use twenty48::console_interface::{
    ConsoleInput, ConsoleTerminal, cleanup_terminal, handle_input, render_game, setup_terminal,
};
use twenty48::core::{Session, initialize};
use twenty48::high_score::{JsonFileStore, MemoryStore, ScoreStore};
use twenty48::logging::init_logger;
use twenty48::models::GameRenderState;
use twenty48::swipe::SwipeTracker;

fn main() -> Result<()> {
    let args = Args::parse();
    init_logger(&args.log_file, args.log_level.into())?;

    let mut store: Box<dyn ScoreStore> = if args.no_persist {
        Box::new(MemoryStore::default())
    } else {
        Box::new(JsonFileStore::new(&args.high_score_file))
    };
    let best = store.load()?;

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    info!("starting, seed {:?}, best score {}", args.seed, best);

    let session = initialize(&mut rng, best);
    let mut swipe = SwipeTracker::new(args.swipe_threshold);
    debug!("swipe threshold {}", swipe.threshold());

    let mut terminal = setup_terminal()?;
    let result = run_interactive(&mut terminal, session, store.as_mut(), &mut rng, &mut swipe);
    cleanup_terminal()?;

    result
}

fn run_interactive(
    terminal: &mut ConsoleTerminal,
    session: Session,
    store: &mut dyn ScoreStore,
    rng: &mut StdRng,
    swipe: &mut SwipeTracker,
) -> Result<()> {
    let mut state = GameRenderState::new(session);
    let mut board = render_game(terminal, &state)?;

    loop {
        match handle_input(swipe, board)? {
            ConsoleInput::Quit => break,
            ConsoleInput::UserAction(action) => {
                if state.apply_action(action, rng, store) {
                    board = render_game(terminal, &state)?;
                }
            }
            ConsoleInput::Unknown => {
                // resizes and stray input; redraw to keep the screen tidy
                board = render_game(terminal, &state)?;
            }
            ConsoleInput::Timeout => {}
        }
    }

    info!(
        "quit with score {}, largest tile {}",
        state.session.score(),
        state.session.grid().max_tile()
    );
    Ok(())
}
