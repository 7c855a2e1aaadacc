use log::{error, info};
use rand::Rng;

use crate::core::{GameUpdate, MoveReport, Session, UserAction, step};
use crate::high_score::ScoreStore;

pub struct GameRenderState {
    pub session: Session,
    pub game_over: bool,
    pub error: Option<String>,
    pub last_change: Option<MoveReport>,
}

impl GameRenderState {
    pub fn new(session: Session) -> Self {
        let game_over = session.is_terminal();
        GameRenderState {
            session,
            game_over,
            error: None,
            last_change: None,
        }
    }

    /// Steps the session and persists a new best score. Returns false when nothing changed,
    /// in which case the state is left as it was.
    ///
    /// A failed save is logged and kept in `error` for the screen; the game carries on.
    pub fn apply_action<R: Rng + ?Sized>(
        &mut self,
        action: UserAction,
        rng: &mut R,
        store: &mut dyn ScoreStore,
    ) -> bool {
        let GameUpdate::NextState(next, report) = step(&self.session, action, rng) else {
            return false;
        };
        if action == UserAction::NewGame {
            info!("new game, best score {}", next.best_score());
        }

        let mut save_error = None;
        if report.new_best {
            if let Err(err) = store.save(next.best_score()) {
                error!("could not save best score: {:#}", err);
                save_error = Some(format!("{:#}", err));
            }
        }

        self.game_over = report.terminal;
        self.session = next;
        self.error = save_error;
        self.last_change = Some(report);
        true
    }
}
