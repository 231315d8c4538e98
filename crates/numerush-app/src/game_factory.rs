use numerush_deal::BoardDealer;
use numerush_game::{Session, SessionGeneration, TimeLimit};

#[must_use]
pub fn deal_session(time_limit: TimeLimit, generation: SessionGeneration) -> Session {
    let board = BoardDealer::new().deal();
    Session::new(board, time_limit, generation)
}
