//! Search and evaluation for gambit.

pub mod book;
pub mod error;
pub mod eval;
pub mod search;
pub mod time;

pub use book::OpeningBook;
pub use error::SearchError;
pub use eval::evaluate;
pub use eval::score::{DECISIVE, INFINITY, is_decisive};
pub use search::control::SearchControl;
pub use search::negamax::{MAX_DEPTH, SearchContext, negamax, quiescence};
pub use search::{MoveSource, SearchResult, Searcher};
pub use time::{Deadline, think_time};
