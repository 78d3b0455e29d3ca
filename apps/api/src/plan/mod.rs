// Interview plan: role catalog, rubric engine, rounds, lead capture,
// plan state with its update cycle, persistence and the printable summary.

pub mod catalog;
pub mod handlers;
pub mod lead;
pub mod rounds;
pub mod rubric;
pub mod state;
pub mod store;
pub mod summary;
