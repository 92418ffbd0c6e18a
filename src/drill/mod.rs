//! Adaptive Drill Core: Selection, scoring, and reinforcement
//!
//! # Components
//! - `weights.rs`: WeightTable and the mistake/success reinforcement policy
//! - `store.rs`: Weight table persistence with atomic saves
//! - `selector.rs`: Weighted key signature draws with repeat override
//! - `session.rs`: The per-round question state machine

pub mod selector;
pub mod session;
pub mod store;
pub mod weights;

pub use selector::Selector;
pub use session::{QuizIo, QuizSession, RoundOutcome};
pub use store::WeightStore;
pub use weights::WeightTable;
