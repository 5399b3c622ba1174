//! Divination engine for Uranai.
//!
//! Pure computation over the catalogs in `uranai-core`: the numerology
//! life-path calculator, tarot and omikuji draws, the daily zodiac fortune,
//! result assembly, the linear presentation flow, the one-shot result
//! mailbox with capped history, and an interactive session that ties them
//! together. Randomness always flows through a caller-supplied `StdRng` so
//! every draw is reproducible from a seed.

pub mod assemble;
pub mod config;
pub mod error;
pub mod flow;
pub mod numerology;
pub mod omikuji;
pub mod session;
pub mod store;
pub mod tarot;
pub mod zodiac;

pub use assemble::{FortuneMode, FortuneRecord, FortuneResult};
pub use config::EngineConfig;
pub use error::{EngineError, EngineResult};
pub use flow::{Flow, FlowState};
pub use session::FortuneSession;
pub use store::{History, HistoryEntry, ResultMailbox};
