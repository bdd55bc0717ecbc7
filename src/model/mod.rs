pub mod cell;
pub mod chain;
pub mod participant;
pub mod shutai;

pub use cell::{Cell, RawRow};
pub use chain::{ChainError, StrikeRow};
pub use participant::{BrokerCategory, ParticipantEntry, ParticipantFeed};
pub use shutai::ShutaiRecord;
