pub mod chain;
pub mod cli;
pub mod data;
pub mod example;
pub mod journal;
pub mod model;
pub mod participants;
pub mod schema;
pub mod trend;
