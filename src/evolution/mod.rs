pub mod acceptance;
pub mod observer;
pub mod options;
pub mod population;

pub use acceptance::AcceptancePolicy;
pub use observer::{Decision, GenerationObserver, GenerationReport, NoopObserver};
pub use options::{EvolutionOptions, EvolutionOptionsBuilder, LogLevel};
pub use population::Population;
