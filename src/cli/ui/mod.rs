pub mod observer;
pub mod output;
pub mod prompts;
pub mod spinner;

pub use observer::CliObserver;
pub use output::print_pairs;
pub use spinner::Spinner;
