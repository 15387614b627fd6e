pub mod case_entry;
pub mod session;

pub use case_entry::{CaseRequest, prompt_case};
pub use session::Session;
