//! Run records and the session log

mod record;
mod store;

pub use record::Run;
pub use store::RunLog;
