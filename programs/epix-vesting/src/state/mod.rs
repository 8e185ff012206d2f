pub mod allocation;
pub mod batch;
pub mod bizdev;
pub mod ledger;
pub mod record;
pub mod schedule;
pub mod stats;

pub use allocation::*;
pub use batch::*;
pub use bizdev::*;
pub use ledger::*;
pub use record::*;
pub use schedule::*;
pub use stats::*;
