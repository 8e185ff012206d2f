pub mod initialize_ledger;
pub mod add_allocation;
pub mod add_allocations_batch;
pub mod fund_custody;
pub mod start_vesting;
pub mod claim;
pub mod claim_bizdev;
pub mod claim_bizdev_bonus;
pub mod unlock_bizdev_bonus;
pub mod pause_bizdev_claiming;
pub mod resume_bizdev_claiming;
pub mod claw_back_bizdev_remaining;
pub mod claw_back_bizdev_bonus;
pub mod queries;

pub use initialize_ledger::*;
pub use add_allocation::*;
pub use add_allocations_batch::*;
pub use fund_custody::*;
pub use start_vesting::*;
pub use claim::*;
pub use claim_bizdev::*;
pub use claim_bizdev_bonus::*;
pub use unlock_bizdev_bonus::*;
pub use pause_bizdev_claiming::*;
pub use resume_bizdev_claiming::*;
pub use claw_back_bizdev_remaining::*;
pub use claw_back_bizdev_bonus::*;
pub use queries::*;
