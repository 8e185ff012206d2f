pub mod accounts;
pub mod custody;
pub mod digest;
pub mod vesting;
