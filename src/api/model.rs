mod balance;
mod de;
mod new_payout;
mod payout;
mod transaction;

pub use balance::Balance;
pub use new_payout::NewPayout;
pub use payout::Payout;
pub use transaction::Transaction;
