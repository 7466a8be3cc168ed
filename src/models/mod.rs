pub mod roster;
pub mod user_record;

pub use roster::Roster;
pub use user_record::UserRecord;
