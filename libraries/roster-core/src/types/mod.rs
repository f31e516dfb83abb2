/// Domain types for Roster
mod user;

pub use user::{NewUser, User, UserId};
