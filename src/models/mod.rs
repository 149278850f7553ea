mod user;

pub use user::{NewUser, NewUserData};
