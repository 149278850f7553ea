mod email;
mod username;

pub use email::Email;
pub use username::Username;
