//! Request guards and session helpers used by the controllers.

pub mod auth;
pub mod session;

#[cfg(test)]
mod test;
