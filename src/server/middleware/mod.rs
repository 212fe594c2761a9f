//! Request guards applied inside controller handlers.

pub mod auth;

#[cfg(test)]
mod test;
