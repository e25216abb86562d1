#![doc = include_str!("../README.md")]

mod auth_client;

pub mod login;

pub use auth_client::{AuthClient, AuthClientExt};
