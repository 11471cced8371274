/// Connect to a waffle maker deployment.
pub mod setup;

mod waffle;
