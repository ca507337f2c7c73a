pub mod server;

pub use server::{prepare_catalog, serve};
