mod features;
mod handler;
mod helpers;
mod intent;
mod parser;
mod reconcile;
mod router;

pub use handler::answer;
