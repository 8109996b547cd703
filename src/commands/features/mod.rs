pub(super) mod components;
pub(super) mod help;
pub(super) mod incidents;

#[cfg(test)]
mod tests;
