pub mod analytics;
pub mod health;
pub mod jobs;
pub mod root;
pub mod saved_jobs;

#[cfg(test)]
mod test_utils;
