mod analytics;
mod envelope;
mod role;
