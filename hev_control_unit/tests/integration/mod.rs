mod concurrency;
mod config_loading;
mod priority;
mod properties;
mod scenarios;
