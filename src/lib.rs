pub mod config;
pub mod invocation;
pub mod logging;
pub mod paths;
pub mod report;
pub mod request;
pub mod rules;
pub mod runner;
