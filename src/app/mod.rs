pub mod config;
pub mod workflow;

pub use config::UpdaterConfig;
pub use workflow::execute_readme_workflow;
