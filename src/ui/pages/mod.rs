pub mod data;
pub mod estimator;
pub mod settings;

pub use data::DataPage;
pub use estimator::EstimatorPage;
pub use settings::SettingsPage;
