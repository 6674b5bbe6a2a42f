pub mod panels;

pub use app::run_tui;
pub use db::PreferenceStore;
pub use form::JobCardForm;

mod app;
mod db;
mod form;
mod resource;
mod state;
mod toast;
