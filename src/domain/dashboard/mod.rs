pub mod view;

pub use view::{DashboardView, LegendEntry};
