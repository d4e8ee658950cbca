mod stat_card;
mod view;

pub use view::ReportsDashboard;
