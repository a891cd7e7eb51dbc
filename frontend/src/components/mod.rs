pub mod assistant;
pub mod maintenance;
pub mod results;
pub mod search_bar;
pub mod ui;
