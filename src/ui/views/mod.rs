pub mod complete;
pub mod heatmap;
pub mod quiz;
pub mod quiz_list;
