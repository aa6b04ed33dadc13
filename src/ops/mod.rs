pub mod celebrate;
pub mod score;
pub mod task_ops;
