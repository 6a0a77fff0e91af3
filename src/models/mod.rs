pub mod gbm;
pub mod model;
pub mod ou_process;
