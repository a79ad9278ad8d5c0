pub mod logging;
pub mod paths;
