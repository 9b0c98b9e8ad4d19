pub mod list;
pub mod init;
pub mod config;

pub use list::{handle_list, ListArgs};
pub use init::handle_init;
pub use config::handle_config;
