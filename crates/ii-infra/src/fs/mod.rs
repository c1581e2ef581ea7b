pub mod app_dirs;
pub mod key_value_file_store;

pub use app_dirs::DirsAppDirsAdapter;
pub use key_value_file_store::FileKeyValueStore;
