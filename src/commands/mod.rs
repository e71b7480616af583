pub mod check;
pub mod clean;
pub mod hash;
pub mod init;
pub mod list;
