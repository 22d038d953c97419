mod create;
mod delete;
mod get;
mod get_all;

pub use self::create::*;
pub use self::delete::*;
pub use self::get::*;
pub use self::get_all::*;
