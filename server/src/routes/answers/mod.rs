mod create;
mod delete;
mod get;
mod get_by_user;

pub use self::create::*;
pub use self::delete::*;
pub use self::get::*;
pub use self::get_by_user::*;
