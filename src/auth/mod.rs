pub(crate) mod extractors;
pub(crate) mod session;

pub use extractors::CurrentUser;
pub use session::{session_cookie, SESSION_COOKIE};
