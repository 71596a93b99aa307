pub mod claims;
pub mod jwt;
pub mod middleware;
pub mod password;
pub mod utils;

pub use claims::Claims;
pub use jwt::JwtService;
pub use middleware::AuthenticatedTeacher;
pub use utils::{require_quiz_owner, TOKEN_COOKIE};
