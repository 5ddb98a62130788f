mod authority;

pub use authority::{AuthError, AuthenticatedIdentity, SessionAuthority};
