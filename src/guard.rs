use crate::session::Session;

#[derive(Debug, PartialEq, Eq)]
pub enum Denied {
    NoSession,
    WrongUser,
}

/// Authentication first, then the route's `user` must be the session's user.
pub fn authorize(session: Option<Session>, user: &str) -> Result<Session, Denied> {
    let session = session.ok_or(Denied::NoSession)?;
    if session.username != user {
        return Err(Denied::WrongUser);
    }
    Ok(session)
}
