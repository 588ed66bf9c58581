use rocket::http::Status;
use rocket::request::{FromRequest, Outcome};
use rocket::Request;

pub const SESSION_EMAIL: &str = "user_email";
pub const SESSION_NAME: &str = "user_name";

/// Authenticated-session guard backed by the private cookie jar.
///
/// Missing cookies forward instead of failing, so a rank-2 fallback route
/// can redirect to the login page with a flash message.
#[derive(Debug, Clone)]
pub struct SessionUser {
    pub email: String,
    pub name: String,
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for SessionUser {
    type Error = ();

    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let jar = request.cookies();
        let email = jar.get_private(SESSION_EMAIL).map(|c| c.value().to_string());
        let name = jar.get_private(SESSION_NAME).map(|c| c.value().to_string());

        match (email, name) {
            (Some(email), Some(name)) => Outcome::Success(SessionUser { email, name }),
            _ => Outcome::Forward(Status::Unauthorized),
        }
    }
}
