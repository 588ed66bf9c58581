use rocket::form::Form;
use rocket::http::{Cookie, CookieJar};
use rocket::request::FlashMessage;
use rocket::response::{Flash, Redirect};
use rocket::State;
use rocket_dyn_templates::{context, Template};

use crate::models::user::{LoginRequest, SignupRequest};
use crate::routes::FlashNote;
use crate::services::user_service::UserService;
use crate::utils::session::{SessionUser, SESSION_EMAIL, SESSION_NAME};

/// Landing page; authenticated visitors go straight to the catalog.
#[get("/")]
pub fn index(
    user: Option<SessionUser>,
    flash: Option<FlashMessage<'_>>,
) -> Result<Redirect, Template> {
    if user.is_some() {
        return Ok(Redirect::to(uri!(crate::routes::movie_route::home1)));
    }
    Err(Template::render(
        "index",
        context! { flash: flash.map(FlashNote::from) },
    ))
}

#[get("/login")]
pub fn login_page(flash: Option<FlashMessage<'_>>) -> Template {
    Template::render("login", context! { flash: flash.map(FlashNote::from) })
}

/// Check credentials and establish the session cookies.
#[post("/login", data = "<request>")]
pub async fn login(
    request: Form<LoginRequest>,
    jar: &CookieJar<'_>,
    user_service: &State<UserService>,
) -> Result<Flash<Redirect>, Template> {
    match user_service.authenticate(&request.email, &request.password).await {
        Ok(profile) => {
            jar.add_private(Cookie::new(SESSION_EMAIL, profile.email));
            jar.add_private(Cookie::new(SESSION_NAME, profile.name));
            Ok(Flash::success(
                Redirect::to(uri!(crate::routes::movie_route::home1)),
                "Logged in successfully!",
            ))
        }
        Err(err) => Err(Template::render(
            "login",
            context! { flash: FlashNote::error(err.to_string()) },
        )),
    }
}

#[get("/signup")]
pub fn signup_page(flash: Option<FlashMessage<'_>>) -> Template {
    Template::render("signup", context! { flash: flash.map(FlashNote::from) })
}

/// Create an account, then send the visitor to the login form.
#[post("/signup", data = "<request>")]
pub async fn signup(
    request: Form<SignupRequest>,
    user_service: &State<UserService>,
) -> Result<Flash<Redirect>, Template> {
    match user_service.register(request.into_inner()).await {
        Ok(()) => Ok(Flash::success(
            Redirect::to(uri!(login_page)),
            "Registration successful! Please login.",
        )),
        Err(err) => Err(Template::render(
            "signup",
            context! { flash: FlashNote::error(err.to_string()) },
        )),
    }
}

/// Drop the whole session and return to the landing page.
#[get("/logout")]
pub fn logout(jar: &CookieJar<'_>) -> Flash<Redirect> {
    jar.remove_private(SESSION_EMAIL);
    jar.remove_private(SESSION_NAME);
    Flash::success(Redirect::to(uri!(index)), "Logged out successfully")
}
