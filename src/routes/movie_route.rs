use rocket::request::FlashMessage;
use rocket::response::{Flash, Redirect};
use rocket::State;
use rocket_dyn_templates::{context, Template};

use crate::models::movie::Catalog;
use crate::routes::FlashNote;
use crate::utils::error::AppError;
use crate::utils::session::SessionUser;

/// Movie catalog, shown once logged in.
#[get("/home1")]
pub fn home1(
    user: SessionUser,
    catalog: &State<Catalog>,
    flash: Option<FlashMessage<'_>>,
) -> Template {
    Template::render(
        "home1",
        context! {
            user_name: &user.name,
            movies: catalog.movies(),
            flash: flash.map(FlashNote::from),
        },
    )
}

#[get("/home1", rank = 2)]
pub fn home1_unauthorized() -> Flash<Redirect> {
    Flash::error(
        Redirect::to(uri!(crate::routes::user_route::login_page)),
        "Please login to access this page",
    )
}

#[get("/about")]
pub fn about(flash: Option<FlashMessage<'_>>) -> Template {
    Template::render("about", context! { flash: flash.map(FlashNote::from) })
}

#[get("/contact_us")]
pub fn contact_us(flash: Option<FlashMessage<'_>>) -> Template {
    Template::render("contact_us", context! { flash: flash.map(FlashNote::from) })
}

/// Seat-selection page for one movie and showtime.
#[get("/b1?<movie_id>&<showtime>")]
pub fn b1(
    user: SessionUser,
    movie_id: Option<u32>,
    showtime: Option<String>,
    catalog: &State<Catalog>,
) -> Result<Template, Flash<Redirect>> {
    let movie = movie_id.and_then(|id| catalog.find(id)).ok_or_else(|| {
        Flash::error(Redirect::to(uri!(home1)), AppError::MovieNotFound.to_string())
    })?;

    Ok(Template::render(
        "b1",
        context! {
            user_name: &user.name,
            movie: movie,
            showtime: showtime.unwrap_or_default(),
            seat_rows: seat_rows(),
            flash: None::<FlashNote>,
        },
    ))
}

#[get("/b1", rank = 2)]
pub fn b1_unauthorized() -> Flash<Redirect> {
    Flash::error(
        Redirect::to(uri!(crate::routes::user_route::login_page)),
        "Please login to book tickets",
    )
}

// Fixed 5x8 auditorium layout for the seat picker.
fn seat_rows() -> Vec<Vec<String>> {
    ["A", "B", "C", "D", "E"]
        .iter()
        .map(|row| (1..=8).map(|number| format!("{row}{number}")).collect())
        .collect()
}
