use rocket::form::Form;
use rocket::response::{Flash, Redirect};
use rocket::State;
use rocket_dyn_templates::{context, Template};

use crate::models::booking::TicketRequest;
use crate::routes::FlashNote;
use crate::services::booking_service::BookingService;
use crate::utils::session::SessionUser;

/// Persist the seat selection and render the confirmation page.
#[post("/tickets", data = "<request>")]
pub async fn tickets(
    user: SessionUser,
    request: Form<TicketRequest>,
    booking_service: &State<BookingService>,
) -> Result<Template, Flash<Redirect>> {
    match booking_service.book(&user, request.into_inner()).await {
        Ok(booking) => Ok(Template::render(
            "tickets",
            context! { user_name: &user.name, booking: booking, flash: None::<FlashNote> },
        )),
        Err(err) => Err(Flash::error(
            Redirect::to(uri!(crate::routes::movie_route::home1)),
            err.to_string(),
        )),
    }
}

#[post("/tickets", rank = 2)]
pub fn tickets_unauthorized() -> Flash<Redirect> {
    Flash::error(
        Redirect::to(uri!(crate::routes::user_route::login_page)),
        "Please login to book tickets",
    )
}
