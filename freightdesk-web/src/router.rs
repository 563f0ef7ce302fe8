use yew_router::prelude::*;

#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Intake,
    #[at("/schedule")]
    Schedule,
    #[at("/booking")]
    Booking,
    #[at("/404")]
    #[not_found]
    NotFound,
}
