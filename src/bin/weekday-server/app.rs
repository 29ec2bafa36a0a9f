//! Application routes and handlers.
//!
//! # Responsibilities
//! - Declare the application's schemes once, at startup
//! - Dispatch each request path to the first matching route
//! - Build redirect targets only by rendering schemes
//!
//! # Design Decisions
//! - `respond` is a plain function of (routes, path, today) so it is testable without a socket
//! - The router is built per request so handlers can borrow the shared schemes
//! - Obsolete paths redirect permanently to their replacements

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use chrono::{Datelike, Local, NaiveDate, Weekday};
use route_scheme::{
    fixed, int, locale, root, string, Element, Fixed, LanguageTag, Parsed, Project, Root, Router,
    Scheme, Seq, YearMonthDay,
};
use tower_http::trace::TraceLayer;

type Int = Element<Parsed<i32>>;
type Text = Element<Parsed<String>>;
type Locale = Element<Parsed<LanguageTag>>;

/// Year, month and day segments as one calendar date.
pub type DateScheme = Project<Seq<Seq<Int, Int>, Int>, YearMonthDay>;

pub fn date() -> DateScheme {
    int().then(int()).then(int()).project(YearMonthDay)
}

/// Every scheme the application serves, in dispatch order.
#[derive(Debug, Clone)]
pub struct Routes {
    pub root: Root,
    pub negate: Seq<Fixed, Int>,
    pub negative: Seq<Fixed, Int>,
    pub reverse: Seq<Fixed, Text>,
    pub reversed: Seq<Fixed, Text>,
    pub weekday: Seq<Seq<Fixed, Locale>, DateScheme>,
    pub weekday_today: Seq<Seq<Seq<Root, Fixed>, Locale>, Fixed>,
}

impl Routes {
    pub fn new() -> Self {
        Self {
            root: root(),
            negate: fixed("negate").then(int()),
            negative: fixed("negative").then(int()),
            reverse: fixed("reverse").then(string()),
            reversed: fixed("reversed").then(string()),
            weekday: fixed("weekday").then(locale()).then(date()),
            weekday_today: root().then_fixed("weekday").then(locale()).then_fixed("today"),
        }
    }
}

impl Default for Routes {
    fn default() -> Self {
        Self::new()
    }
}

/// Transport-independent outcome of a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Text(String),
    Redirect { location: String, permanent: bool },
    NotFound,
}

impl IntoResponse for Reply {
    fn into_response(self) -> Response {
        match self {
            Reply::Text(body) => body.into_response(),
            Reply::Redirect { location, permanent } => {
                let status = if permanent {
                    StatusCode::MOVED_PERMANENTLY
                } else {
                    StatusCode::FOUND
                };
                (status, [(header::LOCATION, location)]).into_response()
            }
            Reply::NotFound => StatusCode::NOT_FOUND.into_response(),
        }
    }
}

/// Route `path` against the application's schemes.
pub fn respond(routes: &Routes, path: &str, today: NaiveDate) -> Reply {
    Router::new()
        .route(&routes.root, || Reply::Text("Hello, World.".to_string()))
        .route(&routes.negate, |i: i32| Reply::Text((-i64::from(i)).to_string()))
        .route(&routes.negative, |i: i32| Reply::Redirect {
            location: routes.negate.path((i,)),
            permanent: true,
        })
        .route(&routes.reverse, |s: String| Reply::Text(s.chars().rev().collect()))
        .route(&routes.reversed, |s: String| Reply::Redirect {
            location: routes.reverse.path((s,)),
            permanent: true,
        })
        .route(&routes.weekday, |lang: LanguageTag, date: NaiveDate| {
            Reply::Text(weekday_name(&lang, date.weekday()).to_string())
        })
        .route(&routes.weekday_today, |lang: LanguageTag| Reply::Redirect {
            location: routes.weekday.path((lang, today)),
            permanent: false,
        })
        .dispatch(path, || Reply::NotFound)
}

/// Weekday name in the tag's language; English when the language is not known.
fn weekday_name(lang: &LanguageTag, day: Weekday) -> &'static str {
    const EN: [&str; 7] = ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday"];
    const FR: [&str; 7] = ["lundi", "mardi", "mercredi", "jeudi", "vendredi", "samedi", "dimanche"];
    const DE: [&str; 7] = ["Montag", "Dienstag", "Mittwoch", "Donnerstag", "Freitag", "Samstag", "Sonntag"];
    const ES: [&str; 7] = ["lunes", "martes", "miércoles", "jueves", "viernes", "sábado", "domingo"];

    let names = match lang.language() {
        "fr" => &FR,
        "de" => &DE,
        "es" => &ES,
        _ => &EN,
    };
    names[day.num_days_from_monday() as usize]
}

/// Build the axum application.
pub fn app(routes: Arc<Routes>) -> axum::Router {
    axum::Router::new()
        .fallback(handle)
        .with_state(routes)
        .layer(TraceLayer::new_for_http())
}

async fn handle(State(routes): State<Arc<Routes>>, uri: Uri) -> Response {
    respond(&routes, uri.path(), Local::now().date_naive()).into_response()
}
