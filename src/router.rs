use std::io::Read;

use astra::{Request, Response};
use chrono::Utc;

use crate::app::{App, SAMPLE_TOTAL_VIEWS};
use crate::auth::token::{generate_session_token, is_well_formed, session_namespace};
use crate::auth::{AuthError, LoginRequest, RegisterRequest, User};
use crate::db::SqliteKvStore;
use crate::domain::booking::{find_request, sample_bookings, sample_requests};
use crate::domain::draft::ListingDraft;
use crate::domain::{FilterSpec, Listing, Owner, RequestAction, SortOrder};
use crate::errors::ServerError;
use crate::responses::redirect::SESSION_COOKIE;
use crate::responses::{
    css_response, html_error_response, html_response, html_response_with_status, redirect,
    safe_return_path, with_session_cookie, ResultResp,
};
use crate::session::{KvStore, SessionContext};
use crate::templates::pages::{
    self, AuthFormVm, ListingDetailVm, ListingFormVm, OwnerDashboardVm, OwnerStats,
};
use crate::templates::{Nav, Notice};

const MAIN_CSS: &str = include_str!("../static/main.css");

/// Upper bound on urlencoded form bodies.
const MAX_FORM_BYTES: u64 = 64 * 1024;

const FEATURED_COUNT: usize = 3;

/// Catalog listings previewed on an owner dashboard with no listings.
const SAMPLE_LISTING_COUNT: usize = 3;

type Session = SessionContext<SqliteKvStore>;
type Params = Vec<(String, String)>;

pub fn handle(req: Request, app: &App) -> ResultResp {
    let span = tracing::info_span!(
        "request",
        method = %req.method(),
        path = %req.uri().path()
    );
    let _enter = span.enter();

    let (token, is_new) = match session_cookie(&req) {
        Some(t) => (t, false),
        None => (generate_session_token(), true),
    };

    // Error pages still carry a freshly issued cookie.
    let resp = match respond(req, app, &token) {
        Ok(resp) => resp,
        Err(err) => error_page(err),
    };

    if is_new {
        with_session_cookie(resp, &token)
    } else {
        Ok(resp)
    }
}

fn respond(req: Request, app: &App, token: &str) -> ResultResp {
    let store = SqliteKvStore::new(app.db.clone(), session_namespace(token));
    let mut session = SessionContext::load(store)?;
    route(req, app, &mut session)
}

fn error_page(err: ServerError) -> Response {
    if err.status() >= 500 {
        tracing::error!(error = %err, "request failed");
    } else {
        tracing::debug!(error = %err, "request rejected");
    }
    html_error_response(err)
}

fn route(mut req: Request, app: &App, session: &mut Session) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();
    let query = query_pairs(&req);
    let notice = param(&query, "notice").and_then(Notice::parse);
    let nav = Nav {
        user_type: session.user_type(),
    };

    let segments: Vec<&str> = path.trim_matches('/').split('/').collect();

    match (method.as_str(), segments.as_slice()) {
        ("GET", [""]) => home(app, &nav, notice),
        ("GET", ["about"]) => html_response(pages::about_page(&nav)),
        ("GET", ["help"]) => html_response(pages::help_page(&nav)),
        ("GET", ["static", "main.css"]) => css_response(MAIN_CSS),

        ("GET", ["listings"]) => {
            let return_to = req
                .uri()
                .path_and_query()
                .map(|pq| pq.as_str().to_string())
                .unwrap_or_else(|| path.clone());
            listings(app, session, &nav, &query, &return_to, notice)
        }
        ("GET", ["listing", id]) => listing_detail(app, session, &nav, id, notice),
        ("POST", ["listing", id, "favorite"]) => {
            let form = form_pairs(&mut req)?;
            toggle_favorite(app, session, id, &form)
        }
        ("POST", ["listing", id, "contact"]) => {
            let form = form_pairs(&mut req)?;
            contact_owner(app, session, id, &form)
        }

        ("GET", ["login"]) => match session.user_type() {
            Some(t) => redirect(t.dashboard_path()),
            None => html_response(pages::login_page(
                &nav,
                &AuthFormVm {
                    notice,
                    ..AuthFormVm::default()
                },
            )),
        },
        ("POST", ["login"]) => {
            let form = form_pairs(&mut req)?;
            login(app, session, &nav, &form)
        }
        ("GET", ["signup"]) => match session.user_type() {
            Some(t) => redirect(t.dashboard_path()),
            None => html_response(pages::signup_page(&nav, &AuthFormVm::default())),
        },
        ("POST", ["signup"]) => {
            let form = form_pairs(&mut req)?;
            signup(app, session, &nav, &form)
        }
        ("POST", ["logout"]) => {
            session.sign_out()?;
            redirect(&Notice::LoggedOut.append_to("/"))
        }

        ("GET", ["dashboard"]) => student_dashboard(app, session, &nav, notice),
        ("GET", ["owner", "dashboard"]) => owner_dashboard(app, session, &nav, notice),
        ("GET", ["owner", "listings", "new"]) => new_listing_form(session, &nav),
        ("POST", ["owner", "listings"]) => {
            let form = form_pairs(&mut req)?;
            create_listing(app, session, &nav, &form)
        }
        ("GET", ["owner", "listings", id, "edit"]) => edit_listing_form(app, session, &nav, id),
        ("POST", ["owner", "listings", id]) => {
            let form = form_pairs(&mut req)?;
            update_listing(app, session, &nav, id, &form)
        }
        ("POST", ["owner", "listings", id, "delete"]) => delete_listing(app, session, id),
        ("POST", ["owner", "requests", id, action]) => booking_request_action(session, id, action),

        _ => Err(ServerError::NotFound),
    }
}

// ---- pages ----

fn home(app: &App, nav: &Nav, notice: Option<Notice>) -> ResultResp {
    let mut spec = FilterSpec {
        sort: SortOrder::Newest,
        ..FilterSpec::default()
    };
    spec.price_range.min = 0;
    spec.price_range.max = u32::MAX;

    let mut featured = app.catalog.search(&spec)?;
    featured.truncate(FEATURED_COUNT);
    html_response(pages::home_page(nav, &featured, notice))
}

fn listings(
    app: &App,
    session: &Session,
    nav: &Nav,
    query: &Params,
    return_to: &str,
    notice: Option<Notice>,
) -> ResultResp {
    let spec = FilterSpec::from_params(query);
    let results = app.catalog.search(&spec)?;
    let favorites = session.favorites()?;
    html_response(pages::listings_page(
        nav, &spec, &results, &favorites, return_to, notice,
    ))
}

fn listing_detail(
    app: &App,
    session: &Session,
    nav: &Nav,
    id: &str,
    notice: Option<Notice>,
) -> ResultResp {
    let listing = app.catalog.get(id)?.ok_or(ServerError::NotFound)?;
    let vm = ListingDetailVm {
        is_favorite: session.is_favorite(&listing.id)?,
        can_edit: session.user().is_some_and(|u| u.id == listing.owner.id),
        listing: &listing,
        notice,
    };
    html_response(pages::listing_detail_page(nav, &vm))
}

fn toggle_favorite(app: &App, session: &Session, id: &str, form: &Params) -> ResultResp {
    if !session.is_authenticated() {
        return redirect("/login");
    }
    if app.catalog.get(id)?.is_none() {
        return Err(ServerError::NotFound);
    }

    let now_favorite = session.toggle_favorite(id)?;
    tracing::info!(listing_id = id, now_favorite, "favorite toggled");

    let fallback = format!("/listing/{id}");
    let target = safe_return_path(param(form, "return_to")).unwrap_or(&fallback);
    let notice = if now_favorite {
        Notice::FavoriteAdded
    } else {
        Notice::FavoriteRemoved
    };
    redirect(&notice.append_to(target))
}

fn contact_owner(app: &App, session: &Session, id: &str, form: &Params) -> ResultResp {
    let Some(user) = session.user() else {
        return redirect("/login");
    };
    let listing = app.catalog.get(id)?.ok_or(ServerError::NotFound)?;

    tracing::info!(
        listing_id = %listing.id,
        owner_id = %listing.owner.id,
        from = %user.id,
        channel = param(form, "channel").unwrap_or("message"),
        "contact request (simulated)"
    );
    redirect(&Notice::ContactSent.append_to(&format!("/listing/{id}")))
}

// ---- auth ----

fn login(app: &App, session: &mut Session, nav: &Nav, form: &Params) -> ResultResp {
    let req = LoginRequest::from_params(form);
    let result = app.block_on(app.auth.login(&req, &app.auth_token()));

    match result {
        Ok(user) => signed_in(session, user),
        Err(e) => {
            let vm = AuthFormVm {
                email: req.email.clone(),
                user_type: req.user_type,
                error: Some(e.to_string()),
                ..AuthFormVm::default()
            };
            html_response_with_status(auth_failure_status(&e), pages::login_page(nav, &vm))
        }
    }
}

fn signup(app: &App, session: &mut Session, nav: &Nav, form: &Params) -> ResultResp {
    let req = RegisterRequest::from_params(form);
    let result = app.block_on(app.auth.register(&req, &app.auth_token()));

    match result {
        Ok(user) => signed_in(session, user),
        Err(e) => {
            let vm = AuthFormVm {
                name: req.name.clone(),
                email: req.email.clone(),
                user_type: req.user_type,
                error: Some(e.to_string()),
                notice: None,
            };
            html_response_with_status(auth_failure_status(&e), pages::signup_page(nav, &vm))
        }
    }
}

fn signed_in(session: &mut Session, user: User) -> ResultResp {
    let target = user.user_type.dashboard_path();
    session.sign_in(user)?;
    redirect(target)
}

fn auth_failure_status(e: &AuthError) -> u16 {
    match e {
        AuthError::Cancelled => 503,
        other => {
            tracing::warn!(reason = %other, "auth form rejected");
            400
        }
    }
}

// ---- dashboards ----

fn student_dashboard(
    app: &App,
    session: &Session,
    nav: &Nav,
    notice: Option<Notice>,
) -> ResultResp {
    let Some(user) = session.user() else {
        return redirect("/login");
    };
    let favorites = app.catalog.get_many(&session.favorites()?)?;
    let bookings = with_listings(app, sample_bookings(), |b| b.listing_id)?;
    html_response(pages::dashboard_page(
        nav, user, &favorites, &bookings, notice,
    ))
}

fn owner_dashboard(
    app: &App,
    session: &Session,
    nav: &Nav,
    notice: Option<Notice>,
) -> ResultResp {
    let user = match require_owner(session) {
        Ok(u) => u,
        Err(to) => return redirect(to),
    };
    let listings = app.catalog.owned_by(&user.id)?;
    let samples = if listings.is_empty() {
        app.catalog.first(SAMPLE_LISTING_COUNT)?
    } else {
        Vec::new()
    };
    let requests = with_listings(app, sample_requests(), |r| r.listing_id)?;
    let stats = OwnerStats {
        total_listings: listings.len(),
        active_requests: requests.len(),
        total_views: SAMPLE_TOTAL_VIEWS,
    };

    html_response(pages::owner_dashboard_page(
        nav,
        &OwnerDashboardVm {
            user,
            stats,
            listings: &listings,
            samples: &samples,
            requests: &requests,
            notice,
        },
    ))
}

fn booking_request_action(session: &Session, id: &str, action: &str) -> ResultResp {
    let user = match require_owner(session) {
        Ok(u) => u,
        Err(to) => return redirect(to),
    };
    let request = find_request(id).ok_or(ServerError::NotFound)?;
    let action = RequestAction::parse(action).ok_or(ServerError::NotFound)?;

    tracing::info!(
        request_id = request.id,
        listing_id = request.listing_id,
        owner_id = %user.id,
        action = action.as_str(),
        "booking request handled (simulated)"
    );
    let notice = match action {
        RequestAction::Accept => Notice::RequestAccepted,
        RequestAction::Contact => Notice::StudentContacted,
        RequestAction::Decline => Notice::RequestDeclined,
    };
    redirect(&notice.append_to("/owner/dashboard"))
}

// ---- listing CRUD ----

fn new_listing_form(session: &Session, nav: &Nav) -> ResultResp {
    if let Err(to) = require_owner(session) {
        return redirect(to);
    }
    let draft = ListingDraft::default();
    html_response(pages::listing_form_page(
        nav,
        &ListingFormVm {
            listing_id: None,
            draft: &draft,
            error: None,
        },
    ))
}

fn create_listing(app: &App, session: &Session, nav: &Nav, form: &Params) -> ResultResp {
    let user = match require_owner(session) {
        Ok(u) => u,
        Err(to) => return redirect(to),
    };
    let draft = ListingDraft::from_params(form);
    let owner = Owner {
        id: user.id.clone(),
        name: user.name.clone(),
        image: None,
        response_rate: "100%".to_string(),
    };

    match app
        .catalog
        .create(draft.clone(), owner, Utc::now().date_naive())
    {
        Ok(_) => redirect(&Notice::ListingCreated.append_to("/owner/dashboard")),
        Err(ServerError::BadRequest(msg)) => rejected_form(nav, None, &draft, msg),
        Err(e) => Err(e),
    }
}

fn edit_listing_form(app: &App, session: &Session, nav: &Nav, id: &str) -> ResultResp {
    let user = match require_owner(session) {
        Ok(u) => u,
        Err(to) => return redirect(to),
    };
    let listing = app.catalog.get(id)?.ok_or(ServerError::NotFound)?;
    if listing.owner.id != user.id {
        return Err(ServerError::Forbidden(
            "You can only edit your own listings.".into(),
        ));
    }

    let draft = ListingDraft::from_listing(&listing);
    html_response(pages::listing_form_page(
        nav,
        &ListingFormVm {
            listing_id: Some(id),
            draft: &draft,
            error: None,
        },
    ))
}

fn update_listing(
    app: &App,
    session: &Session,
    nav: &Nav,
    id: &str,
    form: &Params,
) -> ResultResp {
    let user = match require_owner(session) {
        Ok(u) => u,
        Err(to) => return redirect(to),
    };
    let draft = ListingDraft::from_params(form);

    match app.catalog.update(id, &user.id, draft.clone()) {
        Ok(_) => redirect(&Notice::ListingUpdated.append_to("/owner/dashboard")),
        Err(ServerError::BadRequest(msg)) => rejected_form(nav, Some(id), &draft, msg),
        Err(e) => Err(e),
    }
}

fn delete_listing(app: &App, session: &Session, id: &str) -> ResultResp {
    let user = match require_owner(session) {
        Ok(u) => u,
        Err(to) => return redirect(to),
    };
    app.catalog.delete(id, &user.id)?;
    redirect(&Notice::ListingDeleted.append_to("/owner/dashboard"))
}

fn rejected_form(nav: &Nav, listing_id: Option<&str>, draft: &ListingDraft, msg: String) -> ResultResp {
    tracing::warn!(reason = %msg, "listing form rejected");
    html_response_with_status(
        400,
        pages::listing_form_page(
            nav,
            &ListingFormVm {
                listing_id,
                draft,
                error: Some(msg),
            },
        ),
    )
}

// ---- helpers ----

/// Signed-in owner, or where to send everyone else.
fn require_owner<S: KvStore>(session: &SessionContext<S>) -> Result<&User, &'static str> {
    match session.user() {
        None => Err("/login"),
        Some(u) if !u.is_owner() => Err("/dashboard"),
        Some(u) => Ok(u),
    }
}

/// Pair each item with the listing it refers to, skipping listings that
/// have since been deleted.
fn with_listings<T>(
    app: &App,
    items: Vec<T>,
    listing_id: impl Fn(&T) -> &str,
) -> Result<Vec<(T, Listing)>, ServerError> {
    let mut out = Vec::with_capacity(items.len());
    for item in items {
        if let Some(listing) = app.catalog.get(listing_id(&item))? {
            out.push((item, listing));
        }
    }
    Ok(out)
}

/// The visitor's session cookie, if it has the shape we issue.
fn session_cookie(req: &Request) -> Option<String> {
    req.headers()
        .get_all("Cookie")
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|header| header.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .map(|(_, value)| value.to_string())
        .filter(|value| is_well_formed(value))
}

fn query_pairs(req: &Request) -> Params {
    req.uri()
        .query()
        .map(|q| url::form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}

fn form_pairs(req: &mut Request) -> Result<Params, ServerError> {
    let mut raw = Vec::new();
    req.body_mut()
        .reader()
        .take(MAX_FORM_BYTES + 1)
        .read_to_end(&mut raw)
        .map_err(|e| ServerError::BadRequest(format!("Could not read form: {e}")))?;
    if raw.len() as u64 > MAX_FORM_BYTES {
        return Err(ServerError::BadRequest("Form too large".into()));
    }
    Ok(url::form_urlencoded::parse(&raw).into_owned().collect())
}

fn param<'a>(params: &'a Params, key: &str) -> Option<&'a str> {
    params
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}
