//! End-to-end tests over the HTTP surface: cookie login, role gating and
//! the mentorship/session workflows, all against the file-backed store.

use actix_http::Request;
use actix_identity::IdentityMiddleware;
use actix_web::cookie::{Cookie, Key};
use actix_web::dev::{Service, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::http::{header, StatusCode};
use actix_web::{test, web, App, Error};
use mentorship_core::args::Args;
use mentorship_core::data_model::user::{Role, User};
use mentorship_core::server;
use mentorship_core::state::data::Data;
use mentorship_core::state::state::State;
use mentorship_core::state::store::Store;
use mentorship_core::state::store_local::StoreLocal;
use mentorship_core::util::crypto::get_password_hash;
use rstest::rstest;
use serde_json::Value;
use tempfile::TempDir;

const ADMIN: (&str, &str) = ("admin@x.com", "adminpw");
const MENTOR: (&str, &str) = ("mentor@x.com", "mentorpw");
const MENTEE: (&str, &str) = ("mentee@x.com", "menteepw");

/// Seeds one user per role: admin is id 1, mentor id 2, mentee id 3.
async fn seeded_state(tmp: &TempDir) -> web::Data<State> {
    let mut store = StoreLocal::new(&tmp.path().to_string_lossy());
    store.connect().await.unwrap();

    store
        .put_user(&User::new(ADMIN.0, &get_password_hash(ADMIN.1), Role::Admin))
        .await
        .unwrap();
    let mut mentor = User::new(MENTOR.0, &get_password_hash(MENTOR.1), Role::Mentor);
    mentor.name = "Mentor".to_string();
    mentor.skills = vec!["Development".to_string()];
    store.put_user(&mentor).await.unwrap();
    store
        .put_user(&User::new(
            MENTEE.0,
            &get_password_hash(MENTEE.1),
            Role::Mentee,
        ))
        .await
        .unwrap();

    web::Data::new(State::new(Data::new(
        Box::new(store),
        Args::default_for_test(),
    )))
}

fn test_app(
    data: web::Data<State>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(data)
        .wrap(IdentityMiddleware::default())
        .wrap(server::session_middleware(Key::generate()))
        .configure(server::configure)
}

fn merge_cookies(jar: &mut Vec<Cookie<'static>>, resp: &ServiceResponse) {
    for cookie in resp.response().cookies() {
        let cookie = cookie.into_owned();
        jar.retain(|old| old.name() != cookie.name());
        jar.push(cookie);
    }
}

fn with_cookies(mut req: test::TestRequest, jar: &[Cookie<'static>]) -> test::TestRequest {
    for cookie in jar {
        req = req.cookie(cookie.clone());
    }
    req
}

async fn login<S>(app: &S, creds: (&str, &str)) -> Vec<Cookie<'static>>
where
    S: Service<Request, Response = ServiceResponse, Error = Error>,
{
    let req = test::TestRequest::post()
        .uri("/auth/login")
        .set_form([("email", creds.0), ("password", creds.1)])
        .to_request();
    let resp = test::call_service(app, req).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER, "login as {}", creds.0);
    let mut jar = Vec::new();
    merge_cookies(&mut jar, &resp);
    jar
}

async fn get_json<S>(app: &S, jar: &[Cookie<'static>], uri: &str) -> Value
where
    S: Service<Request, Response = ServiceResponse, Error = Error>,
{
    let req = with_cookies(test::TestRequest::get().uri(uri), jar).to_request();
    let resp = test::call_service(app, req).await;
    assert_eq!(resp.status(), StatusCode::OK, "GET {}", uri);
    test::read_body_json(resp).await
}

#[actix_web::test]
async fn anonymous_requests_redirect_to_login() {
    let tmp = tempfile::tempdir().unwrap();
    let app = test::init_service(test_app(seeded_state(&tmp).await)).await;

    for uri in ["/dashboard", "/mentors", "/requests", "/admin/users"] {
        let resp = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
        assert_eq!(resp.status(), StatusCode::SEE_OTHER, "GET {}", uri);
        assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/auth/login");
    }
}

#[actix_web::test]
async fn login_rejects_bad_credentials() {
    let tmp = tempfile::tempdir().unwrap();
    let app = test::init_service(test_app(seeded_state(&tmp).await)).await;

    for (email, password) in [(ADMIN.0, "wrong"), ("nobody@x.com", "pw")] {
        let req = test::TestRequest::post()
            .uri("/auth/login")
            .set_form([("email", email), ("password", password)])
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Invalid credentials");
    }
}

#[actix_web::test]
async fn login_establishes_identity_without_leaking_the_hash() {
    let tmp = tempfile::tempdir().unwrap();
    let app = test::init_service(test_app(seeded_state(&tmp).await)).await;

    let jar = login(&app, MENTEE).await;
    let page = get_json(&app, &jar, "/dashboard").await;
    assert_eq!(page["user"]["email"], MENTEE.0);
    assert_eq!(page["user"]["role"], "MENTEE");
    assert!(page["user"].get("password").is_none());
}

#[actix_web::test]
async fn profile_edit_page_serves_the_profile() {
    let tmp = tempfile::tempdir().unwrap();
    let app = test::init_service(test_app(seeded_state(&tmp).await)).await;

    let jar = login(&app, MENTEE).await;
    let page = get_json(&app, &jar, "/profile/edit").await;
    assert_eq!(page["user"]["email"], MENTEE.0);
    assert!(page["user"].get("password").is_none());
}

#[actix_web::test]
async fn logout_clears_the_session() {
    let tmp = tempfile::tempdir().unwrap();
    let app = test::init_service(test_app(seeded_state(&tmp).await)).await;

    let mut jar = login(&app, MENTEE).await;
    let req = with_cookies(test::TestRequest::post().uri("/auth/logout"), &jar).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/auth/login");
    merge_cookies(&mut jar, &resp);

    let req = with_cookies(test::TestRequest::get().uri("/dashboard"), &jar).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
}

#[actix_web::test]
async fn anonymous_logout_redirects_to_login() {
    let tmp = tempfile::tempdir().unwrap();
    let app = test::init_service(test_app(seeded_state(&tmp).await)).await;

    let resp = test::call_service(
        &app,
        test::TestRequest::post().uri("/auth/logout").to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/auth/login");
}

// Role gating: each endpoint answers 403 for an authenticated user whose
// role is outside the accepted set.
#[rstest]
#[case::mentors_for_mentor("/mentors", MENTOR)]
#[case::mentors_for_admin("/mentors", ADMIN)]
#[case::requests_for_admin("/requests", ADMIN)]
#[case::sessions_for_admin("/sessions", ADMIN)]
#[case::availability_for_mentee("/availability", MENTEE)]
#[case::admin_users_for_mentor("/admin/users", MENTOR)]
#[case::admin_matches_for_mentee("/admin/matches", MENTEE)]
#[case::admin_sessions_for_mentor("/admin/sessions", MENTOR)]
#[actix_web::test]
async fn wrong_role_is_forbidden(#[case] uri: &str, #[case] creds: (&str, &str)) {
    let tmp = tempfile::tempdir().unwrap();
    let app = test::init_service(test_app(seeded_state(&tmp).await)).await;

    let jar = login(&app, creds).await;
    let req = with_cookies(test::TestRequest::get().uri(uri), &jar).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN, "GET {}", uri);
}

#[actix_web::test]
async fn register_is_admin_only_and_validates_role() {
    let tmp = tempfile::tempdir().unwrap();
    let app = test::init_service(test_app(seeded_state(&tmp).await)).await;

    let jar = login(&app, MENTEE).await;
    let req = with_cookies(test::TestRequest::post().uri("/auth/register"), &jar)
        .set_form([("email", "n@x.com"), ("password", "pw"), ("role", "MENTOR")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let jar = login(&app, ADMIN).await;
    for bad_role in ["TEACHER", "mentor", ""] {
        let req = with_cookies(test::TestRequest::post().uri("/auth/register"), &jar)
            .set_form([("email", "n@x.com"), ("password", "pw"), ("role", bad_role)])
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "role {}", bad_role);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Invalid input");
    }
}

#[actix_web::test]
async fn register_creates_the_user_and_switches_identity() {
    let tmp = tempfile::tempdir().unwrap();
    let app = test::init_service(test_app(seeded_state(&tmp).await)).await;

    let mut jar = login(&app, ADMIN).await;
    let req = with_cookies(test::TestRequest::post().uri("/auth/register"), &jar)
        .set_form([("email", "new@x.com"), ("password", "pw"), ("role", "MENTOR")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        resp.headers().get(header::LOCATION).unwrap(),
        "/profile/edit"
    );
    merge_cookies(&mut jar, &resp);

    // The session now belongs to the freshly registered account.
    let page = get_json(&app, &jar, "/dashboard").await;
    assert_eq!(page["user"]["email"], "new@x.com");
    assert_eq!(page["user"]["role"], "MENTOR");

    // And the new account can log in with its own password.
    login(&app, ("new@x.com", "pw")).await;
}

#[actix_web::test]
async fn register_rejects_duplicate_email() {
    let tmp = tempfile::tempdir().unwrap();
    let app = test::init_service(test_app(seeded_state(&tmp).await)).await;

    let jar = login(&app, ADMIN).await;
    let req = with_cookies(test::TestRequest::post().uri("/auth/register"), &jar)
        .set_form([("email", MENTOR.0), ("password", "pw"), ("role", "MENTOR")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Email already registered");
}

#[actix_web::test]
async fn mentor_search_filters_by_skill_membership() {
    let tmp = tempfile::tempdir().unwrap();
    let app = test::init_service(test_app(seeded_state(&tmp).await)).await;

    let jar = login(&app, MENTEE).await;
    let page = get_json(&app, &jar, "/mentors?skills=Development,Finance").await;
    assert_eq!(page["mentors"].as_array().unwrap().len(), 1);
    assert_eq!(page["mentors"][0]["email"], MENTOR.0);

    let page = get_json(&app, &jar, "/mentors?skills=Finance").await;
    assert!(page["mentors"].as_array().unwrap().is_empty());

    // No filter lists every mentor.
    let page = get_json(&app, &jar, "/mentors").await;
    assert_eq!(page["mentors"].as_array().unwrap().len(), 1);
}

#[actix_web::test]
async fn mentorship_request_lifecycle() {
    let tmp = tempfile::tempdir().unwrap();
    let app = test::init_service(test_app(seeded_state(&tmp).await)).await;

    let mentee_jar = login(&app, MENTEE).await;
    let req = with_cookies(test::TestRequest::post().uri("/mentors"), &mentee_jar)
        .set_form([("mentor_id", "2")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    // Created pending, visible from both sides.
    let page = get_json(&app, &mentee_jar, "/requests").await;
    assert_eq!(page["requests"][0]["status"], "PENDING");
    let request_id = page["requests"][0]["id"].to_string();

    let mentor_jar = login(&app, MENTOR).await;
    let page = get_json(&app, &mentor_jar, "/requests").await;
    assert_eq!(page["requests"][0]["mentee_id"], 3);

    // Mentees cannot decide requests.
    let req = with_cookies(test::TestRequest::post().uri("/requests"), &mentee_jar)
        .set_form([("request_id", request_id.as_str()), ("status", "ACCEPTED")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    // Invalid target status is rejected.
    let req = with_cookies(test::TestRequest::post().uri("/requests"), &mentor_jar)
        .set_form([("request_id", request_id.as_str()), ("status", "PENDING")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    // Accepting works and repeating it is idempotent in final state.
    for _ in 0..2 {
        let req = with_cookies(test::TestRequest::post().uri("/requests"), &mentor_jar)
            .set_form([("request_id", request_id.as_str()), ("status", "ACCEPTED")])
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let page = get_json(&app, &mentor_jar, "/requests").await;
        assert_eq!(page["requests"][0]["status"], "ACCEPTED");
    }

    // The accepted pair is what the admin match list shows.
    let admin_jar = login(&app, ADMIN).await;
    let page = get_json(&app, &admin_jar, "/admin/matches").await;
    let matches = page["matches"].as_array().unwrap();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0]["mentor_id"], 2);
    assert_eq!(matches[0]["mentee_id"], 3);
}

#[actix_web::test]
async fn unknown_request_id_is_reported() {
    let tmp = tempfile::tempdir().unwrap();
    let app = test::init_service(test_app(seeded_state(&tmp).await)).await;

    let jar = login(&app, MENTOR).await;
    let req = with_cookies(test::TestRequest::post().uri("/requests"), &jar)
        .set_form([("request_id", "999"), ("status", "REJECTED")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Request not found");
}

#[actix_web::test]
async fn session_booking_needs_mentor_availability() {
    let tmp = tempfile::tempdir().unwrap();
    let app = test::init_service(test_app(seeded_state(&tmp).await)).await;

    let mentee_jar = login(&app, MENTEE).await;
    let book = [
        ("action", "create"),
        ("mentor_id", "2"),
        ("start_time", "2026-09-07T10:00"),
        ("end_time", "2026-09-07T11:00"),
    ];

    let req = with_cookies(test::TestRequest::post().uri("/sessions"), &mentee_jar)
        .set_form(book)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Mentor has no availability set");

    // Nothing was written.
    let page = get_json(&app, &mentee_jar, "/sessions").await;
    assert!(page["sessions"].as_array().unwrap().is_empty());

    // Any availability row unlocks booking; the window is not matched.
    let mentor_jar = login(&app, MENTOR).await;
    let req = with_cookies(test::TestRequest::post().uri("/availability"), &mentor_jar)
        .set_form([
            ("day_of_week", "Friday"),
            ("start_time", "09:00"),
            ("end_time", "12:00"),
        ])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let page = get_json(&app, &mentor_jar, "/availability").await;
    assert_eq!(page["availability"][0]["day_of_week"], "Friday");

    let req = with_cookies(test::TestRequest::post().uri("/sessions"), &mentee_jar)
        .set_form(book)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let page = get_json(&app, &mentee_jar, "/sessions").await;
    assert_eq!(page["sessions"].as_array().unwrap().len(), 1);
    let page = get_json(&app, &mentor_jar, "/sessions").await;
    assert_eq!(page["sessions"].as_array().unwrap().len(), 1);
}

#[actix_web::test]
async fn availability_form_requires_all_fields() {
    let tmp = tempfile::tempdir().unwrap();
    let app = test::init_service(test_app(seeded_state(&tmp).await)).await;

    let jar = login(&app, MENTOR).await;
    let req = with_cookies(test::TestRequest::post().uri("/availability"), &jar)
        .set_form([("day_of_week", "Friday"), ("start_time", "09:00")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "All fields are required");
}

#[actix_web::test]
async fn feedback_is_range_checked_and_one_shot() {
    let tmp = tempfile::tempdir().unwrap();
    let app = test::init_service(test_app(seeded_state(&tmp).await)).await;

    let mentor_jar = login(&app, MENTOR).await;
    let req = with_cookies(test::TestRequest::post().uri("/availability"), &mentor_jar)
        .set_form([
            ("day_of_week", "Monday"),
            ("start_time", "09:00"),
            ("end_time", "10:00"),
        ])
        .to_request();
    test::call_service(&app, req).await;

    let mentee_jar = login(&app, MENTEE).await;
    let req = with_cookies(test::TestRequest::post().uri("/sessions"), &mentee_jar)
        .set_form([
            ("action", "create"),
            ("mentor_id", "2"),
            ("start_time", "2026-09-07T10:00"),
            ("end_time", "2026-09-07T11:00"),
        ])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    let session_id = body["id"].to_string();

    for bad_rating in ["0", "6", "-1", "abc", ""] {
        let req = with_cookies(test::TestRequest::post().uri("/sessions"), &mentee_jar)
            .set_form([
                ("action", "feedback"),
                ("session_id", session_id.as_str()),
                ("rating", bad_rating),
            ])
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "rating {}", bad_rating);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Invalid rating");

        // The record is untouched.
        let page = get_json(&app, &mentee_jar, "/sessions").await;
        assert!(page["sessions"][0]["feedback"].is_null());
    }

    let req = with_cookies(test::TestRequest::post().uri("/sessions"), &mentee_jar)
        .set_form([
            ("action", "feedback"),
            ("session_id", session_id.as_str()),
            ("rating", "4"),
            ("comment", "solid advice"),
        ])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let page = get_json(&app, &mentee_jar, "/sessions").await;
    assert_eq!(page["sessions"][0]["feedback"]["rating"], 4);
    assert_eq!(page["sessions"][0]["feedback"]["comment"], "solid advice");

    // Feedback is written at most once.
    let req = with_cookies(test::TestRequest::post().uri("/sessions"), &mentee_jar)
        .set_form([
            ("action", "feedback"),
            ("session_id", session_id.as_str()),
            ("rating", "5"),
        ])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Feedback already submitted");

    let page = get_json(&app, &mentee_jar, "/sessions").await;
    assert_eq!(page["sessions"][0]["feedback"]["rating"], 4);
}

#[actix_web::test]
async fn profile_edit_validates_name_and_splits_lists() {
    let tmp = tempfile::tempdir().unwrap();
    let app = test::init_service(test_app(seeded_state(&tmp).await)).await;

    let jar = login(&app, MENTEE).await;
    let req = with_cookies(test::TestRequest::post().uri("/profile/edit"), &jar)
        .set_form([("name", "A"), ("bio", "hi")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Name must be at least 2 characters");

    let req = with_cookies(test::TestRequest::post().uri("/profile/edit"), &jar)
        .set_form([
            ("name", "Ada"),
            ("bio", "learning"),
            ("skills", "Development, Finance"),
            ("goals", "Grow business"),
        ])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/dashboard");

    let page = get_json(&app, &jar, "/profile").await;
    assert_eq!(page["user"]["name"], "Ada");
    assert_eq!(
        page["user"]["skills"],
        serde_json::json!(["Development", "Finance"])
    );
    assert_eq!(page["user"]["goals"], serde_json::json!(["Grow business"]));
}

#[actix_web::test]
async fn admin_updates_roles() {
    let tmp = tempfile::tempdir().unwrap();
    let app = test::init_service(test_app(seeded_state(&tmp).await)).await;

    let jar = login(&app, ADMIN).await;
    let page = get_json(&app, &jar, "/admin/users").await;
    assert_eq!(page["users"].as_array().unwrap().len(), 3);

    for (user_id, role, expected) in [
        ("3", "HEADMASTER", StatusCode::BAD_REQUEST),
        ("999", "MENTOR", StatusCode::BAD_REQUEST),
        ("3", "MENTOR", StatusCode::OK),
    ] {
        let req = with_cookies(test::TestRequest::post().uri("/admin/users"), &jar)
            .set_form([("user_id", user_id), ("role", role)])
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), expected, "user {} role {}", user_id, role);
    }

    // The promoted mentee now passes the mentor gate.
    let promoted_jar = login(&app, MENTEE).await;
    let page = get_json(&app, &promoted_jar, "/availability").await;
    assert!(page["availability"].as_array().unwrap().is_empty());
}

#[actix_web::test]
async fn admin_sees_all_sessions() {
    let tmp = tempfile::tempdir().unwrap();
    let app = test::init_service(test_app(seeded_state(&tmp).await)).await;

    let mentor_jar = login(&app, MENTOR).await;
    let req = with_cookies(test::TestRequest::post().uri("/availability"), &mentor_jar)
        .set_form([
            ("day_of_week", "Monday"),
            ("start_time", "09:00"),
            ("end_time", "10:00"),
        ])
        .to_request();
    test::call_service(&app, req).await;

    let mentee_jar = login(&app, MENTEE).await;
    let req = with_cookies(test::TestRequest::post().uri("/sessions"), &mentee_jar)
        .set_form([
            ("action", "create"),
            ("mentor_id", "2"),
            ("start_time", "2026-09-07T10:00"),
            ("end_time", "2026-09-07T11:00"),
        ])
        .to_request();
    test::call_service(&app, req).await;

    let admin_jar = login(&app, ADMIN).await;
    let page = get_json(&app, &admin_jar, "/admin/sessions").await;
    let sessions = page["sessions"].as_array().unwrap();
    assert_eq!(sessions.len(), 1);
    assert_eq!(sessions[0]["mentor_id"], 2);
    assert_eq!(sessions[0]["mentee_id"], 3);
}
