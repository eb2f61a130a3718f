//! Operation Handlers
//!
//! `view`, `edit` and `save` run behind the dispatcher and always receive a
//! validated title. `root` serves everything no operation prefix claims and
//! never touches the store.
//!
//! | Handler | Page exists | Page absent |
//! |---|---|---|
//! | view | render `view` | 302 to `/edit/<title>` |
//! | edit | render `edit` | render `edit` with an empty body |
//! | save | overwrite, 302 to `/view/<title>` | create, 302 to `/view/<title>` |
//!
//! The front page renders its own template whether or not it exists.
//!
//! `save` reads the `body` field as raw bytes: the urlencoded request body
//! first, then the query string. Any other content type, or no field at
//! all, saves an empty page.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::{FromRequest, Request};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use percent_encoding::percent_decode;

use super::state::WikiState;
use crate::observability::{Event, Logger};
use crate::store::StoreError;
use crate::wiki::policy::EDIT_TEMPLATE;
use crate::wiki::{EditPolicy, Page, PagePolicy, Title, WikiResult};

/// Form field the edit page submits
pub const BODY_FIELD: &str = "body";

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// `GET /view/<title>`
pub async fn view(state: Arc<WikiState>, title: Title, _req: Request) -> WikiResult<Response> {
    let policy = state.policy();
    let template = policy.view_template(&title);

    let page = match state.store().load(&title) {
        Ok(page) => page,
        Err(err) if policy.is_front_page(&title) => {
            log_load_failure(&title, &err);
            Page::empty(title)
        }
        Err(err) => {
            log_load_failure(&title, &err);
            return Ok(found(&format!("/edit/{}", title)));
        }
    };

    render(&state, template, &page)
}

/// `GET /edit/<title>`
pub async fn edit(state: Arc<WikiState>, title: Title, _req: Request) -> WikiResult<Response> {
    let page = match state.store().load(&title) {
        Ok(page) => page,
        Err(err) if err.is_not_exist() => Page::empty(title),
        Err(err) => match state.policy().edit() {
            EditPolicy::Strict => {
                Logger::error(
                    Event::PageLoadFailed,
                    &[("title", title.as_str()), ("error", &err.to_string())],
                );
                return Err(err.into());
            }
            EditPolicy::Lenient => {
                log_load_failure(&title, &err);
                Page::empty(title)
            }
        },
    };

    render(&state, EDIT_TEMPLATE, &page)
}

/// `POST /save/<title>` with form field `body`
pub async fn save(state: Arc<WikiState>, title: Title, req: Request) -> WikiResult<Response> {
    let body = match form_value(req, BODY_FIELD).await {
        Ok(body) => body,
        Err(rejection) => return Ok(rejection.into_response()),
    };

    if let Err(err) = state.store().save(&title, &body) {
        Logger::error(
            Event::PageSaveFailed,
            &[("title", title.as_str()), ("error", &err.to_string())],
        );
        return Err(err.into());
    }

    Logger::info(
        Event::PageSaved,
        &[("title", title.as_str()), ("bytes", &body.len().to_string())],
    );
    Ok(found(&format!("/view/{}", title)))
}

/// Any path outside the operation prefixes
pub fn root(policy: &PagePolicy, path: &str) -> Response {
    let rest = path.strip_prefix('/').unwrap_or(path);
    if rest.is_empty() {
        return found(&format!("/view/{}", policy.front_page()));
    }
    format!("Hi there, I love {}!", rest).into_response()
}

/// 302 Found to `location`
pub fn found(location: &str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location.to_string())]).into_response()
}

/// First `field` value of the request, undecoded beyond percent escapes
async fn form_value(req: Request, field: &str) -> Result<Vec<u8>, BytesRejection> {
    let query = req.uri().query().map(|q| q.as_bytes().to_vec());
    let is_form = req
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(is_urlencoded);

    let mut value = None;
    if is_form {
        let body = Bytes::from_request(req, &()).await?;
        value = find_field(&body, field);
    }

    Ok(value
        .or_else(|| query.and_then(|q| find_field(&q, field)))
        .unwrap_or_default())
}

fn is_urlencoded(content_type: &str) -> bool {
    content_type
        .split(';')
        .next()
        .is_some_and(|mime| mime.trim().eq_ignore_ascii_case(FORM_CONTENT_TYPE))
}

/// Decoded value of the first `field` pair in urlencoded `input`
pub fn find_field(input: &[u8], field: &str) -> Option<Vec<u8>> {
    input.split(|b| *b == b'&').find_map(|pair| {
        let (key, value) = match pair.iter().position(|b| *b == b'=') {
            Some(eq) => (&pair[..eq], &pair[eq + 1..]),
            None => (pair, &pair[pair.len()..]),
        };
        (form_decode(key) == field.as_bytes()).then(|| form_decode(value))
    })
}

fn form_decode(raw: &[u8]) -> Vec<u8> {
    let spaced: Vec<u8> = raw
        .iter()
        .map(|b| if *b == b'+' { b' ' } else { *b })
        .collect();
    percent_decode(&spaced).collect()
}

fn render(state: &WikiState, template: &str, page: &Page) -> WikiResult<Response> {
    match state.renderer().render(template, page) {
        Ok(html) => Ok(Html(html).into_response()),
        Err(err) => {
            Logger::error(
                Event::RenderFailed,
                &[
                    ("template", template),
                    ("title", page.title().as_str()),
                    ("error", &err.to_string()),
                ],
            );
            Err(err.into())
        }
    }
}

fn log_load_failure(title: &Title, err: &StoreError) {
    if !err.is_not_exist() {
        Logger::warn(
            Event::PageLoadFailed,
            &[("title", title.as_str()), ("error", &err.to_string())],
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use axum::body::{to_bytes, Body};

    use crate::render::Renderer;
    use crate::store::{MemoryStore, PageStore};

    fn title(raw: &str) -> Title {
        Title::parse(raw).unwrap()
    }

    fn state_with(store: Arc<dyn PageStore>, edit: EditPolicy) -> Arc<WikiState> {
        let renderer = Renderer::from_sources(
            [
                ("view", "view:{{ title }}:{{ body }}"),
                ("edit", "edit:{{ title }}:{{ body }}"),
                ("front", "front:{{ title }}:{{ body }}"),
            ],
            &["view", "edit", "front"],
        )
        .unwrap();
        let policy = PagePolicy::new(title("FrontPage"), "front", edit);
        Arc::new(WikiState::new(store, renderer, policy))
    }

    fn empty_request() -> Request {
        axum::http::Request::builder().body(Body::empty()).unwrap()
    }

    fn form_request(body: &'static str) -> Request {
        axum::http::Request::builder()
            .method("POST")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .unwrap()
    }

    async fn text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn location(response: &Response) -> &str {
        response.headers()[header::LOCATION].to_str().unwrap()
    }

    #[tokio::test]
    async fn test_view_existing_page() {
        let store = Arc::new(MemoryStore::new());
        store.save(&title("Notes"), b"some notes").unwrap();
        let state = state_with(store, EditPolicy::Lenient);

        let response = view(state, title("Notes"), empty_request()).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(text(response).await, "view:Notes:some notes");
    }

    #[tokio::test]
    async fn test_view_absent_redirects_to_edit() {
        let state = state_with(Arc::new(MemoryStore::new()), EditPolicy::Lenient);

        let response = view(state, title("Missing"), empty_request()).await.unwrap();
        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(location(&response), "/edit/Missing");
    }

    #[tokio::test]
    async fn test_view_front_page_absent_and_present() {
        let store = Arc::new(MemoryStore::new());
        let state = state_with(store.clone(), EditPolicy::Lenient);

        let response = view(state.clone(), title("FrontPage"), empty_request())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(text(response).await, "front:FrontPage:");

        store.save(&title("FrontPage"), b"welcome").unwrap();
        let response = view(state, title("FrontPage"), empty_request()).await.unwrap();
        assert_eq!(text(response).await, "front:FrontPage:welcome");
    }

    #[tokio::test]
    async fn test_edit_absent_shows_empty_form() {
        let state = state_with(Arc::new(MemoryStore::new()), EditPolicy::Lenient);

        let response = edit(state, title("Fresh"), empty_request()).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(text(response).await, "edit:Fresh:");
    }

    #[tokio::test]
    async fn test_save_then_view() {
        let store = Arc::new(MemoryStore::new());
        let state = state_with(store.clone(), EditPolicy::Lenient);

        let response = save(state.clone(), title("Draft"), form_request("body=hello+there"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(location(&response), "/view/Draft");
        assert_eq!(store.load(&title("Draft")).unwrap().body(), b"hello there");
    }

    #[tokio::test]
    async fn test_save_without_body_field_stores_empty_page() {
        let store = Arc::new(MemoryStore::new());
        let state = state_with(store.clone(), EditPolicy::Lenient);

        let response = save(state, title("Blank"), form_request("")).await.unwrap();
        assert_eq!(response.status(), StatusCode::FOUND);
        assert!(store.load(&title("Blank")).unwrap().body().is_empty());
    }

    #[tokio::test]
    async fn test_save_keeps_non_utf8_bytes() {
        let store = Arc::new(MemoryStore::new());
        let state = state_with(store.clone(), EditPolicy::Lenient);

        save(state, title("Raw"), form_request("body=%FF%00a+b%2B"))
            .await
            .unwrap();
        assert_eq!(store.load(&title("Raw")).unwrap().body(), b"\xFF\x00a b+");
    }

    #[tokio::test]
    async fn test_save_without_content_type_stores_empty_page() {
        let store = Arc::new(MemoryStore::new());
        let state = state_with(store.clone(), EditPolicy::Lenient);
        let request = axum::http::Request::builder()
            .method("POST")
            .body(Body::from("body=ignored"))
            .unwrap();

        let response = save(state, title("Plain"), request).await.unwrap();
        assert_eq!(response.status(), StatusCode::FOUND);
        assert!(store.load(&title("Plain")).unwrap().body().is_empty());
    }

    #[tokio::test]
    async fn test_save_falls_back_to_query_string() {
        let store = Arc::new(MemoryStore::new());
        let state = state_with(store.clone(), EditPolicy::Lenient);
        let request = axum::http::Request::builder()
            .uri("/save/Query?body=from+query")
            .body(Body::empty())
            .unwrap();

        save(state, title("Query"), request).await.unwrap();
        assert_eq!(store.load(&title("Query")).unwrap().body(), b"from query");
    }

    #[test]
    fn test_find_field() {
        assert_eq!(find_field(b"a=1&body=x%20y&body=z", "body"), Some(b"x y".to_vec()));
        assert_eq!(find_field(b"bo%64y=encoded+key", "body"), Some(b"encoded key".to_vec()));
        assert_eq!(find_field(b"body", "body"), Some(Vec::new()));
        assert_eq!(find_field(b"title=x&&", "body"), None);
        assert_eq!(find_field(b"", "body"), None);
    }

    #[test]
    fn test_is_urlencoded() {
        assert!(is_urlencoded("application/x-www-form-urlencoded"));
        assert!(is_urlencoded("Application/X-WWW-Form-Urlencoded; charset=utf-8"));
        assert!(!is_urlencoded("multipart/form-data; boundary=x"));
        assert!(!is_urlencoded("text/plain"));
    }

    #[test]
    fn test_root_redirects_to_front_page() {
        let policy = PagePolicy::new(title("Home"), "front", EditPolicy::Lenient);
        let response = root(&policy, "/");
        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(location(&response), "/view/Home");
    }

    #[tokio::test]
    async fn test_root_placeholder() {
        let policy = PagePolicy::new(title("Home"), "front", EditPolicy::Lenient);
        let response = root(&policy, "/gophers");
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(text(response).await, "Hi there, I love gophers!");
    }
}
