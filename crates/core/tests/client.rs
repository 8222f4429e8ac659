//! End-to-end client behaviour against a recording stub transport.

use std::sync::Mutex;

use chrono::{Datelike, Duration, NaiveDate, Utc};
use thumbtack_core::{
    Client, ClientConfig, Error, ErrorKind, HttpRequest, HttpResponse, Operation, PostsAddInput,
    PostsAllInput, PostsGetInput, PostsRecentInput, Registry, TagsRenameInput, Transport,
    TransportError,
};

/// Returns one canned response and records every request it sees.
struct Stub {
    response: HttpResponse,
    requests: Mutex<Vec<HttpRequest>>,
}

impl Stub {
    fn json(body: &str) -> Self {
        Self::with(HttpResponse::ok(body))
    }

    fn with(response: HttpResponse) -> Self {
        Self {
            response,
            requests: Mutex::new(Vec::new()),
        }
    }

    fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    fn only_url(&self) -> String {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request");
        requests[0].url.clone()
    }
}

impl Transport for Stub {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.lock().unwrap().push(request.clone());
        Ok(self.response.clone())
    }
}

fn client(stub: &Stub) -> Client<&Stub> {
    Client::new(ClientConfig::new("user:ABC123"), stub).unwrap()
}

#[test]
fn posts_delete_returns_done() {
    let stub = Stub::json(r#"{"result_code":"done"}"#);
    let result = client(&stub).posts_delete("https://example.com").unwrap();
    assert_eq!(result.result_code.as_deref(), Some("done"));
    assert_eq!(
        stub.only_url(),
        "https://api.pinboard.in/v1/posts/delete?auth_token=user%3AABC123&format=json&url=https%3A%2F%2Fexample.com"
    );
}

#[test]
fn posts_add_with_too_many_tags_sends_nothing() {
    let stub = Stub::json(r#"{"result_code":"done"}"#);
    let mut input = PostsAddInput::new("https://example.com", "Example");
    input.tags = (0..101).map(|i| format!("t{i}")).collect();

    let err = client(&stub).posts_add(&input).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
    assert!(stub.requests().is_empty());
}

#[test]
fn posts_add_rejected_by_server() {
    let stub = Stub::json(r#"{"result_code":"item already exists"}"#);
    let input = PostsAddInput::new("https://example.com", "Example");

    let err = client(&stub).posts_add(&input).unwrap_err();
    assert!(matches!(err, Error::UnexpectedResponse { ref result_code } if result_code == "item already exists"));
}

#[test]
fn posts_add_sends_flags_only_when_set() {
    let stub = Stub::json(r#"{"result_code":"done"}"#);
    let input = PostsAddInput {
        shared: Some(false),
        to_read: Some(true),
        tags: vec!["rust".into(), "cli".into()],
        ..PostsAddInput::new("https://example.com", "Example")
    };
    client(&stub).posts_add(&input).unwrap();

    let url = stub.only_url();
    assert!(url.starts_with("https://api.pinboard.in/v1/posts/add?"));
    assert!(url.contains("shared=no"));
    assert!(url.contains("toread=yes"));
    assert!(url.contains("tags=rust%20cli"));
    assert!(url.contains("description=Example"));
    assert!(!url.contains("replace="));
    assert!(!url.contains("extended="));
}

#[test]
fn posts_all_decodes_bookmarks() {
    let stub = Stub::json(
        r#"[{"href":"https://example.com","description":"Example","extended":"",
            "meta":"2bb37ba4","hash":"7231c117","time":"2023-03-08T03:58:53Z",
            "shared":"no","toread":"yes","tags":"tag1 tag2"}]"#,
    );
    let bookmarks = client(&stub).posts_all(&PostsAllInput::default()).unwrap();
    assert_eq!(bookmarks.len(), 1);
    assert_eq!(bookmarks[0].tags, vec!["tag1", "tag2"]);
    assert!(bookmarks[0].toread);
    assert!(!bookmarks[0].shared);
    assert!(stub.only_url().contains("meta=yes"));
}

#[test]
fn posts_recent_sends_default_count() {
    let stub = Stub::json(r#"{"date":"2023-03-19T15:00:00Z","user":"someone","posts":[]}"#);
    let posts = client(&stub)
        .posts_recent(&PostsRecentInput::default())
        .unwrap();
    assert_eq!(posts.user, "someone");
    assert!(posts.posts.is_empty());
    assert!(stub.only_url().contains("count=15"));
}

#[test]
fn posts_dates_accepts_string_counts() {
    let stub = Stub::json(r#"{"user":"someone","tag":"","dates":{"2023-03-19":4,"2023-03-12":"1"}}"#);
    let dates = client(&stub).posts_dates(&[]).unwrap();
    let day = NaiveDate::from_ymd_opt(2023, 3, 12).unwrap();
    assert_eq!(dates.dates.get(&day), Some(&1));
    assert_eq!(dates.dates.keys().next().map(|d| d.day()), Some(12));
}

#[test]
fn posts_suggest_merges_parts() {
    let stub = Stub::json(r#"[{"popular":["fonts"]},{"recommended":["typography","web"]}]"#);
    let suggestions = client(&stub).posts_suggest("https://example.com").unwrap();
    assert_eq!(suggestions.popular, vec!["fonts"]);
    assert_eq!(suggestions.recommended, vec!["typography", "web"]);
}

#[test]
fn posts_update_decodes_time() {
    let stub = Stub::json(r#"{"update_time":"2023-03-19T15:57:02Z"}"#);
    let update = client(&stub).posts_update().unwrap();
    assert_eq!(
        update.update_time.map(|t| t.to_rfc3339()),
        Some("2023-03-19T15:57:02+00:00".to_string())
    );
}

#[test]
fn tags_get_counts_entries() {
    let stub = Stub::json(r#"{"books":1,"custom":"3"}"#);
    let tags = client(&stub).tags_get().unwrap();
    assert_eq!(tags.count, 2);
    assert_eq!(tags.tags.get("custom"), Some(&3));
}

#[test]
fn tags_delete_checks_result_field() {
    let stub = Stub::json(r#"{"result":"done"}"#);
    client(&stub).tags_delete("obsolete").unwrap();
    assert!(stub.only_url().contains("tag=obsolete"));

    let stub = Stub::json(r#"{"result_code":"done"}"#);
    let err = client(&stub).tags_delete("obsolete").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnexpectedResponse);
}

#[test]
fn tags_rename_requires_both_names() {
    let stub = Stub::json(r#"{"result":"done"}"#);
    let input = TagsRenameInput {
        old: Some("golang".into()),
        new: None,
    };
    let err = client(&stub).tags_rename(&input).unwrap_err();
    assert!(matches!(err, Error::MissingField { field: "new" }));
    assert!(stub.requests().is_empty());

    client(&stub)
        .tags_rename(&TagsRenameInput::new("golang", "go"))
        .unwrap();
    assert!(stub.only_url().contains("new=go&old=golang"));
}

#[test]
fn notes_by_id_uses_id_suffix() {
    let stub = Stub::json(
        r#"{"id":"1e5467e342662e6c239c","hash":"e652910a","title":"Test Note 01",
            "length":"11","text":"hello world","created_at":"2023-03-19 14:35:16",
            "updated_at":"2023-03-19 14:35:16"}"#,
    );
    let note = client(&stub).notes_by_id("1e5467e342662e6c239c").unwrap();
    assert_eq!(note.title, "Test Note 01");
    assert_eq!(note.length, 11);
    assert!(stub
        .only_url()
        .starts_with("https://api.pinboard.in/v1/notes/1e5467e342662e6c239c?"));
}

#[test]
fn notes_by_id_keeps_raw_body_on_decode_failure() {
    let stub = Stub::json("<html>oops</html>");
    let err = client(&stub).notes_by_id("abc").unwrap_err();
    match err {
        Error::UnmarshalResponse { body, .. } => assert_eq!(body, b"<html>oops</html>"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn notes_by_id_requires_id() {
    let stub = Stub::json("{}");
    let err = client(&stub).notes_by_id("").unwrap_err();
    assert!(matches!(err, Error::MissingField { field: "id" }));
    assert!(stub.requests().is_empty());
}

#[test]
fn notes_list_rejects_count_mismatch() {
    let stub = Stub::json(r#"{"count":2,"notes":[]}"#);
    let err = client(&stub).notes_list().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnmarshalResponse);
}

#[test]
fn user_secret_requires_result() {
    let stub = Stub::json(r#"{"result":"0417237f06a144c09a5c"}"#);
    let secret = client(&stub).user_secret().unwrap();
    assert_eq!(secret.result.as_deref(), Some("0417237f06a144c09a5c"));

    let stub = Stub::json(r#"{"result":""}"#);
    let err = client(&stub).user_secret().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnexpectedResponse);
}

#[test]
fn empty_registry_path_sends_nothing() {
    let stub = Stub::json(r#"{"result":"done"}"#);
    let mut registry = Registry::new();
    registry.set_path(Operation::TagsGet, "");
    let client = Client::new(
        ClientConfig::new("user:ABC123").with_registry(registry),
        &stub,
    )
    .unwrap();

    let err = client.tags_get().unwrap_err();
    assert!(matches!(err, Error::OperationPathNotSet(Operation::TagsGet)));
    assert!(stub.requests().is_empty());
}

#[test]
fn custom_endpoint_and_user_agent() {
    let stub = Stub::json(r#"{"update_time":"2023-03-19T15:57:02Z"}"#);
    let config = ClientConfig::new("user:ABC123")
        .with_endpoint("http://127.0.0.1:8080/v1/")
        .with_user_agent("thumbtack-tests/1.0");
    Client::new(config, &stub).unwrap().posts_update().unwrap();

    let requests = stub.requests();
    assert_eq!(requests.len(), 1);
    assert!(requests[0]
        .url
        .starts_with("http://127.0.0.1:8080/v1/posts/update?"));
    assert_eq!(requests[0].header("user-agent"), Some("thumbtack-tests/1.0"));
}

#[test]
fn default_user_agent_names_the_library() {
    let stub = Stub::json(r#"{"update_time":"2023-03-19T15:57:02Z"}"#);
    client(&stub).posts_update().unwrap();
    let requests = stub.requests();
    let agent = requests[0].header("User-Agent").unwrap();
    assert!(agent.starts_with("github.com/cloudbridgeuy/thumbtack@v"));
}

#[test]
fn non_success_status_is_reported() {
    let stub = Stub::with(HttpResponse {
        status: 401,
        reason: "Unauthorized".to_string(),
        body: b"API requires authentication".to_vec(),
    });
    let err = client(&stub).tags_get().unwrap_err();
    assert!(matches!(err, Error::BadStatusCode { code: 401, ref status } if status == "Unauthorized"));
}

fn four_tags() -> Vec<String> {
    ["a", "b", "c", "d"].iter().map(|t| t.to_string()).collect()
}

fn assert_rejected_locally<R: std::fmt::Debug>(stub: &Stub, result: Result<R, Error>) {
    let err = result.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
    assert!(stub.requests().is_empty(), "no request may be sent");
}

#[test]
fn filter_operations_reject_four_tags_without_sending() {
    let stub = Stub::json("{}");
    let client = client(&stub);

    assert_rejected_locally(&stub, client.posts_dates(&four_tags()));
    assert_rejected_locally(
        &stub,
        client.posts_all(&PostsAllInput {
            tags: four_tags(),
            ..PostsAllInput::default()
        }),
    );
    assert_rejected_locally(
        &stub,
        client.posts_get(&PostsGetInput {
            tags: four_tags(),
            ..PostsGetInput::default()
        }),
    );
    assert_rejected_locally(
        &stub,
        client.posts_recent(&PostsRecentInput {
            count: None,
            tags: four_tags(),
        }),
    );
}

#[test]
fn posts_recent_count_out_of_range_sends_nothing() {
    let stub = Stub::json("{}");
    let client = client(&stub);
    for count in [0, 101] {
        assert_rejected_locally(
            &stub,
            client.posts_recent(&PostsRecentInput {
                count: Some(count),
                tags: Vec::new(),
            }),
        );
    }
}

#[test]
fn posts_add_future_timestamp_sends_nothing() {
    let stub = Stub::json(r#"{"result_code":"done"}"#);
    let input = PostsAddInput {
        timestamp: Some(Utc::now() + Duration::minutes(30)),
        ..PostsAddInput::new("https://example.com", "Example")
    };
    assert_rejected_locally(&stub, client(&stub).posts_add(&input));
}
