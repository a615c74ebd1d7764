//! Integration tests for paginated ticket listing against a mock server.
//!
//! These tests verify the page loop's stop conditions: an empty page after
//! the first, the configured ceiling, and the end-of-data signal, plus the
//! unfiltered-then-solved concatenation within a page.

use wiremock::matchers::{header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

use zendesk_api::{
    AccountUrl, Page, Password, Username, ZendeskClient, ZendeskConfig,
};

const END_USER: &str = "end-user@example.com";

async fn create_test_client(server: &MockServer, ceiling: u32) -> ZendeskClient {
    let config = ZendeskConfig::builder()
        .account_url(AccountUrl::new(server.uri()).unwrap())
        .username(Username::new("agent@example.com").unwrap())
        .password(Password::new("secret").unwrap())
        .page_ceiling(ceiling)
        .build()
        .unwrap();
    ZendeskClient::new(config)
}

fn records(subjects: &[&str]) -> String {
    let mut body = String::from("<records type=\"array\">");
    for subject in subjects {
        body.push_str(&format!(
            "<ticket><subject>{subject}</subject></ticket>"
        ));
    }
    body.push_str("</records>");
    body
}

fn xml_response(body: String) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .insert_header("Content-Type", "application/xml")
        .set_body_string(body)
}

/// Mounts the pair of mocks one page number answers with: the unfiltered
/// call and the `filter=solved` call.
async fn mount_page(server: &MockServer, page: u32, open: &[&str], solved: &[&str]) {
    Mock::given(method("GET"))
        .and(path("/requests.xml"))
        .and(header("X-On-Behalf-Of", END_USER))
        .and(query_param("page", page.to_string()))
        .and(query_param_is_missing("filter"))
        .respond_with(xml_response(records(open)))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/requests.xml"))
        .and(header("X-On-Behalf-Of", END_USER))
        .and(query_param("page", page.to_string()))
        .and(query_param("filter", "solved"))
        .respond_with(xml_response(records(solved)))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_single_page_concatenates_open_then_solved() {
    let server = MockServer::start().await;
    mount_page(&server, 1, &["open-1", "open-2"], &["solved-1"]).await;

    let client = create_test_client(&server, 25).await;
    let page = client.tickets_for_user_page(END_USER, 1).await.unwrap();

    let Page::Items(tickets) = page else {
        panic!("expected items");
    };
    let subjects: Vec<&str> = tickets
        .iter()
        .filter_map(|t| t.subject.as_deref())
        .collect();
    assert_eq!(subjects, ["open-1", "open-2", "solved-1"]);
}

#[tokio::test]
async fn test_all_pages_stop_on_first_empty_page() {
    let server = MockServer::start().await;
    mount_page(&server, 1, &["a"], &[]).await;
    mount_page(&server, 2, &["b"], &[]).await;
    mount_page(&server, 3, &["c"], &["c-solved"]).await;
    mount_page(&server, 4, &[], &[]).await;
    // a fifth page must never be requested
    Mock::given(method("GET"))
        .and(path("/requests.xml"))
        .and(query_param("page", "5"))
        .respond_with(xml_response(records(&["never"])))
        .expect(0)
        .mount(&server)
        .await;

    let client = create_test_client(&server, 25).await;
    let tickets = client.all_tickets_for_user(END_USER).await.unwrap();

    let subjects: Vec<&str> = tickets
        .iter()
        .filter_map(|t| t.subject.as_deref())
        .collect();
    assert_eq!(subjects, ["a", "b", "c", "c-solved"]);
}

#[tokio::test]
async fn test_all_pages_respect_the_ceiling() {
    let server = MockServer::start().await;
    mount_page(&server, 1, &["a"], &[]).await;
    mount_page(&server, 2, &["b"], &[]).await;
    // data keeps coming, but the ceiling is 2
    Mock::given(method("GET"))
        .and(path("/requests.xml"))
        .and(query_param("page", "3"))
        .respond_with(xml_response(records(&["c"])))
        .expect(0)
        .mount(&server)
        .await;

    let client = create_test_client(&server, 2).await;
    let tickets = client.all_tickets_for_user(END_USER).await.unwrap();
    assert_eq!(tickets.len(), 2);
}

#[tokio::test]
async fn test_end_of_data_body_is_a_benign_stop() {
    let server = MockServer::start().await;
    mount_page(&server, 1, &["a"], &[]).await;
    // the service answers page 2 with an empty body instead of a document
    Mock::given(method("GET"))
        .and(path("/requests.xml"))
        .and(query_param("page", "2"))
        .and(query_param_is_missing("filter"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let client = create_test_client(&server, 25).await;
    let tickets = client.all_tickets_for_user(END_USER).await.unwrap();
    assert_eq!(tickets.len(), 1);
}

#[tokio::test]
async fn test_missing_page_is_a_benign_stop() {
    let server = MockServer::start().await;
    mount_page(&server, 1, &["a"], &[]).await;
    Mock::given(method("GET"))
        .and(path("/requests.xml"))
        .and(query_param("page", "2"))
        .and(query_param_is_missing("filter"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = create_test_client(&server, 25).await;
    let tickets = client.all_tickets_for_user(END_USER).await.unwrap();
    assert_eq!(tickets.len(), 1);
}

#[tokio::test]
async fn test_view_pagination_uses_the_rules_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rules/5.xml"))
        .and(query_param("page", "1"))
        .respond_with(xml_response(records(&["in-view"])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/rules/5.xml"))
        .and(query_param("page", "2"))
        .respond_with(xml_response(records(&[])))
        .mount(&server)
        .await;

    let client = create_test_client(&server, 25).await;
    let tickets = client.all_tickets_in_view(5).await.unwrap();
    assert_eq!(tickets.len(), 1);
    assert_eq!(tickets[0].subject.as_deref(), Some("in-view"));
}
