//! Common test utilities for the mocked PubMed and REACH integration tests

use reacher::{ClientConfig, PubMedClient, ReachClient, Reacher};
use wiremock::matchers::{method, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// FRIES document with a single activation event
#[allow(dead_code)]
pub const FRIES_SINGLE_ACTIVATION: &str = r#"{"events":{"frames":[{"type":"activation"}]}}"#;

/// Build a full EFetch response around the given abstract markup
#[allow(dead_code)]
pub fn efetch_record_with_abstract(abstract_xml: &str) -> String {
    format!(
        r#"<?xml version="1.0" ?>
<!DOCTYPE PubmedArticleSet PUBLIC "-//NLM//DTD PubMedArticle, 1st January 2023//EN" "https://dtd.nlm.nih.gov/ncbi/pubmed/out/pubmed_230101.dtd">
<PubmedArticleSet>
    <PubmedArticle>
        <MedlineCitation Status="MEDLINE" Owner="NLM">
            <PMID Version="1">12345</PMID>
            <Article>
                <Journal><Title>Signal Transduction Letters</Title></Journal>
                <ArticleTitle>Activation of Y by protein X</ArticleTitle>
                {abstract_xml}
                <AuthorList>
                    <Author>
                        <LastName>Rivera</LastName>
                        <ForeName>Ana</ForeName>
                    </Author>
                </AuthorList>
            </Article>
        </MedlineCitation>
    </PubmedArticle>
</PubmedArticleSet>"#
    )
}

/// Mount an EFetch mock returning the given XML body
#[allow(dead_code)]
pub async fn mount_efetch_response(mock_server: &MockServer, body: &str) {
    Mock::given(method("GET"))
        .and(path_regex(r"/efetch\.fcgi.*"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(body.to_string())
                .insert_header("content-type", "application/xml"),
        )
        .mount(mock_server)
        .await;
}

/// Mount a REACH mock returning the given JSON body
#[allow(dead_code)]
pub async fn mount_reach_response(mock_server: &MockServer, body: &str) {
    Mock::given(method("POST"))
        .and(path_regex(r"/api/text"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(body.to_string())
                .insert_header("content-type", "application/json"),
        )
        .mount(mock_server)
        .await;
}

/// Helper to create a PubMed client pointing at a mock server
#[allow(dead_code)]
pub fn create_mock_pubmed_client(mock_server: &MockServer) -> PubMedClient {
    let config = ClientConfig::new().with_pubmed_base_url(mock_server.uri());
    PubMedClient::with_config(config)
}

/// Helper to create a REACH client pointing at a mock server
#[allow(dead_code)]
pub fn create_mock_reach_client(mock_server: &MockServer) -> ReachClient {
    let config = ClientConfig::new().with_reach_base_url(mock_server.uri());
    ReachClient::with_config(config)
}

/// Helper to create a combined client pointing at two mock servers
#[allow(dead_code)]
pub fn create_mock_reacher(pubmed_server: &MockServer, reach_server: &MockServer) -> Reacher {
    let config = ClientConfig::new()
        .with_pubmed_base_url(pubmed_server.uri())
        .with_reach_base_url(reach_server.uri());
    Reacher::with_config(config)
}
