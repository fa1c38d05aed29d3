mod common;

use pexels::Error;
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::{client, requested_page, unreachable_client, video_json, API_KEY};

#[tokio::test]
async fn search_videos_decodes_results() {
    let server = MockServer::start().await;

    let body = json!({
        "page": 1,
        "per_page": 2,
        "total_results": 20475,
        "next_page": "https://api.pexels.com/videos/search/?page=2&per_page=2&query=ocean",
        "url": "https://www.pexels.com/videos/",
        "videos": [video_json(3), video_json(4)]
    });

    Mock::given(method("GET"))
        .and(path("/videos/search"))
        .and(query_param("query", "ocean"))
        .and(query_param("per_page", "2"))
        .and(query_param("page", "1"))
        .and(header("Authorization", API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(&server)
        .await;

    let result = client(&server).search_videos("ocean", 2, 1).await.unwrap();

    assert_eq!(result.total_results(), 20475);
    assert!(result.next_page().is_some());

    let videos = result.into_videos();
    assert_eq!(videos.len(), 2);
    assert_eq!(videos[0].id(), 3);
    assert_eq!(videos[0].duration(), 15.0);
    assert_eq!(videos[0].video_files()[0].file_type(), "video/mp4");
    assert_eq!(videos[1].id(), 4);
}

#[tokio::test]
async fn search_videos_transport_failure_has_no_partial_result() {
    let client = unreachable_client();

    let result = client.search_videos("ocean", 15, 1).await;

    assert!(matches!(result, Err(Error::Request(_))));
}

#[tokio::test]
async fn popular_videos_decodes_results() {
    let server = MockServer::start().await;

    let body = json!({
        "page": 3,
        "per_page": 1,
        "total_results": 4100,
        "url": "https://www.pexels.com/videos/",
        "videos": [video_json(11)]
    });

    Mock::given(method("GET"))
        .and(path("/videos/popular"))
        .and(query_param("per_page", "1"))
        .and(query_param("page", "3"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("X-Ratelimit-Remaining", "17")
                .set_body_json(body),
        )
        .mount(&server)
        .await;

    let client = client(&server);
    let result = client.popular_videos(1, 3).await.unwrap();

    assert_eq!(result.page(), 3);
    assert_eq!(result.url(), "https://www.pexels.com/videos/");
    assert_eq!(result.videos()[0].id(), 11);
    assert_eq!(client.remaining_requests(), Some(17));
}

#[tokio::test]
async fn video_is_looked_up_by_id() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/videos/videos/2499611"))
        .respond_with(ResponseTemplate::new(200).set_body_json(video_json(2499611)))
        .mount(&server)
        .await;

    let video = client(&server).video(2499611).await.unwrap();

    assert_eq!(video.id(), 2499611);
    assert_eq!(video.user().map(|user| user.name()), Some("Pressmaster"));
    assert_eq!(video.video_pictures()[0].nr(), 0);
}

#[tokio::test]
async fn malformed_bodies_are_decode_errors() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/videos/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"page":1,"videos":[{"id":"#))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/videos/popular"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "page": 1,
            "per_page": 1,
            "total_results": "many",
            "url": "https://www.pexels.com/videos/",
            "videos": []
        })))
        .mount(&server)
        .await;

    let mut video = video_json(1);
    video["duration"] = json!("fifteen");

    Mock::given(method("GET"))
        .and(path("/videos/videos/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(video))
        .mount(&server)
        .await;

    let client = client(&server);

    assert!(matches!(
        client.search_videos("ocean", 1, 1).await,
        Err(Error::InvalidResponse(_))
    ));
    assert!(matches!(
        client.popular_videos(1, 1).await,
        Err(Error::InvalidResponse(_))
    ));
    assert!(matches!(client.video(1).await, Err(Error::InvalidResponse(_))));
}

#[tokio::test]
async fn unauthorized_is_a_status_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/videos/search"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({ "code": "Unauthorized" })))
        .mount(&server)
        .await;

    match client(&server).search_videos("ocean", 1, 1).await {
        Err(Error::Status { status, message }) => {
            assert_eq!(status.as_u16(), 401);
            assert_eq!(message, "Unauthorized");
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[tokio::test]
async fn random_video_returns_the_single_popular_video() {
    let server = MockServer::start().await;

    let body = json!({
        "page": 12,
        "per_page": 1,
        "total_results": 4100,
        "url": "https://www.pexels.com/videos/",
        "videos": [video_json(77)]
    });

    Mock::given(method("GET"))
        .and(path("/videos/popular"))
        .and(query_param("per_page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(&server)
        .await;

    let video = client(&server).random_video().await.unwrap();

    assert_eq!(video.map(|video| video.id()), Some(77));
    assert!(requested_page(&server).await <= 1000);
}

#[tokio::test]
async fn random_video_is_none_unless_exactly_one_video() {
    for count in [0, 3] {
        let server = MockServer::start().await;

        let videos: Vec<_> = (0..count).map(video_json).collect();

        Mock::given(method("GET"))
            .and(path("/videos/popular"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "page": 1,
                "per_page": 1,
                "total_results": count,
                "url": "https://www.pexels.com/videos/",
                "videos": videos
            })))
            .mount(&server)
            .await;

        let video = client(&server).random_video().await.unwrap();

        assert!(video.is_none(), "expected no video for {count} results");
    }
}
