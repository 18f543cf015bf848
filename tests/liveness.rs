//! Health responder over a real socket.

use std::time::Duration;
use tokio::net::TcpListener;

use endpoint_poller::config::PollerConfig;
use endpoint_poller::health::HEALTHY_BODY;
use endpoint_poller::monitor::Poller;
use endpoint_poller::HealthResponder;

mod common;

async fn start_responder() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let _ = HealthResponder::new().run(listener).await;
    });
    format!("http://{}", addr)
}

fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}

#[tokio::test]
async fn test_responds_healthy_to_any_request() {
    let base = start_responder().await;
    let client = client();

    for path in ["/", "/health", "/some/other/path"] {
        let res = client.get(format!("{}{}", base, path)).send().await.unwrap();
        assert_eq!(res.status(), 200);
        assert_eq!(res.text().await.unwrap(), HEALTHY_BODY);
    }

    let res = client.post(format!("{}/submit", base)).body("x").send().await.unwrap();
    assert_eq!(res.status(), 200);
    assert_eq!(res.text().await.unwrap(), HEALTHY_BODY);
}

#[tokio::test]
async fn test_responds_during_polling_round() {
    let base = start_responder().await;
    let slow = common::start_slow_endpoint(Duration::from_millis(500)).await;

    let config = PollerConfig::new(Duration::from_secs(1), vec![format!("http://{}", slow)]);
    let mut poller = Poller::new(config, common::direct_caller());
    let round = tokio::spawn(async move { poller.run_round().await });

    tokio::time::sleep(Duration::from_millis(50)).await;
    let res = client().get(format!("{}/", base)).send().await.unwrap();
    assert_eq!(res.status(), 200);
    assert!(!round.is_finished(), "round should still be waiting on the slow endpoint");

    let summary = round.await.unwrap();
    assert_eq!(summary.succeeded(), 1);
}
