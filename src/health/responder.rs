//! HTTP liveness responder.

use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

/// Body returned for every liveness request.
pub const HEALTHY_BODY: &str = "Healthy";

/// Answers every request with `200 Healthy`.
pub struct HealthResponder {
    router: Router,
}

impl HealthResponder {
    pub fn new() -> Self {
        Self {
            router: Self::build_router(),
        }
    }

    /// Build the Axum router. A fallback catches every method and path.
    pub fn build_router() -> Router {
        Router::new()
            .fallback(healthy)
            .layer(TraceLayer::new_for_http())
    }

    /// Serve until the process exits.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "Health responder listening");

        axum::serve(listener, self.router).await
    }

    /// Bind `address` and serve in a detached task.
    ///
    /// Failures are logged from inside the task; the caller never learns of them.
    pub fn spawn(self, address: String) {
        tokio::spawn(async move {
            let listener = match TcpListener::bind(&address).await {
                Ok(l) => l,
                Err(e) => {
                    tracing::error!(
                        address = %address,
                        error = %e,
                        "Health responder failed to bind"
                    );
                    return;
                }
            };

            if let Err(e) = self.run(listener).await {
                tracing::error!(address = %address, error = %e, "Health responder stopped");
            }
        });
    }
}

async fn healthy() -> &'static str {
    HEALTHY_BODY
}
