use tokio::signal;

/// Resolves on Ctrl+C. Never resolves when the handler cannot be installed, so the server keeps
/// running instead of shutting down immediately.
pub async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        crate::error::log_error(&e);
        std::future::pending::<()>().await;
    }

    #[cfg(not(windows))]
    println!();
    tracing::info!("Ctrl+C received, shutting down.");
}

#[cfg(test)]
mod test {
    use std::time::Duration;

    use super::*;

    #[tokio::test]
    async fn waits_without_a_signal() {
        let res = tokio::time::timeout(Duration::from_millis(50), shutdown_signal()).await;
        assert!(res.is_err());
    }
}
